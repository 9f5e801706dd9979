// SPDX-License-Identifier: MPL-2.0
//! Interactive page components.
//!
//! Components hold their own state and talk to the page only through the
//! ports in [`crate::application::port`].
//!
//! - [`lightbox`] - Gallery overlay with pointer, keyboard and touch navigation
//! - [`scroll_fader`] - Header logo that fades out while scrolling down
//! - [`fragment_loader`] - Shared markup fragments injected into containers

pub mod fragment_loader;
pub mod lightbox;
pub mod scroll_fader;

pub use fragment_loader::{FragmentLoader, LoadOutcome};
pub use scroll_fader::{LogoVisibility, ScrollFader};
