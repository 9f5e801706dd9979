// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`display`]: The lightbox overlay and the surrounding page
//! - [`fragment`]: Markup fragments and the containers receiving them
//!
//! # Design Notes
//!
//! - All calls are synchronous and run to completion on the event loop
//! - Image loading behind [`DisplaySurface::set_image`] is fire-and-forget

pub mod display;
pub mod fragment;

pub use display::{DisplaySurface, HostPage};
pub use fragment::{FragmentSource, FragmentTarget};
