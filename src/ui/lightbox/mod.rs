// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox: a full-screen overlay over an ordered image gallery.
//!
//! [`GalleryNavigator`] is the state machine, [`input`] turns pointer,
//! keyboard and touch events into [`Message`]s, and [`resolve`] picks the
//! responsive image for the current viewport.

pub mod input;
pub mod navigator;
pub mod resolve;

pub use input::{
    classify_swipe, click_direction, Direction, GestureSample, Key, Message, SwipeTracker,
};
pub use navigator::{GalleryNavigator, NavigationError, NavigationInfo, Transition};
pub use resolve::{resolve_image_source, resolve_with_policy, ImageSource};
