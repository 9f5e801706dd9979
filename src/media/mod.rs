// SPDX-License-Identifier: MPL-2.0
//! Generated imagery: pixel avatars and the animated halftone banner.

pub mod animation;
pub mod avatar;
pub mod color;
pub mod debounce;
pub mod halftone;

pub use animation::{AmbientAnimation, Frame};
pub use avatar::{name_hash, save_avatar, seeded_random, PixelAvatar};
pub use color::Rgb;
pub use debounce::Debouncer;
pub use halftone::{Dot, HalftoneConfig, HalftoneField};
