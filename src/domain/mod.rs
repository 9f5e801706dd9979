// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with no rendering dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`gallery`]: Gallery entries and responsive image metadata
//!   ([`GalleryItem`](gallery::GalleryItem), [`TierPolicy`](gallery::TierPolicy))
//! - [`ui`]: Interaction value objects ([`SwipeThreshold`](ui::SwipeThreshold),
//!   [`DebounceDelay`](ui::DebounceDelay), [`AvatarSize`](ui::AvatarSize))

pub mod diagnostics;
pub mod gallery;
pub mod ui;
