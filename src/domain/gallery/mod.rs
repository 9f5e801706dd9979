// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`GalleryItem`]: One immutable gallery entry with its responsive variants
//! - [`ResponsiveCandidate`]: A `(url, target_width)` pair
//! - [`ImageTier`] / [`TierPolicy`]: The two recognized resolution tiers
//! - [`parse_srcset`]: Turns a `srcset` descriptor into candidates

mod item;
mod srcset;
mod tier;

pub use item::{GalleryItem, ResponsiveCandidate};
pub use srcset::{parse_srcset, SrcsetParse};
pub use tier::{ImageTier, TierPolicy};
