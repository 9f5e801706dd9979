// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations backed by the filesystem:
//!
//! - [`manifest`]: gallery manifests (TOML) into [`GalleryItem`] lists
//! - [`fs_fragment`]: markup fragments read from files (implements [`FragmentSource`])
//!
//! [`GalleryItem`]: crate::domain::gallery::GalleryItem
//! [`FragmentSource`]: crate::application::port::FragmentSource

pub mod fs_fragment;
pub mod manifest;

pub use fs_fragment::FileFragment;
pub use manifest::{load_manifest, parse_manifest, Manifest};
