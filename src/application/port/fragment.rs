// SPDX-License-Identifier: MPL-2.0
//! Markup fragment port definitions.

use crate::error::Result;

/// Somewhere a markup fragment can be read from.
pub trait FragmentSource {
    /// Short label used in logs (a path, a name).
    fn describe(&self) -> String;

    /// Reads the whole fragment.
    ///
    /// # Errors
    ///
    /// Returns an error when the fragment cannot be read.
    fn fetch(&self) -> Result<String>;
}

/// A container that receives a fragment's markup.
pub trait FragmentTarget {
    /// Replaces the container's content with `markup`.
    fn inject(&mut self, markup: &str);
}
