// SPDX-License-Identifier: MPL-2.0
//! Lightbox display port definitions.

/// The overlay container the lightbox draws into.
///
/// Implementations own all presentation styling; the navigator only
/// tells them what to show.
pub trait DisplaySurface {
    /// Makes the overlay visible.
    fn show(&mut self);

    /// Hides the overlay.
    fn hide(&mut self);

    /// Points the overlay image at `url`.
    ///
    /// Fetching and decoding happen out of band; this call does not wait.
    fn set_image(&mut self, url: &str, alt_text: &str);

    /// Shows `caption`, or hides the caption area when `None`.
    fn set_caption(&mut self, caption: Option<&str>);
}

/// The page hosting the lightbox.
pub trait HostPage {
    /// Current viewport width in CSS pixels, read at call time.
    fn viewport_width(&self) -> u32;

    /// Suspends (`true`) or restores (`false`) background scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn show(&mut self) {
        (**self).show();
    }

    fn hide(&mut self) {
        (**self).hide();
    }

    fn set_image(&mut self, url: &str, alt_text: &str) {
        (**self).set_image(url, alt_text);
    }

    fn set_caption(&mut self, caption: Option<&str>) {
        (**self).set_caption(caption);
    }
}

impl<T: HostPage + ?Sized> HostPage for &mut T {
    fn viewport_width(&self) -> u32 {
        (**self).viewport_width()
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        (**self).set_scroll_locked(locked);
    }
}
