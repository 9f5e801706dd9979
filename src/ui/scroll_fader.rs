// SPDX-License-Identifier: MPL-2.0
//! Header logo that fades out while scrolling down the page.
//!
//! Scroll events only record the position. The visibility decision runs
//! once per animation frame, so a burst of scroll events costs one update.

use crate::config::{ScrollConfig, DEFAULT_LOGO_FADE_THRESHOLD};

/// Logo presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoVisibility {
    /// Fully opaque and clickable.
    #[default]
    Visible,
    /// Transparent with pointer events disabled.
    Hidden,
}

impl LogoVisibility {
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            LogoVisibility::Visible => 1.0,
            LogoVisibility::Hidden => 0.0,
        }
    }

    #[must_use]
    pub fn accepts_pointer_events(self) -> bool {
        self == LogoVisibility::Visible
    }
}

#[derive(Debug, Clone)]
pub struct ScrollFader {
    threshold: f32,
    last_y: f32,
    pending_y: f32,
    frame_requested: bool,
    visibility: LogoVisibility,
}

impl ScrollFader {
    /// Starts at `initial_y` with the logo visible.
    #[must_use]
    pub fn new(initial_y: f32, threshold: f32) -> Self {
        Self {
            threshold,
            last_y: initial_y,
            pending_y: initial_y,
            frame_requested: false,
            visibility: LogoVisibility::Visible,
        }
    }

    #[must_use]
    pub fn from_config(initial_y: f32, config: &ScrollConfig) -> Self {
        Self::new(
            initial_y,
            config
                .logo_fade_threshold
                .unwrap_or(DEFAULT_LOGO_FADE_THRESHOLD),
        )
    }

    #[must_use]
    pub fn visibility(&self) -> LogoVisibility {
        self.visibility
    }

    /// Records a scroll position.
    ///
    /// Returns `true` when the caller must schedule a frame; `false` when
    /// one is already pending.
    pub fn on_scroll(&mut self, y: f32) -> bool {
        self.pending_y = y;
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Applies the latest position. Returns the visibility set this frame,
    /// or `None` when nothing was applied.
    pub fn on_frame(&mut self) -> Option<LogoVisibility> {
        if !self.frame_requested {
            return None;
        }
        self.frame_requested = false;

        let y = self.pending_y;
        let applied = if y > self.last_y && y > self.threshold {
            Some(LogoVisibility::Hidden)
        } else if y < self.last_y || y <= self.threshold {
            Some(LogoVisibility::Visible)
        } else {
            None
        };
        self.last_y = y;

        if let Some(visibility) = applied {
            if visibility != self.visibility {
                tracing::trace!(y, ?visibility, "logo visibility changed");
            }
            self.visibility = visibility;
        }
        applied
    }
}

impl Default for ScrollFader {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_LOGO_FADE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_to(fader: &mut ScrollFader, y: f32) -> Option<LogoVisibility> {
        fader.on_scroll(y);
        fader.on_frame()
    }

    #[test]
    fn scrolling_down_past_threshold_hides() {
        let mut fader = ScrollFader::default();
        assert_eq!(scroll_to(&mut fader, 150.0), Some(LogoVisibility::Hidden));
        approx::assert_abs_diff_eq!(fader.visibility().opacity(), 0.0);
        assert!(!fader.visibility().accepts_pointer_events());
    }

    #[test]
    fn scrolling_down_below_threshold_keeps_visible() {
        let mut fader = ScrollFader::default();
        assert_eq!(scroll_to(&mut fader, 80.0), Some(LogoVisibility::Visible));
        assert_eq!(scroll_to(&mut fader, 100.0), Some(LogoVisibility::Visible));
    }

    #[test]
    fn scrolling_up_shows_again() {
        let mut fader = ScrollFader::default();
        scroll_to(&mut fader, 500.0);
        assert_eq!(scroll_to(&mut fader, 450.0), Some(LogoVisibility::Visible));
        assert_eq!(fader.visibility(), LogoVisibility::Visible);
    }

    #[test]
    fn unchanged_position_above_threshold_keeps_state() {
        let mut fader = ScrollFader::default();
        scroll_to(&mut fader, 500.0);
        assert_eq!(scroll_to(&mut fader, 500.0), None);
        assert_eq!(fader.visibility(), LogoVisibility::Hidden);
    }

    #[test]
    fn scroll_bursts_request_one_frame() {
        let mut fader = ScrollFader::default();
        assert!(fader.on_scroll(10.0));
        assert!(!fader.on_scroll(120.0));
        assert!(!fader.on_scroll(300.0));
        assert_eq!(fader.on_frame(), Some(LogoVisibility::Hidden));
        assert_eq!(fader.on_frame(), None);
        assert!(fader.on_scroll(310.0));
    }

    #[test]
    fn custom_threshold() {
        let mut fader = ScrollFader::from_config(
            0.0,
            &ScrollConfig {
                logo_fade_threshold: Some(400.0),
            },
        );
        assert_eq!(scroll_to(&mut fader, 300.0), Some(LogoVisibility::Visible));
        assert_eq!(scroll_to(&mut fader, 401.0), Some(LogoVisibility::Hidden));
    }
}
