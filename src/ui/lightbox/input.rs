// SPDX-License-Identifier: MPL-2.0
//! Input modalities of the lightbox: pointer, keyboard and touch.
//!
//! Every modality is reduced to a [`Message`], which the navigator turns
//! into at most one state transition.

use crate::domain::ui::SwipeThreshold;

/// Direction of navigation through the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Anything else; always ignored.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Messages accepted by [`GalleryNavigator::update`](super::GalleryNavigator::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// A gallery thumbnail was clicked.
    ThumbnailClicked(usize),
    /// The close button was clicked.
    CloseClicked,
    /// The previous button was clicked.
    PreviousClicked,
    /// The next button was clicked.
    NextClicked,
    /// The displayed image was clicked at `x` (relative to its left edge).
    ImageClicked { x: f32, width: f32 },
    /// The area around the image was clicked.
    BackdropClicked,
    KeyPressed(Key),
    /// A touch began at screen coordinate `x`.
    TouchStarted(f32),
    /// A touch ended at screen coordinate `x`.
    TouchEnded(f32),
}

/// Left half of the image goes back, right half goes forward.
#[must_use]
pub fn click_direction(click_x: f32, image_width: f32) -> Direction {
    if click_x < image_width / 2.0 {
        Direction::Previous
    } else {
        Direction::Next
    }
}

/// Classifies one touch interaction.
///
/// Returns `None` for taps (displacement not above the threshold).
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: SwipeThreshold) -> Option<Direction> {
    let diff = start_x - end_x;
    if !threshold.is_exceeded_by(diff) {
        return None;
    }
    if diff > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

/// Horizontal coordinates sampled across one touch interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_x: f32,
    pub end_x: f32,
}

/// Pairs touch-start and touch-end events into gesture samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Records where a touch began, replacing any unfinished one.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Completes the interaction and discards the sample.
    ///
    /// A touch-end without a matching start yields `None`.
    pub fn finish(&mut self, x: f32) -> Option<GestureSample> {
        let start_x = self.start_x.take()?;
        Some(GestureSample { start_x, end_x: x })
    }

    /// Classifies a finished sample against this tracker's threshold.
    #[must_use]
    pub fn classify(&self, sample: GestureSample) -> Option<Direction> {
        classify_swipe(sample.start_x, sample.end_x, self.threshold)
    }
}
