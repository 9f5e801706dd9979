// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for interaction values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

use crate::config::{
    DEFAULT_AVATAR_SIZE, DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_SWIPE_THRESHOLD, MAX_AVATAR_SIZE,
    MAX_RESIZE_DEBOUNCE_MS, MAX_SWIPE_THRESHOLD, MIN_RESIZE_DEBOUNCE_MS, MIN_SWIPE_THRESHOLD,
};

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal touch displacement that counts as a swipe.
///
/// Displacements at or below the threshold are treated as taps.
///
/// # Example
///
/// ```
/// use confsite::domain::ui::SwipeThreshold;
///
/// let threshold = SwipeThreshold::default();
/// assert!(threshold.is_exceeded_by(60.0));
/// assert!(!threshold.is_exceeded_by(-30.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    /// Returns the raw threshold in screen units.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `|delta|` is strictly greater than the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, delta: f32) -> bool {
        delta.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

// =============================================================================
// DebounceDelay
// =============================================================================

/// Quiet period a debouncer waits for before firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceDelay(u64);

impl DebounceDelay {
    /// Creates a new delay in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_RESIZE_DEBOUNCE_MS, MAX_RESIZE_DEBOUNCE_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DebounceDelay {
    fn default() -> Self {
        Self(DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}

// =============================================================================
// AvatarSize
// =============================================================================

/// Rendered avatar side length in pixels (1–4096).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarSize(u32);

impl AvatarSize {
    /// Creates a new size, clamping to the valid range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(1, MAX_AVATAR_SIZE))
    }

    /// Returns the size in pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self(DEFAULT_AVATAR_SIZE)
    }
}
