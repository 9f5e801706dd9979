// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Responsive tiers and swipe gesture threshold
//! - **Animation**: Halftone grid, waves and resize debounce
//! - **Avatar**: Pixel grid and output size
//! - **Scroll**: Logo fade threshold
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Declared width of the "medium" responsive tier.
pub const DEFAULT_MEDIUM_TIER_WIDTH: u32 = 1200;

/// Declared width of the "large" responsive tier.
pub const DEFAULT_LARGE_TIER_WIDTH: u32 = 2048;

/// Viewports at least this wide prefer the large tier.
pub const DEFAULT_LARGE_VIEWPORT_BREAKPOINT: u32 = 1920;

/// Minimum horizontal displacement for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Smallest configurable swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 1.0;

/// Largest configurable swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 500.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Number of dot columns in the halftone grid.
pub const DEFAULT_GRID_COLS: u32 = 100;

/// Number of dot rows in the halftone grid.
pub const DEFAULT_GRID_ROWS: u32 = 60;

/// Dot radius in pixels.
pub const DEFAULT_DOT_SIZE: f32 = 3.5;

/// Spatial frequency of the radial wave.
pub const DEFAULT_WAVE_FREQUENCY: f64 = 0.015;

/// Amplitude of the radial wave.
pub const DEFAULT_WAVE_AMPLITUDE: f64 = 8.0;

/// Animation time advance per rendered frame.
pub const DEFAULT_ANIMATION_SPEED: f64 = 0.02;

/// Quiet period before a burst of resize notifications is applied (ms).
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;

/// Shortest accepted resize debounce (ms).
pub const MIN_RESIZE_DEBOUNCE_MS: u64 = 0;

/// Longest accepted resize debounce (ms).
pub const MAX_RESIZE_DEBOUNCE_MS: u64 = 5_000;

/// Page background colour shared by the animation and avatars.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#131313";

/// Brand palette shared by the animation dots and avatars.
pub const DEFAULT_PALETTE: [&str; 5] = ["#7ac893", "#5835e4", "#4b52ff", "#f2cc55", "#e4586b"];

// ==========================================================================
// Avatar Defaults
// ==========================================================================

/// Side length of the avatar pixel grid.
pub const DEFAULT_AVATAR_GRID: u32 = 8;

/// Default rendered avatar size in pixels.
pub const DEFAULT_AVATAR_SIZE: u32 = 64;

/// Largest avatar we agree to render.
pub const MAX_AVATAR_SIZE: u32 = 4096;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset below which the logo is always shown.
pub const DEFAULT_LOGO_FADE_THRESHOLD: f32 = 100.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Tier ordering
    assert!(DEFAULT_MEDIUM_TIER_WIDTH < DEFAULT_LARGE_TIER_WIDTH);
    assert!(DEFAULT_LARGE_VIEWPORT_BREAKPOINT > DEFAULT_MEDIUM_TIER_WIDTH);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    // Animation validation
    assert!(DEFAULT_GRID_COLS > 0);
    assert!(DEFAULT_GRID_ROWS > 0);
    assert!(DEFAULT_RESIZE_DEBOUNCE_MS <= MAX_RESIZE_DEBOUNCE_MS);

    // Avatar validation
    assert!(DEFAULT_AVATAR_GRID > 0);
    assert!(DEFAULT_AVATAR_SIZE <= MAX_AVATAR_SIZE);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
