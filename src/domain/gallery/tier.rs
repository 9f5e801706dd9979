// SPDX-License-Identifier: MPL-2.0
//! Responsive resolution tiers.

use crate::config::{
    GalleryConfig, DEFAULT_LARGE_TIER_WIDTH, DEFAULT_LARGE_VIEWPORT_BREAKPOINT,
    DEFAULT_MEDIUM_TIER_WIDTH,
};

/// The two resolution classes the lightbox knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageTier {
    /// Tablet and small desktop viewports.
    Medium,
    /// Wide desktop viewports.
    Large,
}

/// Maps viewport widths to tiers and tiers to declared candidate widths.
///
/// This is a two-tier policy, not a closest-match search: a candidate is
/// only used when its declared width equals the preferred tier's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    medium_width: u32,
    large_width: u32,
    large_viewport_breakpoint: u32,
}

impl TierPolicy {
    #[must_use]
    pub fn new(medium_width: u32, large_width: u32, large_viewport_breakpoint: u32) -> Self {
        Self {
            medium_width,
            large_width,
            large_viewport_breakpoint,
        }
    }

    /// Builds a policy from the `[gallery]` config section.
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(
            config.medium_tier_width.unwrap_or(DEFAULT_MEDIUM_TIER_WIDTH),
            config.large_tier_width.unwrap_or(DEFAULT_LARGE_TIER_WIDTH),
            config
                .large_viewport_breakpoint
                .unwrap_or(DEFAULT_LARGE_VIEWPORT_BREAKPOINT),
        )
    }

    /// Tier preferred for a viewport of `viewport_width` pixels.
    #[must_use]
    pub fn preferred_tier(&self, viewport_width: u32) -> ImageTier {
        if viewport_width < self.large_viewport_breakpoint {
            ImageTier::Medium
        } else {
            ImageTier::Large
        }
    }

    /// Declared candidate width that identifies `tier`.
    #[must_use]
    pub fn width_of(&self, tier: ImageTier) -> u32 {
        match tier {
            ImageTier::Medium => self.medium_width,
            ImageTier::Large => self.large_width,
        }
    }
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MEDIUM_TIER_WIDTH,
            DEFAULT_LARGE_TIER_WIDTH,
            DEFAULT_LARGE_VIEWPORT_BREAKPOINT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive_for_medium() {
        let policy = TierPolicy::default();
        assert_eq!(policy.preferred_tier(0), ImageTier::Medium);
        assert_eq!(policy.preferred_tier(1919), ImageTier::Medium);
        assert_eq!(policy.preferred_tier(1920), ImageTier::Large);
        assert_eq!(policy.preferred_tier(3840), ImageTier::Large);
    }

    #[test]
    fn default_widths_match_tiers() {
        let policy = TierPolicy::default();
        assert_eq!(policy.width_of(ImageTier::Medium), 1200);
        assert_eq!(policy.width_of(ImageTier::Large), 2048);
    }

    #[test]
    fn from_config_uses_overrides() {
        let config = GalleryConfig {
            medium_tier_width: Some(800),
            large_tier_width: None,
            large_viewport_breakpoint: Some(1000),
            swipe_threshold: None,
        };
        let policy = TierPolicy::from_config(&config);
        assert_eq!(policy.width_of(ImageTier::Medium), 800);
        assert_eq!(policy.width_of(ImageTier::Large), 2048);
        assert_eq!(policy.preferred_tier(1000), ImageTier::Large);
    }
}
