// SPDX-License-Identifier: MPL-2.0
//! Responsive image source resolution.

use crate::domain::gallery::{GalleryItem, ImageTier, TierPolicy};

/// The image URL chosen for an item, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// A candidate declared at the preferred tier's width.
    Responsive { tier: ImageTier, url: &'a str },
    /// The preferred tier is missing, so the base image is used.
    Fallback { url: &'a str },
}

impl<'a> ImageSource<'a> {
    #[must_use]
    pub fn url(&self) -> &'a str {
        match *self {
            ImageSource::Responsive { url, .. } | ImageSource::Fallback { url } => url,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageSource::Fallback { .. })
    }
}

/// Picks the image URL for `item` at `viewport_width` using the default tiers.
///
/// # Example
///
/// ```
/// use confsite::domain::gallery::{GalleryItem, ResponsiveCandidate};
/// use confsite::ui::lightbox::resolve_image_source;
///
/// let item = GalleryItem::new("a.jpg", "Stage").with_candidates(vec![
///     ResponsiveCandidate::new("a-1200.webp", 1200),
///     ResponsiveCandidate::new("a-2048.webp", 2048),
/// ]);
///
/// assert_eq!(resolve_image_source(&item, 1024).url(), "a-1200.webp");
/// assert_eq!(resolve_image_source(&item, 2200).url(), "a-2048.webp");
/// ```
#[must_use]
pub fn resolve_image_source(item: &GalleryItem, viewport_width: u32) -> ImageSource<'_> {
    resolve_with_policy(item, viewport_width, &TierPolicy::default())
}

/// Same as [`resolve_image_source`] with explicit tier widths and breakpoint.
///
/// Matching is exact on the declared width; there is no closest-match search.
#[must_use]
pub fn resolve_with_policy<'a>(
    item: &'a GalleryItem,
    viewport_width: u32,
    policy: &TierPolicy,
) -> ImageSource<'a> {
    let tier = policy.preferred_tier(viewport_width);
    match item.candidate_with_width(policy.width_of(tier)) {
        Some(candidate) => ImageSource::Responsive {
            tier,
            url: candidate.url(),
        },
        None => ImageSource::Fallback {
            url: item.fallback_image_url(),
        },
    }
}
