// SPDX-License-Identifier: MPL-2.0
//! Gallery entries.

use super::srcset::parse_srcset;

/// One encoded variant of a gallery image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveCandidate {
    url: String,
    target_width: u32,
}

impl ResponsiveCandidate {
    /// Creates a candidate for `url` declared at `target_width` pixels.
    #[must_use]
    pub fn new(url: impl Into<String>, target_width: u32) -> Self {
        Self {
            url: url.into(),
            target_width,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn target_width(&self) -> u32 {
        self.target_width
    }
}

/// An entry in the gallery, immutable once built.
///
/// Responsive candidates are parsed when the item is constructed so that
/// navigation never touches raw `srcset` strings.
///
/// # Example
///
/// ```
/// use confsite::domain::gallery::GalleryItem;
///
/// let item = GalleryItem::new("img/a.jpg", "Stage")
///     .with_caption("Opening keynote")
///     .with_srcset("img/a-1200.webp 1200w, img/a-2048.webp 2048w");
///
/// assert_eq!(item.responsive_candidates().len(), 2);
/// assert_eq!(item.caption(), Some("Opening keynote"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    fallback_image_url: String,
    alt_text: String,
    caption_text: String,
    responsive_candidates: Vec<ResponsiveCandidate>,
}

impl GalleryItem {
    /// Creates an item with no caption and no responsive variants.
    #[must_use]
    pub fn new(fallback_image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            fallback_image_url: fallback_image_url.into(),
            alt_text: alt_text.into(),
            caption_text: String::new(),
            responsive_candidates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption_text: impl Into<String>) -> Self {
        self.caption_text = caption_text.into();
        self
    }

    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<ResponsiveCandidate>) -> Self {
        self.responsive_candidates = candidates;
        self
    }

    /// Parses a `srcset` descriptor and stores the valid candidates.
    ///
    /// Malformed entries are dropped with a warning.
    #[must_use]
    pub fn with_srcset(mut self, srcset: &str) -> Self {
        self.apply_srcset(srcset);
        self
    }

    /// Replaces the candidates with those parsed from `srcset`.
    ///
    /// Each malformed entry is logged and returned to the caller.
    pub fn apply_srcset(&mut self, srcset: &str) -> Vec<String> {
        let parsed = parse_srcset(srcset);
        for rejected in &parsed.rejected {
            tracing::warn!(entry = %rejected, "skipping malformed srcset entry");
        }
        self.responsive_candidates = parsed.candidates;
        parsed.rejected
    }

    #[must_use]
    pub fn fallback_image_url(&self) -> &str {
        &self.fallback_image_url
    }

    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Raw caption text, possibly empty.
    #[must_use]
    pub fn caption_text(&self) -> &str {
        &self.caption_text
    }

    /// Caption to display, `None` when empty or whitespace only.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        let trimmed = self.caption_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    #[must_use]
    pub fn responsive_candidates(&self) -> &[ResponsiveCandidate] {
        &self.responsive_candidates
    }

    /// Returns the first candidate declared at exactly `width`.
    #[must_use]
    pub fn candidate_with_width(&self, width: u32) -> Option<&ResponsiveCandidate> {
        self.responsive_candidates
            .iter()
            .find(|candidate| candidate.target_width == width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_has_no_caption_or_candidates() {
        let item = GalleryItem::new("a.jpg", "alt");
        assert_eq!(item.fallback_image_url(), "a.jpg");
        assert_eq!(item.alt_text(), "alt");
        assert_eq!(item.caption(), None);
        assert!(item.responsive_candidates().is_empty());
    }

    #[test]
    fn whitespace_caption_is_hidden() {
        let item = GalleryItem::new("a.jpg", "alt").with_caption("   \n ");
        assert_eq!(item.caption(), None);
        assert_eq!(item.caption_text(), "   \n ");
    }

    #[test]
    fn caption_is_trimmed_for_display() {
        let item = GalleryItem::new("a.jpg", "alt").with_caption("  Panel  ");
        assert_eq!(item.caption(), Some("Panel"));
    }

    #[test]
    fn candidate_with_width_uses_exact_match() {
        let item = GalleryItem::new("a.jpg", "alt").with_candidates(vec![
            ResponsiveCandidate::new("a-12000.webp", 12000),
            ResponsiveCandidate::new("a-1200.webp", 1200),
        ]);
        assert_eq!(
            item.candidate_with_width(1200).map(ResponsiveCandidate::url),
            Some("a-1200.webp")
        );
        assert!(item.candidate_with_width(2048).is_none());
    }

    #[test]
    fn apply_srcset_returns_rejected_entries() {
        let mut item = GalleryItem::new("a.jpg", "alt");
        let rejected = item.apply_srcset("a-2048.webp 2048w, a.webp 2x, ");
        assert_eq!(rejected, vec!["a.webp 2x".to_string()]);
        assert_eq!(
            item.responsive_candidates(),
            &[ResponsiveCandidate::new("a-2048.webp", 2048)]
        );
    }

    #[test]
    fn with_srcset_drops_malformed_entries() {
        let item = GalleryItem::new("a.jpg", "alt").with_srcset("a-1200.webp 1200w, broken");
        assert_eq!(
            item.responsive_candidates(),
            &[ResponsiveCandidate::new("a-1200.webp", 1200)]
        );
    }
}
