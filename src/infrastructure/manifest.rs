// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest loading.
//!
//! A manifest is a TOML file with one `[[item]]` table per gallery image:
//!
//! ```toml
//! [[item]]
//! src = "images/gallery/panel.jpg"
//! alt = "Panel debate"
//! caption = "Opening panel"
//! srcset = "optimized/webp/panel-1200.webp 1200w, optimized/webp/panel-2048.webp 2048w"
//! ```
//!
//! `srcset` is parsed once here; the rest of the crate only sees
//! [`GalleryItem`]s.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticsHandle, WarningType};
use crate::domain::gallery::GalleryItem;
use crate::error::{ManifestError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct ManifestFile {
    #[serde(default, rename = "item")]
    items: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ManifestEntry {
    src: String,
    #[serde(default)]
    alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    srcset: Option<String>,
}

/// A loaded gallery, in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    items: Vec<GalleryItem>,
    skipped_entries: Vec<String>,
}

impl Manifest {
    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<GalleryItem> {
        self.items
    }

    /// `srcset` entries that were dropped because they were malformed.
    #[must_use]
    pub fn skipped_entries(&self) -> &[String] {
        &self.skipped_entries
    }

    /// Reports skipped entries to the diagnostics sink.
    pub fn report_to(&self, diagnostics: &DiagnosticsHandle) {
        for entry in &self.skipped_entries {
            diagnostics.log_warning(WarningType::MalformedSrcset, entry.clone());
        }
    }
}

/// Parses manifest text.
///
/// # Errors
///
/// Returns [`ManifestError::Syntax`] for invalid TOML, [`ManifestError::Empty`]
/// when no items are declared and [`ManifestError::MissingSource`] for an
/// item with a blank `src`.
pub fn parse_manifest(text: &str) -> Result<Manifest> {
    let file: ManifestFile =
        toml::from_str(text).map_err(|e| ManifestError::Syntax(e.message().to_string()))?;
    if file.items.is_empty() {
        return Err(ManifestError::Empty.into());
    }

    let mut items = Vec::with_capacity(file.items.len());
    let mut skipped_entries = Vec::new();
    for (index, entry) in file.items.into_iter().enumerate() {
        if entry.src.trim().is_empty() {
            return Err(ManifestError::MissingSource { index }.into());
        }

        let mut item = GalleryItem::new(entry.src, entry.alt);
        if let Some(caption) = entry.caption {
            item = item.with_caption(caption);
        }
        if let Some(srcset) = entry.srcset {
            let rejected = item.apply_srcset(&srcset);
            if !rejected.is_empty() {
                tracing::debug!(index, rejected = rejected.len(), "manifest item has malformed srcset");
            }
            skipped_entries.extend(rejected);
        }
        items.push(item);
    }

    tracing::debug!(items = items.len(), skipped = skipped_entries.len(), "manifest parsed");
    Ok(Manifest {
        items,
        skipped_entries,
    })
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise as
/// [`parse_manifest`].
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let text = fs::read_to_string(path)?;
    let manifest = parse_manifest(&text)?;
    tracing::info!(path = %path.display(), items = manifest.items.len(), "gallery manifest loaded");
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[[item]]
src = "images/gallery/a.jpg"
alt = "Panel"
caption = "Opening panel"
srcset = "optimized/webp/a-1200.webp 1200w, optimized/webp/a-2048.webp 2048w"

[[item]]
src = "images/gallery/b.jpg"
alt = "Audience"
"#;

    #[test]
    fn parses_items_in_order() {
        let manifest = parse_manifest(SAMPLE).expect("parse");
        let items = manifest.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].fallback_image_url(), "images/gallery/a.jpg");
        assert_eq!(items[0].caption(), Some("Opening panel"));
        assert_eq!(items[0].responsive_candidates().len(), 2);
        assert_eq!(
            items[0]
                .candidate_with_width(2048)
                .map(|candidate| candidate.url()),
            Some("optimized/webp/a-2048.webp")
        );
        assert_eq!(items[1].alt_text(), "Audience");
        assert!(items[1].responsive_candidates().is_empty());
        assert_eq!(items[1].caption(), None);
    }

    #[test]
    fn malformed_srcset_entries_are_skipped_and_reported() {
        let text = r#"
[[item]]
src = "a.jpg"
srcset = "a-1200.webp 1200w, broken, a-2048.webp 2048x"
"#;
        let manifest = parse_manifest(text).expect("parse");
        assert_eq!(manifest.items()[0].responsive_candidates().len(), 1);
        assert_eq!(manifest.skipped_entries(), ["broken", "a-2048.webp 2048x"]);

        let mut collector = DiagnosticsCollector::default();
        manifest.report_to(&collector.handle());
        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn empty_manifest_is_rejected() {
        assert!(matches!(
            parse_manifest(""),
            Err(Error::Manifest(ManifestError::Empty))
        ));
    }

    #[test]
    fn blank_src_is_rejected_with_index() {
        let text = "[[item]]\nsrc = \"a.jpg\"\n\n[[item]]\nsrc = \"  \"\n";
        assert!(matches!(
            parse_manifest(text),
            Err(Error::Manifest(ManifestError::MissingSource { index: 1 }))
        ));
    }

    #[test]
    fn invalid_toml_is_a_syntax_error() {
        assert!(matches!(
            parse_manifest("[[item]\nsrc ="),
            Err(Error::Manifest(ManifestError::Syntax(_)))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write");
        let manifest = load_manifest(file.path()).expect("load");
        assert_eq!(manifest.into_items().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            load_manifest(&dir.path().join("nope.toml")),
            Err(Error::Io(_))
        ));
    }
}
