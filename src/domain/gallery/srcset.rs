// SPDX-License-Identifier: MPL-2.0
//! `srcset` descriptor parsing.
//!
//! Only width descriptors (`1200w`) are understood. Density descriptors
//! (`2x`), entries without a descriptor and zero widths are rejected, since
//! tier selection works on declared widths.

use super::item::ResponsiveCandidate;

/// Outcome of parsing a `srcset` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrcsetParse {
    /// Valid candidates in declaration order.
    pub candidates: Vec<ResponsiveCandidate>,
    /// Non-empty entries that could not be interpreted.
    pub rejected: Vec<String>,
}

/// Parses a comma-separated `srcset` descriptor.
///
/// Whitespace around and inside entries may be irregular; empty entries
/// (e.g. a trailing comma) are ignored.
///
/// # Example
///
/// ```
/// use confsite::domain::gallery::parse_srcset;
///
/// let parsed = parse_srcset(" a-1200.webp  1200w,\n a-2048.webp 2048w, ");
/// assert_eq!(parsed.candidates.len(), 2);
/// assert!(parsed.rejected.is_empty());
/// ```
#[must_use]
pub fn parse_srcset(srcset: &str) -> SrcsetParse {
    let mut parsed = SrcsetParse::default();

    for entry in srcset.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        match parse_entry(entry) {
            Some(candidate) => parsed.candidates.push(candidate),
            None => parsed.rejected.push(entry.to_string()),
        }
    }

    parsed
}

fn parse_entry(entry: &str) -> Option<ResponsiveCandidate> {
    let mut parts = entry.split_whitespace();
    let url = parts.next()?;
    let descriptor = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let width: u32 = descriptor.strip_suffix('w')?.parse().ok()?;
    if width == 0 {
        return None;
    }

    Some(ResponsiveCandidate::new(url, width))
}
