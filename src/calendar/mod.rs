// SPDX-License-Identifier: MPL-2.0
//! "Add to calendar" support: builds the conference invitation as an
//! iCalendar file and writes it where the visitor asked for it.

pub mod ical;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

pub use ical::{escape_text, fold_line, format_ics_timestamp, CalendarEvent, IcsDocument};

use crate::error::Result;

/// Name offered for the downloaded file.
pub const FILE_NAME: &str = "energieffektiv-fremtid-2026.ics";

/// Content type served with the file.
pub const MIME_TYPE: &str = "text/calendar;charset=utf-8";

/// Builds the conference invitation stamped at `now`.
///
/// # Errors
///
/// Returns an error if the event is invalid.
pub fn conference_invitation(now: DateTime<Utc>) -> Result<IcsDocument> {
    IcsDocument::build(&CalendarEvent::conference_2026(), now)
}

/// Writes `document` into `dir` under [`FILE_NAME`] and returns the path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn export_to_path(document: &IcsDocument, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(FILE_NAME);
    fs::write(&path, document.as_str())?;
    tracing::info!(path = %path.display(), uid = document.uid(), "calendar invitation written");
    Ok(path)
}
