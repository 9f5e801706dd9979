// SPDX-License-Identifier: MPL-2.0
//! iCalendar (RFC 5545) document generation.

use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Error, Result};

pub const PRODUCT_ID: &str = "-//Energieffektiv Fremtid//NONSGML v1.0//NO";
pub const CALENDAR_NAME: &str = "Energieffektiv Fremtid 2026";
pub const CALENDAR_TIMEZONE: &str = "Europe/Oslo";
pub const UID_DOMAIN: &str = "energieffektivfremtid.no";

/// Maximum octets per physical line, excluding the CRLF.
const MAX_LINE_OCTETS: usize = 75;
const CRLF: &str = "\r\n";

/// Formats `time` as a UTC `DATE-TIME` value (`YYYYMMDDTHHMMSSZ`).
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use confsite::calendar::format_ics_timestamp;
///
/// let start = Utc.with_ymd_and_hms(2026, 5, 21, 8, 0, 0).unwrap();
/// assert_eq!(format_ics_timestamp(start), "20260521T080000Z");
/// ```
#[must_use]
pub fn format_ics_timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escapes a `TEXT` property value.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Folds a content line into physical lines of at most 75 octets.
///
/// Continuation lines start with a single space. Splits never fall inside
/// a UTF-8 sequence.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;
    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > budget {
            folded.push_str(CRLF);
            folded.push(' ');
            // The leading space takes one octet of the next line.
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        folded.push(c);
        used += width;
    }
    folded
}

/// A single timed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    /// The 2026 conference: 21 May 2026, 08:00-16:00 UTC.
    #[must_use]
    pub fn conference_2026() -> Self {
        Self {
            title: "Energieffektiv Fremtid 2026".to_string(),
            description: "Hold av datoen - Energieffektiv Fremtid konferansen samler forskere, \
                          kunnskapsinstittusjoner, industri og politikere til diskusjon om å \
                          energieffektivisere Norge."
                .to_string(),
            location: "Norge (nøyaktig sted bekreftes senere)".to_string(),
            start: utc(2026, 5, 21, 8),
            end: utc(2026, 5, 21, 16),
        }
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .earliest()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// A rendered VCALENDAR document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsDocument {
    uid: String,
    content: String,
}

impl IcsDocument {
    /// Builds a calendar publishing `event`, stamped at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Calendar`] if the event ends before it starts or has
    /// an empty title.
    pub fn build(event: &CalendarEvent, now: DateTime<Utc>) -> Result<Self> {
        if event.end < event.start {
            return Err(Error::Calendar(format!(
                "event ends ({}) before it starts ({})",
                format_ics_timestamp(event.end),
                format_ics_timestamp(event.start)
            )));
        }
        if event.title.trim().is_empty() {
            return Err(Error::Calendar("event has no title".to_string()));
        }

        let uid = format!("eef-2026-{}@{UID_DOMAIN}", now.timestamp_millis());
        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{PRODUCT_ID}"),
            "CALSCALE:GREGORIAN".to_string(),
            "METHOD:PUBLISH".to_string(),
            format!("X-WR-CALNAME:{}", escape_text(CALENDAR_NAME)),
            format!("X-WR-TIMEZONE:{CALENDAR_TIMEZONE}"),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{uid}"),
            format!("DTSTAMP:{}", format_ics_timestamp(now)),
            format!("DTSTART:{}", format_ics_timestamp(event.start)),
            format!("DTEND:{}", format_ics_timestamp(event.end)),
            format!("SUMMARY:{}", escape_text(&event.title)),
            format!("DESCRIPTION:{}", escape_text(&event.description)),
            format!("LOCATION:{}", escape_text(&event.location)),
            "STATUS:CONFIRMED".to_string(),
            "SEQUENCE:0".to_string(),
            "TRANSP:OPAQUE".to_string(),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];

        let mut content = String::new();
        for line in &lines {
            let _ = write!(content, "{}{CRLF}", fold_line(line));
        }

        Ok(Self { uid, content })
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.content
    }
}
