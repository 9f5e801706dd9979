// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Visitor interactions worth correlating with warnings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Lightbox
    // ==========================================================================
    /// Open the lightbox on a gallery item.
    OpenLightbox {
        /// Index of the item opened.
        index: usize,
    },

    /// Close the lightbox.
    CloseLightbox,

    /// Show the next gallery item.
    NavigateNext,

    /// Show the previous gallery item.
    NavigatePrevious,

    // ==========================================================================
    // Collaborators
    // ==========================================================================
    /// Download the calendar invitation.
    DownloadCalendar,

    /// Render a pixel avatar.
    GenerateAvatar,
}

/// Category of a non-fatal problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A required page anchor or gallery content is missing.
    MissingResource,
    /// A navigation request pointed outside the gallery.
    InvalidIndex,
    /// A responsive candidate could not be parsed.
    MalformedSrcset,
    /// A markup fragment could not be loaded.
    FragmentUnavailable,
    Other,
}

/// A warning with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    Warning {
        event: WarningEvent,
    },
}
