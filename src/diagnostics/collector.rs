// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction,
    WarningEvent, WarningType,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block; events are dropped when the channel
/// is full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_warning(&self, warning_type: WarningType, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            event: WarningEvent::new(warning_type, message),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// One exported event, timestamped relative to collection start.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

#[derive(Debug, Serialize)]
struct DiagnosticReport {
    collection_started_at: DateTime<Utc>,
    event_count: usize,
    events: Vec<SerializableEvent>,
}

/// Central collector for diagnostic events.
///
/// Events arrive through a channel and are kept in a circular buffer.
/// The channel holds as many events as the buffer, so one
/// [`process_pending`](Self::process_pending) per buffer's worth of events
/// loses nothing.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.value());

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                timestamp_ms: event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        let report = DiagnosticReport {
            collection_started_at: self.collection_started_at_utc,
            event_count: events.len(),
            events,
        };
        serde_json::to_string_pretty(&report)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
