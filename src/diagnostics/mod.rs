// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module: the observability sink for site behaviors.
//!
//! Components hold a cloned [`DiagnosticsHandle`] and report visitor actions
//! and non-fatal problems. The [`DiagnosticsCollector`] stores them in a
//! memory-bounded [`CircularBuffer`] and can export them as JSON.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, SerializableEvent};
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType};
