// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncing driven by caller-supplied instants.

use std::time::Instant;

use crate::domain::ui::DebounceDelay;

/// Holds the latest value of a burst and releases it once the burst has
/// been quiet for the configured delay.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: DebounceDelay,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: DebounceDelay) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> DebounceDelay {
        self.delay
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay.as_duration()));
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Releases the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drops the pending value without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DebounceDelay::default())
    }
}
