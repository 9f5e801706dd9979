// SPDX-License-Identifier: MPL-2.0
//! Frame loop for the hero halftone animation.
//!
//! The host calls [`AmbientAnimation::tick`] once per display refresh.
//! Frames are produced only while the animation is started and the page
//! is visible; resizes are coalesced and applied after a quiet period.

use std::time::Instant;

use super::debounce::Debouncer;
use super::halftone::{Dot, HalftoneConfig, HalftoneField};
use crate::config::AnimationConfig;
use crate::domain::ui::DebounceDelay;

/// One produced frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub width: u32,
    pub height: u32,
    pub dots: Vec<Dot>,
}

#[derive(Debug, Clone)]
pub struct AmbientAnimation {
    field: HalftoneField,
    resize: Debouncer<(u32, u32)>,
    time: f64,
    running: bool,
    visible: bool,
}

impl AmbientAnimation {
    #[must_use]
    pub fn new(config: HalftoneConfig, width: u32, height: u32, resize_delay: DebounceDelay) -> Self {
        Self {
            field: HalftoneField::new(config, width, height),
            resize: Debouncer::new(resize_delay),
            time: 0.0,
            running: false,
            visible: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &AnimationConfig, width: u32, height: u32) -> Self {
        let delay = config
            .resize_debounce_ms
            .map(DebounceDelay::from_millis)
            .unwrap_or_default();
        Self::new(HalftoneConfig::from_config(config), width, height, delay)
    }

    #[must_use]
    pub fn field(&self) -> &HalftoneField {
        &self.field
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether [`tick`](Self::tick) would currently produce a frame.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running && self.visible
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!("halftone animation started");
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!("halftone animation stopped");
        }
        self.running = false;
    }

    /// Page visibility change. Hidden pauses; visible resumes if started.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            tracing::debug!(visible, "page visibility changed");
        }
        self.visible = visible;
    }

    /// Queues a canvas resize, applied after the quiet period.
    pub fn request_resize(&mut self, width: u32, height: u32, now: Instant) {
        self.resize.trigger((width, height), now);
    }

    /// Advances one frame.
    ///
    /// Due resizes are applied even while paused. Time only advances when a
    /// frame is produced.
    pub fn tick(&mut self, now: Instant) -> Option<Frame> {
        if let Some((width, height)) = self.resize.poll(now) {
            self.field.resize(width, height);
        }
        if !self.is_animating() {
            return None;
        }

        self.time += self.field.config().animation_speed;
        let (width, height) = self.field.dimensions();
        Some(Frame {
            time: self.time,
            width,
            height,
            dots: self.field.dots(self.time),
        })
    }
}
