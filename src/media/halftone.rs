// SPDX-License-Identifier: MPL-2.0
//! Animated halftone dot field for the hero banner.
//!
//! A fixed grid of dot positions is stretched over the canvas. Each frame
//! a radial wave from the centre and two diagonal waves decide which dots
//! are lit; low-frequency noise picks each lit dot's colour.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use super::color::{default_background, default_palette, parse_palette, Rgb};
use crate::config::{
    AnimationConfig, DEFAULT_ANIMATION_SPEED, DEFAULT_DOT_SIZE, DEFAULT_GRID_COLS,
    DEFAULT_GRID_ROWS, DEFAULT_WAVE_AMPLITUDE, DEFAULT_WAVE_FREQUENCY,
};
use crate::error::{Error, Result};

const DIAGONAL_FREQUENCY: f64 = 0.01;
const DIAGONAL_AMPLITUDE: f64 = 5.0;
const DIAGONAL_WEIGHT: f64 = 0.3;
const DIAGONAL_TIME_SCALE: f64 = 0.5;
/// Threshold at the centre; corners end up at `BASE - SPREAD`.
const THRESHOLD_BASE: f64 = 15.0;
const THRESHOLD_SPREAD: f64 = 25.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HalftoneConfig {
    pub background: Rgb,
    pub palette: Vec<Rgb>,
    pub grid_cols: u32,
    pub grid_rows: u32,
    /// Dot radius in pixels.
    pub dot_size: f32,
    pub wave_frequency: f64,
    pub wave_amplitude: f64,
    /// Time advance per frame.
    pub animation_speed: f64,
}

impl Default for HalftoneConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            palette: default_palette(),
            grid_cols: DEFAULT_GRID_COLS,
            grid_rows: DEFAULT_GRID_ROWS,
            dot_size: DEFAULT_DOT_SIZE,
            wave_frequency: DEFAULT_WAVE_FREQUENCY,
            wave_amplitude: DEFAULT_WAVE_AMPLITUDE,
            animation_speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}

impl HalftoneConfig {
    /// Applies the `[animation]` settings over the defaults.
    #[must_use]
    pub fn from_config(config: &AnimationConfig) -> Self {
        let defaults = Self::default();
        let background = match config.background_color.as_deref() {
            Some(hex) => Rgb::from_hex(hex).unwrap_or_else(|| {
                tracing::warn!(color = hex, "invalid background colour, using default");
                defaults.background
            }),
            None => defaults.background,
        };
        let palette = match config.palette.as_deref() {
            Some(entries) => parse_palette(entries),
            None => defaults.palette,
        };

        Self {
            background,
            palette,
            grid_cols: config.grid_cols.unwrap_or(DEFAULT_GRID_COLS).max(1),
            grid_rows: config.grid_rows.unwrap_or(DEFAULT_GRID_ROWS).max(1),
            dot_size: config.dot_size.unwrap_or(DEFAULT_DOT_SIZE),
            wave_frequency: config.wave_frequency.unwrap_or(DEFAULT_WAVE_FREQUENCY),
            wave_amplitude: config.wave_amplitude.unwrap_or(DEFAULT_WAVE_AMPLITUDE),
            animation_speed: config.animation_speed.unwrap_or(DEFAULT_ANIMATION_SPEED),
        }
    }
}

/// One lit dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub color_index: usize,
}

/// The dot grid laid over a canvas of a given size.
///
/// Geometry and wave maths run in `f64`; only [`Dot`] positions are
/// narrowed to `f32` for rasterisation.
#[derive(Debug, Clone)]
pub struct HalftoneField {
    config: HalftoneConfig,
    width: u32,
    height: u32,
    spacing_x: f64,
    spacing_y: f64,
    center_x: f64,
    center_y: f64,
}

impl HalftoneField {
    #[must_use]
    pub fn new(config: HalftoneConfig, width: u32, height: u32) -> Self {
        let mut field = Self {
            config,
            width: 0,
            height: 0,
            spacing_x: 0.0,
            spacing_y: 0.0,
            center_x: 0.0,
            center_y: 0.0,
        };
        field.resize(width, height);
        field
    }

    #[must_use]
    pub fn config(&self) -> &HalftoneConfig {
        &self.config
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn spacing(&self) -> (f64, f64) {
        (self.spacing_x, self.spacing_y)
    }

    /// Recomputes grid spacing and centre for a new canvas size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.spacing_x = f64::from(width) / f64::from(self.config.grid_cols);
        self.spacing_y = f64::from(height) / f64::from(self.config.grid_rows);
        self.center_x = f64::from(width) / 2.0;
        self.center_y = f64::from(height) / 2.0;
        tracing::debug!(width, height, "halftone field resized");
    }

    /// Whether the dot centred at `(x, y)` is lit at `time`.
    #[must_use]
    pub fn should_draw_dot(&self, x: f64, y: f64, time: f64) -> bool {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let distance = (dx * dx + dy * dy).sqrt();

        let wave = (distance * self.config.wave_frequency - time).sin() * self.config.wave_amplitude;
        let diagonal_phase = time * DIAGONAL_TIME_SCALE;
        let diagonal_a = ((x + y) * DIAGONAL_FREQUENCY - diagonal_phase).sin() * DIAGONAL_AMPLITUDE;
        let diagonal_b = ((x - y) * DIAGONAL_FREQUENCY - diagonal_phase).sin() * DIAGONAL_AMPLITUDE;
        let combined = wave + diagonal_a * DIAGONAL_WEIGHT + diagonal_b * DIAGONAL_WEIGHT;

        let max_distance = self.center_x.hypot(self.center_y);
        let normalized = if max_distance > 0.0 {
            distance / max_distance
        } else {
            0.0
        };
        let threshold = THRESHOLD_BASE - normalized * THRESHOLD_SPREAD;

        combined > threshold
    }

    /// Palette index for a lit dot at `(x, y)`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn dot_color_index(&self, x: f64, y: f64, time: f64) -> usize {
        let len = self.config.palette.len().max(1);
        let noise_x = (x * 0.02 + time * 0.3).sin() * (y * 0.015).cos();
        let noise_y = (y * 0.02 - time * 0.2).cos() * (x * 0.018).sin();
        let noise_time = (time * 0.5 + x * 0.01 + y * 0.01).sin();
        let combined = (noise_x + noise_y + noise_time + 3.0) / 6.0;
        ((combined * len as f64).floor().max(0.0) as usize) % len
    }

    /// Grid cell centres, row by row.
    pub fn cell_centers(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.config.grid_rows).flat_map(move |row| {
            (0..self.config.grid_cols).map(move |col| {
                (
                    f64::from(col) * self.spacing_x + self.spacing_x / 2.0,
                    f64::from(row) * self.spacing_y + self.spacing_y / 2.0,
                )
            })
        })
    }

    /// Lit dots at `time`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn dots(&self, time: f64) -> Vec<Dot> {
        self.cell_centers()
            .filter(|&(x, y)| self.should_draw_dot(x, y, time))
            .map(|(x, y)| Dot {
                x: x as f32,
                y: y as f32,
                color_index: self.dot_color_index(x, y, time),
            })
            .collect()
    }

    /// Rasterises the frame at `time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas has zero area.
    pub fn render(&self, time: f64) -> Result<Pixmap> {
        let mut pixmap = Pixmap::new(self.width, self.height)
            .ok_or_else(|| Error::Image("halftone canvas has zero area".to_string()))?;
        pixmap.fill(self.config.background.to_skia());
        self.paint_dots(&mut pixmap, &self.dots(time));
        Ok(pixmap)
    }

    /// Paints `dots` over an existing pixmap.
    pub fn paint_dots(&self, pixmap: &mut Pixmap, dots: &[Dot]) {
        let mut paint = Paint {
            anti_alias: true,
            ..Paint::default()
        };
        for dot in dots {
            let Some(color) = self.config.palette.get(dot.color_index) else {
                continue;
            };
            let Some(circle) = PathBuilder::from_circle(dot.x, dot.y, self.config.dot_size) else {
                continue;
            };
            paint.set_color(color.to_skia());
            pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// PNG-encoded frame at `time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is empty or encoding fails.
    pub fn render_png(&self, time: f64) -> Result<Vec<u8>> {
        self.render(time)?
            .encode_png()
            .map_err(|e| Error::Image(e.to_string()))
    }
}
