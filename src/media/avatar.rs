// SPDX-License-Identifier: MPL-2.0
//! Deterministic pixel avatars derived from a person's name.
//!
//! The name is hashed into a seed; an 8x8 grid is filled from the left
//! half and mirrored so every avatar is horizontally symmetric. The same
//! name always yields the same picture.

use std::io::Cursor;

use base64::Engine as _;
use image_rs::{ImageFormat, RgbaImage};

use super::color::{default_background, default_palette, Rgb};
use crate::config::DEFAULT_AVATAR_GRID;
use crate::domain::ui::AvatarSize;
use crate::error::Result;

/// Cells per side.
pub const GRID_SIZE: usize = DEFAULT_AVATAR_GRID as usize;

/// On/off cells, row-major.
pub type Pattern = [[bool; GRID_SIZE]; GRID_SIZE];

/// 31-multiplier rolling hash over UTF-16 code units, absolute value.
///
/// Arithmetic wraps at 32 bits so results match browsers rendering the
/// same avatars.
#[must_use]
pub fn name_hash(name: &str) -> u32 {
    let hash = name.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Pseudo-random value in `[0, 1)` for `seed`.
#[must_use]
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// An avatar for one name at one size.
#[derive(Debug, Clone)]
pub struct PixelAvatar {
    name: String,
    size: AvatarSize,
    hash: u32,
    palette: Vec<Rgb>,
    background: Rgb,
}

impl PixelAvatar {
    #[must_use]
    pub fn new(name: impl Into<String>, size: AvatarSize) -> Self {
        let name = name.into();
        let hash = name_hash(&name);
        Self {
            name,
            size,
            hash,
            palette: default_palette(),
            background: default_background(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size(&self) -> AvatarSize {
        self.size
    }

    #[must_use]
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// The cell pattern. Right half mirrors the left half.
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        let mut pattern = [[false; GRID_SIZE]; GRID_SIZE];
        let half = GRID_SIZE.div_ceil(2);
        for (y, row) in pattern.iter_mut().enumerate() {
            for x in 0..half {
                let seed = f64::from(self.hash) + (y * GRID_SIZE + x) as f64;
                row[x] = seeded_random(seed) > 0.5;
            }
            for x in half..GRID_SIZE {
                row[x] = row[GRID_SIZE - 1 - x];
            }
        }
        pattern
    }

    /// Foreground colour, picked from the palette by hash.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.palette[self.hash as usize % self.palette.len()]
    }

    /// Rasterises the avatar. Each output pixel samples the cell under it.
    #[must_use]
    pub fn render(&self) -> RgbaImage {
        let size = self.size.value();
        let pattern = self.pattern();
        let foreground = self.color().to_rgba();
        let background = self.background.to_rgba();
        let cell = |coord: u32| (coord as usize * GRID_SIZE) / size as usize;

        RgbaImage::from_fn(size, size, |px, py| {
            if pattern[cell(py)][cell(px)] {
                foreground
            } else {
                background
            }
        })
    }

    /// PNG-encoded avatar.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.render()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// `data:image/png;base64,...` URL for an `<img src>`.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_data_url(&self) -> Result<String> {
        let png = self.to_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(png)
        ))
    }
}

/// Builds the avatar for `name` and writes it as a PNG file.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_avatar(name: &str, size: AvatarSize, path: &std::path::Path) -> Result<()> {
    let avatar = PixelAvatar::new(name, size);
    std::fs::write(path, avatar.to_png()?)?;
    tracing::info!(name, size = size.value(), path = %path.display(), "avatar written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_AVATAR_SIZE;
    use base64::Engine as _;

    fn rows(pattern: &Pattern) -> Vec<String> {
        pattern
            .iter()
            .map(|row| row.iter().map(|&on| if on { '1' } else { '0' }).collect())
            .collect()
    }

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(name_hash(""), 0);
        assert_eq!(name_hash("a"), 97);
        assert_eq!(name_hash("Ada Lovelace"), 878_886_773);
        assert_eq!(name_hash("Ørjan"), 202_981_693);
    }

    #[test]
    fn hash_of_min_int_is_representable() {
        assert_eq!(i32::MIN.unsigned_abs(), 2_147_483_648);
    }

    #[test]
    fn seeded_random_is_in_unit_interval() {
        for seed in 0..500 {
            let value = seeded_random(f64::from(seed));
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn pattern_for_short_name() {
        let avatar = PixelAvatar::new("a", AvatarSize::default());
        assert_eq!(
            rows(&avatar.pattern()),
            vec![
                "00100100", "11100111", "01011010", "00100100", "01111110", "10100101", "01011010",
                "01100110",
            ]
        );
    }

    #[test]
    fn pattern_is_mirrored() {
        for name in ["Kari Nordmann", "Ola", "Ada Lovelace", ""] {
            let pattern = PixelAvatar::new(name, AvatarSize::default()).pattern();
            for row in &pattern {
                for x in 0..GRID_SIZE {
                    assert_eq!(row[x], row[GRID_SIZE - 1 - x]);
                }
            }
        }
    }

    #[test]
    fn same_name_same_avatar() {
        let a = PixelAvatar::new("Kari Nordmann", AvatarSize::default());
        let b = PixelAvatar::new("Kari Nordmann", AvatarSize::default());
        assert_eq!(a.pattern(), b.pattern());
        assert_eq!(a.color(), b.color());
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn color_comes_from_palette() {
        assert_eq!(
            PixelAvatar::new("a", AvatarSize::default()).color().to_hex(),
            "#4b52ff"
        );
        assert_eq!(
            PixelAvatar::new("", AvatarSize::default()).color().to_hex(),
            "#7ac893"
        );
        assert_eq!(
            PixelAvatar::new("Ada Lovelace", AvatarSize::default())
                .color()
                .to_hex(),
            "#f2cc55"
        );
    }

    #[test]
    fn render_paints_cells() {
        let avatar = PixelAvatar::new("a", AvatarSize::new(16));
        let image = avatar.render();
        assert_eq!(image.dimensions(), (16, 16));
        // Row 0 is 00100100: cell (0,0) off, cell (2,0) on.
        assert_eq!(*image.get_pixel(0, 0), default_background().to_rgba());
        assert_eq!(*image.get_pixel(5, 1), avatar.color().to_rgba());
    }

    #[test]
    fn odd_sizes_cover_every_pixel() {
        let avatar = PixelAvatar::new("Ada Lovelace", AvatarSize::new(13));
        assert_eq!(avatar.render().dimensions(), (13, 13));
    }

    #[test]
    fn data_url_is_base64_png() {
        let avatar = PixelAvatar::new("Ola", AvatarSize::new(DEFAULT_AVATAR_SIZE));
        let url = avatar.to_data_url().expect("encode");
        let payload = url
            .strip_prefix("data:image/png;base64,")
            .expect("data url prefix");
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .expect("valid base64");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn save_writes_png_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ola.png");
        save_avatar("Ola", AvatarSize::new(32), &path).expect("save");
        let decoded = image_rs::open(&path).expect("decode");
        assert_eq!(decoded.width(), 32);
    }
}
