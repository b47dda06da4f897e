//! Floor texture loading and sampling with checkerboard fallback.
//!
//! Textures keep their source channel layout: a 1-channel image samples
//! as grayscale, 3 or more channels as RGB. A missing texture is never an
//! error at sampling time - callers fall back to a checkerboard.

use std::path::Path;

use thiserror::Error;

use crate::material::Color;

/// Errors that can occur while loading a texture.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A decoded texture, kept in its source channel layout.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: usize,

    /// Texture height in pixels
    pub height: usize,

    /// Channels per pixel in `data` (1 = grayscale, 3 = RGB, 4 = RGBA)
    pub channels: usize,

    /// Raw pixel bytes, row-major order
    pub data: Vec<u8>,
}

impl Texture {
    /// Create a texture from raw pixel data.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Load a texture from an image file, preserving its channel count.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Texture> {
        let path = path.as_ref();
        let img = image::open(path)?;
        let channels = img.color().channel_count() as usize;
        let (width, height) = (img.width() as usize, img.height() as usize);
        let data = img.into_bytes();

        log::debug!(
            "loaded texture {} ({}x{}, {} channels)",
            path.display(),
            width,
            height,
            channels
        );

        Ok(Texture::new(width, height, channels, data))
    }

    /// Nearest-pixel sample at wrapped UV coordinates.
    ///
    /// `u` and `v` are wrapped into [0, 1); the pixel is picked by
    /// truncation and clamped to the image. A 1-channel source broadcasts
    /// to gray; a source with 2 channels samples as white. An index that
    /// falls outside the pixel buffer falls back to a coarse 8x8
    /// checkerboard.
    pub fn sample(&self, u: f64, v: f64) -> Color {
        let u = wrap_unit(u);
        let v = wrap_unit(v);

        let x = ((u * (self.width as f64 - 1.0)) as i64).clamp(0, self.width as i64 - 1);
        let y = ((v * (self.height as f64 - 1.0)) as i64).clamp(0, self.height as i64 - 1);

        let index = (y as usize * self.width + x as usize) * self.channels;
        if index + self.channels > self.data.len() {
            return checker_cell((u * 8.0).trunc(), (v * 8.0).trunc());
        }

        if self.channels >= 3 {
            Color::new(
                self.data[index] as f64 / 255.0,
                self.data[index + 1] as f64 / 255.0,
                self.data[index + 2] as f64 / 255.0,
            )
        } else if self.channels == 1 {
            Color::splat(self.data[index] as f64 / 255.0)
        } else {
            Color::ONE
        }
    }
}

/// Sample a texture at UV coordinates, falling back to the unit
/// checkerboard when no texture is present.
pub fn sample(texture: Option<&Texture>, u: f64, v: f64) -> Color {
    match texture {
        Some(tex) => tex.sample(u, v),
        None => checkerboard(u, v),
    }
}

/// Unit checkerboard keyed by integer cell parity: white when
/// `trunc(u) + trunc(v)` is even, black otherwise. Negative coordinates
/// are shifted up by one before truncation.
pub fn checkerboard(mut u: f64, mut v: f64) -> Color {
    if u < 0.0 {
        u += 1.0;
    }
    if v < 0.0 {
        v += 1.0;
    }
    checker_cell(u.trunc(), v.trunc())
}

fn checker_cell(cu: f64, cv: f64) -> Color {
    if (cu as i64 + cv as i64) % 2 == 0 {
        Color::ONE
    } else {
        Color::ZERO
    }
}

/// Wrap a coordinate into [0, 1) by the fractional part, shifting
/// negatives up.
fn wrap_unit(value: f64) -> f64 {
    let mut wrapped = value % 1.0;
    if wrapped < 0.0 {
        wrapped += 1.0;
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x1 RGB strip: red, green, blue.
    fn rgb_strip() -> Texture {
        Texture::new(3, 1, 3, vec![255, 0, 0, 0, 255, 0, 0, 0, 255])
    }

    #[test]
    fn test_sample_reads_pixels() {
        let tex = rgb_strip();
        // x = trunc(u * (width - 1))
        assert_eq!(tex.sample(0.0, 0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.sample(0.4, 0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(tex.sample(0.6, 0.0), Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_truncation_never_reaches_the_last_column() {
        // Against (width - 1) the wrapped u stays under 1, so the blue
        // column at x=2 is unreachable however close u gets.
        let tex = rgb_strip();
        assert_eq!(tex.sample(1.0 - 1e-9, 0.0), Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_sample_wraps_periodically() {
        let tex = rgb_strip();
        assert_eq!(tex.sample(1.3, 0.0), tex.sample(0.3, 0.0));
        assert_eq!(tex.sample(-0.2, 0.0), tex.sample(0.8, 0.0));
        assert_eq!(tex.sample(-0.2, 0.0), Color::new(0.0, 1.0, 0.0));
        assert_eq!(tex.sample(0.1, 2.7), tex.sample(0.1, 0.7));
    }

    #[test]
    fn test_grayscale_broadcasts() {
        let tex = Texture::new(1, 1, 1, vec![51]);
        assert_eq!(tex.sample(0.5, 0.5), Color::splat(0.2));
    }

    #[test]
    fn test_two_channel_samples_white() {
        let tex = Texture::new(1, 1, 2, vec![9, 9]);
        assert_eq!(tex.sample(0.5, 0.5), Color::ONE);
    }

    #[test]
    fn test_short_buffer_falls_back_to_coarse_checker() {
        // Claims 3x1 RGB but carries one pixel; reads past the buffer
        // fall back to the 8x8 checkerboard.
        let tex = Texture::new(3, 1, 3, vec![255, 0, 0]);
        assert_eq!(tex.sample(0.0, 0.0), Color::new(1.0, 0.0, 0.0));
        // x=1 lands at byte 3, past the buffer; cell (trunc(0.6 * 8),
        // trunc(0)) = (4, 0) has even sum, white.
        assert_eq!(tex.sample(0.6, 0.0), Color::ONE);
        // Cell (5, 0) has odd sum, black.
        assert_eq!(tex.sample(0.7, 0.0), Color::ZERO);
    }

    #[test]
    fn test_checkerboard_parity() {
        assert_eq!(checkerboard(0.5, 0.5), Color::ONE);
        assert_eq!(checkerboard(1.5, 0.5), Color::ZERO);
        assert_eq!(checkerboard(1.5, 1.5), Color::ONE);
        // Negatives shift up by one before truncation
        assert_eq!(checkerboard(-0.5, 0.5), Color::ONE);
    }

    #[test]
    fn test_sample_without_texture_is_checkerboard() {
        assert_eq!(sample(None, 0.5, 0.5), checkerboard(0.5, 0.5));
        assert_eq!(sample(None, 1.5, 0.5), Color::ZERO);
        let tex = rgb_strip();
        assert_eq!(sample(Some(&tex), 0.0, 0.0), Color::new(1.0, 0.0, 0.0));
    }
}
