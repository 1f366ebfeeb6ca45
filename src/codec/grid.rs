//! Canonical pixel grid
//!
//! Pixels are stored once, as packed u32 values in row-major order. The
//! flat RGBA byte form needed by raster encoders is a projection of the same
//! data.

use crate::error::{Error, Result};
use crate::util::{u32_to_rgba, BYTES_PER_PIXEL};

/// Row-major grid of packed RGBA pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelGrid {
    /// Create a zero-filled grid
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width.checked_mul(height).ok_or_else(|| {
            Error::invalid_input(format!("grid {}x{} is too large", width, height))
        })?;
        Ok(PixelGrid {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Wrap existing packed pixels
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(Error::invalid_input(format!(
                "{} pixels do not form a {}x{} grid",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(PixelGrid {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed pixel view
    pub fn as_u32(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixels of row `y`
    pub fn row(&self, y: usize) -> &[u32] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u32] {
        &mut self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Append whole rows of packed pixels below the current ones
    pub fn append_rows(&mut self, pixels: &[u32]) -> Result<()> {
        if self.width == 0 || pixels.len() % self.width != 0 {
            return Err(Error::invalid_input(format!(
                "{} pixels are not whole rows of width {}",
                pixels.len(),
                self.width
            )));
        }
        self.pixels.extend_from_slice(pixels);
        self.height += pixels.len() / self.width;
        Ok(())
    }

    /// Flat RGBA byte view, four bytes per pixel
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * BYTES_PER_PIXEL);
        for &pixel in &self.pixels {
            out.extend_from_slice(&u32_to_rgba(pixel));
        }
        out
    }
}
