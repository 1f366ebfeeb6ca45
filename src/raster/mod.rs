//! Raster adapter
//!
//! Bridges the codec's [`PixelGrid`] and externally decoded RGBA8 rasters:
//! appending a base image below freshly encoded rows, and cutting the
//! encoded region back out of an arbitrary raster on decode.

pub mod io;

use tracing::debug;

use crate::codec::{EncodedHeader, PixelGrid};
use crate::error::{Error, Result};
use crate::util::{pixfmt, BYTES_PER_PIXEL};

pub use io::{decode_raster, encode_png, load_raster, save_png};

/// RGBA8 pixels with explicit dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterRegion {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl RasterRegion {
    /// Wrap flat RGBA bytes; the length must be `width * height * 4`
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
        if expected != Some(rgba.len()) {
            return Err(Error::format(format!(
                "raster {}x{} needs {} RGBA bytes, got {}",
                width,
                height,
                expected.map_or_else(|| "too many".to_string(), |n| n.to_string()),
                rgba.len()
            )));
        }
        Ok(RasterRegion {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat RGBA bytes
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA bytes of row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * BYTES_PER_PIXEL;
        &self.rgba[y * stride..(y + 1) * stride]
    }

    /// Packed value of pixel `(x, y)`
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        pixfmt::read_pixel(&self.rgba, (y * self.width + x) * BYTES_PER_PIXEL)
    }

    /// Packed pixels, row-major
    pub fn to_u32(&self) -> Vec<u32> {
        self.rgba
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| pixfmt::rgba_to_u32([px[0], px[1], px[2], px[3]]))
            .collect()
    }

    /// Header stored in row 0
    pub fn header(&self) -> Result<EncodedHeader> {
        if self.height == 0 {
            return Err(Error::format("invalid encoded data: image has no rows"));
        }
        EncodedHeader::read_rgba(self.row(0))
    }
}

impl From<&PixelGrid> for RasterRegion {
    fn from(grid: &PixelGrid) -> Self {
        RasterRegion {
            width: grid.width(),
            height: grid.height(),
            rgba: grid.to_rgba(),
        }
    }
}

/// Append every row of `base` below the encoded rows of `encoded`
pub fn merge(mut encoded: PixelGrid, base: &RasterRegion) -> Result<PixelGrid> {
    if encoded.width() != base.width() {
        return Err(Error::invalid_input(format!(
            "cannot merge grid of width {} with raster of width {}",
            encoded.width(),
            base.width()
        )));
    }
    encoded.append_rows(&base.to_u32())?;
    debug!(
        "Merged {} base rows, image now {}x{}",
        base.height(),
        encoded.width(),
        encoded.height()
    );
    Ok(encoded)
}

/// Cut the header row and encoded rows out of `raster`, dropping any base
/// image rows that follow
pub fn slice_encoded(raster: &RasterRegion) -> Result<RasterRegion> {
    let header = raster.header()?;
    let rows = (header.encoded_rows as usize)
        .checked_add(1)
        .filter(|&rows| rows <= raster.height())
        .ok_or_else(|| {
            Error::format(format!(
                "invalid encoded data: header declares {} encoded rows, image has {} rows",
                header.encoded_rows,
                raster.height()
            ))
        })?;

    let end = rows * raster.width() * BYTES_PER_PIXEL;
    RasterRegion::new(raster.width(), rows, raster.rgba[..end].to_vec())
}
