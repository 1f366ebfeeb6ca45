//! Raster file loading and saving through the `image` crate
//!
//! Any readable format (PNG, JPEG, BMP, GIF) is normalised to RGBA8 on load.
//! Encoded grids are always written as PNG so no pixel bit is lost.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use super::RasterRegion;
use crate::codec::PixelGrid;
use crate::error::{Error, Result};

/// Decode a raster file from memory into RGBA8
pub fn decode_raster(bytes: &[u8]) -> Result<RasterRegion> {
    let image = image::load_from_memory(bytes)?;
    from_rgba_image(image.to_rgba8())
}

/// Load a raster file from disk into RGBA8; the format is sniffed from the
/// file contents
pub fn load_raster(path: &Path) -> Result<RasterRegion> {
    let bytes = fs::read(path)?;
    let raster = decode_raster(&bytes)?;
    debug!(
        "Loaded {} ({}x{}, {} bytes)",
        path.display(),
        raster.width(),
        raster.height(),
        bytes.len()
    );
    Ok(raster)
}

/// Encode a grid as PNG bytes
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>> {
    let image = to_rgba_image(grid)?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Write a grid to `path` as PNG
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<()> {
    fs::write(path, encode_png(grid)?)?;
    Ok(())
}

fn from_rgba_image(image: RgbaImage) -> Result<RasterRegion> {
    let (width, height) = image.dimensions();
    RasterRegion::new(width as usize, height as usize, image.into_raw())
}

fn to_rgba_image(grid: &PixelGrid) -> Result<RgbaImage> {
    let width = u32::try_from(grid.width())
        .map_err(|_| Error::invalid_input(format!("width {} too large", grid.width())))?;
    let height = u32::try_from(grid.height())
        .map_err(|_| Error::invalid_input(format!("height {} too large", grid.height())))?;

    RgbaImage::from_raw(width, height, grid.to_rgba())
        .ok_or_else(|| Error::invalid_input("pixel buffer does not match image dimensions"))
}
