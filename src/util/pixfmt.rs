//! RGBA pixel packing
//!
//! A pixel is four 8-bit channels. Its packed form is a u32 with red in the
//! most significant byte and alpha in the least significant one.

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Split a packed value into `[r, g, b, a]`
#[inline]
pub fn u32_to_rgba(value: u32) -> [u8; 4] {
    [
        ((value >> 24) & 0xFF) as u8,
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ]
}

/// Join `[r, g, b, a]` into a packed value
#[inline]
pub fn rgba_to_u32(rgba: [u8; 4]) -> u32 {
    ((rgba[0] as u32) << 24) | ((rgba[1] as u32) << 16) | ((rgba[2] as u32) << 8) | rgba[3] as u32
}

/// Read the pixel starting at `offset` in a flat RGBA buffer
#[inline]
pub fn read_pixel(rgba: &[u8], offset: usize) -> u32 {
    rgba_to_u32([
        rgba[offset],
        rgba[offset + 1],
        rgba[offset + 2],
        rgba[offset + 3],
    ])
}
