//! Common utilities and data structures

pub mod cursor;
pub mod pixfmt;
pub mod samplefmt;

pub use cursor::{ByteReader, ByteWriter};
pub use pixfmt::{rgba_to_u32, u32_to_rgba, BYTES_PER_PIXEL};
pub use samplefmt::SampleFormat;

/// Smallest `r` with `r * r >= n`
pub fn ceil_sqrt(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    // Float estimate, then correct for rounding in either direction
    let mut r = (n as f64).sqrt() as usize;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while r.checked_mul(r).map_or(false, |sq| sq < n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(9), 3);
        assert_eq!(ceil_sqrt(10), 4);
        assert_eq!(ceil_sqrt(44100), 210);
        assert_eq!(ceil_sqrt(44101), 211);
    }
}
