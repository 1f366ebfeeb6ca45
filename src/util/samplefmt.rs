//! Audio sample format definitions

use std::fmt;

/// Signed integer PCM sample width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Signed 8-bit
    I8,
    /// Signed 16-bit
    I16,
    /// Signed 32-bit
    I32,
}

impl SampleFormat {
    /// Map a WAV `bits_per_sample` field to a sample format
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8 => Some(SampleFormat::I8),
            16 => Some(SampleFormat::I16),
            32 => Some(SampleFormat::I32),
            _ => None,
        }
    }

    /// Bits per sample
    pub fn bits(&self) -> u16 {
        match self {
            SampleFormat::I8 => 8,
            SampleFormat::I16 => 16,
            SampleFormat::I32 => 32,
        }
    }

    /// Get the size in bytes of one sample
    pub fn sample_size(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Half the unsigned range, added to shift a signed amplitude to unsigned
    pub fn bias(&self) -> u32 {
        match self {
            SampleFormat::I8 => 1 << 7,
            SampleFormat::I16 => 1 << 15,
            SampleFormat::I32 => 1 << 31,
        }
    }

    /// Bitmask covering one unsigned sample
    fn mask(&self) -> u32 {
        match self {
            SampleFormat::I8 => 0xFF,
            SampleFormat::I16 => 0xFFFF,
            SampleFormat::I32 => u32::MAX,
        }
    }

    /// Smallest representable amplitude
    pub fn min_value(&self) -> i32 {
        match self {
            SampleFormat::I8 => i8::MIN as i32,
            SampleFormat::I16 => i16::MIN as i32,
            SampleFormat::I32 => i32::MIN,
        }
    }

    /// Largest representable amplitude
    pub fn max_value(&self) -> i32 {
        match self {
            SampleFormat::I8 => i8::MAX as i32,
            SampleFormat::I16 => i16::MAX as i32,
            SampleFormat::I32 => i32::MAX,
        }
    }

    /// Check that `sample` fits this width
    pub fn contains(&self, sample: i32) -> bool {
        (self.min_value()..=self.max_value()).contains(&sample)
    }

    /// Bias-shift a signed amplitude into the unsigned range
    #[inline]
    pub fn to_unsigned(&self, sample: i32) -> u32 {
        (sample as u32).wrapping_add(self.bias()) & self.mask()
    }

    /// Inverse of [`to_unsigned`](Self::to_unsigned); bits above the sample
    /// width are ignored
    #[inline]
    pub fn from_unsigned(&self, value: u32) -> i32 {
        ((value & self.mask()) as i64 - self.bias() as i64) as i32
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::I8 => "s8",
            SampleFormat::I16 => "s16",
            SampleFormat::I32 => "s32",
        };
        write!(f, "{}", name)
    }
}
