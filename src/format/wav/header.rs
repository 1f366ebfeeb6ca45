//! WAV format chunk structures and parsing

use crate::error::{Error, Result};
use crate::util::{ByteReader, ByteWriter, SampleFormat};

/// Size of the `fmt ` body written by the muxer
pub const FMT_CHUNK_SIZE: u32 = 16;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// Extensible format
    Extensible,
    /// Unknown format
    Unknown(u16),
}

impl FormatTag {
    /// Tags whose sample bits the image codec carries unchanged
    pub fn is_transcodable(&self) -> bool {
        matches!(self, FormatTag::Pcm | FormatTag::IeeeFloat)
    }
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

/// WAV format chunk data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second
    pub byte_rate: u32,
    /// Block alignment
    pub block_align: u16,
    /// Bits per sample
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Build a format with byte rate and block align derived from the other
    /// fields
    pub fn new(
        format_tag: FormatTag,
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
    ) -> Result<Self> {
        let block_align = Self::block_align_for(channels, bits_per_sample).ok_or_else(|| {
            Error::invalid_input(format!(
                "block align overflows for {} channels of {} bits",
                channels, bits_per_sample
            ))
        })?;
        let byte_rate = Self::byte_rate_for(channels, sample_rate, bits_per_sample).ok_or_else(
            || {
                Error::invalid_input(format!(
                    "byte rate overflows for {} Hz, {} channels, {} bits",
                    sample_rate, channels, bits_per_sample
                ))
            },
        )?;

        Ok(WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }

    fn byte_rate_for(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Option<u32> {
        let rate = sample_rate as u64 * channels as u64 * bits_per_sample as u64 / 8;
        u32::try_from(rate).ok()
    }

    fn block_align_for(channels: u16, bits_per_sample: u16) -> Option<u16> {
        channels.checked_mul(bits_per_sample / 8)
    }

    /// Parse the 16 mandatory bytes of a `fmt ` body
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
        let format_tag = reader.read_u16_le()?.into();
        let channels = reader.read_u16_le()?;
        let sample_rate = reader.read_u32_le()?;
        let byte_rate = reader.read_u32_le()?;
        let block_align = reader.read_u16_le()?;
        let bits_per_sample = reader.read_u16_le()?;

        Ok(WavFormat {
            format_tag,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
        })
    }

    /// Write the 16-byte `fmt ` body, recomputing derived fields
    pub fn write(&self, writer: &mut ByteWriter) -> Result<()> {
        let derived = Self::new(
            self.format_tag,
            self.channels,
            self.sample_rate,
            self.bits_per_sample,
        )?;

        writer.write_u16_le(u16::from(derived.format_tag));
        writer.write_u16_le(derived.channels);
        writer.write_u32_le(derived.sample_rate);
        writer.write_u32_le(derived.byte_rate);
        writer.write_u16_le(derived.block_align);
        writer.write_u16_le(derived.bits_per_sample);
        Ok(())
    }

    /// Get the integer sample format, if the bit depth has one
    pub fn sample_format(&self) -> Option<SampleFormat> {
        SampleFormat::from_bits(self.bits_per_sample)
    }

    /// Validate the cross-field invariants
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(Error::format("Invalid channel count: 0"));
        }

        let expected_byte_rate = self.sample_rate as u64
            * self.channels as u64
            * self.bits_per_sample as u64
            / 8;
        if self.byte_rate as u64 != expected_byte_rate {
            return Err(Error::format(format!(
                "Byte rate mismatch: expected {}, got {}",
                expected_byte_rate, self.byte_rate
            )));
        }

        let expected_block_align = self.channels as u32 * (self.bits_per_sample as u32 / 8);
        if self.block_align as u32 != expected_block_align {
            return Err(Error::format(format!(
                "Block align mismatch: expected {}, got {}",
                expected_block_align, self.block_align
            )));
        }

        Ok(())
    }

    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }
}
