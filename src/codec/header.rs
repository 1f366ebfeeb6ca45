//! Self-describing header stored in the first pixel row
//!
//! Five packed u32 values occupy pixels 0..5 of row 0; the rest of the row
//! is zero. Any grid carrying audio is therefore at least five pixels wide.

use crate::error::{Error, Result};
use crate::format::{FormatTag, WavFormat};
use crate::util::{pixfmt, SampleFormat, BYTES_PER_PIXEL};

/// Pixels used by the header
pub const HEADER_PIXELS: usize = 5;

/// Metadata needed to rebuild the WAV file from an encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedHeader {
    /// Rows of audio data following the header row
    pub encoded_rows: u32,
    pub channels: u32,
    pub bits_per_sample: u32,
    pub sample_rate: u32,
    pub format_tag: u32,
}

impl EncodedHeader {
    /// Header for `encoded_rows` rows of audio described by `format`
    pub fn new(encoded_rows: u32, format: &WavFormat) -> Self {
        EncodedHeader {
            encoded_rows,
            channels: format.channels as u32,
            bits_per_sample: format.bits_per_sample as u32,
            sample_rate: format.sample_rate,
            format_tag: u16::from(format.format_tag) as u32,
        }
    }

    /// Field values in storage order
    pub fn to_fields(&self) -> [u32; HEADER_PIXELS] {
        [
            self.encoded_rows,
            self.channels,
            self.bits_per_sample,
            self.sample_rate,
            self.format_tag,
        ]
    }

    pub fn from_fields(fields: [u32; HEADER_PIXELS]) -> Self {
        EncodedHeader {
            encoded_rows: fields[0],
            channels: fields[1],
            bits_per_sample: fields[2],
            sample_rate: fields[3],
            format_tag: fields[4],
        }
    }

    /// Fill a packed pixel row: header fields first, zeros after
    pub fn write_row(&self, row: &mut [u32]) -> Result<()> {
        if row.len() < HEADER_PIXELS {
            return Err(Error::invalid_input(format!(
                "header needs {} pixels, row has {}",
                HEADER_PIXELS,
                row.len()
            )));
        }
        row.fill(0);
        row[..HEADER_PIXELS].copy_from_slice(&self.to_fields());
        Ok(())
    }

    /// Read the header from the start of a flat RGBA row
    pub fn read_rgba(row: &[u8]) -> Result<Self> {
        let need = HEADER_PIXELS * BYTES_PER_PIXEL;
        if row.len() < need {
            return Err(Error::format(format!(
                "invalid encoded data: header needs {} pixels, image row has {}",
                HEADER_PIXELS,
                row.len() / BYTES_PER_PIXEL
            )));
        }

        let mut fields = [0u32; HEADER_PIXELS];
        for (i, field) in fields.iter_mut().enumerate() {
            *field = pixfmt::read_pixel(row, i * BYTES_PER_PIXEL);
        }
        Ok(Self::from_fields(fields))
    }

    /// Check the fields describe audio this codec can rebuild
    pub fn validate(&self) -> Result<()> {
        let channels_ok = matches!(self.channels, 1 | 2);
        let bits_ok = matches!(self.bits_per_sample, 16 | 32);
        let tag_ok = matches!(self.format_tag, 1 | 3);
        if !(channels_ok && bits_ok && tag_ok) {
            return Err(Error::format(format!(
                "invalid encoded data: channels={}, bits_per_sample={}, format_tag={}",
                self.channels, self.bits_per_sample, self.format_tag
            )));
        }
        if self.channels == 2 && self.encoded_rows % 2 != 0 {
            return Err(Error::format(format!(
                "invalid encoded data: stereo image with odd row count {}",
                self.encoded_rows
            )));
        }
        Ok(())
    }

    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Sample width; only meaningful after [`validate`](Self::validate)
    pub fn sample_format(&self) -> Result<SampleFormat> {
        u16::try_from(self.bits_per_sample)
            .ok()
            .and_then(SampleFormat::from_bits)
            .ok_or_else(|| {
                Error::format(format!(
                    "invalid encoded data: bits_per_sample={}",
                    self.bits_per_sample
                ))
            })
    }

    /// WAV format chunk for the decoded audio
    pub fn wav_format(&self) -> Result<WavFormat> {
        self.validate()?;
        WavFormat::new(
            FormatTag::from(self.format_tag as u16),
            self.channels as u16,
            self.sample_rate,
            self.bits_per_sample as u16,
        )
        .map_err(|e| Error::format(format!("invalid encoded data: {}", e)))
    }
}
