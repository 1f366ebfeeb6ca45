//! WAV container writer

use super::header::{WavFormat, FMT_CHUNK_SIZE};
use super::{DATA_CHUNK, FMT_CHUNK, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::util::{ByteWriter, SampleFormat};

/// Bytes between the RIFF size field and the start of the sample data
const HEADER_OVERHEAD: u32 = 4 + 8 + FMT_CHUNK_SIZE + 8;

/// WAV muxer producing a complete in-memory file
#[derive(Debug)]
pub struct WavMuxer {
    format: WavFormat,
    sample_format: SampleFormat,
}

impl WavMuxer {
    /// Create a new WAV muxer for `format`
    pub fn new(format: WavFormat) -> Result<Self> {
        if format.channels == 0 {
            return Err(Error::invalid_input("WAV needs at least one channel"));
        }
        let sample_format = format.sample_format().ok_or_else(|| {
            Error::unsupported(format!(
                "Unsupported bits per sample: {}",
                format.bits_per_sample
            ))
        })?;

        Ok(WavMuxer {
            format,
            sample_format,
        })
    }

    /// Serialize interleaved `samples` into a WAV file
    pub fn mux(&self, samples: &[i32]) -> Result<Vec<u8>> {
        let channels = self.format.channels as usize;
        if samples.len() % channels != 0 {
            return Err(Error::invalid_input(format!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            )));
        }

        let data_size = samples
            .len()
            .checked_mul(self.sample_format.sample_size())
            .and_then(|size| u32::try_from(size).ok())
            .filter(|size| size.checked_add(HEADER_OVERHEAD).is_some())
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "{} samples exceed the 4 GiB WAV size limit",
                    samples.len()
                ))
            })?;

        let mut writer = ByteWriter::with_capacity(8 + (HEADER_OVERHEAD + data_size) as usize);

        writer.write_tag(RIFF_MAGIC);
        let riff_size_position = writer.len();
        writer.write_u32_le(0);
        writer.write_tag(WAVE_MAGIC);

        writer.write_tag(FMT_CHUNK);
        writer.write_u32_le(FMT_CHUNK_SIZE);
        self.format.write(&mut writer)?;

        writer.write_tag(DATA_CHUNK);
        writer.write_u32_le(data_size);
        for &sample in samples {
            self.write_sample(&mut writer, sample)?;
        }

        writer.patch_u32_le(riff_size_position, HEADER_OVERHEAD + data_size)?;
        Ok(writer.into_vec())
    }

    fn write_sample(&self, writer: &mut ByteWriter, sample: i32) -> Result<()> {
        if !self.sample_format.contains(sample) {
            return Err(Error::invalid_input(format!(
                "sample {} out of range for {}",
                sample, self.sample_format
            )));
        }
        match self.sample_format {
            SampleFormat::I8 => writer.write_i8(sample as i8),
            SampleFormat::I16 => writer.write_i16_le(sample as i16),
            SampleFormat::I32 => writer.write_i32_le(sample),
        }
        Ok(())
    }
}

/// Serialize interleaved `samples` described by `format` into a WAV file
pub fn write_wav(format: &WavFormat, samples: &[i32]) -> Result<Vec<u8>> {
    WavMuxer::new(format.clone())?.mux(samples)
}
