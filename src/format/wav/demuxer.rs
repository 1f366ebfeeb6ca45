//! WAV container parser
//!
//! Parses a fully buffered RIFF/WAVE file into its format chunk and
//! de-interleaved integer samples. The RIFF size field must match the buffer
//! length exactly and the format chunk must pass its cross-field checks
//! before any sample is read.

use tracing::{debug, warn};

use super::header::{WavFormat, FMT_CHUNK_SIZE};
use super::{DATA_CHUNK, FMT_CHUNK, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::format::ChannelSampleSet;
use crate::util::{ByteReader, SampleFormat};

/// Parsed WAV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    /// Format chunk
    pub format: WavFormat,
    /// Samples, one sequence per channel
    pub samples: ChannelSampleSet,
}

/// WAV demuxer over an in-memory buffer
#[derive(Debug)]
pub struct WavDemuxer<'a> {
    reader: ByteReader<'a>,
}

impl<'a> WavDemuxer<'a> {
    /// Create a new WAV demuxer
    pub fn new(data: &'a [u8]) -> Self {
        WavDemuxer {
            reader: ByteReader::new(data),
        }
    }

    /// Parse the whole file
    pub fn demux(mut self) -> Result<WavAudio> {
        self.read_riff_header()?;
        let format = self.read_format()?;
        let data_size = self.find_data_chunk()? as usize;

        let sample_format = format.sample_format().ok_or_else(|| {
            Error::unsupported(format!(
                "Unsupported bits per sample: {}",
                format.bits_per_sample
            ))
        })?;

        if data_size > self.reader.remaining() {
            return Err(Error::OutOfBounds {
                need: data_size,
                have: self.reader.remaining(),
            });
        }

        let channels = format.channels as usize;
        let frames = data_size / channels / sample_format.sample_size();
        debug!(
            "WAV data: {} bytes, {} frames of {} x {}",
            data_size, frames, channels, sample_format
        );

        let mut samples = ChannelSampleSet::new(channels);
        let mut frame = vec![0i32; channels];
        for _ in 0..frames {
            for slot in frame.iter_mut() {
                *slot = self.read_sample(sample_format)?;
            }
            samples.push_frame(&frame)?;
        }

        Ok(WavAudio { format, samples })
    }

    /// Parse only the format chunk, leaving the samples unread
    pub fn probe(mut self) -> Result<WavFormat> {
        self.read_riff_header()?;
        self.read_format()
    }

    fn read_riff_header(&mut self) -> Result<()> {
        self.reader.expect_tag(RIFF_MAGIC)?;

        let declared = self.reader.read_u32_le()? as u64;
        let actual = self.reader.len() as u64 - 8;
        if declared != actual {
            return Err(Error::format(format!(
                "RIFF size mismatch: header declares {} bytes, file has {}",
                declared, actual
            )));
        }

        self.reader.expect_tag(WAVE_MAGIC)
    }

    fn read_format(&mut self) -> Result<WavFormat> {
        self.reader.expect_tag(FMT_CHUNK)?;

        let chunk_size = self.reader.read_u32_le()?;
        if chunk_size < FMT_CHUNK_SIZE {
            return Err(Error::format(format!(
                "fmt chunk too small: {} bytes, need at least {}",
                chunk_size, FMT_CHUNK_SIZE
            )));
        }

        let format = WavFormat::read(&mut self.reader)?;
        format.validate()?;

        // Extension bytes of WAVE_FORMAT_EXTENSIBLE and friends
        self.skip_padded((chunk_size - FMT_CHUNK_SIZE) as usize)?;

        debug!(
            "WAV format: {:?}, {} ch, {} Hz, {} bits",
            format.format_tag, format.channels, format.sample_rate, format.bits_per_sample
        );
        Ok(format)
    }

    /// Skip chunks until `data` and return its declared size
    fn find_data_chunk(&mut self) -> Result<u32> {
        loop {
            if self.reader.remaining() == 0 {
                return Err(Error::format("data chunk not found"));
            }

            let id = self.reader.read_fourcc()?;
            let size = self.reader.read_u32_le()?;
            if &id == DATA_CHUNK {
                return Ok(size);
            }

            warn!(
                "Skipping {} byte chunk {:?}",
                size,
                String::from_utf8_lossy(&id)
            );
            self.skip_padded(size as usize)?;
        }
    }

    /// Skip a chunk body; RIFF chunks are word-aligned
    fn skip_padded(&mut self, size: usize) -> Result<()> {
        self.reader.skip(size)?;
        if size % 2 != 0 && self.reader.remaining() > 0 {
            self.reader.skip(1)?;
        }
        Ok(())
    }

    fn read_sample(&mut self, format: SampleFormat) -> Result<i32> {
        Ok(match format {
            SampleFormat::I8 => self.reader.read_i8()? as i32,
            SampleFormat::I16 => self.reader.read_i16_le()? as i32,
            SampleFormat::I32 => self.reader.read_i32_le()?,
        })
    }
}

/// Parse a complete WAV file
pub fn parse_wav(data: &[u8]) -> Result<WavAudio> {
    WavDemuxer::new(data).demux()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::wav::FormatTag;

    fn build_wav(
        channels: u16,
        bits: u16,
        extra_chunk: Option<&[u8]>,
        data: &[u8],
    ) -> Vec<u8> {
        let block_align = channels * bits / 8;
        let mut body = Vec::new();
        body.extend_from_slice(b"WAVE");
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&16u32.to_le_bytes());
        body.extend_from_slice(&1u16.to_le_bytes());
        body.extend_from_slice(&channels.to_le_bytes());
        body.extend_from_slice(&8000u32.to_le_bytes());
        body.extend_from_slice(&(8000 * block_align as u32).to_le_bytes());
        body.extend_from_slice(&block_align.to_le_bytes());
        body.extend_from_slice(&bits.to_le_bytes());
        if let Some(extra) = extra_chunk {
            body.extend_from_slice(b"LIST");
            body.extend_from_slice(&(extra.len() as u32).to_le_bytes());
            body.extend_from_slice(extra);
            if extra.len() % 2 != 0 {
                body.push(0);
            }
        }
        body.extend_from_slice(b"data");
        body.extend_from_slice(&(data.len() as u32).to_le_bytes());
        body.extend_from_slice(data);

        let mut file = Vec::new();
        file.extend_from_slice(b"RIFF");
        file.extend_from_slice(&(body.len() as u32).to_le_bytes());
        file.extend_from_slice(&body);
        file
    }

    #[test]
    fn test_parse_stereo_16() {
        let data: Vec<u8> = [5i16, 7, -5, -7]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        let wav = parse_wav(&build_wav(2, 16, None, &data)).unwrap();

        assert_eq!(wav.format.format_tag, FormatTag::Pcm);
        assert_eq!(wav.format.channels, 2);
        assert_eq!(wav.samples.channel(0), Some(&[5, -5][..]));
        assert_eq!(wav.samples.channel(1), Some(&[7, -7][..]));
    }

    #[test]
    fn test_parse_8_bit_signed() {
        let wav = parse_wav(&build_wav(1, 8, None, &[0xFF, 0x01, 0x80])).unwrap();
        assert_eq!(wav.samples.channel(0), Some(&[-1, 1, -128][..]));
    }

    #[test]
    fn test_skips_unknown_chunks() {
        let data = 1234i32.to_le_bytes();
        let wav = parse_wav(&build_wav(1, 32, Some(b"INFOabc"), &data)).unwrap();
        assert_eq!(wav.samples.channel(0), Some(&[1234][..]));
    }

    #[test]
    fn test_size_mismatch() {
        let mut file = build_wav(1, 16, None, &[0, 0]);
        file.push(0);
        let err = parse_wav(&file).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("size mismatch"));
    }

    #[test]
    fn test_unsupported_bits() {
        let err = parse_wav(&build_wav(1, 24, None, &[0, 0, 0])).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_truncated_data() {
        let mut file = build_wav(1, 16, None, &[1, 0]);
        // Declare more data than present, keeping the RIFF size honest
        let len = file.len();
        file[len - 6..len - 2].copy_from_slice(&64u32.to_le_bytes());
        assert!(matches!(
            parse_wav(&file),
            Err(Error::OutOfBounds { need: 64, have: 2 })
        ));
    }

    #[test]
    fn test_probe() {
        let format = WavDemuxer::new(&build_wav(2, 32, None, &[])).probe().unwrap();
        assert_eq!(format.bits_per_sample, 32);
        assert_eq!(format.block_align, 8);
    }
}
