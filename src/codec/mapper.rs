//! Sample ↔ pixel grid mapping
//!
//! ## Layout
//!
//! ```text
//! row 0          header (5 pixels) + zeros
//! row 1          channel 0, samples [0, w)
//! row 2          channel 1, samples [0, w)        (stereo only)
//! row 3          channel 0, samples [w, 2w)
//! ...
//! row R          last encoded row, padded with encoded silence
//! row R+1..      base image rows, unchanged       (merge only)
//! ```
//!
//! Each sample is bias-shifted to unsigned and stored as one packed pixel,
//! red holding the most significant byte. 16-bit samples therefore only
//! touch the blue and alpha channels.

use tracing::debug;

use super::grid::PixelGrid;
use super::header::{EncodedHeader, HEADER_PIXELS};
use crate::error::{Error, Result};
use crate::format::{ChannelSampleSet, WavFormat};
use crate::raster::{self, RasterRegion};
use crate::util::{ceil_sqrt, SampleFormat};

/// Width and row count of the encoded region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Pixels per row
    pub width: usize,
    /// Audio rows, excluding the header row
    pub encoded_rows: usize,
    /// Channels interleaved row by row
    pub channels: usize,
}

impl GridGeometry {
    /// Near-square layout for a new image holding `frames` samples per
    /// channel
    pub fn fresh(frames: usize, channels: usize) -> Self {
        let width = ceil_sqrt(frames).max(HEADER_PIXELS);
        let rows_per_channel = if frames == 0 { 0 } else { width };
        GridGeometry {
            width,
            encoded_rows: rows_per_channel * channels,
            channels,
        }
    }

    /// Layout at a fixed `width`, as imposed by a base image
    pub fn with_width(frames: usize, channels: usize, width: usize) -> Result<Self> {
        if width < HEADER_PIXELS {
            return Err(Error::invalid_input(format!(
                "image width {} is narrower than the {}-pixel header",
                width, HEADER_PIXELS
            )));
        }
        Ok(GridGeometry {
            width,
            encoded_rows: frames.div_ceil(width) * channels,
            channels,
        })
    }

    /// Rows holding each channel's samples
    pub fn rows_per_channel(&self) -> usize {
        self.encoded_rows / self.channels.max(1)
    }

    /// Header row plus encoded rows
    pub fn height(&self) -> usize {
        self.encoded_rows + 1
    }
}

/// Result of encoding audio into pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Header, encoded rows and, when merging, the base image rows
    pub grid: PixelGrid,
    /// Header written into row 0
    pub header: EncodedHeader,
}

/// Result of decoding pixels back into audio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAudio {
    /// Format chunk rebuilt from the header
    pub format: WavFormat,
    /// Interleaved samples, channel 0 first
    pub samples: Vec<i32>,
}

impl DecodedAudio {
    /// Serialize as a WAV file
    pub fn to_wav(&self) -> Result<Vec<u8>> {
        crate::format::wav::write_wav(&self.format, &self.samples)
    }
}

/// Check that `format` can be carried by the pixel layout
pub fn check_transcodable(format: &WavFormat) -> Result<SampleFormat> {
    if !matches!(format.channels, 1 | 2) {
        return Err(Error::unsupported(format!(
            "Unsupported number of channels: {}",
            format.channels
        )));
    }
    if !format.format_tag.is_transcodable() {
        return Err(Error::unsupported(format!(
            "Unsupported WAV format: {:?}",
            format.format_tag
        )));
    }
    match format.sample_format() {
        Some(fmt @ (SampleFormat::I16 | SampleFormat::I32)) => Ok(fmt),
        _ => Err(Error::unsupported(format!(
            "Unsupported number of bits per sample: {}",
            format.bits_per_sample
        ))),
    }
}

/// Encode per-channel samples into a pixel grid.
///
/// With `base`, the grid takes the base image's width and its rows are
/// appended after the encoded region.
pub fn encode_samples(
    format: &WavFormat,
    samples: &ChannelSampleSet,
    base: Option<&RasterRegion>,
) -> Result<EncodedImage> {
    let sample_format = check_transcodable(format)?;
    let channels = format.channels as usize;
    if samples.num_channels() != channels {
        return Err(Error::invalid_input(format!(
            "format declares {} channels, sample set has {}",
            channels,
            samples.num_channels()
        )));
    }

    let frames = samples.frames();
    let geometry = match base {
        Some(base) => GridGeometry::with_width(frames, channels, base.width())?,
        None => GridGeometry::fresh(frames, channels),
    };
    debug!(
        "Grid geometry: {} frames x {} ch -> width {}, {} encoded rows",
        frames, channels, geometry.width, geometry.encoded_rows
    );

    let encoded_rows = u32::try_from(geometry.encoded_rows).map_err(|_| {
        Error::invalid_input(format!("{} encoded rows overflow the header", geometry.encoded_rows))
    })?;
    let header = EncodedHeader::new(encoded_rows, format);

    let mut grid = PixelGrid::new(geometry.width, geometry.height())?;
    header.write_row(grid.row_mut(0))?;

    let silence = sample_format.to_unsigned(0);
    for block in 0..geometry.rows_per_channel() {
        let start = block * geometry.width;
        for (channel, source) in samples.channels().iter().enumerate() {
            let row = grid.row_mut(1 + block * channels + channel);

            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = match source.get(start + x) {
                    Some(&sample) => {
                        if !sample_format.contains(sample) {
                            return Err(Error::invalid_input(format!(
                                "sample {} out of range for {}",
                                sample, sample_format
                            )));
                        }
                        sample_format.to_unsigned(sample)
                    }
                    None => silence,
                };
            }
        }
    }

    let grid = match base {
        Some(base) => raster::merge(grid, base)?,
        None => grid,
    };

    Ok(EncodedImage { grid, header })
}

/// Decode the audio stored in an encoded raster.
///
/// Rows after the encoded region are ignored.
pub fn decode_samples(raster: &RasterRegion) -> Result<DecodedAudio> {
    let header = raster.header()?;
    header.validate()?;
    let format = header.wav_format()?;
    let sample_format = header.sample_format()?;

    let encoded_rows = header.encoded_rows as usize;
    if encoded_rows >= raster.height() {
        return Err(Error::format(format!(
            "invalid encoded data: header declares {} encoded rows, image has {} rows",
            encoded_rows,
            raster.height()
        )));
    }

    let channels = header.channels as usize;
    let width = raster.width();
    let mut samples = Vec::with_capacity(encoded_rows * width);

    for y in (1..=encoded_rows).step_by(channels) {
        for x in 0..width {
            for c in 0..channels {
                samples.push(sample_format.from_unsigned(raster.pixel(x, y + c)));
            }
        }
    }

    debug!(
        "Decoded {} samples from {} rows of width {}",
        samples.len(),
        encoded_rows,
        width
    );
    Ok(DecodedAudio { format, samples })
}
