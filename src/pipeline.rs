//! Conversion pipeline
//!
//! `Transcoder` wires the WAV parser, the grid mapper and the raster adapter
//! together. Each call works on its own buffers; nothing is shared between
//! conversions.

use tracing::{debug, info};

use crate::codec::{self, EncodedHeader, EncodedImage};
use crate::error::Result;
use crate::format::wav::{self, WavDemuxer, WavFormat};
use crate::raster::{self, RasterRegion};

/// Options for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// Drop leading frames where every channel is zero before encoding
    pub trim_leading_silence: bool,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            trim_leading_silence: true,
        }
    }
}

/// Audio ↔ image transcoder
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    options: TranscodeOptions,
}

impl Transcoder {
    pub fn new(options: TranscodeOptions) -> Self {
        Transcoder { options }
    }

    /// Encode a WAV file into pixels, optionally on top of `base`
    pub fn audio_to_image(&self, wav: &[u8], base: Option<&RasterRegion>) -> Result<EncodedImage> {
        let mut audio = wav::parse_wav(wav)?;
        codec::check_transcodable(&audio.format)?;

        if self.options.trim_leading_silence {
            let trimmed = audio.samples.trim_leading_silence();
            debug!("Trimmed {} leading silent frames", trimmed);
        }

        let image = codec::encode_samples(&audio.format, &audio.samples, base)?;
        info!(
            "{} audio ({} frames) encoded to {}x{} image",
            if audio.format.is_stereo() { "Stereo" } else { "Mono" },
            audio.samples.frames(),
            image.grid.width(),
            image.grid.height()
        );
        Ok(image)
    }

    /// Rebuild the WAV file carried by an encoded raster
    pub fn image_to_audio(&self, raster: &RasterRegion) -> Result<Vec<u8>> {
        let region = raster::slice_encoded(raster)?;
        let decoded = codec::decode_samples(&region)?;
        let bytes = decoded.to_wav()?;
        info!(
            "Image converted to {} audio ({} samples, {} bytes)",
            if decoded.format.is_stereo() { "stereo" } else { "mono" },
            decoded.samples.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Read and validate the header of an encoded raster
    pub fn probe_image(&self, raster: &RasterRegion) -> Result<EncodedHeader> {
        let header = raster.header()?;
        header.validate()?;
        Ok(header)
    }

    /// Parse and validate the format chunk of a WAV file
    pub fn probe_audio(&self, wav: &[u8]) -> Result<WavFormat> {
        WavDemuxer::new(wav).probe()
    }
}
