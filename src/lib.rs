//! wavepix - lossless audio ↔ image transcoding
//!
//! wavepix stores every sample of an uncompressed PCM WAV file in one pixel
//! of an RGBA image, together with a small header that makes the image
//! self-describing, and rebuilds the identical WAV file from such an image.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE parsing and writing
//! - `codec`: the sample ↔ pixel grid mapping and its header row
//! - `raster`: merging with and slicing out of RGBA rasters, image file I/O
//! - `pipeline`: the `Transcoder` tying both directions together
//! - `util`: byte cursor, pixel packing and sample formats

pub mod codec;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod raster;
pub mod util;

pub use error::{Error, Result};
pub use pipeline::{TranscodeOptions, Transcoder};

/// wavepix version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the wavepix library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the wavepix library with the given configuration
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| Error::Init(format!("Failed to install logger: {}", e)))?;
    }

    Ok(())
}
