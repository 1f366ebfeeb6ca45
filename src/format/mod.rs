//! Audio container handling
//!
//! Reading and writing of RIFF/WAVE files and the per-channel sample
//! storage shared with the image codec.

pub mod samples;
pub mod wav;

pub use samples::ChannelSampleSet;
pub use wav::{FormatTag, WavAudio, WavFormat};

/// Detect a supported container from a file extension
pub fn detect_format_from_extension(path: &str) -> Option<&'static str> {
    let ext = path.rsplit('.').next()?.to_lowercase();
    match ext.as_str() {
        "wav" | "wave" => Some("wav"),
        "png" => Some("png"),
        "jpg" | "jpeg" => Some("jpeg"),
        "bmp" => Some("bmp"),
        "gif" => Some("gif"),
        _ => None,
    }
}

/// True when `data` starts with a RIFF/WAVE signature
pub fn is_wav(data: &[u8]) -> bool {
    data.len() >= 12 && &data[0..4] == wav::RIFF_MAGIC && &data[8..12] == wav::WAVE_MAGIC
}
