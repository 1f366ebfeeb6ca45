//! WAV audio format support
//!
//! This module implements RIFF/WAV file format parsing and writing over
//! in-memory buffers. Only the canonical layout is produced: a 16-byte
//! `fmt ` chunk followed by a single `data` chunk.

pub mod demuxer;
pub mod header;
pub mod muxer;

pub use demuxer::{parse_wav, WavAudio, WavDemuxer};
pub use header::{FormatTag, WavFormat};
pub use muxer::{write_wav, WavMuxer};

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";
