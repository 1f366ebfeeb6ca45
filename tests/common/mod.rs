//! Common test utilities for wavepix integration tests
//!
//! Helpers that build WAV files byte by byte, independently of the muxer
//! under test, plus simple sample generators.

#![allow(dead_code)]

use wavepix_lib::raster::RasterRegion;

// ============================================================================
// WAV Construction
// ============================================================================

/// Fields of a hand-built WAV file; derived fields can be overridden to
/// produce malformed input
#[derive(Debug, Clone)]
pub struct WavSpec {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub byte_rate: Option<u32>,
    pub block_align: Option<u16>,
    pub riff_size: Option<u32>,
}

impl WavSpec {
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        WavSpec {
            format_tag: 1,
            channels,
            sample_rate,
            bits_per_sample,
            byte_rate: None,
            block_align: None,
            riff_size: None,
        }
    }

    /// Build the file with `samples` interleaved across channels
    pub fn build(&self, samples: &[i32]) -> Vec<u8> {
        let bytes_per_sample = (self.bits_per_sample / 8) as usize;
        let block_align = self
            .block_align
            .unwrap_or(self.channels * self.bits_per_sample / 8);
        let byte_rate = self.byte_rate.unwrap_or(
            self.sample_rate * self.channels as u32 * self.bits_per_sample as u32 / 8,
        );

        let mut data = Vec::with_capacity(samples.len() * bytes_per_sample);
        for &sample in samples {
            let le = sample.to_le_bytes();
            data.extend_from_slice(&le[..bytes_per_sample]);
        }

        let mut file = Vec::new();
        file.extend_from_slice(b"RIFF");
        let riff_size = self.riff_size.unwrap_or(36 + data.len() as u32);
        file.extend_from_slice(&riff_size.to_le_bytes());
        file.extend_from_slice(b"WAVE");

        file.extend_from_slice(b"fmt ");
        file.extend_from_slice(&16u32.to_le_bytes());
        file.extend_from_slice(&self.format_tag.to_le_bytes());
        file.extend_from_slice(&self.channels.to_le_bytes());
        file.extend_from_slice(&self.sample_rate.to_le_bytes());
        file.extend_from_slice(&byte_rate.to_le_bytes());
        file.extend_from_slice(&block_align.to_le_bytes());
        file.extend_from_slice(&self.bits_per_sample.to_le_bytes());

        file.extend_from_slice(b"data");
        file.extend_from_slice(&(data.len() as u32).to_le_bytes());
        file.extend_from_slice(&data);
        file
    }
}

/// Mono 16-bit PCM file at 44.1 kHz
pub fn mono_16_wav(samples: &[i32]) -> Vec<u8> {
    WavSpec::pcm(1, 44100, 16).build(samples)
}

/// Interleave two channels
pub fn interleave(left: &[i32], right: &[i32]) -> Vec<i32> {
    left.iter()
        .zip(right)
        .flat_map(|(&l, &r)| [l, r])
        .collect()
}

// ============================================================================
// Sample Generation
// ============================================================================

/// Deterministic pseudo-random samples spanning the full range of `bits`
pub fn noise(count: usize, bits: u16, seed: u32) -> Vec<i32> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..count)
        .map(|_| {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            match bits {
                16 => (state >> 16) as u16 as i16 as i32,
                _ => state as i32,
            }
        })
        .map(|s| if s == 0 { 1 } else { s })
        .collect()
}

/// Sine wave at `freq` Hz scaled to 16-bit
pub fn sine_16(count: usize, freq: f32, sample_rate: u32) -> Vec<i32> {
    (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((2.0 * std::f32::consts::PI * freq * t).sin() * 30000.0) as i32
        })
        .collect()
}

// ============================================================================
// Rasters
// ============================================================================

/// Opaque gradient image
pub fn gradient_raster(width: usize, height: usize) -> RasterRegion {
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            rgba.push((x * 255 / width.max(1)) as u8);
            rgba.push((y * 255 / height.max(1)) as u8);
            rgba.push(((x + y) % 256) as u8);
            rgba.push(255);
        }
    }
    RasterRegion::new(width, height, rgba).expect("gradient dimensions")
}
