//! Error handling tests for wavepix
//!
//! Malformed containers, unsupported formats and corrupted images must be
//! rejected with the matching error variant and never panic.

#[path = "common/mod.rs"]
mod common;

use common::*;
use std::panic;
use wavepix_lib::codec::PixelGrid;
use wavepix_lib::error::Error;
use wavepix_lib::format::wav::parse_wav;
use wavepix_lib::raster::RasterRegion;
use wavepix_lib::Transcoder;

/// Test that an operation returns an error instead of panicking
fn assert_error_not_panic<F: FnOnce() -> Result<R, Error> + panic::UnwindSafe, R>(
    f: F,
    description: &str,
) -> Error {
    match panic::catch_unwind(f) {
        Ok(Ok(_)) => panic!("{} succeeded instead of returning error", description),
        Ok(Err(e)) => e,
        Err(_) => panic!("Panic occurred during: {}", description),
    }
}

// ============================================================================
// WAV Container Errors
// ============================================================================

mod wav_errors {
    use super::*;

    #[test]
    fn test_riff_size_too_large() {
        let mut spec = WavSpec::pcm(1, 44100, 16);
        spec.riff_size = Some(36 + 4 + 1);
        let wav = spec.build(&[1, 2]);
        let err = assert_error_not_panic(|| parse_wav(&wav), "oversized RIFF field");
        assert!(err.is_format(), "got {:?}", err);
    }

    #[test]
    fn test_riff_size_too_small() {
        let mut spec = WavSpec::pcm(1, 44100, 16);
        spec.riff_size = Some(36);
        let wav = spec.build(&[1, 2]);
        assert!(parse_wav(&wav).unwrap_err().is_format());
    }

    #[test]
    fn test_trailing_garbage() {
        let mut wav = mono_16_wav(&[1, 2]);
        wav.extend_from_slice(&[0xAA; 3]);
        assert!(parse_wav(&wav).unwrap_err().is_format());
    }

    #[test]
    fn test_byte_rate_mismatch() {
        let mut spec = WavSpec::pcm(2, 44100, 16);
        spec.byte_rate = Some(44100 * 2);
        let err = parse_wav(&spec.build(&[1, 2])).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("176400"), "{}", err);
    }

    #[test]
    fn test_block_align_mismatch() {
        let mut spec = WavSpec::pcm(2, 44100, 16);
        spec.block_align = Some(2);
        assert!(parse_wav(&spec.build(&[1, 2])).unwrap_err().is_format());
    }

    #[test]
    fn test_24_bit_unsupported() {
        let wav = WavSpec::pcm(1, 44100, 24).build(&[1, 2, 3]);
        let err = parse_wav(&wav).unwrap_err();
        assert!(err.is_unsupported(), "got {:?}", err);
    }

    #[test]
    fn test_bad_magic() {
        let mut wav = mono_16_wav(&[1]);
        wav[0..4].copy_from_slice(b"RIFX");
        assert!(parse_wav(&wav).unwrap_err().is_format());

        let mut wav = mono_16_wav(&[1]);
        wav[8..12].copy_from_slice(b"AVI ");
        assert!(parse_wav(&wav).unwrap_err().is_format());
    }

    #[test]
    fn test_truncated_headers() {
        let wav = mono_16_wav(&[1, 2, 3]);
        for len in 0..44 {
            let cut = &wav[..len];
            // Cut files fail either on the size check or on a bounds check
            let err = assert_error_not_panic(|| parse_wav(cut), "truncated header");
            assert!(
                matches!(err, Error::Format(_) | Error::OutOfBounds { .. }),
                "len {}: {:?}",
                len,
                err
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_wav(&[]), Err(Error::OutOfBounds { .. })));
    }
}

// ============================================================================
// Encode Errors
// ============================================================================

mod encode_errors {
    use super::*;

    #[test]
    fn test_three_channels_unsupported() {
        let wav = WavSpec::pcm(3, 44100, 16).build(&[1, 2, 3]);
        let err = Transcoder::default().audio_to_image(&wav, None).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_8_bit_unsupported() {
        let wav = WavSpec::pcm(1, 8000, 8).build(&[1, -1]);
        let err = Transcoder::default().audio_to_image(&wav, None).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_unknown_format_tag_unsupported() {
        let mut spec = WavSpec::pcm(1, 8000, 16);
        spec.format_tag = 6;
        let err = Transcoder::default()
            .audio_to_image(&spec.build(&[1]), None)
            .unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_base_image_too_narrow() {
        let base = gradient_raster(4, 4);
        let err = Transcoder::default()
            .audio_to_image(&mono_16_wav(&[1, 2, 3]), Some(&base))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}

// ============================================================================
// Decode Errors
// ============================================================================

mod decode_errors {
    use super::*;

    fn raster_with_header(fields: [u32; 5], width: usize, height: usize) -> RasterRegion {
        let mut grid = PixelGrid::new(width, height).unwrap();
        grid.row_mut(0)[..5].copy_from_slice(&fields);
        RasterRegion::from(&grid)
    }

    #[test]
    fn test_plain_image_rejected() {
        let raster = gradient_raster(16, 16);
        let err = assert_error_not_panic(
            || Transcoder::default().image_to_audio(&raster),
            "arbitrary image",
        );
        assert!(err.is_format());
    }

    #[test]
    fn test_invalid_channels() {
        let raster = raster_with_header([1, 0, 16, 8000, 1], 5, 2);
        let err = Transcoder::default().image_to_audio(&raster).unwrap_err();
        assert!(err.to_string().contains("invalid encoded data"));
    }

    #[test]
    fn test_invalid_bits() {
        let raster = raster_with_header([1, 1, 8, 8000, 1], 5, 2);
        assert!(Transcoder::default().image_to_audio(&raster).unwrap_err().is_format());
    }

    #[test]
    fn test_invalid_format_tag() {
        let raster = raster_with_header([1, 1, 16, 8000, 2], 5, 2);
        assert!(Transcoder::default().image_to_audio(&raster).unwrap_err().is_format());
    }

    #[test]
    fn test_row_count_exceeds_image() {
        let raster = raster_with_header([10, 1, 16, 8000, 1], 5, 4);
        assert!(Transcoder::default().image_to_audio(&raster).unwrap_err().is_format());
    }

    #[test]
    fn test_too_narrow_for_header() {
        let raster = RasterRegion::new(3, 3, vec![0; 36]).unwrap();
        assert!(Transcoder::default().image_to_audio(&raster).unwrap_err().is_format());
    }

    #[test]
    fn test_empty_raster() {
        let raster = RasterRegion::new(0, 0, Vec::new()).unwrap();
        assert!(Transcoder::default().image_to_audio(&raster).unwrap_err().is_format());
    }
}
