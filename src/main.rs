//! wavepix CLI - store WAV audio in images and get it back
//!
//! A command-line front end for the wavepix library

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use wavepix_lib::format::{detect_format_from_extension, is_wav};
use wavepix_lib::raster::{load_raster, save_png};
use wavepix_lib::{init, Config, TranscodeOptions, Transcoder};

/// Suffix appended to encoded image names and stripped again on decode
const ENCODED_SUFFIX: &str = "_encoded";

#[derive(Parser)]
#[command(name = "wavepix")]
#[command(about = "wavepix - lossless WAV <-> image transcoding", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a WAV file into a PNG image
    Encode {
        /// Input WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file (default: <input stem>_encoded.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Existing image to place below the encoded rows
        #[arg(short, long)]
        base: Option<PathBuf>,

        /// Keep leading silence instead of trimming it
        #[arg(long)]
        keep_silence: bool,
    },

    /// Decode an encoded image back into a WAV file
    Decode {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV file (default: <input stem without _encoded>.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the format of a WAV file or the header of an encoded image
    Info {
        /// Input file path
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config {
        verbose: cli.verbose,
        debug: cli.debug,
    };

    init(config)?;

    info!("wavepix v{}", wavepix_lib::VERSION);

    match cli.command {
        Commands::Encode {
            input,
            output,
            base,
            keep_silence,
        } => {
            let output = output.unwrap_or_else(|| default_image_path(&input));
            info!("Encoding {} -> {}", input.display(), output.display());
            cmd_encode(&input, &output, base.as_deref(), keep_silence)?;
        }
        Commands::Decode { input, output } => {
            let output = output.unwrap_or_else(|| default_audio_path(&input));
            info!("Decoding {} -> {}", input.display(), output.display());
            cmd_decode(&input, &output)?;
        }
        Commands::Info { input } => {
            cmd_info(&input)?;
        }
    }

    Ok(())
}

fn cmd_encode(
    input: &Path,
    output: &Path,
    base: Option<&Path>,
    keep_silence: bool,
) -> anyhow::Result<()> {
    let wav = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let base = base
        .map(|path| {
            load_raster(path).with_context(|| format!("Failed to load image {}", path.display()))
        })
        .transpose()?;

    let transcoder = Transcoder::new(TranscodeOptions {
        trim_leading_silence: !keep_silence,
    });
    let image = transcoder
        .audio_to_image(&wav, base.as_ref())
        .with_context(|| format!("Failed to encode {}", input.display()))?;

    save_png(&image.grid, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Encoded {} -> {} ({}x{}, {} encoded rows)",
        input.display(),
        output.display(),
        image.grid.width(),
        image.grid.height(),
        image.header.encoded_rows
    );
    Ok(())
}

fn cmd_decode(input: &Path, output: &Path) -> anyhow::Result<()> {
    let raster = load_raster(input)
        .with_context(|| format!("Failed to load image {}", input.display()))?;

    let wav = Transcoder::default()
        .image_to_audio(&raster)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    std::fs::write(output, &wav)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Decoded {} -> {} ({} bytes)",
        input.display(),
        output.display(),
        wav.len()
    );
    Ok(())
}

fn cmd_info(input: &Path) -> anyhow::Result<()> {
    let transcoder = Transcoder::default();
    let data = std::fs::read(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    println!("File: {}", input.display());

    let by_extension = input
        .to_str()
        .and_then(detect_format_from_extension)
        .unwrap_or("unknown");

    if is_wav(&data) || by_extension == "wav" {
        let format = transcoder.probe_audio(&data)?;
        println!("  Type: WAV audio");
        println!("  Format Tag: {:?}", format.format_tag);
        println!("  Channels: {}", format.channels);
        println!("  Sample Rate: {} Hz", format.sample_rate);
        println!("  Bits Per Sample: {}", format.bits_per_sample);
        println!("  Byte Rate: {}", format.byte_rate);
        println!("  Block Align: {}", format.block_align);
    } else {
        let raster = wavepix_lib::raster::decode_raster(&data)?;
        let header = transcoder.probe_image(&raster)?;
        println!("  Type: encoded image ({}x{})", raster.width(), raster.height());
        println!("  Encoded Rows: {}", header.encoded_rows);
        println!("  Channels: {}", header.channels);
        println!("  Sample Rate: {} Hz", header.sample_rate);
        println!("  Bits Per Sample: {}", header.bits_per_sample);
        println!("  Format Tag: {}", header.format_tag);
        let base_rows = raster
            .height()
            .saturating_sub(header.encoded_rows as usize + 1);
        if base_rows > 0 {
            println!("  Base Image Rows: {}", base_rows);
        }
    }

    Ok(())
}

/// `dir/song.wav` -> `dir/song_encoded.png`
fn default_image_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    input.with_file_name(format!("{}{}.png", stem, ENCODED_SUFFIX))
}

/// `dir/song_encoded.png` -> `dir/song.wav`
fn default_audio_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let stem = stem.strip_suffix(ENCODED_SUFFIX).unwrap_or(&stem);
    input.with_file_name(format!("{}.wav", stem))
}
