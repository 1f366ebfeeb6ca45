//! Audio ↔ image codec
//!
//! - `header`: the five-field record stored in the first pixel row
//! - `grid`: the canonical packed pixel grid
//! - `mapper`: sample layout in both directions

pub mod grid;
pub mod header;
pub mod mapper;

pub use grid::PixelGrid;
pub use header::{EncodedHeader, HEADER_PIXELS};
pub use mapper::{
    check_transcodable, decode_samples, encode_samples, DecodedAudio, EncodedImage, GridGeometry,
};
