//! JPEG codec module
//!
//! This module defines the codec collaborator the image container loads and saves
//! through, along with the standard implementation backed by the `image` crate.

mod codec;
mod standard_jpeg_codec;
pub mod types;


pub use codec::JpegCodec;
pub use standard_jpeg_codec::StandardJpegCodec;
pub use types::{ColorSpace, DecodedImage, JpegConfig, JpegConfigBuilder};
