//! Greyscale image container and its JPEG codec collaborator
//!
//! This module provides a float pixel grid with cached statistics, a codec trait
//! for loading and saving it, and the shared error type.

pub mod common;
pub mod greyscale;
pub mod jpeg;

pub use common::{
    ImageError,
    Result,
};

pub use greyscale::{
    Image,
    ImageStats,
};

pub use jpeg::{
    ColorSpace,
    DecodedImage,
    JpegCodec,
    JpegConfig,
    JpegConfigBuilder,
    StandardJpegCodec,
};
