//! Codec data and configuration types

use crate::imaging::common::error::{ImageError, Result};

/// BT.709 relative luminance weights for R, G and B.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Colour space reported by the decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpace {
    /// One sample per pixel
    Grayscale,
    /// Three interleaved samples per pixel, ordered R, G, B
    Rgb,
    /// Anything else the decoder produced, by name
    Other(String),
}

/// Decoded 8-bit image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved samples, `width * height * channels` bytes
    pub samples: Vec<u8>,
    /// Layout of `samples`
    pub color_space: ColorSpace,
}

impl DecodedImage {
    /// Collapses the samples to one luminance value per pixel.
    ///
    /// Grayscale samples are copied, RGB samples are weighted with the BT.709
    /// coefficients on the raw 0-255 values (no gamma handling).
    pub fn into_luminance(self) -> Result<Vec<f32>> {
        let channels = match &self.color_space {
            ColorSpace::Grayscale => 1,
            ColorSpace::Rgb => 3,
            ColorSpace::Other(name) => {
                return Err(ImageError::UnsupportedColorSpace(name.clone()));
            }
        };

        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(channels));
        if expected != Some(self.samples.len()) {
            return Err(ImageError::InvalidDimensions {
                width: self.width,
                height: self.height,
                len: self.samples.len() / channels,
            });
        }

        let luminance: Vec<f32> = match channels {
            1 => self.samples.iter().map(|&v| v as f32).collect(),
            _ => self
                .samples
                .chunks_exact(3)
                .map(|rgb| {
                    let value: f64 = rgb
                        .iter()
                        .zip(LUMINANCE_WEIGHTS)
                        .map(|(&sample, weight)| weight * sample as f64)
                        .sum();
                    value as f32
                })
                .collect(),
        };
        Ok(luminance)
    }
}

/// Configuration for JPEG encoding
#[derive(Debug, Clone)]
pub struct JpegConfig {
    /// Encoder quality, 1 to 100 (libjpeg's default is 75)
    pub quality: u8,
    /// Whether to reject zero-sized images before creating the output file
    pub validate_dimensions: bool,
}

impl Default for JpegConfig {
    fn default() -> Self {
        Self {
            quality: 75,
            validate_dimensions: true,
        }
    }
}

impl JpegConfig {
    pub fn builder() -> JpegConfigBuilder {
        JpegConfigBuilder::default()
    }
}

/// Builder for JpegConfig
#[derive(Default)]
pub struct JpegConfigBuilder {
    quality: Option<u8>,
    validate_dimensions: Option<bool>,
}

impl JpegConfigBuilder {
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> JpegConfig {
        let default = JpegConfig::default();
        JpegConfig {
            quality: self.quality.unwrap_or(default.quality),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
