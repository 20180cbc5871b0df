//! JPEG codec implementation using the image library.
//!
//! Decoding yields either grayscale or RGB samples. The source colour space is
//! read from the frame headers first, since the `image` decoder silently converts
//! CMYK and YCCK to RGB; anything other than Luma, YCbCr or RGB is rejected before
//! the scanlines are read. Encoding always writes three-channel
//! baseline JPEG. Without the `jpeg` feature the codec still exists, but every
//! call fails with `ImageError::CodecUnavailable`.

use std::path::Path;

#[cfg(feature = "jpeg")]
use std::fs::File;
#[cfg(feature = "jpeg")]
use std::io::{BufWriter, Cursor, Write};

#[cfg(feature = "jpeg")]
use image::codecs::jpeg::{JpegDecoder, JpegEncoder};
#[cfg(feature = "jpeg")]
use image::{ColorType, ExtendedColorType, ImageDecoder};
#[cfg(feature = "jpeg")]
use tracing::debug;
#[cfg(feature = "jpeg")]
use zune_jpeg::zune_core::colorspace::ColorSpace as SourceColorSpace;

use crate::imaging::common::error::{ImageError, Result};
use crate::imaging::jpeg::codec::JpegCodec;
#[cfg(feature = "jpeg")]
use crate::imaging::jpeg::types::ColorSpace;
use crate::imaging::jpeg::types::{DecodedImage, JpegConfig};

/// JPEG codec backed by the `image` crate.
#[derive(Debug, Clone, Default)]
pub struct StandardJpegCodec {
    config: JpegConfig,
}

impl StandardJpegCodec {
    pub fn new(config: JpegConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JpegConfig {
        &self.config
    }

    /// Whether this build can actually decode and encode.
    pub fn is_available() -> bool {
        cfg!(feature = "jpeg")
    }

    #[cfg_attr(not(feature = "jpeg"), allow(dead_code))]
    fn validate_dimensions(&self, width: usize, height: usize, len: usize) -> Result<()> {
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(3));
        if expected != Some(len) {
            return Err(ImageError::InvalidDimensions {
                width,
                height,
                len: len / 3,
            });
        }

        if self.config.validate_dimensions && (width == 0 || height == 0) {
            return Err(ImageError::InvalidDimensions { width, height, len: 0 });
        }

        Ok(())
    }
}

/// Colour space as stored in the file, before any decoder-side conversion.
#[cfg(feature = "jpeg")]
fn source_color_space(data: &[u8]) -> Result<ColorSpace> {
    let mut headers = zune_jpeg::JpegDecoder::new(Cursor::new(data));
    headers
        .decode_headers()
        .map_err(|e| ImageError::DecodeError(e.to_string()))?;

    match headers.input_colorspace() {
        Some(SourceColorSpace::Luma) => Ok(ColorSpace::Grayscale),
        Some(SourceColorSpace::YCbCr | SourceColorSpace::RGB) => Ok(ColorSpace::Rgb),
        Some(other) => Err(ImageError::UnsupportedColorSpace(format!("{other:?}"))),
        None => Err(ImageError::DecodeError("JPEG headers were not decoded".to_string())),
    }
}

#[cfg(feature = "jpeg")]
impl JpegCodec for StandardJpegCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let data = std::fs::read(path).map_err(|e| ImageError::cannot_open(path, e))?;
        let color_space = source_color_space(&data)?;

        let decoder = JpegDecoder::new(Cursor::new(data.as_slice()))
            .map_err(|e| ImageError::DecodeError(e.to_string()))?;

        let (width, height) = decoder.dimensions();
        match (&color_space, decoder.color_type()) {
            (ColorSpace::Grayscale, ColorType::L8) | (ColorSpace::Rgb, ColorType::Rgb8) => {}
            (_, other) => return Err(ImageError::UnsupportedColorSpace(format!("{other:?}"))),
        }

        debug!("Decoding JPEG: {}x{} {:?}", width, height, color_space);

        let total_bytes = usize::try_from(decoder.total_bytes())
            .map_err(|e| ImageError::DecodeError(e.to_string()))?;
        let mut samples = vec![0u8; total_bytes];
        decoder
            .read_image(&mut samples)
            .map_err(|e| ImageError::DecodeError(e.to_string()))?;

        Ok(DecodedImage {
            width: width as usize,
            height: height as usize,
            samples,
            color_space,
        })
    }

    fn encode(&self, path: &Path, width: usize, height: usize, rgb: &[u8]) -> Result<()> {
        self.validate_dimensions(width, height, rgb.len())?;

        let too_large = || ImageError::InvalidDimensions {
            width,
            height,
            len: rgb.len() / 3,
        };
        let encoded_width = u32::try_from(width).map_err(|_| too_large())?;
        let encoded_height = u32::try_from(height).map_err(|_| too_large())?;

        debug!("Encoding JPEG: {}x{}, quality {}", width, height, self.config.quality);

        let file = File::create(path).map_err(|e| ImageError::cannot_open(path, e))?;
        let mut output = BufWriter::new(file);

        JpegEncoder::new_with_quality(&mut output, self.config.quality)
            .encode(rgb, encoded_width, encoded_height, ExtendedColorType::Rgb8)
            .map_err(|e| ImageError::EncodeError(e.to_string()))?;

        output.flush()?;
        Ok(())
    }
}

#[cfg(not(feature = "jpeg"))]
impl JpegCodec for StandardJpegCodec {
    fn decode(&self, _path: &Path) -> Result<DecodedImage> {
        Err(ImageError::CodecUnavailable)
    }

    fn encode(&self, _path: &Path, _width: usize, _height: usize, _rgb: &[u8]) -> Result<()> {
        Err(ImageError::CodecUnavailable)
    }
}
