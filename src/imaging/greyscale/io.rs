use std::path::Path;

use tracing::{info, instrument};

use crate::imaging::common::error::Result;
use crate::imaging::greyscale::Image;
use crate::imaging::jpeg::{JpegCodec, StandardJpegCodec};

/// Clamps to [0, 255] and truncates toward zero.
fn to_sample(value: f32) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        value as u8
    }
}

impl Image {
    /// Loads a JPEG with the standard codec.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(&StandardJpegCodec::default(), path)
    }

    pub fn open_with<C, P>(codec: &C, path: P) -> Result<Self>
    where
        C: JpegCodec + ?Sized,
        P: AsRef<Path>,
    {
        let mut image = Image::new();
        image.load_with(codec, path)?;
        Ok(image)
    }

    /// Replaces this image with the contents of a JPEG file.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.load_with(&StandardJpegCodec::default(), path)
    }

    /// Replaces this image with the contents of a JPEG file decoded by `codec`.
    ///
    /// Colour input is reduced to BT.709 luminance. On error the image is left
    /// exactly as it was.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load_with<C, P>(&mut self, codec: &C, path: P) -> Result<()>
    where
        C: JpegCodec + ?Sized,
        P: AsRef<Path>,
    {
        let decoded = {
            let _span = tracing::info_span!("decode_jpeg").entered();
            codec.decode(path.as_ref())?
        };

        let (width, height) = (decoded.width, decoded.height);
        let pixels = decoded.into_luminance()?;

        *self = Image::with_pixels(pixels, width, height);

        info!(width, height, "Image loaded");
        Ok(())
    }

    /// Writes the image as a JPEG with the standard codec.
    pub fn save_jpeg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_jpeg_with(&StandardJpegCodec::default(), path)
    }

    /// Writes the image through `codec`.
    ///
    /// Pixels are clamped to [0, 255], truncated to 8 bits and written as grey
    /// RGB (R = G = B).
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_jpeg_with<C, P>(&self, codec: &C, path: P) -> Result<()>
    where
        C: JpegCodec + ?Sized,
        P: AsRef<Path>,
    {
        let rgb: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|&p| {
                let v = to_sample(p);
                [v, v, v]
            })
            .collect();

        {
            let _span = tracing::info_span!("encode_jpeg").entered();
            codec.encode(path.as_ref(), self.width, self.height, &rgb)?;
        }

        info!(width = self.width, height = self.height, "Image saved");
        Ok(())
    }
}
