use std::path::Path;

use crate::imaging::common::error::Result;
use crate::imaging::jpeg::types::DecodedImage;

pub trait JpegCodec {
    /// Decodes the file at `path` into 8-bit interleaved samples.
    fn decode(&self, path: &Path) -> Result<DecodedImage>;

    /// Writes `rgb` (interleaved R, G, B, one byte each) as a baseline JPEG.
    fn encode(&self, path: &Path, width: usize, height: usize, rgb: &[u8]) -> Result<()>;
}
