use std::fmt;

use crate::imaging::common::error::{ImageError, Result};
use crate::imaging::greyscale::stats::ImageStats;

/// Owned greyscale image, pixels stored row-major (`index = row * width + col`).
///
/// Cloning copies the pixel buffer together with the cached statistics and their
/// validity, so a clone never rescans what its source already knew.
#[derive(Debug, Clone)]
pub struct Image {
    pub(super) pixels: Vec<f32>,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) stats: ImageStats,
    pub(super) stats_valid: bool,
}

impl Image {
    /// Empty 0x0 image. Its (all-zero) statistics count as up to date.
    pub fn new() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
            stats: ImageStats::default(),
            stats_valid: true,
        }
    }

    /// Copies `width * height` values from `pixels`.
    ///
    /// Fails with `InvalidDimensions` if the slice length is anything else.
    pub fn from_buffer(pixels: &[f32], width: usize, height: usize) -> Result<Self> {
        Self::from_vec(pixels.to_vec(), width, height)
    }

    /// Takes ownership of `pixels` as the backing buffer.
    pub fn from_vec(pixels: Vec<f32>, width: usize, height: usize) -> Result<Self> {
        let expected = width.checked_mul(height);
        if expected != Some(pixels.len()) {
            return Err(ImageError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }

        Ok(Self::with_pixels(pixels, width, height))
    }

    /// Uniform image. Statistics are known without a scan.
    ///
    /// Fails with `InvalidDimensions` if `width * height` overflows or the
    /// buffer cannot be allocated.
    pub fn filled(value: f32, width: usize, height: usize) -> Result<Self> {
        let invalid = || ImageError::InvalidDimensions {
            width,
            height,
            len: 0,
        };
        let count = width.checked_mul(height).ok_or_else(invalid)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|_| invalid())?;
        pixels.resize(count, value);

        Ok(Self {
            pixels,
            width,
            height,
            stats: ImageStats::uniform(value),
            stats_valid: true,
        })
    }

    /// Builds an image around a buffer already checked against the dimensions.
    pub(super) fn with_pixels(pixels: Vec<f32>, width: usize, height: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            stats: ImageStats::default(),
            stats_valid: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty() || self.width == 0 || self.height == 0
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> Result<usize> {
        if col >= self.width || row >= self.height {
            return Err(ImageError::OutOfRange {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }

    /// Pixel value at (`col`, `row`).
    #[inline]
    pub fn at(&self, col: usize, row: usize) -> Result<f32> {
        let i = self.index(col, row)?;
        Ok(self.pixels[i])
    }

    /// Mutable pixel at (`col`, `row`).
    ///
    /// Marks the statistics stale whether or not the caller writes through the
    /// returned reference.
    #[inline]
    pub fn at_mut(&mut self, col: usize, row: usize) -> Result<&mut f32> {
        let i = self.index(col, row)?;
        self.stats_valid = false;
        Ok(&mut self.pixels[i])
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: f32) -> Result<()> {
        *self.at_mut(col, row)? = value;
        Ok(())
    }

    /// Row-major pixel buffer, `None` for an empty image.
    pub fn pixels(&self) -> Option<&[f32]> {
        (!self.is_empty()).then_some(self.pixels.as_slice())
    }

    /// Mutable row-major pixel buffer, `None` for an empty image.
    ///
    /// Always marks the statistics stale, even when returning `None`.
    pub fn pixels_mut(&mut self) -> Option<&mut [f32]> {
        self.stats_valid = false;
        if self.is_empty() {
            None
        } else {
            Some(self.pixels.as_mut_slice())
        }
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks_exact panics on a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

/// Two images are equal when their dimensions and pixels match; cached
/// statistics are not compared.
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

/// Space-separated values, one line per row, no trailing separator.
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
