//! Greyscale image module
//!
//! This module provides the `Image` value type: a row-major `f32` pixel grid with
//! bounds-checked access, scalar arithmetic, lazily cached statistics and JPEG
//! load/save through a [`JpegCodec`](crate::imaging::jpeg::JpegCodec).

mod arithmetic;
mod container;
mod io;
mod stats;


pub use container::Image;
pub use stats::ImageStats;
