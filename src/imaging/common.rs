//! Common utilities module
//!
//! This module contains the error type shared by the image container and the codec.

pub mod error;

pub use error::{ImageError, Result};
