//! Core types for the barscan scan-line extraction stack.
//!
//! This crate is intentionally small and purely in-memory. It owns the
//! single-channel [`PixelBuffer`] abstraction every operator reads and
//! writes through, the error taxonomy, and the logger. It does *not*
//! acquire frames, render pixels, or know anything about symbologies.

mod error;
mod logger;
mod pixel;

pub use error::CoreError;
pub use pixel::{Moments, PixelBuffer, PixelValue};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
