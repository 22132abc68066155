//! Line sampling and adaptive binarization.
//!
//! [`sample_line`] pulls raw gray intensities along a candidate scan line;
//! [`binarize`] turns them into the 0/1 sequence (dark = 1) whose
//! run-lengths the symbology decoders consume. The binarizer's extrema and
//! threshold rules determine directly whether a barcode decodes, so their
//! tie-breaks and constants are exact contracts, not tunables.

mod binarize;
mod sample;

pub use binarize::{binarize, detect_extrema, BinaryLine, Extremum};
pub use sample::{sample_line, LineSample};
