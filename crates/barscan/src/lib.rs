//! High-level facade crate for the `barscan-*` workspace.
//!
//! The stack extracts a binary (0/1) signal from a region of a grayscale
//! video frame so that symbology-specific decoders (Code128, EAN, Code39,
//! ...) can interpret bar/space run-lengths. It is purely computational:
//! frame acquisition, rendering, scheduling, and the symbology decoders
//! themselves live on the other side of the in-memory boundary.
//!
//! ## Quickstart
//!
//! ```
//! use barscan::{scan_binary_line, PixelBuffer};
//! use nalgebra::Point2;
//!
//! // One white-bar-white scan line.
//! let row = vec![200u8, 200, 200, 30, 30, 30, 200, 200, 200];
//! let image = PixelBuffer::from_vec(9, 1, row).expect("valid image");
//!
//! let binary = scan_binary_line(&image, Point2::new(0.0, 0.0), Point2::new(9.0, 0.0));
//! assert_eq!(binary.bits, vec![0, 0, 0, 1, 1, 1, 0, 0, 0]);
//! ```
//!
//! ## API map
//! - `barscan::core`: pixel buffers, moments, errors, logging.
//! - `barscan::ops`: grayscale, integral image, histogram/Otsu, morphology,
//!   top-N selection.
//! - `barscan::skeleton`: workspace arena and the thinning kernel.
//! - `barscan::line`: Bresenham sampling and adaptive binarization.

pub use barscan_core as core;
pub use barscan_line as line;
pub use barscan_ops as ops;
pub use barscan_skeleton as skeleton;

pub use barscan_core::{CoreError, Moments, PixelBuffer, PixelValue};
pub use barscan_line::{binarize, detect_extrema, sample_line, BinaryLine, Extremum, LineSample};
pub use barscan_skeleton::{skeletonize, SkeletonWorkspace};

mod pipeline;

pub use pipeline::{scan_binary_line, PatchSkeletonizer};
