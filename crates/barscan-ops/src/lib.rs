//! Stateless image operators over [`barscan_core::PixelBuffer`] planes.
//!
//! Every function here is a pure function of its inputs: no hidden state,
//! no allocation beyond the explicitly returned values, and same-size
//! buffer preconditions documented per function (checked with
//! `debug_assert!` only, to keep the per-frame hot path free of branches).

mod gray;
mod histogram;
mod integral;
mod morph;
mod top;

pub use gray::{compute_gray, half_sample};
pub use histogram::{compute_histogram, determine_otsu_threshold, otsu_threshold};
pub use integral::compute_integral_image;
pub use morph::{
    count_non_zero, dilate, erode, subtract, subtract_in_place, threshold_image,
    threshold_image_in_place,
};
pub use top::{top_generic, Scored};
