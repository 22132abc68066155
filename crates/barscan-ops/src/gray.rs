//! Grayscale conversion and downsampling of raw frames.

use barscan_core::PixelBuffer;

/// Convert an interleaved RGBA frame into a gray plane.
///
/// With `single_channel` the red channel is copied verbatim (the frame is
/// already monochrome); otherwise the luma `0.299 R + 0.587 G + 0.114 B`
/// is truncated to an integer.
///
/// Precondition: `out` holds exactly `rgba.len() / 4` pixels.
pub fn compute_gray(rgba: &[u8], out: &mut PixelBuffer<u8>, single_channel: bool) {
    let gray = out.data_mut();
    debug_assert_eq!(gray.len(), rgba.len() / 4);

    if single_channel {
        for (g, px) in gray.iter_mut().zip(rgba.chunks_exact(4)) {
            *g = px[0];
        }
    } else {
        for (g, px) in gray.iter_mut().zip(rgba.chunks_exact(4)) {
            *g = (0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64) as u8;
        }
    }
}

/// Downsample a gray plane by 2x in both directions, each output pixel the
/// floored mean of its 2x2 source block.
///
/// Precondition: `input` has even dimensions and `out` is exactly half the
/// size of `input` in both directions.
pub fn half_sample(input: &PixelBuffer<u8>, out: &mut PixelBuffer<u8>) {
    let width = input.width();
    let out_width = out.width();
    debug_assert_eq!(out_width, width / 2);
    debug_assert_eq!(out.height(), input.height() / 2);

    let src = input.data();
    let dst = out.data_mut();

    let mut top = 0usize;
    let mut bottom = width;
    let mut out_idx = 0usize;
    while bottom < src.len() {
        for _ in 0..out_width {
            let sum = src[top] as u32
                + src[top + 1] as u32
                + src[bottom] as u32
                + src[bottom + 1] as u32;
            dst[out_idx] = (sum / 4) as u8;
            out_idx += 1;
            top += 2;
            bottom += 2;
        }
        top += width;
        bottom += width;
    }
}
