//! Binary thresholding and morphology.
//!
//! The structuring element throughout is the 5-point diagonal "X": the
//! pixel itself plus its four diagonal neighbors. Both `dilate` and
//! `erode` walk interior pixels only and leave the 1-pixel border of the
//! output untouched.

use barscan_core::PixelBuffer;

/// Binarize `image` into `target`: `1` where `pixel < threshold`, else `0`
/// (dark = 1).
///
/// Precondition: `target` has the same dimensions as `image`.
pub fn threshold_image(image: &PixelBuffer<u8>, threshold: u8, target: &mut PixelBuffer<u8>) {
    debug_assert_eq!(image.data().len(), target.data().len());
    for (out, &v) in target.data_mut().iter_mut().zip(image.data()) {
        *out = u8::from(v < threshold);
    }
}

/// In-place variant of [`threshold_image`].
pub fn threshold_image_in_place(image: &mut PixelBuffer<u8>, threshold: u8) {
    for v in image.data_mut() {
        *v = u8::from(*v < threshold);
    }
}

/// Morphological dilation: an interior output pixel is `1` iff any of the
/// five "X" positions is set.
///
/// Precondition: `out` has the same dimensions as `input`.
pub fn dilate(input: &PixelBuffer<u8>, out: &mut PixelBuffer<u8>) {
    let width = input.width();
    let height = input.height();
    debug_assert_eq!(out.width(), width);
    debug_assert_eq!(out.height(), height);

    let src = input.data();
    let dst = out.data_mut();
    for v in 1..height.saturating_sub(1) {
        for u in 1..width.saturating_sub(1) {
            let above = (v - 1) * width;
            let below = (v + 1) * width;
            let sum = src[above + u - 1] as u32
                + src[above + u + 1] as u32
                + src[v * width + u] as u32
                + src[below + u - 1] as u32
                + src[below + u + 1] as u32;
            dst[v * width + u] = u8::from(sum > 0);
        }
    }
}

/// Morphological erosion: an interior output pixel is `1` iff all five
/// "X" positions are set.
///
/// Precondition: `out` has the same dimensions as `input`.
pub fn erode(input: &PixelBuffer<u8>, out: &mut PixelBuffer<u8>) {
    let width = input.width();
    let height = input.height();
    debug_assert_eq!(out.width(), width);
    debug_assert_eq!(out.height(), height);

    let src = input.data();
    let dst = out.data_mut();
    for v in 1..height.saturating_sub(1) {
        for u in 1..width.saturating_sub(1) {
            let above = (v - 1) * width;
            let below = (v + 1) * width;
            let sum = src[above + u - 1] as u32
                + src[above + u + 1] as u32
                + src[v * width + u] as u32
                + src[below + u - 1] as u32
                + src[below + u + 1] as u32;
            dst[v * width + u] = u8::from(sum == 5);
        }
    }
}

/// Pixelwise `a - b` into `target`, wrapping on underflow. All in-tree
/// callers subtract a nested binary image from its superset, so no wrap
/// occurs there.
///
/// Precondition: all three buffers share dimensions.
pub fn subtract(a: &PixelBuffer<u8>, b: &PixelBuffer<u8>, target: &mut PixelBuffer<u8>) {
    debug_assert_eq!(a.data().len(), b.data().len());
    debug_assert_eq!(a.data().len(), target.data().len());
    for ((out, &av), &bv) in target.data_mut().iter_mut().zip(a.data()).zip(b.data()) {
        *out = av.wrapping_sub(bv);
    }
}

/// In-place variant of [`subtract`]: `a -= b`.
pub fn subtract_in_place(a: &mut PixelBuffer<u8>, b: &PixelBuffer<u8>) {
    debug_assert_eq!(a.data().len(), b.data().len());
    for (av, &bv) in a.data_mut().iter_mut().zip(b.data()) {
        *av = av.wrapping_sub(bv);
    }
}

/// Sum of all pixel values. A population count only for binary inputs,
/// which is what callers rely on.
pub fn count_non_zero(image: &PixelBuffer<u8>) -> u32 {
    image.data().iter().map(|&v| v as u32).sum()
}
