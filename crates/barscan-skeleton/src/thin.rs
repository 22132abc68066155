//! The thinning loop and its private slice kernels.

use crate::SkeletonWorkspace;

/// Thin the working region down to its skeleton.
///
/// Each pass erodes the working image, dilates the eroded image back, and
/// subtracts that from the working image to capture the ring of pixels
/// the pass removed; the rings are OR-ed into the skeleton accumulator
/// and the eroded image becomes the next working image. The loop stops
/// once the working image is empty, which is guaranteed for any bounded
/// binary input because every pass removes at least the erodable outer
/// layer.
///
/// Returns the number of peeling passes (proportional to the thickness of
/// the thickest blob). The accumulator can only ever contain pixels that
/// were foreground at some point, so the skeleton is a subset of the
/// original foreground.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(ws), fields(side = ws.side())))]
pub fn skeletonize(ws: &mut SkeletonWorkspace) -> u32 {
    let side = ws.side();
    let (working, eroded, scratch, skeleton) = ws.regions_mut();

    skeleton.fill(0);
    zero_border(working, side);

    let mut passes = 0u32;
    while count_non_zero(working) > 0 {
        erode(working, eroded, side);
        dilate(eroded, scratch, side);
        subtract_from(working, scratch);
        or_into(scratch, skeleton);
        working.copy_from_slice(eroded);
        passes += 1;
    }

    log::trace!("thinning converged after {passes} passes");
    passes
}

/// Zero the outermost row and column on all four sides.
fn zero_border(img: &mut [u8], side: usize) {
    if side == 0 {
        return;
    }
    for x in 0..side {
        img[x] = 0;
        img[(side - 1) * side + x] = 0;
    }
    for y in 0..side {
        img[y * side] = 0;
        img[y * side + side - 1] = 0;
    }
}

/// 5-point diagonal "X" erosion over interior pixels; the destination
/// border is never written.
fn erode(src: &[u8], dst: &mut [u8], side: usize) {
    for v in 1..side.saturating_sub(1) {
        for u in 1..side.saturating_sub(1) {
            let above = (v - 1) * side;
            let below = (v + 1) * side;
            let sum = src[above + u - 1] as u32
                + src[above + u + 1] as u32
                + src[v * side + u] as u32
                + src[below + u - 1] as u32
                + src[below + u + 1] as u32;
            dst[v * side + u] = u8::from(sum == 5);
        }
    }
}

/// 5-point diagonal "X" dilation over interior pixels.
fn dilate(src: &[u8], dst: &mut [u8], side: usize) {
    for v in 1..side.saturating_sub(1) {
        for u in 1..side.saturating_sub(1) {
            let above = (v - 1) * side;
            let below = (v + 1) * side;
            let sum = src[above + u - 1] as u32
                + src[above + u + 1] as u32
                + src[v * side + u] as u32
                + src[below + u - 1] as u32
                + src[below + u + 1] as u32;
            dst[v * side + u] = u8::from(sum > 0);
        }
    }
}

/// `target = a - target`, pixelwise. Callers guarantee `target` is a
/// subset of `a`, so the difference never underflows.
fn subtract_from(a: &[u8], target: &mut [u8]) {
    for (t, &av) in target.iter_mut().zip(a) {
        *t = av.wrapping_sub(*t);
    }
}

/// `target |= src`, pixelwise.
fn or_into(src: &[u8], target: &mut [u8]) {
    for (t, &sv) in target.iter_mut().zip(src) {
        *t |= sv;
    }
}

fn count_non_zero(img: &[u8]) -> u32 {
    img.iter().map(|&v| v as u32).sum()
}
