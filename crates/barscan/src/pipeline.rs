//! Glue between the member crates: scan lines end-to-end and thin
//! candidate patches without allocating per frame.

use barscan_core::{Moments, PixelBuffer};
use barscan_line::{binarize, sample_line, BinaryLine};
use barscan_ops::{determine_otsu_threshold, threshold_image_in_place};
use barscan_skeleton::{skeletonize, SkeletonWorkspace};
use nalgebra::Point2;

/// Sample the scan line from `p1` to `p2` and binarize it (dark = 1).
///
/// Precondition: every traversed pixel lies inside `image`.
pub fn scan_binary_line(image: &PixelBuffer<u8>, p1: Point2<f32>, p2: Point2<f32>) -> BinaryLine {
    binarize(sample_line(image, p1, p2))
}

/// Per-frame thinning of square candidate patches.
///
/// Owns the patch plane and the workspace arena, so a caller running once
/// per video frame allocates nothing after construction.
pub struct PatchSkeletonizer {
    side: usize,
    patch: PixelBuffer<u8>,
    plane: PixelBuffer<u8>,
    workspace: SkeletonWorkspace,
}

impl PatchSkeletonizer {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            patch: PixelBuffer::new(side, side),
            plane: PixelBuffer::new(side, side),
            workspace: SkeletonWorkspace::new(side),
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Cut the `side x side` patch at `top_left` out of `image`, binarize
    /// it with an Otsu threshold and thin it. The returned slice is the
    /// skeleton region of the arena, valid until the next call.
    ///
    /// Precondition: the patch rectangle lies inside `image`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, image))
    )]
    pub fn skeletonize_patch(&mut self, image: &PixelBuffer<u8>, top_left: Point2<f32>) -> &[u8] {
        image.sub_image_as_copy(&mut self.patch, top_left);

        let threshold = determine_otsu_threshold(&self.patch, 8);
        threshold_image_in_place(&mut self.patch, threshold);

        self.workspace
            .working_mut()
            .copy_from_slice(self.patch.data());
        let passes = skeletonize(&mut self.workspace);
        log::debug!(
            "patch at ({}, {}): otsu {threshold}, thinned in {passes} passes",
            top_left.x,
            top_left.y
        );

        self.workspace.skeleton()
    }

    /// Moments of the most recent skeleton (single label), for orientation
    /// estimation of the candidate.
    pub fn skeleton_moments(&mut self) -> Option<Moments> {
        self.plane.data_mut().copy_from_slice(self.workspace.skeleton());
        self.plane.moments(1).into_iter().next()
    }
}
