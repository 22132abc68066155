//! The fixed four-region workspace arena.

use barscan_core::CoreError;

/// One contiguous byte arena holding the four square regions the thinning
/// kernel works over: *working*, *eroded*, *scratch*, and the *skeleton*
/// accumulator, each `side * side` bytes at fixed offsets `0`, `N²`,
/// `2·N²`, `3·N²`.
///
/// The caller owns the arena and fills the working region before each
/// [`skeletonize`](crate::skeletonize) call; the skeleton region is the
/// only output and is zeroed by the kernel itself. The other two regions
/// are scratch space the kernel overwrites.
#[derive(Clone, Debug)]
pub struct SkeletonWorkspace {
    side: usize,
    buf: Vec<u8>,
}

impl SkeletonWorkspace {
    /// Allocate a zero-filled arena for `side x side` working images.
    /// This is the only allocation; every subsequent call reuses it.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            buf: vec![0u8; 4 * side * side],
        }
    }

    /// Wrap caller-supplied storage of exactly `4 * side * side` bytes.
    ///
    /// The three regions beyond *working* must start zeroed (a fresh
    /// zero-filled buffer, or one left behind by a previous
    /// [`skeletonize`](crate::skeletonize) run, both qualify).
    pub fn from_vec(side: usize, buf: Vec<u8>) -> Result<Self, CoreError> {
        let expected = 4 * side * side;
        if buf.len() != expected {
            return Err(CoreError::SizeMismatch {
                expected,
                actual: buf.len(),
            });
        }
        Ok(Self { side, buf })
    }

    /// Side length of each square region.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The working region, to be filled with a 0/1 binary image by the
    /// caller before each run. Its 1-pixel border is zeroed by the kernel.
    pub fn working_mut(&mut self) -> &mut [u8] {
        let n2 = self.side * self.side;
        &mut self.buf[..n2]
    }

    pub fn working(&self) -> &[u8] {
        &self.buf[..self.side * self.side]
    }

    /// The skeleton accumulator, valid after a
    /// [`skeletonize`](crate::skeletonize) run.
    pub fn skeleton(&self) -> &[u8] {
        let n2 = self.side * self.side;
        &self.buf[3 * n2..4 * n2]
    }

    /// Split the arena into its four disjoint regions.
    pub(crate) fn regions_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8], &mut [u8]) {
        let n2 = self.side * self.side;
        let (working, rest) = self.buf.split_at_mut(n2);
        let (eroded, rest) = rest.split_at_mut(n2);
        let (scratch, skeleton) = rest.split_at_mut(n2);
        (working, eroded, scratch, skeleton)
    }
}
