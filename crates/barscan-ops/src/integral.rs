//! Summed-area ("integral") image.

use barscan_core::PixelBuffer;

/// Fill `integral` with the summed-area table of `image`:
/// `I(x, y) = sum of image(i, j) for i <= x, j <= y`.
///
/// The first row is a running row sum; every later row accumulates its own
/// running sum on top of the row above. Enables O(1) rectangle-sum queries
/// for the region-scoring heuristics of the locator.
///
/// Precondition: `integral` has the same dimensions as `image`.
pub fn compute_integral_image(image: &PixelBuffer<u8>, integral: &mut PixelBuffer<i32>) {
    let width = image.width();
    let height = image.height();
    debug_assert_eq!(integral.width(), width);
    debug_assert_eq!(integral.height(), height);

    let src = image.data();
    let dst = integral.data_mut();

    let mut sum = 0i32;
    for x in 0..width {
        sum += src[x] as i32;
        dst[x] = sum;
    }

    for y in 1..height {
        let mut sum = 0i32;
        for x in 0..width {
            let idx = y * width + x;
            sum += src[idx] as i32;
            dst[idx] = sum + dst[idx - width];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// The historical inclusion-exclusion recurrence
    /// `I(x,y) = p(x,y) + I(x-1,y) + I(x,y-1) - I(x-1,y-1)`.
    /// Kept as a reference only; the running-row-sum variant above is
    /// canonical and the two must agree on every pixel.
    fn integral_by_inclusion_exclusion(image: &PixelBuffer<u8>, integral: &mut PixelBuffer<i32>) {
        let width = image.width();
        let height = image.height();
        let src = image.data();
        let dst = integral.data_mut();
        if width == 0 || height == 0 {
            return;
        }

        dst[0] = src[0] as i32;
        for x in 1..width {
            dst[x] = src[x] as i32 + dst[x - 1];
        }
        for y in 1..height {
            dst[y * width] = src[y * width] as i32 + dst[(y - 1) * width];
        }
        for y in 1..height {
            for x in 1..width {
                let idx = y * width + x;
                dst[idx] = src[idx] as i32 + dst[idx - 1] + dst[idx - width] - dst[idx - width - 1];
            }
        }
    }

    fn brute_force_rect_sum(image: &PixelBuffer<u8>, x: usize, y: usize) -> i32 {
        let mut sum = 0i32;
        for j in 0..=y {
            for i in 0..=x {
                sum += image.data()[j * image.width() + i] as i32;
            }
        }
        sum
    }

    fn random_image(rng: &mut StdRng, width: usize, height: usize) -> PixelBuffer<u8> {
        let data = (0..width * height).map(|_| rng.random::<u8>()).collect();
        PixelBuffer::from_vec(width, height, data).expect("valid image")
    }

    #[test]
    fn matches_brute_force_rectangle_sums() {
        let mut rng = StdRng::seed_from_u64(7);
        let image = random_image(&mut rng, 13, 9);
        let mut integral = PixelBuffer::<i32>::new(13, 9);
        compute_integral_image(&image, &mut integral);

        for y in 0..9 {
            for x in 0..13 {
                assert_eq!(
                    integral.get(x as i32, y as i32).expect("in bounds"),
                    brute_force_rect_sum(&image, x, y),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn both_recurrences_agree_on_random_images() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            let width = rng.random_range(1..32);
            let height = rng.random_range(1..32);
            let image = random_image(&mut rng, width, height);

            let mut canonical = PixelBuffer::<i32>::new(width, height);
            let mut reference = PixelBuffer::<i32>::new(width, height);
            compute_integral_image(&image, &mut canonical);
            integral_by_inclusion_exclusion(&image, &mut reference);

            assert_eq!(canonical.data(), reference.data());
        }
    }

    #[test]
    fn single_row_is_prefix_sum() {
        let image = PixelBuffer::from_vec(4, 1, vec![1u8, 2, 3, 4]).expect("valid image");
        let mut integral = PixelBuffer::<i32>::new(4, 1);
        compute_integral_image(&image, &mut integral);
        assert_eq!(integral.data(), &[1, 3, 6, 10]);
    }
}
