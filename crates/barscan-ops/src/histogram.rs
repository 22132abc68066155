//! Intensity histogram and Otsu threshold selection.

use barscan_core::PixelBuffer;

/// Histogram of `image` with `2^bits_per_pixel` buckets; each pixel is
/// right-shifted by `8 - bits_per_pixel` before bucketing.
///
/// Precondition: `bits_per_pixel` in `1..=8`.
pub fn compute_histogram(image: &PixelBuffer<u8>, bits_per_pixel: u8) -> Vec<i32> {
    debug_assert!((1..=8).contains(&bits_per_pixel));
    let bit_shift = 8 - bits_per_pixel;
    let mut hist = vec![0i32; 1usize << bits_per_pixel];
    for &v in image.data() {
        hist[(v >> bit_shift) as usize] += 1;
    }
    hist
}

/// Otsu's threshold over the reduced histogram, maximizing between-class
/// variance, shifted back to the full 0..=255 range.
pub fn determine_otsu_threshold(image: &PixelBuffer<u8>, bits_per_pixel: u8) -> u8 {
    let bit_shift = 8 - bits_per_pixel;
    let hist = compute_histogram(image, bits_per_pixel);
    let max = (1usize << bits_per_pixel) - 1;

    let px = |init: usize, end: usize| -> f64 {
        hist[init..=end].iter().map(|&count| count as f64).sum()
    };
    let mx = |init: usize, end: usize| -> f64 {
        (init..=end).map(|i| i as f64 * hist[i] as f64).sum()
    };

    // First index of the maximum between-class variance wins.
    let mut best_k = 0usize;
    let mut best_variance = 0.0f64;
    for k in 1..max {
        let p1 = px(0, k);
        let p2 = px(k + 1, max);
        let mut p12 = p1 * p2;
        if p12 == 0.0 {
            p12 = 1.0;
        }
        let m1 = mx(0, k) * p2;
        let m2 = mx(k + 1, max) * p1;
        let m12 = m1 - m2;
        let variance = m12 * m12 / p12;
        if variance > best_variance {
            best_variance = variance;
            best_k = k;
        }
    }

    (best_k << bit_shift) as u8
}

/// Binarize `image` into `target` with an Otsu-selected threshold
/// (dark = 1) and return the threshold used.
pub fn otsu_threshold(image: &PixelBuffer<u8>, target: &mut PixelBuffer<u8>) -> u8 {
    let threshold = determine_otsu_threshold(image, 8);
    crate::threshold_image(image, threshold, target);
    threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn histogram_counts_sum_to_pixel_count() {
        let mut rng = StdRng::seed_from_u64(99);
        let data = (0..64 * 48).map(|_| rng.random::<u8>()).collect();
        let image = PixelBuffer::from_vec(64, 48, data).expect("valid image");

        for bits in 1..=8u8 {
            let hist = compute_histogram(&image, bits);
            assert_eq!(hist.len(), 1 << bits);
            assert_eq!(hist.iter().sum::<i32>(), 64 * 48);
        }
    }

    #[test]
    fn histogram_buckets_by_shifted_value() {
        let image =
            PixelBuffer::from_vec(4, 1, vec![0u8, 63, 64, 255]).expect("valid image");
        let hist = compute_histogram(&image, 2);
        assert_eq!(hist, vec![2, 1, 0, 1]);
    }

    #[test]
    fn otsu_separates_bimodal_image() {
        // Dark mode at 40 with a small shoulder at 44, bright mode at 200.
        // The cut lands on the upper edge of the dark mode, and the
        // dark-strictly-below-threshold convention keeps the shoulder out.
        let mut data = vec![40u8; 120];
        data.extend(std::iter::repeat(44u8).take(8));
        data.extend(std::iter::repeat(200u8).take(128));
        let image = PixelBuffer::from_vec(16, 16, data).expect("valid image");

        let threshold = determine_otsu_threshold(&image, 8);
        assert_eq!(threshold, 44);

        let mut binary = PixelBuffer::<u8>::new(16, 16);
        let used = otsu_threshold(&image, &mut binary);
        assert_eq!(used, threshold);
        assert_eq!(
            binary.data()[..120].iter().map(|&v| v as u32).sum::<u32>(),
            120
        );
        assert_eq!(
            binary.data()[120..].iter().map(|&v| v as u32).sum::<u32>(),
            0
        );
    }
}
