//! Integer Bresenham traversal between two image points.

use barscan_core::PixelBuffer;
use nalgebra::Point2;

/// The raw intensities read along a line, with the running min/max.
#[derive(Clone, Debug)]
pub struct LineSample {
    pub values: Vec<u8>,
    pub min: u8,
    pub max: u8,
}

/// Sample gray intensities along the line from `p1` to `p2`.
///
/// Endpoint coordinates are truncated to integers. Steep lines
/// (`|dy| > |dx|`) walk the swapped axes and swap back on every read, and
/// the endpoints are ordered so the walk always proceeds in increasing x;
/// the final column is exclusive. Endpoint order therefore never changes
/// the emitted sequence.
///
/// Precondition: every traversed pixel lies inside `image`.
pub fn sample_line(image: &PixelBuffer<u8>, p1: Point2<f32>, p2: Point2<f32>) -> LineSample {
    let mut x0 = p1.x as i32;
    let mut y0 = p1.y as i32;
    let mut x1 = p2.x as i32;
    let mut y1 = p2.y as i32;

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let delta_x = x1 - x0;
    let delta_y = (y1 - y0).abs();
    let mut error = delta_x / 2;
    let y_step = if y0 < y1 { 1 } else { -1 };

    let width = image.width();
    let data = image.data();

    let mut values = Vec::with_capacity(delta_x.max(0) as usize);
    let mut min = 255u8;
    let mut max = 0u8;

    let mut y = y0;
    for x in x0..x1 {
        let (px, py) = if steep { (y, x) } else { (x, y) };
        let val = data[py as usize * width + px as usize];
        min = min.min(val);
        max = max.max(val);
        values.push(val);

        error -= delta_y;
        if error < 0 {
            y += y_step;
            error += delta_x;
        }
    }

    LineSample { values, min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: usize, height: usize) -> PixelBuffer<u8> {
        let data = (0..width * height)
            .map(|i| ((i * 11) % 256) as u8)
            .collect();
        PixelBuffer::from_vec(width, height, data).expect("valid image")
    }

    #[test]
    fn shallow_line_reads_row() {
        let img = gradient_image(8, 4);
        let sample = sample_line(&img, Point2::new(1.0, 2.0), Point2::new(6.0, 2.0));
        let expected: Vec<u8> = (1..6).map(|x| img.get(x, 2).expect("in bounds")).collect();
        assert_eq!(sample.values, expected);
        assert_eq!(sample.min, *expected.iter().min().expect("non-empty"));
        assert_eq!(sample.max, *expected.iter().max().expect("non-empty"));
    }

    #[test]
    fn steep_line_reads_column() {
        let img = gradient_image(8, 8);
        let sample = sample_line(&img, Point2::new(3.0, 1.0), Point2::new(3.0, 7.0));
        let expected: Vec<u8> = (1..7).map(|y| img.get(3, y).expect("in bounds")).collect();
        assert_eq!(sample.values, expected);
    }

    #[test]
    fn endpoint_order_does_not_change_the_sequence() {
        let img = gradient_image(16, 16);

        // Shallow diagonal.
        let a = sample_line(&img, Point2::new(1.0, 2.0), Point2::new(14.0, 6.0));
        let b = sample_line(&img, Point2::new(14.0, 6.0), Point2::new(1.0, 2.0));
        assert_eq!(a.values, b.values);
        assert_eq!((a.min, a.max), (b.min, b.max));

        // Steep diagonal.
        let c = sample_line(&img, Point2::new(2.0, 1.0), Point2::new(6.0, 14.0));
        let d = sample_line(&img, Point2::new(6.0, 14.0), Point2::new(2.0, 1.0));
        assert_eq!(c.values, d.values);
    }

    #[test]
    fn coincident_endpoints_yield_empty_sample() {
        let img = gradient_image(4, 4);
        let sample = sample_line(&img, Point2::new(2.0, 2.0), Point2::new(2.0, 2.0));
        assert!(sample.values.is_empty());
        assert_eq!(sample.min, 255);
        assert_eq!(sample.max, 0);
    }

    #[test]
    fn fractional_endpoints_truncate() {
        let img = gradient_image(8, 4);
        let a = sample_line(&img, Point2::new(1.9, 2.2), Point2::new(6.7, 2.4));
        let b = sample_line(&img, Point2::new(1.0, 2.0), Point2::new(6.0, 2.0));
        assert_eq!(a.values, b.values);
    }
}
