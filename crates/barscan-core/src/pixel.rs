//! Single-channel pixel buffer.
//!
//! All operators in this stack read and write through [`PixelBuffer`]. The
//! buffer is owned by its creator, never resized after construction, and
//! deliberately keeps a saturating access contract: the checked
//! accessors report out-of-range reads as absent and drop out-of-range
//! writes instead of failing. Code that has already validated its bounds
//! goes through `data()`/`data_mut()` and indexes the flat slice directly.

use nalgebra::{Point2, Vector2};
use serde::Serialize;

use crate::CoreError;

/// Element types a [`PixelBuffer`] can hold: `u8` for gray and binary
/// planes, `i32` for integral-image planes.
pub trait PixelValue: Copy + Default + PartialEq + std::fmt::Debug + 'static {}

impl PixelValue for u8 {}
impl PixelValue for i32 {}

/// An owned `width x height` single-channel image plane.
///
/// Invariant: `data.len() == width * height`, established at construction
/// and never broken afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: PixelValue> PixelBuffer<T> {
    /// Allocate a zero-filled buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Wrap caller-supplied data of matching length.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, CoreError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(CoreError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The flat row-major pixel slice. Unchecked tier: callers index
    /// `y * width + x` after validating bounds themselves.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Checked read; `None` for coordinates outside the image.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.data[y as usize * self.width + x as usize])
    }

    /// Checked write; out-of-range writes are silently discarded.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.data[y as usize * self.width + x as usize] = value;
    }

    /// True iff `p` lies within `[border, width-border) x [border, height-border)`.
    pub fn in_image_with_border(&self, p: Point2<f32>, border: i32) -> Result<bool, CoreError> {
        if border < 0 {
            return Err(CoreError::InvalidArgument("border must be non-negative"));
        }
        let b = border as f32;
        Ok(p.x >= b
            && p.y >= b
            && p.x < self.width as f32 - b
            && p.y < self.height as f32 - b)
    }

    /// Copy a `dest.width x dest.height` rectangle starting at `top_left`
    /// (coordinates floored) out of `self` into `dest`.
    ///
    /// Precondition: the rectangle fits inside `self`. Not validated at
    /// runtime in release builds.
    pub fn sub_image_as_copy(&self, dest: &mut PixelBuffer<T>, top_left: Point2<f32>) {
        let x0 = top_left.x as usize;
        let y0 = top_left.y as usize;
        debug_assert!(x0 + dest.width <= self.width && y0 + dest.height <= self.height);

        for y in 0..dest.height {
            let src_start = (y0 + y) * self.width + x0;
            let dst_start = y * dest.width;
            dest.data[dst_start..dst_start + dest.width]
                .copy_from_slice(&self.data[src_start..src_start + dest.width]);
        }
    }
}

/// Raw and derived moments of one labeled blob.
#[derive(Clone, Debug, Serialize)]
pub struct Moments {
    pub m00: u64,
    pub m01: u64,
    pub m10: u64,
    pub m11: u64,
    pub m02: u64,
    pub m20: u64,
    /// Orientation in degrees, normalized to `[0, 180)`.
    pub theta: f64,
    /// Orientation in radians, normalized to `[0, pi]`.
    pub rad: f64,
    /// Unit direction vector of the blob's major axis.
    pub vec: Vector2<f64>,
}

impl PixelBuffer<u8> {
    /// Per-label moments of a labeled plane: pixel value `v > 0` counts
    /// toward label `v - 1`. Labels outside `0..label_count` are ignored,
    /// and labels with no pixels are omitted from the result.
    pub fn moments(&self, label_count: usize) -> Vec<Moments> {
        let mut result = Vec::new();
        if label_count == 0 {
            return result;
        }

        #[derive(Clone, Default)]
        struct RawSums {
            m00: u64,
            m01: u64,
            m10: u64,
            m11: u64,
            m02: u64,
            m20: u64,
        }

        let mut sums = vec![RawSums::default(); label_count];
        for y in 0..self.height {
            let ysq = (y * y) as u64;
            for x in 0..self.width {
                let val = self.data[y * self.width + x];
                if val > 0 {
                    if let Some(s) = sums.get_mut(val as usize - 1) {
                        s.m00 += 1;
                        s.m01 += y as u64;
                        s.m10 += x as u64;
                        s.m11 += (x * y) as u64;
                        s.m02 += ysq;
                        s.m20 += (x * x) as u64;
                    }
                }
            }
        }

        for s in sums {
            if s.m00 == 0 {
                continue;
            }
            let m00 = s.m00 as f64;
            let x_mean = s.m10 as f64 / m00;
            let y_mean = s.m01 as f64 / m00;
            let mu11 = s.m11 as f64 / m00 - x_mean * y_mean;
            let mu02 = s.m02 as f64 / m00 - y_mean * y_mean;
            let mu20 = s.m20 as f64 / m00 - x_mean * x_mean;

            let half = if mu11 >= 0.0 {
                std::f64::consts::FRAC_PI_4
            } else {
                -std::f64::consts::FRAC_PI_4
            };
            let tmp = 0.5 * ((mu02 - mu20) / (2.0 * mu11)).atan() + half + std::f64::consts::PI;

            let mut theta = (tmp.to_degrees() + 90.0) % 180.0 - 90.0;
            if theta < 0.0 {
                theta += 180.0;
            }
            let rad = if tmp > std::f64::consts::PI {
                tmp - std::f64::consts::PI
            } else {
                tmp
            };

            result.push(Moments {
                m00: s.m00,
                m01: s.m01,
                m10: s.m10,
                m11: s.m11,
                m02: s.m02,
                m20: s.m20,
                theta,
                rad,
                vec: Vector2::new(tmp.cos(), tmp.sin()),
            });
        }

        result
    }
}
