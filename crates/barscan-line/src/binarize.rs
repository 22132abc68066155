//! Extrema-driven adaptive binarization of a sampled line.

use serde::{Deserialize, Serialize};

use crate::LineSample;

/// An index where the local intensity trend reverses, plus the intensity
/// there. Synthetic entries bracket every detected sequence: one at index
/// 0 and one at the line's length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extremum {
    pub pos: usize,
    pub val: u8,
}

/// The 0/1 sequence (dark = 1) produced from a [`LineSample`], along with
/// the threshold applied to the final segment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryLine {
    pub bits: Vec<u8>,
    pub threshold: f32,
}

/// Divisor of the dynamic range that sets the slope-hysteresis band.
const HYSTERESIS_DIVISOR: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slope {
    Up,
    Down,
}

/// Detect trend reversals along the sampled line.
///
/// The walk tracks pairs of consecutive slopes. A flip to falling needs
/// the combined slope below `-(max-min)/12` *and* the middle sample below
/// `1.5 * center`; a flip to rising needs the combined slope above
/// `(max-min)/12` *and* the middle sample above `0.5 * center`. Otherwise
/// the current direction holds, which keeps noise near the center value
/// from minting spurious extrema. A flip is recorded at the first index
/// of the flip.
pub fn detect_extrema(sample: &LineSample) -> Vec<Extremum> {
    let line = &sample.values;
    let mut extrema = Vec::new();
    if line.is_empty() {
        return extrema;
    }

    let min = sample.min as f32;
    let max = sample.max as f32;
    let center = min + (max - min) / 2.0;
    let threshold = (max - min) / HYSTERESIS_DIVISOR;
    let r_threshold = -threshold;

    let mut current_dir = if line[0] as f32 > center {
        Slope::Up
    } else {
        Slope::Down
    };
    extrema.push(Extremum {
        pos: 0,
        val: line[0],
    });

    for i in 0..line.len().saturating_sub(2) {
        let slope = line[i + 1] as i32 - line[i] as i32;
        let slope2 = line[i + 2] as i32 - line[i + 1] as i32;

        let dir = if ((slope + slope2) as f32) < r_threshold
            && (line[i + 1] as f32) < center * 1.5
        {
            Slope::Down
        } else if ((slope + slope2) as f32) > threshold && (line[i + 1] as f32) > center * 0.5 {
            Slope::Up
        } else {
            current_dir
        };

        if current_dir != dir {
            extrema.push(Extremum {
                pos: i,
                val: line[i],
            });
            current_dir = dir;
        }
    }

    extrema.push(Extremum {
        pos: line.len(),
        val: line[line.len() - 1],
    });

    extrema
}

/// Binarize a sampled line in place (dark = 1).
///
/// The first segment (up to the first genuine extremum) is classified
/// against the global center of the dynamic range. Every later segment
/// uses a threshold local to its bracketing extrema pair, weighted 2/3 of
/// the way up a rising edge and 1/3 of the way up a falling edge, so the
/// cut sits nearer the brighter endpoint when rising and nearer the
/// darker endpoint when falling. Thresholds truncate to integers exactly
/// as the downstream run-length consumers expect.
pub fn binarize(mut sample: LineSample) -> BinaryLine {
    let extrema = detect_extrema(&sample);
    let min = sample.min as f32;
    let max = sample.max as f32;
    let center = min + (max - min) / 2.0;
    let mut threshold = (max - min) / HYSTERESIS_DIVISOR;

    if sample.values.is_empty() {
        return BinaryLine {
            bits: sample.values,
            threshold,
        };
    }

    let line = &mut sample.values;

    for j in extrema[0].pos..extrema[1].pos {
        line[j] = if line[j] as f32 > center { 0 } else { 1 };
    }

    for i in 1..extrema.len() - 1 {
        let cur = extrema[i];
        let next = extrema[i + 1];
        let local = if next.val > cur.val {
            (cur.val as f32 + (next.val as f32 - cur.val as f32) / 3.0 * 2.0) as i32
        } else {
            (next.val as f32 + (cur.val as f32 - next.val as f32) / 3.0) as i32
        };
        threshold = local as f32;
        for j in cur.pos..next.pos {
            line[j] = if line[j] as i32 > local { 0 } else { 1 };
        }
    }

    BinaryLine {
        bits: sample.values,
        threshold,
    }
}
