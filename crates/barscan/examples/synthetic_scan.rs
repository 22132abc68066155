//! Scan a synthetic barcode strip end-to-end and dump a JSON report.
//!
//! Run with `cargo run --example synthetic_scan`.

use barscan::ops::compute_gray;
use barscan::{scan_binary_line, BinaryLine, PixelBuffer};
use nalgebra::Point2;
use serde::Serialize;

#[cfg(not(feature = "tracing"))]
use log::{info, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::info;

#[cfg(feature = "tracing")]
use barscan::core::init_tracing;
#[cfg(not(feature = "tracing"))]
use barscan::core::init_with_level;

#[derive(Debug, Serialize)]
struct ScanReport {
    width: usize,
    height: usize,
    lines: Vec<LineReport>,
}

#[derive(Debug, Serialize)]
struct LineReport {
    y: usize,
    bits: Vec<u8>,
    threshold: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_with_level(LevelFilter::Info)?;

    #[cfg(feature = "tracing")]
    init_tracing(false);

    let (rgba, width, height) = synthetic_frame();
    info!("synthetic frame: {width}x{height}");

    let mut gray = PixelBuffer::<u8>::new(width, height);
    compute_gray(&rgba, &mut gray, false);

    let mut lines = Vec::new();
    for y in [height / 4, height / 2, 3 * height / 4] {
        let binary: BinaryLine = scan_binary_line(
            &gray,
            Point2::new(0.0, y as f32),
            Point2::new(width as f32, y as f32),
        );
        info!("line y={y}: {} bits, final threshold {}", binary.bits.len(), binary.threshold);
        lines.push(LineReport {
            y,
            bits: binary.bits,
            threshold: binary.threshold,
        });
    }

    let report = ScanReport {
        width,
        height,
        lines,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// An RGBA strip of dark bars with Code39-ish narrow/wide widths.
fn synthetic_frame() -> (Vec<u8>, usize, usize) {
    let widths = [3usize, 3, 6, 3, 3, 6, 3, 3, 3, 6];
    let margin = 8;
    let total: usize = widths.iter().sum();
    let width = total + 2 * margin;
    let height = 16;

    let mut columns = vec![false; width];
    let mut x = margin;
    let mut dark = true;
    for &w in &widths {
        for _ in 0..w {
            columns[x] = dark;
            x += 1;
        }
        dark = !dark;
    }

    let mut rgba = Vec::with_capacity(width * height * 4);
    for _y in 0..height {
        for &in_bar in &columns {
            let v = if in_bar { 30u8 } else { 225 };
            rgba.extend_from_slice(&[v, v, v, 255]);
        }
    }
    (rgba, width, height)
}
