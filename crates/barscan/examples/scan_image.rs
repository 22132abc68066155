//! Scan the middle row of a grayscale image file.
//!
//! Run with `cargo run --example scan_image -- path/to/barcode.png`.

use std::env;
use std::path::PathBuf;

use barscan::{scan_binary_line, PixelBuffer};
use image::ImageReader;
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
struct LineReport {
    image_path: String,
    y: usize,
    bits: Vec<u8>,
    threshold: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_with_level(LevelFilter::Info)?;

    #[cfg(feature = "tracing")]
    init_tracing(false);

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: scan_image <image-path>")?;

    let img = ImageReader::open(&path)?.decode()?.to_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    info!("loaded {}: {width}x{height}", path.display());

    let gray = PixelBuffer::from_vec(width, height, img.into_raw())?;

    let y = height / 2;
    let binary = scan_binary_line(
        &gray,
        Point2::new(0.0, y as f32),
        Point2::new(width as f32, y as f32),
    );
    info!("scanned {} samples at y={y}", binary.bits.len());

    let report = LineReport {
        image_path: path.to_string_lossy().into_owned(),
        y,
        bits: binary.bits,
        threshold: binary.threshold,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
