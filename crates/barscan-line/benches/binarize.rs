use barscan_line::{binarize, LineSample};
use criterion::{criterion_group, criterion_main, Criterion};

/// A synthetic scan line of alternating bars with soft edges.
fn bar_line(len: usize) -> LineSample {
    let mut values = Vec::with_capacity(len);
    for i in 0..len {
        let phase = (i / 7) % 2;
        let edge = i % 7;
        let v = if phase == 0 {
            40 + edge as i32 * 8
        } else {
            220 - edge as i32 * 8
        };
        values.push(v.clamp(0, 255) as u8);
    }
    let min = values.iter().copied().min().unwrap_or(255);
    let max = values.iter().copied().max().unwrap_or(0);
    LineSample { values, min, max }
}

fn bench_binarize(c: &mut Criterion) {
    let sample = bar_line(640);
    c.bench_function("binarize 640px line", |b| {
        b.iter(|| binarize(sample.clone()));
    });
}

criterion_group!(benches, bench_binarize);
criterion_main!(benches);
