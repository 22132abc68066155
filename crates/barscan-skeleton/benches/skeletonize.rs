use barscan_skeleton::{skeletonize, SkeletonWorkspace};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_skeletonize(c: &mut Criterion) {
    const SIDE: usize = 32;

    let mut ws = SkeletonWorkspace::new(SIDE);
    c.bench_function("skeletonize 32x32 filled", |b| {
        b.iter(|| {
            ws.working_mut().fill(1);
            skeletonize(&mut ws)
        });
    });
}

criterion_group!(benches, bench_skeletonize);
criterion_main!(benches);
