use criterion::{criterion_group, criterion_main, Criterion};
use light_shadow::consts::{HEIGHT, WIDTH};
use light_shadow::sim::Simulation;
use light_shadow::types::FrameBuffer;

fn bench_frame(c: &mut Criterion) {
    let mut sim = Simulation::default();
    let mut fb = FrameBuffer::new(WIDTH, HEIGHT, 0);
    c.bench_function("render_frame", |b| {
        b.iter(|| {
            sim.render(&mut fb);
            sim.advance();
        })
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
