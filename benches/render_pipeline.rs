use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_viewer::{Buttons, InputSnapshot, Point, RenderLoop, ViewerConfig};

fn full_recompute(c: &mut Criterion) {
    let mut render_loop = RenderLoop::new(ViewerConfig::default()).expect("default config is valid");

    c.bench_function("recompute initial view", |b| {
        b.iter(|| {
            render_loop.reset();
            black_box(render_loop.recompute_if_dirty());
        })
    });
}

fn deep_zoom_recompute(c: &mut Criterion) {
    let mut render_loop = RenderLoop::new(ViewerConfig::default()).expect("default config is valid");
    let target = Point { x: 100, y: 215 };

    for _ in 0..6 {
        render_loop.zoom(target);
    }
    render_loop.double_iteration_limit();
    render_loop.double_iteration_limit();

    c.bench_function("recompute zoomed view at 800 iterations", |b| {
        b.iter(|| {
            render_loop.pan(target);
            black_box(render_loop.recompute_if_dirty());
        })
    });
}

fn cached_frame(c: &mut Criterion) {
    let mut render_loop = RenderLoop::new(ViewerConfig::default()).expect("default config is valid");
    let input = InputSnapshot {
        pointer: Some(Point { x: 320, y: 240 }),
        ..InputSnapshot::default()
    };
    render_loop.step(&input);

    c.bench_function("compose frame from colour cache", |b| {
        b.iter(|| black_box(render_loop.step(&input)))
    });
}

fn cycling_frame(c: &mut Criterion) {
    let mut render_loop = RenderLoop::new(ViewerConfig::default()).expect("default config is valid");
    let toggle = Buttons { cycle_toggle: true, ..Buttons::default() };
    render_loop.step(&InputSnapshot {
        pointer: None,
        pressed: toggle,
        held: toggle,
    });

    c.bench_function("compose cycling frame from field", |b| {
        b.iter(|| black_box(render_loop.step(&InputSnapshot::default())))
    });
}

criterion_group!(
    benches,
    full_recompute,
    deep_zoom_recompute,
    cached_frame,
    cycling_frame
);
criterion_main!(benches);
