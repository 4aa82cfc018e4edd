//! Frame composition benchmarks.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shadelab::{
    camera::CameraController,
    engine::{compose_frame, ShadingEngine, Viewport},
    input::{InputEvent, Modifiers, MouseButton},
    scene::{SceneObject, SceneState},
};

fn compose_benchmark(c: &mut Criterion) {
    let scene = SceneState::default();
    let camera = CameraController::default();
    let objects = SceneObject::defaults();

    c.bench_function("compose_two_objects", |b| {
        b.iter(|| {
            compose_frame(
                black_box(&scene),
                black_box(&camera),
                black_box(&objects),
                Viewport::new(640, 480),
                black_box(1.25),
            )
        })
    });

    let many: Vec<SceneObject> =
        (0..64).flat_map(|_| SceneObject::defaults()).collect();
    c.bench_function("compose_128_objects", |b| {
        b.iter(|| {
            compose_frame(
                black_box(&scene),
                black_box(&camera),
                black_box(&many),
                Viewport::new(640, 480),
                black_box(1.25),
            )
        })
    });
}

fn drag_benchmark(c: &mut Criterion) {
    c.bench_function("orbit_drag_100_moves", |b| {
        b.iter(|| {
            let mut engine = ShadingEngine::default();
            engine.handle_input(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
                modifiers: Modifiers::NONE,
            });
            for i in 0..100 {
                engine.handle_input(InputEvent::CursorMoved {
                    x: i as f32,
                    y: (i / 2) as f32,
                });
            }
            black_box(engine.camera().rotation())
        })
    });
}

criterion_group!(benches, compose_benchmark, drag_benchmark);
criterion_main!(benches);
