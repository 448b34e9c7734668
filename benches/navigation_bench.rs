//! Per-frame cost of camera navigation.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use packview::camera::CameraController;
use packview::input::{GestureAdapter, InputEvent, Viewport};
use packview::options::CameraOptions;

fn idle_update_benchmark(c: &mut Criterion) {
    let options = CameraOptions::default();
    let mut controller =
        CameraController::new(Vec3::splat(50.0), Vec3::ZERO, &options);
    let _ = c.bench_function("camera_update_idle", |b| {
        b.iter(|| black_box(controller.update()));
    });
}

fn gesture_cycle_benchmark(c: &mut Criterion) {
    let options = CameraOptions {
        min_distance: 10.0,
        max_distance: Some(200.0),
        ..CameraOptions::default()
    };
    let viewport = Viewport::new(1280.0, 720.0);
    let mut controller =
        CameraController::new(Vec3::splat(50.0), Vec3::ZERO, &options);
    let mut adapter = GestureAdapter::new();
    let _ = adapter.handle_event(
        &InputEvent::TouchStart {
            touches: vec![Vec2::new(500.0, 360.0), Vec2::new(700.0, 360.0)],
        },
        viewport,
        &options,
    );

    let mut group = c.benchmark_group("pinch_cycle");
    for spread in [1.0_f32, 10.0, 100.0] {
        let event = InputEvent::TouchMove {
            touches: vec![
                Vec2::new(500.0 - spread, 360.0),
                Vec2::new(700.0 + spread, 360.0),
            ],
        };
        let _ = group.bench_function(format!("spread_{spread}"), |b| {
            b.iter(|| {
                if let Some(delta) =
                    adapter.handle_event(black_box(&event), viewport, &options)
                {
                    controller.apply_gesture(&delta);
                }
                black_box(controller.update())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, idle_update_benchmark, gesture_cycle_benchmark);
criterion_main!(benches);
