// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the rotation hot path.
//!
//! Measures the performance of:
//! - Frame index wrapping
//! - Drag step computation per pointer move
//! - A full drag gesture through the viewer component

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Point;
use iced_turntable::domain::frame::{FrameCount, FrameIndex, ObjectId};
use iced_turntable::domain::ui::DragStepThreshold;
use iced_turntable::test_utils::{FakeFullscreen, ManualScheduler};
use iced_turntable::ui::state::drag::steps_for_delta;
use iced_turntable::ui::viewer::pointer::PointerInput;
use iced_turntable::ui::viewer::{Message, State, ViewerProps, ViewerSettings};
use std::hint::black_box;

/// Benchmark wrapping arithmetic on frame indices.
fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    let count = FrameCount::new(36);

    group.bench_function("offset_wrap", |b| {
        b.iter(|| {
            let mut index = FrameIndex::FIRST;
            for steps in -50..50 {
                index = index.offset(black_box(steps), count);
            }
            black_box(index);
        });
    });

    group.finish();
}

/// Benchmark the drag delta to step conversion.
fn bench_steps_for_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    let threshold = DragStepThreshold::default();

    group.bench_function("steps_for_delta", |b| {
        b.iter(|| {
            let mut total = 0;
            for delta in -200..200 {
                total += steps_for_delta(black_box(delta as f32 * 0.5), threshold);
            }
            black_box(total);
        });
    });

    group.finish();
}

/// Benchmark a complete press, move, release gesture on the viewer.
fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    group.bench_function("drag_gesture", |b| {
        let mut viewer = State::mount(
            ViewerProps::new(ObjectId::new("bench")),
            ViewerSettings::default(),
            ManualScheduler::default(),
            FakeFullscreen::default(),
            None,
        );
        b.iter(|| {
            let _ = viewer.handle_message(Message::Pointer(PointerInput::MouseMoved(Point::new(
                0.0, 0.0,
            ))));
            let _ = viewer.handle_message(Message::Pointer(PointerInput::MousePressed));
            for x in 1..100 {
                let _ = viewer.handle_message(Message::Pointer(PointerInput::MouseMoved(
                    Point::new(x as f32 * 3.0, 0.0),
                )));
            }
            let _ = viewer.handle_message(Message::Pointer(PointerInput::MouseReleased));
            black_box(viewer.current());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_wrap, bench_steps_for_delta, bench_drag_gesture);
criterion_main!(benches);
