// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::rc::Rc;
use understory_event_state::pinch::PinchSession;
use understory_zoom_gesture::notify::NotifyKind;
use understory_zoom_gesture::{
    InputEvent, ScaleChange, TouchInput, TouchPoint, WheelInput, ZoomConfig, ZoomGesture,
};

fn pinch_stream(len: usize) -> Vec<InputEvent> {
    let a = TouchPoint::new(1, (0.0, 0.0));
    let mut events = Vec::with_capacity(len + 1);
    events.push(InputEvent::TouchStart(TouchInput::new(
        [a, TouchPoint::new(2, (100.0, 0.0))],
        0,
    )));
    for i in 0..len {
        // Oscillate between 50 px and 250 px apart.
        let x = 150.0 + 100.0 * ((i as f64) * 0.05).sin();
        events.push(InputEvent::TouchMove(TouchInput::new(
            [a, TouchPoint::new(2, (x, 10.0))],
            i as u64,
        )));
    }
    events
}

fn wheel_stream(len: usize) -> Vec<InputEvent> {
    (0..len)
        .map(|i| {
            let dy = if i % 2 == 0 { -40.0 } else { 35.0 };
            InputEvent::Wheel(WheelInput::new(dy, ((i % 800) as f64, 300.0)))
        })
        .collect()
}

fn engine(subscribers: usize) -> ZoomGesture {
    let config = ZoomConfig::default().with_scale_limits(Some(0.25), Some(8.0));
    let mut zoom = ZoomGesture::new(config).expect("limits are ordered and finite");
    for _ in 0..subscribers {
        zoom.subscribe(
            NotifyKind::Change,
            Rc::new(|c: &ScaleChange| {
                black_box(c);
            }),
        );
    }
    zoom.activate();
    zoom
}

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_gesture/handle");

    for len in [64usize, 1_024, 16_384] {
        group.throughput(Throughput::Elements(len as u64));

        let pinch = pinch_stream(len);
        group.bench_with_input(BenchmarkId::new("pinch", len), &pinch, |b, events| {
            b.iter_batched(
                || engine(1),
                |mut zoom| {
                    for event in events {
                        black_box(zoom.handle(event));
                    }
                    black_box(zoom.scale());
                },
                BatchSize::SmallInput,
            );
        });

        let wheel = wheel_stream(len);
        group.bench_with_input(BenchmarkId::new("wheel", len), &wheel, |b, events| {
            b.iter_batched(
                || engine(1),
                |mut zoom| {
                    for event in events {
                        black_box(zoom.handle(event));
                    }
                    black_box(zoom.scale());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_gesture/fan_out");

    // Cost of notifying many subscribers per accepted change.
    for subscribers in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_with_input(
            BenchmarkId::new("set_scale", subscribers),
            &subscribers,
            |b, &subscribers| {
                let mut zoom = engine(subscribers);
                let mut scale = 1.0;
                b.iter(|| {
                    scale = if scale > 4.0 { 0.5 } else { scale * 1.1 };
                    zoom.set_scale(black_box(scale));
                });
            },
        );
    }

    group.finish();
}

fn bench_pinch_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_state/pinch_session");

    let start = [(1_u64, Point::new(0.0, 0.0)), (2, Point::new(100.0, 0.0))];
    let moved = [(2_u64, Point::new(140.0, 0.0)), (1, Point::new(0.0, 0.0))];

    group.bench_function("begin_update", |b| {
        b.iter(|| {
            let mut session = PinchSession::new();
            session.begin(black_box(start), 1.0);
            black_box(session.update(black_box(moved)))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_handle, bench_fan_out, bench_pinch_session);
criterion_main!(benches);
