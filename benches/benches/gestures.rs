// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hand_shadows::{HandType, ShadowHandView, Touch};
use kurbo::{Point, Rect};

const SCREEN: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform-ish offset in `[-spread, spread]`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX) * 2.0 - 1.0) * spread
    }
}

/// A wandering path of `frames` points starting at `start`.
fn wander(start: Point, frames: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    let mut p = start;
    (0..frames)
        .map(|_| {
            p = Point::new(p.x + rng.jitter(6.0), p.y + rng.jitter(6.0));
            p
        })
        .collect()
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("hand_shadows");
    group.sample_size(50);

    let frames = 240;
    let index = wander(Point::new(400.0, 400.0), frames, 0x5AD0_0000_0000_0001);
    let middle = wander(Point::new(520.0, 380.0), frames, 0x5AD0_0000_0000_0002);

    group.bench_function(format!("pointing_pan(frames={frames})"), |b| {
        b.iter_batched(
            || {
                let mut view = ShadowHandView::new(SCREEN);
                view.start_pan(0_u32, &[Touch::new(1, index[0])], HandType::Right)
                    .unwrap();
                view
            },
            |mut view| {
                for p in &index {
                    view.continue_pan(&0, &[Touch::new(1, *p)], HandType::Right)
                        .unwrap();
                    black_box(view.current_bounds(HandType::Right));
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(format!("two_finger_pan(frames={frames})"), |b| {
        b.iter_batched(
            || {
                let mut view = ShadowHandView::new(SCREEN);
                let start = [Touch::new(1, index[0]), Touch::new(2, middle[0])];
                view.start_pan(0_u32, &start, HandType::Left).unwrap();
                view
            },
            |mut view| {
                for (i, m) in index.iter().zip(&middle) {
                    let touches = [Touch::new(1, *i), Touch::new(2, *m)];
                    view.continue_pan(&0, &touches, HandType::Left).unwrap();
                    black_box(view.current_transformed_path(HandType::Left));
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(format!("pinch(frames={frames})"), |b| {
        b.iter_batched(
            || {
                let mut view = ShadowHandView::new(SCREEN);
                let start = [Touch::new(1, index[0]), Touch::new(2, middle[0])];
                view.start_pinch(0_u32, &start).unwrap();
                view
            },
            |mut view| {
                for (i, m) in index.iter().zip(&middle) {
                    let touches = [Touch::new(1, *i), Touch::new(2, *m)];
                    view.continue_pinch(&0, &touches).unwrap();
                    black_box(view.pinch_scale());
                }
                black_box(view);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
