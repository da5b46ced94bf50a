// Copyright 2025 the Hand Shadows Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hand_shadows_geometry::{HandShadow, HandType, PinchShadow, TwoFingerShadow};

fn bench_poses(c: &mut Criterion) {
    let mut group = c.benchmark_group("hand_shadows_geometry");

    for hand in HandType::BOTH {
        group.bench_function(format!("build_models({hand})"), |b| {
            b.iter(|| {
                black_box(HandShadow::new(hand));
                black_box(TwoFingerShadow::new(hand));
                black_box(PinchShadow::new(hand));
            });
        });
    }

    let two_finger = TwoFingerShadow::new(HandType::Right);
    let pinch = PinchShadow::new(HandType::Right);
    for spread in [40.0, 150.0, 400.0] {
        group.bench_function(format!("two_finger_pose(spread={spread})"), |b| {
            b.iter(|| black_box(two_finger.pose(black_box(spread))));
        });
        group.bench_function(format!("pinch_pose(spread={spread})"), |b| {
            b.iter(|| black_box(pinch.pose(black_box(spread))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_poses);
criterion_main!(benches);
