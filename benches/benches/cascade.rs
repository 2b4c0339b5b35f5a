// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_style::{ElementStyle, PseudoState, StyleCascade, StylePatch};
use understory_vector::Vector;

fn bench_cascade(c: &mut Criterion) {
    let base = ElementStyle::builder()
        .width(20.0)
        .height(20.0)
        .cursor("pointer")
        .hover(StylePatch::new().opacity(0.5).width(22.0))
        .active(StylePatch::new().rotation(5.0).cursor("grabbing"))
        .build();
    let mut cascade = StyleCascade::new(base);

    let mut group = c.benchmark_group("style/cascade");
    for (name, states) in [
        ("none", PseudoState::empty()),
        ("hover", PseudoState::HOVER),
        ("hover_active", PseudoState::HOVER | PseudoState::ACTIVE),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(cascade.begin(black_box(states)));
                cascade.end();
            });
        });
    }
    group.finish();
}

fn bench_vector(c: &mut Criterion) {
    c.bench_function("vector/lerp", |b| {
        let mut v = Vector::new([1.0, 2.0, 3.0, 4.0]);
        b.iter(|| {
            v.lerp(black_box([4.0, 3.0, 2.0, 1.0]), black_box(0.25));
            black_box(v.mag());
        });
    });
}

criterion_group!(benches, bench_cascade, bench_vector);
criterion_main!(benches);
