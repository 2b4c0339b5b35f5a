// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_scene::{Element, Panel, RecordingSurface, Scene};
use understory_style::{ElementStyle, StylePatch};

/// `roots` top-level panels, each with a chain of `depth` rotated inherit children.
fn build(roots: usize, depth: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..roots {
        let f = (i % 10) as f64;
        let mut element = Element::new(
            Panel::new(),
            ElementStyle::builder()
                .left(f * 9.0)
                .top(f * 9.0)
                .width(10.0)
                .height(10.0)
                .rotation(f * 7.0)
                .hover(StylePatch::new().opacity(0.5))
                .build(),
        );
        let mut chain: Option<Element> = None;
        for d in (0..depth).rev() {
            let mut link = Element::new(
                Panel::new(),
                ElementStyle::builder()
                    .left(10.0)
                    .top(10.0)
                    .width(80.0)
                    .height(80.0)
                    .rotation(d as f64 * 5.0)
                    .pivot([-0.5, 0.5])
                    .build(),
            );
            if let Some(inner) = chain.take() {
                link.append_child(inner);
            }
            chain = Some(link);
        }
        if let Some(chain) = chain {
            element.append_child(chain);
        }
        scene.append_child(element);
    }
    scene
}

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/cycle");
    for (roots, depth) in [(10usize, 0usize), (100, 0), (100, 4), (1_000, 2)] {
        let mut scene = build(roots, depth);
        let mut surface = RecordingSurface::new();
        group.throughput(Throughput::Elements((roots * (depth + 1)) as u64));
        group.bench_function(BenchmarkId::new(format!("depth{depth}"), roots), |b| {
            b.iter(|| {
                surface.clear();
                scene.cycle(black_box(&mut surface), 16.0);
            });
        });
    }
    group.finish();
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/pointer_move");
    for roots in [10usize, 100, 1_000] {
        let mut scene = build(roots, 2);
        scene.cycle(&mut RecordingSurface::new(), 16.0);
        group.throughput(Throughput::Elements((roots * 3) as u64));
        group.bench_function(BenchmarkId::from_parameter(roots), |b| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 13.0) % 800.0;
                black_box(scene.pointer_move(Point::new(x, 300.0)));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cycle, bench_pointer_move);
criterion_main!(benches);
