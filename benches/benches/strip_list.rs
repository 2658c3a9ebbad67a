// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_strip_list::{
    LayoutConfig, ListLayout, Mode, ModeLayout, RenderSurface, StripLayout, SurfaceSnapshot,
    TransitionController, compute_scales,
};

const VIEWPORT: Size = Size::new(375.0, 300.0);

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_list/prepare");

    for len in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("strip", len), &len, |b, &len| {
            let mut layout = StripLayout::default();
            b.iter(|| {
                layout.reset();
                black_box(layout.prepare(len, VIEWPORT).content_extent());
            });
        });

        group.bench_with_input(BenchmarkId::new("list", len), &len, |b, &len| {
            let mut layout = ListLayout::default();
            b.iter(|| {
                layout.reset();
                black_box(layout.prepare(len, VIEWPORT).content_extent());
            });
        });
    }

    group.finish();
}

fn bench_shrink(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_list/compute_scales");
    let config = LayoutConfig::default();

    for len in [100usize, 1_000, 10_000] {
        let mut layout = StripLayout::default();
        let placements = layout.prepare(len, VIEWPORT).placements().to_vec();
        let visible = Rect::from_origin_size(Point::new(1_250.0, 0.0), VIEWPORT);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("all", len), &placements, |b, placements| {
            b.iter(|| black_box(compute_scales(Mode::Strip, placements, visible, &config)));
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_list/placements_in");

    // Hypothesis: idle queries are dominated by the intersection filter, while
    // animating queries pay for shrinking every item.
    for len in [100usize, 1_000, 10_000] {
        let surface = SurfaceSnapshot::new(len, VIEWPORT).with_offset(Point::new(1_250.0, 0.0));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("idle", len), &surface, |b, surface| {
            let mut controller = TransitionController::default();
            b.iter(|| black_box(controller.placements_in(surface, surface.visible_rect())));
        });

        group.bench_with_input(BenchmarkId::new("animating", len), &surface, |b, surface| {
            let mut controller = TransitionController::default();
            if controller.begin_transition(surface, Mode::List).is_err() {
                return;
            }
            b.iter(|| black_box(controller.placements_in(surface, surface.visible_rect())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prepare, bench_shrink, bench_queries);
criterion_main!(benches);
