// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Placement, PlacementRequest, PlacementResolver, resolve};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Triggers laid out on a grid that covers every edge of the viewport.
fn grid_triggers(n: usize) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let x = (i as f64 / (n - 1) as f64) * (VIEWPORT.width + 80.0) - 40.0;
            let y = (j as f64 / (n - 1) as f64) * (VIEWPORT.height + 80.0) - 40.0;
            out.push(Rect::from_origin_size((x, y), (48.0, 24.0)));
        }
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/resolve");
    let overlay = Size::new(220.0, 90.0);

    for n in [8_usize, 32] {
        let triggers = grid_triggers(n);
        group.throughput(Throughput::Elements((triggers.len() * Placement::ALL.len()) as u64));

        group.bench_with_input(BenchmarkId::new("all_placements", n), &triggers, |b, triggers| {
            b.iter(|| {
                for placement in Placement::ALL {
                    let req = PlacementRequest::new(placement, VIEWPORT)
                        .unwrap()
                        .with_offset(6.0)
                        .unwrap();
                    for trigger in triggers {
                        black_box(resolve(*trigger, overlay, &req));
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_resolver_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/resolver");
    let trigger = Rect::from_origin_size((600.0, 20.0), (48.0, 24.0));
    let overlay = Size::new(220.0, 90.0);
    let req = PlacementRequest::new(Placement::TopStart, VIEWPORT)
        .unwrap()
        .with_offset(6.0)
        .unwrap();

    // Scroll storms repeat identical geometry; the cache should make these near free.
    group.bench_function("repeated_identical", |b| {
        let mut resolver = PlacementResolver::new();
        b.iter(|| black_box(resolver.resolve(black_box(trigger), overlay, &req)));
    });
    group.bench_function("uncached", |b| {
        b.iter(|| black_box(resolve(black_box(trigger), overlay, &req)));
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_resolver_cache);
criterion_main!(benches);
