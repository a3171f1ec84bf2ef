// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_overlay::{
    AnchoredOverlay, Measurement, OverlayConfig, OverlayHost, RepositionReasons,
};
use understory_placement::{Placement, PlacementResult};
use understory_trigger::{TriggerConfig, TriggerEvent, TriggerMode, TriggerStateMachine};

struct ScrollingHost {
    y: f64,
}

impl OverlayHost for ScrollingHost {
    fn measure(&mut self) -> Measurement {
        Measurement {
            trigger: Rect::from_origin_size((300.0, self.y), (48.0, 24.0)),
            overlay: Size::new(160.0, 40.0),
            viewport: Size::new(1280.0, 800.0),
        }
    }

    fn position_changed(&mut self, result: PlacementResult) {
        black_box(result);
    }

    fn open_changed(&mut self, open: bool) {
        black_box(open);
    }
}

fn bench_hover_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigger/hover");
    group.bench_function("enter_leave_with_delays", |b| {
        let mut m = TriggerStateMachine::new(
            TriggerConfig::new(TriggerMode::Hover)
                .with_delay_open(300)
                .with_delay_close(100),
        );
        let mut now = 0_u64;
        b.iter(|| {
            black_box(m.handle(TriggerEvent::PointerEnter, now));
            black_box(m.poll(now + 300));
            black_box(m.handle(TriggerEvent::PointerLeave, now + 400));
            black_box(m.poll(now + 500));
            now += 1_000;
        });
    });
    group.finish();
}

fn bench_scroll_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/scroll");
    group.bench_function("16_scrolls_per_frame", |b| {
        let mut host = ScrollingHost { y: 400.0 };
        let mut overlay = AnchoredOverlay::new(
            OverlayConfig::new(Placement::Bottom, TriggerConfig::new(TriggerMode::Manual))
                .with_offset(4.0),
        )
        .unwrap();
        overlay.show(&mut host);
        let mut frame = 0_u64;
        b.iter(|| {
            for _ in 0..16 {
                host.y -= 0.25;
                overlay.request_reposition(RepositionReasons::SCROLL);
            }
            frame += 1;
            black_box(overlay.flush(frame, &mut host));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hover_cycles, bench_scroll_frames);
criterion_main!(benches);
