// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strip/list toggle.
//!
//! A headless host that starts in the strip, scrolls a little, switches to the
//! list with a simulated scroll animation, and switches back. Each frame prints
//! the placements a renderer would draw.
//!
//! Run:
//! - `cargo run -p understory_strip_list_demos --example strip_list_toggle`
//! - `RUST_LOG=understory_strip_list=trace cargo run -p understory_strip_list_demos --example strip_list_toggle`

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_strip_list::{ItemPlacement, RenderSurface, TransitionController};

/// Frames per simulated animation.
const FRAMES: u32 = 4;

/// Stand-in for a scroll view: ten items in a 375×300 viewport.
struct Host {
    items: Vec<u32>,
    viewport: Size,
    offset: Point,
}

impl RenderSurface for Host {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_offset(&self) -> Point {
        self.offset
    }
}

fn draw(host: &Host, label: &str, placements: &[ItemPlacement]) {
    println!("{label} (offset {:?})", host.offset);
    for p in placements {
        let r = p.scaled_frame();
        println!(
            "  item {:>2} [{}] at ({:>6.1}, {:>6.1}) size {:>5.1}x{:<5.1} scale {:.3}",
            p.index, host.items[p.index], r.x0, r.y0, r.width(), r.height(), p.scale
        );
    }
}

fn animate(controller: &mut TransitionController, host: &mut Host, target: Point) {
    let start = host.offset;
    for frame in 1..=FRAMES {
        let t = f64::from(frame) / f64::from(FRAMES);
        host.offset = start.lerp(target, t);
        let placements = controller.placements_in(&*host, host.visible_rect());
        draw(host, &format!("frame {frame}/{FRAMES}"), &placements);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_strip_list=debug")),
        )
        .init();

    let mut host = Host {
        items: (0..10).collect(),
        viewport: Size::new(375.0, 300.0),
        offset: Point::ZERO,
    };
    let mut controller = TransitionController::default();

    let placements = controller.placements_in(&host, host.visible_rect());
    draw(&host, "strip", &placements);

    host.offset = Point::new(250.0, 0.0);
    let placements = controller.placements_in(&host, host.visible_rect());
    draw(&host, "strip, scrolled", &placements);

    for _ in 0..2 {
        let plan = match controller.toggle(&host) {
            Ok(plan) => plan,
            Err(err) => {
                eprintln!("toggle failed: {err}");
                return;
            }
        };
        println!(
            "\n{}: scrolling to {:?}, content {:?}",
            plan.transition, plan.target_offset, plan.content_size
        );
        animate(&mut controller, &mut host, plan.target_offset);
        controller.complete_transition();

        let placements = controller.placements_in(&host, host.visible_rect());
        draw(&host, &format!("{} at rest", controller.active_mode()), &placements);
    }
}
