//! Drawer Demo - a headless walk through a navigation drawer
//!
//! Builds a container with a left drawer and a bottom sheet, then replays:
//! - a slow drag that stops short of half way (snaps back closed)
//! - a quick fling that opens the drawer
//! - a tap on the dim overlay that closes it again
//! - a programmatic open of the sheet
//!
//! Run with `RUST_LOG=slideout=debug` to see the container's own decisions.

use std::time::Duration;

use slideout::{Edge, RevealMode, Size, SlideConfig, SlideContainer, Vec2};
use slideout_core::{logging, profiling};
use slideout_test_utils::{MockView, swipe};

const FRAME: f32 = 1.0 / 60.0;

fn run_frames(container: &mut SlideContainer) -> usize {
    let mut frames = 0;
    loop {
        profiling::new_frame();
        frames += 1;
        if !container.tick(FRAME) {
            return frames;
        }
    }
}

fn main() {
    logging::init();
    profiling::set_enabled(true);

    let mut container = SlideContainer::new(SlideConfig::default().duration_ms(250));
    container.register(MockView::boxed("content", 1280.0, 720.0));
    let drawer = container.register_with_key(MockView::boxed("drawer", 320.0, 720.0), "drawer");
    let sheet = container.register_with_key(MockView::boxed("sheet", 1280.0, 280.0), "sheet");
    container.set_edge(drawer, Edge::Left);
    container.set_mode(drawer, RevealMode::Center);
    container.set_edge(sheet, Edge::Bottom);
    container.set_mode(sheet, RevealMode::Collapse);

    container.on_progress(|_, _, panel, progress| {
        if let Some(view) = panel.as_any().downcast_ref::<MockView>() {
            tracing::info!("{:<7} {:>5.1}%", view.name, progress * 100.0);
        }
    });
    container.on_layout(Size::new(1280.0, 720.0));

    tracing::info!("Slow drag to 40%");
    let mut slow = swipe(
        Vec2::new(5.0, 360.0),
        Vec2::new(133.0, 360.0),
        16,
        Duration::from_millis(40),
    );
    if let Some(up) = slow.last_mut() {
        *up = up.with_velocity(Vec2::ZERO);
    }
    for event in &slow {
        container.handle_pointer(event);
    }
    let frames = run_frames(&mut container);
    tracing::info!("Drawer open: {} after {} frames", container.is_open(drawer), frames);

    tracing::info!("Quick fling");
    for event in &swipe(
        Vec2::new(5.0, 360.0),
        Vec2::new(80.0, 360.0),
        3,
        Duration::from_millis(12),
    ) {
        container.handle_pointer(event);
    }
    let frames = run_frames(&mut container);
    tracing::info!("Drawer open: {} after {} frames", container.is_open(drawer), frames);

    tracing::info!("Tap on overlay (opacity {:.2})", container.overlay().opacity());
    for event in &swipe(
        Vec2::new(900.0, 360.0),
        Vec2::new(900.0, 360.0),
        1,
        Duration::from_millis(60),
    ) {
        container.handle_pointer(event);
    }
    run_frames(&mut container);
    tracing::info!("Drawer open: {}", container.is_open(drawer));

    tracing::info!("Open sheet");
    if let Err(err) = container.open("sheet") {
        tracing::error!("{}", err);
        return;
    }
    run_frames(&mut container);
    if let Some(content) = container.view_as::<MockView>(0usize) {
        tracing::info!(
            "Content resized to {}x{} for the sheet",
            content.size.width,
            content.size.height
        );
    }
}
