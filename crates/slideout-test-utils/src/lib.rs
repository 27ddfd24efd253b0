//! Test utilities for slideout containers.
//!
//! - [`MockView`] - a [`View`] that records what the container does to it and
//!   can pose as a nested container that claims some gestures
//! - [`RecordingObserver`] - a progress observer whose samples stay readable
//!   after the container takes ownership of it
//!
//! # Example
//!
//! ```rust
//! use slideout::{Edge, SlideContainer, Size};
//! use slideout_test_utils::{MockView, RecordingObserver};
//!
//! let mut container = SlideContainer::default();
//! container.register(MockView::boxed("content", 800.0, 600.0));
//! let nav = container.register(MockView::boxed("nav", 300.0, 600.0));
//! container.set_edge(nav, Edge::Left);
//!
//! let observer = RecordingObserver::new();
//! container.set_progress_observer(observer.clone());
//! container.on_layout(Size::new(800.0, 600.0));
//! container.jump_to(nav, true).unwrap();
//!
//! assert_eq!(observer.last_for("nav"), Some(1.0));
//! ```

mod mock_view;
mod observer;

pub use mock_view::{ClaimPolicy, MockView, ViewCall};
pub use observer::{ProgressSample, RecordingObserver};

use std::time::Duration;

use slideout::{PointerEvent, Vec2};

/// Build a pointer stream from `from` to `to` in `steps` moves, `interval` apart.
///
/// The stream is down, the moves, then up at the last position.
pub fn swipe(from: Vec2, to: Vec2, steps: u32, interval: Duration) -> Vec<PointerEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps as usize + 2);
    events.push(PointerEvent::down(from, Duration::ZERO));
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        events.push(PointerEvent::moved(from.lerp(to, t), interval * step));
    }
    events.push(PointerEvent::up(to, interval * (steps + 1)));
    events
}
