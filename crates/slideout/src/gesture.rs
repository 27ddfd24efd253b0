//! Gesture resolution.
//!
//! A session runs from pointer-down to pointer-up. The first move sample that
//! leaves the down point picks a direction. Once the pointer has moved past
//! the touch slop the session locks onto that edge (and with it one panel).
//! Further motion turns into retraction changes, and on release a two-regime
//! heuristic picks open or closed:
//!
//! - **Fling**: few samples, or a fast release. The direction of travel wins,
//!   no matter how far the panel moved.
//! - **Distance**: a long, slow drag. The panel opens if more than half of it
//!   is revealed.

use std::time::Duration;

use slideout_core::math::Vec2;
use slideout_input::VelocityTracker;

use crate::animation::CommitTarget;
use crate::edge::{Axis, Edge};
use crate::id::PanelId;

/// Per-axis displacement a pointer must exceed before a drag starts.
pub const TOUCH_SLOP: f32 = 10.0;

/// Release speed (px/s) above which direction alone decides.
pub const FLING_VELOCITY: f32 = 400.0;

/// Sessions with fewer move samples than this count as flings.
pub const FLING_SAMPLE_LIMIT: u32 = 10;

/// Where the gesture state machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer is down.
    Idle,
    /// Pointer is down, motion has not been claimed yet.
    Sampling,
    /// A panel follows the pointer.
    Dragging,
    /// A nested container owns this session.
    Delegated,
}

/// Which rule settled a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseRegime {
    Fling,
    Distance,
}

/// Who consumes the current event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    /// Nobody has claimed the stream yet.
    Undecided,
    /// The container is dragging a panel.
    Container,
    /// A nested container child claimed the stream.
    Nested(PanelId),
}

/// State of one pointer-down-to-up sequence.
#[derive(Debug, Clone)]
pub struct GestureSession {
    pub down: Vec2,
    /// Last position that was applied to the panel.
    pub last: Vec2,
    pub sample_count: u32,
    /// Edge picked by the first move sample that left the down point.
    pub direction: Option<Edge>,
    pub locked_edge: Option<Edge>,
    pub panel: Option<PanelId>,
    pub owner: Owner,
    /// The down event landed on the dim overlay.
    pub on_overlay: bool,
    /// Nested containers that were offered the down event.
    pub offered: Vec<PanelId>,
    pub velocity: VelocityTracker,
}

impl GestureSession {
    pub fn new(down: Vec2, timestamp: Duration) -> Self {
        let mut velocity = VelocityTracker::new();
        velocity.add(down, timestamp);
        Self {
            down,
            last: down,
            sample_count: 0,
            direction: None,
            locked_edge: None,
            panel: None,
            owner: Owner::Undecided,
            on_overlay: false,
            offered: Vec::new(),
            velocity,
        }
    }

    /// Record a move sample.
    pub fn sample(&mut self, position: Vec2, timestamp: Duration) {
        self.sample_count += 1;
        if self.direction.is_none() {
            self.direction = direction_edge(position - self.down);
        }
        self.velocity.add(position, timestamp);
    }

    pub fn is_dragging(&self) -> bool {
        self.owner == Owner::Container
    }

    pub fn displacement(&self, position: Vec2) -> Vec2 {
        position - self.down
    }

    pub fn phase(&self) -> GesturePhase {
        match self.owner {
            Owner::Undecided => GesturePhase::Sampling,
            Owner::Container => GesturePhase::Dragging,
            Owner::Nested(_) => GesturePhase::Delegated,
        }
    }
}

/// Whether a displacement is past the touch slop on either axis.
pub fn exceeds_slop(delta: Vec2) -> bool {
    delta.x.abs() > TOUCH_SLOP || delta.y.abs() > TOUCH_SLOP
}

/// The edge whose panel a displacement would reveal.
///
/// Horizontal wins ties. Motion to the right reveals the left panel, motion
/// down reveals the top panel, and so on.
pub fn direction_edge(delta: Vec2) -> Option<Edge> {
    if delta == Vec2::ZERO {
        return None;
    }
    if delta.x.abs() >= delta.y.abs() {
        Some(if delta.x > 0.0 { Edge::Left } else { Edge::Right })
    } else {
        Some(if delta.y > 0.0 { Edge::Top } else { Edge::Bottom })
    }
}

/// Component of `v` along the axis of `edge`.
pub fn along_axis(edge: Edge, v: Vec2) -> f32 {
    match edge.axis() {
        Some(Axis::Horizontal) => v.x,
        Some(Axis::Vertical) => v.y,
        None => 0.0,
    }
}

/// Retraction after the pointer moved by `step` while dragging a panel on `edge`.
///
/// Not clamped; the translation engine clamps.
pub fn step_retraction(edge: Edge, retraction: f32, step: Vec2) -> f32 {
    retraction - along_axis(edge, step) * edge.opening_sign()
}

/// Decide where a released panel settles.
///
/// `velocity` is the release velocity in px/s and `progress` the panel's
/// reveal progress at release.
pub fn resolve_release(
    edge: Edge,
    sample_count: u32,
    velocity: Vec2,
    progress: f32,
) -> (CommitTarget, ReleaseRegime) {
    let speed = along_axis(edge, velocity);
    let toward_open = speed * edge.opening_sign();

    if (sample_count < FLING_SAMPLE_LIMIT || speed.abs() > FLING_VELOCITY) && toward_open != 0.0 {
        return (CommitTarget::from_open(toward_open > 0.0), ReleaseRegime::Fling);
    }
    (CommitTarget::from_open(progress > 0.5), ReleaseRegime::Distance)
}
