//! Pointer input for slideout.
//!
//! The host toolkit translates its native touch or mouse events into
//! [`PointerEvent`]s and feeds them to a container one session at a time.
//! Every dispatch answers with a [`HandleStatus`].

pub mod event;
pub mod velocity;

pub use event::{HandleStatus, PointerEvent, PointerPhase};
pub use velocity::VelocityTracker;
