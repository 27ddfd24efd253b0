use std::time::Duration;

use slideout_core::math::Vec2;

/// Where a pointer event sits within its down-to-up session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// First contact. Starts a new session.
    Down,
    /// Motion sample while the pointer is held.
    Move,
    /// Release. Ends the session.
    Up,
    /// The platform took the stream away (system gesture, window loss).
    Cancel,
}

/// A single pointer sample in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    /// Position relative to the container's top-left corner.
    pub position: Vec2,
    /// Monotonic timestamp; only differences between samples matter.
    pub timestamp: Duration,
    /// Release velocity in px/s reported by the platform, if it tracks one.
    pub velocity: Option<Vec2>,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Vec2, timestamp: Duration) -> Self {
        Self {
            phase,
            position,
            timestamp,
            velocity: None,
        }
    }

    pub fn down(position: Vec2, timestamp: Duration) -> Self {
        Self::new(PointerPhase::Down, position, timestamp)
    }

    pub fn moved(position: Vec2, timestamp: Duration) -> Self {
        Self::new(PointerPhase::Move, position, timestamp)
    }

    pub fn up(position: Vec2, timestamp: Duration) -> Self {
        Self::new(PointerPhase::Up, position, timestamp)
    }

    pub fn cancel(position: Vec2, timestamp: Duration) -> Self {
        Self::new(PointerPhase::Cancel, position, timestamp)
    }

    /// Attach a platform-measured fling velocity (px/s).
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// True for the events that end a session.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, PointerPhase::Up | PointerPhase::Cancel)
    }
}

bitflags::bitflags! {
    /// Outcome of dispatching one event.
    ///
    /// `HANDLED` means the receiver looked at the event and wants the rest of
    /// the session. `CONSUMED` additionally means nobody else should see it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_status_levels() {
        assert!(HandleStatus::consumed().is_handled());
        assert!(HandleStatus::consumed().is_consumed());
        assert!(HandleStatus::handled().is_handled());
        assert!(!HandleStatus::handled().is_consumed());
        assert!(!HandleStatus::ignored().is_handled());
    }

    #[test]
    fn test_terminal_phases() {
        let at = Vec2::ZERO;
        let t = Duration::ZERO;
        assert!(!PointerEvent::down(at, t).is_terminal());
        assert!(!PointerEvent::moved(at, t).is_terminal());
        assert!(PointerEvent::up(at, t).is_terminal());
        assert!(PointerEvent::cancel(at, t).is_terminal());
    }
}
