//! Touch ownership.
//!
//! Decides, event by event, whether the container drags a panel itself, hands
//! the stream to a nested container child, or lets it fall through. Ownership
//! is settled once per session and reset on every pointer-down.

use slideout_core::profiling::profile_function;
use slideout_input::{HandleStatus, PointerEvent, PointerPhase};

use crate::container::SlideContainer;
use crate::edge::Edge;
use crate::gesture::{self, GestureSession, Owner};
use crate::id::PanelId;
use crate::translation;

/// Whether a swipe towards `candidate` should be claimed by the container.
///
/// True when the swipe would close the open panel, or when a panel waits on
/// the candidate edge.
pub fn intercept_edge(candidate: Edge, open_edge: Option<Edge>, has_panel: bool) -> bool {
    open_edge.is_some_and(|open| candidate == open.reverse()) || has_panel
}

impl SlideContainer {
    /// Feed one pointer event from the host.
    ///
    /// Pointer-downs that land on the visible dim overlay, outside every
    /// revealed panel, are treated as overlay touches.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> HandleStatus {
        profile_function!();
        let on_overlay = event.phase == PointerPhase::Down && self.hits_overlay(event.position);
        self.dispatch(event, on_overlay)
    }

    /// Feed a pointer event that the host's overlay view received.
    pub fn handle_overlay_pointer(&mut self, event: &PointerEvent) -> HandleStatus {
        profile_function!();
        self.dispatch(event, true)
    }

    fn dispatch(&mut self, event: &PointerEvent, on_overlay: bool) -> HandleStatus {
        if !self.config.gestures_enabled() {
            return HandleStatus::ignored();
        }
        match event.phase {
            PointerPhase::Down => self.pointer_down(event, on_overlay),
            PointerPhase::Move => self.pointer_move(event),
            PointerPhase::Up => self.pointer_up(event),
            PointerPhase::Cancel => self.pointer_cancel(event),
        }
    }

    fn pointer_down(&mut self, event: &PointerEvent, on_overlay: bool) -> HandleStatus {
        if self.session.is_some() {
            tracing::trace!("New pointer-down replaces an unfinished session");
        }
        let mut session = GestureSession::new(event.position, event.timestamp);
        session.on_overlay = on_overlay;

        if let Some(open) = self.registry.find_open() {
            session.locked_edge = Some(open.edge());
            session.panel = Some(open.id());
        } else {
            for (index, record) in self.registry.iter_mut().enumerate() {
                let revealed = index == 0 || record.retraction < record.extent();
                if record.view().is_container() && revealed {
                    let status = record.view_mut().dispatch_pointer(event);
                    session.offered.push(record.id());
                    if status.is_handled() {
                        session.owner = Owner::Nested(record.id());
                        break;
                    }
                }
            }
        }

        if let Owner::Nested(owner) = session.owner {
            tracing::debug!("Nested container {} claimed the pointer-down", owner.0);
            let others: Vec<PanelId> = session
                .offered
                .drain(..)
                .filter(|id| *id != owner)
                .collect();
            self.session = Some(session);
            let cancel = PointerEvent::cancel(event.position, event.timestamp);
            for id in others {
                self.forward(id, &cancel);
            }
            return HandleStatus::handled();
        }

        tracing::trace!(
            "Pointer down at ({:.1}, {:.1}), overlay: {}",
            event.position.x,
            event.position.y,
            on_overlay
        );
        self.session = Some(session);

        if on_overlay {
            HandleStatus::consumed()
        } else {
            HandleStatus::handled()
        }
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> HandleStatus {
        let Some(session) = self.session.as_mut() else {
            return HandleStatus::ignored();
        };
        if let Owner::Nested(owner) = session.owner {
            return self.forward(owner, event);
        }
        session.sample(event.position, event.timestamp);
        if session.is_dragging() {
            return self.drag(event);
        }

        // Nested containers get first claim while nothing is open.
        if self.registry.find_open().is_none() {
            let offered = session.offered.clone();
            for id in offered {
                let status = self.forward(id, event);
                if status.is_handled() {
                    if let Some(session) = self.session.as_mut() {
                        session.owner = Owner::Nested(id);
                    }
                    tracing::debug!("Nested container {} owns the gesture", id.0);
                    return status;
                }
            }
        }

        let Some(session) = self.session.as_ref() else {
            return HandleStatus::ignored();
        };
        let delta = session.displacement(event.position);
        if !gesture::exceeds_slop(delta) {
            return HandleStatus::handled();
        }
        let Some(candidate) = session.direction.or_else(|| gesture::direction_edge(delta)) else {
            return HandleStatus::handled();
        };

        let open = self.registry.find_open().map(|r| (r.edge(), r.id()));
        let waiting = self.registry.find_by_edge(candidate).map(|r| r.id());
        if !intercept_edge(candidate, open.map(|(edge, _)| edge), waiting.is_some()) {
            tracing::trace!("Not intercepting swipe towards {:?}", candidate);
            return HandleStatus::handled();
        }
        let Some((edge, panel)) = open.or(waiting.map(|id| (candidate, id))) else {
            return HandleStatus::handled();
        };
        self.intercept(edge, panel, event)
    }

    /// Take the stream: lock onto `panel` and apply the motion so far.
    fn intercept(&mut self, edge: Edge, panel: PanelId, event: &PointerEvent) -> HandleStatus {
        let Some(session) = self.session.as_mut() else {
            return HandleStatus::ignored();
        };
        session.locked_edge = Some(edge);
        session.panel = Some(panel);
        session.owner = Owner::Container;
        let offered = std::mem::take(&mut session.offered);
        tracing::debug!("Intercepted drag of panel {} on {:?}", panel.0, edge);

        self.animator.cancel(panel);
        let cancel = PointerEvent::cancel(event.position, event.timestamp);
        for id in offered {
            self.forward(id, &cancel);
        }
        self.drag(event)
    }

    fn drag(&mut self, event: &PointerEvent) -> HandleStatus {
        let Some(session) = self.session.as_mut() else {
            return HandleStatus::ignored();
        };
        let (Some(edge), Some(panel)) = (session.locked_edge, session.panel) else {
            return HandleStatus::ignored();
        };
        let step = event.position - session.last;
        session.last = event.position;

        let Some(retraction) = self.registry.by_id(panel).map(|r| r.retraction()) else {
            return HandleStatus::ignored();
        };
        let next = gesture::step_retraction(edge, retraction, step);
        tracing::trace!("Drag panel {}: {:.1} -> {:.1}", panel.0, retraction, next);
        self.apply_translation(panel, next);
        HandleStatus::consumed()
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> HandleStatus {
        let Some(mut session) = self.session.take() else {
            return HandleStatus::ignored();
        };
        match session.owner {
            Owner::Nested(owner) => {
                tracing::debug!("Nested container {} released the gesture", owner.0);
                self.forward(owner, event)
            }
            Owner::Container => {
                let (Some(edge), Some(panel)) = (session.locked_edge, session.panel) else {
                    return HandleStatus::ignored();
                };
                session.velocity.add(event.position, event.timestamp);
                let velocity = event
                    .velocity
                    .unwrap_or_else(|| session.velocity.velocity());
                let progress = self
                    .registry
                    .by_id(panel)
                    .map_or(0.0, |r| translation::progress(r.extent(), r.retraction()));

                let (target, regime) =
                    gesture::resolve_release(edge, session.sample_count, velocity, progress);
                tracing::debug!(
                    "Released panel {} at {:.2} ({:?}, {} samples, v={:.0}): {:?}",
                    panel.0,
                    progress,
                    regime,
                    session.sample_count,
                    gesture::along_axis(edge, velocity),
                    target
                );
                self.commit(panel, target);
                HandleStatus::consumed()
            }
            Owner::Undecided => {
                if session.on_overlay {
                    tracing::debug!("Tap on overlay closes open panels");
                    self.close_all();
                    return HandleStatus::consumed();
                }
                session
                    .offered
                    .iter()
                    .fold(HandleStatus::ignored(), |status, id| {
                        status | self.forward(*id, event)
                    })
            }
        }
    }

    fn pointer_cancel(&mut self, event: &PointerEvent) -> HandleStatus {
        let Some(session) = self.session.take() else {
            return HandleStatus::ignored();
        };
        tracing::debug!("Gesture cancelled in {:?}", session.phase());
        match session.owner {
            Owner::Nested(owner) => self.forward(owner, event),
            Owner::Container => HandleStatus::consumed(),
            Owner::Undecided => {
                for id in &session.offered {
                    self.forward(*id, event);
                }
                HandleStatus::handled()
            }
        }
    }

    /// Drop the current session without committing anything.
    pub(crate) fn abandon_session(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("Abandoned gesture in {:?}", session.phase());
        }
    }

    fn forward(&mut self, id: PanelId, event: &PointerEvent) -> HandleStatus {
        self.registry
            .by_id_mut(id)
            .map_or(HandleStatus::ignored(), |r| r.view_mut().dispatch_pointer(event))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use slideout_core::geometry::Size;
    use slideout_core::math::Vec2;

    use super::*;
    use crate::config::SlideConfig;
    use crate::edge::RevealMode;
    use crate::gesture::GesturePhase;
    use crate::view::test_view::FixedView;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn container_with_left() -> SlideContainer {
        let mut container = SlideContainer::new(SlideConfig::default().duration(0.0));
        container.register(FixedView::boxed(800.0, 600.0));
        let left = container.register(FixedView::boxed(300.0, 600.0));
        container.set_edge(left, Edge::Left);
        container.set_mode(left, RevealMode::Absolute);
        container.on_layout(Size::new(800.0, 600.0));
        container
    }

    #[test]
    fn test_intercept_edge_rules() {
        assert!(intercept_edge(Edge::Right, Some(Edge::Left), false));
        assert!(!intercept_edge(Edge::Top, Some(Edge::Left), false));
        assert!(intercept_edge(Edge::Top, None, true));
        assert!(!intercept_edge(Edge::Bottom, None, false));
    }

    #[test]
    fn test_small_motion_stays_sampling() {
        let mut container = container_with_left();
        container.handle_pointer(&PointerEvent::down(Vec2::new(10.0, 300.0), ms(0)));
        let status =
            container.handle_pointer(&PointerEvent::moved(Vec2::new(18.0, 305.0), ms(16)));
        assert!(!status.is_consumed());
        assert_eq!(container.gesture_phase(), GesturePhase::Sampling);
    }

    #[test]
    fn test_swipe_without_panel_is_not_claimed() {
        let mut container = container_with_left();
        container.handle_pointer(&PointerEvent::down(Vec2::new(400.0, 300.0), ms(0)));
        let status =
            container.handle_pointer(&PointerEvent::moved(Vec2::new(400.0, 360.0), ms(16)));
        assert!(!status.is_consumed());
        assert_eq!(container.gesture_phase(), GesturePhase::Sampling);
    }

    #[test]
    fn test_quick_swipe_opens_left_panel() {
        let mut container = container_with_left();
        container.handle_pointer(&PointerEvent::down(Vec2::new(10.0, 300.0), ms(0)));
        let status =
            container.handle_pointer(&PointerEvent::moved(Vec2::new(60.0, 300.0), ms(16)));
        assert!(status.is_consumed());
        assert_eq!(container.gesture_phase(), GesturePhase::Dragging);
        assert_eq!(container.progress(1usize), Some(50.0 / 300.0));

        container.handle_pointer(&PointerEvent::up(Vec2::new(90.0, 300.0), ms(32)));
        assert_eq!(container.gesture_phase(), GesturePhase::Idle);
        assert!(container.is_open(1usize));
    }

    #[test]
    fn test_cancel_leaves_panel_where_it_is() {
        let mut container = container_with_left();
        container.handle_pointer(&PointerEvent::down(Vec2::new(10.0, 300.0), ms(0)));
        container.handle_pointer(&PointerEvent::moved(Vec2::new(160.0, 300.0), ms(16)));
        container.handle_pointer(&PointerEvent::cancel(Vec2::new(160.0, 300.0), ms(32)));

        assert_eq!(container.progress(1usize), Some(0.5));
        assert!(!container.is_open(1usize));
        assert!(container.is_settled());
    }

    #[test]
    fn test_disabled_gestures_ignore_everything() {
        let mut container = container_with_left();
        container.set_gestures_enabled(false);
        let status = container.handle_pointer(&PointerEvent::down(Vec2::ZERO, ms(0)));
        assert_eq!(status, HandleStatus::ignored());
        assert_eq!(container.gesture_phase(), GesturePhase::Idle);
    }
}
