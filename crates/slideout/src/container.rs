//! The slide container.
//!
//! Owns the panel registry, the single gesture session, the commit animator
//! and the dim overlay, and exposes the programmatic API the host drives.
//! Pointer dispatch lives in [`arbiter`](crate::arbiter).

use slideout_core::geometry::{Rect, Size};
use slideout_core::math::Vec2;
use slideout_core::profiling::{profile_function, profile_scope};

use crate::animation::{AnimationFrame, CommitAnimator, CommitTarget, EasingFunction};
use crate::config::SlideConfig;
use crate::edge::{Edge, RevealMode};
use crate::error::{Result, SlideError};
use crate::gesture::{GesturePhase, GestureSession};
use crate::id::{ContainerId, PanelHandle, PanelId, PanelKey, PanelRef};
use crate::overlay::DimOverlay;
use crate::registry::{PanelRecord, PanelRegistry};
use crate::translation::{self, Translation};
use crate::view::View;

/// Receives reveal progress for every applied translation.
///
/// Called synchronously, once per translation, even when nothing moved.
pub trait ProgressObserver {
    fn on_progress(
        &mut self,
        container: &SlideContainer,
        primary: &dyn View,
        panel: &dyn View,
        progress: f32,
    );
}

impl<F> ProgressObserver for F
where
    F: FnMut(&SlideContainer, &dyn View, &dyn View, f32),
{
    fn on_progress(
        &mut self,
        container: &SlideContainer,
        primary: &dyn View,
        panel: &dyn View,
        progress: f32,
    ) {
        self(container, primary, panel, progress)
    }
}

/// A container hosting one primary surface and any number of edge panels.
///
/// # Example
///
/// ```
/// # use slideout::{Edge, RevealMode, SlideConfig, SlideContainer, View};
/// # use slideout_core::geometry::Size;
/// # fn demo(primary: Box<dyn View>, drawer: Box<dyn View>) -> slideout::Result<()> {
/// let mut container = SlideContainer::new(SlideConfig::default());
/// container.register(primary);
/// let drawer = container.register_with_key(drawer, "drawer");
/// container.set_edge(drawer, Edge::Left);
/// container.set_mode(drawer, RevealMode::Absolute);
///
/// container.on_layout(Size::new(800.0, 600.0));
/// container.open("drawer")?;
/// while container.tick(1.0 / 60.0) {}
/// assert!(container.is_open(drawer));
/// # Ok(())
/// # }
/// ```
pub struct SlideContainer {
    pub(crate) id: ContainerId,
    pub(crate) config: SlideConfig,
    pub(crate) registry: PanelRegistry,
    pub(crate) animator: CommitAnimator,
    pub(crate) overlay: DimOverlay,
    pub(crate) session: Option<GestureSession>,
    observer: Option<Box<dyn ProgressObserver>>,
    /// Primary surface size captured on the first layout after attach.
    baseline: Option<Size<f32>>,
    pub(crate) bounds: Size<f32>,
    /// Commits requested before the first layout.
    pending: Vec<(PanelId, CommitTarget)>,
}

impl SlideContainer {
    pub fn new(config: SlideConfig) -> Self {
        let id = ContainerId::next();
        Self {
            id,
            overlay: DimOverlay::new(config.dim_overlay_enabled()),
            config,
            registry: PanelRegistry::new(id),
            animator: CommitAnimator::new(),
            session: None,
            observer: None,
            baseline: None,
            bounds: Size::ZERO,
            pending: Vec::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    pub fn set_duration(&mut self, seconds: f32) {
        self.config.duration = seconds.max(0.0);
    }

    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.config.easing = easing;
    }

    /// Enable or disable drag, fling and tap handling.
    ///
    /// Disabling drops the current session without committing.
    pub fn set_gestures_enabled(&mut self, enabled: bool) {
        self.config = self.config.clone().gestures(enabled);
        if !enabled {
            self.abandon_session();
        }
    }

    pub fn set_dim_overlay_enabled(&mut self, enabled: bool) {
        self.config = self.config.clone().dim_overlay(enabled);
        self.overlay.set_enabled(enabled);
    }

    pub fn overlay(&self) -> &DimOverlay {
        &self.overlay
    }

    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    // -- Registration --

    /// Add a child. The first child becomes the primary surface.
    pub fn register(&mut self, view: Box<dyn View>) -> PanelHandle {
        self.registry.register(view, None)
    }

    /// Add a child addressable by a stable key.
    pub fn register_with_key(
        &mut self,
        view: Box<dyn View>,
        key: impl Into<PanelKey>,
    ) -> PanelHandle {
        self.registry.register(view, Some(key.into()))
    }

    pub fn set_key(&mut self, target: impl Into<PanelRef>, key: impl Into<PanelKey>) {
        self.registry.set_key(target, key.into());
    }

    /// Remove a child and return its view.
    ///
    /// An open panel is snapped shut first so the primary surface is restored.
    pub fn remove(&mut self, target: impl Into<PanelRef>) -> Result<Option<Box<dyn View>>> {
        let Some(index) = self.registry.index_of(target) else {
            return Ok(None);
        };
        let id = self.registry.get(index).map(PanelRecord::id);
        if index > 0
            && let Some(id) = id
        {
            self.animator.cancel(id);
            if self.session.as_ref().and_then(|s| s.panel) == Some(id) {
                self.abandon_session();
            }
            self.pending.retain(|(panel, _)| *panel != id);
            if self.registry.by_id(id).is_some_and(|r| r.edge != Edge::None) {
                self.settle(id, CommitTarget::Closed);
            }
        }
        let removed = self.registry.remove(index)?;
        Ok(removed.map(PanelRecord::into_view))
    }

    pub fn handle(&self, target: impl Into<PanelRef>) -> Option<PanelHandle> {
        self.registry.get(target).map(|record| PanelHandle {
            container: self.id,
            panel: record.id(),
        })
    }

    pub fn view(&self, target: impl Into<PanelRef>) -> Option<&dyn View> {
        self.registry.get(target).map(PanelRecord::view)
    }

    pub fn view_mut(&mut self, target: impl Into<PanelRef>) -> Option<&mut dyn View> {
        self.registry.get_mut(target).map(PanelRecord::view_mut)
    }

    /// Downcast a child to its concrete type.
    pub fn view_as<T: View>(&self, target: impl Into<PanelRef>) -> Option<&T> {
        self.view(target)?.as_any().downcast_ref::<T>()
    }

    pub fn view_as_mut<T: View>(&mut self, target: impl Into<PanelRef>) -> Option<&mut T> {
        self.view_mut(target)?.as_any_mut().downcast_mut::<T>()
    }

    // -- Edge and mode --

    pub fn edge(&self, target: impl Into<PanelRef>) -> Option<Edge> {
        self.registry.get(target).map(PanelRecord::edge)
    }

    pub fn mode(&self, target: impl Into<PanelRef>) -> Option<RevealMode> {
        self.registry.get(target).map(PanelRecord::mode)
    }

    /// Attach a panel to an edge.
    ///
    /// The panel is moved to its resting position on the new edge; whether it
    /// is open or closed does not change, except that [`Edge::None`] closes it.
    /// The primary surface never slides, so assigning it an edge is ignored.
    pub fn set_edge(&mut self, target: impl Into<PanelRef>, edge: Edge) {
        let Some(index) = self.registry.index_of(target) else {
            return;
        };
        if index == 0 {
            tracing::trace!("Ignoring edge {:?} for the primary surface", edge);
            return;
        }
        let Some(record) = self.registry.iter_mut().nth(index) else {
            return;
        };
        let id = record.id();
        if record.edge == edge {
            return;
        }
        let hidden = record.retraction >= record.extent();
        let mode = record.mode;
        record.edge = edge;
        if hidden {
            record.retraction = record.extent();
        }
        self.animator.cancel(id);
        if self.session.as_ref().and_then(|s| s.panel) == Some(id) {
            self.abandon_session();
        }
        if edge == Edge::None && !hidden {
            self.reset_primary(mode);
        }
        tracing::debug!("Panel {} attached to {:?}", id.0, edge);

        // An edge-less panel can never be open.
        let open = edge != Edge::None && self.registry.by_id(id).is_some_and(PanelRecord::is_open);
        self.settle(id, CommitTarget::from_open(open));
    }

    /// Change how the primary surface reacts to a panel.
    pub fn set_mode(&mut self, target: impl Into<PanelRef>, mode: RevealMode) {
        let Some(index) = self.registry.index_of(target) else {
            return;
        };
        if index == 0 {
            return;
        }
        let Some(record) = self.registry.iter_mut().nth(index) else {
            return;
        };
        let previous = std::mem::replace(&mut record.mode, mode);
        if previous == mode {
            return;
        }
        let id = record.id();
        let revealed = record.retraction < record.extent();
        let retraction = record.retraction;
        tracing::debug!("Panel {} mode {:?} -> {:?}", id.0, previous, mode);

        if revealed {
            self.reset_primary(previous);
            self.apply_translation(id, retraction);
        }
    }

    // -- State queries --

    /// Whether a panel is flagged open. The primary surface is always open.
    pub fn is_open(&self, target: impl Into<PanelRef>) -> bool {
        self.registry.get(target).is_some_and(PanelRecord::is_open)
    }

    /// The open auxiliary panel, if any.
    pub fn open_panel(&self) -> Option<PanelHandle> {
        self.registry.find_open().map(|record| PanelHandle {
            container: self.id,
            panel: record.id(),
        })
    }

    /// Reveal progress of a panel in `[0, 1]`.
    pub fn progress(&self, target: impl Into<PanelRef>) -> Option<f32> {
        self.registry
            .get(target)
            .map(|r| translation::progress(r.extent(), r.retraction))
    }

    /// Primary surface size captured on first layout, if layout has happened.
    pub fn baseline(&self) -> Option<Size<f32>> {
        self.baseline
    }

    pub fn is_laid_out(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.session
            .as_ref()
            .map_or(GesturePhase::Idle, GestureSession::phase)
    }

    /// No animation is running and no panel is being dragged.
    pub fn is_settled(&self) -> bool {
        self.animator.is_empty() && !self.session.as_ref().is_some_and(|s| s.is_dragging())
    }

    pub fn is_animating(&self, target: impl Into<PanelRef>) -> bool {
        self.registry
            .get(target)
            .is_some_and(|r| self.animator.is_animating(r.id()))
    }

    // -- Observer --

    pub fn set_progress_observer(&mut self, observer: impl ProgressObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Register a closure as the progress observer.
    pub fn on_progress<F>(&mut self, observer: F)
    where
        F: FnMut(&SlideContainer, &dyn View, &dyn View, f32) + 'static,
    {
        self.set_progress_observer(observer);
    }

    pub fn clear_progress_observer(&mut self) {
        self.observer = None;
    }

    fn notify(&mut self, id: PanelId, progress: f32) {
        let Some(mut observer) = self.observer.take() else {
            return;
        };
        if let (Some(primary), Some(panel)) = (self.registry.primary(), self.registry.by_id(id)) {
            observer.on_progress(self, primary.view(), panel.view(), progress);
        }
        self.observer = Some(observer);
    }

    // -- Lifecycle --

    /// The container was attached to a window. The next layout recaptures the baseline.
    pub fn on_attached(&mut self) {
        self.baseline = None;
    }

    /// The container left its window.
    ///
    /// Running animations settle at their targets and the gesture session is
    /// dropped. The primary surface is put back to its baseline before the
    /// baseline is invalidated; revealed panels are re-applied on the next
    /// layout.
    pub fn on_detached(&mut self) {
        self.abandon_session();
        let frames = self.animator.finish_all();
        self.apply_frames(frames);

        // The next layout recaptures the baseline from the primary's own size.
        let revealed: Vec<RevealMode> = self
            .registry
            .panels()
            .filter(|r| r.edge != Edge::None && r.retraction < r.extent())
            .map(PanelRecord::mode)
            .collect();
        for mode in revealed {
            self.reset_primary(mode);
        }
        self.baseline = None;
        tracing::debug!("Container {} detached", self.id.as_u64());
    }

    /// A layout pass completed with the container at `bounds`.
    pub fn on_layout(&mut self, bounds: Size<f32>) {
        self.bounds = bounds;
        if self.baseline.is_some() {
            return;
        }
        let Some(size) = self.registry.primary().map(|p| p.view().size()) else {
            return;
        };
        if size.is_empty() {
            return;
        }
        self.baseline = Some(size);
        tracing::debug!(
            "Captured primary baseline {}x{}",
            size.width,
            size.height
        );

        let ids: Vec<(PanelId, bool)> = self
            .registry
            .panels()
            .filter(|r| r.edge != Edge::None)
            .map(|r| (r.id(), r.is_open))
            .collect();
        for (id, open) in ids {
            if !self.animator.is_animating(id) {
                self.settle(id, CommitTarget::from_open(open));
            }
        }

        profile_scope!("flush_deferred");
        for (id, target) in std::mem::take(&mut self.pending) {
            tracing::debug!("Running deferred {:?} for panel {}", target, id.0);
            self.request(id, target);
        }
    }

    // -- Commits --

    /// Animate a panel open. Any other open panel closes.
    pub fn open(&mut self, target: impl Into<PanelRef>) -> Result<()> {
        self.request_ref(target.into(), CommitTarget::Open)
    }

    /// Animate a panel closed.
    pub fn close(&mut self, target: impl Into<PanelRef>) -> Result<()> {
        self.request_ref(target.into(), CommitTarget::Closed)
    }

    /// Open a closed (or closing) panel, close an open (or opening) one.
    pub fn toggle(&mut self, target: impl Into<PanelRef>) -> Result<()> {
        let target = target.into();
        let Some(record) = self.registry.get(target) else {
            return Ok(());
        };
        let heading_open = match self.animator.get(record.id()) {
            Some(anim) => anim.target.is_open(),
            None => record.is_open,
        };
        self.request_ref(target, CommitTarget::from_open(!heading_open))
    }

    /// Animate every open or opening panel closed.
    pub fn close_all(&mut self) {
        let ids: Vec<PanelId> = self
            .registry
            .panels()
            .filter(|r| r.edge != Edge::None)
            .filter(|r| {
                r.is_open
                    || self
                        .animator
                        .get(r.id())
                        .is_some_and(|anim| anim.target.is_open())
            })
            .map(PanelRecord::id)
            .collect();
        for id in ids {
            self.request(id, CommitTarget::Closed);
        }
    }

    /// Move a panel to open or closed immediately, without animating.
    pub fn jump_to(&mut self, target: impl Into<PanelRef>, open: bool) -> Result<()> {
        let Some(id) = self.commit_target(target.into())? else {
            return Ok(());
        };
        if !self.is_laid_out() {
            self.defer(id, CommitTarget::from_open(open));
            return Ok(());
        }
        if open {
            for other in self.other_open_panels(id) {
                self.animator.cancel(other);
                self.settle(other, CommitTarget::Closed);
            }
        }
        self.animator.cancel(id);
        self.settle(id, CommitTarget::from_open(open));
        Ok(())
    }

    /// Resolve a target for a commit. `Ok(None)` means "nothing to do".
    fn commit_target(&self, target: PanelRef) -> Result<Option<PanelId>> {
        let Some(index) = self.registry.index_of(target) else {
            return Ok(None);
        };
        if index == 0 {
            return Ok(None);
        }
        let Some(record) = self.registry.iter().nth(index) else {
            return Ok(None);
        };
        if record.edge == Edge::None {
            tracing::warn!("Panel {} has no edge; ignoring open/close", record.id().0);
            return Err(SlideError::NoEdge { panel: record.id() });
        }
        Ok(Some(record.id()))
    }

    fn request_ref(&mut self, target: PanelRef, commit: CommitTarget) -> Result<()> {
        if let Some(id) = self.commit_target(target)? {
            if self.is_laid_out() {
                self.request(id, commit);
            } else {
                self.defer(id, commit);
            }
        }
        Ok(())
    }

    fn defer(&mut self, id: PanelId, target: CommitTarget) {
        tracing::debug!("Deferring {:?} for panel {} until first layout", target, id.0);
        self.pending.retain(|(panel, _)| *panel != id);
        if target.is_open() {
            self.pending.retain(|(_, t)| !t.is_open());
        }
        self.pending.push((id, target));
    }

    /// Start a commit unless the panel is already there or already heading there.
    fn request(&mut self, id: PanelId, target: CommitTarget) {
        let Some(record) = self.registry.by_id(id) else {
            return;
        };
        if let Some(anim) = self.animator.get(id)
            && anim.target == target
        {
            return;
        }
        let settled = record.is_open == target.is_open()
            && record.retraction == target.retraction(record.extent());
        if settled && !self.animator.is_animating(id) {
            return;
        }
        self.commit(id, target);
    }

    /// Animate `id` to `target` from wherever it currently is.
    pub(crate) fn commit(&mut self, id: PanelId, target: CommitTarget) {
        let Some(record) = self.registry.by_id(id) else {
            return;
        };
        let from = record.retraction;
        let extent = record.extent();

        if target.is_open() {
            for other in self.other_open_panels(id) {
                self.request(other, CommitTarget::Closed);
            }
        }

        tracing::debug!(
            "Committing panel {} to {:?} from {:.1}/{:.1}",
            id.0,
            target,
            from,
            extent
        );
        self.animator.start(
            id,
            target,
            from,
            extent,
            self.config.duration,
            self.config.easing,
        );
        if self.config.duration <= 0.0 {
            self.tick(0.0);
        }
    }

    /// Panels other than `id` that are open or on their way open.
    fn other_open_panels(&self, id: PanelId) -> Vec<PanelId> {
        self.registry
            .panels()
            .filter(|r| r.id() != id)
            .filter(|r| {
                r.is_open
                    || self
                        .animator
                        .get(r.id())
                        .is_some_and(|anim| anim.target.is_open())
            })
            .map(PanelRecord::id)
            .collect()
    }

    // -- Animation --

    /// Advance commit animations by `delta_time` seconds.
    ///
    /// Returns true while any animation is still running.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        profile_function!();
        if self.animator.is_empty() {
            return false;
        }
        let frames = self.animator.update(delta_time);
        self.apply_frames(frames);
        !self.animator.is_empty()
    }

    fn apply_frames(&mut self, frames: Vec<AnimationFrame>) {
        for frame in frames {
            self.apply_translation(frame.panel, frame.value);
            if frame.finished
                && let Some(record) = self.registry.by_id_mut(frame.panel)
            {
                record.is_open = frame.target.is_open();
                tracing::debug!(
                    "Panel {} {}",
                    frame.panel.0,
                    if record.is_open { "opened" } else { "closed" }
                );
            }
        }
    }

    // -- Translation --

    /// Run the translation engine for one panel and notify the observer.
    pub(crate) fn apply_translation(&mut self, id: PanelId, requested: f32) {
        profile_function!();
        let baseline = self.baseline;
        let Some((primary, panel)) = self.registry.primary_and_panel_mut(id) else {
            return;
        };
        let translation =
            Translation::compute(panel.edge, panel.mode, panel.extent(), requested, baseline);
        translation.apply(primary.view_mut(), panel.view_mut());
        panel.retraction = translation.retraction;

        self.overlay.update(translation.progress);
        self.notify(id, translation.progress);
    }

    /// Put a panel at rest, open or closed, without animating.
    ///
    /// Closed panels are only moved off-screen so that another panel's effect
    /// on the primary surface is left alone.
    fn settle(&mut self, id: PanelId, target: CommitTarget) {
        let Some(record) = self.registry.by_id_mut(id) else {
            return;
        };
        let retraction = target.retraction(record.extent());
        record.is_open = target.is_open();
        if target.is_open() || record.retraction < record.extent() {
            self.apply_translation(id, retraction);
        } else {
            record.retraction = retraction;
            let offset = translation::panel_offset(record.edge, retraction);
            record.view_mut().set_translation(offset);
        }
    }

    /// Undo a mode's effect on the primary surface.
    fn reset_primary(&mut self, mode: RevealMode) {
        let baseline = self.baseline;
        let Some(primary) = self.registry.primary_mut() else {
            return;
        };
        primary.view_mut().set_translation(Vec2::ZERO);
        if mode == RevealMode::Collapse
            && let Some(size) = baseline
        {
            primary.view_mut().set_layout_size(size);
            primary.view_mut().request_layout();
        }
    }

    /// Screen rectangle of a panel, assuming it is laid out flush with its edge.
    pub fn panel_bounds(&self, target: impl Into<PanelRef>) -> Option<Rect> {
        self.registry.get(target).map(|record| self.bounds_of(record))
    }

    fn bounds_of(&self, record: &PanelRecord) -> Rect {
        let size = record.view().size();
        let origin = match record.edge {
            Edge::Right => Vec2::new(self.bounds.width - size.width, 0.0),
            Edge::Bottom => Vec2::new(0.0, self.bounds.height - size.height),
            _ => Vec2::ZERO,
        };
        Rect::from_origin_size(origin, size).offset(record.view().translation())
    }

    /// Whether a point would land on the visible dim overlay rather than a panel.
    pub fn hits_overlay(&self, point: Vec2) -> bool {
        if !self.overlay.is_visible() {
            return false;
        }
        !self
            .registry
            .panels()
            .filter(|r| r.edge != Edge::None && r.retraction < r.extent())
            .any(|r| self.bounds_of(r).contains(point))
    }
}

impl Default for SlideContainer {
    fn default() -> Self {
        Self::new(SlideConfig::default())
    }
}

impl std::fmt::Debug for SlideContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideContainer")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("panels", &self.registry.len())
            .field("baseline", &self.baseline)
            .field("phase", &self.gesture_phase())
            .finish_non_exhaustive()
    }
}

/// Accessors through a panel's back-reference to its container.
impl PanelHandle {
    pub fn edge(&self, container: &SlideContainer) -> Option<Edge> {
        container.edge(*self)
    }

    pub fn set_edge(&self, container: &mut SlideContainer, edge: Edge) {
        container.set_edge(*self, edge);
    }

    pub fn mode(&self, container: &SlideContainer) -> Option<RevealMode> {
        container.mode(*self)
    }

    pub fn set_mode(&self, container: &mut SlideContainer, mode: RevealMode) {
        container.set_mode(*self, mode);
    }

    pub fn is_open(&self, container: &SlideContainer) -> bool {
        container.is_open(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_view::FixedView;

    fn laid_out(mode: RevealMode) -> (SlideContainer, PanelHandle) {
        let mut container = SlideContainer::new(SlideConfig::default().duration(0.2));
        container.register(FixedView::boxed(800.0, 600.0));
        let left = container.register(FixedView::boxed(300.0, 600.0));
        container.set_edge(left, Edge::Left);
        container.set_mode(left, mode);
        container.on_layout(Size::new(800.0, 600.0));
        (container, left)
    }

    #[test]
    fn test_set_edge_rests_panel_off_screen() {
        let (container, left) = laid_out(RevealMode::None);
        assert_eq!(
            container.view(left).unwrap().translation(),
            Vec2::new(-300.0, 0.0)
        );
        assert_eq!(container.progress(left), Some(0.0));
    }

    #[test]
    fn test_open_sets_flag_only_on_completion() {
        let (mut container, left) = laid_out(RevealMode::None);
        container.open(left).unwrap();
        assert!(!container.is_open(left));
        assert!(container.tick(0.1));
        assert!(!container.is_open(left));
        assert!(!container.tick(0.1));
        assert!(container.is_open(left));
        assert_eq!(container.view(left).unwrap().translation(), Vec2::ZERO);
    }

    #[test]
    fn test_open_without_edge_is_an_error() {
        let mut container = SlideContainer::default();
        container.register(FixedView::boxed(800.0, 600.0));
        let panel = container.register(FixedView::boxed(300.0, 600.0));
        container.on_layout(Size::new(800.0, 600.0));
        assert_eq!(
            container.open(panel),
            Err(SlideError::NoEdge { panel: panel.panel })
        );
    }

    #[test]
    fn test_unknown_targets_are_noops() {
        let (mut container, _) = laid_out(RevealMode::None);
        assert!(container.open(42usize).is_ok());
        assert!(container.close("nope").is_ok());
        container.set_edge(9usize, Edge::Top);
        assert!(container.is_settled());
    }

    #[test]
    fn test_primary_edge_is_ignored() {
        let (mut container, _) = laid_out(RevealMode::None);
        container.set_edge(0usize, Edge::Bottom);
        assert_eq!(container.edge(0usize), Some(Edge::None));
        assert!(container.is_open(0usize));
    }

    #[test]
    fn test_open_before_layout_is_deferred() {
        let mut container = SlideContainer::new(SlideConfig::default().duration(0.0));
        container.register(FixedView::boxed(800.0, 600.0));
        let left = container.register(FixedView::boxed(300.0, 600.0));
        container.set_edge(left, Edge::Left);
        container.open(left).unwrap();
        assert!(!container.is_open(left));

        container.on_layout(Size::new(800.0, 600.0));
        assert!(container.is_open(left));
    }

    #[test]
    fn test_toggle_reverses_direction_mid_flight() {
        let (mut container, left) = laid_out(RevealMode::None);
        container.open(left).unwrap();
        container.tick(0.1);
        container.toggle(left).unwrap();
        while container.tick(0.05) {}
        assert!(!container.is_open(left));
        assert_eq!(container.progress(left), Some(0.0));
    }

    #[test]
    fn test_jump_to_collapse_restores_primary_on_close() {
        let (mut container, left) = laid_out(RevealMode::Collapse);
        container.jump_to(left, true).unwrap();
        assert_eq!(container.view(0usize).unwrap().size(), Size::new(500.0, 600.0));
        container.jump_to(left, false).unwrap();
        assert_eq!(container.view(0usize).unwrap().size(), Size::new(800.0, 600.0));
        assert_eq!(container.view(0usize).unwrap().translation(), Vec2::ZERO);
    }

    #[test]
    fn test_mode_change_while_open_reapplies() {
        let (mut container, left) = laid_out(RevealMode::Collapse);
        container.jump_to(left, true).unwrap();
        container.set_mode(left, RevealMode::Center);
        let primary = container.view(0usize).unwrap();
        assert_eq!(primary.size(), Size::new(800.0, 600.0));
        assert_eq!(primary.translation(), Vec2::new(150.0, 0.0));
    }

    #[test]
    fn test_detach_settles_and_invalidates_baseline() {
        let (mut container, left) = laid_out(RevealMode::None);
        container.open(left).unwrap();
        container.tick(0.05);
        container.on_detached();
        assert!(container.is_open(left));
        assert!(container.is_settled());
        assert_eq!(container.baseline(), None);

        container.on_attached();
        container.on_layout(Size::new(800.0, 600.0));
        assert_eq!(container.baseline(), Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn test_remove_open_panel_restores_primary() {
        let (mut container, left) = laid_out(RevealMode::Absolute);
        container.jump_to(left, true).unwrap();
        let view = container.remove(left).unwrap();
        assert!(view.is_some());
        assert_eq!(container.view(0usize).unwrap().translation(), Vec2::ZERO);
        assert_eq!(container.registry().len(), 1);
    }

    #[test]
    fn test_handle_accessors() {
        let (mut container, left) = laid_out(RevealMode::None);
        left.set_mode(&mut container, RevealMode::Absolute);
        assert_eq!(left.mode(&container), Some(RevealMode::Absolute));
        assert_eq!(left.edge(&container), Some(Edge::Left));
        assert!(!left.is_open(&container));
    }
}
