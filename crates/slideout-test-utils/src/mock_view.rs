//! Recording implementation of the view contract.

use std::any::Any;

use slideout::{Axis, ContainerId, HandleStatus, PanelId, PointerEvent, PointerPhase, Size, Vec2, View};

/// Something the container did to a [`MockView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCall {
    SetTranslation(Vec2),
    SetLayoutSize(Size<f32>),
    RequestLayout,
    Pointer(PointerPhase),
}

/// When a mock nested container claims a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimPolicy {
    /// A leaf view; never offered events.
    #[default]
    Leaf,
    /// A nested container that never claims.
    Never,
    /// Claims every move.
    Always,
    /// Claims the stream on pointer-down, like a pressed button.
    Press,
    /// Claims moves that travel mostly along `Axis`, like a scroll view.
    Axis(Axis),
}

/// A [`View`] with a fixed size that records every call made on it.
#[derive(Debug)]
pub struct MockView {
    pub name: String,
    pub size: Size<f32>,
    pub translation: Vec2,
    pub claim: ClaimPolicy,
    pub calls: Vec<ViewCall>,
    pub attached: Option<(ContainerId, PanelId)>,
    down: Option<Vec2>,
}

impl MockView {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            size: Size::new(width, height),
            translation: Vec2::ZERO,
            claim: ClaimPolicy::Leaf,
            calls: Vec::new(),
            attached: None,
            down: None,
        }
    }

    pub fn boxed(name: impl Into<String>, width: f32, height: f32) -> Box<dyn View> {
        Box::new(Self::new(name, width, height))
    }

    /// Make this view a nested container with the given claim policy.
    pub fn nested(mut self, claim: ClaimPolicy) -> Self {
        self.claim = claim;
        self
    }

    pub fn into_boxed(self) -> Box<dyn View> {
        Box::new(self)
    }

    /// Pointer phases this view has been offered, in order.
    pub fn pointer_phases(&self) -> Vec<PointerPhase> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::Pointer(phase) => Some(*phase),
                _ => None,
            })
            .collect()
    }

    pub fn layout_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ViewCall::RequestLayout))
            .count()
    }

    fn claims(&self, position: Vec2) -> bool {
        let delta = self.down.map_or(Vec2::ZERO, |down| position - down);
        match self.claim {
            ClaimPolicy::Leaf | ClaimPolicy::Never => false,
            ClaimPolicy::Always | ClaimPolicy::Press => true,
            ClaimPolicy::Axis(Axis::Horizontal) => delta.x.abs() > delta.y.abs(),
            ClaimPolicy::Axis(Axis::Vertical) => delta.y.abs() > delta.x.abs(),
        }
    }
}

impl View for MockView {
    fn size(&self) -> Size<f32> {
        self.size
    }

    fn translation(&self) -> Vec2 {
        self.translation
    }

    fn set_translation(&mut self, translation: Vec2) {
        self.translation = translation;
        self.calls.push(ViewCall::SetTranslation(translation));
    }

    fn set_layout_size(&mut self, size: Size<f32>) {
        self.size = size;
        self.calls.push(ViewCall::SetLayoutSize(size));
    }

    fn request_layout(&mut self) {
        self.calls.push(ViewCall::RequestLayout);
    }

    fn is_container(&self) -> bool {
        self.claim != ClaimPolicy::Leaf
    }

    fn dispatch_pointer(&mut self, event: &PointerEvent) -> HandleStatus {
        self.calls.push(ViewCall::Pointer(event.phase));
        match event.phase {
            PointerPhase::Down => {
                self.down = Some(event.position);
                if self.claim == ClaimPolicy::Press {
                    HandleStatus::consumed()
                } else {
                    HandleStatus::ignored()
                }
            }
            PointerPhase::Move if self.claims(event.position) => HandleStatus::consumed(),
            PointerPhase::Move => HandleStatus::ignored(),
            PointerPhase::Up | PointerPhase::Cancel => {
                self.down = None;
                HandleStatus::ignored()
            }
        }
    }

    fn attached_to(&mut self, container: ContainerId, panel: PanelId) {
        self.attached = Some((container, panel));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
