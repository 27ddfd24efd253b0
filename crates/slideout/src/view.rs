//! The platform contract.
//!
//! The container never measures or paints anything itself. The host toolkit
//! hands it views whose sizes are already resolved, and the container only
//! moves them (paint-time translation), resizes the primary surface in
//! collapse mode, and offers pointer events to views that are themselves
//! containers.

use std::any::Any;

use slideout_core::geometry::Size;
use slideout_core::math::Vec2;
use slideout_input::{HandleStatus, PointerEvent};

use crate::id::{ContainerId, PanelId};

/// A child hosted by a [`SlideContainer`](crate::SlideContainer).
pub trait View: Any {
    /// Resolved width and height from the last layout pass.
    fn size(&self) -> Size<f32>;

    /// Current paint-time offset.
    fn translation(&self) -> Vec2;

    fn set_translation(&mut self, translation: Vec2);

    /// Override the laid-out size. Only used on the primary surface.
    fn set_layout_size(&mut self, size: Size<f32>);

    /// Ask the host to lay this view out again.
    fn request_layout(&mut self);

    /// Whether this view runs its own gesture handling and should be offered
    /// pointer events before the container claims them.
    fn is_container(&self) -> bool {
        false
    }

    /// Offer a pointer event to a nested container.
    fn dispatch_pointer(&mut self, event: &PointerEvent) -> HandleStatus {
        let _ = event;
        HandleStatus::ignored()
    }

    /// Called once at registration with the owning container and this view's id.
    fn attached_to(&mut self, container: ContainerId, panel: PanelId) {
        let _ = (container, panel);
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
pub(crate) mod test_view {
    use super::*;

    /// Minimal view for unit tests inside this crate.
    #[derive(Debug, Default)]
    pub struct FixedView {
        pub size: Size<f32>,
        pub translation: Vec2,
        pub layout_requests: usize,
    }

    impl FixedView {
        pub fn boxed(width: f32, height: f32) -> Box<dyn View> {
            Box::new(Self {
                size: Size::new(width, height),
                ..Default::default()
            })
        }
    }

    impl View for FixedView {
        fn size(&self) -> Size<f32> {
            self.size
        }

        fn translation(&self) -> Vec2 {
            self.translation
        }

        fn set_translation(&mut self, translation: Vec2) {
            self.translation = translation;
        }

        fn set_layout_size(&mut self, size: Size<f32>) {
            self.size = size;
        }

        fn request_layout(&mut self) {
            self.layout_requests += 1;
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }
}
