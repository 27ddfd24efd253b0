//! Translation engine.
//!
//! Every panel position is expressed as a *retraction*: the distance along
//! the panel's axis between where it is and where it would be fully revealed.
//! A retraction of 0 is fully open, a retraction equal to the panel's extent
//! is fully hidden. From one retraction value the engine derives the panel's
//! own offset, the primary surface's co-motion for the panel's reveal mode,
//! and the normalized progress that drives the overlay and the observer.

use slideout_core::geometry::Size;
use slideout_core::math::Vec2;

use crate::edge::{Edge, RevealMode};
use crate::view::View;

/// Normalized reveal progress: 1 when fully open, 0 when hidden or unmeasured.
pub fn progress(extent: f32, retraction: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    ((extent - retraction) / extent).clamp(0.0, 1.0)
}

/// Offset of a panel on `edge` at the given retraction. Only the edge's axis is nonzero.
pub fn panel_offset(edge: Edge, retraction: f32) -> Vec2 {
    match edge {
        Edge::Left => Vec2::new(-retraction, 0.0),
        Edge::Right => Vec2::new(retraction, 0.0),
        Edge::Top => Vec2::new(0.0, -retraction),
        Edge::Bottom => Vec2::new(0.0, retraction),
        Edge::None => Vec2::ZERO,
    }
}

/// Result of translating one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    /// Requested retraction clamped to `[0, extent]`.
    pub retraction: f32,
    pub panel_offset: Vec2,
    /// New primary-surface offset, or `None` when the mode leaves it alone.
    pub primary_offset: Option<Vec2>,
    /// New primary-surface size in collapse mode.
    pub primary_size: Option<Size<f32>>,
    pub progress: f32,
}

impl Translation {
    /// Compute the transforms for a panel on `edge` with `extent` along its axis.
    ///
    /// `baseline` is the primary surface's size captured at first layout; it
    /// is the reference for collapse resizing, so repeated calls with the
    /// same retraction always produce the same size.
    pub fn compute(
        edge: Edge,
        mode: RevealMode,
        extent: f32,
        requested: f32,
        baseline: Option<Size<f32>>,
    ) -> Self {
        let extent = extent.max(0.0);
        let requested = if requested.is_nan() { extent } else { requested };
        let retraction = requested.clamp(0.0, extent);
        let emerged = extent - retraction;
        let progress = progress(extent, retraction);

        // Leading edges push the primary surface forward, trailing edges back.
        let direction = if edge.is_leading() { 1.0 } else { -1.0 };
        let along = |amount: f32| match edge {
            Edge::Left | Edge::Right => Vec2::new(amount, 0.0),
            Edge::Top | Edge::Bottom => Vec2::new(0.0, amount),
            Edge::None => Vec2::ZERO,
        };

        let (primary_offset, primary_size) = match (edge, mode) {
            (Edge::None, _) | (_, RevealMode::None) => (None, None),
            (_, RevealMode::Center) => (Some(along(direction * emerged / 2.0)), None),
            (_, RevealMode::Absolute) => (Some(along(direction * emerged)), None),
            (_, RevealMode::Collapse) => {
                let size = baseline.map(|base| match edge {
                    Edge::Left | Edge::Right => {
                        Size::new((base.width - emerged).max(0.0), base.height)
                    }
                    _ => Size::new(base.width, (base.height - emerged).max(0.0)),
                });
                (Some(along(direction * emerged)), size)
            }
        };

        Self {
            retraction,
            panel_offset: panel_offset(edge, retraction),
            primary_offset,
            primary_size,
            progress,
        }
    }

    /// Write the computed transforms to the views.
    pub fn apply(&self, primary: &mut dyn View, panel: &mut dyn View) {
        panel.set_translation(self.panel_offset);
        if let Some(offset) = self.primary_offset {
            primary.set_translation(offset);
        }
        if let Some(size) = self.primary_size {
            primary.set_layout_size(size);
            primary.request_layout();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_view::FixedView;

    const BASELINE: Option<Size<f32>> = Some(Size::new(800.0, 600.0));

    #[test]
    fn test_progress_boundaries() {
        assert_eq!(progress(300.0, 0.0), 1.0);
        assert_eq!(progress(300.0, 300.0), 0.0);
        assert_eq!(progress(300.0, 150.0), 0.5);
        assert_eq!(progress(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut last = f32::INFINITY;
        for step in 0..=30 {
            let p = progress(300.0, step as f32 * 10.0);
            assert!(p <= last);
            last = p;
        }
    }

    #[test]
    fn test_requested_offset_is_clamped() {
        let t = Translation::compute(Edge::Left, RevealMode::None, 300.0, -40.0, BASELINE);
        assert_eq!(t.retraction, 0.0);
        let t = Translation::compute(Edge::Left, RevealMode::None, 300.0, 900.0, BASELINE);
        assert_eq!(t.retraction, 300.0);
        let t = Translation::compute(Edge::Left, RevealMode::None, 300.0, f32::NAN, BASELINE);
        assert_eq!(t.retraction, 300.0);
    }

    #[test]
    fn test_panel_offset_per_edge() {
        assert_eq!(panel_offset(Edge::Left, 120.0), Vec2::new(-120.0, 0.0));
        assert_eq!(panel_offset(Edge::Right, 120.0), Vec2::new(120.0, 0.0));
        assert_eq!(panel_offset(Edge::Top, 120.0), Vec2::new(0.0, -120.0));
        assert_eq!(panel_offset(Edge::Bottom, 120.0), Vec2::new(0.0, 120.0));
    }

    #[test]
    fn test_mode_none_leaves_primary() {
        let t = Translation::compute(Edge::Left, RevealMode::None, 300.0, 150.0, BASELINE);
        assert_eq!(t.primary_offset, None);
        assert_eq!(t.primary_size, None);
    }

    #[test]
    fn test_absolute_left_half_open() {
        let t = Translation::compute(Edge::Left, RevealMode::Absolute, 300.0, 150.0, BASELINE);
        assert_eq!(t.panel_offset, Vec2::new(-150.0, 0.0));
        assert_eq!(t.progress, 0.5);
        assert_eq!(t.primary_offset, Some(Vec2::new(150.0, 0.0)));
    }

    #[test]
    fn test_absolute_trailing_edges_push_backwards() {
        let t = Translation::compute(Edge::Right, RevealMode::Absolute, 300.0, 100.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(-200.0, 0.0)));
        let t = Translation::compute(Edge::Bottom, RevealMode::Absolute, 200.0, 200.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_center_moves_half() {
        let t = Translation::compute(Edge::Top, RevealMode::Center, 200.0, 0.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(0.0, 100.0)));
        let t = Translation::compute(Edge::Right, RevealMode::Center, 300.0, 0.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(-150.0, 0.0)));
    }

    #[test]
    fn test_collapse_resizes_from_baseline() {
        let t = Translation::compute(Edge::Left, RevealMode::Collapse, 300.0, 150.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(150.0, 0.0)));
        assert_eq!(t.primary_size, Some(Size::new(650.0, 600.0)));

        let t = Translation::compute(Edge::Bottom, RevealMode::Collapse, 200.0, 50.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(0.0, -150.0)));
        assert_eq!(t.primary_size, Some(Size::new(800.0, 450.0)));
    }

    #[test]
    fn test_collapse_offset_matches_absolute() {
        for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
            let absolute = Translation::compute(edge, RevealMode::Absolute, 200.0, 0.0, BASELINE);
            let collapse = Translation::compute(edge, RevealMode::Collapse, 200.0, 0.0, BASELINE);
            assert_eq!(collapse.primary_offset, absolute.primary_offset);
        }
        let t = Translation::compute(Edge::Right, RevealMode::Collapse, 200.0, 0.0, BASELINE);
        assert_eq!(t.primary_offset, Some(Vec2::new(-200.0, 0.0)));
        assert_eq!(t.primary_size, Some(Size::new(600.0, 600.0)));
    }

    #[test]
    fn test_collapse_without_baseline_skips_resize() {
        let t = Translation::compute(Edge::Left, RevealMode::Collapse, 300.0, 150.0, None);
        assert_eq!(t.primary_size, None);
    }

    #[test]
    fn test_collapse_apply_is_idempotent() {
        let mut primary = FixedView::boxed(800.0, 600.0);
        let mut panel = FixedView::boxed(300.0, 600.0);
        let t = Translation::compute(Edge::Left, RevealMode::Collapse, 300.0, 100.0, BASELINE);

        t.apply(primary.as_mut(), panel.as_mut());
        let first = primary.size();
        t.apply(primary.as_mut(), panel.as_mut());
        assert_eq!(primary.size(), first);
        assert_eq!(first, Size::new(600.0, 600.0));
        assert_eq!(panel.translation(), Vec2::new(-100.0, 0.0));
    }

    #[test]
    fn test_zero_extent_does_not_divide() {
        let t = Translation::compute(Edge::Left, RevealMode::Absolute, 0.0, 50.0, BASELINE);
        assert_eq!(t.progress, 0.0);
        assert_eq!(t.retraction, 0.0);
        assert!(t.primary_offset.unwrap().x.is_finite());
    }
}
