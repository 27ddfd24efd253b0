//! Dimming overlay.
//!
//! A full-bounds scrim painted above the primary surface and below the
//! panels. Its opacity tracks the reveal progress of the panel being moved.
//! Pointer events that land on it are fed back to the container flagged as
//! overlay touches, which turns a tap into "close the open panel".

/// Overlay state for the host to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimOverlay {
    enabled: bool,
    opacity: f32,
}

impl DimOverlay {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            opacity: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.opacity = 0.0;
        }
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The overlay is present, and therefore absorbs touches, while it has any opacity.
    pub fn is_visible(&self) -> bool {
        self.enabled && self.opacity > 0.0
    }

    pub(crate) fn update(&mut self, progress: f32) {
        self.opacity = if self.enabled {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}

impl Default for DimOverlay {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_tracks_progress() {
        let mut overlay = DimOverlay::new(true);
        assert!(!overlay.is_visible());
        overlay.update(0.4);
        assert_eq!(overlay.opacity(), 0.4);
        assert!(overlay.is_visible());
        overlay.update(0.0);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_disabled_overlay_stays_hidden() {
        let mut overlay = DimOverlay::new(false);
        overlay.update(1.0);
        assert_eq!(overlay.opacity(), 0.0);
        assert!(!overlay.is_visible());

        let mut overlay = DimOverlay::new(true);
        overlay.update(0.7);
        overlay.set_enabled(false);
        assert!(!overlay.is_visible());
    }
}
