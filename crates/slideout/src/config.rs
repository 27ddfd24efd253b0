//! Container configuration.

use crate::animation::EasingFunction;

/// Default commit animation length in seconds.
pub const DEFAULT_DURATION: f32 = 0.25;

bitflags::bitflags! {
    /// Optional container behaviors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// Drag, fling and tap gestures open and close panels.
        const GESTURES = 0b00000001;
        /// A dimming overlay sits between the primary surface and panels.
        const DIM_OVERLAY = 0b00000010;
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::all()
    }
}

/// Configuration for a [`SlideContainer`](crate::SlideContainer).
///
/// # Example
///
/// ```
/// use slideout::{EasingFunction, Features, SlideConfig};
///
/// let config = SlideConfig::default()
///     .duration_ms(300)
///     .easing(EasingFunction::EaseOut)
///     .features(Features::GESTURES);
/// assert!(!config.dim_overlay_enabled());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlideConfig {
    /// Commit animation length in seconds.
    pub duration: f32,
    pub easing: EasingFunction,
    pub features: Features,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            easing: EasingFunction::Linear,
            features: Features::default(),
        }
    }
}

impl SlideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the animation length in seconds. Negative values clamp to zero.
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    /// Set the animation length from an integer millisecond attribute.
    pub fn duration_ms(self, millis: u32) -> Self {
        self.duration(millis as f32 / 1000.0)
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn gestures(mut self, enabled: bool) -> Self {
        self.features.set(Features::GESTURES, enabled);
        self
    }

    pub fn dim_overlay(mut self, enabled: bool) -> Self {
        self.features.set(Features::DIM_OVERLAY, enabled);
        self
    }

    pub fn gestures_enabled(&self) -> bool {
        self.features.contains(Features::GESTURES)
    }

    pub fn dim_overlay_enabled(&self) -> bool {
        self.features.contains(Features::DIM_OVERLAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlideConfig::default();
        assert_eq!(config.duration, DEFAULT_DURATION);
        assert_eq!(config.easing, EasingFunction::Linear);
        assert!(config.gestures_enabled());
        assert!(config.dim_overlay_enabled());
    }

    #[test]
    fn test_toggles() {
        let config = SlideConfig::new().gestures(false).dim_overlay(false);
        assert!(config.features.is_empty());
        let config = config.dim_overlay(true);
        assert_eq!(config.features, Features::DIM_OVERLAY);
    }

    #[test]
    fn test_duration_ms() {
        let config = SlideConfig::new().duration_ms(200);
        assert!((config.duration - 0.2).abs() < f32::EPSILON);
        assert_eq!(SlideConfig::new().duration(-1.0).duration, 0.0);
    }
}
