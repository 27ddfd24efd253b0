//! Commit animations.
//!
//! When a gesture is released, or a panel is opened or closed from code, the
//! panel's retraction (0 = fully open, extent = fully closed) is animated to
//! its target. The container feeds every intermediate value through the
//! translation engine, so the primary surface and the overlay follow along,
//! and flips the discrete open flag only when the animation completes.
//!
//! # Example
//!
//! ```
//! use slideout::animation::{Animation, EasingFunction};
//!
//! let mut anim = Animation::new(300.0, 0.0)
//!     .duration(0.2)
//!     .easing(EasingFunction::Linear);
//!
//! assert!(anim.update(0.1));
//! assert!((anim.value() - 150.0).abs() < 0.01);
//! assert!(!anim.update(0.1));
//! assert_eq!(anim.value(), 0.0);
//! ```

use crate::id::PanelId;

/// Interpolation curves for commit animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingFunction {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic, accelerating from rest.
    EaseIn,
    /// Quadratic, decelerating to rest.
    EaseOut,
    /// Quadratic on both ends.
    EaseInOut,
    /// Cubic deceleration; snappier than `EaseOut`.
    CubicOut,
}

impl EasingFunction {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    Completed,
}

/// A single scalar tween.
#[derive(Debug, Clone)]
pub struct Animation {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl Animation {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            duration: crate::config::DEFAULT_DURATION,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    /// Length in seconds. Negative values are treated as zero.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Interpolated value at the current elapsed time.
    pub fn value(&self) -> f32 {
        if self.state == AnimationState::Completed || self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Advance by `delta_time` seconds.
    ///
    /// Returns false once the end value is reached.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }
        true
    }

    /// Jump to the end value.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
        self.state = AnimationState::Completed;
    }
}

/// Where a commit animation is headed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitTarget {
    Open,
    Closed,
}

impl CommitTarget {
    pub fn from_open(open: bool) -> Self {
        if open {
            CommitTarget::Open
        } else {
            CommitTarget::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == CommitTarget::Open
    }

    /// Retraction value this target settles at for a panel of `extent`.
    pub fn retraction(self, extent: f32) -> f32 {
        match self {
            CommitTarget::Open => 0.0,
            CommitTarget::Closed => extent,
        }
    }
}

/// An in-flight open or close of one panel.
#[derive(Debug, Clone)]
pub struct CommitAnimation {
    pub panel: PanelId,
    pub target: CommitTarget,
    animation: Animation,
}

impl CommitAnimation {
    pub fn value(&self) -> f32 {
        self.animation.value()
    }

    pub fn is_done(&self) -> bool {
        self.animation.state() == AnimationState::Completed
    }
}

/// One step produced by [`CommitAnimator::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub panel: PanelId,
    /// Retraction to apply this frame.
    pub value: f32,
    pub target: CommitTarget,
    /// Set on the frame that completes the animation.
    pub finished: bool,
}

/// Drives every running commit animation of a container.
///
/// At most one animation exists per panel; starting another supersedes it.
/// Frames are reported closings first so the panel that ends up open is
/// always the last to position the primary surface.
#[derive(Debug, Default)]
pub struct CommitAnimator {
    running: Vec<CommitAnimation>,
}

impl CommitAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `panel` from retraction `from` towards `target`.
    ///
    /// Any animation already running for the panel is dropped; the new one
    /// starts from wherever the caller says the panel currently is.
    pub fn start(
        &mut self,
        panel: PanelId,
        target: CommitTarget,
        from: f32,
        extent: f32,
        duration: f32,
        easing: EasingFunction,
    ) {
        self.cancel(panel);
        let animation = Animation::new(from, target.retraction(extent))
            .duration(duration)
            .easing(easing);
        self.running.push(CommitAnimation {
            panel,
            target,
            animation,
        });
    }

    /// Stop the animation for `panel` where it is.
    pub fn cancel(&mut self, panel: PanelId) -> Option<CommitAnimation> {
        let index = self.running.iter().position(|a| a.panel == panel)?;
        Some(self.running.remove(index))
    }

    pub fn get(&self, panel: PanelId) -> Option<&CommitAnimation> {
        self.running.iter().find(|a| a.panel == panel)
    }

    pub fn is_animating(&self, panel: PanelId) -> bool {
        self.get(panel).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    /// Advance every animation and collect the frames to apply.
    ///
    /// Completed animations are removed; their final frame has `finished` set.
    pub fn update(&mut self, delta_time: f32) -> Vec<AnimationFrame> {
        for anim in &mut self.running {
            anim.animation.update(delta_time);
        }
        self.drain_frames()
    }

    /// Complete every animation immediately and return the final frames.
    pub fn finish_all(&mut self) -> Vec<AnimationFrame> {
        for anim in &mut self.running {
            anim.animation.finish();
        }
        self.drain_frames()
    }

    fn drain_frames(&mut self) -> Vec<AnimationFrame> {
        let mut frames: Vec<AnimationFrame> = self
            .running
            .iter()
            .map(|anim| AnimationFrame {
                panel: anim.panel,
                value: anim.value(),
                target: anim.target,
                finished: anim.is_done(),
            })
            .collect();
        // Stable: closings keep their relative order ahead of openings.
        frames.sort_by_key(|frame| frame.target.is_open());
        self.running.retain(|anim| !anim.is_done());
        frames
    }
}
