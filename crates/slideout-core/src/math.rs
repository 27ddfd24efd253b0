//! Vector math re-exported from [`glam`].
//!
//! Pointer positions, velocities and view translations are all `Vec2`.
//!
//! ```
//! use slideout_core::math::Vec2;
//!
//! let down = Vec2::new(10.0, 20.0);
//! let now = Vec2::new(42.0, 18.0);
//! assert_eq!(now - down, Vec2::new(32.0, -2.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
