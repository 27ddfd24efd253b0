//! Slideout Core
//!
//! Shared utilities for the slideout crates: collections, math, geometry,
//! logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
