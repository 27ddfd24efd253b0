//! Profiling scopes based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing, so call
//! sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __noop_profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __noop_profile_scope {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__noop_profile_function as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__noop_profile_scope as profile_scope;

/// Turn scope collection on or off.
#[inline]
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);
    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per host frame, before ticking the container.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
