//! Edge-anchored sliding panels.
//!
//! A [`SlideContainer`] hosts one primary surface and any number of auxiliary
//! panels, each attached to one screen edge. Panels are revealed by dragging,
//! flinging or programmatic calls, and the primary surface can follow them in
//! one of several [`RevealMode`]s (parallax, push, or resize).
//!
//! The container does not draw. The host hands it [`View`] trait objects,
//! feeds it pointer events and animation ticks, and paints the translations
//! the container writes back.
//!
//! ```
//! use slideout::{Edge, RevealMode, SlideConfig, SlideContainer};
//! # use slideout::View;
//! # fn host(primary: Box<dyn View>, menu: Box<dyn View>) -> slideout::Result<()> {
//! let mut container = SlideContainer::new(SlideConfig::default().duration_ms(200));
//! container.register(primary);
//! let menu = container.register_with_key(menu, "menu");
//! container.set_edge(menu, Edge::Left);
//! container.set_mode(menu, RevealMode::Center);
//!
//! container.on_progress(|_, _, _, progress| {
//!     tracing::trace!("menu at {progress:.2}");
//! });
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod arbiter;
pub mod config;
pub mod container;
pub mod edge;
pub mod error;
pub mod gesture;
pub mod id;
pub mod overlay;
pub mod registry;
pub mod translation;
pub mod view;

pub use animation::{CommitTarget, EasingFunction};
pub use config::{Features, SlideConfig};
pub use container::{ProgressObserver, SlideContainer};
pub use edge::{Axis, Edge, RevealMode};
pub use error::{Result, SlideError};
pub use gesture::{GesturePhase, ReleaseRegime};
pub use id::{ContainerId, PanelHandle, PanelId, PanelKey, PanelRef};
pub use overlay::DimOverlay;
pub use registry::{PanelRecord, PanelRegistry};
pub use view::View;

pub use slideout_core::geometry::{Rect, Size};
pub use slideout_core::math::Vec2;
pub use slideout_input::{HandleStatus, PointerEvent, PointerPhase};
