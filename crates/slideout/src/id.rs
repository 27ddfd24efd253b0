//! Identifiers used to address panels.
//!
//! A panel can be reached three ways: by the [`PanelHandle`] returned when it
//! was registered, by its position in registration order, or by a stable
//! [`PanelKey`] chosen by the host. [`PanelRef`] unifies the three so every
//! container method accepts any of them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Registration handle of a panel within one container. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u32);

/// Identity of a container instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

impl ContainerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Handle returned by registration.
///
/// Carries the owning container's identity; a handle presented to a different
/// container matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelHandle {
    pub container: ContainerId,
    pub panel: PanelId,
}

/// A stable, host-chosen identifier for a panel.
///
/// ```
/// use slideout::PanelKey;
///
/// assert_eq!(PanelKey::new("nav_drawer"), PanelKey::from("nav_drawer"));
/// assert_ne!(PanelKey::new("nav_drawer"), PanelKey::new("sheet"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelKey(u64);

impl PanelKey {
    /// Create a key from a string. Uses FNV-1a so keys are stable across runs.
    pub fn new(key: &str) -> Self {
        Self(Self::hash_str(key))
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    fn hash_str(s: &str) -> u64 {
        const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const FNV_PRIME: u64 = 0x100000001b3;

        s.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ *byte as u64).wrapping_mul(FNV_PRIME)
        })
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PanelKey(0x{:016x})", self.0)
    }
}

impl From<&str> for PanelKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PanelKey {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

/// Any of the ways a panel can be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRef {
    Handle(PanelHandle),
    /// Position in registration order; 0 is the primary surface.
    Index(usize),
    Key(PanelKey),
}

impl From<PanelHandle> for PanelRef {
    fn from(handle: PanelHandle) -> Self {
        PanelRef::Handle(handle)
    }
}

impl From<&PanelHandle> for PanelRef {
    fn from(handle: &PanelHandle) -> Self {
        PanelRef::Handle(*handle)
    }
}

impl From<usize> for PanelRef {
    fn from(index: usize) -> Self {
        PanelRef::Index(index)
    }
}

impl From<PanelKey> for PanelRef {
    fn from(key: PanelKey) -> Self {
        PanelRef::Key(key)
    }
}

impl From<&str> for PanelRef {
    fn from(key: &str) -> Self {
        PanelRef::Key(PanelKey::new(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_stable() {
        // FNV-1a of the empty string is the offset basis.
        assert_eq!(PanelKey::new("").as_u64(), 0xcbf29ce484222325);
        assert_eq!(PanelKey::new("a").as_u64(), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_container_ids_are_unique() {
        let a = ContainerId::next();
        let b = ContainerId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_panel_ref_conversions() {
        assert_eq!(PanelRef::from(2usize), PanelRef::Index(2));
        assert_eq!(
            PanelRef::from("sheet"),
            PanelRef::Key(PanelKey::new("sheet"))
        );
    }
}
