//! Error types for container operations.
//!
//! Most misuse is tolerated silently (unknown identifiers are no-ops). The
//! variants here cover the few requests that cannot be honored without
//! corrupting the registry.

use std::fmt;

use crate::id::PanelId;

/// Errors that can occur when driving a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideError {
    /// An open or close was requested for a panel that has no edge assigned.
    NoEdge {
        /// The panel without an edge.
        panel: PanelId,
    },

    /// The primary surface cannot be removed while panels depend on it.
    PrimaryRemoval {
        /// Number of auxiliary panels still registered.
        remaining: usize,
    },
}

impl fmt::Display for SlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideError::NoEdge { panel } => {
                write!(
                    f,
                    "Panel {} has no edge assigned; call set_edge before opening or closing it",
                    panel.0
                )
            }
            SlideError::PrimaryRemoval { remaining } => {
                write!(
                    f,
                    "Cannot remove the primary surface while {} panel(s) are registered",
                    remaining
                )
            }
        }
    }
}

impl std::error::Error for SlideError {}

/// Result alias for container operations.
pub type Result<T> = std::result::Result<T, SlideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_panel() {
        let err = SlideError::NoEdge { panel: PanelId(3) };
        assert!(err.to_string().contains("Panel 3"));
    }

    #[test]
    fn test_display_primary_removal() {
        let err = SlideError::PrimaryRemoval { remaining: 2 };
        assert!(err.to_string().contains("2 panel(s)"));
    }
}
