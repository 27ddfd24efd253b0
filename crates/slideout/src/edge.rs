//! Edge-of-origin and reveal-mode enumerations.
//!
//! Both types come with a total mapping from the integer values used by
//! markup attributes. Unknown values resolve to a documented default instead
//! of failing.

/// Axis a panel travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Container edge a panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edge {
    /// Not attached to any edge. Panels with this edge never move.
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Every edge a panel can actually be attached to.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Map an attribute value to an edge. Unrecognized values become `Left`.
    pub fn from_ordinal(value: i32) -> Self {
        match value {
            0 => Edge::None,
            1 => Edge::Left,
            2 => Edge::Right,
            3 => Edge::Top,
            4 => Edge::Bottom,
            _ => Edge::Left,
        }
    }

    /// Attribute value for this edge.
    pub fn ordinal(self) -> i32 {
        match self {
            Edge::None => 0,
            Edge::Left => 1,
            Edge::Right => 2,
            Edge::Top => 3,
            Edge::Bottom => 4,
        }
    }

    /// The opposite edge. `None` maps to itself.
    pub fn reverse(self) -> Self {
        match self {
            Edge::None => Edge::None,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
        }
    }

    pub fn axis(self) -> Option<Axis> {
        match self {
            Edge::Left | Edge::Right => Some(Axis::Horizontal),
            Edge::Top | Edge::Bottom => Some(Axis::Vertical),
            Edge::None => None,
        }
    }

    /// `true` for `Left` and `Top`, whose panels rest at negative offsets.
    pub fn is_leading(self) -> bool {
        matches!(self, Edge::Left | Edge::Top)
    }

    /// Sign of pointer motion along the axis that reveals a panel on this edge.
    ///
    /// A left panel opens when the pointer moves right (+1), a right panel
    /// when it moves left (-1), and likewise for top and bottom.
    pub fn opening_sign(self) -> f32 {
        match self {
            Edge::Left | Edge::Top => 1.0,
            Edge::Right | Edge::Bottom => -1.0,
            Edge::None => 0.0,
        }
    }
}

/// How the primary surface reacts while a panel is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealMode {
    /// The panel slides over a stationary primary surface.
    #[default]
    None,
    /// The primary surface follows at half speed.
    Center,
    /// The primary surface is pushed by exactly the revealed amount.
    Absolute,
    /// Pushed like `Absolute`, and shrunk so it stays fully visible.
    Collapse,
}

impl RevealMode {
    /// Map an attribute value to a mode. Unrecognized values become `None`.
    pub fn from_ordinal(value: i32) -> Self {
        match value {
            1 => RevealMode::Center,
            2 => RevealMode::Absolute,
            3 => RevealMode::Collapse,
            _ => RevealMode::None,
        }
    }

    pub fn ordinal(self) -> i32 {
        match self {
            RevealMode::None => 0,
            RevealMode::Center => 1,
            RevealMode::Absolute => 2,
            RevealMode::Collapse => 3,
        }
    }
}
