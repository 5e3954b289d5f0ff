use std::fmt;
use std::ops::Add;

/// Unique identifier for one placed item instance within a session.
///
/// Identities are minted only by the owning session; the grid itself never
/// assigns them. The value is opaque to everything except persistence, which
/// stores it verbatim so saved grids restore with stable identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid coordinate expressed in cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative offset of one occupied cell inside a rotation state, measured
/// from the anchor at (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellOffset {
    pub dx: i32,
    pub dy: i32,
}

impl CellOffset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Returns this offset turned 90 degrees clockwise about the anchor.
    pub const fn rotated_cw(self) -> Self {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }
}

impl Add<CellOffset> for Cell {
    type Output = Cell;

    fn add(self, rhs: CellOffset) -> Cell {
        Cell::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}
