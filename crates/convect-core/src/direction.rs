//! Neighbour directions of a grid cell.

use std::fmt;

/// The four neighbour directions of a cell on the staggered grid.
///
/// Used by the obstacle mask's neighbour predicates. `Right`/`Left` move
/// along the horizontal axis (index `i`), `Top`/`Bottom` along the
/// vertical axis (index `j`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Neighbour at `(i + 1, j)`.
    Right,
    /// Neighbour at `(i - 1, j)`.
    Left,
    /// Neighbour at `(i, j + 1)`.
    Top,
    /// Neighbour at `(i, j - 1)`.
    Bottom,
}

impl Direction {
    /// All four directions, in a fixed order matching [`Direction::index`].
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Stable index into per-cell neighbour tables.
    pub fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Top => 2,
            Self::Bottom => 3,
        }
    }

    /// The `(di, dj)` offset of the neighbouring cell.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Top => (0, 1),
            Self::Bottom => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}
