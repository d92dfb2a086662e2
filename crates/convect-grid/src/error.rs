//! Error types for grid construction and mask validation.

use convect_core::Direction;
use std::error::Error;
use std::fmt;

/// Errors from grid geometry or field construction.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The interior must contain at least one cell on each axis.
    EmptyGrid,
    /// A spacing parameter must be finite and positive.
    InvalidSpacing {
        /// Which spacing was rejected (`"dx"` or `"dy"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A buffer or mask was sized for a different geometry.
    ShapeMismatch {
        /// Expected `(nx, ny)` extents including the ghost layer.
        expected: (usize, usize),
        /// Actual extents of the offending buffer.
        got: (usize, usize),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid interior must be at least 1x1"),
            Self::InvalidSpacing { name, value } => {
                write!(f, "spacing '{name}' must be finite and positive, got {value}")
            }
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, got.0, got.1
                )
            }
        }
    }
}

impl Error for GridError {}

/// Errors from obstacle-mask consistency validation.
#[derive(Clone, Debug, PartialEq)]
pub enum MaskError {
    /// A cell's recorded neighbour kind disagrees with the actual kind of
    /// the adjacent cell.
    InconsistentNeighbour {
        /// Horizontal index of the offending cell.
        i: usize,
        /// Vertical index of the offending cell.
        j: usize,
        /// The direction whose recorded kind is wrong.
        direction: Direction,
    },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentNeighbour { i, j, direction } => {
                write!(
                    f,
                    "mask cell ({i}, {j}) records a {direction} neighbour kind \
                     that disagrees with the adjacent cell"
                )
            }
        }
    }
}

impl Error for MaskError {}
