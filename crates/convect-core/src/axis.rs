//! Spatial axis tags for the derivative primitives.

use std::fmt;

/// Axis along which a finite difference is taken.
///
/// Passed explicitly at each call site; the derivative primitives select
/// their stencil by matching on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (index `i`, spacing `dx`).
    X,
    /// Vertical axis (index `j`, spacing `dy`).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}
