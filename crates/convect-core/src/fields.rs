//! Diagnostic naming for the kernel's field arrays.

use std::fmt;

/// Identifies one of the kernel's field arrays in diagnostics.
///
/// Appears in error reporting (e.g. the non-finite scan after a step) so a
/// caller can tell which array diverged without inspecting all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Horizontal velocity, on vertical cell faces.
    U,
    /// Vertical velocity, on horizontal cell faces.
    V,
    /// Pressure, cell-centered.
    P,
    /// Temperature, cell-centered.
    T,
    /// Tentative horizontal velocity.
    F,
    /// Tentative vertical velocity.
    G,
    /// Right-hand side of the pressure equation.
    Rs,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U => write!(f, "u"),
            Self::V => write!(f, "v"),
            Self::P => write!(f, "p"),
            Self::T => write!(f, "t"),
            Self::F => write!(f, "f"),
            Self::G => write!(f, "g"),
            Self::Rs => write!(f, "rs"),
        }
    }
}
