//! Validation errors for the physical parameter set.

use std::error::Error;
use std::fmt;

/// A physical parameter rejected by [`FluidParams::validate`](crate::FluidParams::validate).
///
/// Degenerate parameters are a caller-level configuration error: the kernel
/// sweeps assume a validated parameter set and have no recoverable error
/// states of their own.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// Reynolds number must be finite and non-zero (it divides the
    /// diffusion term).
    InvalidReynolds {
        /// The rejected value.
        value: f64,
    },
    /// Prandtl number must be finite and positive (it scales the thermal
    /// diffusivity and the thermal stability bound).
    InvalidPrandtl {
        /// The rejected value.
        value: f64,
    },
    /// The donor-cell blend factor must lie in `[0, 1]`.
    InvalidUpwind {
        /// The rejected value.
        value: f64,
    },
    /// The time-step safety factor must lie in `(0, 1]`.
    InvalidSafetyFactor {
        /// The rejected value.
        value: f64,
    },
    /// A forcing parameter (gravity component or thermal expansion
    /// coefficient) must be finite.
    NonFiniteForcing {
        /// Which parameter was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReynolds { value } => {
                write!(f, "reynolds number must be finite and non-zero, got {value}")
            }
            Self::InvalidPrandtl { value } => {
                write!(f, "prandtl number must be finite and positive, got {value}")
            }
            Self::InvalidUpwind { value } => {
                write!(f, "upwind blend factor must lie in [0, 1], got {value}")
            }
            Self::InvalidSafetyFactor { value } => {
                write!(f, "safety factor must lie in (0, 1], got {value}")
            }
            Self::NonFiniteForcing { name, value } => {
                write!(f, "forcing parameter '{name}' must be finite, got {value}")
            }
        }
    }
}

impl Error for ParamError {}
