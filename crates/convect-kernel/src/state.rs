//! The field bundle a driver owns across a run.

use convect_grid::{Field, GridError, GridGeometry, ObstacleMask};

/// All field arrays of one simulation, allocated once for a geometry.
///
/// The driver owns the state for the whole run: it sets initial and
/// boundary values on `u`, `v`, `p`, `t` directly and hands the state to
/// [`crate::step::advance`] (or to the individual sweeps) each step. The
/// kernel mutates interior values in place; `f`, `g`, and `rs` are
/// transient and fully recomputed every step.
///
/// `geometry` and `mask` are public for split-borrow access but are
/// geometry metadata: they must not be resized or swapped after
/// construction (every sweep asserts the shapes still agree).
#[derive(Clone, Debug)]
pub struct FieldState {
    /// Grid dimensions and spacing.
    pub geometry: GridGeometry,
    /// Obstacle classification, immutable during stepping.
    pub mask: ObstacleMask,
    /// Horizontal velocity, on vertical cell faces.
    pub u: Field,
    /// Vertical velocity, on horizontal cell faces.
    pub v: Field,
    /// Pressure, cell-centered; written by the external pressure solver.
    pub p: Field,
    /// Temperature, cell-centered.
    pub t: Field,
    /// Tentative horizontal velocity (transient).
    pub f: Field,
    /// Tentative vertical velocity (transient).
    pub g: Field,
    /// Pressure-equation right-hand side (transient).
    pub rs: Field,
}

impl FieldState {
    /// Allocate a zero-initialized state for `geometry` with the given
    /// obstacle mask.
    ///
    /// Returns [`GridError::ShapeMismatch`] if the mask was built for a
    /// different geometry.
    pub fn new(geometry: GridGeometry, mask: ObstacleMask) -> Result<Self, GridError> {
        if !mask.matches(&geometry) {
            return Err(GridError::ShapeMismatch {
                expected: (geometry.nx(), geometry.ny()),
                got: (mask.nx(), mask.ny()),
            });
        }
        Ok(Self {
            u: Field::zeros(&geometry),
            v: Field::zeros(&geometry),
            p: Field::zeros(&geometry),
            t: Field::zeros(&geometry),
            f: Field::zeros(&geometry),
            g: Field::zeros(&geometry),
            rs: Field::zeros(&geometry),
            geometry,
            mask,
        })
    }
}
