//! Test fixtures and solver doubles for convect development.
//!
//! Provides geometry/field/mask builders shared by unit tests, integration
//! tests, and benches, plus small [`PressureSolver`] doubles:
//!
//! - [`NoopSolver`] — leaves the pressure field untouched.
//! - [`ConstSolver`] — fills the fluid interior with a constant (use a
//!   non-finite constant to exercise divergence detection).
//! - [`FailingSolver`] — fails deterministically after N calls.
//! - [`JacobiSolver`] — a fixed-iteration Jacobi relaxation, realistic
//!   enough for end-to-end projection tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use convect_grid::{CellKind, Field, GridGeometry, ObstacleMask};
use convect_kernel::{FieldState, PressureSolver, SolveError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Geometry with an `imax x jmax` interior and unit spacing.
pub fn unit_geometry(imax: usize, jmax: usize) -> GridGeometry {
    GridGeometry::new(imax, jmax, 1.0, 1.0).expect("valid test geometry")
}

/// Field with `value(i, j) = f(i, j)` over the whole extended range.
pub fn field_from_fn(geometry: &GridGeometry, f: impl Fn(usize, usize) -> f64) -> Field {
    let mut out = Field::zeros(geometry);
    for i in 0..geometry.nx() {
        for j in 0..geometry.ny() {
            out.set(i, j, f(i, j));
        }
    }
    out
}

/// Deterministic pseudo-random field with values in `[-scale, scale]`.
///
/// Seeded ChaCha8, so the same seed always produces the same field.
pub fn seeded_field(geometry: &GridGeometry, seed: u64, scale: f64) -> Field {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Field::zeros(geometry);
    for i in 0..geometry.nx() {
        for j in 0..geometry.ny() {
            out.set(i, j, (rng.random::<f64>() * 2.0 - 1.0) * scale);
        }
    }
    out
}

/// Mask with an obstacle block over the given inclusive index ranges.
pub fn block_mask(
    geometry: &GridGeometry,
    i_range: RangeInclusive<usize>,
    j_range: RangeInclusive<usize>,
) -> ObstacleMask {
    let mut kinds = vec![CellKind::Fluid; geometry.cell_count()];
    for i in i_range {
        for j in j_range.clone() {
            kinds[i * geometry.ny() + j] = CellKind::Obstacle;
        }
    }
    ObstacleMask::from_kinds(geometry, kinds).expect("kind grid sized for geometry")
}

/// Zero-initialized all-fluid state with unit spacing.
pub fn fluid_state(imax: usize, jmax: usize) -> FieldState {
    let geometry = unit_geometry(imax, jmax);
    let mask = ObstacleMask::all_fluid(&geometry);
    FieldState::new(geometry, mask).expect("mask built from the same geometry")
}

/// A pressure solver that leaves the pressure field untouched.
///
/// With a zero initial pressure the projection step then copies F, G into
/// U, V — convenient for tests that target the kernel sweeps alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSolver;

impl PressureSolver for NoopSolver {
    fn solve(
        &mut self,
        _geometry: &GridGeometry,
        _mask: &ObstacleMask,
        _rs: &Field,
        _p: &mut Field,
    ) -> Result<(), SolveError> {
        Ok(())
    }
}

/// A pressure solver that fills every fluid interior cell with a constant.
///
/// Pass a non-finite constant to exercise the post-step divergence scan.
#[derive(Clone, Copy, Debug)]
pub struct ConstSolver {
    pub value: f64,
}

impl PressureSolver for ConstSolver {
    fn solve(
        &mut self,
        geometry: &GridGeometry,
        mask: &ObstacleMask,
        _rs: &Field,
        p: &mut Field,
    ) -> Result<(), SolveError> {
        for i in 1..=geometry.imax() {
            for j in 1..=geometry.jmax() {
                if mask.is_fluid(i, j) {
                    p.set(i, j, self.value);
                }
            }
        }
        Ok(())
    }
}

/// A pressure solver that succeeds `succeed_count` times, then fails.
#[derive(Debug)]
pub struct FailingSolver {
    pub succeed_count: usize,
    calls: usize,
}

impl FailingSolver {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }
}

impl PressureSolver for FailingSolver {
    fn solve(
        &mut self,
        _geometry: &GridGeometry,
        _mask: &ObstacleMask,
        _rs: &Field,
        _p: &mut Field,
    ) -> Result<(), SolveError> {
        let n = self.calls;
        self.calls += 1;
        if n >= self.succeed_count {
            Err(SolveError::new(format!("configured to fail on call {n}")))
        } else {
            Ok(())
        }
    }
}

/// A fixed-iteration Jacobi relaxation of the pressure equation.
///
/// Not a production solver — no convergence criterion, plain Neumann ghost
/// handling — but accurate enough that repeated projection visibly reduces
/// the discrete divergence in end-to-end tests.
#[derive(Clone, Copy, Debug)]
pub struct JacobiSolver {
    pub iterations: usize,
}

impl PressureSolver for JacobiSolver {
    fn solve(
        &mut self,
        geometry: &GridGeometry,
        mask: &ObstacleMask,
        rs: &Field,
        p: &mut Field,
    ) -> Result<(), SolveError> {
        let (imax, jmax) = (geometry.imax(), geometry.jmax());
        let inv_dx2 = 1.0 / (geometry.dx() * geometry.dx());
        let inv_dy2 = 1.0 / (geometry.dy() * geometry.dy());
        let denom = 2.0 * (inv_dx2 + inv_dy2);

        for _ in 0..self.iterations {
            // Neumann ghost values: zero normal pressure gradient.
            for j in 1..=jmax {
                p.set(0, j, p.get(1, j));
                p.set(imax + 1, j, p.get(imax, j));
            }
            for i in 1..=imax {
                p.set(i, 0, p.get(i, 1));
                p.set(i, jmax + 1, p.get(i, jmax));
            }

            let prev = p.clone();
            for i in 1..=imax {
                for j in 1..=jmax {
                    if mask.is_fluid(i, j) {
                        let neighbours = (prev.get(i + 1, j) + prev.get(i - 1, j)) * inv_dx2
                            + (prev.get(i, j + 1) + prev.get(i, j - 1)) * inv_dy2;
                        p.set(i, j, (neighbours - rs.get(i, j)) / denom);
                    }
                }
            }
        }
        Ok(())
    }
}
