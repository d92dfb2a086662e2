//! One full kernel step around an external pressure solve.

use crate::energy::advance_temperature;
use crate::error::{SolveError, StepError};
use crate::metrics::StepMetrics;
use crate::momentum::compute_tentative;
use crate::project::apply_pressure_correction;
use crate::rhs::compute_rhs;
use crate::state::FieldState;
use crate::timestep::{stable_step, TimeStep};
use convect_core::{FieldName, FluidParams};
use convect_grid::{Field, GridGeometry, ObstacleMask};
use std::time::Instant;

/// The external solver of the pressure Poisson equation.
///
/// The kernel produces the right-hand side `rs` and consumes the solved
/// pressure; everything in between — iteration scheme, convergence
/// criteria, pressure boundary handling — belongs to the implementor.
/// Obstacle cells carry no meaningful `rs` values and must be skipped.
pub trait PressureSolver {
    /// Solve `laplace(p) = rs` over the fluid cells, updating `p` in place.
    fn solve(
        &mut self,
        geometry: &GridGeometry,
        mask: &ObstacleMask,
        rs: &Field,
        p: &mut Field,
    ) -> Result<(), SolveError>;
}

/// The result of one successfully advanced step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// The stability-limited step size used, with its binding constraint.
    pub timestep: TimeStep,
    /// Per-sweep wall-clock timings.
    pub metrics: StepMetrics,
}

/// Advance the state by one stability-limited step.
///
/// Sequence: step-size selection (from the previous step's velocities),
/// momentum predictor, divergence right-hand side, external pressure solve,
/// velocity correction, temperature transport, and a non-finite scan of
/// U, V, P, T.
///
/// Outer-boundary values are the caller's responsibility: reapply boundary
/// conditions to `u`, `v`, `t` (and `p`, if the solver does not) around
/// each call.
///
/// On [`StepError::NonFinite`] the state holds the diverged values; the
/// driver should abort the run rather than keep stepping.
pub fn advance(
    state: &mut FieldState,
    params: &FluidParams,
    solver: &mut dyn PressureSolver,
) -> Result<StepOutcome, StepError> {
    let start = Instant::now();
    let mut metrics = StepMetrics::default();

    let sweep = Instant::now();
    let timestep = stable_step(&state.geometry, params, &state.u, &state.v);
    metrics
        .sweep_us
        .insert("timestep", sweep.elapsed().as_micros() as u64);
    let dt = timestep.dt;

    let sweep = Instant::now();
    compute_tentative(
        &state.geometry,
        params,
        dt,
        &state.u,
        &state.v,
        &state.t,
        &state.mask,
        &mut state.f,
        &mut state.g,
    );
    metrics
        .sweep_us
        .insert("momentum", sweep.elapsed().as_micros() as u64);

    let sweep = Instant::now();
    compute_rhs(
        &state.geometry,
        dt,
        &state.f,
        &state.g,
        &state.mask,
        &mut state.rs,
    );
    metrics
        .sweep_us
        .insert("rhs", sweep.elapsed().as_micros() as u64);

    let sweep = Instant::now();
    solver
        .solve(&state.geometry, &state.mask, &state.rs, &mut state.p)
        .map_err(|reason| StepError::PressureSolveFailed { reason })?;
    metrics
        .sweep_us
        .insert("pressure_solve", sweep.elapsed().as_micros() as u64);

    let sweep = Instant::now();
    apply_pressure_correction(
        &state.geometry,
        dt,
        &state.f,
        &state.g,
        &state.p,
        &state.mask,
        &mut state.u,
        &mut state.v,
    );
    metrics
        .sweep_us
        .insert("projection", sweep.elapsed().as_micros() as u64);

    let sweep = Instant::now();
    advance_temperature(&state.geometry, params, dt, &state.u, &state.v, &mut state.t);
    metrics
        .sweep_us
        .insert("energy", sweep.elapsed().as_micros() as u64);

    for (field, values) in [
        (FieldName::U, &state.u),
        (FieldName::V, &state.v),
        (FieldName::P, &state.p),
        (FieldName::T, &state.t),
    ] {
        if let Some((i, j)) = values.first_non_finite() {
            return Err(StepError::NonFinite { field, i, j });
        }
    }

    metrics.total_us = start.elapsed().as_micros() as u64;
    Ok(StepOutcome { timestep, metrics })
}
