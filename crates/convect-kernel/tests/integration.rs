//! End-to-end scenarios over the full kernel sequence.
//!
//! Exercises the five sweeps both individually composed and through
//! `advance()` with solver doubles, covering the kernel's externally
//! observable contract: Neumann edge copies, obstacle pinning, zero
//! divergence for uniform flow, and divergence suppression by projection.

use convect_core::FluidParams;
use convect_kernel::{advance, momentum, rhs, StepError, StepLimit};
use convect_test_utils::{
    block_mask, field_from_fn, fluid_state, unit_geometry, FailingSolver, JacobiSolver,
    NoopSolver,
};

fn quiet_params() -> FluidParams {
    FluidParams {
        re: 100.0,
        pr: 1.0,
        gx: 0.0,
        gy: 0.0,
        upwind: 0.0,
        beta: 0.0,
        tau: 0.5,
    }
}

/// Largest interior divergence magnitude of a velocity pair.
fn max_divergence(state: &convect_kernel::FieldState) -> f64 {
    let geo = &state.geometry;
    let mut worst: f64 = 0.0;
    for i in 1..=geo.imax() {
        for j in 1..=geo.jmax() {
            let div = (state.u.get(i, j) - state.u.get(i - 1, j)) / geo.dx()
                + (state.v.get(i, j) - state.v.get(i, j - 1)) / geo.dy();
            worst = worst.max(div.abs());
        }
    }
    worst
}

// ── Momentum/divergence composition ──────────────────────────────────

#[test]
fn uniform_unit_flow_is_a_momentum_fixed_point() {
    // 1x1 interior domain, uniform u = v = 1, no forcing: every spatial
    // difference vanishes and the tentative fields equal the velocities
    // exactly.
    let mut state = fluid_state(2, 2);
    state.u.fill(1.0);
    state.v.fill(1.0);

    momentum::compute_tentative(
        &state.geometry,
        &quiet_params(),
        0.01,
        &state.u,
        &state.v,
        &state.t,
        &state.mask,
        &mut state.f,
        &mut state.g,
    );

    assert_eq!(state.f.get(1, 1), 1.0, "F must equal U exactly");
    assert_eq!(state.g.get(1, 1), 1.0, "G must equal V exactly");
}

#[test]
fn tentative_fields_of_uniform_flow_have_zero_divergence() {
    // Uniform velocity with no forcing yields spatially constant F, G, and
    // a constant tentative field has zero discrete divergence.
    let mut state = fluid_state(6, 5);
    state.u.fill(2.0);
    state.v.fill(-0.75);
    state.rs.fill(f64::NAN);
    let dt = 0.02;

    momentum::compute_tentative(
        &state.geometry,
        &quiet_params(),
        dt,
        &state.u,
        &state.v,
        &state.t,
        &state.mask,
        &mut state.f,
        &mut state.g,
    );
    rhs::compute_rhs(
        &state.geometry,
        dt,
        &state.f,
        &state.g,
        &state.mask,
        &mut state.rs,
    );

    for i in 1..=state.geometry.imax() {
        for j in 1..=state.geometry.jmax() {
            assert_eq!(
                state.rs.get(i, j),
                0.0,
                "constant tentative flow must have zero divergence at ({i}, {j})"
            );
        }
    }
}

#[test]
fn quiescent_state_produces_zero_rhs() {
    let mut state = fluid_state(4, 4);
    let dt = 0.05;

    momentum::compute_tentative(
        &state.geometry,
        &quiet_params(),
        dt,
        &state.u,
        &state.v,
        &state.t,
        &state.mask,
        &mut state.f,
        &mut state.g,
    );
    rhs::compute_rhs(
        &state.geometry,
        dt,
        &state.f,
        &state.g,
        &state.mask,
        &mut state.rs,
    );

    assert_eq!(state.f.max_abs(), 0.0);
    assert_eq!(state.g.max_abs(), 0.0);
    assert_eq!(state.rs.max_abs(), 0.0);
}

// ── Full step sequencing ─────────────────────────────────────────────

#[test]
fn advance_keeps_a_quiescent_state_still() {
    let mut state = fluid_state(5, 5);
    let outcome = advance(&mut state, &quiet_params(), &mut NoopSolver).unwrap();

    assert_eq!(state.u.max_abs(), 0.0, "no forcing must produce no flow");
    assert_eq!(state.v.max_abs(), 0.0);
    assert_eq!(state.t.max_abs(), 0.0);
    assert_eq!(outcome.timestep.limit, StepLimit::DiffusiveMomentum);
    assert!(outcome.timestep.dt > 0.0, "quiescent dt must stay finite");

    let sweeps: Vec<&str> = outcome.metrics.sweep_us.keys().copied().collect();
    assert_eq!(
        sweeps,
        [
            "timestep",
            "momentum",
            "rhs",
            "pressure_solve",
            "projection",
            "energy"
        ],
        "metrics must record the sweeps in execution order"
    );
}

#[test]
fn buoyant_plume_projection_suppresses_divergence() {
    // A hot spot under gravity produces a divergent tentative field; after
    // the Jacobi-projected correction the interior divergence must be at
    // solver-residual level.
    let mut state = fluid_state(6, 6);
    state.t.set(3, 3, 1.0);
    let params = FluidParams {
        re: 2.0,
        pr: 1.0,
        gx: 0.0,
        gy: -1.0,
        upwind: 0.5,
        beta: 0.5,
        tau: 0.2,
    };

    let outcome = advance(&mut state, &params, &mut JacobiSolver { iterations: 400 }).unwrap();

    assert!(
        state.v.max_abs() > 0.0,
        "buoyancy must set the fluid in motion"
    );
    assert!(
        max_divergence(&state) < 1e-8,
        "projection must suppress divergence, got {}",
        max_divergence(&state)
    );
    assert!(outcome.timestep.dt > 0.0);
}

#[test]
fn solver_failure_aborts_the_step_before_correction() {
    let mut state = fluid_state(4, 4);
    state.u.fill(1.0);
    let err = advance(&mut state, &quiet_params(), &mut FailingSolver::new(0)).unwrap_err();

    match &err {
        StepError::PressureSolveFailed { reason } => {
            assert!(reason.reason.contains("call 0"), "got: {}", reason.reason);
        }
        other => panic!("expected PressureSolveFailed, got {other:?}"),
    }
    // The error chains to the solver failure.
    assert!(std::error::Error::source(&err).is_some());
    // Velocities were never corrected.
    assert_eq!(state.u.get(2, 2), 1.0);
}

#[test]
fn failing_solver_succeeds_until_its_threshold() {
    let mut state = fluid_state(3, 3);
    let mut solver = FailingSolver::new(2);
    assert!(advance(&mut state, &quiet_params(), &mut solver).is_ok());
    assert!(advance(&mut state, &quiet_params(), &mut solver).is_ok());
    assert!(advance(&mut state, &quiet_params(), &mut solver).is_err());
}

// ── Obstacle handling through the full step ──────────────────────────

#[test]
fn obstacle_faces_keep_their_velocities_through_a_step() {
    let geometry = unit_geometry(6, 6);
    let mask = block_mask(&geometry, 3..=4, 3..=4);
    let mut state = convect_kernel::FieldState::new(geometry, mask).unwrap();
    state.u = field_from_fn(&geometry, |i, j| ((i + 2 * j) as f64) * 0.01);
    state.v = field_from_fn(&geometry, |i, j| ((3 * i + j) as f64) * 0.01);
    let pinned_u = state.u.get(3, 3);
    let pinned_v = state.v.get(4, 4);

    // Pressure stays flat, so every correction writes F/G values; obstacle
    // faces must still carry their starting velocities, which the momentum
    // sweep copied into F/G and the corrector skipped.
    advance(&mut state, &quiet_params(), &mut NoopSolver).unwrap();

    assert_eq!(state.u.get(3, 3), pinned_u, "obstacle U face must not move");
    assert_eq!(state.v.get(4, 4), pinned_v, "obstacle V face must not move");
}
