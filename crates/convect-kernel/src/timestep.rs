//! Stability-limited time-step selection.

use convect_core::FluidParams;
use convect_grid::{Field, GridGeometry};
use smallvec::SmallVec;

/// Which stability constraint produced the selected step size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepLimit {
    /// Explicit momentum diffusion: `re/2 / (1/dx^2 + 1/dy^2)`.
    DiffusiveMomentum,
    /// Explicit thermal diffusion: `re*pr/2 / (1/dx^2 + 1/dy^2)`.
    DiffusiveThermal,
    /// Horizontal CFL bound: `dx / max|u|`.
    AdvectiveX,
    /// Vertical CFL bound: `dy / max|v|`.
    AdvectiveY,
}

/// A stability-limited step size together with the constraint that bound it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeStep {
    /// The selected step size, safety factor already applied.
    pub dt: f64,
    /// The tightest constraint.
    pub limit: StepLimit,
}

/// Select the largest stable time step for the current velocity field.
///
/// Scans U and V over the full extended array for their velocity maxima,
/// gathers the diffusive and advective stability bounds, takes the tightest,
/// and scales it by the safety factor `tau`.
///
/// Two diffusive candidates enter the minimum: the momentum bound and the
/// thermal bound. They coincide at `pr = 1`; the thermal one is tighter for
/// `pr < 1`, the momentum one for `pr > 1`, so carrying both keeps the step
/// stable for either regime.
///
/// A velocity component whose maximum is zero imposes no advective
/// constraint and contributes no candidate, so a fully quiescent field
/// (e.g. at initialization) yields a finite, diffusion-limited step rather
/// than a division by zero.
pub fn stable_step(geometry: &GridGeometry, params: &FluidParams, u: &Field, v: &Field) -> TimeStep {
    assert!(
        u.matches(geometry) && v.matches(geometry),
        "fields not sized for geometry"
    );

    let (dx, dy) = (geometry.dx(), geometry.dy());
    let u_max = u.max_abs();
    let v_max = v.max_abs();

    let inv_h2 = 1.0 / (dx * dx) + 1.0 / (dy * dy);
    // The stability magnitude is sign-independent; physical Reynolds
    // numbers are positive.
    let re = params.re.abs();

    let mut candidates: SmallVec<[(StepLimit, f64); 4]> = SmallVec::new();
    candidates.push((StepLimit::DiffusiveMomentum, re / 2.0 / inv_h2));
    candidates.push((StepLimit::DiffusiveThermal, re * params.pr / 2.0 / inv_h2));
    if u_max > 0.0 {
        candidates.push((StepLimit::AdvectiveX, dx / u_max));
    }
    if v_max > 0.0 {
        candidates.push((StepLimit::AdvectiveY, dy / v_max));
    }

    // First entry wins ties, so pr = 1 reports the momentum bound.
    let mut tightest = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.1 < tightest.1 {
            tightest = candidate;
        }
    }

    TimeStep {
        dt: params.tau * tightest.1,
        limit: tightest.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geo(dx: f64, dy: f64) -> GridGeometry {
        GridGeometry::new(8, 8, dx, dy).unwrap()
    }

    fn params(re: f64, pr: f64, tau: f64) -> FluidParams {
        FluidParams {
            re,
            pr,
            gx: 0.0,
            gy: 0.0,
            upwind: 0.5,
            beta: 0.0,
            tau,
        }
    }

    fn velocity(g: &GridGeometry, peak: f64) -> Field {
        let mut f = Field::zeros(g);
        f.set(3, 3, peak);
        f
    }

    // ── Quiescent guard ─────────────────────────────────────────

    #[test]
    fn quiescent_field_is_diffusion_limited_and_finite() {
        let g = geo(0.1, 0.1);
        let u = Field::zeros(&g);
        let v = Field::zeros(&g);
        let step = stable_step(&g, &params(100.0, 1.0, 0.5), &u, &v);

        assert!(step.dt.is_finite(), "zero velocities must not divide by zero");
        assert!(step.dt > 0.0);
        assert_eq!(step.limit, StepLimit::DiffusiveMomentum);
        // tau * re/2 / (1/dx^2 + 1/dy^2) = 0.5 * 50 / 200
        assert!((step.dt - 0.125).abs() < 1e-12);
    }

    #[test]
    fn single_zero_component_still_guarded() {
        let g = geo(1.0, 1.0);
        let u = velocity(&g, 1e6);
        let v = Field::zeros(&g);
        let step = stable_step(&g, &params(100.0, 1.0, 1.0), &u, &v);

        assert!(step.dt.is_finite());
        assert_eq!(step.limit, StepLimit::AdvectiveX);
        assert!((step.dt - 1e-6).abs() < 1e-18);
    }

    // ── Constraint selection ────────────────────────────────────

    #[test]
    fn fast_flow_is_cfl_limited() {
        let g = geo(0.5, 0.25);
        let u = velocity(&g, 10.0);
        let v = velocity(&g, 10.0);
        let step = stable_step(&g, &params(1000.0, 1.0, 1.0), &u, &v);

        // dy/v_max = 0.025 beats dx/u_max = 0.05 and both diffusive bounds.
        assert_eq!(step.limit, StepLimit::AdvectiveY);
        assert!((step.dt - 0.025).abs() < 1e-12);
    }

    #[test]
    fn small_prandtl_tightens_the_diffusive_bound() {
        let g = geo(0.1, 0.1);
        let u = Field::zeros(&g);
        let v = Field::zeros(&g);

        let thermal = stable_step(&g, &params(100.0, 0.1, 1.0), &u, &v);
        assert_eq!(thermal.limit, StepLimit::DiffusiveThermal);

        let momentum = stable_step(&g, &params(100.0, 7.0, 1.0), &u, &v);
        assert_eq!(momentum.limit, StepLimit::DiffusiveMomentum);
        // Large Prandtl must not loosen the bound past the momentum limit.
        assert!(momentum.dt <= thermal.dt * 10.0 + 1e-12);
    }

    #[test]
    fn negative_reynolds_uses_stability_magnitude() {
        let g = geo(0.1, 0.1);
        let u = Field::zeros(&g);
        let v = Field::zeros(&g);
        let pos = stable_step(&g, &params(100.0, 1.0, 0.5), &u, &v);
        let neg = stable_step(&g, &params(-100.0, 1.0, 0.5), &u, &v);
        assert_eq!(pos.dt, neg.dt);
        assert!(neg.dt > 0.0);
    }

    // ── Scaling properties ──────────────────────────────────────

    proptest! {
        #[test]
        fn monotone_non_increasing_in_velocity(
            u_a in 0.0f64..100.0,
            u_b in 0.0f64..100.0,
            v_peak in 0.0f64..100.0,
        ) {
            let g = geo(0.2, 0.2);
            let (lo, hi) = if u_a <= u_b { (u_a, u_b) } else { (u_b, u_a) };
            let v = velocity(&g, v_peak);
            let p = params(500.0, 1.0, 0.8);

            let slow = stable_step(&g, &p, &velocity(&g, lo), &v);
            let fast = stable_step(&g, &p, &velocity(&g, hi), &v);
            prop_assert!(
                fast.dt <= slow.dt + 1e-15,
                "larger velocities must not enlarge the step: {} vs {}",
                fast.dt, slow.dt
            );
        }

        #[test]
        fn linear_in_safety_factor(
            tau in 0.01f64..=0.5,
            u_peak in 0.0f64..50.0,
        ) {
            let g = geo(0.2, 0.2);
            let v = Field::zeros(&g);
            let u = velocity(&g, u_peak);

            let single = stable_step(&g, &params(200.0, 1.0, tau), &u, &v);
            let double = stable_step(&g, &params(200.0, 1.0, 2.0 * tau), &u, &v);
            prop_assert!(
                (double.dt - 2.0 * single.dt).abs() < 1e-12 * double.dt.max(1.0),
                "doubling tau must double the step"
            );
            prop_assert_eq!(single.limit, double.limit);
        }
    }
}
