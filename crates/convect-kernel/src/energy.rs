//! Temperature transport: donor-cell advection plus central diffusion.

use crate::fd::second_derivative;
use convect_core::{Axis, FluidParams};
use convect_grid::{Field, GridGeometry};

/// Advance the temperature field one explicit-Euler step.
///
/// Advection uses the same donor-cell blend factor as the momentum sweep;
/// diffusion is a central difference scaled by `1/(re * pr)`. The sweep
/// covers the interior `[1, imax] x [1, jmax]`; the ghost layer belongs to
/// the caller's boundary conditions and is never written.
///
/// The whole old state is snapshot before the first write (Jacobi-style),
/// so every stencil read sees previous-step values regardless of sweep
/// order.
///
/// Unlike the momentum sweep there is no obstacle masking here: temperature
/// values inside obstacles are never consumed by the masked momentum
/// formula, so updating them is harmless.
pub fn advance_temperature(
    geometry: &GridGeometry,
    params: &FluidParams,
    dt: f64,
    u: &Field,
    v: &Field,
    t: &mut Field,
) {
    assert!(
        u.matches(geometry) && v.matches(geometry) && t.matches(geometry),
        "fields not sized for geometry"
    );

    let (dx, dy) = (geometry.dx(), geometry.dy());
    let diffusivity = 1.0 / (params.re * params.pr);
    let prev = t.clone();

    for i in 1..=geometry.imax() {
        for j in 1..=geometry.jmax() {
            let convection_x = (u.get(i, j) * (prev.get(i, j) + prev.get(i + 1, j)) / 2.0
                - u.get(i - 1, j) * (prev.get(i - 1, j) + prev.get(i, j)) / 2.0)
                / dx;
            let donor_x = (u.get(i, j).abs() * (prev.get(i, j) + prev.get(i + 1, j)) / 2.0
                - u.get(i - 1, j).abs() * (prev.get(i - 1, j) + prev.get(i, j)) / 2.0)
                / dx;

            let convection_y = (v.get(i, j) * (prev.get(i, j) + prev.get(i, j + 1)) / 2.0
                - v.get(i, j - 1) * (prev.get(i, j - 1) + prev.get(i, j)) / 2.0)
                / dy;
            let donor_y = (v.get(i, j).abs() * (prev.get(i, j) + prev.get(i, j + 1)) / 2.0
                - v.get(i, j - 1).abs() * (prev.get(i, j - 1) + prev.get(i, j)) / 2.0)
                / dy;

            let diffusion = diffusivity
                * (second_derivative(&prev, i, j, Axis::X, dx)
                    + second_derivative(&prev, i, j, Axis::Y, dy));

            let next = prev.get(i, j)
                + dt * (-convection_x - params.upwind * donor_x - convection_y
                    - params.upwind * donor_y
                    + diffusion);
            t.set(i, j, next);
        }
    }
}
