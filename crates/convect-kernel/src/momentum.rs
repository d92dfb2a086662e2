//! Momentum predictor: the tentative-velocity sweep.

use crate::fd::{product_derivative, second_derivative, square_derivative};
use convect_core::{Axis, Direction, FluidParams};
use convect_grid::{Field, GridGeometry, ObstacleMask};

/// Compute the tentative velocity fields F and G from the discretized
/// momentum equations.
///
/// Reads U, V, T and writes F over `i in [1, imax-1], j in [1, jmax]` and G
/// over `i in [1, imax], j in [1, jmax-1]`, plus the Neumann boundary
/// copies on the domain edges (F from U on the left/right edges, G from V
/// on the bottom/top edges — zero pressure gradient across the outer
/// boundary).
///
/// Face values are only meaningful between two fluid cells: an edge whose
/// cell is an obstacle, or whose facing neighbour (RIGHT for F, TOP for G)
/// is one, copies the raw velocity instead of applying the momentum
/// formula. Fluid-fluid edges get
///
/// ```text
/// F = u + dt * ( (d2u/dx2 + d2u/dy2)/re - d(u^2)/dx - d(uv)/dy + (1 - beta*T)*gx )
/// G = v + dt * ( (d2v/dx2 + d2v/dy2)/re - d(uv)/dx - d(v^2)/dy + (1 - beta*T)*gy )
/// ```
///
/// with the donor-cell-blended convection stencils of [`crate::fd`].
///
/// The sweep reads only previous-step values: F and G never alias U, V, or
/// T, so no double buffering is needed here.
pub fn compute_tentative(
    geometry: &GridGeometry,
    params: &FluidParams,
    dt: f64,
    u: &Field,
    v: &Field,
    t: &Field,
    mask: &ObstacleMask,
    f: &mut Field,
    g: &mut Field,
) {
    for (name, field) in [("u", u), ("v", v), ("t", t)] {
        assert!(field.matches(geometry), "field '{name}' not sized for geometry");
    }
    assert!(f.matches(geometry) && g.matches(geometry), "output fields not sized for geometry");
    assert!(mask.matches(geometry), "mask not sized for geometry");

    let (imax, jmax) = (geometry.imax(), geometry.jmax());

    // Neumann boundary values: zero pressure gradient across the outer
    // edges makes the tentative field equal the raw velocity there.
    for j in 1..=jmax {
        f.set(0, j, u.get(0, j));
        f.set(imax, j, u.get(imax, j));
    }
    for i in 1..=imax {
        g.set(i, 0, v.get(i, 0));
        g.set(i, jmax, v.get(i, jmax));
    }

    for i in 1..imax {
        for j in 1..=jmax {
            if mask.is_obstacle(i, j) || mask.neighbour_is_obstacle(i, j, Direction::Right) {
                // No momentum update across a solid interface.
                f.set(i, j, u.get(i, j));
            } else {
                f.set(i, j, tentative_u(geometry, params, dt, u, v, t, i, j));
            }
        }
    }

    for i in 1..=imax {
        for j in 1..jmax {
            if mask.is_obstacle(i, j) || mask.neighbour_is_obstacle(i, j, Direction::Top) {
                g.set(i, j, v.get(i, j));
            } else {
                g.set(i, j, tentative_v(geometry, params, dt, u, v, t, i, j));
            }
        }
    }
}

/// The momentum formula for one F face.
fn tentative_u(
    geometry: &GridGeometry,
    params: &FluidParams,
    dt: f64,
    u: &Field,
    v: &Field,
    t: &Field,
    i: usize,
    j: usize,
) -> f64 {
    let (dx, dy) = (geometry.dx(), geometry.dy());
    let diffusion = (second_derivative(u, i, j, Axis::X, dx)
        + second_derivative(u, i, j, Axis::Y, dy))
        / params.re;
    let convection = square_derivative(u, i, j, Axis::X, dx, params.upwind)
        + product_derivative(u, v, i, j, Axis::Y, dy, params.upwind);
    let buoyancy = (1.0 - params.beta * t.get(i, j)) * params.gx;
    u.get(i, j) + dt * (diffusion - convection + buoyancy)
}

/// The momentum formula for one G face.
fn tentative_v(
    geometry: &GridGeometry,
    params: &FluidParams,
    dt: f64,
    u: &Field,
    v: &Field,
    t: &Field,
    i: usize,
    j: usize,
) -> f64 {
    let (dx, dy) = (geometry.dx(), geometry.dy());
    let diffusion = (second_derivative(v, i, j, Axis::X, dx)
        + second_derivative(v, i, j, Axis::Y, dy))
        / params.re;
    let convection = product_derivative(u, v, i, j, Axis::X, dx, params.upwind)
        + square_derivative(v, i, j, Axis::Y, dy, params.upwind);
    let buoyancy = (1.0 - params.beta * t.get(i, j)) * params.gy;
    v.get(i, j) + dt * (diffusion - convection + buoyancy)
}
