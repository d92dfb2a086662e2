//! Finite-difference derivative primitives.
//!
//! The low-level numerical machinery shared by the momentum and energy
//! sweeps: a central second difference for diffusion terms and the
//! donor-cell-blended first differences for the nonlinear convection terms.
//! All functions are pure; an out-of-range index is a caller bug and panics
//! through the field's bounds checks.

use convect_core::Axis;
use convect_grid::Field;

/// Central second difference of `a` at `(i, j)` along `axis` with spacing
/// `h`: `(a[-1] - 2 a[0] + a[+1]) / h^2`.
///
/// Requires one valid neighbour on each side along `axis`.
pub fn second_derivative(a: &Field, i: usize, j: usize, axis: Axis, h: f64) -> f64 {
    let stencil = match axis {
        Axis::X => a.get(i - 1, j) - 2.0 * a.get(i, j) + a.get(i + 1, j),
        Axis::Y => a.get(i, j - 1) - 2.0 * a.get(i, j) + a.get(i, j + 1),
    };
    stencil / (h * h)
}

/// Blended discretization of the convective cross term `d(ab)/d(axis)`.
///
/// The first term is the central-difference flux; the second is the
/// donor-cell correction weighted by the face-averaged advecting velocity's
/// magnitude and scaled by `upwind`. `upwind = 0` is pure central
/// differencing, `upwind = 1` full upwinding.
///
/// The argument order is load-bearing: the two axis stencils average and
/// difference `a` and `b` at different staggering offsets and are not
/// symmetric under exchange. Callers pass the horizontal velocity as `a`
/// and the vertical velocity as `b` for both axes.
pub fn product_derivative(
    a: &Field,
    b: &Field,
    i: usize,
    j: usize,
    axis: Axis,
    h: f64,
    upwind: f64,
) -> f64 {
    match axis {
        Axis::X => {
            let central = (a.get(i, j) + a.get(i, j + 1)) / 2.0 * (b.get(i, j) + b.get(i + 1, j))
                / 2.0
                - (a.get(i - 1, j) + a.get(i - 1, j + 1)) / 2.0 * (b.get(i - 1, j) + b.get(i, j))
                    / 2.0;
            let donor = (a.get(i, j) + a.get(i, j + 1)).abs() / 2.0
                * (b.get(i, j) - b.get(i + 1, j))
                / 2.0
                - (a.get(i - 1, j) + a.get(i - 1, j + 1)).abs() / 2.0
                    * (b.get(i - 1, j) - b.get(i, j))
                    / 2.0;
            central / h + upwind * donor / h
        }
        Axis::Y => {
            let central = (b.get(i, j) + b.get(i + 1, j)) / 2.0 * (a.get(i, j) + a.get(i, j + 1))
                / 2.0
                - (b.get(i, j - 1) + b.get(i + 1, j - 1)) / 2.0 * (a.get(i, j - 1) + a.get(i, j))
                    / 2.0;
            let donor = (b.get(i, j) + b.get(i + 1, j)).abs() / 2.0
                * (a.get(i, j) - a.get(i, j + 1))
                / 2.0
                - (b.get(i, j - 1) + b.get(i + 1, j - 1)).abs() / 2.0
                    * (a.get(i, j - 1) - a.get(i, j))
                    / 2.0;
            central / h + upwind * donor / h
        }
    }
}

/// Blended discretization of the self-convection term `d(a^2)/d(axis)`.
///
/// The same central/donor-cell blend as [`product_derivative`], specialized
/// to the square of a single field.
pub fn square_derivative(a: &Field, i: usize, j: usize, axis: Axis, h: f64, upwind: f64) -> f64 {
    match axis {
        Axis::X => {
            let right = (a.get(i, j) + a.get(i + 1, j)) / 2.0;
            let left = (a.get(i - 1, j) + a.get(i, j)) / 2.0;
            let central = right * right - left * left;
            let donor = (a.get(i, j) + a.get(i + 1, j)).abs() / 2.0
                * (a.get(i, j) - a.get(i + 1, j))
                / 2.0
                - (a.get(i - 1, j) + a.get(i, j)).abs() / 2.0 * (a.get(i - 1, j) - a.get(i, j))
                    / 2.0;
            central / h + upwind * donor / h
        }
        Axis::Y => {
            let top = (a.get(i, j) + a.get(i, j + 1)) / 2.0;
            let bottom = (a.get(i, j - 1) + a.get(i, j)) / 2.0;
            let central = top * top - bottom * bottom;
            let donor = (a.get(i, j) + a.get(i, j + 1)).abs() / 2.0
                * (a.get(i, j) - a.get(i, j + 1))
                / 2.0
                - (a.get(i, j - 1) + a.get(i, j)).abs() / 2.0 * (a.get(i, j - 1) - a.get(i, j))
                    / 2.0;
            central / h + upwind * donor / h
        }
    }
}
