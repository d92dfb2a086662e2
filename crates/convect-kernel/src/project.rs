//! Velocity correction: the projection step.

use convect_core::Direction;
use convect_grid::{Field, GridGeometry, ObstacleMask};

/// Apply the pressure-gradient correction to the tentative fields,
/// producing the next velocity field.
///
/// Over fluid cells with a fluid RIGHT neighbour:
///
/// ```text
/// u[i][j] = f[i][j] - dt/dx * (p[i+1][j] - p[i][j])
/// ```
///
/// and symmetrically for V over fluid-TOP interfaces with `dy`. Every other
/// cell keeps its previous value — obstacle boundary velocities are set by
/// the caller's boundary handling, not here. This enforces approximate
/// incompressibility once the pressure solve has consumed the divergence
/// right-hand side.
pub fn apply_pressure_correction(
    geometry: &GridGeometry,
    dt: f64,
    f: &Field,
    g: &Field,
    p: &Field,
    mask: &ObstacleMask,
    u: &mut Field,
    v: &mut Field,
) {
    assert!(
        f.matches(geometry) && g.matches(geometry) && p.matches(geometry),
        "fields not sized for geometry"
    );
    assert!(
        u.matches(geometry) && v.matches(geometry),
        "output fields not sized for geometry"
    );
    assert!(mask.matches(geometry), "mask not sized for geometry");

    let (imax, jmax) = (geometry.imax(), geometry.jmax());
    let (dx, dy) = (geometry.dx(), geometry.dy());

    for i in 1..imax {
        for j in 1..=jmax {
            if mask.is_fluid(i, j) && mask.neighbour_is_fluid(i, j, Direction::Right) {
                u.set(i, j, f.get(i, j) - dt / dx * (p.get(i + 1, j) - p.get(i, j)));
            }
        }
    }

    for i in 1..=imax {
        for j in 1..jmax {
            if mask.is_fluid(i, j) && mask.neighbour_is_fluid(i, j, Direction::Top) {
                v.set(i, j, g.get(i, j) - dt / dy * (p.get(i, j + 1) - p.get(i, j)));
            }
        }
    }
}
