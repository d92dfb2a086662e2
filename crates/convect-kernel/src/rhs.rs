//! Discrete divergence of the tentative velocity field.

use convect_grid::{Field, GridGeometry, ObstacleMask};

/// Reduce the tentative fields F, G to the right-hand side of the pressure
/// equation.
///
/// For every fluid interior cell:
///
/// ```text
/// rs[i][j] = ((f[i][j] - f[i-1][j]) / dx + (g[i][j] - g[i][j-1]) / dy) / dt
/// ```
///
/// Non-fluid cells are left untouched; the pressure solver must skip them.
pub fn compute_rhs(
    geometry: &GridGeometry,
    dt: f64,
    f: &Field,
    g: &Field,
    mask: &ObstacleMask,
    rs: &mut Field,
) {
    assert!(
        f.matches(geometry) && g.matches(geometry) && rs.matches(geometry),
        "fields not sized for geometry"
    );
    assert!(mask.matches(geometry), "mask not sized for geometry");

    let (dx, dy) = (geometry.dx(), geometry.dy());
    for i in 1..=geometry.imax() {
        for j in 1..=geometry.jmax() {
            if mask.is_fluid(i, j) {
                let div = (f.get(i, j) - f.get(i - 1, j)) / dx
                    + (g.get(i, j) - g.get(i, j - 1)) / dy;
                rs.set(i, j, div / dt);
            }
        }
    }
}
