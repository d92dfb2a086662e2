//! Per-cell fluid/obstacle classification.

use crate::error::{GridError, MaskError};
use crate::geometry::GridGeometry;
use convect_core::Direction;

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// The cell belongs to the fluid domain.
    Fluid,
    /// The cell is inside a solid obstacle.
    Obstacle,
}

/// Immutable per-cell geometry metadata for obstacle-aware sweeps.
///
/// For every cell the mask stores its own [`CellKind`] and the precomputed
/// kind of each of its four neighbours — a tagged-enum table in place of a
/// bit-encoded flag word. The kernel consumes it through exactly
/// four predicates: [`is_obstacle`](Self::is_obstacle),
/// [`is_fluid`](Self::is_fluid),
/// [`neighbour_is_obstacle`](Self::neighbour_is_obstacle), and
/// [`neighbour_is_fluid`](Self::neighbour_is_fluid).
///
/// At the array edge a missing neighbour clamps to the cell's own kind.
/// Interior sweeps never consult those entries (they stop one cell short of
/// the edge in the queried direction), so the clamp only keeps the table
/// total.
///
/// The mask is built once at grid setup and never mutated during stepping.
/// [`from_kinds`](Self::from_kinds) derives the neighbour table and is
/// consistent by construction; a mask assembled from externally produced
/// parts should be checked with [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleMask {
    nx: usize,
    ny: usize,
    kinds: Vec<CellKind>,
    neighbours: Vec<[CellKind; 4]>,
}

impl ObstacleMask {
    /// Build a mask with every cell fluid.
    pub fn all_fluid(geometry: &GridGeometry) -> Self {
        let kinds = vec![CellKind::Fluid; geometry.cell_count()];
        // Cannot fail: the kind grid is sized from the same geometry.
        Self::from_kinds(geometry, kinds).unwrap_or_else(|_| unreachable!())
    }

    /// Build a mask from a cell-kind grid in `i`-major order, deriving the
    /// neighbour table.
    ///
    /// Returns [`GridError::ShapeMismatch`] if `kinds` is not sized for
    /// `geometry`.
    pub fn from_kinds(geometry: &GridGeometry, kinds: Vec<CellKind>) -> Result<Self, GridError> {
        let (nx, ny) = (geometry.nx(), geometry.ny());
        if kinds.len() != nx * ny {
            return Err(GridError::ShapeMismatch {
                expected: (nx, ny),
                got: (kinds.len() / ny.max(1), ny),
            });
        }
        let mut neighbours = vec![[CellKind::Fluid; 4]; kinds.len()];
        for i in 0..nx {
            for j in 0..ny {
                let mut entry = [CellKind::Fluid; 4];
                for dir in Direction::ALL {
                    let (ni, nj) = clamped_neighbour(i, j, nx, ny, dir);
                    entry[dir.index()] = kinds[ni * ny + nj];
                }
                neighbours[i * ny + j] = entry;
            }
        }
        Ok(Self {
            nx,
            ny,
            kinds,
            neighbours,
        })
    }

    /// Assemble a mask from an externally produced kind grid and neighbour
    /// table, both in `i`-major order.
    ///
    /// Shape errors are rejected here; semantic consistency between the two
    /// tables is the producer's claim and should be checked with
    /// [`validate`](Self::validate).
    pub fn from_parts(
        geometry: &GridGeometry,
        kinds: Vec<CellKind>,
        neighbours: Vec<[CellKind; 4]>,
    ) -> Result<Self, GridError> {
        let (nx, ny) = (geometry.nx(), geometry.ny());
        for len in [kinds.len(), neighbours.len()] {
            if len != nx * ny {
                return Err(GridError::ShapeMismatch {
                    expected: (nx, ny),
                    got: (len / ny.max(1), ny),
                });
            }
        }
        Ok(Self {
            nx,
            ny,
            kinds,
            neighbours,
        })
    }

    /// Extent along x, ghost layer included.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Extent along y, ghost layer included.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Whether this mask has the extents of `geometry`.
    pub fn matches(&self, geometry: &GridGeometry) -> bool {
        self.nx == geometry.nx() && self.ny == geometry.ny()
    }

    fn idx(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.nx && j < self.ny,
            "mask index ({i}, {j}) out of bounds for {}x{}",
            self.nx,
            self.ny
        );
        i * self.ny + j
    }

    /// The kind of cell `(i, j)`.
    pub fn kind(&self, i: usize, j: usize) -> CellKind {
        self.kinds[self.idx(i, j)]
    }

    /// Whether cell `(i, j)` is inside an obstacle.
    pub fn is_obstacle(&self, i: usize, j: usize) -> bool {
        self.kind(i, j) == CellKind::Obstacle
    }

    /// Whether cell `(i, j)` belongs to the fluid domain.
    pub fn is_fluid(&self, i: usize, j: usize) -> bool {
        self.kind(i, j) == CellKind::Fluid
    }

    /// The recorded kind of the neighbour of `(i, j)` in `direction`.
    pub fn neighbour_kind(&self, i: usize, j: usize, direction: Direction) -> CellKind {
        self.neighbours[self.idx(i, j)][direction.index()]
    }

    /// Whether the neighbour of `(i, j)` in `direction` is an obstacle.
    pub fn neighbour_is_obstacle(&self, i: usize, j: usize, direction: Direction) -> bool {
        self.neighbour_kind(i, j, direction) == CellKind::Obstacle
    }

    /// Whether the neighbour of `(i, j)` in `direction` is fluid.
    pub fn neighbour_is_fluid(&self, i: usize, j: usize, direction: Direction) -> bool {
        self.neighbour_kind(i, j, direction) == CellKind::Fluid
    }

    /// Check the consistency invariant: every recorded neighbour kind must
    /// equal the actual kind of the adjacent cell (edge entries clamp to the
    /// cell's own kind).
    ///
    /// Returns the first disagreement found.
    pub fn validate(&self) -> Result<(), MaskError> {
        for i in 0..self.nx {
            for j in 0..self.ny {
                for dir in Direction::ALL {
                    let (ni, nj) = clamped_neighbour(i, j, self.nx, self.ny, dir);
                    if self.neighbours[i * self.ny + j][dir.index()] != self.kinds[ni * self.ny + nj]
                    {
                        return Err(MaskError::InconsistentNeighbour {
                            i,
                            j,
                            direction: dir,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Resolve the neighbour of `(i, j)` in `dir`, clamping at the array edge.
fn clamped_neighbour(i: usize, j: usize, nx: usize, ny: usize, dir: Direction) -> (usize, usize) {
    let (di, dj) = dir.offset();
    let ni = (i as i64 + di).clamp(0, nx as i64 - 1) as usize;
    let nj = (j as i64 + dj).clamp(0, ny as i64 - 1) as usize;
    (ni, nj)
}
