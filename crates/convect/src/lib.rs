//! Convect: a staggered-grid discretization kernel for buoyancy-coupled
//! incompressible 2-D flow.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the convect sub-crates. For most users, adding `convect` as a single
//! dependency is sufficient.
//!
//! The kernel owns the finite-difference heart of a Navier–Stokes solver:
//! the momentum predictor, the pressure-equation right-hand side, the
//! stability-limited step selector, the velocity corrector, and donor-cell
//! temperature transport. The pressure Poisson solve, the outer boundary
//! conditions, and the driver loop are the caller's collaborators.
//!
//! # Quick start
//!
//! ```rust
//! use convect::prelude::*;
//!
//! // A placeholder pressure solve: leave the field flat. A real driver
//! // plugs in its relaxation solver here.
//! struct FlatPressure;
//! impl PressureSolver for FlatPressure {
//!     fn solve(
//!         &mut self,
//!         _geometry: &GridGeometry,
//!         _mask: &ObstacleMask,
//!         _rs: &Field,
//!         _p: &mut Field,
//!     ) -> Result<(), SolveError> {
//!         Ok(())
//!     }
//! }
//!
//! // An 8x8 all-fluid cavity with a hot spot under gravity.
//! let geometry = GridGeometry::new(8, 8, 0.125, 0.125).unwrap();
//! let mask = ObstacleMask::all_fluid(&geometry);
//! let mut state = FieldState::new(geometry, mask).unwrap();
//! state.t.set(4, 4, 1.0);
//!
//! let params = FluidParams {
//!     re: 100.0,
//!     pr: 1.0,
//!     gx: 0.0,
//!     gy: -9.81,
//!     upwind: 0.9,
//!     beta: 2.1e-4,
//!     tau: 0.5,
//! };
//! params.validate().unwrap();
//!
//! let outcome = advance(&mut state, &params, &mut FlatPressure).unwrap();
//! assert!(outcome.timestep.dt > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `convect-core` | Axis/direction tags, parameters, field naming, validation errors |
//! | [`grid`] | `convect-grid` | Grid geometry, field storage, obstacle masking |
//! | [`kernel`] | `convect-kernel` | The five sweeps, step sequencing, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core tags, parameters, and validation errors (`convect-core`).
pub use convect_core as types;

/// Grid geometry, field storage, and obstacle masking (`convect-grid`).
pub use convect_grid as grid;

/// The discretization sweeps and step sequencing (`convect-kernel`).
///
/// The individual sweeps live in [`kernel::fd`], [`kernel::momentum`],
/// [`kernel::rhs`], [`kernel::timestep`], [`kernel::project`], and
/// [`kernel::energy`]; [`kernel::step`] sequences them.
pub use convect_kernel as kernel;

/// Common imports for typical convect usage.
///
/// ```rust
/// use convect::prelude::*;
/// ```
pub mod prelude {
    // Core tags and parameters
    pub use convect_core::{Axis, Direction, FieldName, FluidParams, ParamError};

    // Grid storage
    pub use convect_grid::{CellKind, Field, GridError, GridGeometry, MaskError, ObstacleMask};

    // Kernel entry points
    pub use convect_kernel::{
        advance, FieldState, PressureSolver, SolveError, StepError, StepLimit, StepMetrics,
        StepOutcome, TimeStep,
    };
}
