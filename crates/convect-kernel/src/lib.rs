//! Finite-difference sweeps of the convect staggered-grid flow kernel.
//!
//! Five cooperating operations over one [`FieldState`]:
//!
//! 1. [`momentum::compute_tentative`] — the momentum predictor producing
//!    the tentative velocities F, G (diffusion, donor-cell convection,
//!    Boussinesq buoyancy, obstacle masking).
//! 2. [`rhs::compute_rhs`] — the discrete divergence of F, G forming the
//!    pressure-equation right-hand side.
//! 3. [`timestep::stable_step`] — the stability-limited step-size selector.
//! 4. [`project::apply_pressure_correction`] — the velocity corrector
//!    coupling the solved pressure back into U, V.
//! 5. [`energy::advance_temperature`] — explicit donor-cell temperature
//!    transport.
//!
//! [`step::advance`] sequences all five around an external
//! [`PressureSolver`]. The shared derivative stencils live in [`fd`].
//!
//! The sweeps are synchronous single-pass numeric computations with no
//! recoverable error states; degenerate configuration is rejected by
//! [`convect_core::FluidParams::validate`] and the grid constructors before
//! the first call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod energy;
pub mod fd;
pub mod momentum;
pub mod project;
pub mod rhs;
pub mod step;
pub mod timestep;

mod error;
mod metrics;
mod state;

pub use error::{SolveError, StepError};
pub use metrics::StepMetrics;
pub use state::FieldState;
pub use step::{advance, PressureSolver, StepOutcome};
pub use timestep::{StepLimit, TimeStep};
