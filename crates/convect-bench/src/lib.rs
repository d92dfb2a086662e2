//! Benchmark profiles for the convect kernel.
//!
//! Provides pre-built states for benchmarking and examples:
//!
//! - [`reference_state`]: 100x100 interior (10K cells), all fluid, seeded
//!   velocity and temperature noise.
//! - [`obstacle_state`]: same extent with a centered solid block, for
//!   mask-branch costs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use convect_core::FluidParams;
use convect_grid::GridGeometry;
use convect_kernel::FieldState;
use convect_test_utils::{block_mask, seeded_field};

/// Interior extent of the reference profiles.
pub const REFERENCE_EXTENT: usize = 100;

/// Parameter set used by the reference profiles: moderate Reynolds number,
/// water-like Prandtl, gravity along -y, donor-cell-dominant blending.
pub fn reference_params() -> FluidParams {
    FluidParams {
        re: 1000.0,
        pr: 7.0,
        gx: 0.0,
        gy: -9.81,
        upwind: 0.9,
        beta: 2.1e-4,
        tau: 0.5,
    }
}

/// All-fluid 100x100 state with seeded velocity and temperature noise.
pub fn reference_state(seed: u64) -> FieldState {
    let geometry = GridGeometry::new(REFERENCE_EXTENT, REFERENCE_EXTENT, 0.01, 0.01)
        .expect("valid reference geometry");
    let mask = convect_grid::ObstacleMask::all_fluid(&geometry);
    let mut state = FieldState::new(geometry, mask).expect("matching mask");
    state.u = seeded_field(&geometry, seed, 0.1);
    state.v = seeded_field(&geometry, seed.wrapping_add(1), 0.1);
    state.t = seeded_field(&geometry, seed.wrapping_add(2), 1.0);
    state
}

/// Reference state with a centered 20x20 solid block.
pub fn obstacle_state(seed: u64) -> FieldState {
    let geometry = GridGeometry::new(REFERENCE_EXTENT, REFERENCE_EXTENT, 0.01, 0.01)
        .expect("valid reference geometry");
    let mask = block_mask(&geometry, 40..=59, 40..=59);
    let mut state = FieldState::new(geometry, mask).expect("matching mask");
    state.u = seeded_field(&geometry, seed, 0.1);
    state.v = seeded_field(&geometry, seed.wrapping_add(1), 0.1);
    state.t = seeded_field(&geometry, seed.wrapping_add(2), 1.0);
    state
}
