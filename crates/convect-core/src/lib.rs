//! Core types for the convect discretization kernel.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! spatial tag enums ([`Axis`], [`Direction`]), the physical parameter set
//! ([`FluidParams`]), the diagnostic field naming ([`FieldName`]), and the
//! caller-level validation errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod axis;
mod direction;
mod error;
mod fields;
mod params;

pub use axis::Axis;
pub use direction::Direction;
pub use error::ParamError;
pub use fields::FieldName;
pub use params::FluidParams;
