//! The type refinement engine.
//!
//! Annotations may ask for a property to be serialized as one of its
//! super-types, or deserialized as one of its sub-types, for the value as a
//! whole as well as for map keys and container content. [`TypeRefiner`]
//! applies those overrides through a [`TypeLattice`](crate::ty::TypeLattice)
//! and reports incompatible ones as [`RefineError`].

// -----------------------------------------------------------------------------
// Modules

mod error;
mod refiner;

// -----------------------------------------------------------------------------
// Exports

pub use error::{RefineError, RefineTarget};
pub use refiner::{Direction, TypeRefiner};
