//! Raw classes, value types and the type lattice.
//!
//! ## Menu
//!
//! - [`Class`]: a raw class token.
//! - [`ValueType`]: a raw class with its key and content types.
//! - [`TypeLattice`]: widening and narrowing operations, consumed by the
//!   [refinement engine](crate::refine).
//! - [`ClassHierarchy`]: an in-memory lattice built from declared edges.

// -----------------------------------------------------------------------------
// Modules

mod class;
mod hierarchy;
mod lattice;
mod value_type;

// -----------------------------------------------------------------------------
// Exports

pub use class::Class;
pub use hierarchy::{ClassDecl, ClassHierarchy};
pub use lattice::{LatticeError, TypeLattice};
pub use value_type::{TypeShape, ValueType};
