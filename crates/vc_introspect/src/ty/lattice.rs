use thiserror::Error;

use crate::ty::{Class, ValueType};

// -----------------------------------------------------------------------------
// LatticeError

/// Reasons a [`TypeLattice`] operation rejects a requested class.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LatticeError {
    #[error("class `{class}` is not a super-type of `{base}`")]
    NotSuperType { base: Class, class: Class },

    #[error("class `{class}` is not a sub-type of `{base}`")]
    NotSubType { base: Class, class: Class },

    #[error("type `{0}` is not map-like and has no key type")]
    NoKeyType(ValueType),

    #[error("type `{0}` has no content type")]
    NoContentType(ValueType),
}

// -----------------------------------------------------------------------------
// TypeLattice

/// The type-factory collaborator used by the refinement engine.
///
/// Every operation either returns the corrected type or reports why the
/// requested class is incompatible; none of them panic. Implementations are
/// shared read-only, hence `Send + Sync`.
///
/// See [`ClassHierarchy`](crate::ty::ClassHierarchy) for the provided implementation.
pub trait TypeLattice: Send + Sync {
    /// Replaces the raw class of `base` with one of its super-types.
    fn widen_by(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError>;

    /// Replaces the raw class of `base` with one of its sub-types.
    fn specialize_by(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError>;

    /// Replaces the key type of a map-like `base` with a super-type.
    fn widen_key(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError>;

    /// Replaces the key type of a map-like `base` with a sub-type.
    fn narrow_key(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError>;

    /// Replaces the content type of `base` with a super-type.
    fn widen_content_by(&self, base: &ValueType, class: Class)
    -> Result<ValueType, LatticeError>;

    /// Replaces the content type of `base` with a sub-type.
    fn narrow_content_by(
        &self,
        base: &ValueType,
        class: Class,
    ) -> Result<ValueType, LatticeError>;
}
