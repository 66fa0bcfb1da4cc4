use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

use crate::refine::Direction;
use crate::ty::{Class, LatticeError, ValueType};

// -----------------------------------------------------------------------------
// RefineTarget

/// The part of a type an override applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefineTarget {
    /// The whole type.
    Type,
    /// The key type of a map-like type.
    KeyType,
    /// The content type of a container or reference.
    ContentType,
}

impl fmt::Display for RefineTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => f.pad("type"),
            Self::KeyType => f.pad("key type of"),
            Self::ContentType => f.pad("value type of"),
        }
    }
}

// -----------------------------------------------------------------------------
// RefineError

/// An annotation requested a type the lattice cannot reach from the
/// declared one.
///
/// This is a configuration error of the annotated entity: the serializer or
/// deserializer for it cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "failed to {verb} {target} `{base}` with annotation (value `{requested}`), from `{entity}`: {reason}",
    verb = .direction.verb()
)]
pub struct RefineError {
    entity: String,
    direction: Direction,
    target: RefineTarget,
    requested: Class,
    base: ValueType,
    // Part of the message, not exposed as `Error::source`.
    reason: LatticeError,
}

impl RefineError {
    pub(crate) fn new(
        entity: &str,
        direction: Direction,
        target: RefineTarget,
        requested: Class,
        base: &ValueType,
        reason: LatticeError,
    ) -> Self {
        Self {
            entity: entity.to_string(),
            direction,
            target,
            requested,
            base: base.clone(),
            reason,
        }
    }

    /// Name of the annotated entity.
    #[inline]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub const fn target(&self) -> RefineTarget {
        self.target
    }

    /// The class named by the annotation.
    #[inline]
    pub const fn requested(&self) -> Class {
        self.requested
    }

    /// The type being refined when the override was rejected.
    #[inline]
    pub const fn base(&self) -> &ValueType {
        &self.base
    }

    /// Why the lattice rejected the override.
    #[inline]
    pub const fn lattice_error(&self) -> &LatticeError {
        &self.reason
    }
}
