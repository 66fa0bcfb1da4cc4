//! Annotated entities: classes and their members.
//!
//! The refinement engine and every provider query receive entities through
//! the [`Annotated`] trait. Only two capabilities are needed from them:
//! fetching an annotation by type and testing for its presence.
//!
//! ## Menu
//!
//! - [`Annotations`]: `TypeId` keyed annotation storage.
//! - [`Annotated`]: the common entity interface.
//! - [`AnnotatedClass`]: a class.
//! - [`AnnotatedMember`]: a field, method, constructor or constructor parameter.

// -----------------------------------------------------------------------------
// Modules

mod annotations;
mod class;
mod member;

// -----------------------------------------------------------------------------
// Exports

pub use annotations::Annotations;
pub use class::AnnotatedClass;
pub use member::{AnnotatedMember, MemberKind};

use core::fmt;

use crate::ty::Class;

// -----------------------------------------------------------------------------
// AnnotatedKind

/// The kind of an annotated entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotatedKind {
    Class,
    Field,
    Method,
    Constructor,
    Parameter,
}

impl fmt::Display for AnnotatedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => f.pad("class"),
            Self::Field => f.pad("field"),
            Self::Method => f.pad("method"),
            Self::Constructor => f.pad("constructor"),
            Self::Parameter => f.pad("parameter"),
        }
    }
}

// -----------------------------------------------------------------------------
// Annotated

/// A class or member reachable for metadata queries.
pub trait Annotated {
    /// The entity name, used in error messages.
    fn name(&self) -> &str;

    /// The entity kind.
    fn kind(&self) -> AnnotatedKind;

    /// The raw class of the entity: the class itself, or the member's type.
    fn raw_class(&self) -> Class;

    /// The annotations declared on this entity.
    fn annotations(&self) -> &Annotations;
}

/// Implement `get_annotation` and `has_annotation` on top of [`Annotated::annotations`].
macro_rules! impl_annotation_fns {
    () => {
        /// Returns the annotation of type `A`, if present.
        #[inline]
        pub fn get_annotation<A: ::core::any::Any>(&self) -> Option<&A> {
            $crate::annotated::Annotated::annotations(self).get::<A>()
        }

        /// Returns `true` if an annotation of type `A` is present.
        #[inline]
        pub fn has_annotation<A: ::core::any::Any>(&self) -> bool {
            $crate::annotated::Annotated::annotations(self).contains::<A>()
        }
    };
}

pub(crate) use impl_annotation_fns;

impl dyn Annotated + '_ {
    impl_annotation_fns!();
}
