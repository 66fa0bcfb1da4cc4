//! The standard annotation values read by [`StdAnnotationProvider`].
//!
//! Annotations are plain values attached to an entity's [`Annotations`]
//! store, keyed by their type. Any `Send + Sync + 'static` value can be an
//! annotation; the types in this module are the ones this crate knows how
//! to interpret.
//!
//! ## Menu
//!
//! Class level:
//! - [`RootName`], [`IgnoreProperties`], [`IgnoreType`], [`Filter`], [`Naming`]
//! - [`AutoDetect`], [`TypeInfo`], [`SubTypes`], [`TypeName`]
//! - [`PropertyOrder`], [`Append`], [`EnumNames`]
//! - [`ValueInstantiator`], [`BuilderOptions`], [`IdentityInfo`]
//!
//! Member level:
//! - [`Property`], [`Description`], [`Ignore`], [`Views`], [`Format`], [`Wrapper`]
//! - [`ManagedReference`], [`BackReference`], [`Unwrapped`], [`Inject`]
//! - [`TypeIdMarker`], [`AsValue`], [`AnySetter`], [`AnyGetter`], [`Creator`]
//! - [`IdentityReference`], [`Inclusion`]
//!
//! Codec selection and type overrides:
//! - [`SerializeOptions`], [`DeserializeOptions`]
//!
//! [`StdAnnotationProvider`]: crate::StdAnnotationProvider
//! [`Annotations`]: crate::annotated::Annotations

// -----------------------------------------------------------------------------
// Modules

mod class;
mod codec;
mod member;

// -----------------------------------------------------------------------------
// Exports

pub use class::{Append, AutoDetect, BuilderOptions, EnumNames, Filter, IdentityInfo};
pub use class::{IgnoreProperties, IgnoreType, Naming, PropertyOrder, RootName};
pub use class::{SubTypes, TypeInfo, TypeName, ValueInstantiator};
pub use codec::{DeserializeOptions, SerializeOptions};
pub use member::{AnyGetter, AnySetter, AsValue, BackReference, Creator, Description};
pub use member::{Format, IdentityReference, Ignore, Inclusion, Inject, ManagedReference};
pub use member::{Property, TypeIdMarker, Unwrapped, Views, Wrapper};
