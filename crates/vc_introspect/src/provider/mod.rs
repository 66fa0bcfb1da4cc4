//! Metadata providers and their composition.
//!
//! - [`MetadataProvider`]: the query surface, every query defaulting to "no opinion".
//! - [`NopProvider`]: answers nothing.
//! - [`StdAnnotationProvider`]: reads the annotations of [`crate::annotation`].
//! - [`Introspector`]: an ordered chain of providers, itself a provider.

// -----------------------------------------------------------------------------
// Modules

mod introspector;
mod metadata_provider;
mod nop;
mod std_provider;

// -----------------------------------------------------------------------------
// Exports

pub use introspector::Introspector;
pub use metadata_provider::MetadataProvider;
pub use nop::NopProvider;
pub use std_provider::StdAnnotationProvider;
