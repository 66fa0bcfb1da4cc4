#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;

pub mod annotated;
pub mod annotation;
pub mod provider;
pub mod refine;
pub mod ty;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use config::{MapperConfig, MapperFlags};
pub use provider::{Introspector, MetadataProvider, NopProvider, StdAnnotationProvider};
pub use refine::{Direction, RefineError, TypeRefiner};
