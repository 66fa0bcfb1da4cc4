//! Data binding core.
//!
//! - [`introspect`]: annotation metadata providers and type refinement.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_introspect as introspect;
