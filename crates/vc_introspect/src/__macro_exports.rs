//! Items used by exported macros.

#[cfg(feature = "auto_register")]
pub use inventory;
