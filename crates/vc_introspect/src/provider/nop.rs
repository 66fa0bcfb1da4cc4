use crate::provider::MetadataProvider;

// -----------------------------------------------------------------------------
// NopProvider

/// A provider with no opinion on anything.
///
/// Used when annotation processing is disabled and as the empty chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NopProvider;

impl NopProvider {
    /// A shared instance.
    pub const INSTANCE: &'static NopProvider = &NopProvider;
}

impl MetadataProvider for NopProvider {
    #[inline]
    fn name(&self) -> &'static str {
        "nop"
    }
}
