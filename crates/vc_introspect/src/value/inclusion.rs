use core::fmt;

use serde_core::{Serialize, Serializer};

// -----------------------------------------------------------------------------
// Include

/// Which property values are written during serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Include {
    /// Always written.
    Always,
    /// Skipped when null.
    NonNull,
    /// Skipped when null or an absent reference.
    NonAbsent,
    /// Skipped when equal to the default value.
    NonDefault,
    /// Skipped when null, absent or empty.
    NonEmpty,
    /// No opinion, defer to outer defaults.
    #[default]
    UseDefaults,
}

impl Include {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::NonNull => "non_null",
            Self::NonAbsent => "non_absent",
            Self::NonDefault => "non_default",
            Self::NonEmpty => "non_empty",
            Self::UseDefaults => "use_defaults",
        }
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Include {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// InclusionValue

/// Inclusion rules for a property value and for its content.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::{Include, InclusionValue};
///
/// let outer = InclusionValue::new(Include::NonNull, Include::UseDefaults);
/// let inner = InclusionValue::new(Include::UseDefaults, Include::NonEmpty);
///
/// let merged = outer.with_overrides(&inner);
/// assert_eq!(merged.value(), Include::NonNull);
/// assert_eq!(merged.content(), Include::NonEmpty);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InclusionValue {
    value: Include,
    content: Include,
}

impl InclusionValue {
    /// No opinion for either.
    pub const EMPTY: Self = Self {
        value: Include::UseDefaults,
        content: Include::UseDefaults,
    };

    #[inline]
    pub const fn new(value: Include, content: Include) -> Self {
        Self { value, content }
    }

    #[inline]
    pub const fn value(&self) -> Include {
        self.value
    }

    #[inline]
    pub const fn content(&self) -> Include {
        self.content
    }

    /// Returns `true` if both rules are [`Include::UseDefaults`].
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.value, Include::UseDefaults) && matches!(self.content, Include::UseDefaults)
    }

    /// Returns a copy where every rule set in `overrides` replaces ours.
    pub const fn with_overrides(&self, overrides: &Self) -> Self {
        Self {
            value: match overrides.value {
                Include::UseDefaults => self.value,
                value => value,
            },
            content: match overrides.content {
                Include::UseDefaults => self.content,
                content => content,
            },
        }
    }
}
