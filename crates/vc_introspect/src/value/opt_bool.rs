use core::fmt;

use serde_core::{Serialize, Serializer};

// -----------------------------------------------------------------------------
// OptBool

/// A three-valued boolean: definitely true, definitely false, or no opinion.
///
/// Used by queries where a provider chain must distinguish an explicit
/// `false` from silence.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::OptBool;
///
/// assert_eq!(OptBool::Unset.or(OptBool::False), OptBool::False);
/// assert_eq!(OptBool::True.or(OptBool::False), OptBool::True);
/// assert_eq!(OptBool::Unset.unwrap_or(true), true);
/// assert_eq!(OptBool::from(Some(false)), OptBool::False);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OptBool {
    True,
    False,
    #[default]
    Unset,
}

impl OptBool {
    /// Returns `true` unless this is [`OptBool::Unset`].
    #[inline]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Returns `self` if set, otherwise `other`.
    #[inline]
    pub const fn or(self, other: Self) -> Self {
        match self {
            Self::Unset => other,
            _ => self,
        }
    }

    /// Returns the definite value, or `default` when unset.
    #[inline]
    pub const fn unwrap_or(self, default: bool) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Unset => default,
        }
    }

    /// Converts into `Option<bool>`.
    #[inline]
    pub const fn to_option(self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Unset => None,
        }
    }
}

impl From<bool> for OptBool {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for OptBool {
    #[inline]
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Unset,
        }
    }
}

impl fmt::Display for OptBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.pad("true"),
            Self::False => f.pad("false"),
            Self::Unset => f.pad("unset"),
        }
    }
}

impl Serialize for OptBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::True => serializer.serialize_bool(true),
            Self::False => serializer.serialize_bool(false),
            Self::Unset => serializer.serialize_none(),
        }
    }
}
