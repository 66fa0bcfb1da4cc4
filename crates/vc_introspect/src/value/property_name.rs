use alloc::borrow::Cow;
use core::fmt;

use serde_core::{Serialize, Serializer};

// -----------------------------------------------------------------------------
// PropertyName

/// A property name as declared by annotations, with an optional namespace.
///
/// Two special values exist:
///
/// - [`PropertyName::USE_DEFAULT`]: the annotation is present but does not
///   name the property, so default naming applies.
/// - [`PropertyName::NO_NAME`]: explicitly no name at all.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::PropertyName;
///
/// let name = PropertyName::new("user_id");
/// assert!(name.has_simple_name());
/// assert_eq!(name.simple_name(), "user_id");
///
/// assert!(PropertyName::USE_DEFAULT.is_use_default());
/// assert!(!PropertyName::USE_DEFAULT.has_simple_name());
/// assert_eq!(PropertyName::new(""), PropertyName::USE_DEFAULT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyName {
    simple: Option<Cow<'static, str>>,
    namespace: Option<Cow<'static, str>>,
}

impl PropertyName {
    /// Marker for "use the default name".
    pub const USE_DEFAULT: Self = Self {
        simple: Some(Cow::Borrowed("")),
        namespace: None,
    };

    /// Marker for "no name".
    pub const NO_NAME: Self = Self {
        simple: None,
        namespace: None,
    };

    /// Creates a name without namespace.
    #[inline]
    pub fn new(simple: impl Into<Cow<'static, str>>) -> Self {
        Self {
            simple: Some(simple.into()),
            namespace: None,
        }
    }

    /// Returns a copy with the given namespace.
    #[inline]
    pub fn with_namespace(self, namespace: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..self
        }
    }

    /// Returns the simple name, empty when there is none.
    #[inline]
    pub fn simple_name(&self) -> &str {
        self.simple.as_deref().unwrap_or("")
    }

    /// Returns the namespace, if any.
    #[inline]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns `true` if the simple name is non-empty.
    #[inline]
    pub fn has_simple_name(&self) -> bool {
        self.simple.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Returns `true` for [`PropertyName::USE_DEFAULT`].
    #[inline]
    pub fn is_use_default(&self) -> bool {
        *self == Self::USE_DEFAULT
    }

    /// Returns `true` if neither a simple name nor a namespace is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.has_simple_name() && self.namespace.is_none()
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{{{namespace}}}{}", self.simple_name()),
            None => f.pad(self.simple_name()),
        }
    }
}

impl Serialize for PropertyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.simple {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}
