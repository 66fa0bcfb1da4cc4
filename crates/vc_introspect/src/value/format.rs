use alloc::borrow::Cow;

// -----------------------------------------------------------------------------
// FormatShape

/// The preferred serialized structure of a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormatShape {
    /// No preference.
    #[default]
    Any,
    /// The natural shape of the type.
    Natural,
    Scalar,
    Array,
    Object,
    Number,
    NumberFloat,
    NumberInt,
    String,
    Boolean,
}

impl FormatShape {
    /// Returns `true` for numeric shapes.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::NumberFloat | Self::NumberInt)
    }

    /// Returns `true` for array and object shapes.
    #[inline]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

// -----------------------------------------------------------------------------
// FormatValue

/// Presentation hints attached to a class or property.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::{FormatShape, FormatValue};
///
/// let format = FormatValue::new()
///     .with_shape(FormatShape::String)
///     .with_pattern("yyyy-MM-dd");
///
/// assert_eq!(format.pattern(), Some("yyyy-MM-dd"));
/// assert!(format.timezone().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FormatValue {
    shape: FormatShape,
    pattern: Option<Cow<'static, str>>,
    locale: Option<Cow<'static, str>>,
    timezone: Option<Cow<'static, str>>,
}

impl FormatValue {
    /// Creates an empty format.
    #[inline]
    pub const fn new() -> Self {
        Self {
            shape: FormatShape::Any,
            pattern: None,
            locale: None,
            timezone: None,
        }
    }

    #[inline]
    pub fn with_shape(self, shape: FormatShape) -> Self {
        Self { shape, ..self }
    }

    #[inline]
    pub fn with_pattern(self, pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..self
        }
    }

    #[inline]
    pub fn with_locale(self, locale: impl Into<Cow<'static, str>>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..self
        }
    }

    #[inline]
    pub fn with_timezone(self, timezone: impl Into<Cow<'static, str>>) -> Self {
        Self {
            timezone: Some(timezone.into()),
            ..self
        }
    }

    #[inline]
    pub const fn shape(&self) -> FormatShape {
        self.shape
    }

    #[inline]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    #[inline]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[inline]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }
}
