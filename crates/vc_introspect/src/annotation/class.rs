use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::value::{BuilderConfig, HandlerRef, NamedType, ObjectIdInfo, OptBool, PropertyName};
use crate::value::{TypeResolverSpec, VirtualProperty, VisibilityChecker};

// -----------------------------------------------------------------------------
// Naming

/// Name used when the class is the root value.
///
/// An empty name means "use the default name".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootName {
    pub name: Cow<'static, str>,
    pub namespace: Option<Cow<'static, str>>,
}

impl RootName {
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    #[inline]
    pub fn with_namespace(self, namespace: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..self
        }
    }

    pub(crate) fn to_property_name(&self) -> PropertyName {
        match (&*self.name, &self.namespace) {
            ("", None) => PropertyName::USE_DEFAULT,
            (_, None) => PropertyName::new(self.name.clone()),
            (_, Some(namespace)) => PropertyName::new(self.name.clone()).with_namespace(namespace.clone()),
        }
    }
}

/// Naming strategy applied to every property of the class.
#[derive(Debug, Clone, PartialEq)]
pub struct Naming(pub HandlerRef);

// -----------------------------------------------------------------------------
// Ignorals

/// Properties of the class to ignore.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreProperties {
    pub names: Vec<Cow<'static, str>>,
    /// Skip unknown properties while deserializing.
    pub ignore_unknown: bool,
    /// Still serialize the named properties.
    pub allow_getters: bool,
    /// Still deserialize the named properties.
    pub allow_setters: bool,
}

impl IgnoreProperties {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn ignore_unknown(self, ignore_unknown: bool) -> Self {
        Self {
            ignore_unknown,
            ..self
        }
    }

    #[inline]
    pub fn allow_getters(self, allow_getters: bool) -> Self {
        Self {
            allow_getters,
            ..self
        }
    }

    #[inline]
    pub fn allow_setters(self, allow_setters: bool) -> Self {
        Self {
            allow_setters,
            ..self
        }
    }
}

/// Marks every property of this type as ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreType(pub bool);

impl Default for IgnoreType {
    #[inline]
    fn default() -> Self {
        Self(true)
    }
}

/// Id of the property filter to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter(pub Cow<'static, str>);

// -----------------------------------------------------------------------------
// Detection

/// Overrides auto-detection levels.
///
/// Levels left as [`Visibility::Default`](crate::value::Visibility::Default)
/// keep the current setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDetect(pub VisibilityChecker);

impl Default for AutoDetect {
    #[inline]
    fn default() -> Self {
        Self(VisibilityChecker::unchanged())
    }
}

// -----------------------------------------------------------------------------
// Polymorphism

/// Polymorphic type handling.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo(pub TypeResolverSpec);

/// Directly known subtypes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubTypes(pub Vec<NamedType>);

/// Logical type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName(pub Cow<'static, str>);

// -----------------------------------------------------------------------------
// Serialization

/// Explicit property order.
///
/// Properties not named are written after the named ones, sorted by name if
/// `alphabetic` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOrder {
    pub names: Vec<Cow<'static, str>>,
    pub alphabetic: bool,
}

impl PropertyOrder {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            alphabetic: false,
        }
    }

    /// Only sorts alphabetically, no explicit order.
    #[inline]
    pub fn alphabetic() -> Self {
        Self {
            names: Vec::new(),
            alphabetic: true,
        }
    }

    pub(crate) fn sort_alphabetically(&self) -> OptBool {
        OptBool::from(self.alphabetic)
    }
}

/// Virtual properties written after the real ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Append {
    pub properties: Vec<VirtualProperty>,
}

impl Append {
    pub fn new(properties: impl IntoIterator<Item = VirtualProperty>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }
}

/// Explicit serialized names of enum variants, as `(variant, name)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumNames(pub Vec<(Cow<'static, str>, Cow<'static, str>)>);

impl EnumNames {
    pub fn new<I, V, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        V: Into<Cow<'static, str>>,
        N: Into<Cow<'static, str>>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(variant, name)| (variant.into(), name.into()))
                .collect(),
        )
    }

    /// Returns the name of `variant`, if listed.
    pub fn get(&self, variant: &str) -> Option<&Cow<'static, str>> {
        self.0
            .iter()
            .find(|(name, _)| name == variant)
            .map(|(_, value)| value)
    }
}

// -----------------------------------------------------------------------------
// Deserialization

/// Custom instantiator for the class.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueInstantiator(pub HandlerRef);

/// Settings of a builder class; placed on the builder itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderOptions(pub BuilderConfig);

// -----------------------------------------------------------------------------
// Identity

/// Object identity for instances of the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityInfo(pub ObjectIdInfo);

#[cfg(test)]
mod tests {
    use super::{EnumNames, RootName};

    #[test]
    fn root_name_conversion() {
        assert!(RootName::default().to_property_name().is_use_default());

        let name = RootName::new("zoo").to_property_name();
        assert_eq!(name.simple_name(), "zoo");
        assert_eq!(name.namespace(), None);

        let name = RootName::new("zoo").with_namespace("urn:x").to_property_name();
        assert_eq!(name.namespace(), Some("urn:x"));
    }

    #[test]
    fn enum_names_lookup() {
        let names = EnumNames::new([("Red", "red"), ("DarkBlue", "dark-blue")]);
        assert_eq!(names.get("DarkBlue").map(|n| &**n), Some("dark-blue"));
        assert!(names.get("Green").is_none());
    }
}
