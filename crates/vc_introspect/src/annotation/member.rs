use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::ty::Class;
use crate::value::{Access, CreatorMode, FormatValue, Include, InclusionValue, NameTransformer};
use crate::value::{OptBool, PropertyName};

// -----------------------------------------------------------------------------
// Property

/// Marks a member as a property, optionally renaming it.
///
/// # Examples
///
/// ```
/// use vc_introspect::annotation::Property;
/// use vc_introspect::value::{Access, OptBool};
///
/// let prop = Property::named("user_id").required(true).access(Access::ReadOnly);
/// assert_eq!(prop.required, OptBool::True);
///
/// // Present without a name: keep the implicit name.
/// assert!(Property::new().property_name().is_use_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    /// Explicit name; empty keeps the implicit one.
    pub name: Cow<'static, str>,
    pub namespace: Option<Cow<'static, str>>,
    pub required: OptBool,
    pub index: Option<i32>,
    pub default_value: Option<Cow<'static, str>>,
    pub access: Access,
}

impl Property {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn namespace(self, namespace: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..self
        }
    }

    #[inline]
    pub fn required(self, required: bool) -> Self {
        Self {
            required: OptBool::from(required),
            ..self
        }
    }

    #[inline]
    pub fn index(self, index: i32) -> Self {
        Self {
            index: Some(index),
            ..self
        }
    }

    #[inline]
    pub fn default_value(self, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            default_value: Some(value.into()),
            ..self
        }
    }

    #[inline]
    pub fn access(self, access: Access) -> Self {
        Self { access, ..self }
    }

    /// The declared name, [`PropertyName::USE_DEFAULT`] when empty.
    pub fn property_name(&self) -> PropertyName {
        match (&*self.name, &self.namespace) {
            ("", None) => PropertyName::USE_DEFAULT,
            (_, None) => PropertyName::new(self.name.clone()),
            (_, Some(namespace)) => PropertyName::new(self.name.clone()).with_namespace(namespace.clone()),
        }
    }
}

/// Human readable description of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(pub Cow<'static, str>);

// -----------------------------------------------------------------------------
// Ignorals and markers

/// Marks a member as ignored. `Ignore(false)` cancels an inherited ignoral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ignore(pub bool);

impl Default for Ignore {
    #[inline]
    fn default() -> Self {
        Self(true)
    }
}

/// The accessor provides the polymorphic type id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeIdMarker;

/// The member value stands for the whole object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsValue(pub bool);

impl Default for AsValue {
    #[inline]
    fn default() -> Self {
        Self(true)
    }
}

/// Two-argument method receiving unknown properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnySetter;

/// Map-valued accessor whose entries are written as extra properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyGetter;

/// Marks a constructor or factory method as the creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Creator(pub CreatorMode);

// -----------------------------------------------------------------------------
// References

/// The forward side of a parent/child link. Default link `"defaultReference"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedReference(pub Cow<'static, str>);

impl Default for ManagedReference {
    #[inline]
    fn default() -> Self {
        Self(Cow::Borrowed(DEFAULT_REFERENCE))
    }
}

/// The back side of a parent/child link. Default link `"defaultReference"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackReference(pub Cow<'static, str>);

impl Default for BackReference {
    #[inline]
    fn default() -> Self {
        Self(Cow::Borrowed(DEFAULT_REFERENCE))
    }
}

const DEFAULT_REFERENCE: &str = "defaultReference";

/// Serializes a reference to an identified object as its id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityReference {
    pub always_as_id: bool,
}

// -----------------------------------------------------------------------------
// Structure

/// Flattens the properties of the value into the enclosing object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unwrapped {
    pub enabled: bool,
    pub prefix: Cow<'static, str>,
    pub suffix: Cow<'static, str>,
}

impl Unwrapped {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn prefixed(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn suffix(self, suffix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            suffix: suffix.into(),
            ..self
        }
    }

    #[inline]
    pub fn enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    /// `None` if disabled.
    pub(crate) fn name_transformer(&self) -> Option<NameTransformer> {
        if !self.enabled {
            return None;
        }
        if self.prefix.is_empty() && self.suffix.is_empty() {
            return Some(NameTransformer::NOP);
        }
        Some(NameTransformer::new(self.prefix.clone(), self.suffix.clone()))
    }
}

impl Default for Unwrapped {
    #[inline]
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: Cow::Borrowed(""),
            suffix: Cow::Borrowed(""),
        }
    }
}

/// Element name wrapping a collection property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper(pub PropertyName);

/// Value injected from the mapper rather than read from input.
///
/// Without an id the member type name is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inject(pub Option<Cow<'static, str>>);

/// Views a property is included in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Views(pub Vec<Class>);

/// Format details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format(pub FormatValue);

// -----------------------------------------------------------------------------
// Inclusion

/// When the value and its content are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inclusion {
    pub value: Include,
    pub content: Include,
}

impl Inclusion {
    #[inline]
    pub const fn new(value: Include) -> Self {
        Self {
            value,
            content: Include::UseDefaults,
        }
    }

    #[inline]
    pub const fn content(self, content: Include) -> Self {
        Self { content, ..self }
    }

    #[inline]
    pub(crate) const fn to_value(self) -> InclusionValue {
        InclusionValue::new(self.value, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::{Property, Unwrapped};
    use crate::value::NameTransformer;

    #[test]
    fn property_names() {
        assert!(Property::default().property_name().is_use_default());
        assert_eq!(Property::named("id").property_name().simple_name(), "id");

        let name = Property::named("id").namespace("urn:x").property_name();
        assert_eq!(name.namespace(), Some("urn:x"));
        assert!(!name.is_use_default());
    }

    #[test]
    fn unwrapped_transformer() {
        assert_eq!(Unwrapped::new().name_transformer(), Some(NameTransformer::NOP));
        assert!(Unwrapped::new().enabled(false).name_transformer().is_none());

        let transformer = Unwrapped::prefixed("home_").suffix("_x").name_transformer();
        let transformer = transformer.unwrap();
        assert_eq!(transformer.transform("street"), "home_street_x");
    }
}
