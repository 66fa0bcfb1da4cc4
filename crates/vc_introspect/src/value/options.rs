use alloc::borrow::Cow;
use alloc::string::String;

use crate::ty::ValueType;
use crate::value::{HandlerRef, PropertyName};

// -----------------------------------------------------------------------------
// Simple enumerations

/// Which directions a property participates in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Access {
    /// Decided by visibility rules.
    #[default]
    Auto,
    /// Only serialized.
    ReadOnly,
    /// Only deserialized.
    WriteOnly,
    ReadWrite,
}

/// Whether the declared or the runtime type drives serializer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typing {
    Dynamic,
    Static,
    /// Defer to the mapper setting.
    DefaultTyping,
}

/// Binding mode of a creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CreatorMode {
    /// Heuristics decide between delegating and properties.
    #[default]
    Default,
    /// The single argument receives the whole value.
    Delegating,
    /// Each argument binds one property.
    Properties,
    /// Not a creator.
    Disabled,
}

// -----------------------------------------------------------------------------
// BuilderConfig

/// Settings of a builder class used for deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuilderConfig {
    build_method_name: Cow<'static, str>,
    with_prefix: Cow<'static, str>,
}

impl BuilderConfig {
    pub const DEFAULT_BUILD_METHOD: &'static str = "build";
    pub const DEFAULT_WITH_PREFIX: &'static str = "with";

    #[inline]
    pub fn new(
        build_method_name: impl Into<Cow<'static, str>>,
        with_prefix: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            build_method_name: build_method_name.into(),
            with_prefix: with_prefix.into(),
        }
    }

    #[inline]
    pub fn build_method_name(&self) -> &str {
        &self.build_method_name
    }

    #[inline]
    pub fn with_prefix(&self) -> &str {
        &self.with_prefix
    }
}

impl Default for BuilderConfig {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_BUILD_METHOD, Self::DEFAULT_WITH_PREFIX)
    }
}

// -----------------------------------------------------------------------------
// NameTransformer

/// Renames the properties of an unwrapped value by adding a prefix and suffix.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::NameTransformer;
///
/// let transformer = NameTransformer::new("home_", "");
/// assert_eq!(transformer.transform("street"), "home_street");
/// assert_eq!(transformer.reverse("home_street"), Some("street"));
/// assert_eq!(transformer.reverse("street"), None);
///
/// assert!(NameTransformer::NOP.is_nop());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameTransformer {
    prefix: Cow<'static, str>,
    suffix: Cow<'static, str>,
}

impl NameTransformer {
    /// Leaves names unchanged.
    pub const NOP: Self = Self {
        prefix: Cow::Borrowed(""),
        suffix: Cow::Borrowed(""),
    };

    #[inline]
    pub fn new(prefix: impl Into<Cow<'static, str>>, suffix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    #[inline]
    pub fn is_nop(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Applies the prefix and suffix.
    pub fn transform(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + name.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(name);
        out.push_str(&self.suffix);
        out
    }

    /// Strips the prefix and suffix, or `None` if `name` does not carry them.
    pub fn reverse<'a>(&self, name: &'a str) -> Option<&'a str> {
        name.strip_prefix(&*self.prefix)?
            .strip_suffix(&*self.suffix)
    }
}

// -----------------------------------------------------------------------------
// VirtualProperty

/// Where the value of a virtual property comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum VirtualSource {
    /// A serialization attribute with this key.
    Attribute(Cow<'static, str>),
    /// A custom writer.
    Writer(HandlerRef),
}

/// A property written during serialization without a backing member.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualProperty {
    name: PropertyName,
    value_type: ValueType,
    source: VirtualSource,
}

impl VirtualProperty {
    #[inline]
    pub const fn new(name: PropertyName, value_type: ValueType, source: VirtualSource) -> Self {
        Self {
            name,
            value_type,
            source,
        }
    }

    /// A virtual property reading the attribute of the same name.
    pub fn attribute(name: impl Into<Cow<'static, str>>, value_type: ValueType) -> Self {
        let name = name.into();
        Self {
            name: PropertyName::new(name.clone()),
            value_type,
            source: VirtualSource::Attribute(name),
        }
    }

    #[inline]
    pub const fn name(&self) -> &PropertyName {
        &self.name
    }

    #[inline]
    pub const fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    #[inline]
    pub const fn source(&self) -> &VirtualSource {
        &self.source
    }
}
