use alloc::borrow::Cow;
use core::hash::{Hash, Hasher};

use crate::ty::Class;
use crate::value::HandlerRef;

// -----------------------------------------------------------------------------
// NamedType

/// A subtype declaration: a class with an optional type name.
///
/// Equality only looks at the class, the name is an annotation detail.
#[derive(Debug, Clone)]
pub struct NamedType {
    class: Class,
    name: Option<Cow<'static, str>>,
}

impl NamedType {
    #[inline]
    pub const fn new(class: Class) -> Self {
        Self { class, name: None }
    }

    #[inline]
    pub fn named(class: Class, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            class,
            name: Some(name.into()),
        }
    }

    #[inline]
    pub const fn class(&self) -> Class {
        self.class
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }
}

impl PartialEq for NamedType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
    }
}

impl Eq for NamedType {}

impl Hash for NamedType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
    }
}

// -----------------------------------------------------------------------------
// TypeIdKind

/// How a polymorphic type id is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeIdKind {
    /// No type id; polymorphic handling explicitly disabled.
    None,
    /// Fully qualified class path.
    Class,
    /// Class path relative to the base type.
    MinimalClass,
    /// Logical type name.
    Name,
    /// Custom id resolver.
    Custom,
}

impl TypeIdKind {
    /// The property name used when none is declared.
    pub const fn default_property_name(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Class => "@class",
            Self::MinimalClass => "@c",
            Self::Name | Self::Custom => "@type",
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInclusion

/// Where a polymorphic type id is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeInclusion {
    #[default]
    Property,
    WrapperObject,
    WrapperArray,
    ExternalProperty,
    ExistingProperty,
}

// -----------------------------------------------------------------------------
// TypeResolverSpec

/// The polymorphic type handling declared for a class or property.
///
/// This is the signal a type resolver builder is constructed from; the
/// construction itself happens outside this crate.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::{TypeIdKind, TypeInclusion, TypeResolverSpec};
///
/// let spec = TypeResolverSpec::new(TypeIdKind::Name);
/// assert_eq!(spec.property_name(), "@type");
/// assert_eq!(spec.inclusion(), TypeInclusion::Property);
///
/// let spec = spec.with_property_name("kind").with_visible(true);
/// assert_eq!(spec.property_name(), "kind");
/// assert!(spec.is_visible());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypeResolverSpec {
    id_kind: TypeIdKind,
    inclusion: TypeInclusion,
    property_name: Cow<'static, str>,
    default_impl: Option<Class>,
    id_resolver: Option<HandlerRef>,
    visible: bool,
}

impl TypeResolverSpec {
    /// Creates a spec using the default property name of `id_kind`.
    pub const fn new(id_kind: TypeIdKind) -> Self {
        Self {
            id_kind,
            inclusion: TypeInclusion::Property,
            property_name: Cow::Borrowed(id_kind.default_property_name()),
            default_impl: None,
            id_resolver: None,
            visible: false,
        }
    }

    /// A spec that explicitly disables polymorphic handling.
    #[inline]
    pub const fn none() -> Self {
        Self::new(TypeIdKind::None)
    }

    #[inline]
    pub fn with_inclusion(self, inclusion: TypeInclusion) -> Self {
        Self { inclusion, ..self }
    }

    /// Sets the property name; an empty name restores the default.
    pub fn with_property_name(self, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        let property_name = if name.is_empty() {
            Cow::Borrowed(self.id_kind.default_property_name())
        } else {
            name
        };
        Self {
            property_name,
            ..self
        }
    }

    #[inline]
    pub fn with_default_impl(self, class: Class) -> Self {
        Self {
            default_impl: Some(class),
            ..self
        }
    }

    #[inline]
    pub fn with_id_resolver(self, resolver: HandlerRef) -> Self {
        Self {
            id_resolver: Some(resolver),
            ..self
        }
    }

    #[inline]
    pub fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    #[inline]
    pub const fn id_kind(&self) -> TypeIdKind {
        self.id_kind
    }

    #[inline]
    pub const fn inclusion(&self) -> TypeInclusion {
        self.inclusion
    }

    #[inline]
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    #[inline]
    pub const fn default_impl(&self) -> Option<Class> {
        self.default_impl
    }

    #[inline]
    pub const fn id_resolver(&self) -> Option<&HandlerRef> {
        self.id_resolver.as_ref()
    }

    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `false` when polymorphic handling is explicitly disabled.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self.id_kind, TypeIdKind::None)
    }
}
