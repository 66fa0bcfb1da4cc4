use crate::ty::Class;
use crate::value::PropertyName;

// -----------------------------------------------------------------------------
// ObjectIdGenerator

/// How object ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectIdGenerator {
    /// Sequential integers, per scope.
    IntSequence,
    /// Random UUIDs.
    Uuid,
    /// Caller supplied string ids.
    StringId,
    /// The value of an existing property is the id.
    Property,
    /// A custom generator class.
    Custom(Class),
}

// -----------------------------------------------------------------------------
// ObjectIdInfo

/// Object identity settings declared for a class or property.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::{ObjectIdGenerator, ObjectIdInfo, PropertyName};
///
/// let info = ObjectIdInfo::new(PropertyName::new("@id"), ObjectIdGenerator::IntSequence);
/// assert!(!info.always_as_id());
///
/// let info = info.with_always_as_id(true);
/// assert!(info.always_as_id());
/// assert_eq!(info.property_name().simple_name(), "@id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectIdInfo {
    property_name: PropertyName,
    generator: ObjectIdGenerator,
    scope: Option<Class>,
    always_as_id: bool,
}

impl ObjectIdInfo {
    #[inline]
    pub const fn new(property_name: PropertyName, generator: ObjectIdGenerator) -> Self {
        Self {
            property_name,
            generator,
            scope: None,
            always_as_id: false,
        }
    }

    /// Limits id uniqueness to instances of `scope`.
    #[inline]
    pub fn with_scope(self, scope: Class) -> Self {
        Self {
            scope: Some(scope),
            ..self
        }
    }

    /// Serializes every reference as an id, including the first one.
    #[inline]
    pub fn with_always_as_id(self, always_as_id: bool) -> Self {
        Self {
            always_as_id,
            ..self
        }
    }

    #[inline]
    pub const fn property_name(&self) -> &PropertyName {
        &self.property_name
    }

    #[inline]
    pub const fn generator(&self) -> ObjectIdGenerator {
        self.generator
    }

    #[inline]
    pub const fn scope(&self) -> Option<Class> {
        self.scope
    }

    #[inline]
    pub const fn always_as_id(&self) -> bool {
        self.always_as_id
    }
}
