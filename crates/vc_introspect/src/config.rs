use alloc::sync::Arc;
use core::fmt;

use bitflags::bitflags;

use crate::annotated::Annotated;
use crate::provider::{Introspector, MetadataProvider, NopProvider, StdAnnotationProvider};
use crate::refine::{RefineError, TypeRefiner};
use crate::ty::{ClassHierarchy, TypeLattice, ValueType};
use crate::value::Typing;

// -----------------------------------------------------------------------------
// MapperFlags

bitflags! {
    /// Mapper-wide switches consulted when providers have no opinion.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MapperFlags: u8 {
        /// Read annotations at all. When unset every query answers "no opinion".
        const USE_ANNOTATIONS = 1 << 0;
        /// Sort properties without explicit order by name.
        const SORT_PROPERTIES_ALPHABETICALLY = 1 << 1;
        /// Select serializers by declared instead of runtime type.
        const USE_STATIC_TYPING = 1 << 2;
    }
}

impl Default for MapperFlags {
    #[inline]
    fn default() -> Self {
        Self::USE_ANNOTATIONS
    }
}

// -----------------------------------------------------------------------------
// MapperConfig

/// The configuration introspection runs against: the provider chain, the
/// type lattice and the mapper flags.
///
/// Built once and then shared; every field is cheap to clone.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use vc_introspect::annotated::AnnotatedClass;
/// use vc_introspect::annotation::PropertyOrder;
/// use vc_introspect::ty::ClassHierarchy;
/// use vc_introspect::{MapperConfig, MapperFlags};
///
/// struct Zoo;
/// struct Farm;
///
/// let config = MapperConfig::new(Arc::new(ClassHierarchy::new()))
///     .enable(MapperFlags::SORT_PROPERTIES_ALPHABETICALLY);
///
/// // No annotation: the mapper flag decides.
/// assert!(config.should_sort_properties_alphabetically(&AnnotatedClass::of::<Zoo>()));
///
/// // An explicit annotation wins over the flag.
/// let farm = AnnotatedClass::of::<Farm>().with_annotation(PropertyOrder::new(["name"]));
/// assert!(!config.should_sort_properties_alphabetically(&farm));
///
/// // Disabling annotations ignores it again.
/// let config = config.disable(MapperFlags::USE_ANNOTATIONS);
/// assert!(config.should_sort_properties_alphabetically(&farm));
/// ```
#[derive(Clone)]
pub struct MapperConfig {
    introspector: Introspector,
    lattice: Arc<dyn TypeLattice>,
    flags: MapperFlags,
}

impl MapperConfig {
    /// Creates a config reading the standard annotations, with default flags.
    pub fn new(lattice: Arc<dyn TypeLattice>) -> Self {
        Self {
            introspector: Introspector::single(StdAnnotationProvider::new()),
            lattice,
            flags: MapperFlags::default(),
        }
    }

    /// Replaces the provider chain.
    #[inline]
    pub fn with_introspector(self, introspector: Introspector) -> Self {
        Self {
            introspector,
            ..self
        }
    }

    /// Replaces every flag.
    #[inline]
    pub fn with_flags(self, flags: MapperFlags) -> Self {
        Self { flags, ..self }
    }

    #[inline]
    pub fn enable(self, flags: MapperFlags) -> Self {
        Self {
            flags: self.flags | flags,
            ..self
        }
    }

    #[inline]
    pub fn disable(self, flags: MapperFlags) -> Self {
        Self {
            flags: self.flags - flags,
            ..self
        }
    }

    /// Returns `true` if every flag in `flags` is set.
    #[inline]
    pub fn is_enabled(&self, flags: MapperFlags) -> bool {
        self.flags.contains(flags)
    }

    #[inline]
    pub fn flags(&self) -> MapperFlags {
        self.flags
    }

    /// The configured chain, regardless of [`MapperFlags::USE_ANNOTATIONS`].
    #[inline]
    pub fn introspector(&self) -> &Introspector {
        &self.introspector
    }

    /// The provider to query.
    ///
    /// With [`MapperFlags::USE_ANNOTATIONS`] unset this is [`NopProvider`].
    #[inline]
    pub fn metadata_provider(&self) -> &dyn MetadataProvider {
        if self.is_enabled(MapperFlags::USE_ANNOTATIONS) {
            &self.introspector
        } else {
            NopProvider::INSTANCE
        }
    }

    #[inline]
    pub fn lattice(&self) -> &dyn TypeLattice {
        &*self.lattice
    }

    /// A refiner over [`Self::metadata_provider`] and [`Self::lattice`].
    #[inline]
    pub fn type_refiner(&self) -> TypeRefiner<'_> {
        TypeRefiner::new(self.metadata_provider(), self.lattice())
    }

    /// Widens `base` according to the serialization overrides of `entity`.
    pub fn refine_serialization_type(
        &self,
        entity: &dyn Annotated,
        base: &ValueType,
    ) -> Result<ValueType, RefineError> {
        self.type_refiner().refine_for_serialization(entity, base)
    }

    /// Narrows `base` according to the deserialization overrides of `entity`.
    pub fn refine_deserialization_type(
        &self,
        entity: &dyn Annotated,
        base: &ValueType,
    ) -> Result<ValueType, RefineError> {
        self.type_refiner().refine_for_deserialization(entity, base)
    }

    /// Sort order for properties of `entity` without explicit order.
    pub fn should_sort_properties_alphabetically(&self, entity: &dyn Annotated) -> bool {
        self.metadata_provider()
            .find_serialization_sort_alphabetically(entity)
            .unwrap_or(self.is_enabled(MapperFlags::SORT_PROPERTIES_ALPHABETICALLY))
    }

    /// Whether serializers for `entity` are selected by declared type.
    pub fn uses_static_typing(&self, entity: &dyn Annotated) -> bool {
        match self.metadata_provider().find_serialization_typing(entity) {
            Some(Typing::Static) => true,
            Some(Typing::Dynamic) => false,
            Some(Typing::DefaultTyping) | None => self.is_enabled(MapperFlags::USE_STATIC_TYPING),
        }
    }
}

impl Default for MapperConfig {
    /// An empty [`ClassHierarchy`] with the standard annotations.
    fn default() -> Self {
        Self::new(Arc::new(ClassHierarchy::new()))
    }
}

impl fmt::Debug for MapperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperConfig")
            .field("introspector", &self.introspector)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::{MapperConfig, MapperFlags};
    use crate::annotated::{AnnotatedClass, AnnotatedMember};
    use crate::annotation::{Property, SerializeOptions};
    use crate::ty::{Class, ClassHierarchy, ValueType};
    use crate::value::Typing;
    use crate::{Introspector, NopProvider};

    struct Zoo;
    struct Animal;
    struct Dog;

    fn config() -> MapperConfig {
        let hierarchy = ClassHierarchy::new().with(Class::of::<Dog>(), Class::of::<Animal>());
        MapperConfig::new(Arc::new(hierarchy))
    }

    #[test]
    fn default_flags() {
        let config = MapperConfig::default();
        assert!(config.is_enabled(MapperFlags::USE_ANNOTATIONS));
        assert!(!config.is_enabled(MapperFlags::SORT_PROPERTIES_ALPHABETICALLY));
        assert!(!config.is_enabled(MapperFlags::USE_STATIC_TYPING));
    }

    #[test]
    fn disabled_annotations_answer_nothing() {
        let member = AnnotatedMember::field(Class::of::<Zoo>(), "star", ValueType::of::<Dog>())
            .with_annotation(Property::named("headliner"))
            .with_annotation(SerializeOptions::new().value_as(Class::of::<Animal>()));

        let config = config();
        assert!(config.metadata_provider().find_name_for_serialization(&member).is_some());
        let widened = config.refine_serialization_type(&member, &ValueType::of::<Dog>());
        assert_eq!(widened, Ok(ValueType::of::<Animal>()));

        let config = config.disable(MapperFlags::USE_ANNOTATIONS);
        assert!(config.metadata_provider().find_name_for_serialization(&member).is_none());
        assert_eq!(config.metadata_provider().name(), "nop");
        let same = config.refine_serialization_type(&member, &ValueType::of::<Dog>());
        assert_eq!(same, Ok(ValueType::of::<Dog>()));

        // The chain itself is kept.
        assert_eq!(config.introspector().all_providers()[0].name(), "std");
    }

    #[test]
    fn static_typing_resolution() {
        let field = || AnnotatedMember::field(Class::of::<Zoo>(), "a", ValueType::of::<Animal>());
        let plain = field();
        let dynamic = field().with_annotation(SerializeOptions::new().typing(Typing::Dynamic));
        let deferred = field().with_annotation(SerializeOptions::new().typing(Typing::DefaultTyping));

        let config = config().enable(MapperFlags::USE_STATIC_TYPING);
        assert!(config.uses_static_typing(&plain));
        assert!(config.uses_static_typing(&deferred));
        assert!(!config.uses_static_typing(&dynamic));

        let config = config.with_flags(MapperFlags::empty());
        assert!(!config.uses_static_typing(&deferred));
    }

    #[test]
    fn custom_introspector() {
        let config = config().with_introspector(Introspector::single(NopProvider));
        let class = AnnotatedClass::of::<Zoo>().with_annotation(crate::annotation::PropertyOrder::alphabetic());
        assert!(!config.should_sort_properties_alphabetically(&class));
    }
}
