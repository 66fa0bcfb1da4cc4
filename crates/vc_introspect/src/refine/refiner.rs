use core::fmt;

use crate::annotated::Annotated;
use crate::provider::MetadataProvider;
use crate::refine::{RefineError, RefineTarget};
use crate::ty::{Class, TypeLattice, ValueType};

// -----------------------------------------------------------------------------
// Direction

/// Which way a type is refined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Widen toward super-types.
    Serialization,
    /// Narrow toward sub-types.
    Deserialization,
}

impl Direction {
    /// `"widen"` or `"narrow"`.
    #[inline]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Serialization => "widen",
            Self::Deserialization => "narrow",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization => f.pad("serialization"),
            Self::Deserialization => f.pad("deserialization"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeRefiner

/// Applies annotation type overrides to a declared type.
///
/// Refinement runs in three steps, each only when the provider has an
/// override whose class differs from the current one:
///
/// 1. the whole type;
/// 2. the key type, if the (possibly refined) type is map-like;
/// 3. the content type, if the type has content.
///
/// Serialization widens, deserialization narrows. A rejected override is
/// returned as a [`RefineError`], never ignored.
///
/// # Examples
///
/// ```
/// use vc_introspect::{MetadataProvider, TypeRefiner};
/// use vc_introspect::annotated::{Annotated, AnnotatedMember};
/// use vc_introspect::ty::{Class, ClassHierarchy, ValueType};
///
/// struct Shape;
/// struct Drawable;
/// struct Canvas;
///
/// struct AsDrawable;
///
/// impl MetadataProvider for AsDrawable {
///     fn find_serialization_type(&self, _: &dyn Annotated) -> Option<Class> {
///         Some(Class::of::<Drawable>())
///     }
/// }
///
/// let hierarchy = ClassHierarchy::new();
/// let refiner = TypeRefiner::new(&AsDrawable, &hierarchy);
///
/// let member = AnnotatedMember::field(Class::of::<Canvas>(), "shape", ValueType::of::<Shape>());
/// let error = refiner
///     .refine_for_serialization(&member, &ValueType::of::<Shape>())
///     .unwrap_err();
///
/// assert_eq!(error.entity(), "shape");
/// assert!(error.to_string().starts_with(
///     "failed to widen type `Shape` with annotation (value `Drawable`), from `shape`"
/// ));
/// ```
#[derive(Clone, Copy)]
pub struct TypeRefiner<'a> {
    provider: &'a dyn MetadataProvider,
    lattice: &'a dyn TypeLattice,
}

impl<'a> TypeRefiner<'a> {
    #[inline]
    pub const fn new(provider: &'a dyn MetadataProvider, lattice: &'a dyn TypeLattice) -> Self {
        Self { provider, lattice }
    }

    /// Widens `base` according to the serialization overrides of `entity`.
    #[inline]
    pub fn refine_for_serialization(
        &self,
        entity: &dyn Annotated,
        base: &ValueType,
    ) -> Result<ValueType, RefineError> {
        self.refine(Direction::Serialization, entity, base)
    }

    /// Narrows `base` according to the deserialization overrides of `entity`.
    #[inline]
    pub fn refine_for_deserialization(
        &self,
        entity: &dyn Annotated,
        base: &ValueType,
    ) -> Result<ValueType, RefineError> {
        self.refine(Direction::Deserialization, entity, base)
    }

    /// Refines `base` in the given direction.
    pub fn refine(
        &self,
        direction: Direction,
        entity: &dyn Annotated,
        base: &ValueType,
    ) -> Result<ValueType, RefineError> {
        let provider = self.provider;
        let mut ty = base.clone();

        let requested = match direction {
            Direction::Serialization => provider.find_serialization_type(entity),
            Direction::Deserialization => provider.find_deserialization_type(entity, &ty),
        };
        if let Some(class) = requested.filter(|class| !ty.has_raw_class(*class)) {
            ty = self.apply(direction, RefineTarget::Type, entity, &ty, class)?;
        }

        // Key and content are looked up on the refined type.
        if ty.is_map_like() {
            let requested = ty.key_type().and_then(|key| {
                let class = match direction {
                    Direction::Serialization => provider.find_serialization_key_type(entity, key),
                    Direction::Deserialization => provider.find_deserialization_key_type(entity, key),
                };
                class.filter(|class| !key.has_raw_class(*class))
            });
            if let Some(class) = requested {
                ty = self.apply(direction, RefineTarget::KeyType, entity, &ty, class)?;
            }
        }

        let requested = ty.content_type().and_then(|content| {
            let class = match direction {
                Direction::Serialization => provider.find_serialization_content_type(entity, content),
                Direction::Deserialization => provider.find_deserialization_content_type(entity, content),
            };
            class.filter(|class| !content.has_raw_class(*class))
        });
        if let Some(class) = requested {
            ty = self.apply(direction, RefineTarget::ContentType, entity, &ty, class)?;
        }

        Ok(ty)
    }

    fn apply(
        &self,
        direction: Direction,
        target: RefineTarget,
        entity: &dyn Annotated,
        ty: &ValueType,
        class: Class,
    ) -> Result<ValueType, RefineError> {
        let lattice = self.lattice;
        let result = match (direction, target) {
            (Direction::Serialization, RefineTarget::Type) => lattice.widen_by(ty, class),
            (Direction::Serialization, RefineTarget::KeyType) => lattice.widen_key(ty, class),
            (Direction::Serialization, RefineTarget::ContentType) => lattice.widen_content_by(ty, class),
            (Direction::Deserialization, RefineTarget::Type) => lattice.specialize_by(ty, class),
            (Direction::Deserialization, RefineTarget::KeyType) => lattice.narrow_key(ty, class),
            (Direction::Deserialization, RefineTarget::ContentType) => lattice.narrow_content_by(ty, class),
        };

        match result {
            Ok(refined) => {
                log::trace!(
                    "{} {target} `{ty}` of `{}` to `{refined}`",
                    direction.verb(),
                    entity.name(),
                );
                Ok(refined)
            }
            Err(reason) => {
                let error = RefineError::new(entity.name(), direction, target, class, ty, reason);
                log::debug!("{error}");
                Err(error)
            }
        }
    }
}

impl fmt::Debug for TypeRefiner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRefiner")
            .field("provider", &self.provider.name())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::{Direction, TypeRefiner};
    use crate::annotated::{Annotated, AnnotatedMember};
    use crate::refine::RefineTarget;
    use crate::ty::{Class, ClassHierarchy, LatticeError, ValueType};
    use crate::{MetadataProvider, NopProvider};

    struct Zoo;
    struct Animal;
    struct Dog;
    struct Shape;
    struct Drawable;
    struct Robot;

    /// Answers the same overrides in both directions.
    #[derive(Default)]
    struct Overrides {
        whole: Option<Class>,
        key: Option<Class>,
        content: Option<Class>,
    }

    impl MetadataProvider for Overrides {
        fn find_serialization_type(&self, _: &dyn Annotated) -> Option<Class> {
            self.whole
        }

        fn find_serialization_key_type(&self, _: &dyn Annotated, _: &ValueType) -> Option<Class> {
            self.key
        }

        fn find_serialization_content_type(&self, _: &dyn Annotated, _: &ValueType) -> Option<Class> {
            self.content
        }

        fn find_deserialization_type(&self, _: &dyn Annotated, _: &ValueType) -> Option<Class> {
            self.whole
        }

        fn find_deserialization_key_type(&self, _: &dyn Annotated, _: &ValueType) -> Option<Class> {
            self.key
        }

        fn find_deserialization_content_type(&self, _: &dyn Annotated, _: &ValueType) -> Option<Class> {
            self.content
        }
    }

    fn hierarchy() -> ClassHierarchy {
        ClassHierarchy::new()
            .with(Class::of::<Dog>(), Class::of::<Animal>())
            .with(Class::of::<String>(), Class::of::<str>())
    }

    fn animal_map() -> ValueType {
        ValueType::map(
            Class::of::<BTreeMap<String, Animal>>(),
            ValueType::of::<String>(),
            ValueType::of::<Animal>(),
        )
    }

    fn member(ty: &ValueType) -> AnnotatedMember {
        AnnotatedMember::field(Class::of::<Zoo>(), "animals", ty.clone())
    }

    #[test]
    fn identity_without_overrides() {
        let lattice = hierarchy();
        let refiner = TypeRefiner::new(&NopProvider, &lattice);

        let types: Vec<ValueType> = alloc::vec![
            ValueType::of::<Animal>(),
            animal_map(),
            ValueType::collection(Class::of::<Vec<Animal>>(), ValueType::of::<Animal>()),
        ];
        for ty in &types {
            assert_eq!(refiner.refine_for_serialization(&member(ty), ty).as_ref(), Ok(ty));
            assert_eq!(refiner.refine_for_deserialization(&member(ty), ty).as_ref(), Ok(ty));
        }
    }

    #[test]
    fn same_class_override_is_skipped() {
        // An empty hierarchy would reject any real change.
        let lattice = ClassHierarchy::new();
        let provider = Overrides {
            whole: Some(Class::of::<Animal>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);

        let ty = ValueType::of::<Animal>();
        assert_eq!(refiner.refine_for_deserialization(&member(&ty), &ty), Ok(ty));
    }

    #[test]
    fn unrelated_class_fails_both_ways() {
        let lattice = hierarchy();
        let provider = Overrides {
            whole: Some(Class::of::<Robot>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = ValueType::of::<Animal>();

        let error = refiner.refine_for_serialization(&member(&ty), &ty).unwrap_err();
        assert_eq!(error.direction(), Direction::Serialization);
        assert_eq!(error.requested(), Class::of::<Robot>());
        assert!(matches!(error.lattice_error(), LatticeError::NotSuperType { .. }));

        let error = refiner.refine_for_deserialization(&member(&ty), &ty).unwrap_err();
        assert_eq!(error.direction(), Direction::Deserialization);
        assert!(matches!(error.lattice_error(), LatticeError::NotSubType { .. }));
    }

    #[test]
    fn map_content_narrowed() {
        let lattice = hierarchy();
        let provider = Overrides {
            content: Some(Class::of::<Dog>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = animal_map();

        let refined = refiner.refine_for_deserialization(&member(&ty), &ty).unwrap();
        assert_eq!(refined.raw_class(), ty.raw_class());
        assert_eq!(refined.key_type(), Some(&ValueType::of::<String>()));
        assert_eq!(refined.content_type(), Some(&ValueType::of::<Dog>()));

        // Dog is not a super-type of Animal.
        let error = refiner.refine_for_serialization(&member(&ty), &ty).unwrap_err();
        assert_eq!(error.target(), RefineTarget::ContentType);
        assert!(error.to_string().starts_with("failed to widen value type of `BTreeMap<String, Animal>`"));
    }

    #[test]
    fn key_override_leaves_content() {
        let lattice = hierarchy();
        let provider = Overrides {
            key: Some(Class::of::<str>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = animal_map();

        let refined = refiner.refine_for_serialization(&member(&ty), &ty).unwrap();
        assert_eq!(refined.raw_class(), ty.raw_class());
        assert_eq!(refined.key_type().map(ValueType::raw_class), Some(Class::of::<str>()));
        assert_eq!(refined.content_type(), ty.content_type());

        let error = refiner.refine_for_deserialization(&member(&ty), &ty).unwrap_err();
        assert_eq!(error.target(), RefineTarget::KeyType);
    }

    #[test]
    fn key_override_on_non_map_is_not_asked() {
        let lattice = ClassHierarchy::new();
        let provider = Overrides {
            key: Some(Class::of::<Robot>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = ValueType::collection(Class::of::<Vec<Animal>>(), ValueType::of::<Animal>());

        assert_eq!(refiner.refine_for_serialization(&member(&ty), &ty).as_ref(), Ok(&ty));
    }

    #[test]
    fn reference_content_narrowed() {
        let lattice = hierarchy();
        let provider = Overrides {
            content: Some(Class::of::<Dog>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = ValueType::reference(Class::of::<Option<Animal>>(), ValueType::of::<Animal>());

        let refined = refiner.refine_for_deserialization(&member(&ty), &ty).unwrap();
        assert!(refined.is_reference());
        assert_eq!(refined.raw_class(), Class::of::<Option<Animal>>());
        assert_eq!(refined.content_type(), Some(&ValueType::of::<Dog>()));

        let error = refiner.refine_for_serialization(&member(&ty), &ty).unwrap_err();
        assert_eq!(error.target(), RefineTarget::ContentType);
        assert!(matches!(error.lattice_error(), LatticeError::NotSuperType { .. }));
    }

    #[test]
    fn array_content_widened() {
        let lattice = hierarchy();
        let provider = Overrides {
            content: Some(Class::of::<Animal>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = ValueType::array(Class::of::<[Dog]>(), ValueType::of::<Dog>());

        let refined = refiner.refine_for_serialization(&member(&ty), &ty).unwrap();
        assert_eq!(refined.raw_class(), Class::of::<[Dog]>());
        assert_eq!(refined.content_type(), Some(&ValueType::of::<Animal>()));

        let error = refiner.refine_for_deserialization(&member(&ty), &ty).unwrap_err();
        assert_eq!(error.target(), RefineTarget::ContentType);
        assert_eq!(error.base(), &ty);
        assert!(matches!(error.lattice_error(), LatticeError::NotSubType { .. }));
    }

    #[test]
    fn unrelated_supertype_names_everything() {
        let lattice = hierarchy();
        let provider = Overrides {
            whole: Some(Class::of::<Drawable>()),
            ..Overrides::default()
        };
        let refiner = TypeRefiner::new(&provider, &lattice);
        let ty = ValueType::of::<Shape>();
        let entity = AnnotatedMember::field(Class::of::<Zoo>(), "outline", ty.clone());

        let error = refiner.refine_for_serialization(&entity, &ty).unwrap_err();
        let message = error.to_string();
        assert_eq!(
            message,
            "failed to widen type `Shape` with annotation (value `Drawable`), from `outline`: \
             class `Drawable` is not a super-type of `Shape`"
        );
        assert_eq!(error.entity(), "outline");
        assert_eq!(error.base(), &ty);

        // The lattice reason is already in the message.
        assert!(core::error::Error::source(&error).is_none());
    }
}
