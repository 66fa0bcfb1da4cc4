use alloc::vec::Vec;

use foldhash::fast::FixedState;
use hashbrown::{HashMap, HashSet};

use crate::ty::{Class, LatticeError, TypeLattice, ValueType};

/// A fixed hash seed, hierarchy lookups do not need DoS resistance.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

// -----------------------------------------------------------------------------
// ClassHierarchy

/// An in-memory [`TypeLattice`] built from declared sub/super-class edges.
///
/// The relation is reflexive and transitive, and [`Class::any`] is a
/// super-type of every class. Cyclic declarations are tolerated.
///
/// # Examples
///
/// ```
/// use vc_introspect::ty::{Class, ClassHierarchy, TypeLattice, ValueType};
///
/// struct Animal;
/// struct Dog;
/// struct Stone;
///
/// let mut hierarchy = ClassHierarchy::new();
/// hierarchy.insert(Class::of::<Dog>(), Class::of::<Animal>());
///
/// let dog = ValueType::of::<Dog>();
/// let animal = hierarchy.widen_by(&dog, Class::of::<Animal>()).unwrap();
/// assert_eq!(animal, ValueType::of::<Animal>());
///
/// assert!(hierarchy.widen_by(&dog, Class::of::<Stone>()).is_err());
/// ```
#[derive(Clone)]
pub struct ClassHierarchy {
    supertypes: HashMap<Class, Vec<Class>, FixedState>,
}

impl Default for ClassHierarchy {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ClassHierarchy {
    /// Creates a hierarchy without any declared edges.
    #[inline]
    pub const fn new() -> Self {
        Self {
            supertypes: HashMap::with_hasher(FIXED_HASH_STATE),
        }
    }

    /// Declares `super_class` as a direct super-type of `sub_class`.
    ///
    /// Returns `false` if the edge was already declared.
    pub fn insert(&mut self, sub_class: Class, super_class: Class) -> bool {
        let supers = self.supertypes.entry(sub_class).or_default();
        if supers.contains(&super_class) {
            false
        } else {
            supers.push(super_class);
            true
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, sub_class: Class, super_class: Class) -> Self {
        self.insert(sub_class, super_class);
        self
    }

    /// Returns the direct super-types declared for `class`.
    pub fn direct_supertypes(&self, class: Class) -> &[Class] {
        match self.supertypes.get(&class) {
            Some(supers) => supers,
            None => &[],
        }
    }

    /// Returns `true` if `sub_class` is `super_class` or one of its sub-types.
    pub fn is_subtype(&self, sub_class: Class, super_class: Class) -> bool {
        if sub_class == super_class || super_class == Class::any() {
            return true;
        }

        let mut visited: HashSet<Class, FixedState> = HashSet::with_hasher(FIXED_HASH_STATE);
        let mut pending: Vec<Class> = Vec::from(self.direct_supertypes(sub_class));

        while let Some(class) = pending.pop() {
            if class == super_class {
                return true;
            }
            if visited.insert(class) {
                pending.extend_from_slice(self.direct_supertypes(class));
            }
        }
        false
    }

    /// Collects the edges declared with [`subclass_of!`](crate::subclass_of).
    ///
    /// Returns the number of new edges.
    ///
    /// ## Feature Dependency
    ///
    /// Requires the `auto_register` feature. When disabled, it does nothing
    /// and returns `0`.
    pub fn auto_register(&mut self) -> usize {
        #[cfg(feature = "auto_register")]
        {
            let mut count = 0;
            for decl in inventory::iter::<ClassDecl> {
                let sub_class = (decl.sub_class)();
                for super_class in decl.super_classes {
                    if self.insert(sub_class, super_class()) {
                        count += 1;
                    }
                }
            }
            count
        }
        #[cfg(not(feature = "auto_register"))]
        {
            0
        }
    }
}

impl TypeLattice for ClassHierarchy {
    fn widen_by(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError> {
        let raw = base.raw_class();
        if raw == class {
            Ok(base.clone())
        } else if self.is_subtype(raw, class) {
            Ok(base.with_raw_class(class))
        } else {
            Err(LatticeError::NotSuperType { base: raw, class })
        }
    }

    fn specialize_by(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError> {
        let raw = base.raw_class();
        if raw == class {
            Ok(base.clone())
        } else if self.is_subtype(class, raw) {
            Ok(base.with_raw_class(class))
        } else {
            Err(LatticeError::NotSubType { base: raw, class })
        }
    }

    fn widen_key(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError> {
        let key = base
            .key_type()
            .ok_or_else(|| LatticeError::NoKeyType(base.clone()))?;
        let key = self.widen_by(key, class)?;
        base.with_key_type(key)
            .ok_or_else(|| LatticeError::NoKeyType(base.clone()))
    }

    fn narrow_key(&self, base: &ValueType, class: Class) -> Result<ValueType, LatticeError> {
        let key = base
            .key_type()
            .ok_or_else(|| LatticeError::NoKeyType(base.clone()))?;
        let key = self.specialize_by(key, class)?;
        base.with_key_type(key)
            .ok_or_else(|| LatticeError::NoKeyType(base.clone()))
    }

    fn widen_content_by(
        &self,
        base: &ValueType,
        class: Class,
    ) -> Result<ValueType, LatticeError> {
        let content = base
            .content_type()
            .ok_or_else(|| LatticeError::NoContentType(base.clone()))?;
        let content = self.widen_by(content, class)?;
        base.with_content_type(content)
            .ok_or_else(|| LatticeError::NoContentType(base.clone()))
    }

    fn narrow_content_by(
        &self,
        base: &ValueType,
        class: Class,
    ) -> Result<ValueType, LatticeError> {
        let content = base
            .content_type()
            .ok_or_else(|| LatticeError::NoContentType(base.clone()))?;
        let content = self.specialize_by(content, class)?;
        base.with_content_type(content)
            .ok_or_else(|| LatticeError::NoContentType(base.clone()))
    }
}

impl core::fmt::Debug for ClassHierarchy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.supertypes.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// ClassDecl

/// A static sub/super-class declaration, see [`subclass_of!`](crate::subclass_of).
///
/// Classes are produced lazily because [`Class::of`] is not a const function.
#[derive(Clone, Copy)]
pub struct ClassDecl {
    sub_class: fn() -> Class,
    super_classes: &'static [fn() -> Class],
}

impl ClassDecl {
    /// Creates a declaration, used by [`subclass_of!`](crate::subclass_of).
    #[inline]
    pub const fn new(sub_class: fn() -> Class, super_classes: &'static [fn() -> Class]) -> Self {
        Self {
            sub_class,
            super_classes,
        }
    }
}

#[cfg(feature = "auto_register")]
inventory::collect!(ClassDecl);

/// Declares direct super-types of a class for [`ClassHierarchy::auto_register`].
///
/// Requires the `auto_register` feature.
///
/// # Examples
///
/// ```no_run
/// use vc_introspect::subclass_of;
/// use vc_introspect::ty::{Class, ClassHierarchy};
///
/// trait Pet {}
/// struct Animal;
/// struct Dog;
///
/// subclass_of!(Dog: Animal, dyn Pet);
///
/// let mut hierarchy = ClassHierarchy::new();
/// hierarchy.auto_register();
/// assert!(hierarchy.is_subtype(Class::of::<Dog>(), Class::of::<dyn Pet>()));
/// ```
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! subclass_of {
    ($sub:ty : $($super:ty),+ $(,)?) => {
        const _: () = {
            const SUPER_CLASSES: &[fn() -> $crate::ty::Class] =
                &[$($crate::ty::Class::of::<$super>),+];

            $crate::__macro_exports::inventory::submit! {
                $crate::ty::ClassDecl::new($crate::ty::Class::of::<$sub>, SUPER_CLASSES)
            }
        };
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::ClassHierarchy;
    use crate::ty::{Class, LatticeError, TypeLattice, ValueType};

    trait Pet {}
    struct Animal;
    struct Dog;
    struct Puppy;
    struct Stone;

    fn hierarchy() -> ClassHierarchy {
        ClassHierarchy::new()
            .with(Class::of::<Dog>(), Class::of::<Animal>())
            .with(Class::of::<Dog>(), Class::of::<dyn Pet>())
            .with(Class::of::<Puppy>(), Class::of::<Dog>())
    }

    #[test]
    fn subtype_relation() {
        let h = hierarchy();
        assert!(h.is_subtype(Class::of::<Puppy>(), Class::of::<Puppy>()));
        assert!(h.is_subtype(Class::of::<Puppy>(), Class::of::<Animal>()));
        assert!(h.is_subtype(Class::of::<Puppy>(), Class::of::<dyn Pet>()));
        assert!(h.is_subtype(Class::of::<Stone>(), Class::any()));
        assert!(!h.is_subtype(Class::of::<Animal>(), Class::of::<Dog>()));
        assert!(!h.is_subtype(Class::of::<Stone>(), Class::of::<Animal>()));
    }

    #[test]
    fn duplicate_and_cyclic_edges() {
        let mut h = ClassHierarchy::new();
        assert!(h.insert(Class::of::<Dog>(), Class::of::<Animal>()));
        assert!(!h.insert(Class::of::<Dog>(), Class::of::<Animal>()));
        assert!(h.insert(Class::of::<Animal>(), Class::of::<Dog>()));

        assert!(h.is_subtype(Class::of::<Animal>(), Class::of::<Dog>()));
        assert!(!h.is_subtype(Class::of::<Animal>(), Class::of::<Stone>()));
    }

    #[test]
    fn widen_and_specialize() {
        let h = hierarchy();
        let dog = ValueType::of::<Dog>();

        let widened = h.widen_by(&dog, Class::of::<Animal>()).unwrap();
        assert_eq!(widened, ValueType::of::<Animal>());

        let narrowed = h.specialize_by(&widened, Class::of::<Puppy>()).unwrap();
        assert_eq!(narrowed, ValueType::of::<Puppy>());

        assert_eq!(
            h.widen_by(&dog, Class::of::<Puppy>()),
            Err(LatticeError::NotSuperType {
                base: Class::of::<Dog>(),
                class: Class::of::<Puppy>(),
            })
        );
        assert_eq!(
            h.specialize_by(&dog, Class::of::<Animal>()),
            Err(LatticeError::NotSubType {
                base: Class::of::<Dog>(),
                class: Class::of::<Animal>(),
            })
        );
    }

    #[test]
    fn key_and_content() {
        let h = hierarchy().with(Class::of::<String>(), Class::of::<str>());
        let map = ValueType::map(
            Class::of::<BTreeMap<String, Animal>>(),
            ValueType::of::<String>(),
            ValueType::of::<Animal>(),
        );

        let narrowed = h.narrow_content_by(&map, Class::of::<Dog>()).unwrap();
        assert_eq!(narrowed.content_type(), Some(&ValueType::of::<Dog>()));
        assert_eq!(narrowed.key_type(), map.key_type());

        let widened = h.widen_key(&map, Class::of::<str>()).unwrap();
        assert_eq!(widened.key_type(), Some(&ValueType::of::<str>()));
        assert_eq!(widened.content_type(), map.content_type());

        let list = ValueType::collection(Class::of::<Vec<Dog>>(), ValueType::of::<Dog>());
        assert!(matches!(
            h.narrow_key(&list, Class::of::<Dog>()),
            Err(LatticeError::NoKeyType(_))
        ));
        assert!(matches!(
            h.widen_content_by(&ValueType::of::<Dog>(), Class::of::<Animal>()),
            Err(LatticeError::NoContentType(_))
        ));
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register() {
        crate::subclass_of!(Puppy: Dog, dyn Pet);

        let mut h = ClassHierarchy::new();
        assert!(h.auto_register() >= 2);
        assert!(h.is_subtype(Class::of::<Puppy>(), Class::of::<dyn Pet>()));
        assert_eq!(h.auto_register(), 0);
    }
}
