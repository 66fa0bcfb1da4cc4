use alloc::boxed::Box;
use core::any::{Any, TypeId};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0xBB67AE8584CAA73B);

// -----------------------------------------------------------------------------
// Annotations

/// The annotations declared on a class or member.
///
/// Annotations are stored by their [`TypeId`].
/// Because of this, there can only be one annotation per type.
///
/// # Example
///
/// ```
/// use vc_introspect::annotated::Annotations;
///
/// struct Rename(&'static str);
/// struct Skip;
///
/// let annotations = Annotations::new().with(Rename("id"));
///
/// assert!(annotations.contains::<Rename>());
/// assert!(!annotations.contains::<Skip>());
/// assert_eq!(annotations.get::<Rename>().unwrap().0, "id");
/// ```
#[derive(Default)]
pub struct Annotations {
    annotations: HashMap<TypeId, Box<dyn Any + Send + Sync>, FixedState>,
}

impl Annotations {
    /// Creates an empty [`Annotations`].
    ///
    /// Equivalent to [`Default`], but this is const function.
    #[inline]
    pub const fn new() -> Self {
        Self {
            annotations: HashMap::with_hasher(FIXED_HASH_STATE),
        }
    }

    /// Adds an annotation.
    ///
    /// Annotations are keyed by their concrete type; later insertions for the
    /// same type overwrite earlier values.
    #[inline]
    pub fn with<A: Any + Send + Sync>(mut self, value: A) -> Self {
        self.insert(value);
        self
    }

    /// Inserts an annotation, returning `true` if one of the same type was replaced.
    #[inline]
    pub fn insert<A: Any + Send + Sync>(&mut self, value: A) -> bool {
        self.annotations
            .insert(TypeId::of::<A>(), Box::new(value))
            .is_some()
    }

    /// Returns `true` if an annotation of type `A` is present.
    #[inline]
    pub fn contains<A: Any>(&self) -> bool {
        self.contains_by_id(TypeId::of::<A>())
    }

    /// Returns `true` if it contains the annotation with the given `TypeId`.
    #[inline]
    pub fn contains_by_id(&self, id: TypeId) -> bool {
        self.annotations.contains_key(&id)
    }

    /// Returns the annotation of type `A`, if present.
    #[inline]
    pub fn get<A: Any>(&self) -> Option<&A> {
        self.get_by_id(TypeId::of::<A>())
            .and_then(<dyn Any>::downcast_ref)
    }

    /// Returns the annotation with the given `TypeId`, if present.
    #[inline]
    pub fn get_by_id(&self, id: TypeId) -> Option<&dyn Any> {
        self.annotations.get(&id).map(|value| &**value as &dyn Any)
    }

    /// Returns an iterator over the `TypeId`s of stored annotations.
    #[inline]
    pub fn ids(&self) -> impl ExactSizeIterator<Item = TypeId> + '_ {
        self.annotations.keys().copied()
    }

    /// Returns the number of stored annotations.
    #[inline]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Returns `true` if no annotations are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl core::fmt::Debug for Annotations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.annotations.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::Annotations;

    #[derive(Debug, PartialEq)]
    struct Rename(&'static str);
    struct Skip;

    #[test]
    fn overwrite_same_type() {
        let mut annotations = Annotations::new().with(Rename("a"));
        assert!(annotations.insert(Rename("b")));
        assert!(!annotations.insert(Skip));

        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations.get::<Rename>(), Some(&Rename("b")));
        assert!(annotations.contains_by_id(TypeId::of::<Skip>()));
    }

    #[test]
    fn empty() {
        let annotations = Annotations::default();
        assert!(annotations.is_empty());
        assert!(annotations.get::<Rename>().is_none());
        assert_eq!(annotations.ids().len(), 0);
    }
}
