use crate::annotated::{Annotated, AnnotatedKind, Annotations, impl_annotation_fns};
use crate::ty::Class;

// -----------------------------------------------------------------------------
// AnnotatedClass

/// A class together with its class-level annotations.
///
/// # Examples
///
/// ```
/// use vc_introspect::annotated::{Annotated, AnnotatedClass};
///
/// struct Strict;
/// struct Order;
///
/// let class = AnnotatedClass::of::<Order>().with_annotation(Strict);
///
/// assert_eq!(class.name(), "Order");
/// assert!(class.has_annotation::<Strict>());
/// ```
#[derive(Debug)]
pub struct AnnotatedClass {
    class: Class,
    annotations: Annotations,
}

impl AnnotatedClass {
    impl_annotation_fns!();

    /// Creates an unannotated class.
    #[inline]
    pub const fn new(class: Class) -> Self {
        Self {
            class,
            annotations: Annotations::new(),
        }
    }

    /// Creates an unannotated class for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(Class::of::<T>())
    }

    /// Adds an annotation, overwriting one of the same type.
    #[inline]
    pub fn with_annotation<A: core::any::Any + Send + Sync>(mut self, value: A) -> Self {
        self.annotations.insert(value);
        self
    }

    /// Replaces stored annotations (overwrite, do not merge).
    #[inline]
    pub fn with_annotations(self, annotations: Annotations) -> Self {
        Self {
            annotations,
            ..self
        }
    }

    /// Returns the class.
    #[inline]
    pub const fn class(&self) -> Class {
        self.class
    }
}

impl Annotated for AnnotatedClass {
    #[inline]
    fn name(&self) -> &str {
        self.class.name()
    }

    #[inline]
    fn kind(&self) -> AnnotatedKind {
        AnnotatedKind::Class
    }

    #[inline]
    fn raw_class(&self) -> Class {
        self.class
    }

    #[inline]
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}
