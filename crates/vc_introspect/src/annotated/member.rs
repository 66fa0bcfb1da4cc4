use alloc::borrow::Cow;

use crate::annotated::{Annotated, AnnotatedKind, Annotations, impl_annotation_fns};
use crate::ty::{Class, ValueType};

// -----------------------------------------------------------------------------
// MemberKind

/// The kind of an [`AnnotatedMember`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    /// A method; its type is the return type of getters or the value type of setters.
    Method,
    Constructor,
    Parameter { index: usize },
}

// -----------------------------------------------------------------------------
// AnnotatedMember

/// A field, method, constructor or constructor parameter with its annotations.
///
/// # Examples
///
/// ```
/// use vc_introspect::annotated::{Annotated, AnnotatedKind, AnnotatedMember};
/// use vc_introspect::ty::{Class, ValueType};
///
/// struct User;
///
/// let field = AnnotatedMember::field(Class::of::<User>(), "name", ValueType::of::<String>());
///
/// assert_eq!(field.name(), "name");
/// assert_eq!(field.kind(), AnnotatedKind::Field);
/// assert_eq!(field.raw_class(), Class::of::<String>());
/// ```
#[derive(Debug)]
pub struct AnnotatedMember {
    kind: MemberKind,
    name: Cow<'static, str>,
    declaring_class: Class,
    member_type: ValueType,
    annotations: Annotations,
}

impl AnnotatedMember {
    impl_annotation_fns!();

    /// Creates an unannotated member.
    pub fn new(
        kind: MemberKind,
        declaring_class: Class,
        name: impl Into<Cow<'static, str>>,
        member_type: ValueType,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            declaring_class,
            member_type,
            annotations: Annotations::new(),
        }
    }

    /// Creates an unannotated field.
    #[inline]
    pub fn field(
        declaring_class: Class,
        name: impl Into<Cow<'static, str>>,
        member_type: ValueType,
    ) -> Self {
        Self::new(MemberKind::Field, declaring_class, name, member_type)
    }

    /// Creates an unannotated method.
    #[inline]
    pub fn method(
        declaring_class: Class,
        name: impl Into<Cow<'static, str>>,
        member_type: ValueType,
    ) -> Self {
        Self::new(MemberKind::Method, declaring_class, name, member_type)
    }

    /// Creates an unannotated constructor, named and typed after its class.
    #[inline]
    pub fn constructor(declaring_class: Class) -> Self {
        Self::new(
            MemberKind::Constructor,
            declaring_class,
            declaring_class.name(),
            ValueType::scalar(declaring_class),
        )
    }

    /// Creates an unannotated constructor parameter.
    #[inline]
    pub fn parameter(
        declaring_class: Class,
        index: usize,
        name: impl Into<Cow<'static, str>>,
        member_type: ValueType,
    ) -> Self {
        Self::new(
            MemberKind::Parameter { index },
            declaring_class,
            name,
            member_type,
        )
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

    /// Returns the member kind.
    #[inline]
    pub const fn member_kind(&self) -> MemberKind {
        self.kind
    }

    /// Returns the class declaring this member.
    #[inline]
    pub const fn declaring_class(&self) -> Class {
        self.declaring_class
    }

    /// Returns the declared type of this member.
    #[inline]
    pub const fn member_type(&self) -> &ValueType {
        &self.member_type
    }
}

impl Annotated for AnnotatedMember {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AnnotatedKind {
        match self.kind {
            MemberKind::Field => AnnotatedKind::Field,
            MemberKind::Method => AnnotatedKind::Method,
            MemberKind::Constructor => AnnotatedKind::Constructor,
            MemberKind::Parameter { .. } => AnnotatedKind::Parameter,
        }
    }

    #[inline]
    fn raw_class(&self) -> Class {
        self.member_type.raw_class()
    }

    #[inline]
    fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}

// -----------------------------------------------------------------------------
// Tests
