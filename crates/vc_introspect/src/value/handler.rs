use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::ty::Class;

// -----------------------------------------------------------------------------
// HandlerRef

/// A handler named by an annotation: a codec, converter, naming strategy
/// or instantiator, given either as a ready instance or as a class token
/// the caller instantiates.
///
/// Whether the instance has the right kind for the query is the caller's
/// concern; providers pass it through unchecked.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::HandlerRef;
/// use vc_introspect::ty::Class;
///
/// struct UpperCase;
///
/// let by_class = HandlerRef::class::<UpperCase>();
/// assert_eq!(by_class.as_class(), Some(Class::of::<UpperCase>()));
///
/// let by_instance = HandlerRef::instance(UpperCase);
/// assert!(by_instance.downcast_ref::<UpperCase>().is_some());
/// assert_eq!(by_instance.handler_class(), Class::of::<UpperCase>());
/// ```
#[derive(Clone)]
pub enum HandlerRef {
    Instance {
        class: Class,
        value: Arc<dyn Any + Send + Sync>,
    },
    Class(Class),
}

impl HandlerRef {
    /// Wraps a ready handler instance.
    #[inline]
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Self::Instance {
            class: Class::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// Names a handler class.
    #[inline]
    pub fn class<T: ?Sized + 'static>() -> Self {
        Self::Class(Class::of::<T>())
    }

    /// Returns the class of the handler, for either form.
    #[inline]
    pub const fn handler_class(&self) -> Class {
        match self {
            Self::Instance { class, .. } | Self::Class(class) => *class,
        }
    }

    /// Returns the class token when not an instance.
    #[inline]
    pub const fn as_class(&self) -> Option<Class> {
        match self {
            Self::Class(class) => Some(*class),
            Self::Instance { .. } => None,
        }
    }

    /// Returns the instance as `T`, if this is an instance of `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Instance { value, .. } => (**value).downcast_ref::<T>(),
            Self::Class(_) => None,
        }
    }
}

impl PartialEq for HandlerRef {
    /// Instances compare by identity, classes by value.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Instance { value: a, .. }, Self::Instance { value: b, .. }) => Arc::ptr_eq(a, b),
            (Self::Class(a), Self::Class(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance { class, .. } => f.debug_tuple("Instance").field(class).finish(),
            Self::Class(class) => f.debug_tuple("Class").field(class).finish(),
        }
    }
}
