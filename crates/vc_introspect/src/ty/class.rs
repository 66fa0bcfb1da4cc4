use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

use serde_core::{Serialize, Serializer};

// -----------------------------------------------------------------------------
// Class

/// A raw class token: the identity of a type, without any knowledge of
/// its key or content types.
///
/// Two classes are equal when their [`TypeId`]s are equal; the type path is
/// only kept for messages.
///
/// # Examples
///
/// ```
/// use vc_introspect::ty::Class;
/// use std::collections::BTreeMap;
///
/// let class = Class::of::<BTreeMap<String, i32>>();
/// assert_eq!(class.name(), "BTreeMap");
/// assert!(class.is::<BTreeMap<String, i32>>());
/// assert_ne!(class, Class::of::<BTreeMap<String, u32>>());
/// ```
#[derive(Clone, Copy)]
pub struct Class {
    id: TypeId,
    path: &'static str,
}

impl Class {
    /// Returns the class of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// The top of every class hierarchy, `dyn Any`.
    #[inline]
    pub fn any() -> Self {
        Self::of::<dyn Any>()
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::string::String`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the last path segment without generic arguments.
    ///
    /// Tuples, slices and arrays are returned as their full path.
    pub fn name(&self) -> &'static str {
        short_name(self.path)
    }

    /// Check if this class is `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

fn short_name(path: &'static str) -> &'static str {
    if path.starts_with(['(', '[']) {
        return path;
    }
    let head = match path.find('<') {
        Some(index) => &path[..index],
        None => path,
    };
    match head.rfind("::") {
        Some(index) => &head[index + 2..],
        None => head,
    }
}

impl PartialEq for Class {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Class {}

impl Hash for Class {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.path)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for Class {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// Tests
