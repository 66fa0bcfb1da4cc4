use alloc::boxed::Box;
use core::fmt;

use serde_core::{Serialize, Serializer};

use crate::ty::Class;

// -----------------------------------------------------------------------------
// TypeShape

/// The structural kind of a [`ValueType`].
///
/// Only shapes with a content type take part in content refinement, and
/// only [`TypeShape::Map`] takes part in key refinement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// Neither key nor content, e.g. `i32` or a plain struct.
    Scalar,
    /// A collection-like type, e.g. `Vec<T>`.
    Collection { content: Box<ValueType> },
    /// An array or slice, e.g. `[T; N]`.
    Array { content: Box<ValueType> },
    /// A single-content reference or optional-like type, e.g. `Option<T>`.
    Reference { content: Box<ValueType> },
    /// A map-like type, e.g. `BTreeMap<K, V>`.
    Map {
        key: Box<ValueType>,
        content: Box<ValueType>,
    },
}

// -----------------------------------------------------------------------------
// ValueType

/// A fully resolved static type: a raw [`Class`] plus its shape.
///
/// `ValueType` is what the refinement engine consumes and produces.
/// It is an immutable value; every `with_*` method returns a new instance.
///
/// # Examples
///
/// ```
/// use vc_introspect::ty::{Class, ValueType};
/// use std::collections::BTreeMap;
///
/// struct Animal;
///
/// let map = ValueType::map(
///     Class::of::<BTreeMap<String, Animal>>(),
///     ValueType::of::<String>(),
///     ValueType::of::<Animal>(),
/// );
///
/// assert!(map.is_map_like());
/// assert_eq!(map.key_type(), Some(&ValueType::of::<String>()));
/// assert_eq!(map.to_string(), "BTreeMap<String, Animal>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueType {
    raw: Class,
    shape: TypeShape,
}

impl ValueType {
    /// Creates a scalar type of the given raw class.
    #[inline]
    pub const fn scalar(raw: Class) -> Self {
        Self {
            raw,
            shape: TypeShape::Scalar,
        }
    }

    /// Creates a scalar type for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::scalar(Class::of::<T>())
    }

    /// Creates a collection-like type.
    #[inline]
    pub fn collection(raw: Class, content: ValueType) -> Self {
        Self {
            raw,
            shape: TypeShape::Collection {
                content: Box::new(content),
            },
        }
    }

    /// Creates an array type.
    #[inline]
    pub fn array(raw: Class, content: ValueType) -> Self {
        Self {
            raw,
            shape: TypeShape::Array {
                content: Box::new(content),
            },
        }
    }

    /// Creates a reference (optional-like) type.
    #[inline]
    pub fn reference(raw: Class, content: ValueType) -> Self {
        Self {
            raw,
            shape: TypeShape::Reference {
                content: Box::new(content),
            },
        }
    }

    /// Creates a map-like type.
    #[inline]
    pub fn map(raw: Class, key: ValueType, content: ValueType) -> Self {
        Self {
            raw,
            shape: TypeShape::Map {
                key: Box::new(key),
                content: Box::new(content),
            },
        }
    }

    /// Returns the raw class.
    #[inline]
    pub const fn raw_class(&self) -> Class {
        self.raw
    }

    /// Returns `true` if the raw class is `class`.
    #[inline]
    pub fn has_raw_class(&self, class: Class) -> bool {
        self.raw == class
    }

    /// Returns the shape.
    #[inline]
    pub const fn shape(&self) -> &TypeShape {
        &self.shape
    }

    /// Returns `true` for map-like types.
    #[inline]
    pub const fn is_map_like(&self) -> bool {
        matches!(self.shape, TypeShape::Map { .. })
    }

    /// Returns `true` for collection-like, array and map-like types.
    ///
    /// Reference types have content but are not containers.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(
            self.shape,
            TypeShape::Collection { .. } | TypeShape::Array { .. } | TypeShape::Map { .. }
        )
    }

    /// Returns `true` for reference (optional-like) types.
    #[inline]
    pub const fn is_reference(&self) -> bool {
        matches!(self.shape, TypeShape::Reference { .. })
    }

    /// Returns the key type of map-like types.
    pub fn key_type(&self) -> Option<&ValueType> {
        match &self.shape {
            TypeShape::Map { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Returns the content type of any type that has one.
    pub fn content_type(&self) -> Option<&ValueType> {
        match &self.shape {
            TypeShape::Scalar => None,
            TypeShape::Collection { content }
            | TypeShape::Array { content }
            | TypeShape::Reference { content }
            | TypeShape::Map { content, .. } => Some(content),
        }
    }

    /// Returns a copy with another raw class and the same shape.
    #[inline]
    pub fn with_raw_class(&self, raw: Class) -> Self {
        Self {
            raw,
            shape: self.shape.clone(),
        }
    }

    /// Returns a copy with the key type replaced, or `None` if the type
    /// is not map-like.
    pub fn with_key_type(&self, key_type: ValueType) -> Option<Self> {
        match &self.shape {
            TypeShape::Map { content, .. } => Some(Self {
                raw: self.raw,
                shape: TypeShape::Map {
                    key: Box::new(key_type),
                    content: content.clone(),
                },
            }),
            _ => None,
        }
    }

    /// Returns a copy with the content type replaced, or `None` if the type
    /// has no content.
    pub fn with_content_type(&self, content_type: ValueType) -> Option<Self> {
        let content = Box::new(content_type);
        let shape = match &self.shape {
            TypeShape::Scalar => return None,
            TypeShape::Collection { .. } => TypeShape::Collection { content },
            TypeShape::Array { .. } => TypeShape::Array { content },
            TypeShape::Reference { .. } => TypeShape::Reference { content },
            TypeShape::Map { key, .. } => TypeShape::Map {
                key: key.clone(),
                content,
            },
        };
        Some(Self {
            raw: self.raw,
            shape,
        })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            TypeShape::Scalar => write!(f, "{}", self.raw),
            TypeShape::Array { content } => write!(f, "[{content}]"),
            TypeShape::Collection { content } | TypeShape::Reference { content } => {
                write!(f, "{}<{content}>", self.raw)
            }
            TypeShape::Map { key, content } => write!(f, "{}<{key}, {content}>", self.raw),
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// -----------------------------------------------------------------------------
// Tests
