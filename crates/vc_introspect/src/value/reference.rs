use alloc::borrow::Cow;
use core::fmt;

use serde_core::ser::SerializeStruct;
use serde_core::{Serialize, Serializer};

// -----------------------------------------------------------------------------
// ReferenceRole

/// Which half of a parent/child reference pair a member plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    /// Serialized normally, used to resolve back references while deserializing.
    Managed,
    /// Skipped while serializing, reconstructed while deserializing.
    Back,
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Managed => f.pad("managed"),
            Self::Back => f.pad("back"),
        }
    }
}

impl Serialize for ReferenceRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Managed => serializer.serialize_unit_variant("ReferenceRole", 0, "managed"),
            Self::Back => serializer.serialize_unit_variant("ReferenceRole", 1, "back"),
        }
    }
}

// -----------------------------------------------------------------------------
// ReferenceProperty

/// Tags a member as the managed or back half of a reference pair.
///
/// Members with the same `link_name` and complementary roles form one
/// relationship. Pairing them up is left to the property builder; this
/// type only carries the tag.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::{ReferenceProperty, ReferenceRole};
///
/// let parent = ReferenceProperty::managed("children");
/// let child = ReferenceProperty::back("children");
///
/// assert!(parent.is_managed());
/// assert_eq!(child.role(), ReferenceRole::Back);
/// assert_eq!(parent.link_name(), child.link_name());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceProperty {
    role: ReferenceRole,
    link_name: Cow<'static, str>,
}

impl ReferenceProperty {
    /// Creates a reference tag.
    #[inline]
    pub fn new(role: ReferenceRole, link_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            role,
            link_name: link_name.into(),
        }
    }

    /// Creates the managed (forward) half.
    #[inline]
    pub fn managed(link_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ReferenceRole::Managed, link_name)
    }

    /// Creates the back half.
    #[inline]
    pub fn back(link_name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ReferenceRole::Back, link_name)
    }

    #[inline]
    pub const fn role(&self) -> ReferenceRole {
        self.role
    }

    #[inline]
    pub fn link_name(&self) -> &str {
        &self.link_name
    }

    #[inline]
    pub const fn is_managed(&self) -> bool {
        matches!(self.role, ReferenceRole::Managed)
    }

    #[inline]
    pub const fn is_back(&self) -> bool {
        matches!(self.role, ReferenceRole::Back)
    }
}

impl Serialize for ReferenceProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReferenceProperty", 2)?;
        state.serialize_field("role", &self.role)?;
        state.serialize_field("link_name", &*self.link_name)?;
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::ReferenceProperty;

    #[test]
    fn owned_and_borrowed_names() {
        let owned = ReferenceProperty::back(String::from("parent"));
        assert_eq!(owned, ReferenceProperty::back("parent"));
        assert_ne!(owned, ReferenceProperty::managed("parent"));
    }

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&ReferenceProperty::managed("items")).unwrap();
        assert_eq!(json, r#"{"role":"managed","link_name":"items"}"#);
    }
}
