// -----------------------------------------------------------------------------
// Visibility

/// Minimum visibility a member needs to be auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Any,
    NonPrivate,
    ProtectedAndPublic,
    PublicOnly,
    None,
    /// No opinion, keep the current level.
    Default,
}

// -----------------------------------------------------------------------------
// VisibilityChecker

/// Auto-detection thresholds per member kind.
///
/// Providers receive the current checker and return it unchanged or with
/// some levels replaced.
///
/// # Examples
///
/// ```
/// use vc_introspect::value::{Visibility, VisibilityChecker};
///
/// let checker = VisibilityChecker::DEFAULT.with_field(Visibility::Any);
/// assert_eq!(checker.field(), Visibility::Any);
/// assert_eq!(checker.getter(), Visibility::PublicOnly);
///
/// // `Default` keeps the current level.
/// let same = checker.with_getter(Visibility::Default);
/// assert_eq!(same, checker);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibilityChecker {
    getter: Visibility,
    is_getter: Visibility,
    setter: Visibility,
    creator: Visibility,
    field: Visibility,
}

macro_rules! impl_visibility_fns {
    ($($field:ident, $with:ident;)*) => {
        $(
            #[inline]
            pub const fn $field(&self) -> Visibility {
                self.$field
            }

            /// Replaces this level unless `level` is [`Visibility::Default`].
            #[inline]
            pub const fn $with(self, level: Visibility) -> Self {
                match level {
                    Visibility::Default => self,
                    level => Self { $field: level, ..self },
                }
            }
        )*
    };
}

impl VisibilityChecker {
    /// Public getters and fields, any setter or creator.
    pub const DEFAULT: Self = Self {
        getter: Visibility::PublicOnly,
        is_getter: Visibility::PublicOnly,
        setter: Visibility::Any,
        creator: Visibility::Any,
        field: Visibility::PublicOnly,
    };

    impl_visibility_fns! {
        getter, with_getter;
        is_getter, with_is_getter;
        setter, with_setter;
        creator, with_creator;
        field, with_field;
    }

    /// Applies every non-default level of `overrides`.
    pub const fn with_overrides(self, overrides: &Self) -> Self {
        self.with_getter(overrides.getter)
            .with_is_getter(overrides.is_getter)
            .with_setter(overrides.setter)
            .with_creator(overrides.creator)
            .with_field(overrides.field)
    }

    /// A checker whose every level is [`Visibility::Default`].
    pub const fn unchanged() -> Self {
        Self {
            getter: Visibility::Default,
            is_getter: Visibility::Default,
            setter: Visibility::Default,
            creator: Visibility::Default,
            field: Visibility::Default,
        }
    }
}

impl Default for VisibilityChecker {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
