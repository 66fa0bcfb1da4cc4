use crate::ty::Class;
use crate::value::{HandlerRef, Typing};

// -----------------------------------------------------------------------------
// Helpers

macro_rules! impl_builder_fns {
    ($($field:ident: $ty:ty,)*) => {
        $(
            #[inline]
            pub fn $field(self, value: $ty) -> Self {
                Self {
                    $field: Some(value),
                    ..self
                }
            }
        )*
    };
}

// -----------------------------------------------------------------------------
// SerializeOptions

/// Serializer selection and type overrides for serialization.
///
/// `value_as`, `key_as` and `content_as` name super-types to serialize as.
///
/// # Examples
///
/// ```
/// use vc_introspect::annotation::SerializeOptions;
/// use vc_introspect::ty::Class;
/// use vc_introspect::value::Typing;
///
/// trait Shape {}
///
/// let options = SerializeOptions::new()
///     .value_as(Class::of::<dyn Shape>())
///     .typing(Typing::Static);
/// assert_eq!(options.typing, Some(Typing::Static));
/// assert!(options.key_as.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerializeOptions {
    pub using: Option<HandlerRef>,
    pub key_using: Option<HandlerRef>,
    pub content_using: Option<HandlerRef>,
    pub null_using: Option<HandlerRef>,
    pub value_as: Option<Class>,
    pub key_as: Option<Class>,
    pub content_as: Option<Class>,
    pub typing: Option<Typing>,
    pub converter: Option<HandlerRef>,
    pub content_converter: Option<HandlerRef>,
}

impl SerializeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    impl_builder_fns! {
        using: HandlerRef,
        key_using: HandlerRef,
        content_using: HandlerRef,
        null_using: HandlerRef,
        value_as: Class,
        key_as: Class,
        content_as: Class,
        typing: Typing,
        converter: HandlerRef,
        content_converter: HandlerRef,
    }
}

// -----------------------------------------------------------------------------
// DeserializeOptions

/// Deserializer selection and type overrides for deserialization.
///
/// `value_as`, `key_as` and `content_as` name sub-types to materialize.
/// `builder` names a builder class used to construct the annotated class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeserializeOptions {
    pub using: Option<HandlerRef>,
    pub key_using: Option<HandlerRef>,
    pub content_using: Option<HandlerRef>,
    pub value_as: Option<Class>,
    pub key_as: Option<Class>,
    pub content_as: Option<Class>,
    pub converter: Option<HandlerRef>,
    pub content_converter: Option<HandlerRef>,
    pub builder: Option<Class>,
}

impl DeserializeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    impl_builder_fns! {
        using: HandlerRef,
        key_using: HandlerRef,
        content_using: HandlerRef,
        value_as: Class,
        key_as: Class,
        content_as: Class,
        converter: HandlerRef,
        content_converter: HandlerRef,
        builder: Class,
    }
}
