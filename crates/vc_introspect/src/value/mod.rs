//! Value types answered by provider queries.
//!
//! Most queries answer `Option<T>`, where `None` means "no opinion".
//! Tri-state flags use [`OptBool`] instead of `Option<bool>`.

// -----------------------------------------------------------------------------
// Modules

mod format;
mod handler;
mod inclusion;
mod object_id;
mod opt_bool;
mod options;
mod polymorphic;
mod property_name;
mod reference;
mod visibility;

// -----------------------------------------------------------------------------
// Exports

pub use format::{FormatShape, FormatValue};
pub use handler::HandlerRef;
pub use inclusion::{Include, InclusionValue};
pub use object_id::{ObjectIdGenerator, ObjectIdInfo};
pub use opt_bool::OptBool;
pub use options::{Access, BuilderConfig, CreatorMode, Typing};
pub use options::{NameTransformer, VirtualProperty, VirtualSource};
pub use polymorphic::{NamedType, TypeIdKind, TypeInclusion, TypeResolverSpec};
pub use property_name::PropertyName;
pub use reference::{ReferenceProperty, ReferenceRole};
pub use visibility::{Visibility, VisibilityChecker};
