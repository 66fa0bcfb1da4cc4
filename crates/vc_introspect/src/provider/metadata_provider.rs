use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::any::TypeId;

use crate::MapperConfig;
use crate::annotated::{Annotated, AnnotatedClass, AnnotatedMember};
use crate::provider::Introspector;
use crate::ty::{Class, ValueType};
use crate::value::{Access, BuilderConfig, CreatorMode, FormatValue, HandlerRef};
use crate::value::{Include, InclusionValue, NameTransformer, NamedType, ObjectIdInfo};
use crate::value::{OptBool, PropertyName, ReferenceProperty, TypeResolverSpec, Typing};
use crate::value::{VirtualProperty, VisibilityChecker};

// -----------------------------------------------------------------------------
// MetadataProvider

/// A source of annotation-based configuration for serialization and
/// deserialization.
///
/// Every query has a default answer meaning "no opinion": `None`,
/// [`OptBool::Unset`], `false`, or the running value passed in. Providers
/// only override the queries they know about, so providers of different
/// origin can be combined with [`Introspector`] without knowing about each
/// other.
///
/// Providers are built once and then shared read-only, hence `Send + Sync`.
///
/// # Examples
///
/// ```
/// use vc_introspect::MetadataProvider;
/// use vc_introspect::annotated::{Annotated, AnnotatedMember};
/// use vc_introspect::ty::{Class, ValueType};
/// use vc_introspect::value::PropertyName;
///
/// struct Legacy(&'static str);
///
/// /// Understands only the `Legacy` rename annotation.
/// struct LegacyProvider;
///
/// impl MetadataProvider for LegacyProvider {
///     fn find_name_for_serialization(&self, entity: &dyn Annotated) -> Option<PropertyName> {
///         entity.get_annotation::<Legacy>().map(|legacy| PropertyName::new(legacy.0))
///     }
/// }
///
/// struct User;
/// let member = AnnotatedMember::field(Class::of::<User>(), "id", ValueType::of::<u64>())
///     .with_annotation(Legacy("user_id"));
///
/// let name = LegacyProvider.find_name_for_serialization(&member).unwrap();
/// assert_eq!(name.simple_name(), "user_id");
/// assert!(LegacyProvider.find_root_name(&vc_introspect::annotated::AnnotatedClass::of::<User>()).is_none());
/// ```
pub trait MetadataProvider: Send + Sync {
    /// The provider name, used for diagnostics.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns `Some` if this provider is a chain.
    ///
    /// Lets [`Introspector::all_providers`] look through chains that were
    /// wrapped as a single provider.
    fn as_introspector(&self) -> Option<&Introspector> {
        None
    }

    // -------------------------------------------------------------------------
    // Meta-annotations

    /// Whether annotations of type `annotation` are bundles whose own
    /// annotations apply in their place. Default `false`.
    fn is_annotation_bundle(&self, _annotation: TypeId) -> bool {
        false
    }

    // -------------------------------------------------------------------------
    // Object identity

    /// Object identity settings for a class or property.
    fn find_object_id_info(&self, _entity: &dyn Annotated) -> Option<ObjectIdInfo> {
        None
    }

    /// Additional settings of an object identity reference.
    ///
    /// Receives the current settings and returns them, possibly modified.
    fn find_object_reference_info(
        &self,
        _entity: &dyn Annotated,
        info: Option<ObjectIdInfo>,
    ) -> Option<ObjectIdInfo> {
        info
    }

    // -------------------------------------------------------------------------
    // Class annotations

    /// The root name used when the class is the outermost value.
    fn find_root_name(&self, _class: &AnnotatedClass) -> Option<PropertyName> {
        None
    }

    /// Names of properties to drop, for the given direction.
    fn find_properties_to_ignore(
        &self,
        _entity: &dyn Annotated,
        _for_serialization: bool,
    ) -> Option<Vec<Cow<'static, str>>> {
        None
    }

    /// Whether unknown properties are silently skipped while deserializing.
    fn find_ignore_unknown_properties(&self, _class: &AnnotatedClass) -> OptBool {
        OptBool::Unset
    }

    /// Whether properties of this type are ignored everywhere.
    fn is_ignorable_type(&self, _class: &AnnotatedClass) -> OptBool {
        OptBool::Unset
    }

    /// Id of the property filter to apply.
    fn find_filter_id(&self, _entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        None
    }

    /// Naming strategy for the properties of a class.
    fn find_naming_strategy(&self, _class: &AnnotatedClass) -> Option<HandlerRef> {
        None
    }

    // -------------------------------------------------------------------------
    // Property auto-detection

    /// Adjusts auto-detection thresholds.
    ///
    /// Receives the current checker and returns it, possibly modified.
    fn find_auto_detect_visibility(
        &self,
        _class: &AnnotatedClass,
        checker: VisibilityChecker,
    ) -> VisibilityChecker {
        checker
    }

    // -------------------------------------------------------------------------
    // Polymorphic type handling

    /// Type handling declared on a class.
    fn find_type_resolver(
        &self,
        _config: &MapperConfig,
        _class: &AnnotatedClass,
        _base_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        None
    }

    /// Type handling declared on a property, for its own value.
    fn find_property_type_resolver(
        &self,
        _config: &MapperConfig,
        _member: &AnnotatedMember,
        _base_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        None
    }

    /// Type handling declared on a container property, for its content.
    fn find_property_content_type_resolver(
        &self,
        _config: &MapperConfig,
        _member: &AnnotatedMember,
        _container_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        None
    }

    /// Directly declared subtypes. No recursive expansion.
    fn find_subtypes(&self, _entity: &dyn Annotated) -> Option<Vec<NamedType>> {
        None
    }

    /// Logical type name of a class.
    fn find_type_name(&self, _class: &AnnotatedClass) -> Option<Cow<'static, str>> {
        None
    }

    /// Whether an accessor provides the type id.
    fn is_type_id(&self, _member: &AnnotatedMember) -> OptBool {
        OptBool::Unset
    }

    // -------------------------------------------------------------------------
    // Member annotations

    /// Managed or back reference role.
    fn find_reference_type(&self, _member: &AnnotatedMember) -> Option<ReferenceProperty> {
        None
    }

    /// Name transformation for an unwrapped property.
    ///
    /// `Some` means the property is unwrapped, even with a no-op transformer.
    fn find_unwrapping_name_transformer(&self, _member: &AnnotatedMember) -> Option<NameTransformer> {
        None
    }

    fn has_ignore_marker(&self, _member: &AnnotatedMember) -> bool {
        false
    }

    /// Id of the value injected into this member.
    fn find_injectable_value_id(&self, _member: &AnnotatedMember) -> Option<Cow<'static, str>> {
        None
    }

    fn has_required_marker(&self, _member: &AnnotatedMember) -> OptBool {
        OptBool::Unset
    }

    /// Views a property is included in; `None` means all views.
    fn find_views(&self, _entity: &dyn Annotated) -> Option<Vec<Class>> {
        None
    }

    fn find_format(&self, _entity: &dyn Annotated) -> Option<FormatValue> {
        None
    }

    /// Name of the wrapper element, or [`PropertyName::USE_DEFAULT`].
    fn find_wrapper_name(&self, _entity: &dyn Annotated) -> Option<PropertyName> {
        None
    }

    /// Textual default value, for schema generators.
    fn find_property_default_value(&self, _entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        None
    }

    /// Human readable description, for schema generators.
    fn find_property_description(&self, _entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        None
    }

    /// Explicit ordinal of a property.
    fn find_property_index(&self, _entity: &dyn Annotated) -> Option<i32> {
        None
    }

    /// Name a member has without any explicit annotation, e.g. a parameter name.
    fn find_implicit_property_name(&self, _member: &AnnotatedMember) -> Option<Cow<'static, str>> {
        None
    }

    fn find_property_access(&self, _entity: &dyn Annotated) -> Option<Access> {
        None
    }

    // -------------------------------------------------------------------------
    // Serialization: general

    fn find_serializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    fn find_key_serializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    fn find_content_serializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    /// Serializer used for null values.
    fn find_null_serializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    fn find_serialization_typing(&self, _entity: &dyn Annotated) -> Option<Typing> {
        None
    }

    /// Converter applied before serializing the value.
    fn find_serialization_converter(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    /// Converter applied to each content value of a container property.
    fn find_serialization_content_converter(
        &self,
        _member: &AnnotatedMember,
    ) -> Option<HandlerRef> {
        None
    }

    /// Inclusion rule for the value. Returns `default` when there is no opinion.
    fn find_serialization_inclusion(&self, _entity: &dyn Annotated, default: Include) -> Include {
        default
    }

    /// Inclusion rule for the content. Returns `default` when there is no opinion.
    fn find_serialization_inclusion_for_content(
        &self,
        _entity: &dyn Annotated,
        default: Include,
    ) -> Include {
        default
    }

    /// Combined inclusion rules. Default [`InclusionValue::EMPTY`].
    fn find_property_inclusion(&self, _entity: &dyn Annotated) -> InclusionValue {
        InclusionValue::EMPTY
    }

    // -------------------------------------------------------------------------
    // Serialization: type refinement

    /// Super-type to serialize the entity as, instead of its declared type.
    fn find_serialization_type(&self, _entity: &dyn Annotated) -> Option<Class> {
        None
    }

    /// Super-type to serialize map keys as.
    fn find_serialization_key_type(
        &self,
        _entity: &dyn Annotated,
        _base_key_type: &ValueType,
    ) -> Option<Class> {
        None
    }

    /// Super-type to serialize container content as.
    fn find_serialization_content_type(
        &self,
        _entity: &dyn Annotated,
        _base_content_type: &ValueType,
    ) -> Option<Class> {
        None
    }

    // -------------------------------------------------------------------------
    // Serialization: class annotations

    /// Explicit, possibly partial, property order.
    fn find_serialization_property_order(
        &self,
        _class: &AnnotatedClass,
    ) -> Option<Vec<Cow<'static, str>>> {
        None
    }

    /// Whether properties without explicit order are sorted alphabetically.
    fn find_serialization_sort_alphabetically(&self, _entity: &dyn Annotated) -> OptBool {
        OptBool::Unset
    }

    /// Appends virtual properties of `class` to `properties`.
    fn find_and_add_virtual_properties(
        &self,
        _config: &MapperConfig,
        _class: &AnnotatedClass,
        _properties: &mut Vec<VirtualProperty>,
    ) {
    }

    // -------------------------------------------------------------------------
    // Serialization: property annotations

    /// Explicit serialized name, or [`PropertyName::USE_DEFAULT`] when the
    /// annotation is present without a name.
    fn find_name_for_serialization(&self, _entity: &dyn Annotated) -> Option<PropertyName> {
        None
    }

    /// Whether the member's value stands for the whole object.
    fn has_as_value_annotation(&self, _member: &AnnotatedMember) -> bool {
        false
    }

    /// Explicit serialized name of an enum variant.
    fn find_enum_value(&self, _class: &AnnotatedClass, _variant: &str) -> Option<Cow<'static, str>> {
        None
    }

    /// Fills `names[i]` with the explicit name of `variants[i]`.
    ///
    /// Slots that are already `Some` are left alone.
    fn find_enum_values(
        &self,
        class: &AnnotatedClass,
        variants: &[&str],
        names: &mut [Option<Cow<'static, str>>],
    ) {
        for (variant, name) in variants.iter().zip(names.iter_mut()) {
            if name.is_none() {
                *name = self.find_enum_value(class, variant);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Deserialization: general

    fn find_deserializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    fn find_key_deserializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    fn find_content_deserializer(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    /// Converter applied after deserializing an intermediate value.
    fn find_deserialization_converter(&self, _entity: &dyn Annotated) -> Option<HandlerRef> {
        None
    }

    fn find_deserialization_content_converter(
        &self,
        _member: &AnnotatedMember,
    ) -> Option<HandlerRef> {
        None
    }

    // -------------------------------------------------------------------------
    // Deserialization: type refinement

    /// Sub-type to materialize instead of the declared type.
    fn find_deserialization_type(
        &self,
        _entity: &dyn Annotated,
        _base_type: &ValueType,
    ) -> Option<Class> {
        None
    }

    /// Sub-type to materialize map keys as.
    fn find_deserialization_key_type(
        &self,
        _entity: &dyn Annotated,
        _base_key_type: &ValueType,
    ) -> Option<Class> {
        None
    }

    /// Sub-type to materialize container content as.
    fn find_deserialization_content_type(
        &self,
        _entity: &dyn Annotated,
        _base_content_type: &ValueType,
    ) -> Option<Class> {
        None
    }

    // -------------------------------------------------------------------------
    // Deserialization: class annotations

    fn find_value_instantiator(&self, _class: &AnnotatedClass) -> Option<HandlerRef> {
        None
    }

    /// Builder class constructing instances of `class`.
    ///
    /// Builders are stateful, so only a class is accepted, never an instance.
    fn find_pojo_builder(&self, _class: &AnnotatedClass) -> Option<Class> {
        None
    }

    fn find_pojo_builder_config(&self, _class: &AnnotatedClass) -> Option<BuilderConfig> {
        None
    }

    // -------------------------------------------------------------------------
    // Deserialization: property annotations

    /// Explicit deserialized name, or [`PropertyName::USE_DEFAULT`].
    fn find_name_for_deserialization(&self, _entity: &dyn Annotated) -> Option<PropertyName> {
        None
    }

    fn has_any_setter_annotation(&self, _member: &AnnotatedMember) -> bool {
        false
    }

    fn has_any_getter_annotation(&self, _member: &AnnotatedMember) -> bool {
        false
    }

    /// Whether a constructor or factory method creates instances.
    fn has_creator_annotation(&self, _entity: &dyn Annotated) -> bool {
        false
    }

    fn find_creator_binding(&self, _entity: &dyn Annotated) -> Option<CreatorMode> {
        None
    }
}
