use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use foldhash::fast::FixedState;
use hashbrown::HashSet;

use crate::MapperConfig;
use crate::annotated::{Annotated, AnnotatedClass, AnnotatedMember, MemberKind};
use crate::annotation::{AnyGetter, AnySetter, Append, AsValue, AutoDetect, BackReference};
use crate::annotation::{BuilderOptions, Creator, DeserializeOptions, Description, EnumNames};
use crate::annotation::{Filter, Format, IdentityInfo, IdentityReference, Ignore};
use crate::annotation::{IgnoreProperties, IgnoreType, Inclusion, Inject, ManagedReference};
use crate::annotation::{Naming, Property, PropertyOrder, RootName, SerializeOptions, SubTypes};
use crate::annotation::{TypeIdMarker, TypeInfo, TypeName, Unwrapped, ValueInstantiator};
use crate::annotation::{Views, Wrapper};
use crate::provider::MetadataProvider;
use crate::ty::{Class, ValueType};
use crate::value::{Access, BuilderConfig, CreatorMode, FormatValue, HandlerRef, Include};
use crate::value::{InclusionValue, NameTransformer, NamedType, ObjectIdInfo, OptBool};
use crate::value::{PropertyName, ReferenceProperty, TypeResolverSpec, Typing};
use crate::value::{VirtualProperty, VisibilityChecker};

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x3C6EF372FE94F82B);

// -----------------------------------------------------------------------------
// StdAnnotationProvider

/// Reads the annotation values of [`crate::annotation`].
///
/// Annotation types registered with [`with_bundle`] are reported as bundles.
///
/// [`with_bundle`]: StdAnnotationProvider::with_bundle
///
/// # Examples
///
/// ```
/// use vc_introspect::{MetadataProvider, StdAnnotationProvider};
/// use vc_introspect::annotated::AnnotatedMember;
/// use vc_introspect::annotation::{ManagedReference, Property};
/// use vc_introspect::ty::{Class, ValueType};
///
/// struct Parent;
/// struct Child;
///
/// let member = AnnotatedMember::field(Class::of::<Parent>(), "children", ValueType::of::<Child>())
///     .with_annotation(Property::named("kids"))
///     .with_annotation(ManagedReference::default());
///
/// let provider = StdAnnotationProvider::new();
/// let name = provider.find_name_for_serialization(&member).unwrap();
/// assert_eq!(name.simple_name(), "kids");
///
/// let reference = provider.find_reference_type(&member).unwrap();
/// assert!(reference.is_managed());
/// assert_eq!(reference.link_name(), "defaultReference");
/// ```
#[derive(Debug, Clone)]
pub struct StdAnnotationProvider {
    bundles: HashSet<TypeId, FixedState>,
}

impl StdAnnotationProvider {
    /// Creates a provider without registered bundles.
    #[inline]
    pub const fn new() -> Self {
        Self {
            bundles: HashSet::with_hasher(FIXED_HASH_STATE),
        }
    }

    /// Registers `A` as an annotation bundle.
    pub fn with_bundle<A: Any>(mut self) -> Self {
        self.bundles.insert(TypeId::of::<A>());
        self
    }

    /// Whether any annotation marking an explicit property is present.
    ///
    /// Such members are properties even without a [`Property`] annotation,
    /// and keep their implicit name.
    fn has_property_marker<Codec: Any>(entity: &dyn Annotated) -> bool {
        entity.has_annotation::<Codec>()
            || entity.has_annotation::<Views>()
            || entity.has_annotation::<Unwrapped>()
            || entity.has_annotation::<ManagedReference>()
            || entity.has_annotation::<BackReference>()
    }

    fn find_explicit_name<Codec: Any>(entity: &dyn Annotated) -> Option<PropertyName> {
        if let Some(property) = entity.get_annotation::<Property>() {
            return Some(property.property_name());
        }
        Self::has_property_marker::<Codec>(entity).then_some(PropertyName::USE_DEFAULT)
    }

    #[inline]
    fn ser(entity: &dyn Annotated) -> Option<&SerializeOptions> {
        entity.get_annotation::<SerializeOptions>()
    }

    #[inline]
    fn de(entity: &dyn Annotated) -> Option<&DeserializeOptions> {
        entity.get_annotation::<DeserializeOptions>()
    }
}

impl Default for StdAnnotationProvider {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for StdAnnotationProvider {
    fn name(&self) -> &'static str {
        "std"
    }

    fn is_annotation_bundle(&self, annotation: TypeId) -> bool {
        self.bundles.contains(&annotation)
    }

    // -------------------------------------------------------------------------
    // Object identity

    fn find_object_id_info(&self, entity: &dyn Annotated) -> Option<ObjectIdInfo> {
        entity.get_annotation::<IdentityInfo>().map(|info| info.0.clone())
    }

    fn find_object_reference_info(
        &self,
        entity: &dyn Annotated,
        info: Option<ObjectIdInfo>,
    ) -> Option<ObjectIdInfo> {
        match (entity.get_annotation::<IdentityReference>(), info) {
            (Some(reference), Some(info)) => Some(info.with_always_as_id(reference.always_as_id)),
            (_, info) => info,
        }
    }

    // -------------------------------------------------------------------------
    // Class annotations

    fn find_root_name(&self, class: &AnnotatedClass) -> Option<PropertyName> {
        class.get_annotation::<RootName>().map(RootName::to_property_name)
    }

    fn find_properties_to_ignore(
        &self,
        entity: &dyn Annotated,
        for_serialization: bool,
    ) -> Option<Vec<Cow<'static, str>>> {
        let ignore = entity.get_annotation::<IgnoreProperties>()?;
        // Explicitly allowed in this direction.
        if (for_serialization && ignore.allow_getters) || (!for_serialization && ignore.allow_setters) {
            return None;
        }
        Some(ignore.names.clone())
    }

    fn find_ignore_unknown_properties(&self, class: &AnnotatedClass) -> OptBool {
        class
            .get_annotation::<IgnoreProperties>()
            .map(|ignore| OptBool::from(ignore.ignore_unknown))
            .unwrap_or_default()
    }

    fn is_ignorable_type(&self, class: &AnnotatedClass) -> OptBool {
        class
            .get_annotation::<IgnoreType>()
            .map(|ignore| OptBool::from(ignore.0))
            .unwrap_or_default()
    }

    fn find_filter_id(&self, entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        entity
            .get_annotation::<Filter>()
            .filter(|filter| !filter.0.is_empty())
            .map(|filter| filter.0.clone())
    }

    fn find_naming_strategy(&self, class: &AnnotatedClass) -> Option<HandlerRef> {
        class.get_annotation::<Naming>().map(|naming| naming.0.clone())
    }

    fn find_auto_detect_visibility(
        &self,
        class: &AnnotatedClass,
        checker: VisibilityChecker,
    ) -> VisibilityChecker {
        match class.get_annotation::<AutoDetect>() {
            Some(auto_detect) => checker.with_overrides(&auto_detect.0),
            None => checker,
        }
    }

    // -------------------------------------------------------------------------
    // Polymorphic type handling

    fn find_type_resolver(
        &self,
        _config: &MapperConfig,
        class: &AnnotatedClass,
        _base_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        class.get_annotation::<TypeInfo>().map(|info| info.0.clone())
    }

    fn find_property_type_resolver(
        &self,
        _config: &MapperConfig,
        member: &AnnotatedMember,
        base_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        // Containers and references use the annotation for their content.
        if base_type.is_container() || base_type.is_reference() {
            return None;
        }
        member.get_annotation::<TypeInfo>().map(|info| info.0.clone())
    }

    fn find_property_content_type_resolver(
        &self,
        _config: &MapperConfig,
        member: &AnnotatedMember,
        container_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        container_type.content_type()?;
        member.get_annotation::<TypeInfo>().map(|info| info.0.clone())
    }

    fn find_subtypes(&self, entity: &dyn Annotated) -> Option<Vec<NamedType>> {
        entity.get_annotation::<SubTypes>().map(|subtypes| subtypes.0.clone())
    }

    fn find_type_name(&self, class: &AnnotatedClass) -> Option<Cow<'static, str>> {
        class.get_annotation::<TypeName>().map(|name| name.0.clone())
    }

    fn is_type_id(&self, member: &AnnotatedMember) -> OptBool {
        if member.has_annotation::<TypeIdMarker>() {
            OptBool::True
        } else {
            OptBool::Unset
        }
    }

    // -------------------------------------------------------------------------
    // Member annotations

    fn find_reference_type(&self, member: &AnnotatedMember) -> Option<ReferenceProperty> {
        if let Some(managed) = member.get_annotation::<ManagedReference>() {
            return Some(ReferenceProperty::managed(managed.0.clone()));
        }
        member
            .get_annotation::<BackReference>()
            .map(|back| ReferenceProperty::back(back.0.clone()))
    }

    fn find_unwrapping_name_transformer(&self, member: &AnnotatedMember) -> Option<NameTransformer> {
        member.get_annotation::<Unwrapped>()?.name_transformer()
    }

    fn has_ignore_marker(&self, member: &AnnotatedMember) -> bool {
        member.get_annotation::<Ignore>().is_some_and(|ignore| ignore.0)
    }

    fn find_injectable_value_id(&self, member: &AnnotatedMember) -> Option<Cow<'static, str>> {
        let inject = member.get_annotation::<Inject>()?;
        match &inject.0 {
            Some(id) if !id.is_empty() => Some(id.clone()),
            _ => Some(Cow::Borrowed(member.raw_class().name())),
        }
    }

    fn has_required_marker(&self, member: &AnnotatedMember) -> OptBool {
        member
            .get_annotation::<Property>()
            .map(|property| property.required)
            .unwrap_or_default()
    }

    fn find_views(&self, entity: &dyn Annotated) -> Option<Vec<Class>> {
        entity.get_annotation::<Views>().map(|views| views.0.clone())
    }

    fn find_format(&self, entity: &dyn Annotated) -> Option<FormatValue> {
        entity.get_annotation::<Format>().map(|format| format.0.clone())
    }

    fn find_wrapper_name(&self, entity: &dyn Annotated) -> Option<PropertyName> {
        entity.get_annotation::<Wrapper>().map(|wrapper| wrapper.0.clone())
    }

    fn find_property_default_value(&self, entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        entity.get_annotation::<Property>()?.default_value.clone()
    }

    fn find_property_description(&self, entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        entity.get_annotation::<Description>().map(|desc| desc.0.clone())
    }

    fn find_property_index(&self, entity: &dyn Annotated) -> Option<i32> {
        entity.get_annotation::<Property>()?.index
    }

    fn find_implicit_property_name(&self, member: &AnnotatedMember) -> Option<Cow<'static, str>> {
        match member.member_kind() {
            MemberKind::Parameter { .. } if !member.name().is_empty() => {
                Some(Cow::Owned(member.name().into()))
            }
            _ => None,
        }
    }

    fn find_property_access(&self, entity: &dyn Annotated) -> Option<Access> {
        entity.get_annotation::<Property>().map(|property| property.access)
    }

    // -------------------------------------------------------------------------
    // Serialization

    fn find_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::ser(entity)?.using.clone()
    }

    fn find_key_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::ser(entity)?.key_using.clone()
    }

    fn find_content_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::ser(entity)?.content_using.clone()
    }

    fn find_null_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::ser(entity)?.null_using.clone()
    }

    fn find_serialization_typing(&self, entity: &dyn Annotated) -> Option<Typing> {
        Self::ser(entity)?.typing
    }

    fn find_serialization_converter(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::ser(entity)?.converter.clone()
    }

    fn find_serialization_content_converter(
        &self,
        member: &AnnotatedMember,
    ) -> Option<HandlerRef> {
        Self::ser(member)?.content_converter.clone()
    }

    fn find_serialization_inclusion(&self, entity: &dyn Annotated, default: Include) -> Include {
        match entity.get_annotation::<Inclusion>() {
            Some(inclusion) if inclusion.value != Include::UseDefaults => inclusion.value,
            _ => default,
        }
    }

    fn find_serialization_inclusion_for_content(
        &self,
        entity: &dyn Annotated,
        default: Include,
    ) -> Include {
        match entity.get_annotation::<Inclusion>() {
            Some(inclusion) if inclusion.content != Include::UseDefaults => inclusion.content,
            _ => default,
        }
    }

    fn find_property_inclusion(&self, entity: &dyn Annotated) -> InclusionValue {
        entity
            .get_annotation::<Inclusion>()
            .map(|inclusion| inclusion.to_value())
            .unwrap_or(InclusionValue::EMPTY)
    }

    fn find_serialization_type(&self, entity: &dyn Annotated) -> Option<Class> {
        Self::ser(entity)?.value_as
    }

    fn find_serialization_key_type(
        &self,
        entity: &dyn Annotated,
        _base_key_type: &ValueType,
    ) -> Option<Class> {
        Self::ser(entity)?.key_as
    }

    fn find_serialization_content_type(
        &self,
        entity: &dyn Annotated,
        _base_content_type: &ValueType,
    ) -> Option<Class> {
        Self::ser(entity)?.content_as
    }

    fn find_serialization_property_order(
        &self,
        class: &AnnotatedClass,
    ) -> Option<Vec<Cow<'static, str>>> {
        class.get_annotation::<PropertyOrder>().map(|order| order.names.clone())
    }

    fn find_serialization_sort_alphabetically(&self, entity: &dyn Annotated) -> OptBool {
        entity
            .get_annotation::<PropertyOrder>()
            .map(PropertyOrder::sort_alphabetically)
            .unwrap_or_default()
    }

    fn find_and_add_virtual_properties(
        &self,
        _config: &MapperConfig,
        class: &AnnotatedClass,
        properties: &mut Vec<VirtualProperty>,
    ) {
        if let Some(append) = class.get_annotation::<Append>() {
            properties.extend(append.properties.iter().cloned());
        }
    }

    fn find_name_for_serialization(&self, entity: &dyn Annotated) -> Option<PropertyName> {
        Self::find_explicit_name::<SerializeOptions>(entity)
    }

    fn has_as_value_annotation(&self, member: &AnnotatedMember) -> bool {
        member.get_annotation::<AsValue>().is_some_and(|as_value| as_value.0)
    }

    fn find_enum_value(&self, class: &AnnotatedClass, variant: &str) -> Option<Cow<'static, str>> {
        class.get_annotation::<EnumNames>()?.get(variant).cloned()
    }

    // -------------------------------------------------------------------------
    // Deserialization

    fn find_deserializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::de(entity)?.using.clone()
    }

    fn find_key_deserializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::de(entity)?.key_using.clone()
    }

    fn find_content_deserializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::de(entity)?.content_using.clone()
    }

    fn find_deserialization_converter(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        Self::de(entity)?.converter.clone()
    }

    fn find_deserialization_content_converter(
        &self,
        member: &AnnotatedMember,
    ) -> Option<HandlerRef> {
        Self::de(member)?.content_converter.clone()
    }

    fn find_deserialization_type(
        &self,
        entity: &dyn Annotated,
        _base_type: &ValueType,
    ) -> Option<Class> {
        Self::de(entity)?.value_as
    }

    fn find_deserialization_key_type(
        &self,
        entity: &dyn Annotated,
        _base_key_type: &ValueType,
    ) -> Option<Class> {
        Self::de(entity)?.key_as
    }

    fn find_deserialization_content_type(
        &self,
        entity: &dyn Annotated,
        _base_content_type: &ValueType,
    ) -> Option<Class> {
        Self::de(entity)?.content_as
    }

    fn find_value_instantiator(&self, class: &AnnotatedClass) -> Option<HandlerRef> {
        class.get_annotation::<ValueInstantiator>().map(|inst| inst.0.clone())
    }

    fn find_pojo_builder(&self, class: &AnnotatedClass) -> Option<Class> {
        Self::de(class)?.builder
    }

    fn find_pojo_builder_config(&self, class: &AnnotatedClass) -> Option<BuilderConfig> {
        class.get_annotation::<BuilderOptions>().map(|options| options.0.clone())
    }

    fn find_name_for_deserialization(&self, entity: &dyn Annotated) -> Option<PropertyName> {
        Self::find_explicit_name::<DeserializeOptions>(entity)
    }

    fn has_any_setter_annotation(&self, member: &AnnotatedMember) -> bool {
        member.has_annotation::<AnySetter>()
    }

    fn has_any_getter_annotation(&self, member: &AnnotatedMember) -> bool {
        member.has_annotation::<AnyGetter>()
    }

    fn has_creator_annotation(&self, entity: &dyn Annotated) -> bool {
        entity
            .get_annotation::<Creator>()
            .is_some_and(|creator| creator.0 != CreatorMode::Disabled)
    }

    fn find_creator_binding(&self, entity: &dyn Annotated) -> Option<CreatorMode> {
        entity.get_annotation::<Creator>().map(|creator| creator.0)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::StdAnnotationProvider;
    use crate::annotated::{AnnotatedClass, AnnotatedMember};
    use crate::annotation::*;
    use crate::ty::{Class, ValueType};
    use crate::value::{CreatorMode, HandlerRef, Include, InclusionValue, NamedType, OptBool};
    use crate::value::{ObjectIdGenerator, ObjectIdInfo, PropertyName, TypeIdKind};
    use crate::value::{TypeResolverSpec, VirtualProperty, Visibility, VisibilityChecker};
    use crate::{Introspector, MapperConfig, MetadataProvider};

    struct Zoo;
    struct Animal;
    struct Dog;
    struct Keeper;
    struct Lowercase;

    fn field(ty: ValueType) -> AnnotatedMember {
        AnnotatedMember::field(Class::of::<Zoo>(), "animals", ty)
    }

    #[test]
    fn names_and_markers() {
        let provider = StdAnnotationProvider::new();

        let plain = field(ValueType::of::<Animal>());
        assert!(provider.find_name_for_serialization(&plain).is_none());
        assert!(provider.find_name_for_deserialization(&plain).is_none());

        let renamed = field(ValueType::of::<Animal>()).with_annotation(Property::named("beasts"));
        let name = provider.find_name_for_deserialization(&renamed);
        assert_eq!(name, Some(PropertyName::new("beasts")));

        // Marker annotations make a property with its implicit name.
        let viewed = field(ValueType::of::<Animal>()).with_annotation(Views(vec![Class::of::<Keeper>()]));
        assert_eq!(provider.find_name_for_serialization(&viewed), Some(PropertyName::USE_DEFAULT));

        let ser_only = field(ValueType::of::<Animal>()).with_annotation(SerializeOptions::new());
        assert!(provider.find_name_for_serialization(&ser_only).is_some());
        assert!(provider.find_name_for_deserialization(&ser_only).is_none());
    }

    #[test]
    fn ignorals_respect_direction() {
        let provider = StdAnnotationProvider::new();
        let class = AnnotatedClass::of::<Zoo>()
            .with_annotation(IgnoreProperties::new(["secret"]).allow_getters(true).ignore_unknown(true));

        assert!(provider.find_properties_to_ignore(&class, true).is_none());
        assert_eq!(
            provider.find_properties_to_ignore(&class, false),
            Some(vec![Cow::Borrowed("secret")])
        );
        assert_eq!(provider.find_ignore_unknown_properties(&class), OptBool::True);

        let class = AnnotatedClass::of::<Zoo>().with_annotation(IgnoreProperties::new(["secret"]));
        assert_eq!(provider.find_ignore_unknown_properties(&class), OptBool::False);
        assert!(provider.find_properties_to_ignore(&class, true).is_some());
        assert_eq!(provider.is_ignorable_type(&class), OptBool::Unset);

        let member = field(ValueType::of::<Animal>()).with_annotation(Ignore::default());
        assert!(provider.has_ignore_marker(&member));
        let member = field(ValueType::of::<Animal>()).with_annotation(Ignore(false));
        assert!(!provider.has_ignore_marker(&member));
    }

    #[test]
    fn type_resolvers_by_shape() {
        let config = MapperConfig::default();
        let provider = StdAnnotationProvider::new();
        let spec = TypeResolverSpec::new(TypeIdKind::Name);

        let list = ValueType::collection(Class::of::<Vec<Animal>>(), ValueType::of::<Animal>());
        let plain = ValueType::of::<Animal>();
        let member = field(list.clone()).with_annotation(TypeInfo(spec.clone()));

        assert!(provider.find_property_type_resolver(&config, &member, &list).is_none());
        assert_eq!(provider.find_property_content_type_resolver(&config, &member, &list), Some(spec.clone()));

        assert_eq!(provider.find_property_type_resolver(&config, &member, &plain), Some(spec));
        assert!(provider.find_property_content_type_resolver(&config, &member, &plain).is_none());

        let class = AnnotatedClass::of::<Animal>()
            .with_annotation(TypeInfo(TypeResolverSpec::none()))
            .with_annotation(SubTypes(vec![NamedType::named(Class::of::<Dog>(), "dog")]));
        let resolver = provider.find_type_resolver(&config, &class, &plain).unwrap();
        assert!(!resolver.is_enabled());
        assert_eq!(provider.find_subtypes(&class).unwrap()[0].name(), Some("dog"));
    }

    #[test]
    fn injection_id_falls_back_to_type_name() {
        let provider = StdAnnotationProvider::new();
        let member = field(ValueType::of::<Keeper>()).with_annotation(Inject::default());
        assert_eq!(provider.find_injectable_value_id(&member).as_deref(), Some("Keeper"));

        let member = field(ValueType::of::<Keeper>()).with_annotation(Inject(Some("head".into())));
        assert_eq!(provider.find_injectable_value_id(&member).as_deref(), Some("head"));
    }

    #[test]
    fn references_and_unwrapping() {
        let provider = StdAnnotationProvider::new();

        let back = field(ValueType::of::<Zoo>()).with_annotation(BackReference("zoo".into()));
        let reference = provider.find_reference_type(&back).unwrap();
        assert!(reference.is_back());
        assert_eq!(reference.link_name(), "zoo");

        let unwrapped = field(ValueType::of::<Keeper>()).with_annotation(Unwrapped::prefixed("keeper_"));
        let transformer = provider.find_unwrapping_name_transformer(&unwrapped).unwrap();
        assert_eq!(transformer.transform("name"), "keeper_name");
        assert!(provider.find_name_for_serialization(&unwrapped).unwrap().is_use_default());
    }

    #[test]
    fn inclusion_rules() {
        let provider = StdAnnotationProvider::new();
        let member = field(ValueType::of::<Animal>())
            .with_annotation(Inclusion::new(Include::UseDefaults).content(Include::NonNull));

        assert_eq!(provider.find_serialization_inclusion(&member, Include::Always), Include::Always);
        assert_eq!(
            provider.find_serialization_inclusion_for_content(&member, Include::Always),
            Include::NonNull
        );
        assert_eq!(
            provider.find_property_inclusion(&member),
            InclusionValue::new(Include::UseDefaults, Include::NonNull)
        );
    }

    #[test]
    fn class_level_settings() {
        let config = MapperConfig::default();
        let provider = StdAnnotationProvider::new();
        let class = AnnotatedClass::of::<Zoo>()
            .with_annotation(RootName::new("zoo"))
            .with_annotation(PropertyOrder::new(["name", "animals"]))
            .with_annotation(AutoDetect(VisibilityChecker::unchanged().with_field(Visibility::Any)))
            .with_annotation(Naming(HandlerRef::class::<Lowercase>()))
            .with_annotation(Append::new([VirtualProperty::attribute("version", ValueType::of::<u32>())]))
            .with_annotation(EnumNames::new([("Open", "open")]))
            .with_annotation(IdentityInfo(ObjectIdInfo::new(PropertyName::new("@id"), ObjectIdGenerator::IntSequence)));

        assert_eq!(provider.find_root_name(&class), Some(PropertyName::new("zoo")));
        assert_eq!(provider.find_serialization_property_order(&class).unwrap().len(), 2);
        assert_eq!(provider.find_serialization_sort_alphabetically(&class), OptBool::False);
        assert_eq!(provider.find_naming_strategy(&class), Some(HandlerRef::class::<Lowercase>()));

        let checker = provider.find_auto_detect_visibility(&class, VisibilityChecker::DEFAULT);
        assert_eq!(checker.field(), Visibility::Any);
        assert_eq!(checker.getter(), Visibility::PublicOnly);

        let mut properties = vec![VirtualProperty::attribute("existing", ValueType::of::<u32>())];
        provider.find_and_add_virtual_properties(&config, &class, &mut properties);
        assert_eq!(properties[1].name().simple_name(), "version");

        let mut names = [None, None];
        provider.find_enum_values(&class, &["Open", "Closed"], &mut names);
        assert_eq!(names, [Some(Cow::Borrowed("open")), None]);

        let info = provider.find_object_id_info(&class);
        let member = field(ValueType::of::<Zoo>())
            .with_annotation(IdentityReference { always_as_id: true });
        let info = provider.find_object_reference_info(&member, info).unwrap();
        assert!(info.always_as_id());
    }

    #[test]
    fn virtual_properties_append_in_chain_order() {
        struct Pushing(&'static str);

        impl MetadataProvider for Pushing {
            fn find_and_add_virtual_properties(
                &self,
                _config: &MapperConfig,
                _class: &AnnotatedClass,
                properties: &mut Vec<VirtualProperty>,
            ) {
                properties.push(VirtualProperty::attribute(self.0, ValueType::of::<u32>()));
            }
        }

        let config = MapperConfig::default();
        let class = AnnotatedClass::of::<Zoo>().with_annotation(Append::new([
            VirtualProperty::attribute("version", ValueType::of::<u32>()),
            VirtualProperty::attribute("build", ValueType::of::<u32>()),
        ]));
        let chain = Introspector::pair(
            Introspector::single(Pushing("primary")),
            Introspector::single(StdAnnotationProvider::new()),
        );

        let mut properties = vec![VirtualProperty::attribute("existing", ValueType::of::<u32>())];
        chain.find_and_add_virtual_properties(&config, &class, &mut properties);

        let names: Vec<_> = properties.iter().map(|p| p.name().simple_name()).collect();
        assert_eq!(names, ["existing", "primary", "version", "build"]);
    }

    #[test]
    fn creators_and_bundles() {
        struct Bundle;

        let provider = StdAnnotationProvider::new().with_bundle::<Bundle>();
        assert!(provider.is_annotation_bundle(TypeId::of::<Bundle>()));
        assert!(!provider.is_annotation_bundle(TypeId::of::<Property>()));

        let ctor = AnnotatedMember::constructor(Class::of::<Zoo>()).with_annotation(Creator(CreatorMode::Properties));
        assert!(provider.has_creator_annotation(&ctor));
        assert_eq!(provider.find_creator_binding(&ctor), Some(CreatorMode::Properties));

        let disabled = AnnotatedMember::constructor(Class::of::<Zoo>()).with_annotation(Creator(CreatorMode::Disabled));
        assert!(!provider.has_creator_annotation(&disabled));

        let param = AnnotatedMember::parameter(Class::of::<Zoo>(), 0, "name", ValueType::of::<u32>());
        assert_eq!(provider.find_implicit_property_name(&param).as_deref(), Some("name"));
        assert!(provider.find_implicit_property_name(&field(ValueType::of::<u32>())).is_none());
    }
}
