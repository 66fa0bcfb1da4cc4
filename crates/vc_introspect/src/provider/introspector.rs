use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use core::slice;

use crate::MapperConfig;
use crate::annotated::{Annotated, AnnotatedClass, AnnotatedMember};
use crate::provider::{MetadataProvider, NopProvider};
use crate::ty::{Class, ValueType};
use crate::value::{Access, BuilderConfig, CreatorMode, FormatValue, HandlerRef};
use crate::value::{Include, InclusionValue, NameTransformer, NamedType, ObjectIdInfo};
use crate::value::{OptBool, PropertyName, ReferenceProperty, TypeResolverSpec, Typing};
use crate::value::{VirtualProperty, VisibilityChecker};

// -----------------------------------------------------------------------------
// Introspector

/// An ordered chain of metadata providers acting as one provider.
///
/// Earlier providers take precedence. Per query, answers are combined by
/// one of these rules:
///
/// - singular answers: the first answer other than "no opinion" wins;
/// - boolean markers: logical or;
/// - lists: answers of every provider are concatenated in order, duplicates
///   included;
/// - running values (visibility, inclusion defaults, reference info): the
///   value is passed from the last provider to the first, so the first has
///   the final say;
/// - names: like singular answers, except that a "use default" name only
///   wins if no later provider has a concrete name;
/// - side effects: every provider runs in order.
///
/// Nested chains behave exactly like the flattened sequence.
///
/// # Examples
///
/// ```
/// use vc_introspect::{Introspector, MetadataProvider, NopProvider, StdAnnotationProvider};
///
/// let chain = Introspector::pair(
///     Introspector::single(StdAnnotationProvider::new()),
///     Introspector::pair(Introspector::single(NopProvider), Introspector::nop()),
/// );
///
/// let names: Vec<_> = chain.all_providers().iter().map(|p| p.name()).collect();
/// assert_eq!(names, ["std", "nop", "nop"]);
/// ```
#[derive(Clone)]
pub enum Introspector {
    Single(Arc<dyn MetadataProvider>),
    Chain(Arc<[Introspector]>),
}

impl Introspector {
    /// Wraps one provider.
    #[inline]
    pub fn single(provider: impl MetadataProvider + 'static) -> Self {
        Self::Single(Arc::new(provider))
    }

    /// Wraps a shared provider.
    #[inline]
    pub fn from_arc(provider: Arc<dyn MetadataProvider>) -> Self {
        Self::Single(provider)
    }

    /// A provider with no opinion on anything.
    #[inline]
    pub fn nop() -> Self {
        Self::single(NopProvider)
    }

    /// Chains `primary` before `secondary`.
    pub fn pair(primary: Introspector, secondary: Introspector) -> Self {
        log::trace!("chaining providers: {primary:?} before {secondary:?}");
        Self::Chain(Arc::new([primary, secondary]))
    }

    /// Chains the providers in iteration order.
    ///
    /// An empty iterator gives [`Introspector::nop`], a single element is
    /// returned as is.
    pub fn from_providers(providers: impl IntoIterator<Item = Introspector>) -> Self {
        let mut providers: Vec<Introspector> = providers.into_iter().collect();
        match providers.len() {
            0 => Self::nop(),
            1 => providers.pop().unwrap_or_else(Self::nop),
            len => {
                log::trace!("chaining {len} providers");
                Self::Chain(providers.into())
            }
        }
    }

    /// Returns every provider reachable from this node, in precedence order.
    ///
    /// Chains are flattened, including chains wrapped as a single provider,
    /// so the result never contains a chain node.
    pub fn all_providers(&self) -> Vec<Arc<dyn MetadataProvider>> {
        let mut out = Vec::new();
        self.collect_providers(&mut out);
        out
    }

    fn collect_providers(&self, out: &mut Vec<Arc<dyn MetadataProvider>>) {
        match self {
            Self::Single(provider) => match provider.as_introspector() {
                Some(inner) => inner.collect_providers(out),
                None => out.push(Arc::clone(provider)),
            },
            Self::Chain(items) => {
                for item in items.iter() {
                    item.collect_providers(out);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Combination rules

    /// Direct children as providers. Nested chains answer through their own
    /// [`MetadataProvider`] impl, which applies the same rules.
    #[inline]
    fn nodes(&self) -> Nodes<'_> {
        match self {
            Self::Single(provider) => Nodes::Single(Some(&**provider)),
            Self::Chain(items) => Nodes::Chain(items.iter()),
        }
    }

    #[inline]
    fn first<T>(&self, f: impl FnMut(&dyn MetadataProvider) -> Option<T>) -> Option<T> {
        self.nodes().find_map(f)
    }

    #[inline]
    fn any(&self, mut f: impl FnMut(&dyn MetadataProvider) -> bool) -> bool {
        self.nodes().any(|provider| f(provider))
    }

    #[inline]
    fn first_set(&self, mut f: impl FnMut(&dyn MetadataProvider) -> OptBool) -> OptBool {
        self.nodes()
            .map(|provider| f(provider))
            .find(|answer| answer.is_set())
            .unwrap_or_default()
    }

    fn merge<T>(&self, f: impl FnMut(&dyn MetadataProvider) -> Option<Vec<T>>) -> Option<Vec<T>> {
        let mut merged: Option<Vec<T>> = None;
        for answer in self.nodes().filter_map(f) {
            match &mut merged {
                Some(list) => list.extend(answer),
                None => merged = Some(answer),
            }
        }
        merged
    }

    #[inline]
    fn thread<T>(&self, init: T, mut f: impl FnMut(&dyn MetadataProvider, T) -> T) -> T {
        self.nodes().rev().fold(init, |acc, provider| f(provider, acc))
    }

    fn find_name(
        &self,
        f: impl FnMut(&dyn MetadataProvider) -> Option<PropertyName>,
    ) -> Option<PropertyName> {
        let mut fallback = None;
        for name in self.nodes().filter_map(f) {
            if !name.is_use_default() {
                return Some(name);
            }
            fallback.get_or_insert(name);
        }
        fallback
    }

    #[inline]
    fn visit(&self, mut f: impl FnMut(&dyn MetadataProvider)) {
        self.nodes().for_each(|provider| f(provider));
    }
}

impl Default for Introspector {
    #[inline]
    fn default() -> Self {
        Self::nop()
    }
}

impl fmt::Debug for Introspector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(provider) => match provider.as_introspector() {
                Some(inner) => fmt::Debug::fmt(inner, f),
                None => f.write_str(provider.name()),
            },
            Self::Chain(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// Nodes

enum Nodes<'a> {
    Single(Option<&'a dyn MetadataProvider>),
    Chain(slice::Iter<'a, Introspector>),
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a dyn MetadataProvider;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Single(provider) => provider.take(),
            Self::Chain(iter) => iter.next().map(|item| item as &dyn MetadataProvider),
        }
    }
}

impl DoubleEndedIterator for Nodes<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Self::Single(provider) => provider.take(),
            Self::Chain(iter) => iter.next_back().map(|item| item as &dyn MetadataProvider),
        }
    }
}

// -----------------------------------------------------------------------------
// MetadataProvider

impl MetadataProvider for Introspector {
    fn name(&self) -> &'static str {
        "chain"
    }

    #[inline]
    fn as_introspector(&self) -> Option<&Introspector> {
        Some(self)
    }

    fn is_annotation_bundle(&self, annotation: TypeId) -> bool {
        self.any(|p| p.is_annotation_bundle(annotation))
    }

    fn find_object_id_info(&self, entity: &dyn Annotated) -> Option<ObjectIdInfo> {
        self.first(|p| p.find_object_id_info(entity))
    }

    fn find_object_reference_info(
        &self,
        entity: &dyn Annotated,
        info: Option<ObjectIdInfo>,
    ) -> Option<ObjectIdInfo> {
        self.thread(info, |p, info| p.find_object_reference_info(entity, info))
    }

    fn find_root_name(&self, class: &AnnotatedClass) -> Option<PropertyName> {
        self.find_name(|p| p.find_root_name(class))
    }

    fn find_properties_to_ignore(
        &self,
        entity: &dyn Annotated,
        for_serialization: bool,
    ) -> Option<Vec<Cow<'static, str>>> {
        self.merge(|p| p.find_properties_to_ignore(entity, for_serialization))
    }

    fn find_ignore_unknown_properties(&self, class: &AnnotatedClass) -> OptBool {
        self.first_set(|p| p.find_ignore_unknown_properties(class))
    }

    fn is_ignorable_type(&self, class: &AnnotatedClass) -> OptBool {
        self.first_set(|p| p.is_ignorable_type(class))
    }

    fn find_filter_id(&self, entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_filter_id(entity))
    }

    fn find_naming_strategy(&self, class: &AnnotatedClass) -> Option<HandlerRef> {
        self.first(|p| p.find_naming_strategy(class))
    }

    fn find_auto_detect_visibility(
        &self,
        class: &AnnotatedClass,
        checker: VisibilityChecker,
    ) -> VisibilityChecker {
        self.thread(checker, |p, checker| p.find_auto_detect_visibility(class, checker))
    }

    fn find_type_resolver(
        &self,
        config: &MapperConfig,
        class: &AnnotatedClass,
        base_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        self.first(|p| p.find_type_resolver(config, class, base_type))
    }

    fn find_property_type_resolver(
        &self,
        config: &MapperConfig,
        member: &AnnotatedMember,
        base_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        self.first(|p| p.find_property_type_resolver(config, member, base_type))
    }

    fn find_property_content_type_resolver(
        &self,
        config: &MapperConfig,
        member: &AnnotatedMember,
        container_type: &ValueType,
    ) -> Option<TypeResolverSpec> {
        self.first(|p| p.find_property_content_type_resolver(config, member, container_type))
    }

    fn find_subtypes(&self, entity: &dyn Annotated) -> Option<Vec<NamedType>> {
        self.merge(|p| p.find_subtypes(entity))
    }

    fn find_type_name(&self, class: &AnnotatedClass) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_type_name(class))
    }

    fn is_type_id(&self, member: &AnnotatedMember) -> OptBool {
        self.first_set(|p| p.is_type_id(member))
    }

    fn find_reference_type(&self, member: &AnnotatedMember) -> Option<ReferenceProperty> {
        self.first(|p| p.find_reference_type(member))
    }

    fn find_unwrapping_name_transformer(&self, member: &AnnotatedMember) -> Option<NameTransformer> {
        self.first(|p| p.find_unwrapping_name_transformer(member))
    }

    fn has_ignore_marker(&self, member: &AnnotatedMember) -> bool {
        self.any(|p| p.has_ignore_marker(member))
    }

    fn find_injectable_value_id(&self, member: &AnnotatedMember) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_injectable_value_id(member))
    }

    fn has_required_marker(&self, member: &AnnotatedMember) -> OptBool {
        self.first_set(|p| p.has_required_marker(member))
    }

    fn find_views(&self, entity: &dyn Annotated) -> Option<Vec<Class>> {
        self.first(|p| p.find_views(entity))
    }

    fn find_format(&self, entity: &dyn Annotated) -> Option<FormatValue> {
        self.first(|p| p.find_format(entity))
    }

    fn find_wrapper_name(&self, entity: &dyn Annotated) -> Option<PropertyName> {
        self.find_name(|p| p.find_wrapper_name(entity))
    }

    fn find_property_default_value(&self, entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_property_default_value(entity))
    }

    fn find_property_description(&self, entity: &dyn Annotated) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_property_description(entity))
    }

    fn find_property_index(&self, entity: &dyn Annotated) -> Option<i32> {
        self.first(|p| p.find_property_index(entity))
    }

    fn find_implicit_property_name(&self, member: &AnnotatedMember) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_implicit_property_name(member))
    }

    fn find_property_access(&self, entity: &dyn Annotated) -> Option<Access> {
        self.first(|p| p.find_property_access(entity))
    }

    fn find_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_serializer(entity))
    }

    fn find_key_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_key_serializer(entity))
    }

    fn find_content_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_content_serializer(entity))
    }

    fn find_null_serializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_null_serializer(entity))
    }

    fn find_serialization_typing(&self, entity: &dyn Annotated) -> Option<Typing> {
        self.first(|p| p.find_serialization_typing(entity))
    }

    fn find_serialization_converter(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_serialization_converter(entity))
    }

    fn find_serialization_content_converter(
        &self,
        member: &AnnotatedMember,
    ) -> Option<HandlerRef> {
        self.first(|p| p.find_serialization_content_converter(member))
    }

    fn find_serialization_inclusion(&self, entity: &dyn Annotated, default: Include) -> Include {
        self.thread(default, |p, value| p.find_serialization_inclusion(entity, value))
    }

    fn find_serialization_inclusion_for_content(
        &self,
        entity: &dyn Annotated,
        default: Include,
    ) -> Include {
        self.thread(default, |p, value| p.find_serialization_inclusion_for_content(entity, value))
    }

    fn find_property_inclusion(&self, entity: &dyn Annotated) -> InclusionValue {
        self.thread(InclusionValue::EMPTY, |p, value| {
            value.with_overrides(&p.find_property_inclusion(entity))
        })
    }

    fn find_serialization_type(&self, entity: &dyn Annotated) -> Option<Class> {
        self.first(|p| p.find_serialization_type(entity))
    }

    fn find_serialization_key_type(
        &self,
        entity: &dyn Annotated,
        base_key_type: &ValueType,
    ) -> Option<Class> {
        self.first(|p| p.find_serialization_key_type(entity, base_key_type))
    }

    fn find_serialization_content_type(
        &self,
        entity: &dyn Annotated,
        base_content_type: &ValueType,
    ) -> Option<Class> {
        self.first(|p| p.find_serialization_content_type(entity, base_content_type))
    }

    fn find_serialization_property_order(
        &self,
        class: &AnnotatedClass,
    ) -> Option<Vec<Cow<'static, str>>> {
        self.first(|p| p.find_serialization_property_order(class))
    }

    fn find_serialization_sort_alphabetically(&self, entity: &dyn Annotated) -> OptBool {
        self.first_set(|p| p.find_serialization_sort_alphabetically(entity))
    }

    fn find_and_add_virtual_properties(
        &self,
        config: &MapperConfig,
        class: &AnnotatedClass,
        properties: &mut Vec<VirtualProperty>,
    ) {
        self.visit(|p| p.find_and_add_virtual_properties(config, class, properties));
    }

    fn find_name_for_serialization(&self, entity: &dyn Annotated) -> Option<PropertyName> {
        self.find_name(|p| p.find_name_for_serialization(entity))
    }

    fn has_as_value_annotation(&self, member: &AnnotatedMember) -> bool {
        self.any(|p| p.has_as_value_annotation(member))
    }

    fn find_enum_value(&self, class: &AnnotatedClass, variant: &str) -> Option<Cow<'static, str>> {
        self.first(|p| p.find_enum_value(class, variant))
    }

    fn find_enum_values(
        &self,
        class: &AnnotatedClass,
        variants: &[&str],
        names: &mut [Option<Cow<'static, str>>],
    ) {
        self.visit(|p| p.find_enum_values(class, variants, names));
    }

    fn find_deserializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_deserializer(entity))
    }

    fn find_key_deserializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_key_deserializer(entity))
    }

    fn find_content_deserializer(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_content_deserializer(entity))
    }

    fn find_deserialization_converter(&self, entity: &dyn Annotated) -> Option<HandlerRef> {
        self.first(|p| p.find_deserialization_converter(entity))
    }

    fn find_deserialization_content_converter(
        &self,
        member: &AnnotatedMember,
    ) -> Option<HandlerRef> {
        self.first(|p| p.find_deserialization_content_converter(member))
    }

    fn find_deserialization_type(
        &self,
        entity: &dyn Annotated,
        base_type: &ValueType,
    ) -> Option<Class> {
        self.first(|p| p.find_deserialization_type(entity, base_type))
    }

    fn find_deserialization_key_type(
        &self,
        entity: &dyn Annotated,
        base_key_type: &ValueType,
    ) -> Option<Class> {
        self.first(|p| p.find_deserialization_key_type(entity, base_key_type))
    }

    fn find_deserialization_content_type(
        &self,
        entity: &dyn Annotated,
        base_content_type: &ValueType,
    ) -> Option<Class> {
        self.first(|p| p.find_deserialization_content_type(entity, base_content_type))
    }

    fn find_value_instantiator(&self, class: &AnnotatedClass) -> Option<HandlerRef> {
        self.first(|p| p.find_value_instantiator(class))
    }

    fn find_pojo_builder(&self, class: &AnnotatedClass) -> Option<Class> {
        self.first(|p| p.find_pojo_builder(class))
    }

    fn find_pojo_builder_config(&self, class: &AnnotatedClass) -> Option<BuilderConfig> {
        self.first(|p| p.find_pojo_builder_config(class))
    }

    fn find_name_for_deserialization(&self, entity: &dyn Annotated) -> Option<PropertyName> {
        self.find_name(|p| p.find_name_for_deserialization(entity))
    }

    fn has_any_setter_annotation(&self, member: &AnnotatedMember) -> bool {
        self.any(|p| p.has_any_setter_annotation(member))
    }

    fn has_any_getter_annotation(&self, member: &AnnotatedMember) -> bool {
        self.any(|p| p.has_any_getter_annotation(member))
    }

    fn has_creator_annotation(&self, entity: &dyn Annotated) -> bool {
        self.any(|p| p.has_creator_annotation(entity))
    }

    fn find_creator_binding(&self, entity: &dyn Annotated) -> Option<CreatorMode> {
        self.first(|p| p.find_creator_binding(entity))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::Introspector;
    use crate::MetadataProvider;
    use crate::annotated::{Annotated, AnnotatedClass, AnnotatedMember};
    use crate::ty::{Class, ValueType};
    use crate::value::{Include, InclusionValue, OptBool, PropertyName, Visibility};
    use crate::value::{VirtualProperty, VisibilityChecker};

    struct Zoo;

    /// A provider answering fixed values.
    #[derive(Default)]
    struct Fixed {
        label: &'static str,
        ignored: Option<&'static [&'static str]>,
        name: Option<PropertyName>,
        required: OptBool,
        ignore_marker: bool,
        value_include: Option<Include>,
        inclusion: InclusionValue,
        field_visibility: Option<Visibility>,
        enum_names: &'static [(&'static str, &'static str)],
    }

    impl Fixed {
        fn labeled(label: &'static str) -> Self {
            Self {
                label,
                ..Self::default()
            }
        }

        fn into_introspector(self) -> Introspector {
            Introspector::single(self)
        }
    }

    impl MetadataProvider for Fixed {
        fn name(&self) -> &'static str {
            self.label
        }

        fn find_properties_to_ignore(
            &self,
            _entity: &dyn Annotated,
            _for_serialization: bool,
        ) -> Option<Vec<Cow<'static, str>>> {
            self.ignored
                .map(|names| names.iter().map(|n| Cow::Borrowed(*n)).collect())
        }

        fn find_name_for_serialization(&self, _entity: &dyn Annotated) -> Option<PropertyName> {
            self.name.clone()
        }

        fn has_required_marker(&self, _member: &AnnotatedMember) -> OptBool {
            self.required
        }

        fn has_ignore_marker(&self, _member: &AnnotatedMember) -> bool {
            self.ignore_marker
        }

        fn find_serialization_inclusion(&self, _entity: &dyn Annotated, default: Include) -> Include {
            self.value_include.unwrap_or(default)
        }

        fn find_property_inclusion(&self, _entity: &dyn Annotated) -> InclusionValue {
            self.inclusion
        }

        fn find_auto_detect_visibility(
            &self,
            _class: &AnnotatedClass,
            checker: VisibilityChecker,
        ) -> VisibilityChecker {
            match self.field_visibility {
                Some(level) => checker.with_field(level),
                None => checker,
            }
        }

        fn find_and_add_virtual_properties(
            &self,
            _config: &crate::MapperConfig,
            _class: &AnnotatedClass,
            properties: &mut Vec<VirtualProperty>,
        ) {
            properties.push(VirtualProperty::attribute(self.label, ValueType::of::<u32>()));
        }

        fn find_enum_value(&self, _class: &AnnotatedClass, variant: &str) -> Option<Cow<'static, str>> {
            self.enum_names
                .iter()
                .find(|(v, _)| *v == variant)
                .map(|(_, name)| Cow::Borrowed(*name))
        }
    }

    fn labels(chain: &Introspector) -> Vec<&'static str> {
        chain.all_providers().iter().map(|p| p.name()).collect()
    }

    fn member() -> AnnotatedMember {
        AnnotatedMember::field(Class::of::<Zoo>(), "keeper", ValueType::of::<u32>())
    }

    #[test]
    fn flattening_is_associative() {
        let left = Introspector::pair(
            Introspector::pair(Fixed::labeled("a").into_introspector(), Fixed::labeled("b").into_introspector()),
            Fixed::labeled("c").into_introspector(),
        );
        let right = Introspector::pair(
            Fixed::labeled("a").into_introspector(),
            Introspector::pair(Fixed::labeled("b").into_introspector(), Fixed::labeled("c").into_introspector()),
        );

        assert_eq!(labels(&left), ["a", "b", "c"]);
        assert_eq!(labels(&right), ["a", "b", "c"]);
    }

    #[test]
    fn flattening_looks_through_wrapped_chains() {
        let inner = Introspector::pair(Fixed::labeled("a").into_introspector(), Fixed::labeled("b").into_introspector());
        let wrapped = Introspector::Single(Arc::new(inner));
        let chain = Introspector::pair(wrapped, Fixed::labeled("c").into_introspector());

        assert_eq!(labels(&chain), ["a", "b", "c"]);
        assert!(chain.all_providers().iter().all(|p| p.as_introspector().is_none()));
    }

    #[test]
    fn from_providers_edge_cases() {
        assert_eq!(labels(&Introspector::from_providers(Vec::<Introspector>::new())), ["nop"]);
        assert_eq!(labels(&Introspector::from_providers([Fixed::labeled("a").into_introspector()])), ["a"]);

        let chain = Introspector::from_providers(["a", "b", "c"].map(|l| Fixed::labeled(l).into_introspector()));
        assert_eq!(labels(&chain), ["a", "b", "c"]);
    }

    #[test]
    fn singular_answers_first_wins() {
        let both = Introspector::pair(
            Fixed { required: OptBool::False, ..Fixed::labeled("a") }.into_introspector(),
            Fixed { required: OptBool::True, ..Fixed::labeled("b") }.into_introspector(),
        );
        assert_eq!(both.has_required_marker(&member()), OptBool::False);

        let second = Introspector::pair(
            Fixed::labeled("a").into_introspector(),
            Fixed { required: OptBool::True, ..Fixed::labeled("b") }.into_introspector(),
        );
        assert_eq!(second.has_required_marker(&member()), OptBool::True);

        let neither = Introspector::pair(Fixed::labeled("a").into_introspector(), Fixed::labeled("b").into_introspector());
        assert_eq!(neither.has_required_marker(&member()), OptBool::Unset);
        assert!(neither.find_serialization_type(&member()).is_none());
    }

    #[test]
    fn boolean_markers_are_ored() {
        let chain = Introspector::pair(
            Fixed::labeled("a").into_introspector(),
            Fixed { ignore_marker: true, ..Fixed::labeled("b") }.into_introspector(),
        );
        assert!(chain.has_ignore_marker(&member()));
        assert!(!Introspector::nop().has_ignore_marker(&member()));
    }

    #[test]
    fn lists_are_concatenated_in_order() {
        let chain = Introspector::pair(
            Fixed { ignored: Some(&["x"]), ..Fixed::labeled("a") }.into_introspector(),
            Introspector::pair(
                Fixed::labeled("none").into_introspector(),
                Fixed { ignored: Some(&["y", "z", "x"]), ..Fixed::labeled("b") }.into_introspector(),
            ),
        );
        let class = AnnotatedClass::of::<Zoo>();

        let ignored = chain.find_properties_to_ignore(&class, true);
        assert_eq!(ignored, Some(vec![Cow::Borrowed("x"), "y".into(), "z".into(), "x".into()]));

        let empty = Introspector::pair(Fixed::labeled("a").into_introspector(), Fixed::labeled("b").into_introspector());
        assert!(empty.find_properties_to_ignore(&class, true).is_none());
    }

    #[test]
    fn use_default_name_defers_to_concrete_name() {
        let chain = Introspector::pair(
            Fixed { name: Some(PropertyName::USE_DEFAULT), ..Fixed::labeled("a") }.into_introspector(),
            Fixed { name: Some(PropertyName::new("keeper_name")), ..Fixed::labeled("b") }.into_introspector(),
        );
        let name = chain.find_name_for_serialization(&member());
        assert_eq!(name, Some(PropertyName::new("keeper_name")));

        let chain = Introspector::pair(
            Fixed { name: Some(PropertyName::USE_DEFAULT), ..Fixed::labeled("a") }.into_introspector(),
            Fixed::labeled("b").into_introspector(),
        );
        assert_eq!(chain.find_name_for_serialization(&member()), Some(PropertyName::USE_DEFAULT));

        let chain = Introspector::pair(
            Fixed { name: Some(PropertyName::new("first")), ..Fixed::labeled("a") }.into_introspector(),
            Fixed { name: Some(PropertyName::new("second")), ..Fixed::labeled("b") }.into_introspector(),
        );
        assert_eq!(chain.find_name_for_serialization(&member()), Some(PropertyName::new("first")));
    }

    #[test]
    fn running_values_give_first_the_final_say() {
        let chain = Introspector::pair(
            Fixed { value_include: Some(Include::NonEmpty), ..Fixed::labeled("a") }.into_introspector(),
            Fixed { value_include: Some(Include::NonNull), ..Fixed::labeled("b") }.into_introspector(),
        );
        assert_eq!(chain.find_serialization_inclusion(&member(), Include::Always), Include::NonEmpty);

        let chain = Introspector::pair(
            Fixed { field_visibility: Some(Visibility::Any), ..Fixed::labeled("a") }.into_introspector(),
            Fixed { field_visibility: Some(Visibility::None), ..Fixed::labeled("b") }.into_introspector(),
        );
        let checker = chain.find_auto_detect_visibility(&AnnotatedClass::of::<Zoo>(), VisibilityChecker::DEFAULT);
        assert_eq!(checker.field(), Visibility::Any);
        assert_eq!(checker.getter(), VisibilityChecker::DEFAULT.getter());
    }

    #[test]
    fn inclusion_overlays_field_wise() {
        let chain = Introspector::pair(
            Fixed {
                inclusion: InclusionValue::new(Include::NonNull, Include::UseDefaults),
                ..Fixed::labeled("a")
            }
            .into_introspector(),
            Fixed {
                inclusion: InclusionValue::new(Include::Always, Include::NonEmpty),
                ..Fixed::labeled("b")
            }
            .into_introspector(),
        );
        let inclusion = chain.find_property_inclusion(&member());
        assert_eq!(inclusion, InclusionValue::new(Include::NonNull, Include::NonEmpty));
    }

    #[test]
    fn side_effects_visit_every_provider() {
        let chain = Introspector::pair(
            Fixed::labeled("a").into_introspector(),
            Introspector::pair(Fixed::labeled("b").into_introspector(), Fixed::labeled("c").into_introspector()),
        );
        let config = crate::MapperConfig::default().with_introspector(chain.clone());

        let mut properties = Vec::new();
        chain.find_and_add_virtual_properties(&config, &AnnotatedClass::of::<Zoo>(), &mut properties);

        let names: Vec<_> = properties.iter().map(|p| p.name().simple_name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn enum_values_earlier_provider_wins() {
        let chain = Introspector::pair(
            Fixed { enum_names: &[("Red", "rouge")], ..Fixed::labeled("a") }.into_introspector(),
            Fixed { enum_names: &[("Red", "rot"), ("Blue", "blau")], ..Fixed::labeled("b") }.into_introspector(),
        );
        let mut names = [None, None, None];
        chain.find_enum_values(&AnnotatedClass::of::<Zoo>(), &["Red", "Blue", "Green"], &mut names);

        assert_eq!(names, [Some(Cow::Borrowed("rouge")), Some(Cow::Borrowed("blau")), None]);
    }
}
