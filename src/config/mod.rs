//! # Plan Configuration
//!
//! The `config` module contains the declarative configuration map that is
//! merged into a [Schema](crate::schema::Schema): a mapping from type name to
//! a per-kind [TypeSpec] carrying hooks for the fields, arguments, and enum
//! values of that type.
//!
//! Each spec's shape mirrors what is legal for its target kind. Where the
//! configuration surface accepts two forms for one slot, such as a field
//! configured as a bare plan versus a structured [FieldConfig], the forms are
//! explicit enum variants, so the merger dispatches by exhaustive match.
//!
//! ```
//! use graphql_plan_merge::config::*;
//! use graphql_plan_merge::hooks::PlanFn;
//!
//! let config = SchemaConfig::new().with_type(
//!     "Query",
//!     ObjectSpec::new().field("hello", FieldSpec::Plan(PlanFn::new("hello-plan"))),
//! );
//! assert!(config.get("Query").is_some());
//! ```

use indexmap::IndexMap;

use crate::hooks::{
    ParseLiteralFn, ParseValueFn, PlanFn, ResolveTypeFn, ResolverFn, SerializeFn,
};
use crate::schema::{ArgumentExtensions, InputFieldExtensions, TypeKind};
use crate::value::ConstValue;

/// The configuration map: type name to per-kind spec, in insertion order.
///
/// Insertion order is observable: warnings and the first fatal error follow
/// the order entries were added in.
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    pub(crate) types: IndexMap<String, TypeSpec>,
}

impl SchemaConfig {
    pub fn new() -> Self {
        SchemaConfig::default()
    }

    /// Adds a spec for a named type, consuming and returning the config
    pub fn with_type<S: Into<String>, T: Into<TypeSpec>>(mut self, name: S, spec: T) -> Self {
        self.add_type(name, spec);
        self
    }

    /// Adds a spec for a named type
    pub fn add_type<S: Into<String>, T: Into<TypeSpec>>(&mut self, name: S, spec: T) {
        self.types.insert(name.into(), spec.into());
    }

    /// Retrieves the spec for a named type
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TypeSpec> {
        self.types.get(name)
    }

    /// Returns whether the configuration contains no specs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// A per-kind type spec; must match the kind of the schema node it names.
#[derive(Debug, Clone)]
pub enum TypeSpec {
    Object(ObjectSpec),
    InputObject(InputObjectSpec),
    Abstract(AbstractTypeSpec),
    Scalar(ScalarSpec),
    Enum(EnumSpec),
}

impl TypeSpec {
    /// The kind of schema node this spec is valid for.
    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeSpec::Object(_) => TypeKind::Object,
            TypeSpec::InputObject(_) => TypeKind::InputObject,
            TypeSpec::Abstract(_) => TypeKind::Abstract,
            TypeSpec::Scalar(_) => TypeKind::Scalar,
            TypeSpec::Enum(_) => TypeKind::Enum,
        }
    }
}

/// Configuration for an object type: per-field specs plus the optional
/// type-level step assertion.
#[derive(Debug, Clone, Default)]
pub struct ObjectSpec {
    /// The `__assertStep` type-level directive.
    pub assert_step: Option<PlanFn>,
    pub(crate) fields: IndexMap<String, FieldSpec>,
}

impl ObjectSpec {
    pub fn new() -> Self {
        ObjectSpec::default()
    }

    /// Sets the type-level step assertion
    pub fn assert_step(mut self, assert_step: PlanFn) -> Self {
        self.assert_step = Some(assert_step);
        self
    }

    /// Adds a spec for a named field
    pub fn field<S: Into<String>, F: Into<FieldSpec>>(mut self, name: S, spec: F) -> Self {
        self.fields.insert(name.into(), spec.into());
        self
    }
}

/// Configuration for one object field: either a bare plan, or the structured
/// form carrying any combination of plan and native hooks.
#[derive(Debug, Clone)]
pub enum FieldSpec {
    /// The bare function form: the field's plan and nothing else.
    Plan(PlanFn),
    /// The structured form.
    Config(FieldConfig),
}

impl From<PlanFn> for FieldSpec {
    #[inline]
    fn from(plan: PlanFn) -> Self {
        FieldSpec::Plan(plan)
    }
}

impl From<FieldConfig> for FieldSpec {
    #[inline]
    fn from(config: FieldConfig) -> Self {
        FieldSpec::Config(config)
    }
}

/// The structured form of a [FieldSpec].
///
/// `resolve` and `subscribe` replace the field's native hooks directly;
/// `plan` and `subscribe_plan` are written into the field's extension slot;
/// `args` carries per-argument specs.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    pub plan: Option<PlanFn>,
    pub subscribe_plan: Option<PlanFn>,
    pub resolve: Option<ResolverFn>,
    pub subscribe: Option<ResolverFn>,
    pub(crate) args: Option<IndexMap<String, ArgumentSpec>>,
}

impl FieldConfig {
    pub fn new() -> Self {
        FieldConfig::default()
    }

    pub fn plan(mut self, plan: PlanFn) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn subscribe_plan(mut self, subscribe_plan: PlanFn) -> Self {
        self.subscribe_plan = Some(subscribe_plan);
        self
    }

    pub fn resolve(mut self, resolve: ResolverFn) -> Self {
        self.resolve = Some(resolve);
        self
    }

    pub fn subscribe(mut self, subscribe: ResolverFn) -> Self {
        self.subscribe = Some(subscribe);
        self
    }

    /// Adds a spec for a named argument
    pub fn arg<S: Into<String>, A: Into<ArgumentSpec>>(mut self, name: S, spec: A) -> Self {
        self.args
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), spec.into());
        self
    }
}

/// Configuration for one field argument.
///
/// The bare function form is ambiguous for arguments and is rejected by the
/// merger; the extensions form is copied wholesale onto the argument.
#[derive(Debug, Clone)]
pub enum ArgumentSpec {
    Plan(PlanFn),
    Extensions(ArgumentExtensions),
}

impl From<ArgumentExtensions> for ArgumentSpec {
    #[inline]
    fn from(extensions: ArgumentExtensions) -> Self {
        ArgumentSpec::Extensions(extensions)
    }
}

/// Configuration for an input object type: per-field specs.
#[derive(Debug, Clone, Default)]
pub struct InputObjectSpec {
    pub(crate) fields: IndexMap<String, InputFieldSpec>,
}

impl InputObjectSpec {
    pub fn new() -> Self {
        InputObjectSpec::default()
    }

    /// Adds a spec for a named input field
    pub fn field<S: Into<String>, F: Into<InputFieldSpec>>(mut self, name: S, spec: F) -> Self {
        self.fields.insert(name.into(), spec.into());
        self
    }
}

/// Configuration for one input object field.
///
/// As with arguments, the bare function form is ambiguous, since it could be
/// an input-time or an apply-time transform, and is rejected by the merger.
#[derive(Debug, Clone)]
pub enum InputFieldSpec {
    Plan(PlanFn),
    Extensions(InputFieldExtensions),
}

impl From<InputFieldExtensions> for InputFieldSpec {
    #[inline]
    fn from(extensions: InputFieldExtensions) -> Self {
        InputFieldSpec::Extensions(extensions)
    }
}

/// Configuration for an interface or union type.
///
/// The only surface is the `__resolveType` type resolution hook.
#[derive(Debug, Clone, Default)]
pub struct AbstractTypeSpec {
    pub resolve_type: Option<ResolveTypeFn>,
}

impl AbstractTypeSpec {
    pub fn new() -> Self {
        AbstractTypeSpec::default()
    }

    pub fn resolve_type(mut self, resolve_type: ResolveTypeFn) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }
}

/// Configuration for a scalar type: coercion hooks and an optional
/// type-level plan, since scalars may have leaf-level plans.
#[derive(Debug, Clone, Default)]
pub struct ScalarSpec {
    pub serialize: Option<SerializeFn>,
    pub parse_value: Option<ParseValueFn>,
    pub parse_literal: Option<ParseLiteralFn>,
    pub plan: Option<PlanFn>,
}

impl ScalarSpec {
    pub fn new() -> Self {
        ScalarSpec::default()
    }

    pub fn serialize(mut self, serialize: SerializeFn) -> Self {
        self.serialize = Some(serialize);
        self
    }

    pub fn parse_value(mut self, parse_value: ParseValueFn) -> Self {
        self.parse_value = Some(parse_value);
        self
    }

    pub fn parse_literal(mut self, parse_literal: ParseLiteralFn) -> Self {
        self.parse_literal = Some(parse_literal);
        self
    }

    pub fn plan(mut self, plan: PlanFn) -> Self {
        self.plan = Some(plan);
        self
    }
}

/// Configuration for an enum type: per-value specs.
#[derive(Debug, Clone, Default)]
pub struct EnumSpec {
    pub(crate) values: IndexMap<String, EnumValueSpec>,
}

impl EnumSpec {
    pub fn new() -> Self {
        EnumSpec::default()
    }

    /// Adds a spec for a named enum value
    pub fn value<S: Into<String>, V: Into<EnumValueSpec>>(mut self, name: S, spec: V) -> Self {
        self.values.insert(name.into(), spec.into());
        self
    }
}

/// Configuration for one enum value.
#[derive(Debug, Clone)]
pub enum EnumValueSpec {
    /// The bare function form: the value's apply hook.
    Apply(PlanFn),
    /// The bare scalar form: a direct replacement of the internal
    /// representation.
    Value(ConstValue),
    /// The structured form.
    Config(EnumValueConfig),
}

impl From<ConstValue> for EnumValueSpec {
    #[inline]
    fn from(value: ConstValue) -> Self {
        EnumValueSpec::Value(value)
    }
}

impl From<EnumValueConfig> for EnumValueSpec {
    #[inline]
    fn from(config: EnumValueConfig) -> Self {
        EnumValueSpec::Config(config)
    }
}

/// The structured form of an [EnumValueSpec].
///
/// `value` distinguishes presence from absence: `Some(value)` replaces the
/// internal representation even when the value is `Null` or otherwise falsy,
/// while `None` leaves the existing representation untouched.
#[derive(Debug, Clone, Default)]
pub struct EnumValueConfig {
    pub apply_plan: Option<PlanFn>,
    pub value: Option<ConstValue>,
}

impl EnumValueConfig {
    pub fn new() -> Self {
        EnumValueConfig::default()
    }

    pub fn apply_plan(mut self, apply_plan: PlanFn) -> Self {
        self.apply_plan = Some(apply_plan);
        self
    }

    pub fn value<V: Into<ConstValue>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl From<ObjectSpec> for TypeSpec {
    #[inline]
    fn from(spec: ObjectSpec) -> Self {
        TypeSpec::Object(spec)
    }
}

impl From<InputObjectSpec> for TypeSpec {
    #[inline]
    fn from(spec: InputObjectSpec) -> Self {
        TypeSpec::InputObject(spec)
    }
}

impl From<AbstractTypeSpec> for TypeSpec {
    #[inline]
    fn from(spec: AbstractTypeSpec) -> Self {
        TypeSpec::Abstract(spec)
    }
}

impl From<ScalarSpec> for TypeSpec {
    #[inline]
    fn from(spec: ScalarSpec) -> Self {
        TypeSpec::Scalar(spec)
    }
}

impl From<EnumSpec> for TypeSpec {
    #[inline]
    fn from(spec: EnumSpec) -> Self {
        TypeSpec::Enum(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_in_insertion_order() {
        let config = SchemaConfig::new()
            .with_type("B", EnumSpec::new().value("X", ConstValue::Int(1)))
            .with_type("A", ObjectSpec::new());

        let names: Vec<_> = config.types.keys().collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(config.get("B").unwrap().kind(), TypeKind::Enum);
        assert_eq!(config.get("A").unwrap().kind(), TypeKind::Object);
        assert!(config.get("C").is_none());
    }

    #[test]
    fn field_config_accumulates_args() {
        let config = FieldConfig::new()
            .plan(PlanFn::new(()))
            .arg("first", ArgumentExtensions::default())
            .arg(
                "second",
                ArgumentExtensions {
                    auto_apply: Some(true),
                    ..Default::default()
                },
            );

        let args = config.args.as_ref().unwrap();
        assert_eq!(args.keys().collect::<Vec<_>>(), vec!["first", "second"]);
    }
}
