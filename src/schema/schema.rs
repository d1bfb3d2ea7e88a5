use hashbrown::HashMap;
use indexmap::IndexMap;

use crate::error::{Error, ErrorType, Result};
use crate::hooks::{
    ParseLiteralFn, ParseValueFn, PlanFn, ResolveTypeFn, ResolverFn, SerializeFn,
};
use crate::value::ConstValue;

/// Schema Definition
///
/// A schema is created from root types for each kind of operation and is then
/// the target that plan configuration is merged into. The schema's structure
/// is fixed once built: merging never adds or removes types, fields,
/// arguments, or enum values, it only writes behavior into their hook and
/// extension slots.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) query_type: Option<String>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: HashMap<String, SchemaType>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    /// Returns whether the schema is a default, empty schema
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.query_type.is_none()
            && self.mutation_type.is_none()
            && self.subscription_type.is_none()
    }

    /// Adds a type definition, keyed by its name
    pub fn add_type<T: Into<SchemaType>>(&mut self, schema_type: T) {
        let schema_type = schema_type.into();
        self.types.insert(schema_type.name().to_string(), schema_type);
    }

    /// Marks a named object type as the root type for query operations
    pub fn set_query_type<S: Into<String>>(&mut self, name: S) {
        self.query_type = Some(name.into());
    }

    /// Marks a named object type as the root type for mutation operations
    pub fn set_mutation_type<S: Into<String>>(&mut self, name: S) {
        self.mutation_type = Some(name.into());
    }

    /// Marks a named object type as the root type for subscription operations
    pub fn set_subscription_type<S: Into<String>>(&mut self, name: S) {
        self.subscription_type = Some(name.into());
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&SchemaObject> {
        self.root_type(self.query_type.as_deref())
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&SchemaObject> {
        self.root_type(self.mutation_type.as_deref())
    }

    /// Returns the root object type for subscription operations
    #[inline]
    pub fn subscription_type(&self) -> Option<&SchemaObject> {
        self.root_type(self.subscription_type.as_deref())
    }

    fn root_type(&self, name: Option<&str>) -> Option<&SchemaObject> {
        name.and_then(|name| self.get_type(name))
            .and_then(SchemaType::object)
    }

    /// Retrieves a type by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    #[inline]
    pub(crate) fn get_type_mut(&mut self, name: &str) -> Option<&mut SchemaType> {
        self.types.get_mut(name)
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, field: SchemaField);

    /// Get the ordered map of all fields
    fn get_fields(&self) -> &IndexMap<String, SchemaField>;

    /// Get a known field by name
    fn get_field(&self, name: &str) -> Option<&SchemaField> {
        self.get_fields().get(name)
    }

    /// Get a known field by name for mutation
    fn get_field_mut(&mut self, name: &str) -> Option<&mut SchemaField>;
}

/// Generic trait for any abstract schema type that has possible object types
pub trait SchemaPossibleTypes: Sized {
    /// Add a new [SchemaObject] by name to the list of possible types
    fn add_possible_type<S: Into<String>>(&mut self, object: S);

    /// Get list of possible [SchemaObject] type names
    fn get_possible_types(&self) -> &[String];

    /// Get a specific possible type by name if it exists on the type
    #[inline]
    fn get_possible_type(&self, name: &str) -> Option<&str> {
        self.get_possible_types()
            .iter()
            .find(|possible_type| possible_type.as_str() == name)
            .map(String::as_str)
    }
}

/// Type-level extensions of an [SchemaObject], written by the merger.
#[derive(Debug, Clone, Default)]
pub struct ObjectExtensions {
    /// Asserts the step class a plan for this type must produce; consumed by
    /// the downstream planner.
    pub assert_step: Option<PlanFn>,
}

/// Plan extensions of a [SchemaField], written by the merger.
#[derive(Debug, Clone, Default)]
pub struct FieldExtensions {
    pub plan: Option<PlanFn>,
    pub subscribe_plan: Option<PlanFn>,
}

/// Extensions of a [SchemaArgument], written by the merger.
///
/// Input fields carry the structurally identical [InputFieldExtensions].
#[derive(Debug, Clone, Default)]
pub struct ArgumentExtensions {
    pub input_plan: Option<PlanFn>,
    pub apply_plan: Option<PlanFn>,
    pub auto_apply: Option<bool>,
}

/// Extensions of a [SchemaInputField], written by the merger.
pub type InputFieldExtensions = ArgumentExtensions;

/// Type-level extensions of a [SchemaScalar], written by the merger.
#[derive(Debug, Clone, Default)]
pub struct ScalarExtensions {
    pub plan: Option<PlanFn>,
}

/// Extensions of a [SchemaEnumValue], written by the merger.
#[derive(Debug, Clone, Default)]
pub struct EnumValueExtensions {
    pub apply_plan: Option<PlanFn>,
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of fields and the
/// interfaces they implement.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, Clone)]
pub struct SchemaObject {
    pub name: String,
    pub(crate) fields: IndexMap<String, SchemaField>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) extensions: Option<ObjectExtensions>,
}

impl SchemaObject {
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        SchemaObject {
            name: name.into(),
            fields: IndexMap::new(),
            interfaces: Vec::new(),
            extensions: None,
        }
    }

    /// Add a new interface by name to the list of implemented interfaces
    pub fn add_interface<S: Into<String>>(&mut self, interface: S) {
        self.interfaces.push(interface.into());
    }

    /// Get list of implemented interface names
    #[inline]
    pub fn get_interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Returns the type-level extensions, if any were merged
    #[inline]
    pub fn extensions(&self) -> Option<&ObjectExtensions> {
        self.extensions.as_ref()
    }
}

impl SchemaFields for SchemaObject {
    fn add_field(&mut self, field: SchemaField) {
        self.fields.insert(field.name.clone(), field);
    }

    fn get_fields(&self) -> &IndexMap<String, SchemaField> {
        &self.fields
    }

    fn get_field_mut(&mut self, name: &str) -> Option<&mut SchemaField> {
        self.fields.get_mut(name)
    }
}

/// An object Field type definition.
///
/// A field is like a function that given its arguments as input values
/// produces an output value. Its resolver and subscriber slots hold native
/// behavior; its extension slot holds plan metadata for the downstream
/// planner.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub name: String,
    pub(crate) arguments: IndexMap<String, SchemaArgument>,
    pub output_type: TypeRef,
    pub(crate) resolver: Option<ResolverFn>,
    pub(crate) subscriber: Option<ResolverFn>,
    pub(crate) extensions: Option<FieldExtensions>,
}

impl SchemaField {
    #[inline]
    pub fn new<S: Into<String>>(name: S, output_type: TypeRef) -> Self {
        SchemaField {
            name: name.into(),
            arguments: IndexMap::new(),
            output_type,
            resolver: None,
            subscriber: None,
            extensions: None,
        }
    }

    pub fn add_argument(&mut self, arg: SchemaArgument) {
        self.arguments.insert(arg.name.clone(), arg);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaArgument> {
        self.arguments.get(name)
    }

    #[inline]
    pub(crate) fn get_argument_mut(&mut self, name: &str) -> Option<&mut SchemaArgument> {
        self.arguments.get_mut(name)
    }

    /// Returns the field's native resolver, if any
    #[inline]
    pub fn resolver(&self) -> Option<&ResolverFn> {
        self.resolver.as_ref()
    }

    /// Returns the field's native subscriber, if any
    #[inline]
    pub fn subscriber(&self) -> Option<&ResolverFn> {
        self.subscriber.as_ref()
    }

    /// Returns the field's plan extensions, if any were merged
    #[inline]
    pub fn extensions(&self) -> Option<&FieldExtensions> {
        self.extensions.as_ref()
    }
}

/// A field Argument definition.
#[derive(Debug, Clone)]
pub struct SchemaArgument {
    pub name: String,
    pub input_type: TypeRef,
    pub(crate) extensions: Option<ArgumentExtensions>,
}

impl SchemaArgument {
    #[inline]
    pub fn new<S: Into<String>>(name: S, input_type: TypeRef) -> Self {
        SchemaArgument {
            name: name.into(),
            input_type,
            extensions: None,
        }
    }

    /// Returns the argument's extensions, if any were merged
    #[inline]
    pub fn extensions(&self) -> Option<&ArgumentExtensions> {
        self.extensions.as_ref()
    }
}

/// An Interface type definition.
///
/// A field that returns an interface as its return type may return any object
/// that implements this interface. The `resolve_type` slot holds the hook
/// that maps a runtime value to the concrete type's name.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, Clone)]
pub struct SchemaInterface {
    pub name: String,
    pub(crate) fields: IndexMap<String, SchemaField>,
    pub(crate) possible_types: Vec<String>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}

impl SchemaInterface {
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        SchemaInterface {
            name: name.into(),
            fields: IndexMap::new(),
            possible_types: Vec::new(),
            resolve_type: None,
        }
    }

    /// Returns the type resolution hook, if any was merged
    #[inline]
    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}

impl SchemaFields for SchemaInterface {
    fn add_field(&mut self, field: SchemaField) {
        self.fields.insert(field.name.clone(), field);
    }

    fn get_fields(&self) -> &IndexMap<String, SchemaField> {
        &self.fields
    }

    fn get_field_mut(&mut self, name: &str) -> Option<&mut SchemaField> {
        self.fields.get_mut(name)
    }
}

impl SchemaPossibleTypes for SchemaInterface {
    fn add_possible_type<S: Into<String>>(&mut self, object: S) {
        self.possible_types.push(object.into());
    }

    fn get_possible_types(&self) -> &[String] {
        &self.possible_types
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its
/// stead when it is defined as an output type.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, Clone)]
pub struct SchemaUnion {
    pub name: String,
    pub(crate) possible_types: Vec<String>,
    pub(crate) resolve_type: Option<ResolveTypeFn>,
}

impl SchemaUnion {
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        SchemaUnion {
            name: name.into(),
            possible_types: Vec::new(),
            resolve_type: None,
        }
    }

    /// Returns the type resolution hook, if any was merged
    #[inline]
    pub fn resolve_type(&self) -> Option<&ResolveTypeFn> {
        self.resolve_type.as_ref()
    }
}

impl SchemaPossibleTypes for SchemaUnion {
    fn add_possible_type<S: Into<String>>(&mut self, object: S) {
        self.possible_types.push(object.into());
    }

    fn get_possible_types(&self) -> &[String] {
        &self.possible_types
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values that are represented with specific
/// serialization and parsing hooks, which make the values returnable to a
/// client or readable by an API.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, Clone)]
pub struct SchemaScalar {
    pub name: String,
    pub(crate) serialize: Option<SerializeFn>,
    pub(crate) parse_value: Option<ParseValueFn>,
    pub(crate) parse_literal: Option<ParseLiteralFn>,
    pub(crate) extensions: Option<ScalarExtensions>,
}

impl SchemaScalar {
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        SchemaScalar {
            name: name.into(),
            serialize: None,
            parse_value: None,
            parse_literal: None,
            extensions: None,
        }
    }

    /// Returns the serialization hook, if any was merged
    #[inline]
    pub fn serialize(&self) -> Option<&SerializeFn> {
        self.serialize.as_ref()
    }

    /// Returns the input value parsing hook, if any was merged
    #[inline]
    pub fn parse_value(&self) -> Option<&ParseValueFn> {
        self.parse_value.as_ref()
    }

    /// Returns the literal parsing hook, if any was merged
    #[inline]
    pub fn parse_literal(&self) -> Option<&ParseLiteralFn> {
        self.parse_literal.as_ref()
    }

    /// Returns the type-level extensions, if any were merged
    #[inline]
    pub fn extensions(&self) -> Option<&ScalarExtensions> {
        self.extensions.as_ref()
    }
}

/// An Enum type definition with its ordered values.
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, Clone)]
pub struct SchemaEnum {
    pub name: String,
    pub(crate) values: IndexMap<String, SchemaEnumValue>,
}

impl SchemaEnum {
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        SchemaEnum {
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    /// Adds a value whose internal representation defaults to its own name
    pub fn add_value<S: Into<String>>(&mut self, value: S) {
        let name = value.into();
        let value = SchemaEnumValue {
            value: ConstValue::String(name.clone()),
            name: name.clone(),
            extensions: None,
        };
        self.values.insert(name, value);
    }

    /// Get the ordered map of all values
    #[inline]
    pub fn get_values(&self) -> &IndexMap<String, SchemaEnumValue> {
        &self.values
    }

    /// Get a known value by name
    #[inline]
    pub fn get_value(&self, name: &str) -> Option<&SchemaEnumValue> {
        self.values.get(name)
    }

    #[inline]
    pub(crate) fn get_value_mut(&mut self, name: &str) -> Option<&mut SchemaEnumValue> {
        self.values.get_mut(name)
    }
}

/// A single value of a [SchemaEnum] and its internal runtime representation.
#[derive(Debug, Clone)]
pub struct SchemaEnumValue {
    pub name: String,
    pub(crate) value: ConstValue,
    pub(crate) extensions: Option<EnumValueExtensions>,
}

impl SchemaEnumValue {
    /// Returns the internal runtime representation of this value
    #[inline]
    pub fn value(&self) -> &ConstValue {
        &self.value
    }

    /// Returns the value's extensions, if any were merged
    #[inline]
    pub fn extensions(&self) -> Option<&EnumValueExtensions> {
        self.extensions.as_ref()
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that
/// must adhere to the shape of an Input Object definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, Clone)]
pub struct SchemaInputObject {
    pub name: String,
    pub(crate) fields: IndexMap<String, SchemaInputField>,
}

impl SchemaInputObject {
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        SchemaInputObject {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn add_field(&mut self, field: SchemaInputField) {
        self.fields.insert(field.name.clone(), field);
    }

    /// Get the ordered map of all input fields
    #[inline]
    pub fn get_fields(&self) -> &IndexMap<String, SchemaInputField> {
        &self.fields
    }

    /// Get a known input field by name
    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&SchemaInputField> {
        self.fields.get(name)
    }

    #[inline]
    pub(crate) fn get_field_mut(&mut self, name: &str) -> Option<&mut SchemaInputField> {
        self.fields.get_mut(name)
    }
}

/// A single field of a [SchemaInputObject].
#[derive(Debug, Clone)]
pub struct SchemaInputField {
    pub name: String,
    pub input_type: TypeRef,
    pub(crate) extensions: Option<InputFieldExtensions>,
}

impl SchemaInputField {
    #[inline]
    pub fn new<S: Into<String>>(name: S, input_type: TypeRef) -> Self {
        SchemaInputField {
            name: name.into(),
            input_type,
            extensions: None,
        }
    }

    /// Returns the input field's extensions, if any were merged
    #[inline]
    pub fn extensions(&self) -> Option<&InputFieldExtensions> {
        self.extensions.as_ref()
    }
}

/// A named type enum that represents all possible GraphQL definition types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, Clone)]
pub enum SchemaType {
    InputObject(SchemaInputObject),
    Object(SchemaObject),
    Union(SchemaUnion),
    Interface(SchemaInterface),
    Scalar(SchemaScalar),
    Enum(SchemaEnum),
}

impl SchemaType {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            SchemaType::InputObject(x) => &x.name,
            SchemaType::Object(x) => &x.name,
            SchemaType::Union(x) => &x.name,
            SchemaType::Interface(x) => &x.name,
            SchemaType::Scalar(x) => &x.name,
            SchemaType::Enum(x) => &x.name,
        }
    }

    /// Classifies this type into the kind its configuration must match.
    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            SchemaType::Object(_) => TypeKind::Object,
            SchemaType::InputObject(_) => TypeKind::InputObject,
            SchemaType::Interface(_) | SchemaType::Union(_) => TypeKind::Abstract,
            SchemaType::Scalar(_) => TypeKind::Scalar,
            SchemaType::Enum(_) => TypeKind::Enum,
        }
    }

    pub fn object(&self) -> Option<&SchemaObject> {
        match self {
            SchemaType::Object(x) => Some(x),
            _ => None,
        }
    }

    pub fn input_object(&self) -> Option<&SchemaInputObject> {
        match self {
            SchemaType::InputObject(x) => Some(x),
            _ => None,
        }
    }

    pub fn interface(&self) -> Option<&SchemaInterface> {
        match self {
            SchemaType::Interface(x) => Some(x),
            _ => None,
        }
    }

    pub fn union_type(&self) -> Option<&SchemaUnion> {
        match self {
            SchemaType::Union(x) => Some(x),
            _ => None,
        }
    }

    pub fn scalar(&self) -> Option<&SchemaScalar> {
        match self {
            SchemaType::Scalar(x) => Some(x),
            _ => None,
        }
    }

    pub fn enum_type(&self) -> Option<&SchemaEnum> {
        match self {
            SchemaType::Enum(x) => Some(x),
            _ => None,
        }
    }
}

/// The five kinds of type node that configuration dispatches over.
///
/// Interfaces and unions share a kind since both are configured through the
/// same type resolution surface.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeKind {
    Object,
    InputObject,
    Abstract,
    Scalar,
    Enum,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKind::Object => write!(f, "an object type"),
            TypeKind::InputObject => write!(f, "an input object type"),
            TypeKind::Abstract => write!(f, "an interface or union type"),
            TypeKind::Scalar => write!(f, "a scalar type"),
            TypeKind::Enum => write!(f, "an enum type"),
        }
    }
}

impl From<SchemaObject> for SchemaType {
    #[inline]
    fn from(schema_object: SchemaObject) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl From<SchemaInputObject> for SchemaType {
    #[inline]
    fn from(schema_input_object: SchemaInputObject) -> Self {
        SchemaType::InputObject(schema_input_object)
    }
}

impl From<SchemaUnion> for SchemaType {
    #[inline]
    fn from(schema_union: SchemaUnion) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl From<SchemaInterface> for SchemaType {
    #[inline]
    fn from(schema_interface: SchemaInterface) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

impl From<SchemaScalar> for SchemaType {
    #[inline]
    fn from(schema_scalar: SchemaScalar) -> Self {
        SchemaType::Scalar(schema_scalar)
    }
}

impl From<SchemaEnum> for SchemaType {
    #[inline]
    fn from(schema_enum: SchemaEnum) -> Self {
        SchemaType::Enum(schema_enum)
    }
}

/// A reference to a named type, possibly wrapped in list or non-null
/// modifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Type(String),
    ListType(Box<TypeRef>),
    NonNullType(Box<TypeRef>),
}

impl TypeRef {
    #[inline]
    pub fn named<S: Into<String>>(name: S) -> Self {
        TypeRef::Type(name.into())
    }

    #[inline]
    pub fn list(self) -> Self {
        TypeRef::ListType(Box::new(self))
    }

    #[inline]
    pub fn non_null(self) -> Self {
        TypeRef::NonNullType(Box::new(self))
    }

    /// Returns the innermost named type's name
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Type(name) => name,
            TypeRef::ListType(of_type) => of_type.name(),
            TypeRef::NonNullType(of_type) => of_type.name(),
        }
    }

    /// Resolves the innermost named type against a schema.
    ///
    /// A dangling reference means the graph itself is inconsistent, which is
    /// an internal error rather than a configuration mistake.
    pub fn of_type<'a>(&self, schema: &'a Schema) -> Result<&'a SchemaType> {
        let name = self.name();
        schema.get_type(name).ok_or_else(|| {
            Error::new(
                format!("Unknown type \"{}\" referenced in the schema", name),
                Some(ErrorType::Internal),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    fn sample_schema() -> Schema {
        let mut query = SchemaObject::new("Query");
        let mut hello = SchemaField::new("hello", TypeRef::named("String"));
        hello.add_argument(SchemaArgument::new("name", TypeRef::named("String")));
        query.add_field(hello);
        query.add_field(SchemaField::new(
            "words",
            TypeRef::named("String").non_null().list(),
        ));

        let mut schema = Schema::new();
        schema.add_type(SchemaType::Scalar(SchemaScalar::new("String")));
        schema.add_type(query);
        schema.set_query_type("Query");
        schema
    }

    #[test]
    fn empty_schema() {
        assert!(Schema::new().is_empty());
        assert!(!sample_schema().is_empty());
    }

    #[test]
    fn root_and_field_lookup() {
        let schema = sample_schema();
        let query = schema.query_type().unwrap();
        assert_eq!(query.name, "Query");
        assert!(schema.mutation_type().is_none());

        let hello = query.get_field("hello").unwrap();
        assert!(hello.get_argument("name").is_some());
        assert!(hello.get_argument("missing").is_none());
        assert!(query.get_field("missing").is_none());

        // Nothing is merged yet, so no slots are populated.
        assert!(hello.resolver().is_none());
        assert!(hello.extensions().is_none());
    }

    #[test]
    fn type_ref_resolution() {
        let schema = sample_schema();
        let query = schema.query_type().unwrap();

        let words = query.get_field("words").unwrap();
        assert_eq!(words.output_type.name(), "String");
        let resolved = words.output_type.of_type(&schema).unwrap();
        assert_eq!(resolved.name(), "String");
        assert_eq!(resolved.kind(), TypeKind::Scalar);

        let dangling = TypeRef::named("Missing");
        let error = dangling.of_type(&schema).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Internal);
    }

    #[test]
    fn enum_values_default_to_their_name() {
        let mut status = SchemaEnum::new("Status");
        status.add_value("ACTIVE");
        status.add_value("INACTIVE");

        let active = status.get_value("ACTIVE").unwrap();
        assert_eq!(active.value(), &ConstValue::String("ACTIVE".into()));
        assert!(active.extensions().is_none());
        assert_eq!(
            status.get_values().keys().collect::<Vec<_>>(),
            vec!["ACTIVE", "INACTIVE"]
        );
    }
}
