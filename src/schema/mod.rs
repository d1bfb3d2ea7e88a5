//! # Schema Definitions
//!
//! The `schema` module contains the type graph that plan configuration is
//! merged into: named types with their fields, arguments, and enum values,
//! plus the hook and extension slots the merger writes behavior into.
//!
//! A [Schema] is built programmatically by an external schema builder and
//! then handed to [`merge_schema_config`](crate::merge::merge_schema_config)
//! together with a [SchemaConfig](crate::config::SchemaConfig):
//!
//! ```
//! use graphql_plan_merge::schema::*;
//!
//! let mut query = SchemaObject::new("Query");
//! query.add_field(SchemaField::new("hello", TypeRef::named("String")));
//!
//! let mut schema = Schema::new();
//! schema.add_type(query);
//! schema.set_query_type("Query");
//! ```
//!
//! [More information on the Schema struct.](Schema)

#[allow(clippy::module_inception)]
pub mod schema;

pub use schema::*;
