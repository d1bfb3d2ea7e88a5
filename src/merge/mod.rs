//! # Merging Configuration into Schemas
//!
//! The `merge` module attaches a [SchemaConfig](crate::config::SchemaConfig)
//! to a [Schema](crate::schema::Schema): for every configured type it
//! classifies the schema node's kind, dispatches to the matching per-kind
//! policy, and writes the configured hooks into the node's slots.
//!
//! The merge runs once, synchronously, to completion or failure. References
//! to absent schema parts are collected as [MergeWarning]s; structurally
//! invalid configuration aborts the whole merge with the first
//! [Error](crate::error::Error) encountered in configuration order, and the
//! partially mutated graph is discarded.
//!
//! ```
//! use graphql_plan_merge::config::{FieldSpec, ObjectSpec, SchemaConfig};
//! use graphql_plan_merge::hooks::PlanFn;
//! use graphql_plan_merge::merge::merge_schema_config;
//! use graphql_plan_merge::schema::*;
//!
//! let mut query = SchemaObject::new("Query");
//! query.add_field(SchemaField::new("hello", TypeRef::named("String")));
//! let mut schema = Schema::new();
//! schema.add_type(query);
//! schema.set_query_type("Query");
//!
//! let config = SchemaConfig::new()
//!     .with_type("Query", ObjectSpec::new().field("hello", PlanFn::new("plan")));
//!
//! let outcome = merge_schema_config(schema, &config).unwrap();
//! assert!(outcome.warnings.is_empty());
//! ```

pub mod diagnostics;
#[allow(clippy::module_inception)]
mod merge;

pub use diagnostics::MergeWarning;
pub use merge::*;
