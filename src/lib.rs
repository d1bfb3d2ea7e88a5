//! `graphql_plan_merge`
//! =========
//!
//! _Merging of declarative plan configuration into GraphQL schemas._
//!
//! The **`graphql_plan_merge`** library does one thing: it takes a fully
//! built GraphQL type graph and a declarative map from type, field, argument,
//! and enum value names to runtime behavior — plans, resolvers, serialization
//! hooks, enum internal values — and attaches every declared behavior to the
//! correct node of the graph.
//!
//! The library deliberately does not parse schema language, plan or execute
//! anything, or serve requests. The type graph arrives from an external
//! schema builder; the annotated graph leaves for an external planner and
//! executor that read the hook and extension slots this library writes. What
//! remains in between is the part that must be exact: five kinds of type
//! node, each with its own legal configuration shape, its own substructure,
//! and its own rules for what is optional, mandatory, or ambiguous.
//!
//! Mismatches are split by intent. Configuration naming something the graph
//! simply does not have is a warning and the entry is skipped, so a
//! hand-maintained configuration survives schema regeneration in both
//! directions. Configuration whose shape cannot be interpreted safely is a
//! fatal error that aborts the merge.
//!
//! [A good place to start is the `merge` module...](merge)

pub mod config;
pub mod error;
pub mod hooks;
pub mod merge;
pub mod schema;
pub mod value;

#[cfg(feature = "json")]
pub mod json;
