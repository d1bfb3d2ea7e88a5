//! # Merge diagnostics
//!
//! Non-fatal findings are collected as structured [MergeWarning]s and
//! returned alongside the merged schema, so callers can assert on them
//! without capturing log output. Each warning is additionally mirrored to
//! `tracing` at warn level.

use std::fmt;

/// A non-fatal finding: configuration referenced something absent from the
/// schema and the entry was skipped.
///
/// These are warnings by design. A hand-maintained configuration may lag or
/// lead a regenerated schema, and a pruned schema must not invalidate the
/// configuration that still names the pruned parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "camelCase"))]
pub enum MergeWarning {
    /// The configuration names a type the schema does not define.
    #[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
    UnknownType { type_name: String },
    /// The configuration names a field its type does not define.
    #[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
    UnknownField {
        type_name: String,
        field_name: String,
    },
    /// The configuration names an argument its field does not declare.
    #[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
    UnknownArgument {
        type_name: String,
        field_name: String,
        argument_name: String,
    },
    /// The configuration names a value its enum does not declare.
    #[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
    UnknownEnumValue {
        type_name: String,
        value_name: String,
    },
}

impl MergeWarning {
    /// The configuration path this warning refers to, such as
    /// `Query.hello.args.name`.
    pub fn path(&self) -> String {
        match self {
            MergeWarning::UnknownType { type_name } => type_name.clone(),
            MergeWarning::UnknownField {
                type_name,
                field_name,
            } => format!("{}.{}", type_name, field_name),
            MergeWarning::UnknownArgument {
                type_name,
                field_name,
                argument_name,
            } => format!("{}.{}.args.{}", type_name, field_name, argument_name),
            MergeWarning::UnknownEnumValue {
                type_name,
                value_name,
            } => format!("{}.{}", type_name, value_name),
        }
    }
}

impl fmt::Display for MergeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            MergeWarning::UnknownType { .. } => "type",
            MergeWarning::UnknownField { .. } => "field",
            MergeWarning::UnknownArgument { .. } => "argument",
            MergeWarning::UnknownEnumValue { .. } => "enum value",
        };
        write!(
            f,
            "Configured {} \"{}\" does not exist in the schema",
            what,
            self.path()
        )
    }
}

/// Collects warnings during a merge.
#[derive(Debug, Default)]
pub(crate) struct Reporter {
    warnings: Vec<MergeWarning>,
}

impl Reporter {
    pub(crate) fn new() -> Self {
        Reporter::default()
    }

    pub(crate) fn warn(&mut self, warning: MergeWarning) {
        tracing::warn!(target: "graphql_plan_merge", "{}", warning);
        self.warnings.push(warning);
    }

    pub(crate) fn into_warnings(self) -> Vec<MergeWarning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_paths_and_messages() {
        let warning = MergeWarning::UnknownArgument {
            type_name: "Query".into(),
            field_name: "hello".into(),
            argument_name: "name".into(),
        };
        assert_eq!(warning.path(), "Query.hello.args.name");
        assert_eq!(
            warning.to_string(),
            "Configured argument \"Query.hello.args.name\" does not exist in the schema"
        );

        let warning = MergeWarning::UnknownType {
            type_name: "Missing".into(),
        };
        assert_eq!(warning.path(), "Missing");
    }
}
