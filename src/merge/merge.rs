use super::diagnostics::{MergeWarning, Reporter};
use crate::config::{
    ArgumentSpec, EnumSpec, EnumValueSpec, FieldSpec, InputFieldSpec, InputObjectSpec,
    ObjectSpec, ScalarSpec, SchemaConfig, TypeSpec,
};
use crate::error::{Error, Result};
use crate::schema::{
    EnumValueExtensions, FieldExtensions, ObjectExtensions, ScalarExtensions, Schema,
    SchemaEnum, SchemaFields, SchemaInputObject, SchemaObject, SchemaScalar, SchemaType,
};

/// The result of a successful merge: the annotated schema and the warnings
/// recorded along the way.
#[derive(Debug)]
pub struct MergeOutcome {
    pub schema: Schema,
    pub warnings: Vec<MergeWarning>,
}

/// Options forwarded to an external schema builder; see [merge_from_builder].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildSchemaOptions {
    /// Whether the builder should enable the incremental delivery directives
    /// `@defer` and `@stream`. Only the builder reads this; the merge itself
    /// is unaffected.
    pub enable_defer_stream: bool,
}

/// Merges plan configuration into a schema.
///
/// The merge takes ownership of the schema for its duration and hands it
/// back inside the [MergeOutcome] on success. On a fatal error the schema's
/// metadata may be partially written, so the graph is consumed rather than
/// returned; the error describes the first violation in configuration order.
///
/// Configuration entries referencing types, fields, arguments, or enum
/// values absent from the schema are recorded as warnings and skipped.
/// Configuration whose shape is invalid for its target is a fatal
/// [ShapeMismatch](crate::error::ErrorType::ShapeMismatch) error.
pub fn merge_schema_config(mut schema: Schema, config: &SchemaConfig) -> Result<MergeOutcome> {
    let mut reporter = Reporter::new();

    for (type_name, spec) in config.types.iter() {
        let Some(schema_type) = schema.get_type_mut(type_name) else {
            reporter.warn(MergeWarning::UnknownType {
                type_name: type_name.clone(),
            });
            continue;
        };

        // Kind dispatch. A new schema kind must be handled here explicitly;
        // there is no runtime fallback.
        match (schema_type, spec) {
            (SchemaType::Object(object), TypeSpec::Object(spec)) => {
                merge_object(object, spec, &mut reporter)?;
            }
            (SchemaType::InputObject(input_object), TypeSpec::InputObject(spec)) => {
                merge_input_object(input_object, spec, &mut reporter)?;
            }
            (SchemaType::Interface(interface), TypeSpec::Abstract(spec)) => {
                if let Some(resolve_type) = &spec.resolve_type {
                    interface.resolve_type = Some(resolve_type.clone());
                }
            }
            (SchemaType::Union(union_type), TypeSpec::Abstract(spec)) => {
                if let Some(resolve_type) = &spec.resolve_type {
                    union_type.resolve_type = Some(resolve_type.clone());
                }
            }
            (SchemaType::Scalar(scalar), TypeSpec::Scalar(spec)) => {
                merge_scalar(scalar, spec);
            }
            (SchemaType::Enum(enum_type), TypeSpec::Enum(spec)) => {
                merge_enum(enum_type, spec, &mut reporter)?;
            }
            (schema_type, spec) => {
                return Err(Error::new_with_path(
                    format!(
                        "\"{}\" is {} but its configuration is shaped for {}",
                        type_name,
                        schema_type.kind(),
                        spec.kind()
                    ),
                    type_name.clone(),
                    None,
                ));
            }
        }
    }

    Ok(MergeOutcome {
        schema,
        warnings: reporter.into_warnings(),
    })
}

/// Builds a schema through an externally supplied builder, then merges the
/// given configuration into it.
///
/// The builder receives the [BuildSchemaOptions] so that incremental
/// delivery support is decided at build time, before any configuration is
/// attached.
pub fn merge_from_builder<B>(
    builder: B,
    config: &SchemaConfig,
    options: BuildSchemaOptions,
) -> Result<MergeOutcome>
where
    B: FnOnce(&BuildSchemaOptions) -> Result<Schema>,
{
    let schema = builder(&options)?;
    merge_schema_config(schema, config)
}

fn merge_object(
    object: &mut SchemaObject,
    spec: &ObjectSpec,
    reporter: &mut Reporter,
) -> Result<()> {
    let type_name = object.name.clone();

    if let Some(assert_step) = &spec.assert_step {
        // A fresh slot per write; never merged into prior contents.
        object.extensions = Some(ObjectExtensions {
            assert_step: Some(assert_step.clone()),
        });
    }

    for (field_name, field_spec) in spec.fields.iter() {
        if field_name.starts_with("__") {
            return Err(Error::new_with_path(
                format!("\"{}\" is not a recognized type-level directive", field_name),
                format!("{}.{}", type_name, field_name),
                None,
            ));
        }

        let Some(field) = object.get_field_mut(field_name) else {
            reporter.warn(MergeWarning::UnknownField {
                type_name: type_name.clone(),
                field_name: field_name.clone(),
            });
            continue;
        };

        match field_spec {
            FieldSpec::Plan(plan) => {
                field.extensions = Some(FieldExtensions {
                    plan: Some(plan.clone()),
                    subscribe_plan: None,
                });
            }
            FieldSpec::Config(config) => {
                // Native hooks are replaced on the field itself; they are
                // not plan metadata.
                if let Some(resolve) = &config.resolve {
                    field.resolver = Some(resolve.clone());
                }
                if let Some(subscribe) = &config.subscribe {
                    field.subscriber = Some(subscribe.clone());
                }

                if config.plan.is_some() || config.subscribe_plan.is_some() {
                    field.extensions = Some(FieldExtensions {
                        plan: config.plan.clone(),
                        subscribe_plan: config.subscribe_plan.clone(),
                    });
                }

                if let Some(args) = &config.args {
                    for (argument_name, argument_spec) in args.iter() {
                        let Some(argument) = field.get_argument_mut(argument_name) else {
                            reporter.warn(MergeWarning::UnknownArgument {
                                type_name: type_name.clone(),
                                field_name: field_name.clone(),
                                argument_name: argument_name.clone(),
                            });
                            continue;
                        };

                        match argument_spec {
                            ArgumentSpec::Plan(_) => {
                                return Err(Error::new_with_path(
                                    "A bare function is ambiguous for an argument; \
                                     use the extensions form",
                                    format!(
                                        "{}.{}.args.{}",
                                        type_name, field_name, argument_name
                                    ),
                                    None,
                                ));
                            }
                            ArgumentSpec::Extensions(extensions) => {
                                argument.extensions = Some(extensions.clone());
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn merge_input_object(
    input_object: &mut SchemaInputObject,
    spec: &InputObjectSpec,
    reporter: &mut Reporter,
) -> Result<()> {
    let type_name = input_object.name.clone();

    for (field_name, field_spec) in spec.fields.iter() {
        if field_name.starts_with("__") {
            return Err(Error::new_with_path(
                format!("\"{}\" is not a recognized type-level directive", field_name),
                format!("{}.{}", type_name, field_name),
                None,
            ));
        }

        let Some(field) = input_object.get_field_mut(field_name) else {
            reporter.warn(MergeWarning::UnknownField {
                type_name: type_name.clone(),
                field_name: field_name.clone(),
            });
            continue;
        };

        match field_spec {
            InputFieldSpec::Plan(_) => {
                return Err(Error::new_with_path(
                    "A bare function is ambiguous for an input field; \
                     use the extensions form",
                    format!("{}.{}", type_name, field_name),
                    None,
                ));
            }
            InputFieldSpec::Extensions(extensions) => {
                field.extensions = Some(extensions.clone());
            }
        }
    }

    Ok(())
}

fn merge_scalar(scalar: &mut SchemaScalar, spec: &ScalarSpec) {
    if let Some(serialize) = &spec.serialize {
        scalar.serialize = Some(serialize.clone());
    }
    if let Some(parse_value) = &spec.parse_value {
        scalar.parse_value = Some(parse_value.clone());
    }
    if let Some(parse_literal) = &spec.parse_literal {
        scalar.parse_literal = Some(parse_literal.clone());
    }
    if let Some(plan) = &spec.plan {
        scalar.extensions = Some(ScalarExtensions {
            plan: Some(plan.clone()),
        });
    }
}

fn merge_enum(enum_type: &mut SchemaEnum, spec: &EnumSpec, reporter: &mut Reporter) -> Result<()> {
    let type_name = enum_type.name.clone();

    for (value_name, value_spec) in spec.values.iter() {
        if value_name.starts_with("__") {
            return Err(Error::new_with_path(
                format!("\"{}\" is not a recognized type-level directive", value_name),
                format!("{}.{}", type_name, value_name),
                None,
            ));
        }

        let Some(value) = enum_type.get_value_mut(value_name) else {
            reporter.warn(MergeWarning::UnknownEnumValue {
                type_name: type_name.clone(),
                value_name: value_name.clone(),
            });
            continue;
        };

        match value_spec {
            EnumValueSpec::Apply(apply_plan) => {
                value.extensions = Some(EnumValueExtensions {
                    apply_plan: Some(apply_plan.clone()),
                });
            }
            EnumValueSpec::Value(replacement) => {
                value.value = replacement.clone();
            }
            EnumValueSpec::Config(config) => {
                if let Some(apply_plan) = &config.apply_plan {
                    value.extensions = Some(EnumValueExtensions {
                        apply_plan: Some(apply_plan.clone()),
                    });
                }
                // Presence decides the overwrite, never truthiness: an
                // explicit Null or Int(0) replaces the stored value, while
                // an absent `value` leaves it untouched.
                if let Some(replacement) = &config.value {
                    value.value = replacement.clone();
                }
            }
        }
    }

    Ok(())
}
