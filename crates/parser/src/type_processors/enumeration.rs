//! String enumerations

use super::{TypeFactory, TypeProcessor};
use crate::context::TranslationContext;
use crate::swagger::SwaggerSchemaProperty;
use serde_json::Value;
use swagger_type_model_common::PropertyType;

/// Claims nodes declaring an `enum` list
///
/// Values are echoed in declaration order, duplicates included. Numbers and
/// booleans are kept in their JSON spelling; `null`, arrays and objects are
/// rejected, as is an empty list.
pub struct EnumTypeProcessor;

impl TypeProcessor for EnumTypeProcessor {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        _factory: &TypeFactory,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        let values = node.enum_values.as_ref()?;

        if values.is_empty() {
            return Some(ctx.fail(format!("Enum {} declares no values", type_name)));
        }

        let mut strings = Vec::with_capacity(values.len());
        for value in values {
            match value {
                Value::String(s) => strings.push(s.clone()),
                Value::Number(_) | Value::Bool(_) => strings.push(value.to_string()),
                other => {
                    return Some(ctx.fail(format!(
                        "Enum {} contains non-scalar value {}",
                        type_name, other
                    )));
                }
            }
        }

        Some(PropertyType::Enum { values: strings })
    }
}
