//! Scalar and domain marker types

use super::{TypeFactory, TypeProcessor};
use crate::context::TranslationContext;
use crate::swagger::SwaggerSchemaProperty;
use swagger_type_model_common::{BasicType, PropertyType};

/// Claims nodes whose `type`/`format` resolve to a [`BasicType`]
pub struct BasicTypeProcessor;

impl TypeProcessor for BasicTypeProcessor {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        _type_name: &str,
        _factory: &TypeFactory,
        _ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        resolve_basic_type(node.type_name(), node.format.as_deref()).map(PropertyType::basic)
    }
}

/// Basic type named by a `format` value
///
/// Accepts the usual OpenAPI spellings as well as the serialized
/// [`BasicType`] names used for domain markers.
pub(crate) fn format_marker(format: &str) -> Option<BasicType> {
    match format {
        "date" => Some(BasicType::Date),
        "date-time" => Some(BasicType::DateTime),
        "duration" => Some(BasicType::Duration),
        "hostname" => Some(BasicType::Hostname),
        "email" => Some(BasicType::Email),
        "uuid" => Some(BasicType::Uuid),
        "binary" => Some(BasicType::Blob),
        "json" => Some(BasicType::Json),
        // Plain scalars are declared through `type`, not `format`
        "null" | "string" | "number" | "boolean" => None,
        other => BasicType::from_name(other),
    }
}

/// Resolve a scalar type: `null` stays null, otherwise a known format marker
/// wins over the declared type; unknown formats fall back to the type
///
/// # Examples
/// ```
/// use swagger_type_model_common::BasicType;
/// use swagger_type_model_parser::type_processors::resolve_basic_type;
///
/// assert_eq!(resolve_basic_type(Some("string"), None), Some(BasicType::String));
/// assert_eq!(resolve_basic_type(Some("string"), Some("date-time")), Some(BasicType::DateTime));
/// assert_eq!(resolve_basic_type(Some("integer"), Some("int64")), Some(BasicType::Number));
/// assert_eq!(resolve_basic_type(Some("object"), None), None);
/// ```
pub fn resolve_basic_type(schema_type: Option<&str>, format: Option<&str>) -> Option<BasicType> {
    if schema_type == Some("null") {
        return Some(BasicType::Null);
    }
    if let Some(marker) = format.and_then(format_marker) {
        return Some(marker);
    }

    match schema_type? {
        "null" => Some(BasicType::Null),
        "string" => Some(BasicType::String),
        "number" | "integer" => Some(BasicType::Number),
        "boolean" => Some(BasicType::Boolean),
        "file" => Some(BasicType::Blob),
        _ => None,
    }
}
