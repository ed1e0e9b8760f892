//! Inline objects

use super::basic::format_marker;
use super::{TypeFactory, TypeProcessor};
use crate::context::TranslationContext;
use crate::naming::nested_type_name;
use crate::swagger::SwaggerSchemaProperty;
use indexmap::IndexMap;
use swagger_type_model_common::PropertyType;

/// Claims nodes with `properties`, or `type: object` without a basic-type
/// format marker (`{type: object, format: JSON}` is left to the basic
/// processor)
///
/// Each property is translated through the factory; nested type names are
/// the parent name followed by the capitalized property name.
pub struct ObjectTypeProcessor;

impl TypeProcessor for ObjectTypeProcessor {
    fn name(&self) -> &'static str {
        "object"
    }

    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        factory: &TypeFactory,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        let is_plain_object =
            node.is_type("object") && node.format.as_deref().and_then(format_marker).is_none();
        if node.properties.is_none() && !is_plain_object {
            return None;
        }

        let mut properties = IndexMap::new();
        for (name, property) in node.properties.iter().flatten() {
            let translated = factory.translate_property(
                name,
                property,
                node.is_required(name),
                &nested_type_name(type_name, name),
                ctx,
            );
            properties.insert(name.clone(), translated);
        }

        Some(PropertyType::object(properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagger_type_model_common::BasicType;

    fn consume(json: &str, ctx: &mut TranslationContext) -> Option<PropertyType> {
        let node: SwaggerSchemaProperty = serde_json::from_str(json).unwrap();
        ObjectTypeProcessor.consume(&node, "Folder", &TypeFactory::default(), ctx)
    }

    #[test]
    fn test_required_flags_and_order() {
        let mut ctx = TranslationContext::new();
        let result = consume(
            r#"{
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "id": {"type": "string", "format": "uuid"},
                    "archived": {"type": "boolean"}
                },
                "required": ["id"]
            }"#,
            &mut ctx,
        )
        .unwrap();

        let PropertyType::Object { properties } = result else {
            panic!("expected object");
        };
        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "id", "archived"]);
        assert!(properties["id"].is_required);
        assert!(!properties["name"].is_required);
        assert_eq!(
            properties["id"].types,
            vec![PropertyType::basic(BasicType::Uuid)]
        );
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_properties_without_type() {
        let mut ctx = TranslationContext::new();
        let result = consume(r#"{"properties": {"count": {"type": "integer"}}}"#, &mut ctx);
        let Some(PropertyType::Object { properties }) = result else {
            panic!("expected object");
        };
        assert_eq!(properties.len(), 1);
    }

    #[test]
    fn test_empty_object() {
        let mut ctx = TranslationContext::new();
        let result = consume(r#"{"type": "object"}"#, &mut ctx);
        assert_eq!(result, Some(PropertyType::object(IndexMap::new())));
    }

    #[test]
    fn test_json_marker_left_to_basic() {
        let mut ctx = TranslationContext::new();
        assert_eq!(consume(r#"{"type": "object", "format": "JSON"}"#, &mut ctx), None);
    }

    #[test]
    fn test_nested_error_propagates_flag() {
        let mut ctx = TranslationContext::new();
        let result = consume(
            r#"{"properties": {"owner": {"properties": {"kind": {"type": "mystery"}}}}}"#,
            &mut ctx,
        )
        .unwrap();

        assert!(result.contains_error());
        assert!(ctx.has_errors());
        assert!(ctx.diagnostics()[0].message.ends_with("FolderOwnerKind"));
    }

    #[test]
    fn test_non_object_not_claimed() {
        let mut ctx = TranslationContext::new();
        assert_eq!(consume(r#"{"type": "string"}"#, &mut ctx), None);
    }
}
