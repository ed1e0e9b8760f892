//! Arrays

use super::{TypeFactory, TypeProcessor};
use crate::context::TranslationContext;
use crate::swagger::SwaggerSchemaProperty;
use swagger_type_model_common::PropertyType;

/// Claims `type: array` nodes, translating `items` through the factory
/// under the name `<type_name>Item`
pub struct ArrayTypeProcessor;

impl TypeProcessor for ArrayTypeProcessor {
    fn name(&self) -> &'static str {
        "array"
    }

    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        factory: &TypeFactory,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        if !node.is_type("array") {
            return None;
        }

        let Some(items) = node.items.as_deref() else {
            return Some(ctx.fail(format!("Array {} has no items", type_name)));
        };

        let element_type = factory.translate_type(items, &format!("{}Item", type_name), ctx);
        Some(PropertyType::array(element_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagger_type_model_common::BasicType;

    fn consume(json: &str, ctx: &mut TranslationContext) -> Option<PropertyType> {
        let node: SwaggerSchemaProperty = serde_json::from_str(json).unwrap();
        ArrayTypeProcessor.consume(&node, "Tags", &TypeFactory::default(), ctx)
    }

    #[test]
    fn test_array_of_strings() {
        let mut ctx = TranslationContext::new();
        let result = consume(r#"{"type": "array", "items": {"type": "string"}}"#, &mut ctx);
        assert_eq!(
            result,
            Some(PropertyType::array(PropertyType::basic(BasicType::String)))
        );
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_array_of_links() {
        let mut ctx = TranslationContext::new();
        let result = consume(
            r##"{"type": "array", "items": {"$ref": "#/components/schemas/Tag"}}"##,
            &mut ctx,
        );
        assert_eq!(result, Some(PropertyType::array(PropertyType::link("Tag"))));
    }

    #[test]
    fn test_missing_items_is_error() {
        let mut ctx = TranslationContext::new();
        let result = consume(r#"{"type": "array"}"#, &mut ctx).unwrap();
        assert_eq!(result, PropertyType::error("Array Tags has no items"));
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_unknown_items_names_element() {
        let mut ctx = TranslationContext::new();
        let result = consume(r#"{"type": "array", "items": {}}"#, &mut ctx).unwrap();
        assert!(result.contains_error());
        assert_eq!(
            ctx.diagnostics()[0].message,
            "Unknown type or property {} TagsItem"
        );
    }

    #[test]
    fn test_non_array_not_claimed() {
        let mut ctx = TranslationContext::new();
        assert_eq!(consume(r#"{"items": {"type": "string"}}"#, &mut ctx), None);
    }
}
