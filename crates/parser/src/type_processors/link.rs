//! Bare cross-schema references

use super::{TypeFactory, TypeProcessor};
use crate::context::TranslationContext;
use crate::swagger::SwaggerSchemaProperty;
use swagger_type_model_common::PropertyType;

/// Claims `$ref` nodes without inline properties
pub struct LinkTypeProcessor;

impl TypeProcessor for LinkTypeProcessor {
    fn name(&self) -> &'static str {
        "link"
    }

    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        _factory: &TypeFactory,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        if node.has_properties() {
            return None;
        }
        let target = node.reference_target()?;

        if target.is_empty() {
            return Some(ctx.fail(format!(
                "Reference {:?} of {} does not name a schema",
                node.ref_path.as_deref().unwrap_or_default(),
                type_name
            )));
        }

        Some(PropertyType::link(target))
    }
}
