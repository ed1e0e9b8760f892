//! Named model references

use super::{TypeFactory, TypeProcessor};
use crate::context::TranslationContext;
use crate::swagger::SwaggerSchemaProperty;
use swagger_type_model_common::PropertyType;

/// Claims nodes marked with `x-metadata.schema`
///
/// The node becomes a link to the named model. When it also carries inline
/// `properties` it is the model's definition, which is queued on the context
/// for the schema factory to translate under the model's name.
pub struct ModelTypeProcessor;

impl TypeProcessor for ModelTypeProcessor {
    fn name(&self) -> &'static str {
        "model"
    }

    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        _type_name: &str,
        _factory: &TypeFactory,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        let model = node.model_name()?;

        if node.has_properties() {
            ctx.register_model(model, node);
        }

        Some(PropertyType::link(model))
    }
}
