//! Type-resolution engine
//!
//! A [`TypeFactory`] holds an ordered chain of [`TypeProcessor`]s. For every
//! property node the processors are asked in turn; the first one that
//! recognises the node's shape produces its [`PropertyType`].
//!
//! ## Priority
//!
//! The default chain (see [`default_type_processors`]) is:
//!
//! 1. [`ModelTypeProcessor`]: `x-metadata.schema` marker
//! 2. [`LinkTypeProcessor`]: bare `$ref`
//! 3. [`ObjectTypeProcessor`]: `properties` or `type: object`
//! 4. [`EnumTypeProcessor`]: `enum` list
//! 5. [`ArrayTypeProcessor`]: `type: array`
//! 6. [`BasicTypeProcessor`]: scalar `type`/`format`
//!
//! More specific shapes come first. A node carrying both a model marker and
//! `properties` must become a link to the model, never an inline object.
//!
//! Nothing is tried after the chain; the factory itself turns an unclaimed
//! node into an `Error` value.

mod array;
mod basic;
mod enumeration;
mod link;
mod model;
mod object;

pub use array::ArrayTypeProcessor;
pub use basic::{resolve_basic_type, BasicTypeProcessor};
pub use enumeration::EnumTypeProcessor;
pub use link::LinkTypeProcessor;
pub use model::ModelTypeProcessor;
pub use object::ObjectTypeProcessor;

use crate::context::TranslationContext;
use crate::swagger::{SwaggerSchemaProperty, TypeDeclaration};
use swagger_type_model_common::{ObjectProperty, PropertyType, DEFAULT_MAX_DEPTH};

/// One link of the resolution chain
pub trait TypeProcessor {
    /// Short name used in debug logs
    fn name(&self) -> &'static str;

    /// Translate `node` if its shape belongs to this processor
    ///
    /// Returns `None` when the shape is not recognised so the next processor
    /// can try. A recognised but invalid node yields an `Error` value recorded
    /// through [`TranslationContext::fail`]. Nested nodes are translated with
    /// `factory`.
    fn consume(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        factory: &TypeFactory,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType>;
}

/// The six processors in resolution priority order
pub fn default_type_processors() -> Vec<Box<dyn TypeProcessor>> {
    vec![
        Box::new(ModelTypeProcessor),
        Box::new(LinkTypeProcessor),
        Box::new(ObjectTypeProcessor),
        Box::new(EnumTypeProcessor),
        Box::new(ArrayTypeProcessor),
        Box::new(BasicTypeProcessor),
    ]
}

/// Ordered chain of type processors
pub struct TypeFactory {
    processors: Vec<Box<dyn TypeProcessor>>,
    max_depth: usize,
}

impl TypeFactory {
    /// Build a factory trying `processors` in the given order
    pub fn new(processors: Vec<Box<dyn TypeProcessor>>) -> Self {
        Self {
            processors,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how deep nested objects and arrays are followed
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Processor names in the order they are tried
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Translate one property node
    ///
    /// Always returns a value. Unclaimed nodes and nodes nested deeper than
    /// the depth limit become `Error` values and flag the context.
    pub fn translate_type(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        ctx: &mut TranslationContext,
    ) -> PropertyType {
        if ctx.depth() >= self.max_depth {
            return ctx.fail(format!(
                "Maximum nesting depth {} exceeded while translating {}",
                self.max_depth, type_name
            ));
        }

        ctx.enter();
        let result = self.run_chain(node, type_name, ctx);
        ctx.leave();

        result.unwrap_or_else(|| {
            let dump = serde_json::to_string(node).unwrap_or_default();
            ctx.fail(format!("Unknown type or property {} {}", dump, type_name))
        })
    }

    fn run_chain(
        &self,
        node: &SwaggerSchemaProperty,
        type_name: &str,
        ctx: &mut TranslationContext,
    ) -> Option<PropertyType> {
        self.processors.iter().find_map(|processor| {
            let result = processor.consume(node, type_name, self, ctx);
            if result.is_some() {
                log::debug!("{} resolved by {} processor", type_name, processor.name());
            }
            result
        })
    }

    /// Translate a named member of an object or schema
    ///
    /// `oneOf` alternatives and multi-entry `type` lists each contribute one
    /// candidate type, in declaration order.
    pub fn translate_property(
        &self,
        name: &str,
        node: &SwaggerSchemaProperty,
        is_required: bool,
        type_name: &str,
        ctx: &mut TranslationContext,
    ) -> ObjectProperty {
        let types = if !node.one_of.is_empty() {
            node.one_of
                .iter()
                .map(|alternative| self.translate_type(alternative, type_name, ctx))
                .collect()
        } else {
            match &node.schema_type {
                Some(TypeDeclaration::Multiple(names)) if names.len() > 1 => names
                    .iter()
                    .map(|single| {
                        self.translate_type(&node.narrow_to_type(single), type_name, ctx)
                    })
                    .collect(),
                _ => vec![self.translate_type(node, type_name, ctx)],
            }
        };

        ObjectProperty::new(name, is_required, types)
    }
}

impl Default for TypeFactory {
    fn default() -> Self {
        Self::new(default_type_processors())
    }
}
