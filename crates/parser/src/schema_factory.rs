//! Named schema translation
//!
//! The schema factory turns top-level schema nodes into [`Schema`] records,
//! feeding every property through the [`TypeFactory`]. It keeps a registry of
//! translated schemas and resolves models queued by the model processor.

use crate::context::TranslationContext;
use crate::naming::nested_type_name;
use crate::swagger::SwaggerSchemaProperty;
use crate::type_processors::TypeFactory;
use indexmap::IndexMap;
use swagger_type_model_common::{BodySchema, Schema};

/// Translates request and response bodies for the path processor
#[cfg_attr(test, mockall::automock)]
pub trait SchemaTranslator {
    /// Translate a body schema node under `name`
    fn translate_body(
        &mut self,
        name: &str,
        node: &SwaggerSchemaProperty,
        ctx: &mut TranslationContext,
    ) -> BodySchema;
}

/// Schema-level factory with a name-keyed registry
///
/// Registry policy: a schema translated again under an existing name replaces
/// the earlier entry (with a warning). Queued models are only translated when
/// their name is not registered yet, which is what stops self-referencing
/// models from looping.
pub struct SchemaFactory {
    type_factory: TypeFactory,
    schemas: IndexMap<String, Schema>,
}

impl SchemaFactory {
    pub fn new(type_factory: TypeFactory) -> Self {
        Self {
            type_factory,
            schemas: IndexMap::new(),
        }
    }

    pub fn type_factory(&self) -> &TypeFactory {
        &self.type_factory
    }

    /// Translated schemas in registration order
    pub fn schemas(&self) -> &IndexMap<String, Schema> {
        &self.schemas
    }

    pub fn into_schemas(self) -> IndexMap<String, Schema> {
        self.schemas
    }

    /// Translate a named schema, register it and resolve queued models
    pub fn translate_schema(
        &mut self,
        name: &str,
        node: &SwaggerSchemaProperty,
        ctx: &mut TranslationContext,
    ) -> Schema {
        let schema = self.build_schema(name, node, ctx);
        self.register(schema.clone());
        self.resolve_pending_models(ctx);
        schema
    }

    /// Translate every `components.schemas` entry under its own name
    pub fn translate_components(
        &mut self,
        schemas: &IndexMap<String, SwaggerSchemaProperty>,
        ctx: &mut TranslationContext,
    ) {
        for (name, node) in schemas {
            self.translate_schema(name, node, ctx);
        }
    }

    fn build_schema(
        &self,
        name: &str,
        node: &SwaggerSchemaProperty,
        ctx: &mut TranslationContext,
    ) -> Schema {
        let mut schema = Schema::new(name);

        if !node.has_properties() {
            log::debug!("Schema {} declares no properties", name);
        }

        for (property_name, property) in node.properties.iter().flatten() {
            let translated = self.type_factory.translate_property(
                property_name,
                property,
                node.is_required(property_name),
                &nested_type_name(name, property_name),
                ctx,
            );
            schema.properties.insert(property_name.clone(), translated);
        }

        schema
    }

    fn register(&mut self, schema: Schema) {
        if self.schemas.contains_key(&schema.name) {
            log::warn!(
                "Schema {} translated more than once; keeping the latest",
                schema.name
            );
        }
        self.schemas.insert(schema.name.clone(), schema);
    }

    fn resolve_pending_models(&mut self, ctx: &mut TranslationContext) {
        while let Some((name, node)) = ctx.take_pending_model() {
            if self.schemas.contains_key(&name) {
                continue;
            }
            log::debug!("Resolving queued model {}", name);
            let schema = self.build_schema(&name, &node, ctx);
            self.schemas.insert(name, schema);
        }
    }
}

impl Default for SchemaFactory {
    fn default() -> Self {
        Self::new(TypeFactory::default())
    }
}

impl SchemaTranslator for SchemaFactory {
    /// Bare references become links, top-level `oneOf` one schema per
    /// alternative, arrays and scalars a type through the type chain, anything
    /// else a single inline schema
    fn translate_body(
        &mut self,
        name: &str,
        node: &SwaggerSchemaProperty,
        ctx: &mut TranslationContext,
    ) -> BodySchema {
        if !node.has_properties() {
            if let Some(target) = node.reference_target().filter(|t| !t.is_empty()) {
                return BodySchema::Link(target.to_string());
            }
        }

        if !node.one_of.is_empty() {
            let schemas = node
                .one_of
                .iter()
                .enumerate()
                .map(|(index, alternative)| {
                    let alternative_name = alternative
                        .model_name()
                        .map(String::from)
                        .unwrap_or_else(|| format!("{}{}", name, index + 1));
                    self.translate_schema(&alternative_name, alternative, ctx)
                })
                .collect();
            return BodySchema::OneOf(schemas);
        }

        if is_value_body(node) {
            let property_type = self.type_factory.translate_type(node, name, ctx);
            self.resolve_pending_models(ctx);
            return BodySchema::Type(property_type);
        }

        BodySchema::Single(self.translate_schema(name, node, ctx))
    }
}

/// Arrays, enums and scalars: declared shapes that have no properties to
/// build a schema from
fn is_value_body(node: &SwaggerSchemaProperty) -> bool {
    node.properties.is_none()
        && !node.is_type("object")
        && (node.schema_type.is_some() || node.enum_values.is_some() || node.items.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagger_type_model_common::{BasicType, PropertyType};

    fn node(json: &str) -> SwaggerSchemaProperty {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_translate_schema_registers() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let schema = factory.translate_schema(
            "Folder",
            &node(
                r#"{
                    "type": "object",
                    "properties": {"name": {"type": "string"}},
                    "required": ["name"]
                }"#,
            ),
            &mut ctx,
        );

        assert_eq!(schema.name, "Folder");
        assert!(schema.properties["name"].is_required);
        assert_eq!(
            schema.properties["name"].types,
            vec![PropertyType::basic(BasicType::String)]
        );
        assert_eq!(factory.schemas().get("Folder"), Some(&schema));
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_inline_model_is_resolved() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let schema = factory.translate_schema(
            "Folder",
            &node(
                r#"{"properties": {"owner": {
                    "x-metadata": {"schema": "User"},
                    "properties": {"email": {"type": "string", "format": "email"}}
                }}}"#,
            ),
            &mut ctx,
        );

        assert_eq!(
            schema.properties["owner"].types,
            vec![PropertyType::link("User")]
        );
        let user = &factory.schemas()["User"];
        assert_eq!(
            user.properties["email"].types,
            vec![PropertyType::basic(BasicType::Email)]
        );
        assert!(!ctx.has_pending_models());
    }

    #[test]
    fn test_self_referencing_model_terminates() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        factory.translate_schema(
            "Root",
            &node(
                r#"{"properties": {"node": {
                    "x-metadata": {"schema": "TreeNode"},
                    "properties": {
                        "parent": {
                            "x-metadata": {"schema": "TreeNode"},
                            "properties": {"id": {"type": "string"}}
                        }
                    }
                }}}"#,
            ),
            &mut ctx,
        );

        let names: Vec<&str> = factory.schemas().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Root", "TreeNode"]);
        assert_eq!(
            factory.schemas()["TreeNode"].properties["parent"].types,
            vec![PropertyType::link("TreeNode")]
        );
    }

    #[test]
    fn test_body_reference_is_link() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let body = factory.translate_body(
            "FolderGetRequest",
            &node(r##"{"$ref": "#/components/schemas/Folder"}"##),
            &mut ctx,
        );
        assert_eq!(body, BodySchema::Link("Folder".to_string()));
        assert!(factory.schemas().is_empty());
    }

    #[test]
    fn test_body_one_of() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let body = factory.translate_body(
            "ItemCreateRequest",
            &node(
                r#"{"oneOf": [
                    {
                        "x-metadata": {"schema": "Document"},
                        "properties": {"title": {"type": "string"}}
                    },
                    {"properties": {"url": {"type": "string", "format": "hostname"}}}
                ]}"#,
            ),
            &mut ctx,
        );

        let BodySchema::OneOf(schemas) = body else {
            panic!("expected oneOf body");
        };
        let names: Vec<&str> = schemas.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Document", "ItemCreateRequest2"]);
    }

    #[test]
    fn test_array_body_is_type() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let body = factory.translate_body(
            "FolderListRequest",
            &node(r##"{"type": "array", "items": {"$ref": "#/components/schemas/Folder"}}"##),
            &mut ctx,
        );

        assert_eq!(
            body,
            BodySchema::Type(PropertyType::array(PropertyType::link("Folder")))
        );
        assert!(factory.schemas().is_empty());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_array_body_resolves_inline_model() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let body = factory.translate_body(
            "UserListRequest",
            &node(
                r#"{"type": "array", "items": {
                    "x-metadata": {"schema": "User"},
                    "properties": {"email": {"type": "string", "format": "email"}}
                }}"#,
            ),
            &mut ctx,
        );

        assert_eq!(
            body,
            BodySchema::Type(PropertyType::array(PropertyType::link("User")))
        );
        assert!(factory.schemas().contains_key("User"));
        assert!(!ctx.has_pending_models());
    }

    #[test]
    fn test_scalar_and_enum_bodies() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let scalar = node(r#"{"type": "string"}"#);
        let body = factory.translate_body("PingRequest", &scalar, &mut ctx);
        assert_eq!(
            body,
            BodySchema::Type(PropertyType::basic(BasicType::String))
        );

        let empty_enum = node(r#"{"enum": []}"#);
        let body = factory.translate_body("ModeRequest", &empty_enum, &mut ctx);
        assert!(body.contains_error());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_retranslation_keeps_latest() {
        let mut factory = SchemaFactory::default();
        let mut ctx = TranslationContext::new();

        let first = node(r#"{"properties": {"a": {"type": "string"}}}"#);
        let second = node(r#"{"properties": {"b": {"type": "number"}}}"#);
        factory.translate_schema("Shared", &first, &mut ctx);
        factory.translate_schema("Shared", &second, &mut ctx);

        assert_eq!(factory.schemas().len(), 1);
        assert!(factory.schemas()["Shared"].properties.contains_key("b"));
    }
}
