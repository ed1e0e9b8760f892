//! Swagger document tree
//!
//! Simplified representation covering what the translator reads: paths,
//! operations, bodies and schema property nodes. Map-valued fields use
//! `IndexMap` so translation follows declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swagger_type_model_common::HttpMethod;

/// Document root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// OpenAPI version (e.g., "3.0.0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: IndexMap<String, SwaggerPath>,

    /// Reusable components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

/// Reusable components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Named top-level schemas
    #[serde(default)]
    pub schemas: IndexMap<String, SwaggerSchemaProperty>,
}

/// Operations declared for one path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaggerPath {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<SwaggerMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<SwaggerMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<SwaggerMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<SwaggerMethod>,
}

impl SwaggerPath {
    /// Get the operation declared for an HTTP method
    pub fn operation(&self, method: HttpMethod) -> Option<&SwaggerMethod> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
        }
    }

    /// Declared operations in `get`, `post`, `put`, `delete` order
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &SwaggerMethod)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

/// One HTTP operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaggerMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Tags (first one is used for grouping)
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(rename = "x-metadata")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MethodMetadata>,

    #[serde(rename = "requestBody")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,
}

impl SwaggerMethod {
    /// Operation name from `x-metadata.method`, ignoring empty strings
    pub fn method_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.method.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// First non-empty tag
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str).filter(|t| !t.is_empty())
    }

    /// Response declared for a status code
    pub fn response(&self, code: ResponseCode) -> Option<&Response> {
        self.responses.as_ref().and_then(|responses| {
            responses
                .iter()
                .find(|(key, _)| ResponseCode::parse(key) == Some(code))
                .map(|(_, response)| response)
        })
    }
}

/// `x-metadata` block of an operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Content map keyed by media type
pub type Content = IndexMap<String, MediaTypeObject>;

/// Request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// Response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// Look up the entry of a content map for a known media type
pub fn media_entry(content: &Content, media_type: MediaType) -> Option<&MediaTypeObject> {
    content
        .iter()
        .find(|(key, _)| MediaType::parse(key) == Some(media_type))
        .map(|(_, entry)| entry)
}

/// Entry of a content map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaTypeObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SwaggerSchemaProperty>,
}

/// Media types recognised in content maps
///
/// Only `Json` bodies are translated; the others are legal and skipped.
/// Keys outside this set are ignored as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    MultipartMixed,
    ImagePng,
    ImageJpeg,
    Wildcard,
}

impl MediaType {
    pub fn parse(key: &str) -> Option<MediaType> {
        match key {
            "application/json" => Some(MediaType::Json),
            "multipart/mixed" => Some(MediaType::MultipartMixed),
            "image/png" => Some(MediaType::ImagePng),
            "image/jpeg" => Some(MediaType::ImageJpeg),
            "*/*" => Some(MediaType::Wildcard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::MultipartMixed => "multipart/mixed",
            MediaType::ImagePng => "image/png",
            MediaType::ImageJpeg => "image/jpeg",
            MediaType::Wildcard => "*/*",
        }
    }
}

/// Key of a responses map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// Numeric HTTP status
    Status(u16),

    /// `default` response
    Default,
}

impl ResponseCode {
    pub const OK: ResponseCode = ResponseCode::Status(200);

    pub fn parse(key: &str) -> Option<ResponseCode> {
        if key == "default" {
            return Some(ResponseCode::Default);
        }
        key.parse::<u16>()
            .ok()
            .filter(|code| (100..600).contains(code))
            .map(ResponseCode::Status)
    }
}

/// `type` of a property node: a single name or a list of names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDeclaration {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeDeclaration {
    /// The one declared type; a one-element list counts as single
    pub fn single(&self) -> Option<&str> {
        match self {
            TypeDeclaration::Single(name) => Some(name),
            TypeDeclaration::Multiple(names) if names.len() == 1 => Some(&names[0]),
            TypeDeclaration::Multiple(_) => None,
        }
    }
}

/// `x-metadata` block of a schema node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaMetadata {
    /// Name of the top-level model this node stands for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// Schema or property node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwaggerSchemaProperty {
    /// Type name(s): string, number, integer, boolean, array, object, null
    #[serde(rename = "type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeDeclaration>,

    /// Format (e.g., date-time, uuid, Permit)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Enum values
    #[serde(rename = "enum")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    /// Items schema (for array type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SwaggerSchemaProperty>>,

    /// Properties (for object type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SwaggerSchemaProperty>>,

    /// Required properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Union alternatives
    #[serde(rename = "oneOf")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<SwaggerSchemaProperty>,

    /// Reference
    #[serde(rename = "$ref")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(rename = "x-metadata")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SchemaMetadata>,

    /// Any other keys (additionalProperties, x-* extensions, ...)
    #[serde(flatten)]
    pub extensions: IndexMap<String, serde_json::Value>,
}

impl SwaggerSchemaProperty {
    /// Node with a single declared type
    pub fn of_type(name: impl Into<String>) -> Self {
        Self {
            schema_type: Some(TypeDeclaration::Single(name.into())),
            ..Default::default()
        }
    }

    /// Single declared type name, if any
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(TypeDeclaration::single)
    }

    pub fn is_type(&self, name: &str) -> bool {
        self.type_name() == Some(name)
    }

    /// Named model marker (`x-metadata.schema`), ignoring empty names
    pub fn model_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.schema.as_deref())
            .filter(|name| !name.is_empty())
    }

    pub fn has_properties(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }

    /// Schema name a reference points at
    /// e.g., "#/components/schemas/Folder" -> "Folder"
    pub fn reference_target(&self) -> Option<&str> {
        let ref_path = self.ref_path.as_deref()?;
        Some(ref_path.rsplit('/').next().unwrap_or(ref_path))
    }

    /// The part of this node that applies to one entry of a `type` list
    ///
    /// `properties`, `required`, `$ref` and the model marker stay with
    /// `object`, `items` with `array`, `enum` and `format` with scalar types.
    /// A `null` entry is a bare null node.
    pub fn narrow_to_type(&self, name: &str) -> SwaggerSchemaProperty {
        let mut candidate = SwaggerSchemaProperty::of_type(name);
        if name == "null" {
            return candidate;
        }

        candidate.description = self.description.clone();
        match name {
            "object" => {
                candidate.properties = self.properties.clone();
                candidate.required = self.required.clone();
                candidate.ref_path = self.ref_path.clone();
                candidate.metadata = self.metadata.clone();
            }
            "array" => candidate.items = self.items.clone(),
            _ => {
                candidate.enum_values = self.enum_values.clone();
                candidate.format = self.format.clone();
            }
        }
        candidate
    }
}
