//! Route model: one `Method` per HTTP operation

use crate::model::{PropertyType, Schema};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods an operation can be declared under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// All methods in the order operations are read from a path item
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translated request or response payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BodySchema {
    /// Inline schema
    Single(Schema),

    /// Top-level `oneOf`, one schema per alternative
    OneOf(Vec<Schema>),

    /// Bare reference to a named schema
    Link(String),

    /// Payload that is not an object, such as an array or a scalar
    Type(PropertyType),
}

impl BodySchema {
    pub fn contains_error(&self) -> bool {
        match self {
            BodySchema::Single(schema) => schema.contains_error(),
            BodySchema::OneOf(schemas) => schemas.iter().any(Schema::contains_error),
            BodySchema::Link(_) => false,
            BodySchema::Type(property_type) => property_type.contains_error(),
        }
    }
}

/// One HTTP operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Operation name from `x-metadata.method`
    pub name: String,

    /// First tag, used for grouping
    pub tag: String,

    pub url: String,

    pub http_method: HttpMethod,

    pub description: String,

    pub summary: String,

    pub request: Option<BodySchema>,

    pub response: Option<BodySchema>,
}

/// Methods grouped by tag, in document order
pub type Paths = IndexMap<String, Vec<Method>>;
