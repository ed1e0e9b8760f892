//! Recursive property type model
//!
//! Every property of a translated schema resolves to one or more
//! [`PropertyType`] values. The union is closed: new shapes are added as new
//! variants.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar and domain-specific types a property can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicType {
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "DateOnly")]
    Date,
    #[serde(rename = "DateTime")]
    DateTime,
    #[serde(rename = "Duration")]
    Duration,
    #[serde(rename = "Hostname")]
    Hostname,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "Permit")]
    Permit,
    #[serde(rename = "FolderType")]
    FolderType,
    #[serde(rename = "InvitationStatus")]
    InvitationStatus,
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "ModelType")]
    ModelType,
    #[serde(rename = "ModelId")]
    ModelId,
    #[serde(rename = "Blob")]
    Blob,
    #[serde(rename = "UUID")]
    Uuid,
}

impl BasicType {
    /// Every basic type, in declaration order
    pub const ALL: [BasicType; 17] = [
        BasicType::Null,
        BasicType::String,
        BasicType::Number,
        BasicType::Boolean,
        BasicType::Date,
        BasicType::DateTime,
        BasicType::Duration,
        BasicType::Hostname,
        BasicType::Email,
        BasicType::Permit,
        BasicType::FolderType,
        BasicType::InvitationStatus,
        BasicType::Json,
        BasicType::ModelType,
        BasicType::ModelId,
        BasicType::Blob,
        BasicType::Uuid,
    ];

    /// Serialized name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicType::Null => "null",
            BasicType::String => "string",
            BasicType::Number => "number",
            BasicType::Boolean => "boolean",
            BasicType::Date => "DateOnly",
            BasicType::DateTime => "DateTime",
            BasicType::Duration => "Duration",
            BasicType::Hostname => "Hostname",
            BasicType::Email => "Email",
            BasicType::Permit => "Permit",
            BasicType::FolderType => "FolderType",
            BasicType::InvitationStatus => "InvitationStatus",
            BasicType::Json => "JSON",
            BasicType::ModelType => "ModelType",
            BasicType::ModelId => "ModelId",
            BasicType::Blob => "Blob",
            BasicType::Uuid => "UUID",
        }
    }

    /// Look up a basic type by its serialized name
    pub fn from_name(name: &str) -> Option<BasicType> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved type of a single property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyType {
    /// Scalar or domain marker type
    Basic { basic_type: BasicType },

    /// Homogeneous list
    Array { element_type: Box<PropertyType> },

    /// String enumeration, values kept in declaration order
    Enum { values: Vec<String> },

    /// Inline object with ordered properties
    Object {
        properties: IndexMap<String, ObjectProperty>,
    },

    /// Unresolved reference to another named schema
    Link { target: String },

    /// Translation of this node failed
    Error { message: String },
}

impl PropertyType {
    pub fn basic(basic_type: BasicType) -> Self {
        PropertyType::Basic { basic_type }
    }

    pub fn array(element_type: PropertyType) -> Self {
        PropertyType::Array {
            element_type: Box::new(element_type),
        }
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyType::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn object(properties: IndexMap<String, ObjectProperty>) -> Self {
        PropertyType::Object { properties }
    }

    pub fn link(target: impl Into<String>) -> Self {
        PropertyType::Link {
            target: target.into(),
        }
    }

    /// Error sentinel used by every processor to report a failed node
    pub fn error(message: impl Into<String>) -> Self {
        PropertyType::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PropertyType::Error { .. })
    }

    /// Whether an `Error` appears anywhere in this tree
    pub fn contains_error(&self) -> bool {
        match self {
            PropertyType::Error { .. } => true,
            PropertyType::Array { element_type } => element_type.contains_error(),
            PropertyType::Object { properties } => {
                properties.values().any(ObjectProperty::contains_error)
            }
            PropertyType::Basic { .. } | PropertyType::Enum { .. } | PropertyType::Link { .. } => {
                false
            }
        }
    }
}

/// A named member of an object or schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// Property name as declared
    pub name: String,

    /// Listed in the parent's `required` array
    pub is_required: bool,

    /// Candidate types in discovery order, never empty
    pub types: Vec<PropertyType>,
}

impl ObjectProperty {
    pub fn new(name: impl Into<String>, is_required: bool, types: Vec<PropertyType>) -> Self {
        Self {
            name: name.into(),
            is_required,
            types,
        }
    }

    pub fn contains_error(&self) -> bool {
        self.types.iter().any(PropertyType::contains_error)
    }
}

/// A named, translated schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,
    pub properties: IndexMap<String, ObjectProperty>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn contains_error(&self) -> bool {
        self.properties.values().any(ObjectProperty::contains_error)
    }

    /// A schema without properties carries no payload
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
