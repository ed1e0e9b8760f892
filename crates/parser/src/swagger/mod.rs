//! Swagger/OpenAPI document tree and loader
//!
//! The translator consumes documents already parsed into this tree. The
//! loader covers JSON and YAML files.
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_type_model_parser::swagger::SwaggerParser;
//!
//! let parser = SwaggerParser::from_file("api.json")?;
//! let document = parser.document();
//! ```

mod parser;
mod types;

pub use parser::{DocumentFormat, SwaggerParser};
pub use types::*;
