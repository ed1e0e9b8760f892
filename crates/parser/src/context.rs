//! Per-run translation state
//!
//! One `TranslationContext` is created for each top-level translation and
//! passed by `&mut` through every recursive call. Failures are recorded here
//! instead of being returned, so a whole document is always translated and
//! all defects are reported together.

use crate::swagger::SwaggerSchemaProperty;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use swagger_type_model_common::PropertyType;

/// Category of a recorded defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// No processor could translate a property node, or its content was invalid
    UnresolvedProperty,

    /// Operation lacks its tag or `x-metadata.method`
    MissingRouting,

    /// Operation lacks a JSON request body or 200 response schema
    MissingBody,
}

/// One defect found during translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Mutable state of one translation run
#[derive(Debug, Default)]
pub struct TranslationContext {
    has_errors: bool,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
    pending_models: IndexMap<String, SwaggerSchemaProperty>,
}

impl TranslationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any defect was recorded; never reset once set
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Record a defect and flag the run
    pub fn report(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let message = message.into();
        log::error!("{}", message);
        self.has_errors = true;
        self.diagnostics.push(Diagnostic { kind, message });
    }

    /// Record an unresolved property and produce its `Error` value
    pub fn fail(&mut self, message: impl Into<String>) -> PropertyType {
        let message = message.into();
        self.report(DiagnosticKind::UnresolvedProperty, message.clone());
        PropertyType::error(message)
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Queue an inline model for translation under its own name
    ///
    /// The first definition registered for a name wins.
    pub fn register_model(&mut self, name: &str, node: &SwaggerSchemaProperty) {
        if !self.pending_models.contains_key(name) {
            log::debug!("Queued model {} for translation", name);
            self.pending_models.insert(name.to_string(), node.clone());
        }
    }

    /// Take the oldest queued model
    pub fn take_pending_model(&mut self) -> Option<(String, SwaggerSchemaProperty)> {
        self.pending_models.shift_remove_index(0)
    }

    pub fn has_pending_models(&self) -> bool {
        !self.pending_models.is_empty()
    }
}
