use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::enums::Focus;
use crate::prompting::template::TemplateError;
use crate::prompting::types::FitError;

// ---------------------------------------------------------------------------
// ReportGenerator trait
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone)]
#[error("Generation backend failed: {0}")]
pub struct GeneratorError(pub String);

/// Text-generation capability. The engine hands over a fitted prompt and
/// treats the response as an opaque string; transport and model selection
/// belong to the implementation.
pub trait ReportGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

// ---------------------------------------------------------------------------
// ComplianceReport
// ---------------------------------------------------------------------------

/// A generated review report with its prompt provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub id: Uuid,
    pub focus: Focus,
    /// Backend response, passed through verbatim.
    pub report_text: String,
    pub prompt_tokens: usize,
    pub prompt_was_truncated: bool,
    pub generated_at: NaiveDateTime,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// ReportError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Document is empty")]
    EmptyDocument,

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Prompt fitting failed: {0}")]
    Fit(#[from] FitError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GeneratorError),
}
