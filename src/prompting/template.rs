use thiserror::Error;

/// Substitution placeholder for the document body. Each instruction
/// template must contain it exactly once.
pub const DOCUMENT_PLACEHOLDER: &str = "{document}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Instruction template is missing the document placeholder")]
    MissingPlaceholder,

    #[error("Instruction template contains {0} document placeholders, expected exactly one")]
    MultiplePlaceholders(usize),
}

/// An instruction template validated to carry exactly one document
/// placeholder. Templates are sourced by the caller and treated as opaque
/// beyond this one structural requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTemplate(String);

impl InstructionTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self, TemplateError> {
        let text = text.into();
        match text.matches(DOCUMENT_PLACEHOLDER).count() {
            0 => Err(TemplateError::MissingPlaceholder),
            1 => Ok(Self(text)),
            n => Err(TemplateError::MultiplePlaceholders(n)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute the document body verbatim into the placeholder.
    pub fn substitute(&self, document_text: &str) -> String {
        self.0.replacen(DOCUMENT_PLACEHOLDER, document_text, 1)
    }
}
