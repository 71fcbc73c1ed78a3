pub mod estimator;
pub mod fitter;
pub mod template;
pub mod types;

pub use estimator::{approximate_tokens, EstimatorError, HeuristicEstimator, TokenEstimator};
pub use fitter::{PromptFitter, TRUNCATION_MARKER};
pub use template::{InstructionTemplate, TemplateError, DOCUMENT_PLACEHOLDER};
pub use types::{FitError, FittedPrompt, PromptBudget};

#[cfg(feature = "subword-estimator")]
pub use estimator::SubwordEstimator;
