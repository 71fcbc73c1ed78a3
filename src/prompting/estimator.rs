use thiserror::Error;

/// English text averages ~4 chars/token for subword tokenizers.
const CHARS_PER_TOKEN: usize = 4;

#[derive(Error, Debug, Clone)]
#[error("Token estimation failed: {0}")]
pub struct EstimatorError(pub String);

/// Injected token-counting capability.
///
/// Counts are model-specific and must not be assumed exact across
/// implementations; a caller needing bit-exact budgets must supply an
/// estimator matching its target backend. The fitter treats a failing
/// estimator as recoverable and falls back to [`approximate_tokens`].
pub trait TokenEstimator {
    fn count(&self, text: &str) -> Result<usize, EstimatorError>;
}

/// Approximate token count at ~4 characters per token, rounded up.
pub fn approximate_tokens(text: &str) -> usize {
    text.len().div_ceil(CHARS_PER_TOKEN)
}

/// Approximation-only estimator. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

impl TokenEstimator for HeuristicEstimator {
    fn count(&self, text: &str) -> Result<usize, EstimatorError> {
        Ok(approximate_tokens(text))
    }
}

/// Exact subword counting backed by a HuggingFace tokenizer file.
#[cfg(feature = "subword-estimator")]
pub struct SubwordEstimator {
    tokenizer: tokenizers::Tokenizer,
}

#[cfg(feature = "subword-estimator")]
impl SubwordEstimator {
    pub fn from_file(path: &std::path::Path) -> Result<Self, EstimatorError> {
        let tokenizer = tokenizers::Tokenizer::from_file(path)
            .map_err(|e| EstimatorError(e.to_string()))?;
        Ok(Self { tokenizer })
    }
}

#[cfg(feature = "subword-estimator")]
impl TokenEstimator for SubwordEstimator {
    fn count(&self, text: &str) -> Result<usize, EstimatorError> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| EstimatorError(e.to_string()))?;
        Ok(encoding.get_ids().len())
    }
}
