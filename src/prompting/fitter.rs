use super::estimator::{approximate_tokens, TokenEstimator};
use super::template::InstructionTemplate;
use super::types::{FitError, FittedPrompt, PromptBudget};

/// Separator inserted between the retained head and tail of a truncated
/// document.
pub const TRUNCATION_MARKER: &str = "[... document truncated for token limit ...]";

/// Fraction of whitespace-delimited words retained at each end of the
/// document. Head-and-tail retention preserves lead-in and conclusion
/// context, unlike head-only truncation.
const RETAINED_FRACTION: f64 = 0.4;

/// Fits a substituted instruction prompt inside a token budget.
///
/// The fit runs at most one truncation pass. When the truncated prompt
/// still exceeds the budget the failure is terminal; there is never a
/// second truncation round.
pub struct PromptFitter {
    budget: PromptBudget,
}

impl PromptFitter {
    pub fn new(budget: PromptBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> &PromptBudget {
        &self.budget
    }

    pub fn fit(
        &self,
        template: &InstructionTemplate,
        document_text: &str,
        estimator: &dyn TokenEstimator,
    ) -> Result<FittedPrompt, FitError> {
        let substituted = template.substitute(document_text);
        let measured = count_or_fallback(estimator, &substituted);

        if self.budget.fits_direct(measured) {
            return Ok(FittedPrompt {
                text: substituted,
                was_truncated: false,
                final_token_count: measured,
            });
        }

        let max_input =
            self.budget
                .max_input_tokens()
                .ok_or(FitError::BudgetExhausted {
                    max_total_tokens: self.budget.max_total_tokens,
                    reserved_output_tokens: self.budget.reserved_output_tokens,
                    safety_margin: self.budget.safety_margin,
                })?;

        let truncated_doc = truncate_head_tail(document_text);
        let resubstituted = template.substitute(&truncated_doc);
        let remeasured = count_or_fallback(estimator, &resubstituted);

        if remeasured <= max_input {
            tracing::debug!(
                tokens = remeasured,
                max_input,
                "Prompt fit after truncation"
            );
            Ok(FittedPrompt {
                text: resubstituted,
                was_truncated: true,
                final_token_count: remeasured,
            })
        } else {
            Err(FitError::StillTooLarge {
                final_token_count: remeasured,
                max_input_tokens: max_input,
            })
        }
    }
}

fn count_or_fallback(estimator: &dyn TokenEstimator, text: &str) -> usize {
    match estimator.count(text) {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::warn!(error = %e, "Token estimator failed, using approximate count");
            approximate_tokens(text)
        }
    }
}

/// Keep the first 40% and the last 40% of whitespace-delimited words
/// (floor division), joined around [`TRUNCATION_MARKER`].
pub fn truncate_head_tail(document_text: &str) -> String {
    let words: Vec<&str> = document_text.split_whitespace().collect();
    let keep = (words.len() as f64 * RETAINED_FRACTION).floor() as usize;

    let mut parts: Vec<&str> = Vec::with_capacity(keep * 2 + 1);
    parts.extend_from_slice(&words[..keep]);
    parts.push(TRUNCATION_MARKER);
    parts.extend_from_slice(&words[words.len() - keep..]);
    parts.join(" ")
}
