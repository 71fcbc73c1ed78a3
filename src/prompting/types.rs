use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// PromptBudget
// ---------------------------------------------------------------------------

/// Token ceiling for one model profile. Constant for a given backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptBudget {
    /// Hard ceiling on prompt plus generated output.
    pub max_total_tokens: usize,
    /// Tokens held back for the generated output.
    pub reserved_output_tokens: usize,
    /// Headroom absorbing estimator drift between approximate and exact counts.
    pub safety_margin: usize,
}

impl PromptBudget {
    pub fn new(
        max_total_tokens: usize,
        reserved_output_tokens: usize,
        safety_margin: usize,
    ) -> Self {
        Self {
            max_total_tokens,
            reserved_output_tokens,
            safety_margin,
        }
    }

    /// Tokens available to the substituted prompt once output and margin are
    /// reserved. `None` when reservation alone exhausts the ceiling.
    pub fn max_input_tokens(&self) -> Option<usize> {
        let remaining = self
            .max_total_tokens
            .checked_sub(self.reserved_output_tokens)?
            .checked_sub(self.safety_margin)?;
        (remaining > 0).then_some(remaining)
    }

    /// Direct-fit check: the untruncated prompt plus the output reservation
    /// must stay under the ceiling. The margin is not applied here.
    pub fn fits_direct(&self, prompt_tokens: usize) -> bool {
        prompt_tokens
            .checked_add(self.reserved_output_tokens)
            .is_some_and(|total| total <= self.max_total_tokens)
    }

    /// Post-truncation check: the margin stays in force so an approximate
    /// estimate cannot accept a prompt an exact tokenizer would reject.
    pub fn fits_truncated(&self, prompt_tokens: usize) -> bool {
        self.max_input_tokens()
            .is_some_and(|max_input| prompt_tokens <= max_input)
    }
}

// ---------------------------------------------------------------------------
// FittedPrompt
// ---------------------------------------------------------------------------

/// A prompt guaranteed to fit its budget. Ephemeral.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FittedPrompt {
    pub text: String,
    pub was_truncated: bool,
    pub final_token_count: usize,
}

// ---------------------------------------------------------------------------
// FitError
// ---------------------------------------------------------------------------

/// Terminal fitting failures, reported as values to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error(
        "Prompt budget exhausted: reserving {reserved_output_tokens} output tokens \
         and a margin of {safety_margin} leaves no input room under {max_total_tokens}"
    )]
    BudgetExhausted {
        max_total_tokens: usize,
        reserved_output_tokens: usize,
        safety_margin: usize,
    },

    #[error(
        "Prompt still exceeds budget after truncation: {final_token_count} tokens \
         against an input allowance of {max_input_tokens}"
    )]
    StillTooLarge {
        final_token_count: usize,
        max_input_tokens: usize,
    },
}
