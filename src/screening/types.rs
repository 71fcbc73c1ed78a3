use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{Focus, RiskBand};

/// Ceiling applied to the running match counter.
pub const MAX_RISK_SCORE: u8 = 5;

// ---------------------------------------------------------------------------
// KeywordRule
// ---------------------------------------------------------------------------

/// A single trigger-to-finding rule. Belongs to exactly one focus's ordered
/// table and is static after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordRule {
    /// Substring searched for anywhere in the lowercased document text.
    pub trigger: String,
    /// Finding message appended verbatim when the trigger occurs.
    pub finding: String,
}

// ---------------------------------------------------------------------------
// ScreeningResult
// ---------------------------------------------------------------------------

/// Outcome of one screening invocation. Has no identity beyond the call
/// that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreeningResult {
    /// Findings in keyword-table order; never empty.
    pub findings: Vec<String>,
    /// Always within [1, MAX_RISK_SCORE].
    pub risk_score: u8,
}

impl ScreeningResult {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }

    /// Whether any keyword rule matched. The counter starts at 1, so a
    /// score above 1 means at least one match.
    pub fn matched_any(&self) -> bool {
        self.risk_score > 1
    }
}

// ---------------------------------------------------------------------------
// DocumentScreener trait
// ---------------------------------------------------------------------------

/// The screening seam. Implementations must be pure: same (text, focus)
/// pair always yields the same result, with no side effects.
pub trait DocumentScreener {
    fn screen(&self, document_text: &str, focus: Focus) -> ScreeningResult;
}

// ---------------------------------------------------------------------------
// ScreeningError
// ---------------------------------------------------------------------------

/// Errors raised while loading keyword tables. Screening itself is a total
/// function over its input domain and has no error conditions.
#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("Keyword table load failed ({0}): {1}")]
    TableLoad(String, String),

    #[error("Keyword table parse failed ({0}): {1}")]
    TableParse(String, String),

    #[error("Keyword table for {0} is empty")]
    EmptyTable(String),
}
