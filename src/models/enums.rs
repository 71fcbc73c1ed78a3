use serde::{Deserialize, Serialize};

/// Regulatory focus selected per screening request.
/// Determines which keyword table and which instruction template apply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// MiFID II — EU markets in financial instruments.
    MifidIi,
    /// EU AI Act — automated decision-making and AI systems.
    AiAct,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MifidIi => "mifid_ii",
            Self::AiAct => "ai_act",
        }
    }

    /// Human-readable label used in report headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MifidIi => "MiFID II (Financial Markets)",
            Self::AiAct => "EU AI Act (Artificial Intelligence)",
        }
    }
}

/// Risk band derived from the screening score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    /// Score 1: no standard pattern matched.
    Low,
    /// Score 2-3: review recommended.
    Attention,
    /// Score 4-5: multiple critical patterns matched.
    Elevated,
}

impl RiskBand {
    pub fn from_score(score: u8) -> Self {
        if score > 3 {
            Self::Elevated
        } else if score > 1 {
            Self::Attention
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Attention => "attention",
            Self::Elevated => "elevated",
        }
    }
}
