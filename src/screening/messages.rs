/// Finding message builder for consistent reviewer-facing phrasing.
/// Every message names the flagged area and the concrete follow-up,
/// never a verdict; the screener surfaces observations, not conclusions.
pub struct FindingMessages;

impl FindingMessages {
    /// Standard finding when no keyword rule matched.
    pub fn no_criticality() -> String {
        "No immediate criticality detected in the standard patterns.".to_string()
    }

    // --- MiFID II table ---

    pub fn costs() -> String {
        "Costs section: verify ex-ante cost transparency against MiFID II disclosure duties."
            .to_string()
    }

    pub fn inducements() -> String {
        "Inducements: possible conflict of interest, review the inducement arrangements."
            .to_string()
    }

    pub fn suitability() -> String {
        "Suitability: the client risk-profile assessment is mentioned.".to_string()
    }

    pub fn target_market() -> String {
        "Target market: reference-market definition located in the document.".to_string()
    }

    // --- AI Act table ---

    pub fn profiling() -> String {
        "High-exposure area: automated financial profiling activity detected.".to_string()
    }

    pub fn biometric() -> String {
        "Prohibited-practice check: biometric data referenced, verify AI Act conformity."
            .to_string()
    }

    pub fn transparency() -> String {
        "Transparency: the document addresses explainability of the algorithm.".to_string()
    }

    pub fn black_box() -> String {
        "Oversight: possible lack of human supervision over the model.".to_string()
    }
}
