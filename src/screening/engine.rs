use crate::models::enums::Focus;

use super::messages::FindingMessages;
use super::reference::ScreeningReferenceData;
use super::types::{DocumentScreener, ScreeningResult, MAX_RISK_SCORE};

/// Keyword-driven screener over raw document text.
///
/// Matching is naive substring containment on the lowercased document:
/// a trigger occurring inside an unrelated longer token still matches
/// (e.g. "costi" inside "accostino"). This is an accepted limitation of
/// the heuristic, kept for parity with the reviewed corpus behavior.
pub struct HeuristicScreener {
    reference: ScreeningReferenceData,
}

impl HeuristicScreener {
    pub fn new(reference: ScreeningReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ScreeningReferenceData {
        &self.reference
    }
}

impl DocumentScreener for HeuristicScreener {
    fn screen(&self, document_text: &str, focus: Focus) -> ScreeningResult {
        let normalized = document_text.to_lowercase();
        let table = self.reference.table_for(focus);

        let mut findings = Vec::new();
        let mut counter: u8 = 1;

        for rule in table {
            if normalized.contains(rule.trigger.as_str()) {
                findings.push(rule.finding.clone());
                counter = counter.saturating_add(1);
            }
        }

        if findings.is_empty() {
            return ScreeningResult {
                findings: vec![FindingMessages::no_criticality()],
                risk_score: 1,
            };
        }

        let risk_score = counter.min(MAX_RISK_SCORE);

        tracing::debug!(
            focus = focus.as_str(),
            matches = findings.len(),
            risk_score,
            "Screening complete"
        );

        ScreeningResult {
            findings,
            risk_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::RiskBand;
    use crate::screening::types::KeywordRule;

    fn screener() -> HeuristicScreener {
        HeuristicScreener::new(ScreeningReferenceData::builtin())
    }

    /// Two MiFID triggers ("costi", "incentivi") -> two findings, score 3.
    #[test]
    fn mifid_two_matches_score_three() {
        let result = screener().screen(
            "Il prodotto prevede costi di gestione e incentivi per la rete",
            Focus::MifidIi,
        );

        assert_eq!(result.risk_score, 3);
        assert_eq!(result.findings.len(), 2);
        assert!(result.findings[0].contains("Costs section"));
        assert!(result.findings[1].contains("Inducements"));
        assert_eq!(result.risk_band(), RiskBand::Attention);
    }

    #[test]
    fn no_match_yields_single_standard_finding() {
        let result = screener().screen("Testo privo di pattern rilevanti", Focus::MifidIi);

        assert_eq!(result.risk_score, 1);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0], FindingMessages::no_criticality());
        assert!(!result.matched_any());
    }

    #[test]
    fn empty_document_is_a_valid_no_match() {
        let result = screener().screen("", Focus::AiAct);

        assert_eq!(result.risk_score, 1);
        assert_eq!(result.findings, vec![FindingMessages::no_criticality()]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = screener().screen("PROFILAZIONE finanziaria AUTOMATIZZATA", Focus::AiAct);
        let lower = screener().screen("profilazione finanziaria automatizzata", Focus::AiAct);

        assert_eq!(upper, lower);
        assert_eq!(upper.risk_score, 2);
    }

    #[test]
    fn focus_selects_the_table() {
        // AI Act triggers are invisible under the MiFID focus.
        let result = screener().screen("profilazione e dati biometrici", Focus::MifidIi);
        assert_eq!(result.risk_score, 1);
    }

    #[test]
    fn findings_follow_table_order_not_text_order() {
        // "incentivi" appears before "costi" in the text; table order wins.
        let result = screener().screen("incentivi alla rete e costi ricorrenti", Focus::MifidIi);

        assert!(result.findings[0].contains("Costs section"));
        assert!(result.findings[1].contains("Inducements"));
    }

    /// A trigger inside an unrelated longer token still matches.
    #[test]
    fn substring_false_positive_is_accepted() {
        let result = screener().screen("si accostino ai mercati", Focus::MifidIi);

        assert_eq!(result.risk_score, 2);
        assert!(result.findings[0].contains("Costs section"));
    }

    #[test]
    fn score_clamps_at_five() {
        let reference = ScreeningReferenceData {
            mifid_rules: (0..7)
                .map(|i| KeywordRule {
                    trigger: format!("parola{i}"),
                    finding: format!("Finding {i}: flagged."),
                })
                .collect(),
            ai_act_rules: vec![KeywordRule {
                trigger: "unused".into(),
                finding: "Unused: flagged.".into(),
            }],
        };
        let screener = HeuristicScreener::new(reference);

        let text = "parola0 parola1 parola2 parola3 parola4 parola5 parola6";
        let result = screener.screen(text, Focus::MifidIi);

        assert_eq!(result.findings.len(), 7);
        assert_eq!(result.risk_score, 5);
        assert_eq!(result.risk_band(), RiskBand::Elevated);
    }

    #[test]
    fn screening_is_deterministic() {
        let text = "Documento con costi e valutazione di adeguatezza del cliente";
        let first = screener().screen(text, Focus::MifidIi);
        let second = screener().screen(text, Focus::MifidIi);

        assert_eq!(first, second);
    }

    #[test]
    fn all_four_mifid_triggers_score_five() {
        let text = "costi, incentivi, adeguatezza e target market nello stesso documento";
        let result = screener().screen(text, Focus::MifidIi);

        assert_eq!(result.findings.len(), 4);
        assert_eq!(result.risk_score, 5);
    }
}
