use std::time::Instant;

use uuid::Uuid;

use crate::models::enums::Focus;
use crate::prompting::estimator::TokenEstimator;
use crate::prompting::fitter::PromptFitter;
use crate::prompting::types::PromptBudget;
use crate::screening::engine::HeuristicScreener;
use crate::screening::reference::ScreeningReferenceData;
use crate::screening::types::{DocumentScreener, ScreeningResult};

use super::prompts::template_for;
use super::types::{ComplianceReport, ReportError, ReportGenerator};

/// Combines the screener and the prompt fitter behind one surface.
/// Both operations are independent: callers may screen locally, generate a
/// backend report, or do both for the same document.
pub struct ComplianceEngine {
    screener: HeuristicScreener,
    fitter: PromptFitter,
}

impl ComplianceEngine {
    pub fn new(reference: ScreeningReferenceData, budget: PromptBudget) -> Self {
        Self {
            screener: HeuristicScreener::new(reference),
            fitter: PromptFitter::new(budget),
        }
    }

    /// Build the focus's review prompt, fit it to the budget, and delegate
    /// to the generation backend.
    pub fn generate_report(
        &self,
        document_text: &str,
        focus: Focus,
        estimator: &dyn TokenEstimator,
        generator: &dyn ReportGenerator,
    ) -> Result<ComplianceReport, ReportError> {
        let start = Instant::now();

        if document_text.trim().is_empty() {
            return Err(ReportError::EmptyDocument);
        }

        let template = template_for(focus)?;
        let fitted = self.fitter.fit(&template, document_text, estimator)?;
        let report_text = generator.generate(&fitted.text)?;

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            focus = focus.as_str(),
            prompt_tokens = fitted.final_token_count,
            truncated = fitted.was_truncated,
            processing_ms = processing_time_ms,
            "Compliance report generated"
        );

        Ok(ComplianceReport {
            id: Uuid::new_v4(),
            focus,
            report_text,
            prompt_tokens: fitted.final_token_count,
            prompt_was_truncated: fitted.was_truncated,
            generated_at: chrono::Local::now().naive_local(),
            processing_time_ms,
        })
    }
}

impl DocumentScreener for ComplianceEngine {
    /// Local keyword screening; pure, no external calls.
    fn screen(&self, document_text: &str, focus: Focus) -> ScreeningResult {
        self.screener.screen(document_text, focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompting::estimator::HeuristicEstimator;
    use crate::prompting::types::FitError;
    use crate::report::types::GeneratorError;

    struct CannedGenerator;

    impl ReportGenerator for CannedGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Ok("1. Observation. Overall assessment.".to_string())
        }
    }

    struct FailingGenerator;

    impl ReportGenerator for FailingGenerator {
        fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Err(GeneratorError("backend offline".into()))
        }
    }

    /// Generator that echoes the prompt, exposing what the engine sent.
    struct EchoGenerator;

    impl ReportGenerator for EchoGenerator {
        fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
            Ok(prompt.to_string())
        }
    }

    fn engine() -> ComplianceEngine {
        ComplianceEngine::new(
            ScreeningReferenceData::builtin(),
            PromptBudget::new(8192, 1024, 128),
        )
    }

    #[test]
    fn screen_delegates_to_the_keyword_tables() {
        let result = engine().screen("costi di gestione e incentivi", Focus::MifidIi);
        assert_eq!(result.risk_score, 3);
    }

    #[test]
    fn report_for_a_small_document() {
        let report = engine()
            .generate_report(
                "Il prodotto prevede costi di gestione e incentivi per la rete.",
                Focus::MifidIi,
                &HeuristicEstimator,
                &CannedGenerator,
            )
            .unwrap();

        assert_eq!(report.focus, Focus::MifidIi);
        assert!(!report.prompt_was_truncated);
        assert!(report.prompt_tokens > 0);
        assert_eq!(report.report_text, "1. Observation. Overall assessment.");
    }

    #[test]
    fn report_prompt_embeds_the_document() {
        let report = engine()
            .generate_report(
                "Sistema con profilazione automatizzata.",
                Focus::AiAct,
                &HeuristicEstimator,
                &EchoGenerator,
            )
            .unwrap();

        assert!(report
            .report_text
            .contains("Sistema con profilazione automatizzata."));
        assert!(report.report_text.contains("EU AI Act"));
    }

    #[test]
    fn empty_document_is_rejected_before_fitting() {
        for text in ["", "   ", "\n\t"] {
            let err = engine()
                .generate_report(text, Focus::MifidIi, &HeuristicEstimator, &CannedGenerator)
                .unwrap_err();
            assert!(matches!(err, ReportError::EmptyDocument));
        }
    }

    #[test]
    fn oversized_document_is_truncated_for_the_backend() {
        let document = vec!["clausola"; 3500].join(" ");

        let report = engine()
            .generate_report(
                &document,
                Focus::MifidIi,
                &HeuristicEstimator,
                &CannedGenerator,
            )
            .unwrap();

        assert!(report.prompt_was_truncated);
    }

    #[test]
    fn exhausted_budget_propagates_as_fit_error() {
        let engine = ComplianceEngine::new(
            ScreeningReferenceData::builtin(),
            PromptBudget::new(100, 120, 0),
        );

        let err = engine
            .generate_report(
                "qualunque testo",
                Focus::MifidIi,
                &HeuristicEstimator,
                &CannedGenerator,
            )
            .unwrap_err();

        assert!(matches!(
            err,
            ReportError::Fit(FitError::BudgetExhausted { .. })
        ));
    }

    #[test]
    fn generator_failure_is_reported_not_panicked() {
        let err = engine()
            .generate_report(
                "costi di gestione",
                Focus::MifidIi,
                &HeuristicEstimator,
                &FailingGenerator,
            )
            .unwrap_err();

        assert!(matches!(err, ReportError::Generation(_)));
    }

    #[test]
    fn processing_time_is_recorded() {
        let report = engine()
            .generate_report(
                "costi di gestione",
                Focus::MifidIi,
                &HeuristicEstimator,
                &CannedGenerator,
            )
            .unwrap();

        assert!(report.processing_time_ms < 1000);
    }
}
