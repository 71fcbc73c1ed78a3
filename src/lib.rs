pub mod config;
pub mod models;
pub mod prompting; // token budgets, instruction templates, prompt fitting
pub mod report; // report orchestration over an injected generation backend
pub mod screening; // keyword-driven heuristic risk screening

pub use models::{Focus, RiskBand};
pub use prompting::{
    FitError, FittedPrompt, HeuristicEstimator, InstructionTemplate, PromptBudget, PromptFitter,
    TokenEstimator,
};
pub use report::{ComplianceEngine, ComplianceReport, ReportError, ReportGenerator};
pub use screening::{
    DocumentScreener, HeuristicScreener, ScreeningReferenceData, ScreeningResult,
};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding this crate.
/// Call at most once per process.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
