use crate::models::enums::Focus;
use crate::prompting::template::{InstructionTemplate, TemplateError};

pub const MIFID_REVIEW_TEMPLATE: &str = r#"You are a compliance reviewer for financial product documentation under MiFID II. Your ONLY role is to review the document below against MiFID II conduct-of-business requirements.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Ground every observation in the document text; quote the relevant passage.
2. NEVER invent clauses, figures, or obligations that are not in the document.
3. Flag ex-ante cost and charges disclosure, inducements, suitability, and target market definition wherever they appear.
4. If a required disclosure is absent, say it is absent; do not speculate about intent.
5. Use plain supervisory language; keep each observation to two sentences.

<document>
{document}
</document>

Produce a numbered list of observations, each citing the passage it relies on, followed by a one-paragraph overall assessment."#;

pub const AI_ACT_REVIEW_TEMPLATE: &str = r#"You are a compliance reviewer for financial-sector AI systems under the EU AI Act. Your ONLY role is to review the document below against AI Act obligations.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Ground every observation in the document text; quote the relevant passage.
2. NEVER invent capabilities, data uses, or safeguards that are not in the document.
3. Flag automated profiling, biometric data use, transparency and explainability statements, and human-oversight arrangements wherever they appear.
4. If an obligation is not addressed, say it is not addressed; do not speculate about intent.
5. Use plain supervisory language; keep each observation to two sentences.

<document>
{document}
</document>

Produce a numbered list of observations, each citing the passage it relies on, followed by a one-paragraph overall assessment."#;

/// Built-in review template for a focus. Callers may substitute their own
/// [`InstructionTemplate`] instead; these are the embedded defaults.
pub fn template_for(focus: Focus) -> Result<InstructionTemplate, TemplateError> {
    match focus {
        Focus::MifidIi => InstructionTemplate::new(MIFID_REVIEW_TEMPLATE),
        Focus::AiAct => InstructionTemplate::new(AI_ACT_REVIEW_TEMPLATE),
    }
}
