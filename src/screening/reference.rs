use crate::models::enums::Focus;

use super::messages::FindingMessages;
use super::types::{KeywordRule, ScreeningError};

/// Loaded keyword tables, one ordered sequence of rules per focus.
/// Table order is significant: findings are reported in rule order.
#[derive(Debug)]
pub struct ScreeningReferenceData {
    pub mifid_rules: Vec<KeywordRule>,
    pub ai_act_rules: Vec<KeywordRule>,
}

impl ScreeningReferenceData {
    /// Load keyword tables from operator-supplied JSON files.
    /// Triggers are lowercased on load; matching runs against lowercased text.
    pub fn load(resources_dir: &std::path::Path) -> Result<Self, ScreeningError> {
        let mifid_rules = load_table(resources_dir, "mifid_rules.json")?;
        let ai_act_rules = load_table(resources_dir, "ai_act_rules.json")?;

        Ok(Self {
            mifid_rules,
            ai_act_rules,
        })
    }

    /// The embedded rule tables, bound at process start.
    ///
    /// Triggers are Italian because the screening corpus is Italian-language
    /// financial product documentation; "target market" and "black box" are
    /// anglicisms used as-is in that corpus.
    pub fn builtin() -> Self {
        Self {
            mifid_rules: vec![
                KeywordRule {
                    trigger: "costi".into(),
                    finding: FindingMessages::costs(),
                },
                KeywordRule {
                    trigger: "incentivi".into(),
                    finding: FindingMessages::inducements(),
                },
                KeywordRule {
                    trigger: "adeguatezza".into(),
                    finding: FindingMessages::suitability(),
                },
                KeywordRule {
                    trigger: "target market".into(),
                    finding: FindingMessages::target_market(),
                },
            ],
            ai_act_rules: vec![
                KeywordRule {
                    trigger: "profilazione".into(),
                    finding: FindingMessages::profiling(),
                },
                KeywordRule {
                    trigger: "biometrico".into(),
                    finding: FindingMessages::biometric(),
                },
                KeywordRule {
                    trigger: "trasparenza".into(),
                    finding: FindingMessages::transparency(),
                },
                KeywordRule {
                    trigger: "black box".into(),
                    finding: FindingMessages::black_box(),
                },
            ],
        }
    }

    /// The ordered rule table bound to a focus.
    pub fn table_for(&self, focus: Focus) -> &[KeywordRule] {
        match focus {
            Focus::MifidIi => &self.mifid_rules,
            Focus::AiAct => &self.ai_act_rules,
        }
    }
}

fn load_table(
    resources_dir: &std::path::Path,
    file_name: &str,
) -> Result<Vec<KeywordRule>, ScreeningError> {
    let path = resources_dir.join(file_name);

    let json = std::fs::read_to_string(&path).map_err(|e| {
        ScreeningError::TableLoad(path.display().to_string(), e.to_string())
    })?;
    let mut rules: Vec<KeywordRule> = serde_json::from_str(&json)
        .map_err(|e| ScreeningError::TableParse(file_name.to_string(), e.to_string()))?;

    if rules.is_empty() {
        return Err(ScreeningError::EmptyTable(file_name.to_string()));
    }

    for rule in &mut rules {
        rule.trigger = rule.trigger.to_lowercase();
    }

    Ok(rules)
}
