use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the pathway scorer treats a weighted subject the student has no score for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingSubjectPolicy {
    /// The subject contributes 0/4 and its weight stays in the denominator.
    #[default]
    CountAsZero,
    /// Only assessed subjects enter the weighted average.
    Exclude,
}

/// Engine-wide knobs. Everything else (weights, thresholds, templates) is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub missing_subjects: MissingSubjectPolicy,
}

impl EngineConfig {
    pub fn with_missing_subjects(mut self, policy: MissingSubjectPolicy) -> Self {
        self.missing_subjects = policy;
        self
    }
}
