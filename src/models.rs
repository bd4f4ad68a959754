use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};

/// A CBC competency score: 1 Below, 2 Approaching, 3 Meeting, 4 Exceeding
/// Expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CompetencyScore(u8);

impl CompetencyScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(subject: &str, score: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&score) {
            Ok(Self(score as u8))
        } else {
            Err(EngineError::InvalidScore {
                subject: subject.to_string(),
                score,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl TryFrom<u8> for CompetencyScore {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::ScoreOutOfRange { score: value as i64 })
        }
    }
}

impl From<CompetencyScore> for u8 {
    fn from(score: CompetencyScore) -> u8 {
        score.0
    }
}

impl fmt::Display for CompetencyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subject key to current-term competency score. Ordered by key so every
/// derived list is deterministic.
pub type SubjectScores = BTreeMap<String, CompetencyScore>;

/// Validate a raw subject→score map, rejecting anything outside 1-4.
pub fn parse_scores<'a, I>(raw: I) -> Result<SubjectScores>
where
    I: IntoIterator<Item = (&'a str, i64)>,
{
    raw.into_iter()
        .map(|(subject, score)| {
            CompetencyScore::new(subject, score).map(|score| (subject.to_string(), score))
        })
        .collect()
}

/// Like [`parse_scores`] but for serde input, so a bad entry names its subject.
pub fn deserialize_scores<'de, D>(
    deserializer: D,
) -> std::result::Result<SubjectScores, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
    parse_scores(raw.iter().map(|(subject, score)| (subject.as_str(), *score)))
        .map_err(serde::de::Error::custom)
}

/// One point of a subject's assessment history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermScore {
    pub term: u8,
    pub score: CompetencyScore,
}

impl TermScore {
    pub fn new(term: i64, score: CompetencyScore) -> Result<Self> {
        if !(1..=3).contains(&term) {
            return Err(EngineError::InvalidTerm { term });
        }
        Ok(Self {
            term: term as u8,
            score,
        })
    }
}

impl<'de> Deserialize<'de> for TermScore {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            term: i64,
            score: CompetencyScore,
        }

        let raw = Raw::deserialize(deserializer)?;
        TermScore::new(raw.term, raw.score).map_err(serde::de::Error::custom)
    }
}

/// Per-subject history, each series ordered by term ascending.
pub type SubjectHistory = BTreeMap<String, Vec<TermScore>>;

/// One assessment: a student's scores for a single term of a school year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRecord {
    pub student_id: Uuid,
    pub student_name: String,
    pub grade: u8,
    pub year: i32,
    pub term: u8,
    pub scores: SubjectScores,
}

impl<'de> Deserialize<'de> for AssessmentRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            student_id: Uuid,
            student_name: String,
            grade: u8,
            year: i32,
            term: i64,
            #[serde(deserialize_with = "deserialize_scores")]
            scores: SubjectScores,
        }

        let raw = Raw::deserialize(deserializer)?;
        if !(1..=3).contains(&raw.term) {
            return Err(serde::de::Error::custom(EngineError::InvalidTerm { term: raw.term }));
        }
        Ok(Self {
            student_id: raw.student_id,
            student_name: raw.student_name,
            grade: raw.grade,
            year: raw.year,
            term: raw.term as u8,
            scores: raw.scores,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pathway {
    #[serde(rename = "STEM")]
    Stem,
    #[serde(rename = "Arts & Sports")]
    ArtsSports,
    #[serde(rename = "Social Sciences")]
    SocialSciences,
}

impl Pathway {
    pub const ALL: [Pathway; 3] = [Pathway::Stem, Pathway::ArtsSports, Pathway::SocialSciences];

    pub fn name(self) -> &'static str {
        match self {
            Pathway::Stem => "STEM",
            Pathway::ArtsSports => "Arts & Sports",
            Pathway::SocialSciences => "Social Sciences",
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayRecommendation {
    pub stem_score: u8,
    pub arts_sports_score: u8,
    pub social_sciences_score: u8,
    pub top_pathway: Pathway,
    pub confidence: Confidence,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub guidance_message: String,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningTier {
    Remedial,
    Reinforcement,
    Standard,
    Challenge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecommendation {
    pub subject_key: String,
    pub subject: String,
    pub current_level: u8,
    pub tier: LearningTier,
    pub tier_label: String,
    pub description: String,
    pub action_steps: Vec<String>,
    pub resources: Vec<String>,
    pub estimated_time: String,
    pub target_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Accelerating,
    Steady,
    Slowing,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningVelocity {
    pub subject: String,
    pub velocity: f64,
    pub trend: Trend,
    pub prediction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub overall_tier: LearningTier,
    pub subjects_needing_support: usize,
    pub subjects_excelling: usize,
    pub average_velocity: f64,
    pub recommendations: Vec<SubjectRecommendation>,
    pub velocities: Vec<LearningVelocity>,
}

/// Round half toward positive infinity at the given number of decimals.
pub(crate) fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}
