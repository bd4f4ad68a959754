//! Pathway affinity and adaptive learning recommendations for Kenyan CBC
//! learners.
//!
//! Everything here is a pure function of the scores handed in; loading and
//! persisting assessments is the caller's job.

pub mod analysis;
pub mod competency;
pub mod config;
pub mod error;
pub mod guidance;
pub mod ingest;
pub mod models;
pub mod pathway;
pub mod report;
pub mod subject;
pub mod tiers;
pub mod velocity;

pub use analysis::{analyze_performance, build_history};
pub use config::{EngineConfig, MissingSubjectPolicy};
pub use error::{EngineError, Result};
pub use models::{
    CompetencyScore, Confidence, LearningTier, LearningVelocity, Pathway, PathwayRecommendation,
    PerformanceAnalysis, SubjectRecommendation, SubjectScores, TermScore, Trend,
};
pub use pathway::calculate_junior_pathway_affinity;
pub use tiers::generate_subject_recommendation;
pub use velocity::calculate_learning_velocity;
