use tracing::debug;
use uuid::Uuid;

use crate::models::{
    round_half_up, AssessmentRecord, LearningTier, PerformanceAnalysis, SubjectHistory,
    SubjectScores, TermScore,
};
use crate::tiers::generate_subject_recommendation;
use crate::velocity::calculate_learning_velocity;

/// Roll the current term's scores and any history into one overview.
/// Struggling subjects and declining velocities sort first.
pub fn analyze_performance(
    scores: &SubjectScores,
    history: Option<&SubjectHistory>,
) -> PerformanceAnalysis {
    let mut recommendations = Vec::with_capacity(scores.len());
    let mut velocities = Vec::new();
    let mut total_score = 0u32;
    let mut subjects_needing_support = 0;
    let mut subjects_excelling = 0;

    for (subject, score) in scores {
        let level = score.value();
        total_score += level as u32;

        if level <= 2 {
            subjects_needing_support += 1;
        }
        if level >= 4 {
            subjects_excelling += 1;
        }

        recommendations.push(generate_subject_recommendation(subject, level as i64));

        if let Some(series) = history.and_then(|history| history.get(subject)) {
            velocities.push(calculate_learning_velocity(subject, series));
        }
    }

    let overall_tier = if scores.is_empty() {
        LearningTier::Standard
    } else {
        let mean = total_score as f64 / scores.len() as f64;
        LearningTier::from_level(round_half_up(mean, 0) as i64)
    };

    let average_velocity = if velocities.is_empty() {
        0.0
    } else {
        velocities.iter().map(|v| v.velocity).sum::<f64>() / velocities.len() as f64
    };

    recommendations.sort_by_key(|rec| rec.current_level);
    velocities.sort_by(|a, b| {
        a.velocity
            .partial_cmp(&b.velocity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        subjects = scores.len(),
        subjects_needing_support,
        subjects_excelling,
        ?overall_tier,
        "analyzed performance"
    );

    PerformanceAnalysis {
        overall_tier,
        subjects_needing_support,
        subjects_excelling,
        average_velocity: round_half_up(average_velocity, 2),
        recommendations,
        velocities,
    }
}

/// Per-subject score series for one student, ordered by (year, term). Only
/// subjects a record actually assessed contribute a point.
pub fn build_history(records: &[AssessmentRecord], student_id: Uuid) -> SubjectHistory {
    let mut ordered: Vec<&AssessmentRecord> = records
        .iter()
        .filter(|record| record.student_id == student_id)
        .collect();
    ordered.sort_by_key(|record| (record.year, record.term));

    let mut history = SubjectHistory::new();
    for record in ordered {
        for (subject, score) in &record.scores {
            history.entry(subject.clone()).or_default().push(TermScore {
                term: record.term,
                score: *score,
            });
        }
    }
    history
}

/// The most recent assessment for a student, if any.
pub fn latest_assessment(
    records: &[AssessmentRecord],
    student_id: Uuid,
) -> Option<&AssessmentRecord> {
    records
        .iter()
        .filter(|record| record.student_id == student_id)
        .max_by_key(|record| (record.year, record.term))
}
