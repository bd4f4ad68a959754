//! Junior-school pathway affinity: weighted scores per pathway, a confidence
//! rating from the gap between the top two, and the guidance narrative.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::{EngineConfig, MissingSubjectPolicy};
use crate::guidance;
use crate::models::{round_half_up, Confidence, Pathway, PathwayRecommendation, SubjectScores};
use crate::subject::{SchoolLevel, Subject};

pub type PathwayWeights = &'static [(Subject, f64)];

pub const STEM_WEIGHTS: PathwayWeights = &[
    (Subject::Mathematics, 0.40),
    (Subject::IntegratedScience, 0.35),
    (Subject::PreTechnicalStudies, 0.25),
];

pub const ARTS_SPORTS_WEIGHTS: PathwayWeights = &[
    (Subject::CreativeArtsSports, 0.60),
    (Subject::English, 0.20),
    (Subject::Kiswahili, 0.20),
];

pub const SOCIAL_SCIENCES_WEIGHTS: PathwayWeights = &[
    (Subject::SocialStudies, 0.40),
    (Subject::English, 0.30),
    (Subject::Kiswahili, 0.30),
];

/// Gap above which the top pathway is a clear winner.
pub const HIGH_CONFIDENCE_GAP: f64 = 20.0;
/// Gap above which the top pathway is a likely winner.
pub const MEDIUM_CONFIDENCE_GAP: f64 = 10.0;

pub fn weights_for(pathway: Pathway) -> PathwayWeights {
    match pathway {
        Pathway::Stem => STEM_WEIGHTS,
        Pathway::ArtsSports => ARTS_SPORTS_WEIGHTS,
        Pathway::SocialSciences => SOCIAL_SCIENCES_WEIGHTS,
    }
}

/// Weighted average of `(score / 4) * 100` over a pathway's subjects, in [0, 100].
pub fn weighted_score(
    scores: &SubjectScores,
    weights: &[(Subject, f64)],
    policy: MissingSubjectPolicy,
) -> f64 {
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for (subject, weight) in weights {
        let score = match (scores.get(subject.key()), policy) {
            (Some(score), _) => score.as_f64(),
            (None, MissingSubjectPolicy::CountAsZero) => 0.0,
            (None, MissingSubjectPolicy::Exclude) => continue,
        };
        total_score += (score / 4.0) * 100.0 * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        total_score / total_weight
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathwayScore {
    pub pathway: Pathway,
    pub score: f64,
}

/// Unrounded scores for all three pathways, best first. Ties keep the
/// declaration order STEM, Arts & Sports, Social Sciences.
pub fn rank_pathways(scores: &SubjectScores, config: &EngineConfig) -> [PathwayScore; 3] {
    let mut ranked = Pathway::ALL.map(|pathway| PathwayScore {
        pathway,
        score: weighted_score(scores, weights_for(pathway), config.missing_subjects),
    });
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

pub fn classify_confidence(top_score: f64, second_score: f64) -> Confidence {
    let gap = top_score - second_score;
    if gap > HIGH_CONFIDENCE_GAP {
        Confidence::High
    } else if gap > MEDIUM_CONFIDENCE_GAP {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Subjects at Meeting Expectations or above, strongest first.
pub fn strengths(scores: &SubjectScores) -> Vec<String> {
    let mut selected: Vec<_> = scores.iter().filter(|(_, score)| score.value() >= 3).collect();
    selected.sort_by(|a, b| b.1.cmp(a.1));
    selected.into_iter().map(|(subject, _)| subject.clone()).collect()
}

/// Subjects at Approaching Expectations or below, weakest first.
pub fn development_areas(scores: &SubjectScores) -> Vec<String> {
    let mut selected: Vec<_> = scores.iter().filter(|(_, score)| score.value() <= 2).collect();
    selected.sort_by(|a, b| a.1.cmp(b.1));
    selected.into_iter().map(|(subject, _)| subject.clone()).collect()
}

pub fn calculate_junior_pathway_affinity(
    scores: &SubjectScores,
    config: &EngineConfig,
) -> PathwayRecommendation {
    calculate_junior_pathway_affinity_at(scores, config, Utc::now())
}

pub fn calculate_junior_pathway_affinity_at(
    scores: &SubjectScores,
    config: &EngineConfig,
    calculated_at: DateTime<Utc>,
) -> PathwayRecommendation {
    let ranked = rank_pathways(scores, config);
    let top = ranked[0];
    let confidence = classify_confidence(top.score, ranked[1].score);
    let strengths = strengths(scores);
    let development_areas = development_areas(scores);

    debug!(
        top_pathway = %top.pathway,
        top_score = top.score,
        runner_up = ranked[1].score,
        %confidence,
        "computed pathway affinity"
    );

    let guidance_message = guidance::generate_guidance_message(
        top.pathway,
        top.score,
        confidence,
        &strengths,
        &development_areas,
        scores,
    );

    let published = |pathway: Pathway| {
        let score = ranked
            .iter()
            .find(|entry| entry.pathway == pathway)
            .map(|entry| entry.score)
            .unwrap_or(0.0);
        round_half_up(score, 0).clamp(0.0, 100.0) as u8
    };

    PathwayRecommendation {
        stem_score: published(Pathway::Stem),
        arts_sports_score: published(Pathway::ArtsSports),
        social_sciences_score: published(Pathway::SocialSciences),
        top_pathway: top.pathway,
        confidence,
        strengths,
        development_areas,
        guidance_message,
        calculated_at,
    }
}

/// Pathway guidance for an assessment, only produced for junior school.
/// Senior students choose their pathway at Grade 10.
pub fn recommend_for_assessment(
    grade: u8,
    scores: &SubjectScores,
    config: &EngineConfig,
) -> Option<PathwayRecommendation> {
    match SchoolLevel::from_grade(grade) {
        SchoolLevel::Junior => Some(calculate_junior_pathway_affinity(scores, config)),
        SchoolLevel::Senior | SchoolLevel::Unknown => {
            debug!(grade, "skipping pathway affinity outside junior school");
            None
        }
    }
}
