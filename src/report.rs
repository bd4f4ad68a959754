use std::fmt::Write;

use crate::competency::analyze_skill_gaps;
use crate::models::{AssessmentRecord, PathwayRecommendation, PerformanceAnalysis, Trend};
use crate::subject::format_subject_name;

const MAX_SKILL_GAPS: usize = 3;

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Accelerating => "accelerating",
        Trend::Steady => "steady",
        Trend::Slowing => "slowing",
        Trend::InsufficientData => "insufficient data",
    }
}

pub fn build_report(
    latest: &AssessmentRecord,
    pathway: Option<&PathwayRecommendation>,
    analysis: &PerformanceAnalysis,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Learning Report: {}", latest.student_name);
    let _ = writeln!(
        output,
        "Grade {} - latest assessment Term {} {}",
        latest.grade, latest.term, latest.year
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Pathway Guidance");

    match pathway {
        Some(rec) => {
            let _ = writeln!(
                output,
                "- Top pathway: {} ({} confidence)",
                rec.top_pathway, rec.confidence
            );
            let _ = writeln!(
                output,
                "- STEM {} / Arts & Sports {} / Social Sciences {}",
                rec.stem_score, rec.arts_sports_score, rec.social_sciences_score
            );
            let _ = writeln!(output);
            let _ = writeln!(output, "{}", rec.guidance_message);
        }
        None => {
            let _ = writeln!(
                output,
                "Pathway guidance is only computed for junior school (Grades 7-9)."
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Performance Overview");
    let tier = analysis.overall_tier;
    let _ = writeln!(output, "- Overall: {}", tier.label());
    let _ = writeln!(
        output,
        "- Needing support: {} subject(s)",
        analysis.subjects_needing_support
    );
    let _ = writeln!(output, "- Excelling: {} subject(s)", analysis.subjects_excelling);
    let _ = writeln!(
        output,
        "- Average velocity: {:+.2} per term",
        analysis.average_velocity
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Subject Plans");

    if analysis.recommendations.is_empty() {
        let _ = writeln!(output, "No subjects assessed.");
    } else {
        for rec in &analysis.recommendations {
            let _ = writeln!(
                output,
                "### {} (level {} -> target {}): {}",
                rec.subject, rec.current_level, rec.target_level, rec.tier_label
            );
            let _ = writeln!(output, "{}", rec.description);
            for step in &rec.action_steps {
                let _ = writeln!(output, "- {step}");
            }
            if rec.current_level <= 2 {
                let gaps =
                    analyze_skill_gaps(&rec.subject_key, rec.current_level, rec.target_level);
                let _ = writeln!(output, "Specific skills to master:");
                for gap in gaps.gaps.iter().take(MAX_SKILL_GAPS) {
                    let _ = writeln!(output, "  - {gap}");
                }
            }
            let _ = writeln!(output, "Estimated time: {}", rec.estimated_time);
            let _ = writeln!(output);
        }
    }

    let _ = writeln!(output, "## Learning Velocity");

    if analysis.velocities.is_empty() {
        let _ = writeln!(output, "No assessment history available.");
    } else {
        for velocity in &analysis.velocities {
            let _ = writeln!(
                output,
                "- {}: {:+.2} per term ({}) - {}",
                format_subject_name(&velocity.subject),
                velocity.velocity,
                trend_label(velocity.trend),
                velocity.prediction
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_performance;
    use crate::config::EngineConfig;
    use crate::models::parse_scores;
    use crate::pathway::calculate_junior_pathway_affinity;
    use uuid::Uuid;

    fn latest(grade: u8) -> AssessmentRecord {
        AssessmentRecord {
            student_id: Uuid::new_v4(),
            student_name: "Achieng Otieno".to_string(),
            grade,
            year: 2026,
            term: 1,
            scores: parse_scores([("mathematics", 4), ("english", 2)]).unwrap(),
        }
    }

    #[test]
    fn junior_report_includes_pathway_section() {
        let record = latest(8);
        let pathway = calculate_junior_pathway_affinity(&record.scores, &EngineConfig::default());
        let analysis = analyze_performance(&record.scores, None);
        let report = build_report(&record, Some(&pathway), &analysis);

        assert!(report.starts_with("# Learning Report: Achieng Otieno"));
        assert!(report.contains("- Top pathway: "));
        assert!(report.contains("### English (level 2 -> target 3): Gap Closing"));
        assert!(report.contains("No assessment history available."));
    }

    #[test]
    fn struggling_subjects_list_skill_gaps() {
        let record = latest(11);
        let analysis = analyze_performance(&record.scores, None);
        let report = build_report(&record, None, &analysis);

        assert!(report.contains("Specific skills to master:"));
        assert!(report.contains("  - 1. Reads and comprehends independently"));
        assert!(report.contains("  - 3. Good vocabulary range"));
        assert!(!report.contains("4. Correct grammar usually"));
        // mathematics is at level 4 and gets no gap list
        assert_eq!(report.matches("Specific skills to master:").count(), 1);
    }

    #[test]
    fn senior_report_explains_missing_pathway() {
        let record = latest(11);
        let analysis = analyze_performance(&record.scores, None);
        let report = build_report(&record, None, &analysis);
        assert!(report.contains("only computed for junior school"));
        assert!(report.contains("- Excelling: 1 subject(s)"));
    }
}
