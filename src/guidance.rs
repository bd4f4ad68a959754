use std::fmt::Write;

use crate::models::{round_half_up, Confidence, Pathway, SubjectScores};
use crate::subject::format_subject_name;

pub const MAX_DEVELOPMENT_CALLOUTS: usize = 3;

pub const DISCLAIMER: &str = "📌 Important: All subjects remain essential in junior school. This guidance helps with planning, but students should continue developing skills across all learning areas. Final pathway decisions should consider the student's interests, teacher input, and long-term goals.";

fn opening(pathway: Pathway, confidence: Confidence, percent: i64) -> String {
    match (pathway, confidence) {
        (Pathway::Stem, Confidence::High) => format!(
            "🌟 Exceptional STEM potential! Your child demonstrates outstanding analytical and technical abilities with a {percent}% pathway match."
        ),
        (Pathway::Stem, Confidence::Medium) => format!(
            "✅ Good STEM aptitude showing! Your child has solid foundations in science and mathematics with a {percent}% pathway match."
        ),
        (Pathway::Stem, Confidence::Low) => format!(
            "📊 Some STEM capability present. Your child shows potential in technical subjects with a {percent}% pathway match."
        ),
        (Pathway::ArtsSports, Confidence::High) => format!(
            "🎨 Outstanding creative and physical talents! Your child excels in artistic expression and sports with a {percent}% pathway match."
        ),
        (Pathway::ArtsSports, Confidence::Medium) => format!(
            "✨ Good creative abilities emerging! Your child demonstrates solid artistic and athletic potential with a {percent}% pathway match."
        ),
        (Pathway::ArtsSports, Confidence::Low) => format!(
            "🎭 Some creative potential showing. Your child has foundational arts and sports abilities with a {percent}% pathway match."
        ),
        (Pathway::SocialSciences, Confidence::High) => format!(
            "📚 Excellent humanities and communication skills! Your child shines in languages and social studies with a {percent}% pathway match."
        ),
        (Pathway::SocialSciences, Confidence::Medium) => format!(
            "📖 Good humanities aptitude! Your child shows strong language and social science abilities with a {percent}% pathway match."
        ),
        (Pathway::SocialSciences, Confidence::Low) => format!(
            "📝 Some social sciences capability. Your child has developing humanities skills with a {percent}% pathway match."
        ),
    }
}

fn recommendations(pathway: Pathway, scores: &SubjectScores) -> &'static [&'static str] {
    let at_least_meeting = |key: &str| scores.get(key).is_some_and(|score| score.value() >= 3);

    match pathway {
        Pathway::Stem
            if at_least_meeting("mathematics") && at_least_meeting("integrated_science") =>
        {
            &[
                "Enroll in science competitions (Kenya Science & Engineering Fair)",
                "Join math clubs and coding programs",
                "Explore STEM career talks and mentorship",
                "Likely pathway in Grade 10: STEM",
            ]
        }
        Pathway::Stem => &[
            "Strengthen foundation in math and science",
            "Use online resources (Khan Academy, BBC Bitesize)",
            "Practice problem-solving regularly",
            "Likely pathway in Grade 10: STEM",
        ],
        Pathway::ArtsSports => &[
            "Join arts clubs, drama groups, or music ensembles",
            "Participate in school sports teams and tournaments",
            "Attend arts exhibitions and performances",
            "Explore creative career options early",
            "Likely pathway in Grade 10: Arts & Sports Science",
        ],
        Pathway::SocialSciences => &[
            "Join debate clubs and Model UN",
            "Increase reading (novels, newspapers, magazines)",
            "Practice essay writing and presentations",
            "Explore social sciences through documentaries",
            "Likely pathway in Grade 10: Social Sciences",
        ],
    }
}

/// Narrative shown to parents alongside the pathway scores. Deterministic for
/// identical inputs.
pub fn generate_guidance_message(
    pathway: Pathway,
    score: f64,
    confidence: Confidence,
    _strengths: &[String],
    development_areas: &[String],
    scores: &SubjectScores,
) -> String {
    let percent = round_half_up(score, 0) as i64;
    let mut message = opening(pathway, confidence, percent);

    let _ = write!(message, "\n\n💡 Recommendations:\n");
    let bullets = recommendations(pathway, scores);
    for (i, bullet) in bullets.iter().enumerate() {
        if i + 1 < bullets.len() {
            let _ = writeln!(message, "• {bullet}");
        } else {
            let _ = write!(message, "• {bullet}");
        }
    }

    if !development_areas.is_empty() {
        let _ = write!(message, "\n\n⚠️ Areas for Improvement:\n");
        for area in development_areas.iter().take(MAX_DEVELOPMENT_CALLOUTS) {
            let _ = writeln!(
                message,
                "• {}: Needs more attention and practice",
                format_subject_name(area)
            );
        }
    }

    let _ = write!(message, "\n\n{DISCLAIMER}");
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_scores;

    fn areas(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|key| key.to_string()).collect()
    }

    #[test]
    fn high_confidence_stem_opening_and_disclaimer() {
        let scores = parse_scores([("mathematics", 4), ("integrated_science", 4)]).unwrap();
        let message =
            generate_guidance_message(Pathway::Stem, 93.75, Confidence::High, &[], &[], &scores);
        assert!(message.starts_with(
            "🌟 Exceptional STEM potential! Your child demonstrates outstanding analytical and technical abilities with a 94% pathway match."
        ));
        assert!(message.ends_with(DISCLAIMER));
        assert!(message.contains("• Join math clubs and coding programs\n"));
        assert!(!message.contains("Areas for Improvement"));
    }

    #[test]
    fn stem_without_core_strength_gets_foundation_advice() {
        let scores = parse_scores([("mathematics", 4), ("integrated_science", 2)]).unwrap();
        let message =
            generate_guidance_message(Pathway::Stem, 55.0, Confidence::Low, &[], &[], &scores);
        assert!(message.contains("• Strengthen foundation in math and science"));
        assert!(message.contains("• Likely pathway in Grade 10: STEM\n\n📌"));
    }

    #[test]
    fn development_callouts_are_capped_and_formatted() {
        let scores = parse_scores([("english", 1)]).unwrap();
        let development = areas(&[
            "creative_arts_sports",
            "social_studies",
            "kiswahili_ksl",
            "english",
        ]);
        let message = generate_guidance_message(
            Pathway::SocialSciences,
            47.2,
            Confidence::Medium,
            &[],
            &development,
            &scores,
        );
        assert!(message.contains("📖 Good humanities aptitude!"));
        assert!(message.contains("with a 47% pathway match."));
        assert!(
            message.contains("• Creative Arts and Sports: Needs more attention and practice\n")
        );
        assert!(message.contains("• Kiswahili/KSL: Needs more attention and practice\n"));
        assert!(!message.contains("• English: Needs"));
        assert_eq!(message.matches("Needs more attention").count(), 3);
    }

    #[test]
    fn every_pathway_confidence_pair_has_an_opening() {
        let scores = SubjectScores::new();
        for pathway in Pathway::ALL {
            for confidence in [Confidence::Low, Confidence::Medium, Confidence::High] {
                let message =
                    generate_guidance_message(pathway, 50.0, confidence, &[], &[], &scores);
                assert!(message.contains("with a 50% pathway match."));
                assert!(message.contains("💡 Recommendations:"));
            }
        }
    }
}
