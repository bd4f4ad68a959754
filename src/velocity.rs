//! Term-over-term learning velocity for a single subject.

use crate::models::{round_half_up, LearningVelocity, TermScore, Trend};

/// Minimum difference between the latest and the earliest term delta that
/// counts as a change of pace.
pub const TREND_THRESHOLD: f64 = 0.3;

/// `history` must be ordered by term ascending; it is not re-sorted here.
pub fn calculate_learning_velocity(subject_key: &str, history: &[TermScore]) -> LearningVelocity {
    if history.len() < 2 {
        return LearningVelocity {
            subject: subject_key.to_string(),
            velocity: 0.0,
            trend: Trend::InsufficientData,
            prediction: "Need at least 2 assessments to calculate velocity".to_string(),
        };
    }

    let deltas: Vec<f64> = history
        .windows(2)
        .map(|pair| pair[1].score.as_f64() - pair[0].score.as_f64())
        .collect();
    let velocity = deltas.iter().sum::<f64>() / deltas.len() as f64;

    let trend = match (deltas.first(), deltas.last()) {
        (Some(earliest), Some(recent)) if deltas.len() >= 2 => {
            if *recent > earliest + TREND_THRESHOLD {
                Trend::Accelerating
            } else if *recent < earliest - TREND_THRESHOLD {
                Trend::Slowing
            } else {
                Trend::Steady
            }
        }
        _ => Trend::Steady,
    };

    let current = history
        .last()
        .map(|point| point.score.as_f64())
        .unwrap_or_default();

    LearningVelocity {
        subject: subject_key.to_string(),
        velocity: round_half_up(velocity, 2),
        trend,
        prediction: predict(velocity, current),
    }
}

fn predict(velocity: f64, current: f64) -> String {
    if velocity > 0.5 {
        let next_level = current.floor() + 1.0;
        let terms = ((next_level - current) / velocity).ceil();
        format!(
            "At current pace, will reach level {} in {} term(s)",
            next_level as i64, terms as i64
        )
    } else if velocity > 0.1 {
        "Slow but steady improvement - keep practicing!".to_string()
    } else if velocity < -0.1 {
        "Declining - needs immediate intervention and support".to_string()
    } else {
        "Stable performance - maintain current effort".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompetencyScore;

    fn series(scores: &[i64]) -> Vec<TermScore> {
        scores
            .iter()
            .enumerate()
            .map(|(i, score)| TermScore {
                term: (i % 3 + 1) as u8,
                score: CompetencyScore::new("mathematics", *score).unwrap(),
            })
            .collect()
    }

    #[test]
    fn fewer_than_two_points_is_insufficient() {
        for history in [series(&[]), series(&[3])] {
            let velocity = calculate_learning_velocity("mathematics", &history);
            assert_eq!(velocity.velocity, 0.0);
            assert_eq!(velocity.trend, Trend::InsufficientData);
            assert_eq!(
                velocity.prediction,
                "Need at least 2 assessments to calculate velocity"
            );
        }
    }

    #[test]
    fn two_points_are_always_steady() {
        for history in [series(&[1, 4]), series(&[4, 1]), series(&[2, 2])] {
            let velocity = calculate_learning_velocity("english", &history);
            assert_eq!(velocity.trend, Trend::Steady);
        }
    }

    #[test]
    fn velocity_is_mean_delta_rounded() {
        let velocity = calculate_learning_velocity("english", &series(&[1, 2, 2, 3]));
        assert!((velocity.velocity - 0.67).abs() < 1e-9);
        assert_eq!(velocity.trend, Trend::Steady);
        assert_eq!(
            velocity.prediction,
            "At current pace, will reach level 4 in 2 term(s)"
        );
    }

    #[test]
    fn trend_compares_latest_and_earliest_delta() {
        let accelerating = calculate_learning_velocity("english", &series(&[1, 1, 3]));
        assert_eq!(accelerating.trend, Trend::Accelerating);
        let slowing = calculate_learning_velocity("english", &series(&[1, 3, 3]));
        assert_eq!(slowing.trend, Trend::Slowing);
    }

    #[test]
    fn prediction_bands() {
        let fast = calculate_learning_velocity("english", &series(&[2, 3]));
        assert_eq!(fast.prediction, "At current pace, will reach level 4 in 1 term(s)");

        let slow = calculate_learning_velocity("english", &series(&[2, 2, 2, 3]));
        assert!((slow.velocity - 0.33).abs() < 1e-9);
        assert_eq!(slow.prediction, "Slow but steady improvement - keep practicing!");

        let declining = calculate_learning_velocity("english", &series(&[3, 2]));
        assert_eq!(declining.velocity, -1.0);
        assert_eq!(
            declining.prediction,
            "Declining - needs immediate intervention and support"
        );

        let flat = calculate_learning_velocity("english", &series(&[3, 3, 3]));
        assert_eq!(flat.prediction, "Stable performance - maintain current effort");
    }
}
