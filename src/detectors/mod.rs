pub mod actions;
pub mod consensus;
pub mod decisions;
pub mod emotions;
pub mod patterns;
pub mod questions;

pub use actions::*;
pub use consensus::*;
pub use decisions::*;
pub use emotions::*;
pub use patterns::PatternLibrary;
pub use questions::*;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{AnalysisInput, Moment};

/// Key-moment detection engine
///
/// Holds the compiled pattern library and nothing else; every detection call
/// is a pure function of its inputs. The detectors are independent (none
/// reads another's output), so their results are simply concatenated and
/// ranked once at the end.
#[derive(Debug, Default)]
pub struct MomentDetector {
    patterns: PatternLibrary,
}

impl MomentDetector {
    pub fn new() -> Self {
        Self {
            patterns: PatternLibrary::new(),
        }
    }

    /// Identify key moments, using the current wall-clock time as the
    /// fallback timestamp for anything the timestamp sequence cannot cover
    pub fn identify_key_moments(&self, input: &AnalysisInput) -> Vec<Moment> {
        self.identify_key_moments_at(input, Utc::now())
    }

    /// Identify key moments with an injected fallback instant
    ///
    /// The fallback is captured once per call and threaded to every
    /// detector, so two calls with the same inputs and instant produce
    /// identical output.
    pub fn identify_key_moments_at(
        &self,
        input: &AnalysisInput,
        fallback_now: DateTime<Utc>,
    ) -> Vec<Moment> {
        let transcript = input.transcript.as_str();
        let timeline = input.emotion_timeline.as_slice();
        let timestamps = input.timestamps.as_slice();

        let mut moments = Vec::new();

        moments.extend(detect_emotional_peaks(timeline, timestamps, fallback_now));
        moments.extend(detect_emotional_valleys(timeline, timestamps, fallback_now));
        moments.extend(detect_decision_language(
            &self.patterns.decision,
            transcript,
            timestamps,
            fallback_now,
        ));
        moments.extend(detect_action_items(
            &self.patterns.action,
            &self.patterns.assignee,
            transcript,
            timestamps,
            fallback_now,
        ));
        moments.extend(detect_question_clusters(
            &self.patterns.question,
            transcript,
            timestamps,
            fallback_now,
        ));
        moments.extend(detect_agreement_spikes(
            &self.patterns.agreement,
            transcript,
            timestamps,
            fallback_now,
        ));
        moments.extend(detect_disagreement_spikes(
            &self.patterns.disagreement,
            transcript,
            timestamps,
            fallback_now,
        ));
        moments.extend(detect_sentiment_changes(timeline, timestamps, fallback_now));

        rank_moments(&mut moments);

        debug!("detected {} key moments", moments.len());
        moments
    }
}

/// Impose the final timeline order: timestamp ascending, then importance
/// descending as the tie-break
///
/// Stable, so moments that tie on both keys keep detector order.
pub fn rank_moments(moments: &mut [Moment]) {
    moments.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| b.importance_score.total_cmp(&a.importance_score))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmotionEntry, EmotionScore, MomentType};
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, minute, 0).unwrap()
    }

    fn entry(emotion: &str, score: f64, chunk: &str) -> EmotionEntry {
        EmotionEntry {
            dominant_emotion: emotion.to_string(),
            emotion_scores: vec![EmotionScore {
                label: emotion.to_string(),
                score,
            }],
            text_chunk: Some(chunk.to_string()),
        }
    }

    fn meeting_input() -> AnalysisInput {
        AnalysisInput {
            transcript: "We decided to proceed. John will complete the task by tomorrow. \
                         What is the plan? How do we proceed? When will this happen? \
                         Yes, I agree. That sounds good. \
                         I disagree with that. However, I think differently."
                .to_string(),
            emotion_timeline: vec![
                entry("joy", 0.3, "This is a normal conversation."),
                entry("joy", 0.8, "This is an exciting moment!"),
                entry("sadness", 0.2, "This is a low point."),
                entry("anger", 0.9, "This is a very intense moment!"),
            ],
            topic_timeline: vec![],
            timestamps: vec![ts(0), ts(5), ts(10), ts(15)],
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let detector = MomentDetector::new();
        let moments = detector.identify_key_moments_at(&AnalysisInput::default(), ts(0));
        assert!(moments.is_empty());
    }

    #[test]
    fn test_output_obeys_ordering_law() {
        let detector = MomentDetector::new();
        let moments = detector.identify_key_moments_at(&meeting_input(), ts(59));

        assert!(!moments.is_empty());
        for pair in moments.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
            if pair[0].timestamp == pair[1].timestamp {
                assert!(pair[0].importance_score >= pair[1].importance_score);
            }
        }
    }

    #[test]
    fn test_detection_is_deterministic() {
        let detector = MomentDetector::new();
        let input = meeting_input();

        let first = detector.identify_key_moments_at(&input, ts(59));
        let second = detector.identify_key_moments_at(&input, ts(59));

        assert_eq!(first, second);
    }

    #[test]
    fn test_invariants_hold_for_all_moments() {
        let detector = MomentDetector::new();
        let moments = detector.identify_key_moments_at(&meeting_input(), ts(59));

        for moment in &moments {
            assert!((0.0..=1.0).contains(&moment.importance_score));
            assert!(moment.text_snippet.chars().count() <= 200);
        }
    }

    #[test]
    fn test_mixed_input_produces_several_moment_types() {
        let detector = MomentDetector::new();
        let moments = detector.identify_key_moments_at(&meeting_input(), ts(59));

        let types: std::collections::HashSet<MomentType> =
            moments.iter().map(|m| m.moment_type).collect();
        assert!(types.contains(&MomentType::Decision));
        assert!(types.contains(&MomentType::ActionItem));
        assert!(types.contains(&MomentType::QuestionCluster));
        assert!(types.contains(&MomentType::EmotionalPeak));
        assert!(types.contains(&MomentType::SentimentChange));
    }

    #[test]
    fn test_importance_breaks_timestamp_ties() {
        let detector = MomentDetector::new();
        let input = AnalysisInput {
            transcript: "We decided to go with option A. We need to send this ASAP.".to_string(),
            timestamps: vec![ts(0)],
            ..Default::default()
        };

        let moments = detector.identify_key_moments_at(&input, ts(59));

        // Both moments map onto the single timestamp; the urgent action item
        // (0.85) outranks the decision (0.8)
        assert_eq!(moments.len(), 2);
        assert_eq!(moments[0].timestamp, moments[1].timestamp);
        assert_eq!(moments[0].moment_type, MomentType::ActionItem);
        assert_eq!(moments[0].importance_score, 0.85);
        assert_eq!(moments[1].moment_type, MomentType::Decision);
    }

    #[test]
    fn test_same_sentence_can_be_decision_and_action_item() {
        let detector = MomentDetector::new();
        let input = AnalysisInput {
            transcript: "We decided that John will complete the rollout.".to_string(),
            ..Default::default()
        };

        let moments = detector.identify_key_moments_at(&input, ts(0));

        let types: Vec<MomentType> = moments.iter().map(|m| m.moment_type).collect();
        assert!(types.contains(&MomentType::Decision));
        assert!(types.contains(&MomentType::ActionItem));
    }

    #[test]
    fn test_missing_emotion_timeline_degrades_quietly() {
        let detector = MomentDetector::new();
        let input = AnalysisInput {
            transcript: "We decided to proceed.".to_string(),
            ..Default::default()
        };

        let moments = detector.identify_key_moments_at(&input, ts(0));

        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].moment_type, MomentType::Decision);
    }
}
