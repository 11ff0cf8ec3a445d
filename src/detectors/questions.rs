use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::{Moment, MomentMetadata, MomentType};
use crate::text::{estimate_timestamp, split_sentences, truncate_snippet};

const WINDOW_SIZE: usize = 5;
const MIN_QUESTIONS: usize = 3;

/// Scan for clusters of questions
///
/// Slides a 5-sentence window with stride 1; a window with at least 3
/// question sentences emits one moment. Windows are evaluated at every start
/// offset, so overlapping clusters each emit their own moment.
pub fn detect_question_clusters(
    question: &Regex,
    transcript: &str,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    let mut moments = Vec::new();

    let sentences = split_sentences(transcript);
    if sentences.len() < WINDOW_SIZE {
        return moments;
    }

    let mut char_offset = 0usize;

    for start in 0..=sentences.len() - WINDOW_SIZE {
        let window = &sentences[start..start + WINDOW_SIZE];
        let question_count = window.iter().filter(|s| question.is_match(s)).count();

        if question_count >= MIN_QUESTIONS {
            let cluster_text = window[..3].join(" ");
            let timestamp = estimate_timestamp(char_offset, transcript.len(), timestamps, fallback);

            moments.push(Moment {
                moment_type: MomentType::QuestionCluster,
                timestamp,
                importance_score: (0.5 + question_count as f64 / 10.0).min(0.9),
                text_snippet: truncate_snippet(cluster_text.trim()),
                metadata: MomentMetadata::QuestionCluster {
                    question_count,
                    window_size: WINDOW_SIZE,
                    start_index: start,
                },
            });
        }

        char_offset += sentences[start].len() + 1;
    }

    moments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::patterns::PatternLibrary;
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, minute, 0).unwrap()
    }

    #[test]
    fn test_detects_question_cluster() {
        let lib = PatternLibrary::new();
        let transcript = "What is the plan? How do we proceed? When will this happen? \
                          Who is responsible? Why did this occur?";

        let moments = detect_question_clusters(&lib.question, transcript, &[ts(0)], ts(59));

        assert!(!moments.is_empty());
        for moment in &moments {
            assert_eq!(moment.moment_type, MomentType::QuestionCluster);
            match moment.metadata {
                MomentMetadata::QuestionCluster {
                    question_count,
                    window_size,
                    ..
                } => {
                    assert!(question_count >= 3);
                    assert_eq!(window_size, 5);
                }
                _ => panic!("unexpected metadata"),
            }
        }
    }

    #[test]
    fn test_importance_capped_at_point_nine() {
        let lib = PatternLibrary::new();
        let transcript = "What is it? Why now? How come? Who said so? When exactly?";

        let moments = detect_question_clusters(&lib.question, transcript, &[], ts(0));

        // A fully saturated window would score 1.0 uncapped
        assert!(!moments.is_empty());
        assert_eq!(moments[0].importance_score, 0.9);
    }

    #[test]
    fn test_no_cluster_for_statements() {
        let lib = PatternLibrary::new();
        let transcript = "We met at noon. The agenda was short. Lunch was served. \
                          The demo ran fine. Everyone left early. Nothing else happened.";

        let moments = detect_question_clusters(&lib.question, transcript, &[], ts(0));
        assert!(moments.is_empty());
    }

    #[test]
    fn test_short_transcript_yields_nothing() {
        let lib = PatternLibrary::new();
        let moments =
            detect_question_clusters(&lib.question, "Why? How?", &[], ts(0));
        assert!(moments.is_empty());
    }

    #[test]
    fn test_snippet_uses_first_three_sentences() {
        let lib = PatternLibrary::new();
        let transcript = "What is the plan? How do we proceed? When will this happen? \
                          Who is responsible? Why did this occur?";

        let moments = detect_question_clusters(&lib.question, transcript, &[], ts(0));

        assert!(!moments.is_empty());
        let snippet = &moments[0].text_snippet;
        assert!(snippet.contains("What is the plan"));
        assert!(snippet.contains("When will this happen"));
        assert!(!snippet.contains("Who is responsible"));
    }
}
