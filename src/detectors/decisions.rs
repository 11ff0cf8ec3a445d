use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::{Moment, MomentMetadata, MomentType};
use crate::text::{estimate_timestamp, split_sentences, truncate_snippet};

/// Scan the transcript for decision language
///
/// Each matching sentence yields exactly one moment: the pattern union
/// short-circuits, so a sentence hitting several decision phrasings is still
/// counted once. Fixed importance of 0.8.
pub fn detect_decision_language(
    decision: &Regex,
    transcript: &str,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    let mut moments = Vec::new();

    let sentences = split_sentences(transcript);
    let mut char_offset = 0usize;

    for (i, sentence) in sentences.iter().enumerate() {
        if decision.is_match(sentence) {
            let timestamp = estimate_timestamp(char_offset, transcript.len(), timestamps, fallback);

            moments.push(Moment {
                moment_type: MomentType::Decision,
                timestamp,
                importance_score: 0.8,
                text_snippet: truncate_snippet(sentence.trim()),
                metadata: MomentMetadata::Decision {
                    sentence_index: i,
                    matched_pattern: "decision_language",
                },
            });
        }

        char_offset += sentence.len() + 1;
    }

    moments
}
