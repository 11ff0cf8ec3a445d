use chrono::{DateTime, Utc};
use regex::Regex;

use crate::detectors::patterns::{URGENCY_LATER, URGENCY_NOW, URGENCY_SOON};
use crate::models::{Moment, MomentMetadata, MomentType, Urgency};
use crate::text::{estimate_timestamp, split_sentences, truncate_snippet};

/// Scan the transcript for action items
///
/// Each matching sentence is classified for urgency and probed for an
/// assignee. Importance is 0.85 for urgency `now`, 0.7 otherwise.
pub fn detect_action_items(
    action: &Regex,
    assignee_patterns: &[Regex],
    transcript: &str,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    let mut moments = Vec::new();

    let sentences = split_sentences(transcript);
    let mut char_offset = 0usize;

    for (i, sentence) in sentences.iter().enumerate() {
        if action.is_match(sentence) {
            let urgency = classify_urgency(sentence);
            let assignee = extract_assignee(assignee_patterns, sentence);
            let timestamp = estimate_timestamp(char_offset, transcript.len(), timestamps, fallback);

            let importance_score = if urgency == Urgency::Now { 0.85 } else { 0.7 };

            moments.push(Moment {
                moment_type: MomentType::ActionItem,
                timestamp,
                importance_score,
                text_snippet: truncate_snippet(sentence.trim()),
                metadata: MomentMetadata::ActionItem {
                    urgency,
                    assignee,
                    sentence_index: i,
                },
            });
        }

        char_offset += sentence.len() + 1;
    }

    moments
}

/// Classify how soon an action item needs to happen
///
/// Case-insensitive substring check against fixed keyword tiers; the first
/// tier with any hit wins.
pub fn classify_urgency(text: &str) -> Urgency {
    let lower = text.to_lowercase();

    if URGENCY_NOW.iter().any(|k| lower.contains(k)) {
        return Urgency::Now;
    }
    if URGENCY_SOON.iter().any(|k| lower.contains(k)) {
        return Urgency::Soon;
    }
    if URGENCY_LATER.iter().any(|k| lower.contains(k)) {
        return Urgency::Later;
    }

    Urgency::Unspecified
}

/// Try to pull an assignee name out of an action-item sentence
///
/// Templates are tried in order; the first captured name wins. No
/// cross-sentence context and no alias resolution.
pub fn extract_assignee(patterns: &[Regex], text: &str) -> Option<String> {
    for pattern in patterns {
        if let Some(captures) = pattern.captures(text) {
            if let Some(name) = captures.get(1) {
                return Some(name.as_str().to_string());
            }
        }
    }
    None
}
