use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored emotion label within an emotion timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    /// Emotion label (e.g. "joy", "anger")
    pub label: String,
    /// Model confidence in [0, 1]
    #[serde(default)]
    pub score: f64,
}

/// One entry in the emotion timeline, produced by an upstream analyzer
///
/// The engine treats this as an opaque signal: only the shape matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionEntry {
    /// Strongest emotion label for this chunk
    #[serde(default)]
    pub dominant_emotion: String,
    /// Scored labels, strongest first; may be empty
    #[serde(default)]
    pub emotion_scores: Vec<EmotionScore>,
    /// Source text this entry was computed from, when available
    #[serde(default)]
    pub text_chunk: Option<String>,
}

impl EmotionEntry {
    /// Intensity of this entry: the maximum score across its labels
    ///
    /// `None` when the entry carries no scores at all, so callers can
    /// distinguish "no signal" from a genuine zero.
    pub fn intensity(&self) -> Option<f64> {
        if self.emotion_scores.is_empty() {
            return None;
        }
        Some(
            self.emotion_scores
                .iter()
                .map(|s| s.score)
                .fold(0.0, f64::max),
        )
    }
}

/// One scored topic label within a topic timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    pub topic: String,
    #[serde(default)]
    pub score: f64,
}

/// One entry in the topic timeline
///
/// Accepted on input but not consumed by any detector yet; reserved for
/// topic-shift detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    #[serde(default)]
    pub primary_topic: String,
    #[serde(default)]
    pub topic_scores: Vec<TopicScore>,
}

/// Full input to one detection call
///
/// Every field defaults to empty: a partial payload degrades to fewer
/// detectors contributing, never to a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Full meeting transcript
    #[serde(default)]
    pub transcript: String,
    /// Emotion entries in chronological order
    #[serde(default)]
    pub emotion_timeline: Vec<EmotionEntry>,
    /// Topic entries in chronological order (reserved)
    #[serde(default)]
    pub topic_timeline: Vec<TopicEntry>,
    /// Timestamps index-aligned with `emotion_timeline`; may be shorter or empty
    #[serde(default)]
    pub timestamps: Vec<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_is_max_score() {
        let entry = EmotionEntry {
            dominant_emotion: "joy".to_string(),
            emotion_scores: vec![
                EmotionScore {
                    label: "joy".to_string(),
                    score: 0.3,
                },
                EmotionScore {
                    label: "neutral".to_string(),
                    score: 0.7,
                },
            ],
            text_chunk: None,
        };
        assert_eq!(entry.intensity(), Some(0.7));
    }

    #[test]
    fn test_intensity_none_without_scores() {
        let entry = EmotionEntry::default();
        assert_eq!(entry.intensity(), None);
    }

    #[test]
    fn test_analysis_input_defaults_missing_fields() {
        let input: AnalysisInput =
            serde_json::from_str(r#"{"transcript": "Hello there."}"#).unwrap();
        assert_eq!(input.transcript, "Hello there.");
        assert!(input.emotion_timeline.is_empty());
        assert!(input.topic_timeline.is_empty());
        assert!(input.timestamps.is_empty());
    }
}
