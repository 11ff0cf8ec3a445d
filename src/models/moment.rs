use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of key moment detected in a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentType {
    EmotionalPeak,
    EmotionalValley,
    Decision,
    ActionItem,
    QuestionCluster,
    AgreementSpike,
    DisagreementSpike,
    SentimentChange,
}

impl MomentType {
    /// Stable string label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            MomentType::EmotionalPeak => "emotional_peak",
            MomentType::EmotionalValley => "emotional_valley",
            MomentType::Decision => "decision",
            MomentType::ActionItem => "action_item",
            MomentType::QuestionCluster => "question_cluster",
            MomentType::AgreementSpike => "agreement_spike",
            MomentType::DisagreementSpike => "disagreement_spike",
            MomentType::SentimentChange => "sentiment_change",
        }
    }
}

impl fmt::Display for MomentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon an action item needs to happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Now,
    Soon,
    Later,
    Unspecified,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Now => "now",
            Urgency::Soon => "soon",
            Urgency::Later => "later",
            Urgency::Unspecified => "unspecified",
        };
        f.write_str(label)
    }
}

/// Detector-specific diagnostic fields for a moment
///
/// Serialized untagged: `moment_type` on the parent already identifies the
/// shape, so the JSON metadata object carries only the detector's fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MomentMetadata {
    EmotionalPeak {
        dominant_emotion: String,
        intensity: f64,
        threshold: f64,
    },
    EmotionalValley {
        previous_intensity: f64,
        current_intensity: f64,
        drop_percentage: f64,
    },
    Decision {
        sentence_index: usize,
        matched_pattern: &'static str,
    },
    ActionItem {
        urgency: Urgency,
        assignee: Option<String>,
        sentence_index: usize,
    },
    QuestionCluster {
        question_count: usize,
        window_size: usize,
        start_index: usize,
    },
    AgreementSpike {
        agreement_count: usize,
        start_index: usize,
    },
    DisagreementSpike {
        disagreement_count: usize,
        start_index: usize,
    },
    SentimentChange {
        previous_sentiment: f64,
        current_sentiment: f64,
        change_magnitude: f64,
    },
}

/// A single detected event of interest, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Moment {
    /// Which detector produced this moment
    pub moment_type: MomentType,
    /// Supplied timestamp for emotion-series moments, estimated for text moments
    pub timestamp: DateTime<Utc>,
    /// Priority measure in [0.0, 1.0], not a probability
    pub importance_score: f64,
    /// Triggering text, at most 200 characters
    pub text_snippet: String,
    /// Per-detector diagnostics
    pub metadata: MomentMetadata,
}
