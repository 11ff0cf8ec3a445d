use chrono::{DateTime, Utc};

use crate::models::{EmotionEntry, Moment, MomentMetadata, MomentType};
use crate::text::truncate_snippet;

/// Multiplier over the average intensity that counts as a peak
const PEAK_THRESHOLD_FACTOR: f64 = 1.5;
/// Previous intensity must clear this floor for a drop to count as a valley
const VALLEY_MIN_PREVIOUS: f64 = 0.3;
/// A valley is a drop below this fraction of the previous intensity
const VALLEY_DROP_FACTOR: f64 = 0.6;
/// Minimum absolute valence swing for a sentiment change
const SENTIMENT_FLIP_MAGNITUDE: f64 = 1.5;

/// Detect entries whose intensity spikes well above the running average
///
/// Intensity is the maximum score within an entry; entries with no scores
/// contribute nothing to the average and can never peak. Importance is the
/// intensity boosted by 1.2 and capped at 1.0.
pub fn detect_emotional_peaks(
    emotion_timeline: &[EmotionEntry],
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    let mut moments = Vec::new();

    let intensities: Vec<f64> = emotion_timeline
        .iter()
        .filter_map(|e| e.intensity())
        .collect();
    if intensities.is_empty() {
        return moments;
    }

    let avg_intensity = intensities.iter().sum::<f64>() / intensities.len() as f64;
    let threshold = avg_intensity * PEAK_THRESHOLD_FACTOR;

    for (i, entry) in emotion_timeline.iter().enumerate() {
        let Some(intensity) = entry.intensity() else {
            continue;
        };

        if intensity >= threshold {
            moments.push(Moment {
                moment_type: MomentType::EmotionalPeak,
                timestamp: entry_timestamp(i, timestamps, fallback),
                importance_score: (intensity * 1.2).min(1.0),
                text_snippet: chunk_snippet(entry),
                metadata: MomentMetadata::EmotionalPeak {
                    dominant_emotion: entry.dominant_emotion.clone(),
                    intensity,
                    threshold,
                },
            });
        }
    }

    moments
}

/// Detect sudden drops in emotion intensity between adjacent entries
pub fn detect_emotional_valleys(
    emotion_timeline: &[EmotionEntry],
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    let mut moments = Vec::new();

    if emotion_timeline.len() < 2 {
        return moments;
    }

    let intensities: Vec<f64> = emotion_timeline
        .iter()
        .map(|e| e.intensity().unwrap_or(0.0))
        .collect();

    for i in 1..intensities.len() {
        let previous = intensities[i - 1];
        let current = intensities[i];

        // previous > 0.3 also guards the drop-percentage division
        if previous > VALLEY_MIN_PREVIOUS && current < previous * VALLEY_DROP_FACTOR {
            moments.push(Moment {
                moment_type: MomentType::EmotionalValley,
                timestamp: entry_timestamp(i, timestamps, fallback),
                importance_score: 0.6,
                text_snippet: chunk_snippet(&emotion_timeline[i]),
                metadata: MomentMetadata::EmotionalValley {
                    previous_intensity: previous,
                    current_intensity: current,
                    drop_percentage: (previous - current) / previous * 100.0,
                },
            });
        }
    }

    moments
}

/// Detect full positive/negative sentiment flips between adjacent entries
pub fn detect_sentiment_changes(
    emotion_timeline: &[EmotionEntry],
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    let mut moments = Vec::new();

    if emotion_timeline.len() < 2 {
        return moments;
    }

    let sentiments: Vec<f64> = emotion_timeline
        .iter()
        .map(|e| valence(&e.dominant_emotion))
        .collect();

    for i in 1..sentiments.len() {
        let magnitude = (sentiments[i] - sentiments[i - 1]).abs();

        if magnitude >= SENTIMENT_FLIP_MAGNITUDE {
            moments.push(Moment {
                moment_type: MomentType::SentimentChange,
                timestamp: entry_timestamp(i, timestamps, fallback),
                importance_score: 0.8,
                text_snippet: chunk_snippet(&emotion_timeline[i]),
                metadata: MomentMetadata::SentimentChange {
                    previous_sentiment: sentiments[i - 1],
                    current_sentiment: sentiments[i],
                    change_magnitude: magnitude,
                },
            });
        }
    }

    moments
}

/// Signed sentiment weight for an emotion label
fn valence(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "joy" | "happiness" | "excitement" => 1.0,
        "sadness" | "anger" | "fear" | "disgust" => -1.0,
        _ => 0.0,
    }
}

fn entry_timestamp(
    index: usize,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> DateTime<Utc> {
    timestamps.get(index).copied().unwrap_or(fallback)
}

fn chunk_snippet(entry: &EmotionEntry) -> String {
    entry
        .text_chunk
        .as_deref()
        .map(truncate_snippet)
        .unwrap_or_default()
}
