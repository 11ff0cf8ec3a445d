use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::{Moment, MomentMetadata, MomentType};
use crate::text::{estimate_timestamp, split_sentences, truncate_snippet};

const WINDOW_SIZE: usize = 3;
const MIN_MATCHES: usize = 2;

/// Scan for runs of agreement language
///
/// A 3-sentence window with 2+ agreeing sentences emits one moment at a
/// fixed importance of 0.7.
pub fn detect_agreement_spikes(
    agreement: &Regex,
    transcript: &str,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    scan_windows(agreement, transcript, timestamps, fallback, |count, start| {
        (
            MomentType::AgreementSpike,
            0.7,
            MomentMetadata::AgreementSpike {
                agreement_count: count,
                start_index: start,
            },
        )
    })
}

/// Scan for runs of disagreement language
///
/// Same windowing as agreement; fixed importance of 0.75 since contested
/// stretches usually matter more than harmonious ones.
pub fn detect_disagreement_spikes(
    disagreement: &Regex,
    transcript: &str,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> Vec<Moment> {
    scan_windows(
        disagreement,
        transcript,
        timestamps,
        fallback,
        |count, start| {
            (
                MomentType::DisagreementSpike,
                0.75,
                MomentMetadata::DisagreementSpike {
                    disagreement_count: count,
                    start_index: start,
                },
            )
        },
    )
}

fn scan_windows(
    pattern: &Regex,
    transcript: &str,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
    build: impl Fn(usize, usize) -> (MomentType, f64, MomentMetadata),
) -> Vec<Moment> {
    let mut moments = Vec::new();

    let sentences = split_sentences(transcript);
    if sentences.len() < WINDOW_SIZE {
        return moments;
    }

    let mut char_offset = 0usize;

    for start in 0..=sentences.len() - WINDOW_SIZE {
        let window = &sentences[start..start + WINDOW_SIZE];
        let count = window.iter().filter(|s| pattern.is_match(s)).count();

        if count >= MIN_MATCHES {
            let (moment_type, importance_score, metadata) = build(count, start);
            let timestamp = estimate_timestamp(char_offset, transcript.len(), timestamps, fallback);

            moments.push(Moment {
                moment_type,
                timestamp,
                importance_score,
                text_snippet: truncate_snippet(window.join(" ").trim()),
                metadata,
            });
        }

        char_offset += sentences[start].len() + 1;
    }

    moments
}
