use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of a moment's text snippet, in characters
pub const MAX_SNIPPET_CHARS: usize = 200;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence boundary pattern should compile"));

/// Split a transcript into sentence pieces on runs of `.`, `!`, `?`
///
/// Pieces are returned raw: untrimmed, and empty pieces (including the one
/// after a trailing terminator) are kept so window start indices and the
/// running character offset stay aligned with the source text.
pub fn split_sentences(transcript: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY.split(transcript).collect()
}

/// Estimate the timestamp for a character offset into the transcript
///
/// Maps the fractional position `offset / total_len` onto the available
/// timestamp sequence: `idx = floor(progress * n)` clamped to `[0, n-1]`.
/// This is a deliberate approximation; there is no true per-sentence
/// alignment. When no timestamps are available the injected fallback instant
/// is used.
pub fn estimate_timestamp(
    offset: usize,
    total_len: usize,
    timestamps: &[DateTime<Utc>],
    fallback: DateTime<Utc>,
) -> DateTime<Utc> {
    if timestamps.is_empty() {
        return fallback;
    }
    let progress = if total_len > 0 {
        offset as f64 / total_len as f64
    } else {
        0.0
    };
    let idx = ((progress * timestamps.len() as f64) as usize).min(timestamps.len() - 1);
    timestamps[idx]
}

/// Hard-truncate text to the snippet limit
///
/// Character-based, not word-boundary aware.
pub fn truncate_snippet(text: &str) -> String {
    text.chars().take(MAX_SNIPPET_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, minute, 0).unwrap()
    }

    #[test]
    fn test_split_keeps_trailing_empty_piece() {
        let sentences = split_sentences("What is the plan? How do we proceed?");
        assert_eq!(sentences, vec!["What is the plan", " How do we proceed", ""]);
    }

    #[test]
    fn test_split_collapses_terminator_runs() {
        let sentences = split_sentences("Really?! Yes... done.");
        assert_eq!(sentences, vec!["Really", " Yes", " done", ""]);
    }

    #[test]
    fn test_split_empty_transcript() {
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_estimate_timestamp_maps_proportionally() {
        let timestamps = vec![ts(0), ts(5), ts(10), ts(15)];
        assert_eq!(estimate_timestamp(0, 100, &timestamps, ts(59)), ts(0));
        assert_eq!(estimate_timestamp(50, 100, &timestamps, ts(59)), ts(10));
        assert_eq!(estimate_timestamp(99, 100, &timestamps, ts(59)), ts(15));
    }

    #[test]
    fn test_estimate_timestamp_clamps_past_end() {
        let timestamps = vec![ts(0), ts(5)];
        assert_eq!(estimate_timestamp(200, 100, &timestamps, ts(59)), ts(5));
    }

    #[test]
    fn test_estimate_timestamp_falls_back_when_empty() {
        assert_eq!(estimate_timestamp(10, 100, &[], ts(42)), ts(42));
    }

    #[test]
    fn test_estimate_timestamp_zero_length_transcript() {
        let timestamps = vec![ts(0), ts(5)];
        assert_eq!(estimate_timestamp(0, 0, &timestamps, ts(59)), ts(0));
    }

    #[test]
    fn test_truncate_snippet_bound() {
        let long = "x".repeat(500);
        assert_eq!(truncate_snippet(&long).chars().count(), MAX_SNIPPET_CHARS);
        assert_eq!(truncate_snippet("short"), "short");
    }
}
