use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Moment;

/// Machine-readable timeline output
///
/// Wraps the ranked moments with the derived views callers usually want: a
/// total count and a per-type histogram. These are computed here at the
/// output boundary, not by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineReport {
    /// When this report was produced
    pub generated_at: DateTime<Utc>,
    /// Total number of detected moments
    pub total_moments: usize,
    /// Moment count per type label
    pub moment_type_counts: BTreeMap<String, usize>,
    /// Ranked moments, earliest first
    pub moments: Vec<Moment>,
}

impl TimelineReport {
    /// Build a report from ranked moments
    pub fn from_moments(moments: Vec<Moment>, generated_at: DateTime<Utc>) -> Self {
        let mut moment_type_counts: BTreeMap<String, usize> = BTreeMap::new();
        for moment in &moments {
            *moment_type_counts
                .entry(moment.moment_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        Self {
            generated_at,
            total_moments: moments.len(),
            moment_type_counts,
            moments,
        }
    }

    /// Write the report to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable timeline format
pub struct HumanTimeline<'a> {
    moments: &'a [Moment],
}

impl<'a> HumanTimeline<'a> {
    pub fn new(moments: &'a [Moment]) -> Self {
        Self { moments }
    }

    /// Format the timeline as readable text, one moment per block
    pub fn format(&self) -> String {
        let mut output = String::new();

        for moment in self.moments {
            output.push_str(&format!(
                "[{}] {} (score {:.2})\n",
                moment.timestamp.format("%Y-%m-%d %H:%M:%S"),
                moment.moment_type,
                moment.importance_score
            ));
            if !moment.text_snippet.is_empty() {
                output.push_str("    ");
                output.push_str(&moment.text_snippet);
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}
