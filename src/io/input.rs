use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::AnalysisInput;

/// Failure to load an analysis payload
///
/// The only hard failures in the crate: a payload whose shape cannot be
/// iterated at all. Anything softer (missing fields, empty sequences)
/// deserializes to defaults and simply yields fewer moments.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read analysis file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid analysis payload")]
    Malformed(#[from] serde_json::Error),
}

/// Load an analysis payload from a JSON file
pub fn parse_analysis_file(path: &Path) -> Result<AnalysisInput, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_analysis_json(&content)
}

/// Parse an analysis payload from a JSON string
pub fn parse_analysis_json(json: &str) -> Result<AnalysisInput, InputError> {
    let input: AnalysisInput = serde_json::from_str(json)?;

    if !input.timestamps.is_empty() && input.timestamps.len() < input.emotion_timeline.len() {
        warn!(
            "timestamp sequence ({}) shorter than emotion timeline ({}); \
             uncovered entries will use the fallback instant",
            input.timestamps.len(),
            input.emotion_timeline.len()
        );
    }

    Ok(input)
}
