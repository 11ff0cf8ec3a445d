pub mod detectors;
pub mod io;
pub mod models;
pub mod text;

pub use detectors::{rank_moments, MomentDetector, PatternLibrary};
pub use io::{parse_analysis_file, parse_analysis_json, HumanTimeline, InputError, TimelineReport};
pub use models::{
    AnalysisInput, EmotionEntry, EmotionScore, Moment, MomentMetadata, MomentType, TopicEntry,
    TopicScore, Urgency,
};
pub use text::{estimate_timestamp, split_sentences, truncate_snippet, MAX_SNIPPET_CHARS};
