pub mod error;
pub mod heuristics;
pub mod inference;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;

pub use error::{InferenceError, InputError, VoteError};
pub use heuristics::{HeuristicsConfig, apply_heuristics};
pub use inference::{InferenceConfig, ModelRegistry, SentimentClassifier, Summarizer};
pub use io::{AnalysisReport, DashboardText, InputRequest, ResolvedInput, resolve_input};
pub use models::{Poll, Sentiment, TimelineBucket, TranscriptFilter, Utterance};
pub use pipeline::{Analysis, AnalysisOptions, SummaryOutcome, analyze, analyze_text, summarize_analysis};
pub use stages::{
    AnalysisMode, LabelOutcome, aggregate_timeline, label_transcript, label_utterance, local_summary,
    parse_transcript, summarize,
};
