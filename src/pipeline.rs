use serde::Serialize;
use tracing::{info, warn};

use crate::heuristics::HeuristicsConfig;
use crate::inference::ModelRegistry;
use crate::models::{SentimentCounts, SpeakerStats, TimelineBucket, Utterance, speaker_stats};
use crate::stages::{
    AnalysisMode, LabelingStats, SummaryConfig, aggregate_timeline, label_transcript,
    parse_transcript, summarize,
};

/// Per-run settings threaded through every stage
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub mode: AnalysisMode,
    /// Skip the summary stage entirely when false
    pub generate_summary: bool,
    pub heuristics: HeuristicsConfig,
    pub summary: SummaryConfig,
}

impl AnalysisOptions {
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            mode,
            generate_summary: true,
            ..Default::default()
        }
    }
}

/// Labeled transcript plus everything derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub utterances: Vec<Utterance>,
    pub labeling: LabelingStats,
    pub timeline: Vec<TimelineBucket>,
    pub counts: SentimentCounts,
    pub speakers: Vec<SpeakerStats>,
}

/// Result of the summary stage as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Generated(String),
    /// The summarizer failed; the message is shown instead of a summary
    Failed(String),
    Skipped,
}

/// Label parsed utterances and derive the timeline and statistics
pub async fn analyze(
    mut utterances: Vec<Utterance>,
    options: &AnalysisOptions,
    models: &ModelRegistry,
) -> Analysis {
    info!("Analyzing {} utterances", utterances.len());

    let labeling = label_transcript(&mut utterances, options.mode, &options.heuristics, models).await;
    let timeline = aggregate_timeline(&utterances);
    let counts = SentimentCounts::from_utterances(&utterances);
    let speakers = speaker_stats(&utterances);

    Analysis {
        utterances,
        labeling,
        timeline,
        counts,
        speakers,
    }
}

/// Parse raw text and run the full analysis on it
pub async fn analyze_text(raw: &str, options: &AnalysisOptions, models: &ModelRegistry) -> Analysis {
    analyze(parse_transcript(raw), options, models).await
}

/// Run the summary stage without letting a summarizer failure end the run
pub async fn summarize_analysis(
    analysis: &Analysis,
    options: &AnalysisOptions,
    models: &ModelRegistry,
) -> SummaryOutcome {
    if !options.generate_summary {
        return SummaryOutcome::Skipped;
    }

    match summarize(&analysis.utterances, options.mode, &options.summary, models).await {
        Ok(text) => SummaryOutcome::Generated(text),
        Err(e) => {
            warn!("Summary generation failed: {:#}", e);
            SummaryOutcome::Failed(format!("{:#}", e))
        }
    }
}
