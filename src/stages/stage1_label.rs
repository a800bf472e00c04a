use serde::Serialize;
use tracing::{info, warn};

use crate::heuristics::{HeuristicsConfig, apply_heuristics};
use crate::inference::ModelRegistry;
use crate::models::{Sentiment, Utterance};

/// Which labeler branch runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// Hosted classifier and summarizer
    #[default]
    External,
    /// Keyword heuristic and extractive summary, no network
    Heuristic,
}

/// Outcome of labeling a single utterance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The selected strategy produced a label
    Labeled(Sentiment),
    /// The classifier could not be used; the utterance stays neutral
    Defaulted { reason: String },
}

impl LabelOutcome {
    pub fn sentiment(&self) -> Sentiment {
        match self {
            LabelOutcome::Labeled(sentiment) => *sentiment,
            LabelOutcome::Defaulted { .. } => Sentiment::Neutral,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, LabelOutcome::Defaulted { .. })
    }
}

/// Totals for one labeling pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelingStats {
    pub labeled: usize,
    pub defaulted: usize,
}

/// Label one piece of text
///
/// Classifier failures never escape: they come back as
/// [`LabelOutcome::Defaulted`].
pub async fn label_utterance(
    text: &str,
    mode: AnalysisMode,
    heuristics: &HeuristicsConfig,
    models: &ModelRegistry,
) -> LabelOutcome {
    match mode {
        AnalysisMode::Heuristic => LabelOutcome::Labeled(apply_heuristics(text, heuristics)),
        AnalysisMode::External => {
            let classifier = match models.classifier().await {
                Ok(classifier) => classifier,
                Err(e) => {
                    warn!("Sentiment classifier unavailable: {}", e);
                    return LabelOutcome::Defaulted { reason: e.to_string() };
                }
            };

            match classifier.classify(text).await {
                Ok(output) => LabelOutcome::Labeled(output.sentiment()),
                Err(e) => {
                    warn!("Sentiment classification failed: {}", e);
                    LabelOutcome::Defaulted { reason: e.to_string() }
                }
            }
        }
    }
}

/// Label every utterance in place, one at a time, in transcript order
pub async fn label_transcript(
    utterances: &mut [Utterance],
    mode: AnalysisMode,
    heuristics: &HeuristicsConfig,
    models: &ModelRegistry,
) -> LabelingStats {
    let mut stats = LabelingStats::default();

    for utterance in utterances.iter_mut() {
        let outcome = label_utterance(&utterance.text, mode, heuristics, models).await;
        if outcome.is_defaulted() {
            stats.defaulted += 1;
        } else {
            stats.labeled += 1;
        }
        utterance.sentiment = outcome.sentiment();
    }

    info!(
        "Labeled {} utterances ({:?} mode), {} defaulted to neutral",
        stats.labeled + stats.defaulted,
        mode,
        stats.defaulted
    );
    stats
}
