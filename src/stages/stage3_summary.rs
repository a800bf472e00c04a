use anyhow::{Context, Result};
use tracing::info;

use super::AnalysisMode;
use crate::inference::{ModelRegistry, SummaryParams};
use crate::models::{Sentiment, SentimentCounts, Utterance};

/// Returned by the extractive summary when there is nothing to summarize
pub const NO_DATA_MESSAGE: &str = "No transcript data available for summary generation.";

/// Statements quoted per speaker in the extractive summary
pub const STATEMENTS_PER_SPEAKER: usize = 3;

/// Configuration for summary generation
#[derive(Debug, Clone, Default)]
pub struct SummaryConfig {
    /// Decoding parameters for the external summarizer
    pub params: SummaryParams,
}

/// Produce the executive summary
///
/// External mode sends the whole transcript to the summarizer and returns its
/// text verbatim; failures are returned to the caller. Heuristic mode builds
/// the extractive summary locally.
pub async fn summarize(
    utterances: &[Utterance],
    mode: AnalysisMode,
    config: &SummaryConfig,
    models: &ModelRegistry,
) -> Result<String> {
    match mode {
        AnalysisMode::Heuristic => Ok(local_summary(utterances)),
        AnalysisMode::External => {
            let document = join_statements(utterances);
            info!("Requesting abstractive summary of {} characters", document.len());

            let summarizer = models
                .summarizer()
                .await
                .context("Failed to load summarization model")?;
            let summary = summarizer
                .summarize(&document, &config.params)
                .await
                .context("Summarization request failed")?;
            Ok(summary)
        }
    }
}

/// All utterance texts joined by single spaces
pub fn join_statements(utterances: &[Utterance]) -> String {
    utterances
        .iter()
        .map(|u| u.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extractive summary: first statements per speaker plus a sentiment breakdown
pub fn local_summary(utterances: &[Utterance]) -> String {
    if utterances.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let mut by_speaker: Vec<(&str, Vec<&str>)> = Vec::new();
    for utterance in utterances {
        match by_speaker.iter_mut().find(|(speaker, _)| *speaker == utterance.speaker) {
            Some((_, statements)) => statements.push(utterance.text.as_str()),
            None => by_speaker.push((utterance.speaker.as_str(), vec![utterance.text.as_str()])),
        }
    }

    let mut lines = vec!["**Debate Summary:**".to_string(), String::new()];

    for (speaker, statements) in &by_speaker {
        lines.push(format!("**{}:**", speaker));
        for (i, statement) in statements.iter().take(STATEMENTS_PER_SPEAKER).enumerate() {
            lines.push(format!("{}. {}", i + 1, statement));
        }
        lines.push(String::new());
    }

    let counts = SentimentCounts::from_utterances(utterances);
    lines.push("**Sentiment Analysis:**".to_string());
    for sentiment in Sentiment::ALL {
        lines.push(format!(
            "- {} statements: {} ({:.1}%)",
            sentiment.title(),
            counts.get(sentiment),
            counts.percentage(sentiment)
        ));
    }

    lines.join("\n")
}
