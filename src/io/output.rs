use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::InputOrigin;
use crate::models::{Poll, Sentiment, TranscriptFilter, format_countdown, speakers};
use crate::pipeline::{Analysis, SummaryOutcome};
use crate::stages::AnalysisMode;

/// Machine-readable result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub origin: InputOrigin,
    pub mode: AnalysisMode,
    /// Notices the user must see (e.g. media substituted by the sample)
    pub notices: Vec<String>,
    #[serde(flatten)]
    pub analysis: Analysis,
    pub summary: SummaryOutcome,
    pub poll: Poll,
}

impl AnalysisReport {
    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Plain-text dashboard: quick stats, transcript, timeline, speakers, summary, poll
pub struct DashboardText<'a> {
    report: &'a AnalysisReport,
    filter: &'a TranscriptFilter,
    now: DateTime<Utc>,
}

impl<'a> DashboardText<'a> {
    pub fn new(report: &'a AnalysisReport, filter: &'a TranscriptFilter, now: DateTime<Utc>) -> Self {
        Self { report, filter, now }
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        for notice in &self.report.notices {
            output.push_str(&format!("NOTICE: {}\n", notice));
        }
        if !self.report.notices.is_empty() {
            output.push('\n');
        }

        self.format_stats(&mut output);
        self.format_transcript(&mut output);
        self.format_timeline(&mut output);
        self.format_speakers(&mut output);
        self.format_summary(&mut output);
        output.push_str(&format_poll(&self.report.poll, self.now));

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }

    fn format_stats(&self, output: &mut String) {
        let counts = &self.report.analysis.counts;
        push_heading(output, "Dashboard");
        output.push_str(&format!("Total statements: {}\n", counts.total()));
        for sentiment in Sentiment::ALL {
            output.push_str(&format!("{}: {}\n", sentiment.title(), counts.get(sentiment)));
        }
        if self.report.analysis.labeling.defaulted > 0 {
            output.push_str(&format!(
                "({} statements defaulted to neutral: classifier unavailable)\n",
                self.report.analysis.labeling.defaulted
            ));
        }
        output.push('\n');
    }

    fn format_transcript(&self, output: &mut String) {
        push_heading(output, "Transcript");
        let entries = self.filter.apply(&self.report.analysis.utterances);
        if entries.is_empty() {
            output.push_str("No statements match the current filter.\n");
            let names = speakers(&self.report.analysis.utterances);
            if !names.is_empty() {
                output.push_str(&format!("Speakers: {}\n", names.join(", ")));
            }
            output.push('\n');
            return;
        }
        for utterance in entries {
            let line = format!(
                "[{}] {}: {} ({})",
                utterance.timestamp, utterance.speaker, utterance.text, utterance.sentiment
            );
            output.push_str(&wrap_text(&line, 80));
            output.push('\n');
        }
        output.push('\n');
    }

    fn format_timeline(&self, output: &mut String) {
        push_heading(output, "Sentiment Timeline");
        output.push_str(&format!("{:<7}{:>10}{:>10}{:>10}\n", "Time", "Positive", "Negative", "Neutral"));
        for bucket in &self.report.analysis.timeline {
            output.push_str(&format!(
                "{:<7}{:>9}%{:>9}%{:>9}%\n",
                bucket.time, bucket.positive, bucket.negative, bucket.neutral
            ));
        }
        output.push('\n');
    }

    fn format_speakers(&self, output: &mut String) {
        push_heading(output, "Speaker Analysis");
        for stats in &self.report.analysis.speakers {
            output.push_str(&format!(
                "{}: {} statements, {} words, dominant sentiment {}\n",
                stats.speaker,
                stats.statements,
                stats.words,
                stats.dominant_sentiment().title()
            ));
        }
        output.push('\n');
    }

    fn format_summary(&self, output: &mut String) {
        match &self.report.summary {
            SummaryOutcome::Generated(text) => {
                push_heading(output, "Executive Summary");
                output.push_str(text);
                output.push_str("\n\n");
            }
            SummaryOutcome::Failed(message) => {
                push_heading(output, "Executive Summary");
                output.push_str(&format!("Summary unavailable: {}\n\n", message));
            }
            SummaryOutcome::Skipped => {}
        }
    }
}

/// Render the voting panel
pub fn format_poll(poll: &Poll, now: DateTime<Utc>) -> String {
    let mut output = String::new();
    push_heading(&mut output, "Live Voting");
    output.push_str(&format!("{}\n", poll.question));

    for option in &poll.options {
        let percentage = poll.percentage(option);
        output.push_str(&format!(
            "  [{}] {:<36} {:>6} votes {:>4}% {}\n",
            option.id,
            option.label,
            option.votes,
            percentage,
            progress_bar(percentage, 20)
        ));
    }

    output.push_str(&format!("Total votes: {}\n", poll.total_votes()));
    if let Some(leader) = poll.leading_option() {
        output.push_str(&format!("Leading option: {}\n", leader.label));
    }
    output.push_str(&format!("Vote margin: {}%\n", poll.margin()));

    if poll.has_voted {
        output.push_str("Your vote has been recorded.\n");
    } else if poll.is_open(now) {
        output.push_str(&format!("Voting closes in {}\n", format_countdown(poll.time_remaining(now))));
    } else {
        output.push_str("Voting is closed.\n");
    }

    output
}

fn push_heading(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"=".repeat(title.len()));
    output.push('\n');
}

fn progress_bar(percentage: u32, width: usize) -> String {
    let filled = (percentage.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Wrap text at approximately the given width, measured in characters
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            result.push_str("\n    ");
            line_len = 4;
        } else if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }

    result
}
