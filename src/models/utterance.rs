use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical sentiment assigned to an utterance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Capitalized form used in headings and metrics
    pub fn title(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One speaker's statement parsed from a transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// Display name of the speaker (never empty)
    pub speaker: String,
    /// Statement text (never empty)
    pub text: String,
    /// `MM:SS`, either from the transcript or synthesized from the record index
    pub timestamp: String,
    /// Neutral until the labeler runs
    #[serde(default)]
    pub sentiment: Sentiment,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: timestamp.into(),
            sentiment: Sentiment::Neutral,
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Search and speaker filter for the transcript view
#[derive(Debug, Clone, Default)]
pub struct TranscriptFilter {
    /// Case-insensitive keyword matched against the utterance text
    pub search: Option<String>,
    /// Exact speaker name
    pub speaker: Option<String>,
}

impl TranscriptFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty) && self.speaker.is_none()
    }

    pub fn matches(&self, utterance: &Utterance) -> bool {
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            if !utterance.text.to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }
        if let Some(speaker) = &self.speaker {
            if utterance.speaker != *speaker {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, utterances: &'a [Utterance]) -> Vec<&'a Utterance> {
        utterances.iter().filter(|u| self.matches(u)).collect()
    }
}

/// Distinct speakers in first-seen order
pub fn speakers(utterances: &[Utterance]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for utterance in utterances {
        if !seen.contains(&utterance.speaker.as_str()) {
            seen.push(&utterance.speaker);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Utterance> {
        vec![
            Utterance::new("Dr. Chen", "The evidence is overwhelming", "00:15"),
            Utterance::new("Prof. Rodriguez", "Carbon taxes raise energy costs", "01:23"),
            Utterance::new("Dr. Chen", "Green jobs will follow", "02:45"),
        ]
    }

    #[test]
    fn test_new_utterance_is_neutral() {
        let u = Utterance::new("A", "hello there", "00:00");
        assert_eq!(u.sentiment, Sentiment::Neutral);
        assert_eq!(u.word_count(), 2);
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let utterances = sample();
        let filter = TranscriptFilter {
            search: Some("EVIDENCE".to_string()),
            speaker: None,
        };
        let hits = filter.apply(&utterances);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].timestamp, "00:15");
    }

    #[test]
    fn test_filter_by_speaker_and_search() {
        let utterances = sample();
        let filter = TranscriptFilter {
            search: Some("jobs".to_string()),
            speaker: Some("Dr. Chen".to_string()),
        };
        assert_eq!(filter.apply(&utterances).len(), 1);

        let filter = TranscriptFilter {
            search: None,
            speaker: Some("Prof. Rodriguez".to_string()),
        };
        assert_eq!(filter.apply(&utterances).len(), 1);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let utterances = sample();
        let filter = TranscriptFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&utterances).len(), 3);
    }

    #[test]
    fn test_speakers_first_seen_order() {
        assert_eq!(speakers(&sample()), vec!["Dr. Chen", "Prof. Rodriguez"]);
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
