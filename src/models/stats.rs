use serde::Serialize;

use super::{Sentiment, Utterance};

/// Number of utterances carrying each sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn from_utterances<'a>(utterances: impl IntoIterator<Item = &'a Utterance>) -> Self {
        let mut counts = Self::default();
        for utterance in utterances {
            counts.add(utterance.sentiment);
        }
        counts
    }

    pub fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of `sentiment` in percent, 0.0 for an empty set
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(sentiment) as f64 / total as f64 * 100.0
    }

    /// Label with the highest count; ties go to positive, then negative
    pub fn dominant(&self) -> Sentiment {
        let max = self.positive.max(self.negative).max(self.neutral);
        if max == self.positive {
            Sentiment::Positive
        } else if max == self.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Per-speaker figures shown in the speaker analysis panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerStats {
    pub speaker: String,
    pub statements: usize,
    pub words: usize,
    pub sentiments: SentimentCounts,
}

impl SpeakerStats {
    pub fn dominant_sentiment(&self) -> Sentiment {
        self.sentiments.dominant()
    }
}

/// Build speaker statistics in first-seen speaker order
pub fn speaker_stats(utterances: &[Utterance]) -> Vec<SpeakerStats> {
    let mut stats: Vec<SpeakerStats> = Vec::new();

    for utterance in utterances {
        let index = match stats.iter().position(|s| s.speaker == utterance.speaker) {
            Some(index) => index,
            None => {
                stats.push(SpeakerStats {
                    speaker: utterance.speaker.clone(),
                    statements: 0,
                    words: 0,
                    sentiments: SentimentCounts::default(),
                });
                stats.len() - 1
            }
        };

        let entry = &mut stats[index];
        entry.statements += 1;
        entry.words += utterance.word_count();
        entry.sentiments.add(utterance.sentiment);
    }

    stats
}
