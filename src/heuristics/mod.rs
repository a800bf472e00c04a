pub mod keywords;

pub use keywords::*;

use crate::models::Sentiment;

/// Configuration for the local keyword labeler
#[derive(Debug, Clone)]
pub struct HeuristicsConfig {
    /// Substrings that count towards a positive label
    pub positive_words: Vec<String>,
    /// Substrings that count towards a negative label
    pub negative_words: Vec<String>,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            positive_words: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative_words: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Label text with the keyword heuristic
///
/// Fully deterministic and independent of any external service, so it is
/// what the pipeline falls back to in fast mode.
pub fn apply_heuristics(text: &str, config: &HeuristicsConfig) -> Sentiment {
    score_keywords(text, &config.positive_words, &config.negative_words).sentiment()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builtin_lists() {
        let config = HeuristicsConfig::default();
        for text in ["this is great", "a terrible idea", "we met on tuesday"] {
            assert_eq!(apply_heuristics(text, &config), keyword_sentiment(text));
        }
    }

    #[test]
    fn test_custom_word_lists() {
        let config = HeuristicsConfig {
            positive_words: vec!["aye".to_string()],
            negative_words: vec!["nay".to_string()],
        };
        assert_eq!(apply_heuristics("Aye to the motion", &config), Sentiment::Positive);
        assert_eq!(apply_heuristics("nay, nay", &config), Sentiment::Negative);
        assert_eq!(apply_heuristics("great", &config), Sentiment::Neutral);
    }
}
