use crate::models::Sentiment;

/// Words counted towards a positive label
///
/// The intensifiers from "definitely" on appear twice and so score two hits.
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "positive", "benefit",
    "advantage", "support", "agree", "yes", "right", "correct", "true", "clear", "obvious",
    "evidence", "proven", "success", "win", "victory", "hope", "future", "progress", "improve",
    "better", "best", "love", "like", "enjoy", "happy", "pleased", "satisfied", "confident",
    "sure", "certain", "definitely", "absolutely", "completely", "totally", "fully", "strongly",
    "firmly", "clearly", "obviously", "undoubtedly", "indeed", "certainly", "surely",
    "definitely", "absolutely", "completely", "totally", "fully", "strongly", "firmly", "clearly",
    "obviously", "undoubtedly", "indeed", "certainly", "surely",
];

/// Words counted towards a negative label
///
/// "worst" and the despair words from "confused" on appear twice.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disgusting", "negative", "problem", "issue",
    "concern", "worry", "fear", "danger", "risk", "threat", "harm", "damage", "destruction",
    "disaster", "crisis", "emergency", "urgent", "critical", "serious", "severe", "extreme",
    "worst", "worst", "hate", "dislike", "angry", "frustrated", "disappointed", "sad", "depressed",
    "worried", "anxious", "nervous", "scared", "afraid", "concerned", "troubled", "bothered",
    "upset", "annoyed", "irritated", "furious", "outraged", "disgusted", "shocked", "surprised",
    "confused", "lost", "helpless", "hopeless", "desperate", "despair", "gloom", "doom",
    "pessimistic", "cynical", "skeptical", "doubtful", "uncertain", "unsure", "confused", "lost",
    "helpless", "hopeless", "desperate", "despair", "gloom", "doom", "pessimistic", "cynical",
    "skeptical", "doubtful", "uncertain", "unsure",
];

/// Keyword hit counts for one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordScore {
    pub positive_hits: usize,
    pub negative_hits: usize,
}

impl KeywordScore {
    /// Strictly more hits wins; any tie is neutral
    pub fn sentiment(&self) -> Sentiment {
        use std::cmp::Ordering;
        match self.positive_hits.cmp(&self.negative_hits) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Count how many list entries occur as substrings of the lower-cased text
///
/// Matching is by substring, not by word, so "unsure" also hits "sure".
pub fn score_keywords<S: AsRef<str>>(text: &str, positive: &[S], negative: &[S]) -> KeywordScore {
    let lowered = text.to_lowercase();
    let hits = |words: &[S]| {
        words
            .iter()
            .filter(|w| {
                let word: &str = (*w).as_ref();
                lowered.contains(word)
            })
            .count()
    };
    KeywordScore {
        positive_hits: hits(positive),
        negative_hits: hits(negative),
    }
}

/// Label text with the built-in keyword lists
pub fn keyword_sentiment(text: &str) -> Sentiment {
    score_keywords(text, POSITIVE_WORDS, NEGATIVE_WORDS).sentiment()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        assert_eq!(keyword_sentiment("this is great and wonderful"), Sentiment::Positive);
    }

    #[test]
    fn test_negative_text() {
        assert_eq!(keyword_sentiment("this is terrible and awful"), Sentiment::Negative);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(keyword_sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        let score = score_keywords("good but bad", POSITIVE_WORDS, NEGATIVE_WORDS);
        assert_eq!(score.positive_hits, 1);
        assert_eq!(score.negative_hits, 1);
        assert_eq!(score.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(keyword_sentiment("GREAT"), Sentiment::Positive);
        assert_eq!(keyword_sentiment("Awful"), Sentiment::Negative);
    }

    #[test]
    fn test_substring_matching() {
        // "unsure" contains "sure"; "unsure" itself is listed twice
        let score = score_keywords("I am unsure", POSITIVE_WORDS, NEGATIVE_WORDS);
        assert_eq!(score.positive_hits, 1);
        assert_eq!(score.negative_hits, 2);
    }

    #[test]
    fn test_deterministic() {
        let text = "The evidence is clear but the risk is serious";
        let first = keyword_sentiment(text);
        for _ in 0..5 {
            assert_eq!(keyword_sentiment(text), first);
        }
    }

    #[test]
    fn test_repeated_words_count_twice() {
        let text = "We are definitely facing a crisis";
        let score = score_keywords(text, POSITIVE_WORDS, NEGATIVE_WORDS);
        assert_eq!(score.positive_hits, 2);
        assert_eq!(score.negative_hits, 1);
        assert_eq!(keyword_sentiment(text), Sentiment::Positive);

        let score = score_keywords("the worst outcome", POSITIVE_WORDS, NEGATIVE_WORDS);
        assert_eq!(score.negative_hits, 2);
    }

    #[test]
    fn test_list_lengths() {
        assert_eq!(POSITIVE_WORDS.len(), 63);
        assert_eq!(NEGATIVE_WORDS.len(), 78);
    }
}
