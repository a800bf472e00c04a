use tracing::debug;

use crate::models::{SentimentCounts, TimelineBucket, Utterance, WINDOW_LABELS};

/// Build the sentiment timeline
///
/// Windows are positional: the i-th of the ten labels covers the first
/// `ceil(n * i / 10)` utterances, so every bucket is a growing prefix of the
/// conversation. Timestamps on the utterances are not consulted. Windows with
/// an empty prefix are left out.
pub fn aggregate_timeline(utterances: &[Utterance]) -> Vec<TimelineBucket> {
    let window_count = WINDOW_LABELS.len();
    let mut buckets = Vec::with_capacity(window_count);

    for (index, label) in WINDOW_LABELS.iter().enumerate() {
        let prefix_len = prefix_len(utterances.len(), index + 1, window_count);
        if prefix_len == 0 {
            continue;
        }

        let counts = SentimentCounts::from_utterances(&utterances[..prefix_len]);
        let total = counts.total();
        buckets.push(TimelineBucket {
            time: label.to_string(),
            positive: rounded_percentage(counts.positive, total),
            negative: rounded_percentage(counts.negative, total),
            neutral: rounded_percentage(counts.neutral, total),
        });
    }

    debug!("Built {} timeline buckets from {} utterances", buckets.len(), utterances.len());
    buckets
}

/// Number of indices `k` with `k < total * window / window_count`
fn prefix_len(total: usize, window: usize, window_count: usize) -> usize {
    (total * window).div_ceil(window_count)
}

/// Whole percentage with ties rounded to even
fn rounded_percentage(count: usize, total: usize) -> u32 {
    (count as f64 / total as f64 * 100.0).round_ties_even() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn labeled(sentiments: &[Sentiment]) -> Vec<Utterance> {
        sentiments
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut u = Utterance::new("A", "text", format!("{:02}:00", i));
                u.sentiment = *s;
                u
            })
            .collect()
    }

    #[test]
    fn test_empty_transcript_has_no_buckets() {
        assert!(aggregate_timeline(&[]).is_empty());
    }

    #[test]
    fn test_prefix_lengths() {
        assert_eq!(prefix_len(10, 1, 10), 1);
        assert_eq!(prefix_len(10, 10, 10), 10);
        assert_eq!(prefix_len(3, 1, 10), 1);
        assert_eq!(prefix_len(3, 4, 10), 2);
        assert_eq!(prefix_len(3, 7, 10), 3);
        assert_eq!(prefix_len(0, 5, 10), 0);
    }

    #[test]
    fn test_single_utterance_fills_every_window() {
        let buckets = aggregate_timeline(&labeled(&[Sentiment::Positive]));
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].time, "00:00");
        assert_eq!(buckets[9].time, "45:00");
        for bucket in &buckets {
            assert_eq!((bucket.positive, bucket.negative, bucket.neutral), (100, 0, 0));
        }
    }

    #[test]
    fn test_growing_prefix_percentages() {
        use Sentiment::*;
        // Ten utterances: window i sees exactly the first i of them
        let utterances = labeled(&[
            Positive, Negative, Positive, Positive, Neutral, Negative, Positive, Neutral, Negative, Positive,
        ]);
        let buckets = aggregate_timeline(&utterances);

        assert_eq!(buckets.len(), 10);
        assert_eq!((buckets[0].positive, buckets[0].negative, buckets[0].neutral), (100, 0, 0));
        assert_eq!((buckets[1].positive, buckets[1].negative, buckets[1].neutral), (50, 50, 0));
        assert_eq!((buckets[3].positive, buckets[3].negative, buckets[3].neutral), (75, 25, 0));
        assert_eq!((buckets[9].positive, buckets[9].negative, buckets[9].neutral), (50, 30, 20));
    }

    #[test]
    fn test_half_percentages_round_to_even() {
        use Sentiment::*;
        // 8 utterances, full prefix: 1/8 = 12.5% -> 12, 3/8 = 37.5% -> 38, 4/8 = 50%
        let utterances = labeled(&[Positive, Negative, Negative, Negative, Neutral, Neutral, Neutral, Neutral]);
        let last = aggregate_timeline(&utterances).pop().unwrap();
        assert_eq!((last.positive, last.negative, last.neutral), (12, 38, 50));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        use Sentiment::*;
        let pattern = [Positive, Negative, Neutral, Positive, Positive, Negative, Neutral];
        for n in 1..=40 {
            let sentiments: Vec<Sentiment> = (0..n).map(|i| pattern[i % pattern.len()]).collect();
            for bucket in aggregate_timeline(&labeled(&sentiments)) {
                let sum = bucket.percentage_sum();
                assert!((99..=101).contains(&sum), "n={} bucket {} sums to {}", n, bucket.time, sum);
            }
        }
    }
}
