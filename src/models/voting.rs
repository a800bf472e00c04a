use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::VoteError;

/// Length of the voting window once a poll opens
pub const DEFAULT_VOTING_WINDOW_SECS: i64 = 300;

/// One answer in the audience poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollOption {
    pub id: u32,
    pub label: String,
    pub votes: u64,
}

/// Mock audience poll shown next to the analysis
#[derive(Debug, Clone, Serialize)]
pub struct Poll {
    pub question: String,
    pub options: Vec<PollOption>,
    pub opened_at: DateTime<Utc>,
    #[serde(skip)]
    pub duration: Duration,
    /// One vote per session
    pub has_voted: bool,
}

/// Confirmation handed back for an accepted vote
#[derive(Debug, Clone, Serialize)]
pub struct VoteReceipt {
    pub receipt_id: Uuid,
    pub option_id: u32,
    pub cast_at: DateTime<Utc>,
}

impl Poll {
    pub fn new(question: impl Into<String>, options: Vec<PollOption>, opened_at: DateTime<Utc>) -> Self {
        Self {
            question: question.into(),
            options,
            opened_at,
            duration: Duration::seconds(DEFAULT_VOTING_WINDOW_SECS),
            has_voted: false,
        }
    }

    /// The climate debate poll bundled with the sample transcript
    pub fn sample(opened_at: DateTime<Utc>) -> Self {
        Self::new(
            "Do you support immediate climate action despite economic costs?",
            vec![
                PollOption {
                    id: 1,
                    label: "Yes, climate action is urgent".to_string(),
                    votes: 1247,
                },
                PollOption {
                    id: 2,
                    label: "No, economic impact is too high".to_string(),
                    votes: 763,
                },
            ],
            opened_at,
        )
    }

    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Whole-number share of the vote, rounded half up
    pub fn percentage(&self, option: &PollOption) -> u32 {
        let total = self.total_votes();
        if total == 0 {
            return 0;
        }
        (option.votes as f64 / total as f64 * 100.0).round() as u32
    }

    /// Option with the most votes; on a tie the later option wins
    pub fn leading_option(&self) -> Option<&PollOption> {
        self.options
            .iter()
            .reduce(|prev, current| if prev.votes > current.votes { prev } else { current })
    }

    /// Percentage-point gap between the two strongest options
    pub fn margin(&self) -> u32 {
        let mut percentages: Vec<u32> = self.options.iter().map(|o| self.percentage(o)).collect();
        percentages.sort_unstable_by(|a, b| b.cmp(a));
        match percentages.as_slice() {
            [first, second, ..] => first - second,
            [only] => *only,
            [] => 0,
        }
    }

    pub fn closes_at(&self) -> DateTime<Utc> {
        self.opened_at + self.duration
    }

    pub fn time_remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.closes_at() - now).max(Duration::zero())
    }

    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        !self.has_voted && self.time_remaining(now) > Duration::zero()
    }

    pub fn cast_vote(&mut self, option_id: u32, now: DateTime<Utc>) -> Result<VoteReceipt, VoteError> {
        if self.has_voted {
            return Err(VoteError::AlreadyVoted);
        }
        if self.time_remaining(now) <= Duration::zero() {
            return Err(VoteError::Closed);
        }

        let option = self
            .options
            .iter_mut()
            .find(|o| o.id == option_id)
            .ok_or(VoteError::UnknownOption(option_id))?;
        option.votes += 1;
        self.has_voted = true;

        Ok(VoteReceipt {
            receipt_id: Uuid::new_v4(),
            option_id,
            cast_at: now,
        })
    }
}

/// Format a duration as `M:SS`
pub fn format_countdown(remaining: Duration) -> String {
    let seconds = remaining.num_seconds().max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-15T18:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_sample_poll_figures() {
        let poll = Poll::sample(opened());

        assert_eq!(poll.total_votes(), 2010);
        assert_eq!(poll.percentage(&poll.options[0]), 62);
        assert_eq!(poll.percentage(&poll.options[1]), 38);
        assert_eq!(poll.leading_option().unwrap().id, 1);
        assert_eq!(poll.margin(), 24);
    }

    #[test]
    fn test_cast_vote_once() {
        let mut poll = Poll::sample(opened());
        let now = opened() + Duration::seconds(30);

        let receipt = poll.cast_vote(2, now).unwrap();
        assert_eq!(receipt.option_id, 2);
        assert_eq!(poll.options[1].votes, 764);
        assert!(!poll.is_open(now));

        assert_eq!(poll.cast_vote(1, now).unwrap_err(), VoteError::AlreadyVoted);
    }

    #[test]
    fn test_vote_after_window_closes() {
        let mut poll = Poll::sample(opened());
        let late = opened() + Duration::seconds(DEFAULT_VOTING_WINDOW_SECS);

        assert!(!poll.is_open(late));
        assert_eq!(poll.cast_vote(1, late).unwrap_err(), VoteError::Closed);
        assert_eq!(poll.total_votes(), 2010);
    }

    #[test]
    fn test_unknown_option_leaves_poll_untouched() {
        let mut poll = Poll::sample(opened());
        assert_eq!(poll.cast_vote(9, opened()).unwrap_err(), VoteError::UnknownOption(9));
        assert!(!poll.has_voted);
    }

    #[test]
    fn test_tie_goes_to_later_option() {
        let poll = Poll::new(
            "Tie?",
            vec![
                PollOption { id: 1, label: "a".to_string(), votes: 5 },
                PollOption { id: 2, label: "b".to_string(), votes: 5 },
            ],
            opened(),
        );
        assert_eq!(poll.leading_option().unwrap().id, 2);
        assert_eq!(poll.margin(), 0);
    }

    #[test]
    fn test_empty_poll() {
        let poll = Poll::new("Nobody voted", vec![PollOption { id: 1, label: "a".to_string(), votes: 0 }], opened());
        assert_eq!(poll.percentage(&poll.options[0]), 0);
        assert_eq!(poll.total_votes(), 0);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(Duration::seconds(300)), "5:00");
        assert_eq!(format_countdown(Duration::seconds(61)), "1:01");
        assert_eq!(format_countdown(Duration::seconds(-4)), "0:00");
    }
}
