use serde::{Deserialize, Serialize};

/// Fixed five-minute window labels the timeline is reported against
pub const WINDOW_LABELS: [&str; 10] = [
    "00:00", "05:00", "10:00", "15:00", "20:00", "25:00", "30:00", "35:00", "40:00", "45:00",
];

/// Sentiment percentages for one timeline window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBucket {
    /// One of [`WINDOW_LABELS`]
    pub time: String,
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl TimelineBucket {
    /// Sum of the three percentages (100 up to rounding)
    pub fn percentage_sum(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}
