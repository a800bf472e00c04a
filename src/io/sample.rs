/// Built-in climate debate used for fast mode and unsupported media uploads
pub const SAMPLE_TRANSCRIPT: &str = "\
[00:15] Dr. Sarah Chen: The scientific consensus is clear: we have less than a decade to prevent catastrophic climate change. The data from the IPCC shows unprecedented warming trends.
[01:23] Prof. Michael Rodriguez: While I acknowledge the climate data, we must consider the economic implications. Immediate action could devastate developing economies and cost millions of jobs.
[02:45] Dr. Sarah Chen: The economic cost of inaction far exceeds the cost of action. Studies show that climate adaptation will create new industries and millions of green jobs.
[04:12] Prof. Michael Rodriguez: That's a theoretical argument. In practice, we've seen how carbon taxes have increased energy costs for working families. We need a more balanced approach.
[05:30] Dr. Sarah Chen: The evidence is overwhelming. We're already seeing the economic costs of climate change through extreme weather events, crop failures, and infrastructure damage.
[06:45] Prof. Michael Rodriguez: I agree we need action, but it must be gradual and economically sustainable. A sudden transition would cause more harm than good.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::parse_transcript;

    #[test]
    fn test_sample_parses_completely() {
        let utterances = parse_transcript(SAMPLE_TRANSCRIPT);
        assert_eq!(utterances.len(), 6);
        assert_eq!(utterances[0].speaker, "Dr. Sarah Chen");
        assert_eq!(utterances[5].timestamp, "06:45");
        // Colons inside the text survive
        assert!(utterances[0].text.starts_with("The scientific consensus is clear: we have"));
    }
}
