use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::models::Utterance;

/// `[MM:SS] Speaker: Text`
fn timestamped_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\[(\d{1,2}:\d{2})\]\s*([^:]+):\s*(.+)").expect("timestamped line pattern is valid")
    })
}

/// `Speaker: Text`
fn speaker_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([^:]+):\s*(.+)").expect("speaker line pattern is valid"))
}

/// Parse raw transcript text into utterances, in input order
///
/// Each non-blank line is tried against the timestamped grammar first and
/// the bare `Speaker: Text` grammar second. Lines matching neither are
/// dropped without error. Lines without a timestamp get `NN:00`, where `NN`
/// is the number of utterances produced before them.
pub fn parse_transcript(raw: &str) -> Vec<Utterance> {
    let mut utterances = Vec::new();
    let mut dropped = 0usize;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line, utterances.len()) {
            Some(utterance) => utterances.push(utterance),
            None => {
                debug!("Dropping unparseable line: {:?}", line);
                dropped += 1;
            }
        }
    }

    debug!("Parsed {} utterances, dropped {} lines", utterances.len(), dropped);
    utterances
}

/// Parse a single trimmed line; `index` is the position the record would take
pub fn parse_line(line: &str, index: usize) -> Option<Utterance> {
    if let Some(caps) = timestamped_line().captures(line) {
        return build(&caps[2], &caps[3], caps[1].to_string());
    }

    let caps = speaker_line().captures(line)?;
    build(&caps[1], &caps[2], synthesize_timestamp(index))
}

fn build(speaker: &str, text: &str, timestamp: String) -> Option<Utterance> {
    let speaker = speaker.trim();
    let text = text.trim();
    if speaker.is_empty() || text.is_empty() {
        return None;
    }
    Some(Utterance::new(speaker, text, timestamp))
}

/// Zero-padded record index followed by `:00`
pub fn synthesize_timestamp(index: usize) -> String {
    format!("{:02}:00", index)
}
