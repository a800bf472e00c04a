use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while choosing and loading the transcript to analyse
#[derive(Error, Debug)]
pub enum InputError {
    #[error("please provide input: upload a file, enter a transcript, or use the sample")]
    MissingInput,

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {path:?} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("unsupported file {path:?}: not a text transcript")]
    Unsupported { path: PathBuf },

    #[error("no transcript lines matched `[MM:SS] Speaker: Text` or `Speaker: Text`")]
    NoUtterances,
}

/// Errors from the external classifier and summarizer endpoints
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("inference configuration error: {0}")]
    Config(String),

    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("inference API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("malformed inference response: {0}")]
    Malformed(String),
}

/// Errors from the mock voting panel
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VoteError {
    #[error("a vote has already been cast in this session")]
    AlreadyVoted,

    #[error("voting is closed")]
    Closed,

    #[error("unknown poll option: {0}")]
    UnknownOption(u32),
}
