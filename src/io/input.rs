use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use super::SAMPLE_TRANSCRIPT;
use crate::error::InputError;
use crate::models::Utterance;
use crate::stages::parse_transcript;

/// Upload size limit (500 MB)
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Shown whenever an audio or video file is swapped for the sample transcript
pub const MEDIA_NOTICE: &str =
    "Audio/video analysis is not implemented; showing the built-in sample transcript.";

const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "log"];
const MEDIA_EXTENSIONS: &[&str] = &[
    "mp3", "mp4", "wav", "m4a", "ogg", "webm", "mov", "flac", "avi", "mkv",
];

/// What the user supplied for one analysis run
#[derive(Debug, Clone, Default)]
pub struct InputRequest {
    /// Uploaded transcript, audio or video file
    pub file: Option<PathBuf>,
    /// Manually entered or pasted transcript
    pub text: Option<String>,
    /// Fast mode / explicit request for the bundled sample
    pub use_sample: bool,
}

/// Where the analysed transcript came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputOrigin {
    File,
    Manual,
    Sample,
}

/// Parsed transcript ready for labeling
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub utterances: Vec<Utterance>,
    pub origin: InputOrigin,
    /// User-visible notices raised while resolving the input
    pub notices: Vec<String>,
}

/// Kind of uploaded file, judged by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Media,
    Unknown,
}

pub fn classify_file(path: &Path) -> FileKind {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        None => FileKind::Text,
        Some(ext) if TEXT_EXTENSIONS.contains(&ext) => FileKind::Text,
        Some(ext) if MEDIA_EXTENSIONS.contains(&ext) => FileKind::Media,
        Some(_) => FileKind::Unknown,
    }
}

/// Pick the input for this run and parse it
///
/// Priority: sample (fast mode), then file, then manual text. With none of
/// those the caller gets [`InputError::MissingInput`].
pub fn resolve_input(request: &InputRequest) -> Result<ResolvedInput, InputError> {
    if request.use_sample {
        info!("Using the built-in sample transcript");
        return Ok(sample_input(Vec::new()));
    }

    if let Some(path) = &request.file {
        return resolve_file(path);
    }

    if let Some(text) = request.text.as_deref().filter(|t| !t.trim().is_empty()) {
        info!("Parsing manual transcript ({} bytes)", text.len());
        return parsed(text, InputOrigin::Manual);
    }

    Err(InputError::MissingInput)
}

fn resolve_file(path: &Path) -> Result<ResolvedInput, InputError> {
    let metadata = std::fs::metadata(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(InputError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let kind = classify_file(path);
    if kind == FileKind::Media {
        warn!("{:?} is audio/video; substituting the sample transcript", path);
        return Ok(sample_input(vec![MEDIA_NOTICE.to_string()]));
    }

    info!("Loading transcript from {:?}", path);
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| InputError::Unsupported {
        path: path.to_path_buf(),
    })?;

    parsed(&content, InputOrigin::File)
}

fn parsed(text: &str, origin: InputOrigin) -> Result<ResolvedInput, InputError> {
    let utterances = parse_transcript(text);
    if utterances.is_empty() {
        return Err(InputError::NoUtterances);
    }
    Ok(ResolvedInput {
        utterances,
        origin,
        notices: Vec::new(),
    })
}

fn sample_input(notices: Vec<String>) -> ResolvedInput {
    ResolvedInput {
        utterances: parse_transcript(SAMPLE_TRANSCRIPT),
        origin: InputOrigin::Sample,
        notices,
    }
}
