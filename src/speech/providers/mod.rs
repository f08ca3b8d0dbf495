use anyhow::Result;
use serde::Deserialize;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

pub mod whisper_cli;

pub use whisper_cli::WhisperCliProvider;

/// One timestamped utterance span as produced by an inference pass.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Result of a single inference pass: aggregate text plus timed segments.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechPass {
    pub text: String,
    pub segments: Vec<RawSegment>,
}

/// Inference task for one pass over the audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Recognize speech in its spoken language.
    Transcribe,
    /// Translate speech to English (target fixed by the model's convention).
    Translate,
}

impl Task {
    pub fn as_arg(&self) -> &'static str {
        match self {
            Task::Transcribe => "transcribe",
            Task::Translate => "translate",
        }
    }
}

/// Parameters for one inference pass.
#[derive(Debug, Clone, Copy)]
pub struct PassRequest<'a> {
    /// Language hint for the audio. None lets the model detect it.
    pub language: Option<&'a str>,
    pub task: Task,
}

pub trait SpeechProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Verify the model can be loaded before any pass runs.
    fn load(&self) -> Result<()>;

    /// Run one inference pass over the audio file. Half-precision is always
    /// disabled for numerically stable output.
    fn run_pass<'a>(
        &'a self,
        audio_path: &'a Path,
        request: PassRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<SpeechPass>> + Send + 'a>>;
}
