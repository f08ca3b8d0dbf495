use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::normalizer::TextNormalizer;
use crate::speech::{PassRequest, SpeechProvider, Task};

mod error;

pub use error::PipelineError;

/// One final transcript span: timestamps from the native pass, normalized
/// Spanish text, and the positionally paired English text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text_es: String,
    pub text_en: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub language_source: String,
    pub language_target: String,
    /// Space-joined normalized segment texts, not a substring of any model output.
    pub text_es: String,
    /// Aggregate text of the translation pass, verbatim.
    pub text_en: String,
    pub segments: Vec<Segment>,
}

/// Batch pipeline: transcribe audio in its source language, translate it to
/// English in a second pass, normalize the native text per segment, and pair
/// the two segment sequences by position.
///
/// The provider and normalizer are injected; defaults (which backend, which
/// model) are decided by the caller, not here.
pub struct Pipeline {
    provider: Box<dyn SpeechProvider>,
    normalizer: Box<dyn TextNormalizer>,
    source_language: String,
}

impl Pipeline {
    pub fn new(
        provider: Box<dyn SpeechProvider>,
        normalizer: Box<dyn TextNormalizer>,
        source_language: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            normalizer,
            source_language: source_language.into(),
        }
    }

    pub async fn run(&self, audio_path: &Path) -> Result<TranscriptionResult, PipelineError> {
        // Checked before any model work so a bad path fails instantly.
        if !audio_path.exists() {
            return Err(PipelineError::MissingInput(audio_path.to_path_buf()));
        }

        info!("Loading speech model");
        self.provider.load().map_err(PipelineError::ModelLoad)?;

        info!("Transcribing ({})", self.source_language);
        let native = self
            .provider
            .run_pass(
                audio_path,
                PassRequest {
                    language: Some(&self.source_language),
                    task: Task::Transcribe,
                },
            )
            .await
            .map_err(PipelineError::Inference)?;

        info!("Translating to English");
        let translated = self
            .provider
            .run_pass(
                audio_path,
                PassRequest {
                    language: None,
                    task: Task::Translate,
                },
            )
            .await
            .map_err(PipelineError::Inference)?;

        // The two passes segment independently and may split utterances
        // differently. Pairing is positional and truncates to the shorter
        // sequence; a time-range alignment would be the correct fix.
        if native.segments.len() != translated.segments.len() {
            warn!(
                "Segment counts differ (native: {}, translated: {}); pairing truncates to the shorter sequence",
                native.segments.len(),
                translated.segments.len()
            );
        }

        let mut segments = Vec::with_capacity(native.segments.len().min(translated.segments.len()));

        for (seg_es, seg_en) in native.segments.iter().zip(translated.segments.iter()) {
            let normalized = self
                .normalizer
                .normalize(seg_es.text.trim())
                .await
                .map_err(PipelineError::Generation)?;

            segments.push(Segment {
                start: seg_es.start,
                end: seg_es.end,
                text_es: normalized,
                text_en: seg_en.text.trim().to_string(),
            });
        }

        let text_es = segments
            .iter()
            .map(|s| s.text_es.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(TranscriptionResult {
            language_source: self.source_language.clone(),
            language_target: "en".to_string(),
            text_es,
            text_en: translated.text,
            segments,
        })
    }
}
