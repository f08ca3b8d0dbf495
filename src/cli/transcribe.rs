//! CLI handler for the transcribe-and-translate pipeline.
//!
//! Assembles the speech provider and normalizer from config plus CLI
//! overrides, runs the pipeline, and persists the result as JSON.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::args::TranscribeCliArgs;
use crate::config::Config;
use crate::normalizer;
use crate::output::save_json;
use crate::pipeline::Pipeline;
use crate::speech;

/// Handle the transcribe CLI command.
pub async fn handle_transcribe_command(args: TranscribeCliArgs) -> Result<()> {
    let config = Config::load()?;

    let mut whisper = config.whisper.clone();
    if let Some(model) = args.model {
        whisper.model = Some(model);
    }
    let language = args
        .language
        .or_else(|| whisper.language.clone())
        .unwrap_or_else(|| "es".to_string());
    let provider_name = whisper
        .provider
        .clone()
        .unwrap_or_else(|| "whisper-cli".to_string());

    let mut normalizer_config = config.normalizer.clone();
    if let Some(backend) = args.normalizer {
        normalizer_config.backend = Some(backend);
    }

    // The mock generation backend is the config default; production backends
    // are substituted here, never inside pipeline logic.
    let provider = speech::with_provider(&provider_name, &whisper)?;
    let normalizer = normalizer::with_backend(&normalizer_config)?;

    let pipeline = Pipeline::new(provider, normalizer, language);
    let result = pipeline.run(&args.file).await?;

    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(&args.file));
    save_json(&result, &output_path)?;

    eprintln!("Transcript saved to: {}", output_path.display());

    Ok(())
}

/// Default output path: `<stem>_es_en.json` in the audio file's directory.
fn default_output_path(audio_path: &Path) -> PathBuf {
    let stem = audio_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcript".to_string());
    audio_path.with_file_name(format!("{stem}_es_en.json"))
}
