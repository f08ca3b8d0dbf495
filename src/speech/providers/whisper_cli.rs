use anyhow::{bail, Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::process::Command;
use tracing::{debug, info};

use super::{PassRequest, SpeechPass, SpeechProvider};

const WHISPER_COMMAND: &str = "whisper";

/// Speech provider that shells out to the OpenAI Whisper CLI and parses its
/// JSON output file.
pub struct WhisperCliProvider {
    command: PathBuf,
    model: String,
}

impl WhisperCliProvider {
    pub fn new(command_path: Option<String>, model: String) -> Result<Self> {
        let command = match command_path {
            Some(path) => PathBuf::from(path),
            None => which::which(WHISPER_COMMAND)
                .context("whisper executable not found in PATH; set command_path in config")?,
        };

        info!("Initialized Whisper CLI provider: {:?}", command);

        Ok(Self { command, model })
    }

    fn build_args(&self, audio_path: &Path, request: &PassRequest, output_dir: &Path) -> Vec<String> {
        let mut args = vec![
            audio_path.display().to_string(),
            "--model".to_string(),
            self.model.clone(),
            "--task".to_string(),
            request.task.as_arg().to_string(),
            "--fp16".to_string(),
            "False".to_string(),
            "--output_format".to_string(),
            "json".to_string(),
            "--output_dir".to_string(),
            output_dir.display().to_string(),
        ];

        if let Some(language) = request.language {
            args.push("--language".to_string());
            args.push(language.to_string());
        }

        args
    }
}

/// The CLI names its output file after the audio file's stem.
fn output_json_path(output_dir: &Path, audio_path: &Path) -> Result<PathBuf> {
    let stem = audio_path
        .file_stem()
        .context("Audio path has no file name")?;
    Ok(output_dir.join(stem).with_extension("json"))
}

impl SpeechProvider for WhisperCliProvider {
    fn name(&self) -> &'static str {
        "Whisper CLI"
    }

    fn load(&self) -> Result<()> {
        if !self.command.exists() {
            bail!("whisper executable not found at {:?}", self.command);
        }

        // The CLI resolves the model by name and downloads it on first use;
        // unknown names fail the pass itself.
        info!("Loading Whisper model '{}'", self.model);

        Ok(())
    }

    fn run_pass<'a>(
        &'a self,
        audio_path: &'a Path,
        request: PassRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<SpeechPass>> + Send + 'a>> {
        Box::pin(async move {
            let output_dir = tempfile::tempdir().context("Failed to create output directory")?;
            let args = self.build_args(audio_path, &request, output_dir.path());

            debug!("Running {:?} with args {:?}", self.command, args);

            let output = Command::new(&self.command)
                .args(&args)
                .output()
                .await
                .context("Failed to run whisper")?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                bail!("whisper exited with {}: {}", output.status, stderr.trim());
            }

            let json_path = output_json_path(output_dir.path(), audio_path)?;
            let content = tokio::fs::read_to_string(&json_path)
                .await
                .with_context(|| format!("Failed to read whisper output {:?}", json_path))?;

            let pass: SpeechPass =
                serde_json::from_str(&content).context("Failed to parse whisper output")?;

            debug!(
                "Pass complete: {} chars, {} segments",
                pass.text.len(),
                pass.segments.len()
            );

            Ok(pass)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::Task;

    fn provider() -> WhisperCliProvider {
        WhisperCliProvider {
            command: PathBuf::from("/usr/bin/whisper"),
            model: "base".to_string(),
        }
    }

    #[test]
    fn test_build_args_transcribe_with_language() {
        let args = provider().build_args(
            Path::new("/tmp/audio.wav"),
            &PassRequest {
                language: Some("es"),
                task: Task::Transcribe,
            },
            Path::new("/tmp/out"),
        );

        assert!(args.contains(&"--task".to_string()));
        assert!(args.contains(&"transcribe".to_string()));
        assert!(args.contains(&"--language".to_string()));
        assert!(args.contains(&"es".to_string()));

        // fp16 always disabled
        let fp16_pos = args.iter().position(|a| a == "--fp16").unwrap();
        assert_eq!(args[fp16_pos + 1], "False");
    }

    #[test]
    fn test_build_args_translate_without_language() {
        let args = provider().build_args(
            Path::new("/tmp/audio.wav"),
            &PassRequest {
                language: None,
                task: Task::Translate,
            },
            Path::new("/tmp/out"),
        );

        assert!(args.contains(&"translate".to_string()));
        assert!(!args.contains(&"--language".to_string()));
    }

    #[test]
    fn test_output_json_path_uses_audio_stem() {
        let path = output_json_path(Path::new("/tmp/out"), Path::new("/data/entrevista.wav")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/out/entrevista.json"));
    }

    #[test]
    fn test_parses_whisper_json_ignoring_extra_fields() {
        let content = r#"{
            "text": " Hola mundo.",
            "segments": [
                {"id": 0, "seek": 0, "start": 0.0, "end": 2.4, "text": " Hola mundo.", "temperature": 0.0}
            ],
            "language": "es"
        }"#;

        let pass: SpeechPass = serde_json::from_str(content).unwrap();
        assert_eq!(pass.text, " Hola mundo.");
        assert_eq!(pass.segments.len(), 1);
        assert_eq!(pass.segments[0].end, 2.4);
    }
}
