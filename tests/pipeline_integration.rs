//! End-to-end pipeline tests against a stub speech provider.
//!
//! The real-whisper test is ignored: it needs the whisper CLI installed and
//! a fixture at tests/fixtures/test.wav. Run with: cargo test -- --ignored

use anyhow::Result;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Command;

use transvoz::llm::MockGenerationClient;
use transvoz::normalizer::LlmNormalizer;
use transvoz::output::save_json;
use transvoz::pipeline::Pipeline;
use transvoz::speech::{PassRequest, RawSegment, SpeechPass, SpeechProvider, Task};

struct FixtureProvider;

impl SpeechProvider for FixtureProvider {
    fn name(&self) -> &'static str {
        "Fixture"
    }

    fn load(&self) -> Result<()> {
        Ok(())
    }

    fn run_pass<'a>(
        &'a self,
        _audio_path: &'a Path,
        request: PassRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<SpeechPass>> + Send + 'a>> {
        let pass = match request.task {
            Task::Transcribe => SpeechPass {
                text: " Quiubo parce, ¿bien o qué? Hágale pues.".to_string(),
                segments: vec![
                    RawSegment {
                        start: 0.0,
                        end: 2.4,
                        text: " Quiubo parce, ¿bien o qué?".to_string(),
                    },
                    RawSegment {
                        start: 2.4,
                        end: 4.1,
                        text: " Hágale pues.".to_string(),
                    },
                ],
            },
            Task::Translate => SpeechPass {
                text: " Hey man, how's it going? Go ahead then.".to_string(),
                segments: vec![
                    RawSegment {
                        start: 0.0,
                        end: 2.4,
                        text: " Hey man, how's it going?".to_string(),
                    },
                    RawSegment {
                        start: 2.4,
                        end: 4.1,
                        text: " Go ahead then.".to_string(),
                    },
                ],
            },
        };
        Box::pin(async move { Ok(pass) })
    }
}

#[tokio::test]
async fn test_pipeline_to_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let audio_path = dir.path().join("entrevista.wav");
    std::fs::write(&audio_path, b"fake wav data").unwrap();

    let normalizer = LlmNormalizer::new(Box::new(MockGenerationClient::new()));
    let pipeline = Pipeline::new(Box::new(FixtureProvider), Box::new(normalizer), "es");

    let result = pipeline.run(&audio_path).await.unwrap();

    let output_path = dir.path().join("output").join("entrevista_es_en.json");
    save_json(&result, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(parsed["language_source"], "es");
    assert_eq!(parsed["language_target"], "en");
    assert_eq!(
        parsed["text_es"],
        "Quiubo parce, ¿bien o qué? Hágale pues."
    );
    assert_eq!(
        parsed["text_en"],
        " Hey man, how's it going? Go ahead then."
    );

    let segments = parsed["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["start"], 0.0);
    assert_eq!(segments[0]["end"], 2.4);
    assert_eq!(segments[0]["text_en"], "Hey man, how's it going?");
    assert_eq!(segments[1]["text_es"], "Hágale pues.");

    // Accented characters written literally, not escaped.
    assert!(content.contains("Hágale"));
    assert!(!content.contains("\\u00e1"));
}

#[tokio::test]
async fn test_pipeline_missing_audio_fails() {
    let normalizer = LlmNormalizer::new(Box::new(MockGenerationClient::new()));
    let pipeline = Pipeline::new(Box::new(FixtureProvider), Box::new(normalizer), "es");

    let err = pipeline.run(Path::new("/nonexistent/audio.wav")).await;
    assert!(err.is_err());
}

#[test]
#[ignore] // Requires the whisper CLI and a fixture audio file
fn test_transcribe_real_audio_file() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "tests/fixtures/test.wav",
            "-o",
            "/tmp/transvoz_test_output.json",
        ])
        .output()
        .expect("Failed to run command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(std::path::Path::new("/tmp/transvoz_test_output.json").exists());
    std::fs::remove_file("/tmp/transvoz_test_output.json").ok();
}
