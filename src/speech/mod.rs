pub mod providers;

pub use providers::{PassRequest, RawSegment, SpeechPass, SpeechProvider, Task, WhisperCliProvider};

use anyhow::{bail, Result};
use tracing::info;

use crate::config::WhisperConfig;

/// Build a speech provider by name from config.
pub fn with_provider(provider_name: &str, config: &WhisperConfig) -> Result<Box<dyn SpeechProvider>> {
    let model = config.model.clone().unwrap_or_else(|| "base".to_string());

    let provider: Box<dyn SpeechProvider> = match provider_name {
        "whisper-cli" => Box::new(WhisperCliProvider::new(config.command_path.clone(), model)?),
        _ => bail!(
            "Unknown speech provider '{}'. Supported providers: whisper-cli",
            provider_name
        ),
    };

    info!("Using {} for speech recognition", provider.name());

    Ok(provider)
}
