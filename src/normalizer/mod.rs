mod llm_normalizer;
mod text_normalizer;

pub use llm_normalizer::LlmNormalizer;
pub use text_normalizer::TextNormalizer;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::config::NormalizerConfig;
use crate::llm::{GenerationClient, MockGenerationClient, OpenAiGenerationClient};

/// Build a normalizer from config, selecting the generation backend by name.
pub fn with_backend(config: &NormalizerConfig) -> Result<Box<dyn TextNormalizer>> {
    let backend = config.backend.as_deref().unwrap_or("mock");

    let client: Box<dyn GenerationClient> = match backend {
        "mock" => Box::new(MockGenerationClient::new()),
        "openai" => {
            let api_key = config
                .api_key
                .clone()
                .context("api_key is required for the openai normalizer backend")?;

            Box::new(OpenAiGenerationClient::new(
                api_key,
                config.api_endpoint.clone(),
                config.model.clone(),
            )?)
        }
        _ => bail!(
            "Unknown normalizer backend '{}'. Supported backends: mock, openai",
            backend
        ),
    };

    info!("Using {} for text normalization", client.name());

    Ok(Box::new(LlmNormalizer::new(client)))
}
