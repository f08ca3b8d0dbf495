use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::llm::GenerationClient;
use crate::normalizer::TextNormalizer;

/// Instruction wording is a pinned contract: swapping generation backends
/// only preserves behavior if the prompt stays byte-identical.
const PROMPT_HEADER: &str = "Normaliza el siguiente texto del español colombiano hablado
a un español neutro, claro y natural.

Texto:
";

/// Normalizer that wraps input text in a fixed prompt and delegates the
/// rewrite to a generation client.
pub struct LlmNormalizer {
    client: Box<dyn GenerationClient>,
}

impl LlmNormalizer {
    pub fn new(client: Box<dyn GenerationClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextNormalizer for LlmNormalizer {
    async fn normalize(&self, text: &str) -> Result<String> {
        let prompt = format!("{PROMPT_HEADER}{text}");

        debug!("Normalizing {} chars via {}", text.len(), self.client.name());

        let response = self.client.generate(&prompt).await?;
        Ok(response.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "LlmNormalizer"
    }
}
