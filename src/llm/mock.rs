use anyhow::Result;
use async_trait::async_trait;

use crate::llm::GenerationClient;

/// Deterministic stand-in for a real generation backend.
///
/// Echoes back whatever follows the last `"Texto:"` marker in the prompt,
/// trimmed. Exists purely to validate pipeline wiring without incurring
/// generation cost or nondeterminism. Never a production backend.
pub struct MockGenerationClient;

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        // Whole prompt when the marker is absent, matching str::rsplit's
        // behavior of yielding the full input on no match.
        let tail = prompt.rsplit("Texto:").next().unwrap_or(prompt);
        Ok(tail.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "MockGenerationClient"
    }
}
