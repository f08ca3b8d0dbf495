use anyhow::Result;
use async_trait::async_trait;

/// Trait for text-completion backends: prompt in, completion out.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the name of this client for logging
    fn name(&self) -> &'static str;
}
