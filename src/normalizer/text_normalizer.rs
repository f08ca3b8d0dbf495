use anyhow::Result;
use async_trait::async_trait;

/// Trait for rewriting spoken-register Spanish into neutral written Spanish.
#[async_trait]
pub trait TextNormalizer: Send + Sync {
    /// Normalize the given text. Failures propagate; there is no fallback
    /// to the original text, so a degraded normalization stays visible.
    async fn normalize(&self, text: &str) -> Result<String>;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str;
}
