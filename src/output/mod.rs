use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::pipeline::PipelineError;

/// Serialize `data` as pretty-printed UTF-8 JSON at `output_path`, creating
/// missing parent directories. Non-ASCII characters are written literally.
/// An existing file is overwritten.
pub fn save_json<T: Serialize>(data: &T, output_path: &Path) -> Result<(), PipelineError> {
    write_json(data, output_path).map_err(PipelineError::Persistence)
}

fn write_json<T: Serialize>(data: &T, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let content = serde_json::to_string_pretty(data).context("Failed to serialize result")?;

    std::fs::write(output_path, content)
        .with_context(|| format!("Failed to write {:?}", output_path))?;

    info!("Saved transcript to {:?}", output_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_creates_nested_directories_and_preserves_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("out.json");

        let mut data = BTreeMap::new();
        data.insert("a", "ñ");

        save_json(&data, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('ñ'), "non-ASCII must not be escaped: {content}");
        assert!(!content.contains("\\u00f1"));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        std::fs::write(&path, "stale").unwrap();

        let mut data = BTreeMap::new();
        data.insert("k", "v");
        save_json(&data, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"k\": \"v\""));
        assert!(!content.contains("stale"));
    }
}
