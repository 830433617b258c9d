use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

pub struct FileReader;

impl FileReader {
    /// Read the source transcript. An unreadable or blank file is fatal:
    /// there is nothing to extract and the run must stop before touching the
    /// result log.
    pub async fn read_source(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read input file: {}", path.display()))?;

        if content.trim().is_empty() {
            anyhow::bail!("input file is empty: {}", path.display());
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        tokio::fs::write(&path, "  \n\n").await.unwrap();

        assert!(FileReader::read_source(&path).await.is_err());
    }

    #[tokio::test]
    async fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(FileReader::read_source(&dir.path().join("missing.txt")).await.is_err());
    }
}
