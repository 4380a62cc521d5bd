use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files under a base directory. Writes create missing directories and
/// replace whatever was there.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = self.resolve(path);
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).await?;
        }
        fs::write(&target, data).await?;
        tracing::debug!("Stored {} bytes at {}", data.len(), target.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_directories_and_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("outputs").to_string_lossy().to_string();
        let storage = LocalStorage::new(base.clone());

        storage.write_file("report.csv", b"old contents").await.unwrap();
        storage.write_file("report.csv", b"new").await.unwrap();

        let written = Path::new(&base).join("report.csv");
        assert_eq!(std::fs::read(&written).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_write_into_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().to_string());

        storage.write_file("2024/report.json", b"{}").await.unwrap();

        let written = temp_dir.path().join("2024").join("report.json");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_write_fails_when_base_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("taken");
        std::fs::write(&blocker, b"x").unwrap();
        let storage = LocalStorage::new(blocker.to_string_lossy().to_string());

        assert!(storage.write_file("report.csv", b"data").await.is_err());
    }
}
