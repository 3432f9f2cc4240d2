use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes output files under a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        Path::new(&self.base_path).join(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_file_creates_parent_dirs_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("data/nav_data.json", b"[1]").await.unwrap();
        storage.write_file("data/nav_data.json", b"[]").await.unwrap();

        let written = fs::read_to_string(temp_dir.path().join("data/nav_data.json")).unwrap();
        assert_eq!(written, "[]");
    }

    #[test]
    fn test_location_joins_base_path() {
        let storage = LocalStorage::new("public".to_string());
        assert_eq!(
            storage.location("menus.json"),
            Path::new("public").join("menus.json").display().to_string()
        );
    }
}
