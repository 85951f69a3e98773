use crate::core::CatalogSource;
use crate::utils::error::LoadError;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"title": "Block Storage", "short_desc": "SSD volumes", "long_desc": "", "url": "https://x/bs", "group": "Storage"}]"#,
        )
        .unwrap();

        let records = load(&FileSource::new(file.path())).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Block Storage");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("product_data_final.json"));

        let err = load(&source).await.unwrap_err();

        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("product_data_final.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
