use crate::domain::model::Dataset;
use crate::domain::ports::DataSource;
use crate::utils::error::FetchError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the dataset from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Dataset, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(Dataset::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_dataset_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"temples": [{"name": "Taj Mahal, India"}]}"#)
            .unwrap();

        let dataset = FileDataSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(dataset.temples[0].name, "Taj Mahal, India");
        assert!(dataset.countries.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let source = FileDataSource::new("/definitely/not/here.json");
        assert!(matches!(source.fetch().await, Err(FetchError::Read { .. })));
    }
}
