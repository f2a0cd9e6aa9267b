use crate::domain::model::Dataset;
use crate::domain::ports::DataSource;
use crate::utils::error::FetchError;
use std::sync::Arc;

/// Holds the first successfully fetched dataset for the rest of the session.
///
/// Failures are not cached, so the next call fetches again.
pub struct DatasetCache<S: DataSource> {
    source: S,
    cached: Option<Arc<Dataset>>,
}

impl<S: DataSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    pub async fn get_data(&mut self) -> Result<Arc<Dataset>, FetchError> {
        if let Some(dataset) = &self.cached {
            tracing::debug!("Using cached dataset");
            return Ok(Arc::clone(dataset));
        }

        tracing::debug!("Fetching dataset from {}", self.source.describe());
        let dataset = Arc::new(self.source.fetch().await?);
        tracing::info!(
            "Loaded {} destinations from {}",
            dataset.record_count(),
            self.source.describe()
        );

        self.cached = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.is_some()
    }

    /// Forget the cached dataset; the next call fetches again.
    pub fn reset(&mut self) {
        self.cached = None;
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
