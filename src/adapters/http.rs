use crate::domain::model::Dataset;
use crate::domain::ports::{DataSource, ImageProbe};
use crate::utils::error::FetchError;
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;

/// Fetches the dataset with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    url: String,
}

impl HttpDataSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Dataset, FetchError> {
        tracing::debug!("Making dataset request to: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        tracing::debug!("Dataset response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(Dataset::from_slice(&body)?)
    }
}

/// Treats an image as loadable when a HEAD request succeeds.
#[derive(Debug, Clone, Default)]
pub struct HttpImageProbe {
    client: Client,
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn is_loadable(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Image probe for {} failed: {}", url, e);
                false
            }
        }
    }
}
