use crate::domain::model::Dataset;
use crate::domain::view::RenderedView;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Where the dataset comes from.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> std::result::Result<Dataset, FetchError>;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn fetch(&self) -> std::result::Result<Dataset, FetchError> {
        (**self).fetch().await
    }
}

/// Stands in for the browser's image load/error events.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn is_loadable(&self, url: &str) -> bool;
}

/// The host surface a session draws into.
pub trait RenderTarget {
    /// Drop everything currently shown in the results area.
    fn clear(&mut self) -> Result<()>;
    fn show(&mut self, view: &RenderedView) -> Result<()>;
    /// Blocking notification the user has to acknowledge.
    fn alert(&mut self, message: &str) -> Result<()>;
    fn reset_input(&mut self) -> Result<()> {
        Ok(())
    }
}

pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn data_source(&self) -> &str;
    fn placeholder_image(&self) -> &str;
    fn featured_heading(&self) -> &str;
    fn clock_interval(&self) -> Duration;
    /// Extra `(name substring, IANA zone)` pairs, consulted before the built-in table.
    fn time_zone_overrides(&self) -> Vec<(String, String)>;
    fn check_images(&self) -> bool;
}
