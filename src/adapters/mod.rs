// Adapters layer: concrete data sources and the terminal render target.

pub mod file;
pub mod http;
pub mod terminal;

use crate::domain::ports::DataSource;
use crate::utils::validation::is_remote_source;

/// Pick the HTTP or file source for a configured data source string.
pub fn data_source_for(source: &str) -> Box<dyn DataSource> {
    if is_remote_source(source) {
        Box::new(http::HttpDataSource::new(source))
    } else {
        Box::new(file::FileDataSource::new(source))
    }
}
