pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{file::FileDataSource, http::HttpDataSource, terminal::TerminalView};
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    classifier::{classify, Category, Classification},
    resolver::resolve,
    session::{PassOutcome, TravelSession, UiAction},
};
pub use utils::error::{FetchError, Result, TravelError};
