use crate::core::clock::DEFAULT_CLOCK_INTERVAL;
use crate::core::render::{DEFAULT_FEATURED_HEADING, DEFAULT_PLACEHOLDER_IMAGE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TravelError};
use crate::utils::validation::{
    validate_data_source, validate_non_empty_string, validate_range, validate_time_zone,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DATA_SOURCE: &str = "travel_recommendation_api.json";
pub const MIN_CLOCK_INTERVAL_MS: u64 = 100;
pub const MAX_CLOCK_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Destination name fragment -> IANA zone.
    #[serde(default)]
    pub timezones: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub placeholder_image: Option<String>,
    pub featured_heading: Option<String>,
    pub clock_interval_ms: Option<u64>,
    pub check_images: Option<bool>,
}

fn default_endpoint() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string, expanding `${VAR}` first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TravelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TravelError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_data_source("source.endpoint", &self.source.endpoint)?;

        if let Some(placeholder) = &self.display.placeholder_image {
            validate_url("display.placeholder_image", placeholder)?;
        }

        if let Some(heading) = &self.display.featured_heading {
            validate_non_empty_string("display.featured_heading", heading)?;
        }

        if let Some(interval) = self.display.clock_interval_ms {
            validate_range(
                "display.clock_interval_ms",
                interval,
                MIN_CLOCK_INTERVAL_MS,
                MAX_CLOCK_INTERVAL_MS,
            )?;
        }

        for (pattern, zone) in &self.timezones {
            validate_time_zone(pattern, zone)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_source(&self) -> &str {
        &self.source.endpoint
    }

    fn placeholder_image(&self) -> &str {
        self.display
            .placeholder_image
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }

    fn featured_heading(&self) -> &str {
        self.display
            .featured_heading
            .as_deref()
            .unwrap_or(DEFAULT_FEATURED_HEADING)
    }

    fn clock_interval(&self) -> Duration {
        self.display
            .clock_interval_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CLOCK_INTERVAL)
    }

    fn time_zone_overrides(&self) -> Vec<(String, String)> {
        self.timezones
            .iter()
            .map(|(pattern, zone)| (pattern.clone(), zone.clone()))
            .collect()
    }

    fn check_images(&self) -> bool {
        self.display.check_images.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
