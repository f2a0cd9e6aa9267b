use crate::config::toml_config::TomlConfig;
use crate::utils::error::{Result, TravelError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "travel-finder")]
#[command(about = "Search travel destinations by keyword")]
pub struct CliConfig {
    /// Dataset location: an http(s) URL or a local JSON file
    #[arg(long)]
    pub data_source: Option<String>,

    /// TOML configuration file; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run a single search, print the results and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Image used when a destination image cannot be loaded
    #[arg(long)]
    pub placeholder_image: Option<String>,

    /// Clock refresh interval in milliseconds
    #[arg(long)]
    pub clock_interval_ms: Option<u64>,

    /// Extra time zone mapping, e.g. --timezone "Lima=America/Lima"
    #[arg(long = "timezone", value_name = "NAME=ZONE")]
    pub timezones: Vec<String>,

    /// Check every image URL and swap in the placeholder when it fails
    #[arg(long)]
    pub check_images: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Copy explicitly given flags over a file configuration.
    ///
    /// Only the shape of `--timezone` is checked here; zone names and the
    /// other values are validated on the merged configuration.
    pub fn apply_to(&self, config: &mut TomlConfig) -> Result<()> {
        if let Some(source) = &self.data_source {
            config.source.endpoint = source.clone();
        }
        if let Some(placeholder) = &self.placeholder_image {
            config.display.placeholder_image = Some(placeholder.clone());
        }
        if let Some(interval) = self.clock_interval_ms {
            config.display.clock_interval_ms = Some(interval);
        }
        if self.check_images {
            config.display.check_images = Some(true);
        }
        for raw in &self.timezones {
            let (pattern, zone) =
                Self::parse_mapping(raw).ok_or_else(|| TravelError::InvalidConfigValueError {
                    field: "timezone".to_string(),
                    value: raw.clone(),
                    reason: "Expected NAME=ZONE".to_string(),
                })?;
            config.timezones.insert(pattern, zone);
        }
        Ok(())
    }

    fn parse_mapping(raw: &str) -> Option<(String, String)> {
        let (pattern, zone) = raw.split_once('=')?;
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return None;
        }
        Some((pattern.to_string(), zone.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::DEFAULT_DATA_SOURCE;
    use crate::core::clock::DEFAULT_CLOCK_INTERVAL;
    use crate::domain::ports::ConfigProvider;
    use crate::utils::validation::Validate;
    use std::time::Duration;

    #[test]
    fn test_no_flags_keep_defaults() {
        let cli = CliConfig::parse_from(["travel-finder"]);
        let mut config = TomlConfig::default();

        cli.apply_to(&mut config).unwrap();

        assert_eq!(config.data_source(), DEFAULT_DATA_SOURCE);
        assert_eq!(config.clock_interval(), DEFAULT_CLOCK_INTERVAL);
        assert!(cli.query.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timezone_flags() {
        let cli = CliConfig::parse_from([
            "travel-finder",
            "--timezone",
            "Lima=America/Lima",
            "--timezone",
            "Cusco = America/Lima",
        ]);
        let mut config = TomlConfig::default();

        cli.apply_to(&mut config).unwrap();

        let overrides = config.time_zone_overrides();
        assert!(overrides.contains(&("Lima".to_string(), "America/Lima".to_string())));
        assert!(overrides.contains(&("Cusco".to_string(), "America/Lima".to_string())));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_timezone_flag_is_rejected() {
        for raw in ["Lima", "=America/Lima"] {
            let cli = CliConfig::parse_from(["travel-finder", "--timezone", raw]);
            let err = cli.apply_to(&mut TomlConfig::default()).unwrap_err();
            assert!(matches!(
                err,
                TravelError::InvalidConfigValueError { ref field, .. } if field == "timezone"
            ));
        }
    }

    #[test]
    fn test_unknown_zone_fails_merged_validation() {
        let cli = CliConfig::parse_from(["travel-finder", "--timezone", "Lima=Mars/Olympus"]);
        let mut config = TomlConfig::default();

        cli.apply_to(&mut config).unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flags_override_file_config() {
        let mut file_config = TomlConfig::from_toml_str(
            "[source]\nendpoint = \"https://a.example.com/data.json\"\n[display]\nclock_interval_ms = 2000\n",
        )
        .unwrap();
        let cli = CliConfig::parse_from([
            "travel-finder",
            "--data-source",
            "local.json",
            "--check-images",
        ]);

        cli.apply_to(&mut file_config).unwrap();

        assert_eq!(file_config.data_source(), "local.json");
        assert_eq!(file_config.clock_interval(), Duration::from_millis(2000));
        assert!(file_config.check_images());
    }
}
