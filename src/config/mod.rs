#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::http::DEFAULT_BASE_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::time::Duration;
use toml_config::TomlConfig;

/// Effective settings after merging the config file with command line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub headers: HashMap<String, String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            headers: HashMap::new(),
            log_level: None,
            json_logs: false,
            verbose: false,
        }
    }
}

impl From<TomlConfig> for Settings {
    fn from(config: TomlConfig) -> Self {
        let log_level = config.log_level().map(str::to_string);
        let json_logs = config.json_logs();
        Self {
            timeout: config.timeout(),
            base_url: config.api.base_url,
            headers: config.api.headers,
            log_level,
            json_logs,
            verbose: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout {
            crate::utils::validation::validate_positive_number(
                "timeout_seconds",
                timeout.as_secs(),
                1,
            )?;
        }
        for (name, value) in &self.headers {
            crate::utils::validation::validate_header_name("headers", name)?;
            crate::utils::validation::validate_header_value("headers", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_reject_control_characters_in_header_values() {
        let mut settings = Settings::default();
        settings
            .headers
            .insert("X-Api-Key".to_string(), "abc\r\ndef".to_string());
        assert!(settings.validate().is_err());

        settings
            .headers
            .insert("X-Api-Key".to_string(), "abcdef".to_string());
        assert!(settings.validate().is_ok());
    }
}
