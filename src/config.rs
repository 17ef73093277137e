use log::LevelFilter;
use serde::Deserialize;

use crate::{counter::FAVORABLE_TRUE_COUNT, error::AdvisorError};

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_favorable_true_count() -> f64 {
    FAVORABLE_TRUE_COUNT
}

/// Options passed in by the page when it creates an advisor. Table rules are fixed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_favorable_true_count")]
    pub favorable_true_count: f64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            log_level: default_log_level(),
            favorable_true_count: default_favorable_true_count(),
        }
    }
}

impl AdvisorConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, AdvisorError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| AdvisorError::InvalidInput(format!("log level {:?}", self.log_level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AdvisorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.favorable_true_count, 2.0);
        assert_eq!(config.level_filter(), Ok(LevelFilter::Warn));
    }

    #[test]
    fn reads_camel_case_fields() {
        let config: AdvisorConfig =
            serde_json::from_str(r#"{"logLevel":"debug","favorableTrueCount":1.5}"#).unwrap();
        assert_eq!(config.level_filter(), Ok(LevelFilter::Debug));
        assert_eq!(config.favorable_true_count, 1.5);
    }

    #[test]
    fn rejects_unknown_level() {
        let config = AdvisorConfig {
            log_level: "loud".to_string(),
            ..AdvisorConfig::default()
        };
        assert!(matches!(config.level_filter(), Err(AdvisorError::InvalidInput(_))));
    }
}
