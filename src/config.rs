/**
* filename : config
* author : HAMA
* date: 2025. 5. 8.
* description: 
**/

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ResearchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub series: SeriesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 카탈로그 캐시 유지 시간 (초)
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// 차트에 넘길 마지막 봉 개수
    pub chart_window: usize,
}

impl CatalogConfig {
    pub fn ttl(&self) -> chrono::Duration {
        let secs = i64::try_from(self.ttl_secs).unwrap_or(i64::MAX).min(i64::MAX / 1_000);
        chrono::Duration::seconds(secs)
    }
}

impl Config {
    /// Load configuration from config.json, or defaults when absent
    pub fn load() -> Result<Self, ResearchError> {
        let config_path = Path::new("config.json");

        let mut cfg = if config_path.exists() {
            Self::read_file(config_path)?
        } else {
            Config::default()
        };
        cfg.apply_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Load configuration from a given file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ResearchError> {
        let mut cfg = Self::read_file(path.as_ref())?;
        cfg.apply_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    fn read_file(path: &Path) -> Result<Self, ResearchError> {
        let mut file = File::open(path)
            .map_err(|e| ResearchError::ConfigError(format!("Failed to open config file: {}", e)))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ResearchError::ConfigError(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ResearchError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Apply runtime overrides; empty or unparsable values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(v) = value("LOG_LEVEL") { self.logging.level = v; }
        if let Some(v) = value("CATALOG_TTL_SECS").and_then(|v| v.parse().ok()) { self.catalog.ttl_secs = v; }
        if let Some(v) = value("CHART_WINDOW").and_then(|v| v.parse().ok()) { self.series.chart_window = v; }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig { ttl_secs: 6 * 60 * 60 }
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig { chart_window: 90 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: LoggingConfig::default(),
            catalog: CatalogConfig::default(),
            series: SeriesConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.catalog.ttl(), chrono::Duration::hours(6));
        assert_eq!(cfg.series.chart_window, 90);
    }

    #[test]
    fn test_overrides_ignore_empty_and_garbage() {
        let env: HashMap<&str, &str> = [
            ("LOG_LEVEL", "debug"),
            ("CATALOG_TTL_SECS", "soon"),
            ("CHART_WINDOW", " 30 "),
        ]
        .into_iter()
        .collect();

        let mut cfg = Config::default();
        cfg.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.catalog.ttl_secs, 21_600);
        assert_eq!(cfg.series.chart_window, 30);

        cfg.apply_overrides(|_| Some(String::new()));
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = std::env::temp_dir().join(format!("quant-research-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"catalog": {{"ttl_secs": 60}}}}"#).unwrap();

        let cfg = Config::read_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.catalog.ttl(), chrono::Duration::seconds(60));
        assert_eq!(cfg.series.chart_window, 90);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load_from("/nonexistent/quant-research.json").unwrap_err();
        assert!(matches!(err, ResearchError::ConfigError(_)));
    }
}
