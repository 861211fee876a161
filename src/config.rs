use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding `base_url`
pub const URL_ENV: &str = "WEAVIATE_TUI_URL";
/// Environment variable overriding `log_level`
pub const LOG_ENV: &str = "WEAVIATE_TUI_LOG";

/// Hard upper bound on objects per browse, same cap the proxy applies
pub const MAX_OBJECT_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dashboard server serving the `/api/*` endpoints
    pub base_url: String,
    /// Initial object browser limit
    pub default_object_limit: u32,
    pub max_object_limit: u32,
    pub request_timeout_secs: u64,
    /// Directory the schema export is written to
    pub export_dir: String,
    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            default_object_limit: 10,
            max_object_limit: MAX_OBJECT_LIMIT,
            request_timeout_secs: 30,
            export_dir: ".".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line, applied last
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub object_limit: Option<u32>,
    pub export_dir: Option<String>,
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".weaviate-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Directory holding the rolling log files
    pub fn log_dir() -> PathBuf {
        Self::config_dir()
            .map(|dir| dir.join("logs"))
            .unwrap_or_else(|| env::temp_dir().join("weaviate-tui-logs"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Defaults, then the config file, then environment, then `overrides`
    pub fn resolve(overrides: &Overrides) -> Config {
        let mut config = Self::load().unwrap_or_default();
        config.apply_env(|key| env::var(key).ok());
        config.apply_overrides(overrides);
        config.normalize();
        config
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(level) = lookup(LOG_ENV).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(ref url) = overrides.base_url {
            self.base_url = url.clone();
        }
        if let Some(limit) = overrides.object_limit {
            self.default_object_limit = limit;
        }
        if let Some(ref dir) = overrides.export_dir {
            self.export_dir = dir.clone();
        }
    }

    /// Keep limits inside `1..=MAX_OBJECT_LIMIT`
    fn normalize(&mut self) {
        self.max_object_limit = self.max_object_limit.clamp(1, MAX_OBJECT_LIMIT);
        self.default_object_limit = self.default_object_limit.clamp(1, self.max_object_limit);
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.5:5000"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.default_object_limit, 10);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config::default();
        config.apply_env(|key| match key {
            URL_ENV => Some("http://env:5000".to_string()),
            LOG_ENV => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://env:5000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = Config::default();
        config.apply_env(|_| Some("http://env:5000".to_string()));
        config.apply_overrides(&Overrides {
            base_url: Some("http://cli:5000".to_string()),
            object_limit: Some(25),
            export_dir: Some("/tmp/exports".to_string()),
        });
        assert_eq!(config.base_url, "http://cli:5000");
        assert_eq!(config.default_object_limit, 25);
        assert_eq!(config.export_dir, "/tmp/exports");
    }

    #[test]
    fn test_normalize_clamps_limits() {
        let mut config = Config {
            default_object_limit: 500,
            max_object_limit: 1000,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.max_object_limit, MAX_OBJECT_LIMIT);
        assert_eq!(config.default_object_limit, MAX_OBJECT_LIMIT);

        config.default_object_limit = 0;
        config.normalize();
        assert_eq!(config.default_object_limit, 1);
    }
}
