//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the entry file.
    pub data_path: PathBuf,
    /// Port the web UI listens on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_path: data_dir.join("sleep_data.json"),
            port: 8350,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SLEEPLOG_*)
        figment = figment.merge(Env::prefixed("SLEEPLOG_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for sleeplog.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sleeplog"))
}

/// Returns the platform-specific data directory for sleeplog.
///
/// On Linux: `~/.local/share/sleeplog`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("sleeplog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_returns_some() {
        assert!(dirs_data_path().is_some());
    }

    #[test]
    fn test_dirs_data_path_ends_with_sleeplog() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "sleeplog");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_entries() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.data_path, data_dir.join("sleep_data.json"));
    }

    #[test]
    fn test_default_port() {
        assert_eq!(Config::default().port, 8350);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                port = 9100
                data_path = "/tmp/sleeplog/custom.json"
                "#,
            )?;

            let config = Config::load_from(Some(&jail.directory().join("config.toml")))?;
            assert_eq!(config.port, 9100);
            assert_eq!(config.data_path, PathBuf::from("/tmp/sleeplog/custom.json"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "port = 9100")?;
            jail.set_env("SLEEPLOG_PORT", 9200);

            let config = Config::load_from(Some(&jail.directory().join("config.toml")))?;
            assert_eq!(config.port, 9200);
            // The file still wins over built-in defaults for untouched keys.
            assert_eq!(config.data_path, Config::default().data_path);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_default_data_path() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SLEEPLOG_DATA_PATH", "/tmp/sleeplog/env.json");

            let config = Config::load_from(None)?;
            assert_eq!(config.data_path, PathBuf::from("/tmp/sleeplog/env.json"));
            Ok(())
        });
    }
}
