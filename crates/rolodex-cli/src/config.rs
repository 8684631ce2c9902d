use anyhow::{Context, Result};
use rolodex_api::{DEFAULT_BASE_URL, Url};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROLODEX_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.rolodex/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: ROLODEX_CONFIG environment variable
    if let Ok(env_path) = std::env::var("ROLODEX_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG config directory (recommended default)
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rolodex").join("config.toml"));
    }

    // Priority 4: Fallback to ~/.rolodex (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rolodex").join("config.toml"));
    }

    anyhow::bail!("could not determine config path: no HOME or XDG config directory found")
}

/// Resolve the directory API base URL based on priority:
/// 1. --base-url flag
/// 2. ROLODEX_API_URL environment variable
/// 3. [api].base_url in the config file
/// 4. Built-in default (JSONPlaceholder)
pub fn resolve_base_url(explicit_url: Option<&str>, config: &Config) -> Result<Url> {
    let raw = if let Some(url) = explicit_url {
        url.to_string()
    } else if let Ok(env_url) = std::env::var("ROLODEX_API_URL") {
        env_url
    } else if let Some(url) = &config.api.base_url {
        url.clone()
    } else {
        DEFAULT_BASE_URL.to_string()
    };

    Url::parse(&raw).with_context(|| format!("invalid base URL '{raw}'"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.base_url = Some("http://directory.example/api".to_string());
        config.api.timeout_secs = 5;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.api.base_url.as_deref(),
            Some("http://directory.example/api")
        );
        assert_eq!(loaded.api.timeout_secs, 5);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api.base_url, None);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api]\nbase_url = \"http://localhost:3000\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.api.timeout_secs, 30);

        Ok(())
    }

    #[test]
    fn test_resolve_base_url_flag_beats_config() -> Result<()> {
        let mut config = Config::default();
        config.api.base_url = Some("http://from-config.example".to_string());

        let url = resolve_base_url(Some("http://from-flag.example"), &config)?;
        assert_eq!(url.as_str(), "http://from-flag.example/");

        Ok(())
    }

    #[test]
    fn test_resolve_base_url_config_beats_default() -> Result<()> {
        let mut config = Config::default();
        config.api.base_url = Some("http://from-config.example".to_string());

        let url = resolve_base_url(None, &config)?;
        assert_eq!(url.as_str(), "http://from-config.example/");

        Ok(())
    }

    #[test]
    fn test_resolve_base_url_rejects_garbage() {
        let config = Config::default();
        assert!(resolve_base_url(Some("not a url"), &config).is_err());
    }

    #[test]
    fn test_resolve_config_path_explicit() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/rolodex-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/rolodex-test.toml"));
        Ok(())
    }
}
