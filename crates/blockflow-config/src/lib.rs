use blockflow_engine::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "BLOCKFLOW_CONFIG";

pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for the upload server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Uploads larger than this are rejected before rendering.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Contents of `config.toml`: a `[render]` and a `[server]` table, both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub server: ServerConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config file, falling back to defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    /// `$BLOCKFLOW_CONFIG` if set, else `~/.config/blockflow/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(CONFIG_ENV).ok().as_deref())
    }

    fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            return Self::expand_path(&path).unwrap_or(path);
        }
        let config_dir = shellexpand::tilde("~/.config/blockflow");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockflow_engine::{BorderStyle, OutputFormat, PaletteColor};
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_path() {
        let config_path = Config::resolve_config_path(None);
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/blockflow/config.toml"));
    }

    #[test]
    fn test_override_config_path() {
        let config_path = Config::resolve_config_path(Some("/etc/blockflow.toml"));
        assert_eq!(config_path, PathBuf::from("/etc/blockflow.toml"));
    }

    #[test]
    fn test_empty_override_uses_default() {
        let config_path = Config::resolve_config_path(Some(""));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_override_with_env_var() {
        unsafe {
            env::set_var("BLOCKFLOW_TEST_ROOT", "/test/env/path");
        }

        let config_path = Config::resolve_config_path(Some("$BLOCKFLOW_TEST_ROOT/flow.toml"));
        assert_eq!(config_path, PathBuf::from("/test/env/path/flow.toml"));

        unsafe {
            env::remove_var("BLOCKFLOW_TEST_ROOT");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"
[render]
line_width = 60
border = "unicode"
output = "html"
palette = ["bright_red", "cyan"]
comment_color = "dark_gray"

[server]
port = 9000
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.render.line_width, 60);
        assert_eq!(config.render.indent_unit, 4);
        assert_eq!(config.render.border, BorderStyle::Unicode);
        assert_eq!(config.render.output, OutputFormat::Html);
        assert_eq!(
            config.render.palette.colors(),
            &[PaletteColor::BrightRed, PaletteColor::Cyan]
        );
        assert_eq!(config.render.comment_color, Some(PaletteColor::DarkGray));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_empty_palette_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[render]\npalette = []\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("at least one color"));
    }

    #[test]
    fn test_unreadable_config_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file.
        let err = Config::load_from_path(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }
}
