use super::{DEFAULT_MENUS_FILE, DEFAULT_NAV_DATA_FILE, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{validate_path, validate_required_field, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based alternative to the command line flags.
///
/// ```toml
/// [source]
/// menus_endpoint = "https://nav.eooce.com/api/menus"
/// cards_endpoint = "https://nav.eooce.com/api/cards"
///
/// [load]
/// output_path = "public/data"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub menus_endpoint: Option<String>,
    pub cards_endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_menus_file")]
    pub menus_file: String,
    #[serde(default = "default_nav_data_file")]
    pub nav_data_file: String,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_menus_file() -> String {
    DEFAULT_MENUS_FILE.to_string()
}

fn default_nav_data_file() -> String {
    DEFAULT_NAV_DATA_FILE.to_string()
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            menus_file: default_menus_file(),
            nav_data_file: default_nav_data_file(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SyncError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for TomlConfig {
    fn menus_endpoint(&self) -> &str {
        self.source.menus_endpoint.as_deref().unwrap_or_default()
    }

    fn cards_endpoint(&self) -> &str {
        self.source.cards_endpoint.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn menus_file(&self) -> &str {
        &self.load.menus_file
    }

    fn nav_data_file(&self) -> &str {
        &self.load.nav_data_file
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let menus = validate_required_field("source.menus_endpoint", &self.source.menus_endpoint)?;
        validate_url("source.menus_endpoint", menus)?;
        let cards = validate_required_field("source.cards_endpoint", &self.source.cards_endpoint)?;
        validate_url("source.cards_endpoint", cards)?;

        validate_path("load.output_path", &self.load.output_path)?;
        validate_path("load.menus_file", &self.load.menus_file)?;
        validate_path("load.nav_data_file", &self.load.nav_data_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_default_load() {
        let config = TomlConfig::from_str(
            r#"
[source]
menus_endpoint = "http://localhost:8080/api/menus"
cards_endpoint = "http://localhost:8080/api/cards"
"#,
        )
        .unwrap();

        assert_eq!(config.menus_endpoint(), "http://localhost:8080/api/menus");
        assert_eq!(config.output_path(), ".");
        assert_eq!(config.menus_file(), "menus.json");
        assert_eq!(config.nav_data_file(), "nav_data.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[source]
menus_endpoint = "https://nav.example.com/api/menus"
cards_endpoint = "https://nav.example.com/api/cards"

[load]
output_path = "public/data"
menus_file = "menu-tree.json"
nav_data_file = "cards.json"
"#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.output_path(), "public/data");
        assert_eq!(config.menus_file(), "menu-tree.json");
        assert_eq!(config.nav_data_file(), "cards.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_endpoint_fails_validation() {
        let config = TomlConfig::from_str(
            r#"
[source]
menus_endpoint = "https://nav.example.com/api/menus"
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(SyncError::MissingConfigError { field }) if field == "source.cards_endpoint"
        ));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            TomlConfig::from_str("[source"),
            Err(SyncError::TomlError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        assert!(matches!(
            TomlConfig::from_file("/nonexistent/nav-sync.toml"),
            Err(SyncError::ConfigError { .. })
        ));
    }
}
