use crate::config::defaults::{
    default_icon_table, default_priority_order, DEFAULT_ICON, DEFAULT_SOURCE,
    DEFAULT_TIMEOUT_SECONDS,
};
use crate::core::{ConfigProvider, HighlightMarker, IconMap, MatchMode};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_source_location,
    validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub grouping: GroupingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_source")]
    pub source: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingConfig {
    #[serde(default = "default_priority_order")]
    pub priority: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub match_mode: Option<MatchMode>,
    pub highlight_open: Option<String>,
    pub highlight_close: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_icon: Option<String>,
    /// Merged over the built-in icon table.
    pub icons: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
    pub verbose: Option<bool>,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout_seconds: None,
        }
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            priority: default_priority_order(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_source_location("catalog.source", &self.catalog.source)?;

        if let Some(timeout) = self.catalog.timeout_seconds {
            validate_positive_number("catalog.timeout_seconds", timeout, 1)?;
        }

        validate_unique_names("grouping.priority", &self.grouping.priority)?;

        match (&self.search.highlight_open, &self.search.highlight_close) {
            (Some(open), Some(close)) => {
                validate_non_empty_string("search.highlight_open", open)?;
                validate_non_empty_string("search.highlight_close", close)?;
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err(CatalogError::MissingConfigError {
                    field: "search.highlight_close".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(CatalogError::MissingConfigError {
                    field: "search.highlight_open".to_string(),
                })
            }
        }

        if let Some(icon) = &self.display.default_icon {
            validate_non_empty_string("display.default_icon", icon)?;
        }

        Ok(())
    }

    /// Command line flags win over file settings.
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(source) = &cli.source {
            tracing::info!("🔧 Catalog source overridden to: {}", source);
            self.catalog.source = source.clone();
        }
        if let Some(mode) = cli.match_mode {
            tracing::info!("🔧 Match mode overridden to: {:?}", mode);
            self.search.match_mode = Some(mode);
        }
        if cli.verbose {
            self.logging.get_or_insert_with(LoggingConfig::default).verbose = Some(true);
        }
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.catalog.source
    }

    fn priority_order(&self) -> &[String] {
        &self.grouping.priority
    }

    fn match_mode(&self) -> MatchMode {
        self.search.match_mode.unwrap_or_default()
    }

    fn icons(&self) -> IconMap {
        let mut icons = default_icon_table();
        if let Some(overrides) = &self.display.icons {
            icons.extend(overrides.clone());
        }
        let fallback = self.display.default_icon.as_deref().unwrap_or(DEFAULT_ICON);
        IconMap::new(icons, fallback)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn highlight_marker(&self) -> Option<HighlightMarker> {
        match (&self.search.highlight_open, &self.search.highlight_close) {
            (Some(open), Some(close)) => Some(HighlightMarker::new(open.clone(), close.clone())),
            _ => None,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
source = "https://cdn.example.com/product_data_final.json"
timeout_seconds = 10

[grouping]
priority = ["Storage", "Compute"]

[search]
match_mode = "all"
highlight_open = "<mark>"
highlight_close = "</mark>"

[display]
default_icon = "fas fa-box"

[display.icons]
Storage = "fas fa-archive"
Quantum = "fas fa-atom"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.source(), "https://cdn.example.com/product_data_final.json");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.priority_order(), ["Storage", "Compute"]);
        assert_eq!(config.match_mode(), MatchMode::All);
        assert_eq!(
            config.highlight_marker(),
            Some(HighlightMarker::new("<mark>", "</mark>"))
        );
        let icons = config.icons();
        assert_eq!(icons.icon_for("Storage"), "fas fa-archive");
        assert_eq!(icons.icon_for("Quantum"), "fas fa-atom");
        assert_eq!(icons.icon_for("Compute"), "fas fa-server");
        assert_eq!(icons.icon_for("Unknown"), "fas fa-box");
        assert!(config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.source(), "product_data_final.json");
        assert_eq!(config.priority_order().len(), 12);
        assert_eq!(config.priority_order()[11], "Hybrid Cloud");
        assert_eq!(config.match_mode(), MatchMode::Any);
        assert_eq!(config.highlight_marker(), None);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.icons().icon_for("Nothing"), "fas fa-folder");
        assert!(!config.json_logging());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_CATALOG_URL", "https://test.example.com/data.json");

        let toml_content = r#"
[catalog]
source = "${TEST_CATALOG_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.source, "https://test.example.com/data.json");

        std::env::remove_var("TEST_CATALOG_URL");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config =
            TomlConfig::from_toml_str("[catalog]\nsource = \"${SURELY_UNSET_CATALOG_VAR}\"\n")
                .unwrap();
        assert_eq!(config.catalog.source, "${SURELY_UNSET_CATALOG_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[catalog]\nsource = \"ftp://example.com/x.json\"\n")
            .unwrap();
        assert!(bad_url.validate().is_err());

        let duplicate = TomlConfig::from_toml_str("[grouping]\npriority = [\"Storage\", \"Storage\"]\n")
            .unwrap();
        assert!(duplicate.validate().is_err());

        let half_marker = TomlConfig::from_toml_str("[search]\nhighlight_open = \"<b>\"\n").unwrap();
        match half_marker.validate() {
            Err(CatalogError::MissingConfigError { field }) => {
                assert_eq!(field, "search.highlight_close")
            }
            other => panic!("expected missing highlight_close, got {:?}", other),
        }

        let zero_timeout = TomlConfig::from_toml_str("[catalog]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_unknown_match_mode_is_parse_error() {
        let result = TomlConfig::from_toml_str("[search]\nmatch_mode = \"fuzzy\"\n");
        assert!(matches!(
            result,
            Err(CatalogError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nsource = \"data/services.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source(), "data/services.json");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_settings() {
        use clap::Parser;

        let mut config = TomlConfig::from_toml_str(
            "[catalog]\nsource = \"file.json\"\n[search]\nmatch_mode = \"all\"\n",
        )
        .unwrap();
        let cli = crate::config::CliConfig::parse_from([
            "service-catalog",
            "--source",
            "other.json",
            "--verbose",
        ]);

        config.apply_cli_overrides(&cli);

        assert_eq!(config.source(), "other.json");
        assert_eq!(config.match_mode(), MatchMode::All);
        assert!(config.verbose_logging());
    }
}
