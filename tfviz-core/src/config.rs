//! Explorer configuration — accordion policies and logging, loaded from TOML.
//!
//! ```toml
//! [detail]
//! mode = "exclusive"
//! allow_collapse_last = true
//! expanded = ["notation"]
//!
//! [outline]
//! mode = "independent"
//! expanded = ["Encoder Stack"]
//!
//! [log]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detail::DetailSection;
use crate::disclosure::{DisclosureGroup, DisclosureMode, DisclosurePolicy};
use crate::error::ConfigError;
use crate::outline::Outline;

/// Detail accordion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    pub mode: DisclosureMode,
    pub allow_collapse_last: bool,
    /// Sections open when a component is first shown.
    pub expanded: Vec<DetailSection>,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            mode: DisclosureMode::Exclusive,
            allow_collapse_last: true,
            expanded: vec![DetailSection::Notation],
        }
    }
}

impl DetailConfig {
    pub fn policy(&self) -> DisclosurePolicy {
        DisclosurePolicy {
            mode: self.mode,
            allow_collapse_last: self.allow_collapse_last,
        }
    }

    /// A fresh accordion over all detail sections.
    pub fn build_group(&self) -> Result<DisclosureGroup<DetailSection>, ConfigError> {
        DisclosureGroup::new(
            self.policy(),
            DetailSection::ALL,
            self.expanded.iter().copied(),
        )
        .map_err(|source| ConfigError::Invalid {
            section: "detail",
            source,
        })
    }
}

/// Outline group settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub mode: DisclosureMode,
    pub allow_collapse_last: bool,
    /// Group names expanded at startup.
    pub expanded: Vec<String>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            mode: DisclosureMode::Independent,
            allow_collapse_last: false,
            expanded: vec!["Encoder Stack".to_string()],
        }
    }
}

impl OutlineConfig {
    pub fn policy(&self) -> DisclosurePolicy {
        DisclosurePolicy {
            mode: self.mode,
            allow_collapse_last: self.allow_collapse_last,
        }
    }

    pub fn build_group(&self, outline: &Outline) -> Result<DisclosureGroup<String>, ConfigError> {
        outline
            .disclosure(self.policy(), self.expanded.iter().cloned())
            .map_err(|source| ConfigError::Invalid {
                section: "outline",
                source,
            })
    }
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    /// Log file for the TUI. Defaults to the platform data directory.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub detail: DetailConfig,
    pub outline: OutlineConfig,
    pub log: LogSettings,
}

impl ExplorerConfig {
    /// `<config_dir>/tfviz/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tfviz").join("config.toml"))
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Check that both accordions can be built from these settings.
    pub fn validate(&self, outline: &Outline) -> Result<(), ConfigError> {
        self.detail.build_group()?;
        self.outline.build_group(outline)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::transformer_outline;

    #[test]
    fn defaults_are_valid() {
        let config = ExplorerConfig::default();
        config.validate(&transformer_outline()).unwrap();
        let detail = config.detail.build_group().unwrap();
        assert!(detail.is_expanded(&DetailSection::Notation));
        assert_eq!(detail.mode(), DisclosureMode::Exclusive);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = ExplorerConfig::from_toml("[detail]\nmode = \"independent\"\n").unwrap();
        assert_eq!(config.detail.mode, DisclosureMode::Independent);
        assert_eq!(config.detail.expanded, vec![DetailSection::Notation]);
        assert_eq!(config.outline, OutlineConfig::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = ExplorerConfig::default();
        config.detail.expanded = vec![DetailSection::Formula, DetailSection::KeyPoints];
        config.detail.mode = DisclosureMode::Independent;
        let text = config.to_toml().unwrap();
        assert_eq!(ExplorerConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn exclusive_with_two_sections_is_invalid() {
        let config = ExplorerConfig::from_toml(
            "[detail]\nmode = \"exclusive\"\nexpanded = [\"notation\", \"formula\"]\n",
        )
        .unwrap();
        assert!(matches!(
            config.validate(&transformer_outline()),
            Err(ConfigError::Invalid { section: "detail", .. })
        ));
    }

    #[test]
    fn unknown_outline_group_is_invalid() {
        let config =
            ExplorerConfig::from_toml("[outline]\nexpanded = [\"Decoder Stack\"]\n").unwrap();
        assert!(matches!(
            config.validate(&transformer_outline()),
            Err(ConfigError::Invalid { section: "outline", .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            ExplorerConfig::from_toml("[detail\nmode ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = ExplorerConfig::load(Path::new("/nonexistent/tfviz/config.toml")).unwrap();
        assert_eq!(loaded, ExplorerConfig::default());
    }

    #[test]
    fn load_from_disk() {
        let dir = std::env::temp_dir().join("tfviz_config_test");
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[log]\nlevel = \"debug\"\n").unwrap();

        let loaded = ExplorerConfig::load(&path).unwrap();
        assert_eq!(loaded.log.level, "debug");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
