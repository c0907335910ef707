//! TOML configuration for graph metadata.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use nodeviz_error::{Error, Result};

/// Commented configuration template emitted by `--genconfig`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Default configuration for nodeviz

# Graph metadata. Command-line flags override these values.
[graph]
name = "MyGraph"
# background_color = "lightgray"
# font_name = "Arial"

# Node record file format: name|path|synopsis|url
# Edge record file format: from,to[,relation,color,style]
"#;

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub graph: GraphSection,
}

/// The `[graph]` section. Every value is optional; unset values fall back
/// to command-line defaults.
#[derive(Debug, Default, Deserialize)]
pub struct GraphSection {
    pub name: Option<String>,
    pub background_color: Option<String>,
    pub font_name: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::from(e)
                .with_operation("config::from_path")
                .with_context("file", path.display().to_string())
        })?;
        let config = toml::from_str(&text).map_err(|e| {
            Error::config_invalid(e.to_string())
                .with_operation("config::from_path")
                .with_context("file", path.display().to_string())
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodeviz_error::ErrorKind;

    #[test]
    fn test_default_template_parses() {
        let config: FileConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.graph.name.as_deref(), Some("MyGraph"));
        assert_eq!(config.graph.background_color, None);
        assert_eq!(config.graph.font_name, None);
    }

    #[test]
    fn test_full_graph_section() {
        let config: FileConfig = toml::from_str(
            r#"
            [graph]
            name = "Deps"
            background_color = "white"
            font_name = "Helvetica"
            "#,
        )
        .unwrap();
        assert_eq!(config.graph.name.as_deref(), Some("Deps"));
        assert_eq!(config.graph.background_color.as_deref(), Some("white"));
        assert_eq!(config.graph.font_name.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.graph.name, None);
    }

    #[test]
    fn test_missing_file() {
        let err = FileConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph\nname=").unwrap();

        let err = FileConfig::from_path(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
