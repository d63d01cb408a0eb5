//! Loading and saving reactor configurations.
//!
//! Two backends map 1:1 onto the configuration field map: a YAML format
//! for human-edited files and strict JSON. The backend is selected by file
//! extension; both preserve field declaration order and emit explicit
//! nulls for absent optionals so `load(save(c)) == c` holds field-for-field.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::ReactorConfig;

/// Supported on-disk encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Determine the format from a file extension.
    ///
    /// `.yaml` and `.yml` select YAML, `.json` selects JSON; anything else
    /// fails with `UnsupportedFormat`.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => write!(f, "yaml"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Load a reactor configuration from a YAML or JSON file.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<ReactorConfig> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;

    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_document(&content, format, path)?;
    debug!(path = %path.display(), %format, "loaded reactor configuration");
    Ok(config)
}

/// Save a reactor configuration to the backend implied by the target
/// extension.
pub fn save(config: &ReactorConfig, path: impl AsRef<Path>) -> ConfigResult<()> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let rendered = to_string(config, format)?;

    fs::write(path, rendered).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), %format, "saved reactor configuration");
    Ok(())
}

/// Parse a configuration document from a string.
pub fn parse_str(input: &str, format: Format) -> ConfigResult<ReactorConfig> {
    parse_document(input, format, Path::new(format!("<{format}>").as_str()))
}

/// Render a configuration to a string in the given format.
pub fn to_string(config: &ReactorConfig, format: Format) -> ConfigResult<String> {
    let map = config.to_map()?;
    let document = Value::Object(map);

    let rendered = match format {
        // serde_yaml already terminates with a newline.
        Format::Yaml => serde_yaml::to_string(&document).map_err(|e| ConfigError::ParseError {
            path: Path::new("<yaml>").to_path_buf(),
            message: e.to_string(),
        })?,
        Format::Json => {
            let mut text =
                serde_json::to_string_pretty(&document).map_err(|e| ConfigError::ParseError {
                    path: Path::new("<json>").to_path_buf(),
                    message: e.to_string(),
                })?;
            text.push('\n');
            text
        }
    };

    Ok(rendered)
}

/// Parse a document into a field map, then delegate to strict
/// reconstruction. Type errors are classified per field rather than
/// surfaced as raw parser output.
fn parse_document(content: &str, format: Format, path: &Path) -> ConfigResult<ReactorConfig> {
    let value: Value = match format {
        Format::Yaml => {
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        Format::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
    };

    let map: &Map<String, Value> = value.as_object().ok_or_else(|| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: "expected a mapping at the top level".to_string(),
    })?;

    ReactorConfig::from_map(map)
}
