//! Configuration path resolution.
//!
//! Resolution order: explicit path → environment variables → XDG config
//! directory → system config directory → none.

use std::path::{Path, PathBuf};

/// The discovered configuration file path and its provenance.
#[derive(Debug, Clone, Default)]
pub struct ResolvedPath {
    /// Path to the reactor configuration (or None if not found).
    pub path: Option<PathBuf>,

    /// Where the configuration was found (for diagnostics).
    pub source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided by the caller.
    Explicit,

    /// Set via environment variable.
    Environment,

    /// Found in the XDG config directory.
    XdgConfig,

    /// Found in /etc/rth/.
    SystemConfig,

    /// No configuration file; caller supplies parameters directly.
    #[default]
    None,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit => write!(f, "explicit path"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::None => write!(f, "none"),
        }
    }
}

/// Environment variable naming a configuration file directly.
const ENV_CONFIG_PATH: &str = "RTH_CONFIG";
/// Environment variable naming a directory to search.
const ENV_CONFIG_DIR: &str = "RTH_CONFIG_DIR";

/// Standard config file names, tried in order within a directory.
const CONFIG_FILENAMES: [&str; 3] = ["reactor.yaml", "reactor.yml", "reactor.json"];

/// Application name for XDG directories.
const APP_NAME: &str = "rth";

/// Resolve the reactor configuration path.
///
/// Resolution order:
/// 1. Explicit path (if provided and present)
/// 2. RTH_CONFIG environment variable (direct path)
/// 3. RTH_CONFIG_DIR environment variable + standard filename
/// 4. XDG config directory (~/.config/rth/)
/// 5. System config (/etc/rth/)
/// 6. None
pub fn resolve_config(explicit: Option<&Path>) -> ResolvedPath {
    if let Some(path) = explicit {
        if path.exists() {
            return ResolvedPath {
                path: Some(path.to_path_buf()),
                source: ConfigSource::Explicit,
            };
        }
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return ResolvedPath {
                path: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        if let Some(path) = first_config_in(Path::new(&config_dir)) {
            return ResolvedPath {
                path: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    if let Some(xdg_config) = dirs::config_dir() {
        if let Some(path) = first_config_in(&xdg_config.join(APP_NAME)) {
            return ResolvedPath {
                path: Some(path),
                source: ConfigSource::XdgConfig,
            };
        }
    }

    if let Some(path) = first_config_in(&system_config_dir()) {
        return ResolvedPath {
            path: Some(path),
            source: ConfigSource::SystemConfig,
        };
    }

    ResolvedPath::default()
}

/// First standard config filename present in a directory.
fn first_config_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// The XDG config directory for this application.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// The system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::Explicit), "explicit path");
        assert_eq!(
            format!("{}", ConfigSource::Environment),
            "environment variable"
        );
        assert_eq!(format!("{}", ConfigSource::XdgConfig), "XDG config");
        assert_eq!(format!("{}", ConfigSource::SystemConfig), "system config");
        assert_eq!(format!("{}", ConfigSource::None), "none");
    }

    #[test]
    fn test_system_config_dir() {
        assert_eq!(system_config_dir(), PathBuf::from("/etc/rth"));
    }

    #[test]
    fn test_xdg_config_dir_ends_with_app_name() {
        if let Some(path) = xdg_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }

    #[test]
    fn test_explicit_missing_path_falls_through() {
        // A nonexistent explicit path must not be returned as Explicit.
        let resolved = resolve_config(Some(Path::new("/definitely/not/here/reactor.yaml")));
        assert_ne!(resolved.source, ConfigSource::Explicit);
    }
}
