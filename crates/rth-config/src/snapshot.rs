//! Configuration snapshots for reproducible analysis runs.
//!
//! A snapshot freezes the provenance of a loaded configuration (path,
//! source, content hash) plus its key values, so a calculation result can
//! be traced back to the exact inputs that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::ReactorConfig;
use crate::resolve::ConfigSource;

/// A frozen record of where a configuration came from and what it said.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Path the configuration was loaded from, if any.
    #[serde(default)]
    pub path: Option<String>,

    /// How the configuration was discovered.
    pub source: String,

    /// SHA-256 hash of the raw document content, if loaded from a file.
    #[serde(default)]
    pub content_hash: Option<String>,

    /// Key parameter values for quick reference.
    pub summary: ConfigSummary,
}

/// Key parameter values captured at snapshot time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub name: Option<String>,
    pub reactor_power_mw: f64,
    pub coolant_inlet_temp_k: f64,
    pub coolant_flow_rate_kg_s: f64,
    pub pressure_bar: f64,
}

impl ConfigSnapshot {
    /// Capture a snapshot of a loaded configuration.
    pub fn capture(
        config: &ReactorConfig,
        path: Option<&std::path::Path>,
        source: &ConfigSource,
        raw_content: Option<&str>,
    ) -> Self {
        ConfigSnapshot {
            timestamp: Utc::now(),
            path: path.map(|p| p.display().to_string()),
            source: source.to_string(),
            content_hash: raw_content.map(hash_content),
            summary: ConfigSummary {
                name: config.name.clone(),
                reactor_power_mw: config.reactor_power / 1e6,
                coolant_inlet_temp_k: config.coolant_inlet_temp,
                coolant_flow_rate_kg_s: config.coolant_flow_rate,
                pressure_bar: config.pressure / 1e5,
            },
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether two snapshots were taken from the same document content.
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        match (&self.content_hash, &other.content_hash) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Short identifier: first 12 hex chars of the content hash.
    pub fn short_id(&self) -> Option<&str> {
        self.content_hash
            .as_deref()
            .map(|h| &h[..12.min(h.len())])
    }
}

/// Hash content with SHA-256 and return a hex string.
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReactorConfig {
        ReactorConfig {
            coolant_inlet_temp: 600.0,
            coolant_flow_rate: 10.0,
            reactor_power: 2e6,
            core_height: 2.0,
            core_diameter: 0.5,
            pressure: 1e7,
            name: Some("Snapshot Reactor".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_capture_summary_values() {
        let snapshot = ConfigSnapshot::capture(&sample(), None, &ConfigSource::None, None);
        assert_eq!(snapshot.summary.reactor_power_mw, 2.0);
        assert_eq!(snapshot.summary.pressure_bar, 100.0);
        assert_eq!(snapshot.summary.name.as_deref(), Some("Snapshot Reactor"));
        assert!(snapshot.content_hash.is_none());
        assert!(snapshot.short_id().is_none());
    }

    #[test]
    fn test_hash_is_deterministic() {
        let a = hash_content("coolant_inlet_temp: 600.0\n");
        let b = hash_content("coolant_inlet_temp: 600.0\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_matches_compares_content_hashes() {
        let config = sample();
        let raw = "reactor_power: 2000000.0\n";
        let s1 = ConfigSnapshot::capture(&config, None, &ConfigSource::Explicit, Some(raw));
        let s2 = ConfigSnapshot::capture(&config, None, &ConfigSource::Environment, Some(raw));
        assert!(s1.matches(&s2));
        assert_eq!(s1.short_id().map(str::len), Some(12));

        let s3 = ConfigSnapshot::capture(&config, None, &ConfigSource::Explicit, Some("other"));
        assert!(!s1.matches(&s3));
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot =
            ConfigSnapshot::capture(&sample(), None, &ConfigSource::Explicit, Some("raw"));
        let json = snapshot.to_json().expect("serialize");
        let restored = ConfigSnapshot::from_json(&json).expect("deserialize");
        assert!(snapshot.matches(&restored));
        assert_eq!(restored.source, "explicit path");
    }
}
