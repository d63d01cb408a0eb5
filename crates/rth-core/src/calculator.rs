//! The external calculator boundary.
//!
//! The fluid-dynamics solver is a separately compiled native module; this
//! crate only defines the narrow data interface to it. Implementations of
//! [`Calculator`] adapt whatever module is actually installed; nothing
//! here assumes one is available.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use rth_config::{validate_strict, ConfigError, ReactorConfig};

/// Metric names the external calculator is known to produce. The set is
/// open: adapters may return additional metrics and consumers must not
/// assume it is closed.
pub mod metrics {
    pub const OUTLET_TEMPERATURE: &str = "outlet_temperature";
    pub const PRESSURE_DROP: &str = "pressure_drop";
    pub const REYNOLDS_NUMBER: &str = "reynolds_number";
    pub const HEAT_TRANSFER_COEFFICIENT: &str = "heat_transfer_coefficient";
    pub const MAX_FUEL_TEMPERATURE: &str = "max_fuel_temperature";
}

/// Errors from the external computation boundary.
#[derive(Debug, Error)]
pub enum ComputationError {
    /// The calculator module is not installed or could not be loaded.
    #[error("calculator module not available: {0}")]
    Unavailable(String),

    /// The module was invoked but the computation failed.
    #[error("calculation failed: {0}")]
    Failed(String),
}

/// Capability interface to the external thermal-hydraulics computation.
pub trait Calculator {
    /// Run the full fluid-dynamics analysis for one configuration.
    fn calculate(&self, config: &ReactorConfig) -> Result<CalcResults, ComputationError>;
}

/// Open, insertion-ordered mapping of metric name to value.
///
/// Owned by the caller once the calculator returns it. Serializes as a
/// plain JSON object so adapters in other languages can produce it
/// directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcResults {
    entries: Vec<(String, f64)>,
}

impl CalcResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a metric, replacing any previous value under the same name
    /// without disturbing its position.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for CalcResults {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut results = CalcResults::new();
        for (name, value) in iter {
            results.insert(name, value);
        }
        results
    }
}

impl Serialize for CalcResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CalcResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultsVisitor;

        impl<'de> Visitor<'de> for ResultsVisitor {
            type Value = CalcResults;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of metric name to number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut results = CalcResults::new();
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    results.insert(name, value);
                }
                Ok(results)
            }
        }

        deserializer.deserialize_map(ResultsVisitor)
    }
}

/// Errors from the validate-then-compute driver.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ConfigError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Strictly validate a configuration, then run it through the calculator.
///
/// Only validated configurations cross the module boundary; validation
/// warnings fail here because an unattended analysis has nobody to read
/// them.
pub fn analyze(
    calculator: &dyn Calculator,
    config: &ReactorConfig,
) -> Result<CalcResults, AnalysisError> {
    validate_strict(config)?;
    let results = calculator.calculate(config)?;
    debug!(metrics = results.len(), "calculation complete");
    Ok(results)
}
