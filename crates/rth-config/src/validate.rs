//! Physical-range and safety-margin validation.
//!
//! Each numeric field is checked independently against fixed bounds for
//! compact liquid-metal-cooled reactors, in declaration order. Diagnostics
//! carry a machine-checkable severity instead of being bare strings;
//! warnings never fail non-strict validation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::ReactorConfig;

/// Absolute minimum coolant temperature (coolant freezing), Kelvin.
pub const MIN_TEMP: f64 = 273.15;
/// Maximum reasonable coolant temperature, Kelvin.
pub const MAX_TEMP: f64 = 1500.0;

/// Minimum practical mass flow rate, kg/s.
pub const MIN_FLOW_RATE: f64 = 0.1;
/// Maximum reasonable mass flow rate, kg/s.
pub const MAX_FLOW_RATE: f64 = 1000.0;

/// Minimum useful thermal power, Watts.
pub const MIN_POWER: f64 = 1e3;
/// Maximum reasonable thermal power, Watts.
pub const MAX_POWER: f64 = 1e8;

/// Minimum practical core dimension, meters.
pub const MIN_DIMENSION: f64 = 0.01;
/// Maximum reasonable core dimension, meters.
pub const MAX_DIMENSION: f64 = 10.0;

/// Minimum practical system pressure, Pascals.
pub const MIN_PRESSURE: f64 = 1e3;
/// Maximum reasonable system pressure, Pascals.
pub const MAX_PRESSURE: f64 = 1e8;

/// Assumed coolant specific heat (liquid sodium), J/(kg·K). A fixed
/// physical constant of the model, not user-configurable.
pub const COOLANT_SPECIFIC_HEAT: f64 = 1270.0;

/// Inlet temperatures below this are unusual for liquid metal coolants.
const LOW_TEMP_WARNING: f64 = 400.0;

/// Expected coolant temperature rises above this trigger a warning.
const MAX_TEMP_RISE: f64 = 200.0;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding tied to a configuration field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The accumulated outcome of validating one configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Diagnostics in validation order: per-field checks in field
    /// declaration order, thermal-balance check last. Errors and warnings
    /// interleave per field as encountered.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Whether the configuration passed.
    ///
    /// Non-strict: true iff no error-severity diagnostics exist. Strict:
    /// true iff the report is entirely empty (warnings also fail).
    pub fn is_valid(&self, strict: bool) -> bool {
        if strict {
            self.diagnostics.is_empty()
        } else {
            self.errors().next().is_none()
        }
    }

    /// Error-severity diagnostics in report order.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Warning-severity diagnostics in report order.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Messages as plain strings, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.message.clone()).collect()
    }

    fn error(&mut self, field: &str, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            field: field.to_string(),
            message,
        });
    }

    fn warning(&mut self, field: &str, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            field: field.to_string(),
            message,
        });
    }
}

/// Expected coolant temperature rise across the core, Kelvin.
///
/// Computed unconditionally, matching the reference behavior: a
/// non-positive flow rate yields an infinite rise, and the flow-rate bound
/// check reports the underlying error in the same pass.
pub fn expected_temp_rise(config: &ReactorConfig) -> f64 {
    config.reactor_power / (config.coolant_flow_rate * COOLANT_SPECIFIC_HEAT)
}

/// Validate a reactor configuration against physical bounds.
///
/// Pure function of its input: validating the same configuration twice
/// yields identical reports.
pub fn validate(config: &ReactorConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    // Coolant inlet temperature. The low-temperature soft zone is layered
    // on top of the hard minimum: only one of the two fires below MAX_TEMP.
    let temp = config.coolant_inlet_temp;
    if temp < MIN_TEMP {
        report.error(
            "coolant_inlet_temp",
            format!("Coolant inlet temperature ({temp}K) below minimum ({MIN_TEMP}K)"),
        );
    } else if temp < LOW_TEMP_WARNING {
        report.warning(
            "coolant_inlet_temp",
            format!("Coolant inlet temperature ({temp}K) is unusually low for liquid metal coolants"),
        );
    }
    if temp > MAX_TEMP {
        report.error(
            "coolant_inlet_temp",
            format!("Coolant inlet temperature ({temp}K) exceeds maximum ({MAX_TEMP}K)"),
        );
    }

    // Coolant flow rate.
    let flow = config.coolant_flow_rate;
    if flow < MIN_FLOW_RATE {
        report.error(
            "coolant_flow_rate",
            format!("Coolant flow rate ({flow} kg/s) below minimum ({MIN_FLOW_RATE} kg/s)"),
        );
    }
    if flow > MAX_FLOW_RATE {
        report.error(
            "coolant_flow_rate",
            format!("Coolant flow rate ({flow} kg/s) exceeds maximum ({MAX_FLOW_RATE} kg/s)"),
        );
    }

    // Reactor power.
    let power = config.reactor_power;
    if power < MIN_POWER {
        report.error(
            "reactor_power",
            format!("Reactor power ({power} W) below minimum ({MIN_POWER} W)"),
        );
    }
    if power > MAX_POWER {
        report.error(
            "reactor_power",
            format!("Reactor power ({power} W) exceeds maximum ({MAX_POWER} W)"),
        );
    }

    // Core geometry.
    let height = config.core_height;
    if height < MIN_DIMENSION {
        report.error(
            "core_height",
            format!("Core height ({height} m) below minimum ({MIN_DIMENSION} m)"),
        );
    }
    if height > MAX_DIMENSION {
        report.error(
            "core_height",
            format!("Core height ({height} m) exceeds maximum ({MAX_DIMENSION} m)"),
        );
    }

    let diameter = config.core_diameter;
    if diameter < MIN_DIMENSION {
        report.error(
            "core_diameter",
            format!("Core diameter ({diameter} m) below minimum ({MIN_DIMENSION} m)"),
        );
    }
    if diameter > MAX_DIMENSION {
        report.error(
            "core_diameter",
            format!("Core diameter ({diameter} m) exceeds maximum ({MAX_DIMENSION} m)"),
        );
    }

    // System pressure.
    let pressure = config.pressure;
    if pressure < MIN_PRESSURE {
        report.error(
            "pressure",
            format!("System pressure ({pressure} Pa) below minimum ({MIN_PRESSURE} Pa)"),
        );
    }
    if pressure > MAX_PRESSURE {
        report.error(
            "pressure",
            format!("System pressure ({pressure} Pa) exceeds maximum ({MAX_PRESSURE} Pa)"),
        );
    }

    // Thermal balance. Always a warning, always last.
    let rise = expected_temp_rise(config);
    if rise > MAX_TEMP_RISE {
        report.warning(
            "thermal_balance",
            format!("Large temperature rise expected ({rise:.1}K). Consider increasing flow rate."),
        );
    }

    debug!(
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "validated reactor configuration"
    );

    report
}

/// Fail-fast strict validation.
///
/// Distinct entry point from [`validate`]: any diagnostic, warning
/// included, fails with `ValidationFailed` carrying the message list.
pub fn validate_strict(config: &ReactorConfig) -> ConfigResult<()> {
    let report = validate(config);
    if report.is_valid(true) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            messages: report.messages(),
        })
    }
}
