//! The reactor configuration record.
//!
//! `ReactorConfig` is pure data: it is never mutated by a callee, and a
//! modified variant is built by cloning with struct-update syntax. Range
//! checking lives in [`crate::validate`]; the only invariant enforced at
//! construction time is that every numeric field is a finite real number.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, ConfigResult};

/// Field names in declaration order. Serialized documents and field maps
/// follow this order exactly.
pub const FIELD_NAMES: [&str; 8] = [
    "coolant_inlet_temp",
    "coolant_flow_rate",
    "reactor_power",
    "core_height",
    "core_diameter",
    "pressure",
    "name",
    "description",
];

/// Reactor coolant-loop and core-geometry parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// Coolant inlet temperature (Kelvin).
    pub coolant_inlet_temp: f64,

    /// Coolant mass flow rate (kg/s).
    pub coolant_flow_rate: f64,

    /// Thermal power output (Watts).
    pub reactor_power: f64,

    /// Height of the reactor core (meters).
    pub core_height: f64,

    /// Diameter of the reactor core (meters).
    pub core_diameter: f64,

    /// System pressure (Pascals).
    pub pressure: f64,

    /// Optional display label.
    #[serde(default)]
    pub name: Option<String>,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl ReactorConfig {
    /// Checked construction from an explicit field set.
    ///
    /// Fails with `InvalidField` if any numeric field is NaN or infinite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coolant_inlet_temp: f64,
        coolant_flow_rate: f64,
        reactor_power: f64,
        core_height: f64,
        core_diameter: f64,
        pressure: f64,
        name: Option<String>,
        description: Option<String>,
    ) -> ConfigResult<Self> {
        let config = ReactorConfig {
            coolant_inlet_temp,
            coolant_flow_rate,
            reactor_power,
            core_height,
            core_diameter,
            pressure,
            name,
            description,
        };
        for (field, value) in config.numeric_fields() {
            check_finite(field, value)?;
        }
        Ok(config)
    }

    /// The six required numeric fields in declaration order.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("coolant_inlet_temp", self.coolant_inlet_temp),
            ("coolant_flow_rate", self.coolant_flow_rate),
            ("reactor_power", self.reactor_power),
            ("core_height", self.core_height),
            ("core_diameter", self.core_diameter),
            ("pressure", self.pressure),
        ]
    }

    /// Convert to an ordered field map.
    ///
    /// Keys appear in declaration order; absent optional fields are emitted
    /// as explicit nulls rather than omitted, so round-trips stay exact.
    pub fn to_map(&self) -> ConfigResult<Map<String, Value>> {
        let mut map = Map::with_capacity(FIELD_NAMES.len());
        for (field, value) in self.numeric_fields() {
            check_finite(field, value)?;
            let number = serde_json::Number::from_f64(value).ok_or_else(|| {
                ConfigError::InvalidField {
                    field: field.to_string(),
                    message: format!("cannot represent {value} as a document number"),
                }
            })?;
            map.insert(field.to_string(), Value::Number(number));
        }
        map.insert("name".to_string(), optional_text(&self.name));
        map.insert("description".to_string(), optional_text(&self.description));
        Ok(map)
    }

    /// Reconstruct from a field map.
    ///
    /// Strictness is deliberate: unknown keys are rejected to catch typos,
    /// required keys must be present, and values must already have the
    /// right type (a numeric field supplied as a string does not coerce).
    pub fn from_map(map: &Map<String, Value>) -> ConfigResult<Self> {
        for key in map.keys() {
            if !FIELD_NAMES.contains(&key.as_str()) {
                return Err(ConfigError::UnknownField(key.clone()));
            }
        }

        Ok(ReactorConfig {
            coolant_inlet_temp: required_number(map, "coolant_inlet_temp")?,
            coolant_flow_rate: required_number(map, "coolant_flow_rate")?,
            reactor_power: required_number(map, "reactor_power")?,
            core_height: required_number(map, "core_height")?,
            core_diameter: required_number(map, "core_diameter")?,
            pressure: required_number(map, "pressure")?,
            name: optional_string(map, "name")?,
            description: optional_string(map, "description")?,
        })
    }
}

fn check_finite(field: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidField {
            field: field.to_string(),
            message: format!("must be a finite number, got {value}"),
        })
    }
}

fn optional_text(value: &Option<String>) -> Value {
    match value {
        Some(text) => Value::String(text.clone()),
        None => Value::Null,
    }
}

fn required_number(map: &Map<String, Value>, field: &str) -> ConfigResult<f64> {
    let value = map
        .get(field)
        .ok_or_else(|| ConfigError::MissingField(field.to_string()))?;
    let number = value.as_f64().ok_or_else(|| ConfigError::TypeMismatch {
        field: field.to_string(),
        message: format!("expected a number, got {}", value_kind(value)),
    })?;
    check_finite(field, number)?;
    Ok(number)
}

fn optional_string(map: &Map<String, Value>, field: &str) -> ConfigResult<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(ConfigError::TypeMismatch {
            field: field.to_string(),
            message: format!("expected a string or null, got {}", value_kind(other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
