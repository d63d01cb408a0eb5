//! Human-readable rendering of calculation results.
//!
//! The metric set is open, so unit selection pattern-matches on key
//! substrings rather than an enum. Precedence is fixed: temperature,
//! then pressure, then reynolds, then coefficient, then a generic
//! scientific fallback. A composite key like `pressure_coefficient`
//! therefore renders as a pressure.

use rth_config::validate::{expected_temp_rise, validate};
use rth_config::ReactorConfig;

const HEADER: &str = "Reactor Fluid Dynamics Results";

/// Format calculation results for display.
///
/// Produces a fixed two-line header followed by one line per metric, in
/// the mapping's iteration order. Never fails; non-finite values render
/// through standard float formatting.
pub fn format_results<'a>(results: impl IntoIterator<Item = (&'a str, f64)>) -> String {
    let mut lines = vec![HEADER.to_string(), "=".repeat(40)];

    for (key, value) in results {
        let label = title_case(key);
        let lower = key.to_ascii_lowercase();

        let line = if lower.contains("temperature") {
            format!("{label}: {value:.2} K ({:.2} °C)", value - 273.15)
        } else if lower.contains("pressure") {
            format!("{label}: {value:.2e} Pa ({:.2} bar)", value / 1e5)
        } else if lower.contains("reynolds") {
            format!("{label}: {value:.2e}")
        } else if lower.contains("coefficient") {
            format!("{label}: {value:.2} W/m²·K")
        } else {
            format!("{label}: {value:.2e}")
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// Underscores to spaces, each word capitalized.
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comparison-only report across configurations.
///
/// Fallback mode for when the external calculator is absent: per
/// configuration, the expected coolant temperature rise from the thermal
/// balance and the validation verdict.
pub fn comparison_table(configs: &[(&str, &ReactorConfig)]) -> String {
    let mut lines = vec![
        format!(
            "{:<24} {:<12} {:<16} {:<10} {}",
            "Configuration", "Power (MW)", "Temp Rise (K)", "Status", "Notes"
        ),
        "-".repeat(80),
    ];

    for (label, config) in configs {
        let rise = expected_temp_rise(config);
        let report = validate(config);

        let status = if report.is_valid(false) {
            "valid"
        } else {
            "invalid"
        };
        let errors = report.errors().count();
        let warnings = report.warnings().count();
        let notes = if errors > 0 {
            format!("{errors} error(s)")
        } else if warnings > 0 {
            format!("{warnings} warning(s)")
        } else {
            String::new()
        };

        lines.push(format!(
            "{:<24} {:<12.2} {:<16.1} {:<10} {}",
            label,
            config.reactor_power / 1e6,
            rise,
            status,
            notes
        ));
    }

    lines.join("\n")
}
