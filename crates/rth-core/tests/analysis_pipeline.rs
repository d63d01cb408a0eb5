//! End-to-end pipeline tests: load a config file, validate, run a stub
//! calculator, and render the results.

use rth_core::calculator::metrics;
use rth_core::{analyze, AnalysisError, CalcResults, Calculator, ComputationError, ExitCode};
use rth_config::{save, ConfigError, ReactorConfig};
use tempfile::TempDir;

/// Stand-in for the external native module.
struct StubCalculator;

impl Calculator for StubCalculator {
    fn calculate(&self, config: &ReactorConfig) -> Result<CalcResults, ComputationError> {
        // Outlet temperature from the same thermal balance the validator
        // uses; the remaining metrics are canned.
        let rise = config.reactor_power / (config.coolant_flow_rate * 1270.0);
        let mut results = CalcResults::new();
        results.insert(metrics::OUTLET_TEMPERATURE, config.coolant_inlet_temp + rise);
        results.insert(metrics::PRESSURE_DROP, 15420.5);
        results.insert(metrics::REYNOLDS_NUMBER, 48532.3);
        results.insert(metrics::HEAT_TRANSFER_COEFFICIENT, 8745.2);
        results.insert(metrics::MAX_FUEL_TEMPERATURE, 892.1);
        Ok(results)
    }
}

struct AbsentCalculator;

impl Calculator for AbsentCalculator {
    fn calculate(&self, _config: &ReactorConfig) -> Result<CalcResults, ComputationError> {
        Err(ComputationError::Unavailable(
            "native module not installed".to_string(),
        ))
    }
}

fn nominal() -> ReactorConfig {
    ReactorConfig {
        coolant_inlet_temp: 600.0,
        coolant_flow_rate: 10.0,
        reactor_power: 1e6,
        core_height: 2.0,
        core_diameter: 0.5,
        pressure: 1e7,
        name: Some("Pipeline Reactor".to_string()),
        description: None,
    }
}

#[test]
fn test_load_analyze_format() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("reactor.yaml");
    save(&nominal(), &path).expect("save");

    let config = rth_config::load(&path).expect("load");
    let results = analyze(&StubCalculator, &config).expect("analyze");

    let expected_outlet = 600.0 + 1e6 / (10.0 * 1270.0);
    let outlet = results.get(metrics::OUTLET_TEMPERATURE).expect("outlet");
    assert!((outlet - expected_outlet).abs() < 1e-9);

    let rendered = rth_core::format_results(results.iter());
    assert!(rendered.starts_with("Reactor Fluid Dynamics Results\n"));
    assert!(rendered.contains("Outlet Temperature:"));
    assert!(rendered.contains("Max Fuel Temperature: 892.10 K"));
}

#[test]
fn test_pipeline_failure_exit_codes() {
    // Load failure.
    let load_err = rth_config::load("missing/reactor.yaml").expect_err("missing file");
    assert_eq!(ExitCode::from(&load_err), ExitCode::LoadError);

    // Validation failure (warning under strict analysis).
    let chilly = ReactorConfig {
        coolant_inlet_temp: 350.0,
        ..nominal()
    };
    let err = analyze(&StubCalculator, &chilly).expect_err("strict validation fails");
    assert!(matches!(
        err,
        AnalysisError::Validation(ConfigError::ValidationFailed { .. })
    ));
    assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

    // Missing external module.
    let err = analyze(&AbsentCalculator, &nominal()).expect_err("module absent");
    assert_eq!(ExitCode::from(&err), ExitCode::CalculatorMissing);
}

#[test]
fn test_comparison_fallback_when_calculator_absent() {
    let base = nominal();
    if analyze(&AbsentCalculator, &base).is_err() {
        let sweep: Vec<ReactorConfig> = [0.5e6, 1.0e6, 5.0e6, 10.0e6]
            .iter()
            .map(|&power| ReactorConfig {
                reactor_power: power,
                name: None,
                ..base.clone()
            })
            .collect();
        let labeled: Vec<(String, &ReactorConfig)> = sweep
            .iter()
            .enumerate()
            .map(|(i, c)| (format!("sweep-{i}"), c))
            .collect();
        let rows: Vec<(&str, &ReactorConfig)> = labeled
            .iter()
            .map(|(label, config)| (label.as_str(), *config))
            .collect();

        let table = rth_core::comparison_table(&rows);
        assert_eq!(table.lines().count(), 2 + sweep.len());
        assert!(table.contains("sweep-3"));
    } else {
        panic!("absent calculator must not produce results");
    }
}
