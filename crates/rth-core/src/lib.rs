//! Reactor thermal-hydraulics core library.
//!
//! This crate owns the boundary to the external fluid-dynamics calculator
//! and the presentation of its results:
//! - The `Calculator` capability trait and open `CalcResults` mapping
//! - Strict-validate-then-compute analysis driver
//! - Human-readable result formatting and the comparison fallback
//! - Stable exit codes for CLI wrappers

pub mod calculator;
pub mod exit_codes;
pub mod report;

pub use calculator::{analyze, AnalysisError, CalcResults, Calculator, ComputationError};
pub use exit_codes::ExitCode;
pub use report::{comparison_table, format_results};
