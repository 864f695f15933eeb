//! Reports module - named transformations from a dataset to a summary table
//!
//! Reports are looked up by case-insensitive name in a static registry.
//! Adding a report means implementing [`Report`] and adding a registry entry.

mod performance;

pub use performance::PerformanceReport;

use serde::Serialize;

use crate::data::Dataset;
use crate::error::{AnalyzerError, Result};

/// One line of a report: a group label and its rounded average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub position: String,
    pub average: f64,
}

impl ReportRow {
    pub fn new(position: impl Into<String>, average: f64) -> Self {
        Self {
            position: position.into(),
            average,
        }
    }
}

pub trait Report {
    /// Registry key, lowercase.
    fn name(&self) -> &'static str;

    /// Column headers for table output.
    fn headers(&self) -> &'static [&'static str];

    fn generate(&self, data: &Dataset) -> anyhow::Result<Vec<ReportRow>>;
}

type ReportFactory = fn() -> Box<dyn Report>;

fn performance() -> Box<dyn Report> {
    Box::new(PerformanceReport)
}

const REGISTRY: &[(&str, ReportFactory)] = &[("performance", performance)];

/// Names of every registered report.
pub fn available_reports() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Resolve a report by name, ignoring case.
pub fn get_report(name: &str) -> Result<Box<dyn Report>> {
    let key = name.to_lowercase();
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == key)
        .map(|(_, factory)| factory())
        .ok_or_else(|| {
            AnalyzerError::InvalidInput(format!(
                "report '{name}' not found (available: {})",
                available_reports().join(", ")
            ))
        })
}

/// Round half away from zero to the given number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
