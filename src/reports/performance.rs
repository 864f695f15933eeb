//! Performance Report
//! Average performance score per position, highest first.

use polars::prelude::*;
use tracing::debug;

use super::{round_to, Report, ReportRow};
use crate::data::{Dataset, Row};

const POSITION: &str = "position";
const PERFORMANCE: &str = "performance";
const AVERAGE: &str = "average";

/// Groups rows by position and averages their performance.
pub struct PerformanceReport;

impl PerformanceReport {
    /// Extract a (position, score) pair, or `None` for rows that cannot count.
    fn parse_row(row: &Row) -> Option<(String, f64)> {
        let position = row.get(POSITION)?.trim();
        let raw = row.get(PERFORMANCE)?.trim();
        if position.is_empty() || raw.is_empty() {
            return None;
        }

        let score: f64 = raw.parse().ok()?;
        score.is_finite().then(|| (position.to_string(), score))
    }
}

impl Report for PerformanceReport {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn headers(&self) -> &'static [&'static str] {
        &["Position", "Average Performance"]
    }

    fn generate(&self, data: &Dataset) -> anyhow::Result<Vec<ReportRow>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let mut positions: Vec<String> = Vec::with_capacity(data.len());
        let mut scores: Vec<f64> = Vec::with_capacity(data.len());

        for row in data.rows() {
            if let Some((position, score)) = Self::parse_row(row) {
                positions.push(position);
                scores.push(score);
            }
        }

        let skipped = data.len() - positions.len();
        if skipped > 0 {
            debug!(skipped, "ignored rows without a usable position or score");
        }
        if positions.is_empty() {
            return Ok(Vec::new());
        }

        let df = DataFrame::new(vec![
            Column::new(POSITION.into(), positions),
            Column::new(PERFORMANCE.into(), scores),
        ])?;

        // Stable grouping yields positions in first-seen order.
        let averages = df
            .lazy()
            .group_by_stable([col(POSITION)])
            .agg([col(PERFORMANCE).mean().alias(AVERAGE)])
            .collect()?;

        let names = averages.column(POSITION)?.str()?;
        let means = averages.column(AVERAGE)?.f64()?;

        let mut report: Vec<ReportRow> = names
            .into_iter()
            .zip(means.into_iter())
            .filter_map(|(name, mean)| Some(ReportRow::new(name?, round_to(mean?, 2))))
            .collect();

        // Sort on the displayed value; the stable sort keeps first-seen order for ties.
        report.sort_by(|a, b| b.average.total_cmp(&a.average));
        Ok(report)
    }
}
