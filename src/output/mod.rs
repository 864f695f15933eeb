//! Output module - renders a finished report for the console

mod table;

use table::{render_grid, Align};

use clap::ValueEnum;

use crate::reports::{Report, ReportRow};

pub const NO_DATA_MESSAGE: &str = "No data to display.";

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bordered grid table
    #[default]
    Grid,
    /// JSON array of rows
    Json,
}

/// Render report rows in the requested format. An empty report renders as
/// [`NO_DATA_MESSAGE`] in grid mode and as `[]` in JSON mode.
pub fn render(
    report: &dyn Report,
    rows: &[ReportRow],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Grid if rows.is_empty() => Ok(NO_DATA_MESSAGE.to_string()),
        OutputFormat::Grid => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|row| vec![row.position.clone(), format_average(row.average)])
                .collect();
            Ok(render_grid(report.headers(), &[Align::Left, Align::Right], &cells))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Shortest decimal form, always with a fractional part.
fn format_average(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
