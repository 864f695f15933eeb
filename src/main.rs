//! Staffscore - Employee Performance Report CLI
//!
//! Loads employee CSV files, aggregates performance per position and prints
//! the result as a table.

mod cli;
mod data;
mod error;
mod output;
mod reports;

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use cli::Args;
use data::DataLoader;
use error::AnalyzerError;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let code = execute(&args, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,staffscore={level}")));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// Run one invocation and return the process exit status.
fn execute(args: &Args, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match run(args, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "{}", failure_message(&e));
            1
        }
    }
}

/// Handled errors get a plain message; anything else is reported as unexpected.
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AnalyzerError>() {
        Some(handled) => format!("Error: {handled}"),
        None => format!("Unexpected error: {err:#}"),
    }
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    // 1. Load data
    let dataset = DataLoader::load_files(&args.files)?;

    // 2. Resolve the report
    let report = reports::get_report(&args.report)?;
    debug!(report = report.name(), "report selected");

    // 3. Generate and render before printing anything
    let rows = report.generate(&dataset)?;
    let rendered = output::render(report.as_ref(), &rows, args.format)?;

    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{tempdir, TempDir};

    use crate::output::{OutputFormat, NO_DATA_MESSAGE};

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    fn args(files: Vec<PathBuf>, report: &str) -> Args {
        Args {
            files,
            report: report.to_string(),
            format: OutputFormat::Grid,
            verbose: false,
        }
    }

    fn execute_captured(args: &Args) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(args, &mut out, &mut err);
        (
            code,
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }

    #[test]
    fn test_report_success() -> Result<()> {
        let dir = tempdir()?;
        let path = write_csv(
            &dir,
            "data.csv",
            "position,performance\nBackend,5.0\nBackend,4.0\n",
        )?;

        let (code, out, err) = execute_captured(&args(vec![path], "Performance"));

        assert_eq!(code, 0);
        assert!(out.contains("| Backend  |                 4.5 |"));
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_file_exits_with_error() {
        let (code, out, err) =
            execute_captured(&args(vec![PathBuf::from("missing.csv")], "performance"));

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: file not found"));
    }

    #[test]
    fn test_unknown_report_exits_with_error() -> Result<()> {
        let dir = tempdir()?;
        let path = write_csv(&dir, "data.csv", "position,performance\nBackend,5.0\n")?;

        let (code, out, err) = execute_captured(&args(vec![path], "salary"));

        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert!(err.starts_with("Error: report 'salary' not found"));
        Ok(())
    }

    #[test]
    fn test_header_only_input_exits_with_error() -> Result<()> {
        let dir = tempdir()?;
        let path = write_csv(&dir, "empty.csv", "position,performance\n\n")?;

        let (code, _, err) = execute_captured(&args(vec![path], "performance"));

        assert_eq!(code, 1);
        assert!(err.contains("no data could be loaded"));
        Ok(())
    }

    #[test]
    fn test_no_usable_rows_prints_message() -> Result<()> {
        let dir = tempdir()?;
        let path = write_csv(&dir, "bad.csv", "position,performance\nQA,invalid\n,4.0\n")?;

        let (code, out, err) = execute_captured(&args(vec![path], "performance"));

        assert_eq!(code, 0);
        assert_eq!(out.trim_end(), NO_DATA_MESSAGE);
        assert!(err.is_empty());
        Ok(())
    }

    #[test]
    fn test_unexpected_error_message() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(failure_message(&err), "Unexpected error: disk on fire");

        let handled = anyhow::Error::new(AnalyzerError::InvalidInput("bad input".into()));
        assert_eq!(failure_message(&handled), "Error: bad input");
    }
}
