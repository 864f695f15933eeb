//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Staffscore - employee performance reports from CSV files
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  staffscore --files data1.csv data2.csv --report performance\n  staffscore --files employees.csv --report performance --format json"
)]
pub struct Args {
    /// Paths to CSV files (several may be given, separated by spaces)
    #[arg(long, num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Report name (e.g. performance)
    #[arg(long)]
    pub report: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Grid)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_files() {
        let args = Args::try_parse_from([
            "staffscore",
            "--files",
            "a.csv",
            "b.csv",
            "--report",
            "Performance",
        ])
        .unwrap();

        assert_eq!(
            args.files,
            vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]
        );
        assert_eq!(args.report, "Performance");
        assert_eq!(args.format, OutputFormat::Grid);
        assert!(!args.verbose);
    }

    #[test]
    fn requires_files_and_report() {
        assert!(Args::try_parse_from(["staffscore", "--report", "performance"]).is_err());
        assert!(Args::try_parse_from(["staffscore", "--files", "a.csv"]).is_err());
        assert!(
            Args::try_parse_from(["staffscore", "--files", "--report", "performance"]).is_err()
        );
    }

    #[test]
    fn parses_json_format() {
        let args = Args::try_parse_from([
            "staffscore",
            "--files",
            "a.csv",
            "--report",
            "performance",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
    }
}
