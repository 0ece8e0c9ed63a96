use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "degree-normalizer",
    about = "Normalize free-text degree descriptors into canonical ranks",
    version
)]
pub struct Cli {
    /// CSV file of raw degree descriptors
    pub input: PathBuf,

    /// Output CSV path [default: degree_regexp.csv, or `output.path` from config]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file [default: ./.degree-normalizer/config.toml, fallback ~/.config/degree-normalizer/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Input field delimiter (overrides config)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show every result and enable debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["degree-normalizer", "degrees.csv"]);
        assert_eq!(cli.input, PathBuf::from("degrees.csv"));
        assert!(cli.output.is_none());
        assert!(matches!(cli.report, ReportFormat::Terminal));
        assert!(!cli.verbose && !cli.quiet);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "degree-normalizer",
            "in.csv",
            "-o",
            "out.csv",
            "--delimiter",
            ";",
            "--report",
            "json",
            "-q",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.delimiter, Some(';'));
        assert!(matches!(cli.report, ReportFormat::Json));
        assert!(cli.quiet);
    }
}
