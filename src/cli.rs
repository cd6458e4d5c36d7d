//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

/// Generate unique synthetic mobile numbers and export them to a spreadsheet.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mobilegen", version, about)]
pub struct Cli {
    /// Configuration file layered over `config/default.toml`.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Leading digits of every number (default: 019).
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Total digits per number, prefix included (default: 11).
    #[arg(short = 'l', long)]
    pub total_length: Option<u32>,

    /// Number of unique numbers to generate (default: 3000).
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Random seed (default: 42).
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output workbook path.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the validation result as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Skip writing the workbook.
    #[arg(long)]
    pub no_export: bool,
}

impl Cli {
    /// Configuration values supplied on the command line.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            prefix: self.prefix.clone(),
            total_length: self.total_length,
            count: self.count,
            seed: self.seed,
            output: self.output.clone(),
            no_export: self.no_export,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "mobilegen",
            "--prefix",
            "017",
            "-l",
            "11",
            "-n",
            "100",
            "--seed",
            "7",
            "--no-export",
            "--json",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.prefix.as_deref(), Some("017"));
        assert_eq!(overrides.total_length, Some(11));
        assert_eq!(overrides.count, Some(100));
        assert_eq!(overrides.seed, Some(7));
        assert!(overrides.no_export);
        assert!(cli.json);
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        let cli = Cli::try_parse_from(["mobilegen"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.prefix.is_none());
        assert!(overrides.count.is_none());
        assert!(!overrides.no_export);
    }
}
