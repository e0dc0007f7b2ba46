use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

/// grindshift - convert grind settings between coffee grinders
#[derive(Parser)]
#[command(name = "grindshift")]
#[command(about = "Convert grind settings between coffee grinder models")]
#[command(version)]
pub struct Cli {
    /// Grinder catalog file to use instead of the built-in table
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive converter form
    Tui,
    /// Convert a setting without the form
    Convert {
        /// Source grinder name
        #[arg(short, long)]
        from: String,
        /// Target grinder name
        #[arg(short, long)]
        to: String,
        /// Clicks on the source grinder
        clicks: String,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// List grinders in the active catalog
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Validate a catalog file
    Validate {
        /// Path to catalog file to validate
        path: PathBuf,
    },
    /// Write the active catalog to a JSON file
    ExportCatalog {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to TUI mode)
        let result = Cli::try_parse_from(["grindshift"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        assert!(cli.command.is_none());
        assert!(cli.catalog.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_convert_command() {
        let result = Cli::try_parse_from([
            "grindshift",
            "convert",
            "--from",
            "Comandante C40",
            "--to",
            "Kingrinder K6",
            "10",
            "--format",
            "json",
        ]);
        assert!(result.is_ok());
        match result.unwrap().command {
            Some(Commands::Convert {
                from,
                to,
                clicks,
                format,
            }) => {
                assert_eq!(from, "Comandante C40");
                assert_eq!(to, "Kingrinder K6");
                assert_eq!(clicks, "10");
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_cli_convert_requires_grinders() {
        let result = Cli::try_parse_from(["grindshift", "convert", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["grindshift", "list", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_catalog() {
        let result = Cli::try_parse_from([
            "grindshift",
            "list",
            "--catalog",
            "/path/to/grinders.json",
        ]);
        let cli = result.unwrap();
        assert_eq!(
            cli.catalog.unwrap().to_str().unwrap(),
            "/path/to/grinders.json"
        );
    }

    #[test]
    fn test_cli_validate_command() {
        let result = Cli::try_parse_from(["grindshift", "validate", "/path/to/grinders.json"]);
        match result.unwrap().command {
            Some(Commands::Validate { path }) => {
                assert_eq!(path.to_str().unwrap(), "/path/to/grinders.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_export_command() {
        let result = Cli::try_parse_from(["grindshift", "export-catalog", "out.json"]);
        assert!(matches!(
            result.unwrap().command,
            Some(Commands::ExportCatalog { .. })
        ));
    }
}
