//! grindshift - Main entry point
//!
//! Launches the converter form by default, or runs one of the headless
//! catalog/conversion commands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Serialize;
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use grindshift::app::App;
use grindshift::catalog::Catalog;
use grindshift::cli::{Cli, Commands};
use grindshift::config_file::{CatalogFile, load_catalog};
use grindshift::error::GrindError;
use grindshift::form::ConversionForm;
use grindshift::types::{OutputFormat, format_microns};

/// Initialize the logger with appropriate settings
fn init_logger(default_filter: &str) {
    // RUST_LOG overrides the --log-level default
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_logger(&cli.log_level);
    info!("grindshift starting up");

    let command = cli.command.unwrap_or(Commands::Tui);
    if let Commands::Validate { path } = &command {
        validate_catalog_file(path);
        return Ok(());
    }

    let catalog = match load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {:#}", e);
            eprintln!("✗ Failed to load catalog: {:#}", e);
            std::process::exit(1);
        }
    };
    debug!("Catalog ready with {} grinders", catalog.len());

    match command {
        Commands::Convert {
            from,
            to,
            clicks,
            format,
        } => run_convert(&catalog, &from, &to, &clicks, format)?,
        Commands::List { format } => run_list(&catalog, format)?,
        Commands::ExportCatalog { path } => {
            CatalogFile::from_catalog(&catalog).save_to_file(&path)?;
            println!("✓ Catalog written to {}", path.display());
        }
        Commands::Validate { .. } => {}
        Commands::Tui => {
            info!("Launching converter form");
            run_tui(catalog)?;
        }
    }

    Ok(())
}

/// Validate a catalog file and exit non-zero on failure
fn validate_catalog_file(path: &Path) {
    info!("Validating catalog file: {:?}", path);
    match CatalogFile::load_from_file(path).and_then(|file| file.to_catalog()) {
        Ok(catalog) => {
            info!("Catalog validation successful");
            println!(
                "✓ Catalog file is valid: {} ({} grinders)",
                path.display(),
                catalog.len()
            );
        }
        Err(e) => {
            error!("Catalog validation failed: {:#}", e);
            eprintln!("✗ Catalog validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Headless conversion report
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionReport<'a> {
    from: &'a str,
    to: &'a str,
    source_clicks: u32,
    source_microns: f64,
    target_clicks: u32,
    target_microns: f64,
}

fn run_convert(
    catalog: &Catalog,
    from: &str,
    to: &str,
    clicks: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let conversion = match ConversionForm::convert_once(catalog, from, to, clicks) {
        Ok(conversion) => conversion,
        Err(e) => {
            error!("Conversion failed: {}", e);
            eprintln!("✗ {}", e);
            if matches!(e, GrindError::UnknownGrinder(_)) {
                eprintln!("   Run `grindshift list` to see available grinders");
            }
            std::process::exit(1);
        }
    };

    let report = ConversionReport {
        from,
        to,
        source_clicks: conversion.source_clicks,
        source_microns: conversion.source_microns,
        target_clicks: conversion.result.clicks,
        target_microns: conversion.result.microns,
    };

    match format {
        OutputFormat::Text => {
            println!(
                "{}: {} clicks ≈ {} microns",
                report.from,
                report.source_clicks,
                format_microns(report.source_microns)
            );
            println!(
                "{}: {} clicks ≈ {} microns",
                report.to,
                report.target_clicks,
                format_microns(report.target_microns)
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_list(catalog: &Catalog, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            let width = catalog.names().map(str::len).max().unwrap_or(0);
            for profile in catalog.profiles() {
                println!("{:<width$}  {}", profile.name, profile.summary(), width = width);
            }
        }
        OutputFormat::Json => {
            let file = CatalogFile::from_catalog(catalog);
            println!("{}", serde_json::to_string_pretty(&file)?);
        }
    }
    Ok(())
}

/// Run the converter form
fn run_tui(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| GrindError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(
            GrindError::terminal(format!("Failed to enter alternate screen: {}", e)).into(),
        );
    }

    let result = run_app(catalog);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

fn run_app(catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| GrindError::terminal(format!("Failed to create terminal: {}", e)))?;
    terminal.hide_cursor()?;

    let mut app = App::new(catalog);
    let result = app.run(&mut terminal);
    let _ = terminal.show_cursor();
    result
}
