//! CLI entrypoint for panel-sim
//!
//! This is the main binary that wires together all layers: configuration
//! files and CLI flags, the log file, the system clipboard adapter and the
//! TUI.

use anyhow::{Context, Result};
use clap::Parser;
use panel_domain::{CASES, Case};
use panel_infrastructure::{
    ConfigLoader, FileConfig, SystemClipboard, default_log_path, init_file_logging,
};
use panel_presentation::{Cli, ConsoleFormatter, TuiApp, TuiConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Informational flags ===
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    if cli.list_cases {
        match &cli.case {
            Some(id) => print!("{}", ConsoleFormatter::format_case(Case::find(id)?)),
            None => print!("{}", ConsoleFormatter::format_cases(&CASES)),
        }
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_cli_overrides(&mut config, &cli)?;

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }

    // === Logging ===
    // The TUI owns the terminal, so logs go to a file.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .or_else(default_log_path)
        .context("No data directory for the log file; pass --log-file")?;
    let log_guard = init_file_logging(&log_path, filter)?;

    info!(log = %log_guard.path().display(), "Starting panel-sim");
    for issue in &issues {
        warn!("{}", issue.message);
    }

    // === Dependency Injection ===
    let session_config = config.to_session_config();
    let tui_config = TuiConfig {
        flash_seconds: config.tui.flash_seconds(),
        refresh_ms: config.tui.refresh_ms(),
    };

    let mut app = TuiApp::new(&session_config, SystemClipboard::new(), tui_config);
    app.run().await?;

    info!("panel-sim exited");
    Ok(())
}

/// CLI flags win over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) -> Result<()> {
    if let Some(id) = &cli.case {
        // An explicit flag fails loudly instead of falling back
        Case::find(id)?;
        config.session.case = Some(id.clone());
    }
    if let Some(participants) = cli.participants {
        config.session.participants = i64::try_from(participants).unwrap_or(i64::MAX);
    }
    if cli.seed.is_some() {
        config.session.seed = cli.seed;
    }
    Ok(())
}
