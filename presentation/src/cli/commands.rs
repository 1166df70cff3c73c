//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for panel-sim
#[derive(Parser, Debug)]
#[command(name = "panel-sim")]
#[command(author, version, about = "Group-interview rehearsal: timer, speaking order, roles and scoring")]
#[command(long_about = r#"
panel-sim runs a timed group-interview simulation in the terminal.

A session moves through six phases:
  setup → reading → self statement → discussion → summary → debrief
Each timed phase counts down and advances on its own when time runs out.
Starting a session draws a random speaking order; roles and ratings can be
added at any time and the summary can be copied to the clipboard as JSON.

Configuration files are loaded from (in priority order):
1. PANEL_SIM_* environment variables (e.g. PANEL_SIM_SESSION__PARTICIPANTS=8)
2. --config <path>     Explicit config file
3. ./panel-sim.toml    Project-level config
4. ~/.config/panel-sim/config.toml   Global config

Example:
  panel-sim
  panel-sim --case selection_roi --participants 8
  panel-sim --seed 42 -vv --log-file ./rehearsal.log
"#)]
pub struct Cli {
    /// Case to preselect (see --list-cases)
    #[arg(long, value_name = "ID")]
    pub case: Option<String>,

    /// Number of participants (clamped to 3-12)
    #[arg(short, long, value_name = "N")]
    pub participants: Option<usize>,

    /// Seed for the speaking-order and role draws (reproducible rehearsals)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the available cases and exit
    #[arg(long)]
    pub list_cases: bool,
}
