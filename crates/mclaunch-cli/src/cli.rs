//! CLI argument definitions for mclaunch.

use clap::Parser;
use mclaunch_core::ShowMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mclaunch")]
#[command(about = "Open a URI with the application registered for its scheme", version)]
pub struct Args {
    /// URI to open (default: minecraft://openServersTab/)
    #[arg(long, env = "MCLAUNCH_URI")]
    pub uri: Option<String>,

    /// Load settings from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verb passed to the handler (default: open)
    #[arg(long)]
    pub verb: Option<String>,

    /// Window state for the handler: normal, hidden, minimized, maximized
    #[arg(long, value_name = "MODE")]
    pub show: Option<ShowMode>,

    /// Application name used in the failure hint
    #[arg(long)]
    pub handler_name: Option<String>,
}
