mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use mclaunch_core::{Config, SourceText, StderrSink, system_launcher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match usage_exit_status(&e) {
            Some(status) => {
                let _ = e.print();
                return Ok(ExitCode::from(status));
            }
            None => e.exit(),
        },
    };

    // Default to warn so a successful launch prints nothing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mclaunch=warn,mclaunch_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    let source = config.source_text()?;
    debug!("Launching {} (verb: {})", config.uri, config.verb);

    let launcher = system_launcher(config.launch_options());
    let status = launcher.run(SourceText::new(&source), &StderrSink);
    Ok(ExitCode::from(status.exit_code()))
}

/// Exit status for an argument error, or `None` for `--help`/`--version`.
fn usage_exit_status(err: &clap::Error) -> Option<u8> {
    if err.use_stderr() { Some(1) } else { None }
}

/// Defaults, then the config file, then flags and environment.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(uri) = &args.uri {
        config.uri = uri.clone();
    }
    if let Some(verb) = &args.verb {
        config.verb = verb.clone();
    }
    if let Some(show) = args.show {
        config.show_mode = show;
    }
    if let Some(name) = &args.handler_name {
        config.handler_name = name.clone();
    }

    config.validate()?;
    Ok(config)
}
