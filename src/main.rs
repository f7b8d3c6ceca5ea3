use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use coursedesk::config::DeskConfig;
use coursedesk::tui::app::TuiApp;
use coursedesk::tui::dashboard::format_counts;
use coursedesk::tui::runner::run_tui;

#[derive(Parser)]
#[command(name = "coursedesk", about = "Course types, courses, offerings and registrations.")]
struct Cli {
    /// Config file (replaces the user and project config files)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging and the Activity tab
    #[arg(short, long)]
    debug: bool,

    /// Start empty even if the config has a seed
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, skipped) = match &cli.config {
        Some(path) => (
            DeskConfig::load_from(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            Vec::new(),
        ),
        None => DeskConfig::load(),
    };

    setup_logging(&config, cli.debug)?;
    for (path, e) in &skipped {
        warn!("ignoring config {}: {e}", path.display());
    }
    info!(start_section = ?config.start_section, debug = cli.debug, "coursedesk starting");

    let session = if cli.no_seed {
        Default::default()
    } else {
        config.seeded_session()
    };
    let mut app = TuiApp::with_session(session);
    app.debug_mode = cli.debug;
    app.switch_section(config.start_section.into());

    let session = run_tui(app, &config).await?;
    info!("session closed: {}", format_counts(&session));
    Ok(())
}

/// Log to a file: the terminal belongs to the TUI.
fn setup_logging(config: &DeskConfig, debug: bool) -> Result<()> {
    if let Some(dir) = config.log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    let directive = if debug {
        "coursedesk=debug"
    } else {
        config.log_filter.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["coursedesk", "--debug", "--no-seed", "-c", "x.yaml"]);
        assert!(cli.debug);
        assert!(cli.no_seed);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
    }
}
