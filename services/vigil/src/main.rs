//! Vigil CLI
//!
//! Command-line interface for the application health-check service.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use vigil::engine::RunStatus;
use vigil::{load_settings, Settings};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Application health checking and Teams notification")]
#[command(version)]
struct Args {
    /// Path to settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the CSV app registry (overrides settings file)
    #[arg(short, long)]
    apps: Option<PathBuf>,

    /// Teams webhook URL (overrides settings file and environment)
    #[arg(long)]
    webhook_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut settings = if let Some(config_path) = &args.config {
        tracing::debug!("Loading settings from {:?}", config_path);
        match load_settings(config_path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        tracing::debug!("Using default settings");
        Settings::default()
    };

    if settings.webhook_url.is_none() {
        settings.webhook_url = std::env::var("TEAMS_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.is_empty());
    }
    if let Some(apps) = args.apps {
        settings.apps_path = apps;
    }
    if let Some(webhook_url) = args.webhook_url {
        settings.webhook_url = Some(webhook_url);
    }

    tracing::debug!(
        "Registry: {:?}, webhook configured: {}, retry: {} attempts / {}s",
        settings.apps_path,
        settings.webhook_url.is_some(),
        settings.retry.max_attempts,
        settings.retry.delay_seconds
    );

    match vigil::run(settings).await {
        Ok(RunStatus::Healthy) => ExitCode::SUCCESS,
        Ok(RunStatus::Failing) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(2)
        }
    }
}
