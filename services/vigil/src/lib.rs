//! Vigil - application health checking and notification service
//!
//! Probes a CSV-defined list of HTTP endpoints, retries failures once
//! after a fixed delay, and reports each attempt to a Teams webhook.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod probe;
pub mod registry;
pub mod report;
pub mod runner;

pub use config::{load_settings, Settings};
pub use error::{Result, VigilError};

use std::sync::Arc;

use crate::engine::{Engine, RunStatus};
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::probe::HttpProber;
use crate::report::TeamsReporter;

/// Run the health-check workflow with the given settings
pub async fn run(settings: Settings) -> Result<RunStatus> {
    let apps = registry::load_registry(&settings.apps_path)?;
    tracing::info!("Checking {} apps from {:?}", apps.len(), settings.apps_path);

    let probe_http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(
        settings.probe.timeout(),
        settings.probe.accept_invalid_certs,
    )?);
    // Notification posts verify certificates; only probes skip them
    let notify_http: Arc<dyn HttpClient> =
        Arc::new(ReqwestHttpClient::new(settings.notify.timeout(), false)?);

    let prober = HttpProber::new(probe_http);
    let reporter = TeamsReporter::new(settings.webhook_url.clone(), notify_http);
    let engine = Engine::new(apps, prober, reporter, settings.retry.clone());

    Ok(engine.run().await)
}
