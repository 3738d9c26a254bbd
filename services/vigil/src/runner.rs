//! Batch runner: probes every registered app in order

use crate::probe::{CheckResult, HttpProber};
use crate::registry::AppSpec;

/// Probe every app sequentially, in registry order.
///
/// Never short-circuits: every app is probed even when earlier ones
/// fail. One result and one log line per app.
pub async fn run_batch(prober: &HttpProber, apps: &[AppSpec]) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(apps.len());
    for app in apps {
        let result = prober.probe(app).await;
        tracing::info!(
            "{} {} {} {}",
            result.app_name,
            result.url,
            result.status_display(),
            result.outcome
        );
        results.push(result);
    }
    results
}
