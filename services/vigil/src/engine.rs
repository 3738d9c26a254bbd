//! Engine: drives the check, retry and report workflow

use crate::config::RetryPolicy;
use crate::probe::{CheckResult, HttpProber};
use crate::registry::AppSpec;
use crate::report::TeamsReporter;
use crate::runner::run_batch;

/// Terminal status of a run, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every app healthy, immediately or after recovery
    Healthy,
    /// At least one app still failing after the final attempt
    Failing,
}

/// Apps that failed in the earlier batch and pass in the later one.
///
/// Pairing is positional: both batches come from the same registry in
/// the same order, and app names are not assumed unique.
pub fn recovered_apps(earlier: &[CheckResult], later: &[CheckResult]) -> Vec<String> {
    earlier
        .iter()
        .zip(later)
        .filter(|(before, after)| !before.outcome.is_ok() && after.outcome.is_ok())
        .map(|(_, after)| after.app_name.clone())
        .collect()
}

/// Orchestrates batches, the inter-attempt delay and reporting
pub struct Engine {
    apps: Vec<AppSpec>,
    prober: HttpProber,
    reporter: TeamsReporter,
    policy: RetryPolicy,
}

impl Engine {
    pub fn new(
        apps: Vec<AppSpec>,
        prober: HttpProber,
        reporter: TeamsReporter,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            apps,
            prober,
            reporter,
            policy,
        }
    }

    /// Run up to `max_attempts` batches, reporting each one.
    ///
    /// The app list is probed exactly as loaded and never reloaded or
    /// reordered between attempts, so cross-attempt pairing stays
    /// positional.
    pub async fn run(&self) -> RunStatus {
        let mut previous: Option<Vec<CheckResult>> = None;

        for attempt in 1..=self.policy.max_attempts {
            if attempt > 1 {
                tracing::warn!(
                    "Failures detected, retrying in {} seconds",
                    self.policy.delay().as_secs()
                );
                tokio::time::sleep(self.policy.delay()).await;
            }

            let batch = run_batch(&self.prober, &self.apps).await;
            let recovered = previous
                .as_deref()
                .map(|earlier| recovered_apps(earlier, &batch));

            self.reporter
                .report(&batch, attempt, recovered.as_deref())
                .await;

            if batch.iter().all(|r| r.outcome.is_ok()) {
                return RunStatus::Healthy;
            }

            previous = Some(batch);
        }

        RunStatus::Failing
    }
}
