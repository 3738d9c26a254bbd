//! Configuration types for the vigil service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the CSV registry of monitored apps
    #[serde(default = "default_apps_path")]
    pub apps_path: PathBuf,
    /// Teams webhook URL; when absent, notification sending is skipped
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub probe: ProbeSettings,
    #[serde(default)]
    pub notify: NotifySettings,
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            apps_path: default_apps_path(),
            webhook_url: None,
            probe: ProbeSettings::default(),
            notify: NotifySettings::default(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Settings for the probe HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSettings {
    #[serde(default = "default_probe_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Self-signed and mismatched certificates are accepted when set
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_probe_timeout_seconds(),
            accept_invalid_certs: true,
        }
    }
}

/// Settings for the notification HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifySettings {
    #[serde(default = "default_notify_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NotifySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_notify_timeout_seconds(),
        }
    }
}

/// Retry policy for the check workflow.
///
/// Defaults to one retry pass 30 seconds after a failed first attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_seconds")]
    pub delay_seconds: u64,
}

impl RetryPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_seconds: default_retry_delay_seconds(),
        }
    }
}

fn default_apps_path() -> PathBuf {
    PathBuf::from("apps.csv")
}

fn default_probe_timeout_seconds() -> u64 {
    8
}

fn default_true() -> bool {
    true
}

fn default_notify_timeout_seconds() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    2
}

fn default_retry_delay_seconds() -> u64 {
    30
}

/// Load settings from a JSON file
pub fn load_settings(path: &Path) -> crate::Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::VigilError::Config(format!("Failed to read settings file {:?}: {}", path, e))
    })?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}
