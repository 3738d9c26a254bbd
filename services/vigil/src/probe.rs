//! Prober: one HTTP GET per app, classified into a check result

use std::fmt;
use std::sync::Arc;

use crate::io::HttpClient;
use crate::registry::AppSpec;

/// Classification of a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    InvalidResponse,
    TransportError { detail: String },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok => write!(f, "✅ OK"),
            Outcome::InvalidResponse => write!(f, "❌ Invalid response"),
            Outcome::TransportError { detail } => write!(f, "❌ Error: {}", detail),
        }
    }
}

/// Severity color associated with a check result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Green,
    Red,
}

/// The result of probing one app once
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub app_name: String,
    pub url: String,
    /// HTTP status code; `None` when no response was received
    pub status: Option<u16>,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn severity(&self) -> Severity {
        if self.outcome.is_ok() {
            Severity::Green
        } else {
            Severity::Red
        }
    }

    /// Rendered status code, `N/A` when the transport failed
    pub fn status_display(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Probes apps one at a time over the injected HTTP client
pub struct HttpProber {
    http: Arc<dyn HttpClient>,
}

impl HttpProber {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Probe a single app.
    ///
    /// Every failure mode is captured in the returned result; this never
    /// propagates an error and never retries.
    pub async fn probe(&self, app: &AppSpec) -> CheckResult {
        match self.http.get(&app.url).await {
            Ok(response) => {
                let content = response.body.trim();
                let outcome = if content.contains(app.expected.as_str()) {
                    Outcome::Ok
                } else {
                    Outcome::InvalidResponse
                };
                CheckResult {
                    app_name: app.name.clone(),
                    url: app.url.clone(),
                    status: Some(response.status),
                    outcome,
                }
            }
            Err(e) => {
                let detail = match e {
                    crate::VigilError::Http(detail) => detail,
                    other => other.to_string(),
                };
                CheckResult {
                    app_name: app.name.clone(),
                    url: app.url.clone(),
                    status: None,
                    outcome: Outcome::TransportError { detail },
                }
            }
        }
    }
}
