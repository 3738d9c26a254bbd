//! Reporter: renders a batch into a Teams MessageCard and posts it

use std::sync::Arc;

use serde::Serialize;

use crate::io::HttpClient;
use crate::probe::CheckResult;

/// Teams MessageCard payload
#[derive(Debug, Serialize)]
struct MessageCard {
    #[serde(rename = "@type")]
    card_type: &'static str,
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "themeColor")]
    theme_color: &'static str,
    summary: &'static str,
    sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
struct Section {
    #[serde(rename = "activityTitle")]
    activity_title: String,
    #[serde(rename = "activitySubtitle", skip_serializing_if = "Option::is_none")]
    activity_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    markdown: bool,
}

/// Render the batch as a markdown table, one row per result
pub fn markdown_table(batch: &[CheckResult]) -> String {
    let header = "| AppName | URL | Status | Result |\n|---------|-----|--------|--------|";
    let rows: Vec<String> = batch
        .iter()
        .map(|r| {
            format!(
                "| {} | {} | {} | {} |",
                r.app_name,
                r.url,
                r.status_display(),
                r.outcome
            )
        })
        .collect();
    format!("{}\n{}", header, rows.join("\n"))
}

fn build_card(batch: &[CheckResult], attempt: u32, recovered: Option<&[String]>) -> MessageCard {
    let mut sections = Vec::with_capacity(batch.len() + 2);

    sections.push(Section {
        activity_title: format!("📊 **Health Check Summary (Attempt {})**", attempt),
        activity_subtitle: None,
        text: Some(markdown_table(batch)),
        markdown: true,
    });

    for result in batch {
        sections.push(Section {
            activity_title: format!("**{}** → {}", result.app_name, result.outcome),
            activity_subtitle: Some(format!(
                "URL: {}\nStatus: {}",
                result.url,
                result.status_display()
            )),
            text: None,
            markdown: true,
        });
    }

    if let Some(recovered) = recovered {
        if !recovered.is_empty() {
            sections.push(Section {
                activity_title: "💚 **Recovered Apps**".to_string(),
                activity_subtitle: None,
                text: Some(recovered.join(", ")),
                markdown: true,
            });
        }
    }

    MessageCard {
        card_type: "MessageCard",
        context: "http://schema.org/extensions",
        theme_color: "0076D7",
        summary: "Health Check Results",
        sections,
    }
}

/// Posts batch reports to a Teams webhook.
///
/// Delivery is best-effort: failures are logged and never surface to the
/// caller, so the health-check workflow and exit status are unaffected.
pub struct TeamsReporter {
    webhook_url: Option<String>,
    http: Arc<dyn HttpClient>,
}

impl TeamsReporter {
    /// The webhook URL is injected here, never read from the environment
    /// at report time.
    pub fn new(webhook_url: Option<String>, http: Arc<dyn HttpClient>) -> Self {
        Self { webhook_url, http }
    }

    pub async fn report(&self, batch: &[CheckResult], attempt: u32, recovered: Option<&[String]>) {
        let Some(url) = &self.webhook_url else {
            tracing::warn!("No Teams webhook URL set, skipping send");
            return;
        };

        let card = build_card(batch, attempt, recovered);
        let payload = match serde_json::to_value(&card) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Failed to serialize Teams payload: {}", e);
                return;
            }
        };

        match self.http.post_json(url, &payload).await {
            Ok(response) => {
                tracing::info!("Teams response: {} {}", response.status, response.body);
            }
            Err(e) => {
                tracing::warn!("Teams send failed: {}", e);
            }
        }
    }
}
