//! App registry: the list of monitored endpoints

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One monitored HTTP endpoint and its healthy-response marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSpec {
    #[serde(rename = "AppName")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Expected")]
    pub expected: String,
}

/// Load the registry from a CSV file with `AppName`, `URL` and
/// `Expected` columns.
///
/// The whole load fails on an unreadable file or any malformed record;
/// there is no partial success.
pub fn load_registry(path: &Path) -> crate::Result<Vec<AppSpec>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        crate::VigilError::Config(format!("Failed to read app registry {:?}: {}", path, e))
    })?;

    let mut apps = Vec::new();
    for record in reader.deserialize() {
        let app: AppSpec = record.map_err(|e| {
            crate::VigilError::Config(format!("Malformed app registry {:?}: {}", path, e))
        })?;
        apps.push(app);
    }

    tracing::debug!("Loaded {} apps from {:?}", apps.len(), path);
    Ok(apps)
}
