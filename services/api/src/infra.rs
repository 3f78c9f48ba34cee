use career_compass::config::GuidanceConfig;
use career_compass::guidance::{CareerCatalog, CatalogError, Profile};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The configured catalog override, or the bundled catalog when none is set.
pub(crate) fn load_catalog(config: &GuidanceConfig) -> Result<CareerCatalog, CatalogError> {
    let catalog = match &config.catalog_path {
        Some(path) => CareerCatalog::from_path(path)?,
        None => CareerCatalog::bundled()?,
    };
    let source = config
        .catalog_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    info!(careers = catalog.len(), %source, "career catalog loaded");
    Ok(catalog)
}

/// Accepts inline JSON or a path to a JSON file.
pub(crate) fn parse_profile(raw: &str) -> Result<Profile, String> {
    let trimmed = raw.trim();
    let json = if trimmed.starts_with('{') {
        trimmed.to_string()
    } else {
        std::fs::read_to_string(trimmed)
            .map_err(|err| format!("failed to read profile file '{trimmed}' ({err})"))?
    };
    serde_json::from_str(&json).map_err(|err| format!("invalid profile JSON ({err})"))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
