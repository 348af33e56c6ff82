use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use recruit_kit::config::ValidationConfig;
use recruit_kit::error::AppError;
use recruit_kit::sections::application::{ApplicationReviewer, EmailValidator, PhoneValidator};
use recruit_kit::sections::positions::{PositionBoard, PositionCatalog};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Without a catalog the service still validates forms; the list is empty.
pub(crate) fn load_board(path: Option<&Path>) -> Result<PositionBoard, AppError> {
    match path {
        Some(path) => {
            let postings = PositionCatalog::from_path(path)?;
            Ok(PositionBoard::new(postings))
        }
        None => {
            warn!("no positions catalog configured; serving an empty positions list");
            Ok(PositionBoard::default())
        }
    }
}

pub(crate) fn build_reviewer(config: &ValidationConfig) -> ApplicationReviewer {
    let email = EmailValidator::with_extra_disposable_domains(
        config.extra_disposable_domains.iter().cloned(),
    );
    ApplicationReviewer::new(PhoneValidator::default(), email)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
