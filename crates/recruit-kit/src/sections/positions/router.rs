use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::board::PositionBoard;
use super::domain::{FilterCriteria, RecencyWindow};

/// Query string of the positions list. Dropdowns submit empty strings for
/// "no selection", so everything arrives as text and is interpreted here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionsQuery {
    pub search_text: String,
    pub area: Option<String>,
    pub work_capacity: Option<String>,
    pub region: Option<String>,
    pub recency_window: Option<String>,
    /// `YYYY-MM-DD` override for the recency reference date.
    pub today: Option<String>,
}

impl PositionsQuery {
    pub fn criteria(&self) -> Result<FilterCriteria, String> {
        let recency_window = match self.recency_window.as_deref() {
            None => RecencyWindow::All,
            Some(raw) => RecencyWindow::parse(raw)
                .ok_or_else(|| format!("unknown recency window '{raw}'"))?,
        };

        Ok(FilterCriteria {
            search_text: self.search_text.clone(),
            area: self.area.clone(),
            work_capacity: self.work_capacity.clone(),
            region: self.region.clone(),
            recency_window,
        })
    }

    pub fn reference_date(&self) -> Result<NaiveDate, String> {
        match self.today.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})")),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// Router exposing the positions list, dropdown options and detail panel.
pub fn positions_router(board: Arc<PositionBoard>) -> Router {
    Router::new()
        .route("/api/v1/positions", get(list_handler))
        .route("/api/v1/positions/options", get(options_handler))
        .route("/api/v1/positions/:position_id", get(detail_handler))
        .with_state(board)
}

pub(crate) async fn list_handler(
    State(board): State<Arc<PositionBoard>>,
    Query(query): Query<PositionsQuery>,
) -> Response {
    let resolved = query
        .criteria()
        .and_then(|criteria| Ok((criteria, query.reference_date()?)));

    match resolved {
        Ok((criteria, today)) => {
            let positions = board.filter(&criteria, today);
            let payload = json!({
                "total": positions.len(),
                "positions": positions,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
        }
    }
}

pub(crate) async fn options_handler(State(board): State<Arc<PositionBoard>>) -> Response {
    (StatusCode::OK, Json(board.options().clone())).into_response()
}

pub(crate) async fn detail_handler(
    State(board): State<Arc<PositionBoard>>,
    Path(position_id): Path<String>,
) -> Response {
    let today = Local::now().date_naive();
    match board.detail(&position_id, today) {
        Some(detail) => (StatusCode::OK, Json(detail)).into_response(),
        None => {
            let payload = json!({
                "error": "position not found",
                "id": position_id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
