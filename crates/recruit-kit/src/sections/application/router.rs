use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::form::{lenient_string, ApplicationForm, ApplicationReviewer};
use crate::sections::positions::PositionBoard;

#[derive(Clone)]
pub struct ApplicationState {
    pub reviewer: Arc<ApplicationReviewer>,
    pub board: Option<Arc<PositionBoard>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhoneCheckRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmailCheckRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

/// Router builder exposing the live field checks and the full form review.
pub fn application_router(state: ApplicationState) -> Router {
    Router::new()
        .route("/api/v1/application/phone", post(phone_handler))
        .route("/api/v1/application/email", post(email_handler))
        .route("/api/v1/application/review", post(review_handler))
        .with_state(state)
}

pub(crate) async fn phone_handler(
    State(state): State<ApplicationState>,
    Json(request): Json<PhoneCheckRequest>,
) -> Response {
    let result = state.reviewer.validate_phone(&request.phone);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn email_handler(
    State(state): State<ApplicationState>,
    Json(request): Json<EmailCheckRequest>,
) -> Response {
    let result = state.reviewer.validate_email(&request.email);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn review_handler(
    State(state): State<ApplicationState>,
    Json(form): Json<ApplicationForm>,
) -> Response {
    let review = state.reviewer.review(&form, state.board.as_deref());
    let status = if review.is_valid {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, Json(review)).into_response()
}
