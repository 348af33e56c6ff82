use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::sections::application::{ApplicationForm, ApplicationReviewer, ApplicationState};
use crate::sections::positions::{JobPosting, PositionBoard};

pub(super) const MOBILE_VARIANTS: &[&str] = &[
    "0151 23456789",
    "+49 151 23456789",
    "+49151-2345-6789",
    "0049 151 2345 6789",
    "49 151 23456789",
    "(0151) 234 567 89",
];

pub(super) fn form() -> ApplicationForm {
    ApplicationForm {
        first_name: "Jana".to_string(),
        last_name: "Becker".to_string(),
        email: "jana.becker@example.de".to_string(),
        phone: "0151 23456789".to_string(),
        position_id: "pflege-koeln".to_string(),
        privacy_consent: true,
    }
}

pub(super) fn board() -> PositionBoard {
    let postings: Vec<JobPosting> = serde_json::from_value(serde_json::json!([
        {
            "id": "pflege-koeln",
            "position": "Pflegefachkraft",
            "area": "Pflege",
            "region": "Köln",
            "workCapacity": ["Vollzeit"],
            "datum": "01.03.2025",
            "status": "on",
            "applicationUrl": "https://example.test/pflege-koeln"
        },
        {
            "id": "archiv-bonn",
            "position": "Archivar",
            "area": "Verwaltung",
            "region": "Bonn",
            "workCapacity": ["Teilzeit"],
            "datum": "01.01.2024",
            "status": "off",
            "applicationUrl": "https://example.test/archiv-bonn"
        }
    ]))
    .expect("postings deserialize");
    PositionBoard::new(postings)
}

pub(super) fn state_with_board() -> ApplicationState {
    ApplicationState {
        reviewer: Arc::new(ApplicationReviewer::default()),
        board: Some(Arc::new(board())),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
