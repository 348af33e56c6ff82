use chrono::NaiveDate;
use serde_json::json;

use crate::sections::positions::{FilterCriteria, JobPosting};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 20).expect("valid date")
}

pub(super) fn ids(postings: &[JobPosting]) -> Vec<&str> {
    postings.iter().map(|posting| posting.id.as_str()).collect()
}

pub(super) fn criteria() -> FilterCriteria {
    FilterCriteria::default()
}

/// Seven postings: five enabled (one undated), two disabled.
pub(super) fn postings() -> Vec<JobPosting> {
    serde_json::from_value(json!([
        {
            "id": "pflege-koeln",
            "position": "Pflegefachkraft",
            "area": "Pflege",
            "region": "Köln",
            "workCapacity": ["Vollzeit", "Teilzeit"],
            "datum": "18.03.2025",
            "status": "on",
            "applicationUrl": "https://example.test/pflege-koeln",
            "qualifications": {
                "mandatory": ["Examen als Pflegefachkraft"],
                "optional": ["Erfahrung in der Intensivpflege"]
            },
            "tasks": ["Grund- und Behandlungspflege"],
            "benefits": ["30 Urlaubstage"]
        },
        {
            "id": "kueche-bonn",
            "position": "Koch (m/w/d)",
            "area": "Gastronomie",
            "region": "Bonn",
            "workCapacity": ["Vollzeit"],
            "datum": "01.03.2025",
            "status": "on",
            "applicationUrl": "https://example.test/kueche-bonn"
        },
        {
            "id": "lager-koeln",
            "position": "Lagerhelfer",
            "area": "Logistik",
            "region": "Köln",
            "workCapacity": ["Minijob"],
            "datum": "18.03.2025",
            "status": "on",
            "applicationUrl": "https://example.test/lager-koeln"
        },
        {
            "id": "verwaltung-bonn",
            "position": "Sachbearbeiter",
            "area": "Verwaltung",
            "region": "Bonn",
            "workCapacity": ["Teilzeit"],
            "datum": "10.12.2024",
            "status": "on",
            "applicationUrl": "https://example.test/verwaltung-bonn"
        },
        {
            "id": "pflege-undatiert",
            "position": "Pflegehelfer",
            "area": "Pflege",
            "region": "Düsseldorf",
            "workCapacity": ["Vollzeit"],
            "datum": "irgendwann",
            "status": "on",
            "applicationUrl": "https://example.test/pflege-undatiert"
        },
        {
            "id": "fahrer-essen",
            "position": "Berufskraftfahrer",
            "area": "Transport",
            "region": "Essen",
            "workCapacity": ["Schicht"],
            "datum": "19.03.2025",
            "status": "off",
            "applicationUrl": "https://example.test/fahrer-essen"
        },
        {
            "id": "pflege-off",
            "position": "Pflegedienstleitung",
            "area": "Pflege",
            "region": "Köln",
            "workCapacity": ["Vollzeit"],
            "datum": "19.03.2025",
            "status": "off",
            "applicationUrl": "https://example.test/pflege-off"
        }
    ]))
    .expect("postings deserialize")
}
