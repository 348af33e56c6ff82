use std::collections::BTreeSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Suffix German job ads carry to address all genders.
pub const GENDER_SUFFIX: &str = " (m/w/d)";

static GERMAN_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("date pattern compiles"));

/// Publication state maintained in the landing-page config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostingStatus {
    On,
    #[default]
    Off,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifications {
    #[serde(default)]
    pub mandatory: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
}

/// Job ad as supplied by the page configuration. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub position: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, deserialize_with = "capacity_tags")]
    pub work_capacity: BTreeSet<String>,
    /// Publish date as `dd.mm.yyyy`.
    #[serde(default)]
    pub datum: String,
    #[serde(default)]
    pub status: PostingStatus,
    #[serde(default)]
    pub application_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<Qualifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl JobPosting {
    pub fn is_enabled(&self) -> bool {
        self.status == PostingStatus::On
    }

    /// `None` when `datum` is not a strict `dd.mm.yyyy` calendar date.
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_german_date(&self.datum)
    }

    /// Title as displayed and searched, always ending in `(m/w/d)`.
    pub fn display_title(&self) -> String {
        let title = self.position.trim();
        if title.to_lowercase().contains(GENDER_SUFFIX.trim()) {
            title.to_string()
        } else {
            format!("{title}{GENDER_SUFFIX}")
        }
    }
}

/// Publish-date buckets offered by the recency dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecencyWindow {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "last7days")]
    Last7Days,
    #[serde(rename = "last30days")]
    Last30Days,
}

impl RecencyWindow {
    pub fn max_age_days(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Last7Days => Some(7),
            Self::Last30Days => Some(30),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Some(Self::All),
            "last7days" | "7" => Some(Self::Last7Days),
            "last30days" | "30" => Some(Self::Last30Days),
            _ => None,
        }
    }
}

/// One filter invocation's worth of user input. Empty strings mean
/// "no constraint", matching an unselected dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub area: Option<String>,
    pub work_capacity: Option<String>,
    pub region: Option<String>,
    pub recency_window: RecencyWindow,
}

/// Distinct dropdown values drawn from every enabled posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub areas: Vec<String>,
    pub capacities: Vec<String>,
    pub regions: Vec<String>,
}

/// Expanded view of one posting for the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDetail {
    pub id: String,
    pub title: String,
    pub area: String,
    pub region: String,
    pub work_capacity: Vec<String>,
    pub published_on: Option<NaiveDate>,
    pub days_since_published: Option<i64>,
    pub application_url: String,
    pub qualifications: Qualifications,
    pub tasks: Vec<String>,
    pub benefits: Vec<String>,
}

/// Strict `dd.mm.yyyy`; rejects unpadded parts and impossible dates.
pub fn parse_german_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if !GERMAN_DATE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%d.%m.%Y").ok()
}

/// Accepts either a list of tags or a single string (`"Vollzeit, Teilzeit"`).
fn capacity_tags<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }

    let tags = match Option::<Tags>::deserialize(deserializer)? {
        Some(Tags::List(list)) => list,
        Some(Tags::Joined(joined)) => split_capacity_tags(&joined),
        None => Vec::new(),
    };

    Ok(tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect())
}

pub(crate) fn split_capacity_tags(joined: &str) -> Vec<String> {
    joined
        .split(['|', ','])
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
