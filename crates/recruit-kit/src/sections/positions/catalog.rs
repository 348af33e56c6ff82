use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

use super::domain::{split_capacity_tags, JobPosting, PostingStatus};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read positions catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid positions JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid positions CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported positions catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Loads the job postings a landing page was configured with.
///
/// Later rows repeating an earlier `id` are dropped so the list stays keyed
/// by id.
pub struct PositionCatalog;

impl PositionCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JobPosting>, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let postings = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(extension)),
        };

        info!(path = %path.display(), postings = postings.len(), "positions catalog loaded");
        Ok(postings)
    }

    /// Accepts a bare array or the landing-page config shape `{ "positions": [...] }`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, CatalogError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            List(Vec<JobPosting>),
            Config { positions: Vec<JobPosting> },
        }

        let document: Document = serde_json::from_reader(reader)?;
        let postings = match document {
            Document::List(postings) => postings,
            Document::Config { positions } => positions,
        };
        Ok(dedupe_by_id(postings))
    }

    /// Flat export with one row per posting; detail blocks are not carried.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut postings = Vec::new();

        for row in csv_reader.deserialize::<CatalogRow>() {
            postings.push(row?.into_posting());
        }

        Ok(dedupe_by_id(postings))
    }
}

fn dedupe_by_id(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    postings
        .into_iter()
        .filter(|posting| {
            let fresh = seen.insert(posting.id.clone());
            if !fresh {
                warn!(id = %posting.id, "duplicate posting id skipped");
            }
            fresh
        })
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogRow {
    id: String,
    position: String,
    #[serde(default)]
    area: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    work_capacity: String,
    #[serde(default)]
    datum: String,
    #[serde(default, deserialize_with = "lenient_status")]
    status: PostingStatus,
    #[serde(default)]
    application_url: String,
}

impl CatalogRow {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            id: self.id,
            position: self.position,
            area: self.area,
            region: self.region,
            work_capacity: split_capacity_tags(&self.work_capacity).into_iter().collect(),
            datum: self.datum,
            status: self.status,
            application_url: self.application_url,
            qualifications: None,
            tasks: None,
            benefits: None,
        }
    }
}

/// Spreadsheet exports use `on`/`off` in any case; anything else is disabled.
fn lenient_status<'de, D>(deserializer: D) -> Result<PostingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw.as_deref().map(str::trim) {
        Some(value) if value.eq_ignore_ascii_case("on") => PostingStatus::On,
        _ => PostingStatus::Off,
    })
}
