use chrono::NaiveDate;
use tracing::debug;

use super::domain::{FilterCriteria, FilterOptions, JobPosting, PositionDetail};
use super::filter::{days_since, filter_positions, get_filter_options};

/// Enabled postings plus their dropdown options, computed once per load.
///
/// Keystrokes only re-run [`PositionBoard::filter`]; the candidate set and the
/// options never shrink while the applicant narrows the list.
#[derive(Debug, Clone, Default)]
pub struct PositionBoard {
    candidates: Vec<JobPosting>,
    options: FilterOptions,
}

impl PositionBoard {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        let total = postings.len();
        let candidates: Vec<JobPosting> = postings
            .into_iter()
            .filter(JobPosting::is_enabled)
            .collect();
        let options = get_filter_options(&candidates);
        debug!(
            total,
            enabled = candidates.len(),
            "position board initialized"
        );

        Self {
            candidates,
            options,
        }
    }

    pub fn candidates(&self) -> &[JobPosting] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filter(&self, criteria: &FilterCriteria, today: NaiveDate) -> Vec<JobPosting> {
        filter_positions(&self.candidates, criteria, today)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.candidates.iter().any(|posting| posting.id == id)
    }

    /// Detail panel content for an enabled posting.
    pub fn detail(&self, id: &str, today: NaiveDate) -> Option<PositionDetail> {
        let posting = self.candidates.iter().find(|posting| posting.id == id)?;
        let published_on = posting.published_on();

        Some(PositionDetail {
            id: posting.id.clone(),
            title: posting.display_title(),
            area: posting.area.clone(),
            region: posting.region.clone(),
            work_capacity: posting.work_capacity.iter().cloned().collect(),
            published_on,
            days_since_published: published_on.map(|date| days_since(date, today)),
            application_url: posting.application_url.clone(),
            qualifications: posting.qualifications.clone().unwrap_or_default(),
            tasks: posting.tasks.clone().unwrap_or_default(),
            benefits: posting.benefits.clone().unwrap_or_default(),
        })
    }
}
