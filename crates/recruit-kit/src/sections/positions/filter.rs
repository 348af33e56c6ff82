use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::domain::{FilterCriteria, FilterOptions, JobPosting, RecencyWindow};

/// Filter and order postings for display.
///
/// Only enabled postings survive. Active criteria are AND-ed; the search text
/// matches title, area or region. Results are newest first, ties keep their
/// input order, and undated postings sort last.
pub fn filter_positions(
    postings: &[JobPosting],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<JobPosting> {
    let matcher = CriteriaMatcher::new(criteria, today);
    let mut matched: Vec<(Option<NaiveDate>, &JobPosting)> = postings
        .iter()
        .filter(|posting| posting.is_enabled())
        .map(|posting| (posting.published_on(), posting))
        .filter(|(published_on, posting)| matcher.matches(posting, *published_on))
        .collect();

    sort_newest_first(&mut matched);
    matched
        .into_iter()
        .map(|(_, posting)| posting.clone())
        .collect()
}

/// Dropdown choices from every enabled posting, independent of any criteria.
pub fn get_filter_options(postings: &[JobPosting]) -> FilterOptions {
    let mut areas = BTreeSet::new();
    let mut capacities = BTreeSet::new();
    let mut regions = BTreeSet::new();

    for posting in postings.iter().filter(|posting| posting.is_enabled()) {
        insert_non_blank(&mut areas, &posting.area);
        insert_non_blank(&mut regions, &posting.region);
        for capacity in &posting.work_capacity {
            insert_non_blank(&mut capacities, capacity);
        }
    }

    FilterOptions {
        areas: areas.into_iter().collect(),
        capacities: capacities.into_iter().collect(),
        regions: regions.into_iter().collect(),
    }
}

/// Whole days between publication and `today`; future dates are negative.
pub fn days_since(published_on: NaiveDate, today: NaiveDate) -> i64 {
    (today - published_on).num_days()
}

pub(crate) fn sort_newest_first<T>(entries: &mut [(Option<NaiveDate>, T)]) {
    // `Option` orders `None` lowest, so reversing puts undated entries last.
    entries.sort_by(|(left, _), (right, _)| right.cmp(left));
}

struct CriteriaMatcher<'a> {
    search: Option<String>,
    area: Option<&'a str>,
    work_capacity: Option<&'a str>,
    region: Option<&'a str>,
    recency: RecencyWindow,
    today: NaiveDate,
}

impl<'a> CriteriaMatcher<'a> {
    fn new(criteria: &'a FilterCriteria, today: NaiveDate) -> Self {
        let search = criteria.search_text.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_lowercase()),
            area: active(&criteria.area),
            work_capacity: active(&criteria.work_capacity),
            region: active(&criteria.region),
            recency: criteria.recency_window,
            today,
        }
    }

    fn matches(&self, posting: &JobPosting, published_on: Option<NaiveDate>) -> bool {
        // Options are offered trimmed, so compare trimmed values on both sides.
        self.area.map_or(true, |area| posting.area.trim() == area)
            && self
                .work_capacity
                .map_or(true, |capacity| posting.work_capacity.contains(capacity))
            && self.region.map_or(true, |region| posting.region.trim() == region)
            && self.within_window(published_on)
            && self.search.as_deref().map_or(true, |needle| {
                posting.display_title().to_lowercase().contains(needle)
                    || posting.area.to_lowercase().contains(needle)
                    || posting.region.to_lowercase().contains(needle)
            })
    }

    fn within_window(&self, published_on: Option<NaiveDate>) -> bool {
        match self.recency.max_age_days() {
            None => true,
            Some(max_age) => published_on
                .is_some_and(|date| days_since(date, self.today) <= max_age),
        }
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn insert_non_blank(set: &mut BTreeSet<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        set.insert(value.to_string());
    }
}
