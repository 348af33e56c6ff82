//! Positions list: enabled-posting board, multi-criteria filtering, recency
//! windows and dropdown options.

mod board;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod router;

#[cfg(test)]
mod tests;

pub use board::PositionBoard;
pub use catalog::{CatalogError, PositionCatalog};
pub use domain::{
    parse_german_date, FilterCriteria, FilterOptions, JobPosting, PositionDetail, PostingStatus,
    Qualifications, RecencyWindow,
};
pub use filter::{days_since, filter_positions, get_filter_options};
pub use router::{positions_router, PositionsQuery};
