//! Logic-bearing core of the recruiting landing page: contact validation for
//! the application form and the filter engine behind the positions list.

pub mod config;
pub mod error;
pub mod sections;
pub mod telemetry;
