pub mod application;
pub mod positions;
