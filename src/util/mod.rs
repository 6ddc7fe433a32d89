//! Formatting and input-parsing helpers.

pub mod date_input;
pub mod money;

pub use date_input::{DateParseError, parse_visit_date};
