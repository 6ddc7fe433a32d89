//! Data source abstraction for the dashboard.
//!
//! The TUI works against the `CustomerSource` trait so it can run either
//! against the live HTTP API or fully offline with embedded demo data.

mod demo;
mod http;

pub use demo::DemoSource;
pub use http::HttpSource;

use chrono::NaiveDate;

use crate::model::{AreaGroup, CustomerRecord};

/// Error types that can occur while talking to the backend.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport failure (connection refused, timeout, ...).
    Http(String),
    /// The backend answered with a non-success status code.
    Status(u16),
    /// The response body did not decode into the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status(code) => write!(f, "Server responded with status {}", code),
            ApiError::Decode(msg) => write!(f, "Unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Abstraction over the dashboard backend.
///
/// Object-safe and shared as `Arc<dyn CustomerSource + Send + Sync>` so the
/// area fetch can run on a background thread.
pub trait CustomerSource {
    /// Loads the full customer roster.
    fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ApiError>;

    /// Loads customers grouped by area, ordered largest group first.
    fn fetch_customers_by_area(&self) -> Result<Vec<AreaGroup>, ApiError>;

    /// Schedules a visit to `customer_id` on `date`.
    fn quick_add(&self, customer_id: i64, date: NaiveDate) -> Result<(), ApiError>;

    /// Human-readable origin shown in the header bar.
    fn label(&self) -> String;
}
