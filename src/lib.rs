//! candydash - Terminal dashboard for a candy-route customer roster.
//!
//! This library provides the functionality behind the `candydash` binary:
//! - `model` - roster records as served by the dashboard backend
//! - `view` - UI-agnostic view models (customer tables, area panel, stats)
//! - `client` - data sources (HTTP API or embedded demo data)
//! - `tui` - interactive terminal frontend
//! - `util` - formatting and input-parsing helpers

pub mod client;
pub mod model;
pub mod tui;
pub mod util;
pub mod view;
