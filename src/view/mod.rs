//! UI-agnostic view models.
//!
//! `table` holds the customer table view-model (search, mode filter, stable
//! sort); `customers` and `areas` build render-ready structures from it and
//! from area data. The TUI maps these to ratatui widgets; no module here
//! depends on a rendering framework.

pub mod areas;
pub mod common;
pub mod customers;
pub mod stats;
pub mod table;
