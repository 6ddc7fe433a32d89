//! Roster-level statistics for the summary bar.

use crate::model::CustomerRecord;

/// Derived totals over one loaded roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub total_customers: usize,
    /// Customers with `balance_cents > 0`.
    pub customers_owing: usize,
    pub total_owed_cents: i64,
    pub largest_balance_cents: i64,
}

/// Computes summary stats over the full (unfiltered) roster.
pub fn roster_stats(records: &[CustomerRecord]) -> RosterStats {
    let owing: Vec<i64> = records
        .iter()
        .map(|r| r.balance_cents)
        .filter(|&b| b > 0)
        .collect();
    RosterStats {
        total_customers: records.len(),
        customers_owing: owing.len(),
        total_owed_cents: owing.iter().sum(),
        largest_balance_cents: owing.iter().copied().max().unwrap_or(0),
    }
}
