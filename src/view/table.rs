//! Customer table view-model: search, mode filter, stable sort.
//!
//! `CustomerTable` owns one loaded roster plus the mutable view state for a
//! single table (search term, sort column, sort direction). The derived view
//! is recomputed on every read and never reorders the backing list, so tie
//! order is always the roster order regardless of how often the sort
//! direction toggles.

use std::cmp::Ordering;

use crate::model::CustomerRecord;

/// Which roster slice a table presents. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Every customer.
    AllCustomers,
    /// Only customers with an outstanding balance.
    BalancesOnly,
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Phone,
    Email,
    Address,
    Balance,
}

impl SortKey {
    /// All sortable columns in display order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Name,
            SortKey::Phone,
            SortKey::Email,
            SortKey::Address,
            SortKey::Balance,
        ]
    }

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            SortKey::Name => "NAME",
            SortKey::Phone => "PHONE",
            SortKey::Email => "EMAIL",
            SortKey::Address => "ADDRESS",
            SortKey::Balance => "BALANCE",
        }
    }

    /// The next column, wrapping around.
    pub fn next(self) -> SortKey {
        match self {
            SortKey::Name => SortKey::Phone,
            SortKey::Phone => SortKey::Email,
            SortKey::Email => SortKey::Address,
            SortKey::Address => SortKey::Balance,
            SortKey::Balance => SortKey::Name,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Ascending,
    Descending,
}

impl SortDir {
    fn flipped(self) -> SortDir {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }
}

/// What a column header should show next to its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    None,
}

impl SortIndicator {
    /// Header glyph for this indicator.
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
            SortIndicator::None => "",
        }
    }
}

/// Comparable value extracted from one record for one column.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Text(String),
    Amount(i64),
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.partial_cmp(b),
            (SortValue::Amount(a), SortValue::Amount(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Presentation severity of an outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSeverity {
    None,
    Low,
    Medium,
    High,
}

/// Inclusive lower bound of the medium tier, in cents.
const SEVERITY_MEDIUM_CENTS: i64 = 2_000;
/// Inclusive lower bound of the high tier, in cents.
const SEVERITY_HIGH_CENTS: i64 = 10_000;

/// Classifies a balance for presentation style selection.
///
/// Zero and negative balances (credit) classify as `None`.
pub fn balance_severity(balance_cents: i64) -> BalanceSeverity {
    if balance_cents <= 0 {
        BalanceSeverity::None
    } else if balance_cents < SEVERITY_MEDIUM_CENTS {
        BalanceSeverity::Low
    } else if balance_cents < SEVERITY_HIGH_CENTS {
        BalanceSeverity::Medium
    } else {
        BalanceSeverity::High
    }
}

/// View-model for one customer table.
#[derive(Debug, Clone)]
pub struct CustomerTable {
    records: Vec<CustomerRecord>,
    mode: DisplayMode,
    search_term: String,
    sort_key: SortKey,
    sort_dir: SortDir,
}

impl CustomerTable {
    /// Creates a table over `records`.
    ///
    /// Balances-only tables start sorted by balance, highest first;
    /// all-customers tables start sorted by name, ascending.
    pub fn new(records: Vec<CustomerRecord>, mode: DisplayMode) -> Self {
        let (sort_key, sort_dir) = match mode {
            DisplayMode::AllCustomers => (SortKey::Name, SortDir::Ascending),
            DisplayMode::BalancesOnly => (SortKey::Balance, SortDir::Descending),
        };
        Self {
            records,
            mode,
            search_term: String::new(),
            sort_key,
            sort_dir,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The full backing roster, unfiltered and in load order.
    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    /// Replaces the roster wholesale (refresh). View state survives the swap.
    pub fn set_records(&mut self, records: Vec<CustomerRecord>) {
        self.records = records;
    }

    /// Replaces the search term verbatim. No trimming, no validation.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Re-sorts by `key`: same column flips direction, a new column sorts
    /// ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Ascending;
        }
    }

    /// Indicator for a column header, reflecting current sort state only.
    pub fn sort_indicator_for(&self, key: SortKey) -> SortIndicator {
        if key != self.sort_key {
            SortIndicator::None
        } else {
            match self.sort_dir {
                SortDir::Ascending => SortIndicator::Ascending,
                SortDir::Descending => SortIndicator::Descending,
            }
        }
    }

    /// The filtered, sorted view of the roster.
    ///
    /// Recomputed on every call; never mutates the backing list. Descending
    /// reverses the comparator, not the produced sequence, so equal-key rows
    /// keep their roster order in both directions.
    pub fn visible_rows(&self) -> Vec<&CustomerRecord> {
        let term = self.search_term.to_lowercase();
        let mut rows: Vec<&CustomerRecord> = self
            .records
            .iter()
            .filter(|r| term.is_empty() || matches_search(r, &term))
            .filter(|r| self.mode == DisplayMode::AllCustomers || r.balance_cents > 0)
            .collect();

        let key = self.sort_key;
        let dir = self.sort_dir;
        rows.sort_by(|a, b| {
            let cmp = sort_value(a, key)
                .partial_cmp(&sort_value(b, key))
                .unwrap_or(Ordering::Equal);
            match dir {
                SortDir::Ascending => cmp,
                SortDir::Descending => cmp.reverse(),
            }
        });
        rows
    }
}

/// True when any searchable field contains `term` (already case-folded).
fn matches_search(record: &CustomerRecord, term: &str) -> bool {
    let fields = [
        Some(record.name.as_str()),
        record.phone.as_deref(),
        record.email.as_deref(),
        record.address.as_deref(),
        record.notes.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(term))
}

/// Sort value for one column. Missing text sorts as the empty string,
/// i.e. lowest; text comparisons are case-insensitive.
fn sort_value(record: &CustomerRecord, key: SortKey) -> SortValue {
    let text = |s: &Option<String>| SortValue::Text(s.as_deref().unwrap_or("").to_lowercase());
    match key {
        SortKey::Name => SortValue::Text(record.name.to_lowercase()),
        SortKey::Phone => text(&record.phone),
        SortKey::Email => text(&record.email),
        SortKey::Address => text(&record.address),
        SortKey::Balance => SortValue::Amount(record.balance_cents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, name: &str, balance_cents: i64) -> CustomerRecord {
        CustomerRecord {
            id,
            name: name.to_string(),
            balance_cents,
            ..CustomerRecord::default()
        }
    }

    fn names(rows: &[&CustomerRecord]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn defaults_depend_on_mode() {
        let all = CustomerTable::new(vec![], DisplayMode::AllCustomers);
        assert_eq!(all.sort_key(), SortKey::Name);
        assert_eq!(all.sort_dir(), SortDir::Ascending);

        let owing = CustomerTable::new(vec![], DisplayMode::BalancesOnly);
        assert_eq!(owing.sort_key(), SortKey::Balance);
        assert_eq!(owing.sort_dir(), SortDir::Descending);
    }

    #[test]
    fn empty_roster_yields_empty_view() {
        let table = CustomerTable::new(vec![], DisplayMode::AllCustomers);
        assert!(table.visible_rows().is_empty());
    }

    #[test]
    fn search_filters_case_insensitively_across_fields() {
        let mut maple = customer(1, "Maple Corner", 0);
        maple.notes = Some("Prefers morning deliveries".to_string());
        let mut oak = customer(2, "Oak Street Sweets", 0);
        oak.phone = Some("555-0101".to_string());
        let table = {
            let mut t = CustomerTable::new(vec![maple, oak], DisplayMode::AllCustomers);
            t.set_search_term("MORNING");
            t
        };
        assert_eq!(names(&table.visible_rows()), ["Maple Corner"]);
    }

    #[test]
    fn search_matches_phone_substring() {
        let mut oak = customer(2, "Oak Street Sweets", 0);
        oak.phone = Some("555-0101".to_string());
        let mut table = CustomerTable::new(vec![customer(1, "Maple", 0), oak], DisplayMode::AllCustomers);
        table.set_search_term("0101");
        assert_eq!(names(&table.visible_rows()), ["Oak Street Sweets"]);
    }

    #[test]
    fn empty_search_means_no_filtering() {
        let table = CustomerTable::new(
            vec![customer(1, "a", 0), customer(2, "b", 5)],
            DisplayMode::AllCustomers,
        );
        assert_eq!(table.visible_rows().len(), 2);
    }

    #[test]
    fn balances_mode_hides_settled_customers() {
        let table = CustomerTable::new(
            vec![
                customer(1, "paid up", 0),
                customer(2, "owes", 1500),
                customer(3, "credit", -200),
            ],
            DisplayMode::BalancesOnly,
        );
        let rows = table.visible_rows();
        assert_eq!(names(&rows), ["owes"]);
        assert!(rows.iter().all(|r| r.balance_cents > 0));
    }

    #[test]
    fn toggle_same_key_flips_direction_only() {
        let mut table = CustomerTable::new(vec![], DisplayMode::AllCustomers);
        table.toggle_sort(SortKey::Name);
        assert_eq!(table.sort_key(), SortKey::Name);
        assert_eq!(table.sort_dir(), SortDir::Descending);

        table.toggle_sort(SortKey::Name);
        assert_eq!(table.sort_dir(), SortDir::Ascending);
    }

    #[test]
    fn toggle_new_key_resets_to_ascending() {
        let mut table = CustomerTable::new(vec![], DisplayMode::AllCustomers);
        table.toggle_sort(SortKey::Balance);
        assert_eq!(table.sort_key(), SortKey::Balance);
        assert_eq!(table.sort_dir(), SortDir::Ascending);

        table.toggle_sort(SortKey::Balance);
        assert_eq!(table.sort_dir(), SortDir::Descending);
    }

    #[test]
    fn case_folded_ties_keep_roster_order_both_directions() {
        let mut table = CustomerTable::new(
            vec![
                customer(1, "Amy", 500),
                customer(2, "Bob", 15_000),
                customer(3, "amy", 3_000),
            ],
            DisplayMode::AllCustomers,
        );
        table.set_search_term("am");
        assert_eq!(names(&table.visible_rows()), ["Amy", "amy"]);

        // Descending reverses the comparator; the tied pair keeps its order.
        table.toggle_sort(SortKey::Name);
        assert_eq!(names(&table.visible_rows()), ["Amy", "amy"]);
    }

    #[test]
    fn missing_fields_sort_lowest() {
        let mut with_phone = customer(1, "a", 0);
        with_phone.phone = Some("111".to_string());
        let without_phone = customer(2, "b", 0);
        let mut table =
            CustomerTable::new(vec![with_phone, without_phone], DisplayMode::AllCustomers);
        table.toggle_sort(SortKey::Phone);
        assert_eq!(names(&table.visible_rows()), ["b", "a"]);
    }

    #[test]
    fn balance_sorts_numerically() {
        let mut table = CustomerTable::new(
            vec![
                customer(1, "nine", 900),
                customer(2, "eleven hundred", 1100),
                customer(3, "two", 200),
            ],
            DisplayMode::AllCustomers,
        );
        table.toggle_sort(SortKey::Balance);
        assert_eq!(names(&table.visible_rows()), ["two", "nine", "eleven hundred"]);
    }

    #[test]
    fn visible_rows_never_reorders_backing_roster() {
        let mut table = CustomerTable::new(
            vec![customer(1, "zed", 10), customer(2, "abe", 20)],
            DisplayMode::AllCustomers,
        );
        let _ = table.visible_rows();
        table.toggle_sort(SortKey::Balance);
        let _ = table.visible_rows();
        assert_eq!(table.records()[0].name, "zed");
        assert_eq!(table.records()[1].name, "abe");
    }

    #[test]
    fn indicator_reflects_active_column_only() {
        let table = CustomerTable::new(vec![], DisplayMode::BalancesOnly);
        assert_eq!(
            table.sort_indicator_for(SortKey::Balance),
            SortIndicator::Descending
        );
        assert_eq!(table.sort_indicator_for(SortKey::Name), SortIndicator::None);
    }

    #[test]
    fn set_records_keeps_view_state() {
        let mut table = CustomerTable::new(vec![customer(1, "a", 0)], DisplayMode::AllCustomers);
        table.set_search_term("ma");
        table.toggle_sort(SortKey::Balance);
        table.set_records(vec![customer(2, "Maple", 100), customer(3, "Oak", 50)]);
        assert_eq!(table.search_term(), "ma");
        assert_eq!(table.sort_key(), SortKey::Balance);
        assert_eq!(names(&table.visible_rows()), ["Maple"]);
    }

    #[test]
    fn view_is_a_subsequence_of_the_roster() {
        let mut table = CustomerTable::new(
            vec![
                customer(1, "Maple", 0),
                customer(2, "Oak", 300),
                customer(3, "Pine", 0),
            ],
            DisplayMode::AllCustomers,
        );
        table.set_search_term("p");
        let ids: Vec<i64> = table.visible_rows().iter().map(|r| r.id).collect();
        // Only roster members, no duplicates, no inventions.
        for id in &ids {
            assert!(table.records().iter().any(|r| r.id == *id));
        }
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn search_term_is_stored_verbatim() {
        let mut table = CustomerTable::new(vec![], DisplayMode::AllCustomers);
        table.set_search_term("  Maple ");
        assert_eq!(table.search_term(), "  Maple ");
    }

    #[test]
    fn severity_boundaries() {
        assert_eq!(balance_severity(-500), BalanceSeverity::None);
        assert_eq!(balance_severity(0), BalanceSeverity::None);
        assert_eq!(balance_severity(1), BalanceSeverity::Low);
        assert_eq!(balance_severity(1_999), BalanceSeverity::Low);
        assert_eq!(balance_severity(2_000), BalanceSeverity::Medium);
        assert_eq!(balance_severity(9_999), BalanceSeverity::Medium);
        assert_eq!(balance_severity(10_000), BalanceSeverity::High);
    }
}
