//! Customer table view builder.
//!
//! Maps a [`CustomerTable`] to a [`TableViewModel`] for rendering: headers
//! with sort indicators, balance cells styled by severity, and (in the
//! balances view) a last-visit column.

use chrono::NaiveDate;

use crate::model::CustomerRecord;
use crate::util::money::format_cents;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};
use crate::view::table::{BalanceSeverity, CustomerTable, DisplayMode, SortKey, balance_severity};

const WIDTH_NAME: u16 = 22;
const WIDTH_PHONE: u16 = 14;
const WIDTH_EMAIL: u16 = 24;
const WIDTH_BALANCE: u16 = 10;
const WIDTH_LAST_VISIT: u16 = 12;

/// Style class for a balance cell.
pub fn severity_class(severity: BalanceSeverity) -> RowStyleClass {
    match severity {
        BalanceSeverity::None => RowStyleClass::Dimmed,
        BalanceSeverity::Low => RowStyleClass::Warning,
        BalanceSeverity::Medium => RowStyleClass::Severe,
        BalanceSeverity::High => RowStyleClass::Critical,
    }
}

/// Builds the view model for one customer table.
///
/// `today` anchors the last-visit column; it is passed in explicitly so the
/// builder stays a pure function of its arguments.
pub fn build_customer_view(table: &CustomerTable, today: NaiveDate) -> TableViewModel<i64> {
    let show_last_visit = table.mode() == DisplayMode::BalancesOnly;

    let mut headers: Vec<String> = SortKey::all()
        .iter()
        .map(|&key| {
            let glyph = table.sort_indicator_for(key).glyph();
            if glyph.is_empty() {
                key.title().to_string()
            } else {
                format!("{}{}", key.title(), glyph)
            }
        })
        .collect();
    let mut widths = vec![WIDTH_NAME, WIDTH_PHONE, WIDTH_EMAIL, 0, WIDTH_BALANCE];
    if show_last_visit {
        headers.push("LAST VISIT".to_string());
        widths.push(WIDTH_LAST_VISIT);
    }

    let rows: Vec<ViewRow<i64>> = table
        .visible_rows()
        .into_iter()
        .map(|r| build_row(r, today, show_last_visit))
        .collect();

    let label = match table.mode() {
        DisplayMode::AllCustomers => "Customers",
        DisplayMode::BalancesOnly => "Outstanding Balances",
    };
    let title = if table.search_term().is_empty() {
        format!(" {} [{} rows] ", label, rows.len())
    } else {
        format!(
            " {} [{} rows] (search: {}) ",
            label,
            rows.len(),
            table.search_term()
        )
    };

    TableViewModel {
        title,
        headers,
        widths,
        rows,
    }
}

fn build_row(record: &CustomerRecord, today: NaiveDate, show_last_visit: bool) -> ViewRow<i64> {
    let mut cells = vec![
        ViewCell::plain(record.name.clone()),
        optional_cell(record.phone.as_deref()),
        optional_cell(record.email.as_deref()),
        optional_cell(record.address.as_deref()),
        ViewCell::styled(
            format_cents(record.balance_cents),
            severity_class(balance_severity(record.balance_cents)),
        ),
    ];
    if show_last_visit {
        cells.push(last_visit_cell(record, today));
    }
    ViewRow {
        id: record.id,
        cells,
        style: RowStyleClass::Normal,
    }
}

fn optional_cell(value: Option<&str>) -> ViewCell {
    match value {
        Some(v) => ViewCell::plain(v.to_string()),
        None => ViewCell::styled("-".to_string(), RowStyleClass::Dimmed),
    }
}

fn last_visit_cell(record: &CustomerRecord, today: NaiveDate) -> ViewCell {
    match record.days_since_visit(today) {
        Some(0) => ViewCell::plain("today".to_string()),
        Some(d) => ViewCell::plain(format!("{}d ago", d)),
        None => ViewCell::styled("never".to_string(), RowStyleClass::Dimmed),
    }
}
