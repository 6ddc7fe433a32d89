//! Application state management.

use chrono::NaiveDate;
use ratatui::widgets::{ListState, TableState as RatatuiTableState};
use tracing::warn;

use crate::client::ApiError;
use crate::model::{AreaGroup, CustomerRecord};
use crate::view::table::{CustomerTable, DisplayMode, SortKey};

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Customers,
    Balances,
    Areas,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Customers, Tab::Balances, Tab::Areas]
    }

    /// Returns the display name of the tab.
    pub fn name(&self) -> &'static str {
        match self {
            Tab::Customers => "CUSTOMERS",
            Tab::Balances => "BALANCES",
            Tab::Areas => "AREAS",
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Customers => Tab::Balances,
            Tab::Balances => Tab::Areas,
            Tab::Areas => Tab::Customers,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Customers => Tab::Areas,
            Tab::Balances => Tab::Customers,
            Tab::Areas => Tab::Balances,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Edit buffer for the quick-add popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAddForm {
    pub customer_id: i64,
    pub customer_name: String,
    /// Raw date expression; empty means today.
    pub date_input: String,
    /// Last submit error, shown inside the popup.
    pub error: Option<String>,
}

impl QuickAddForm {
    pub fn new(customer_id: i64, customer_name: String) -> Self {
        Self {
            customer_id,
            customer_name,
            date_input: String::new(),
            error: None,
        }
    }
}

/// Active popup state. Only one popup can be open at a time; Esc always
/// dismisses the open one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Customer detail popup.
    CustomerDetail { customer_id: i64, scroll: usize },
    /// Quick-add-to-route form.
    QuickAdd(QuickAddForm),
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Closes whatever popup is open.
    pub fn dismiss(&mut self) {
        *self = Self::None;
    }
}

/// Cursor over one table's derived view.
#[derive(Debug, Default)]
pub struct TableCursor {
    pub selected: usize,
    pub ratatui_state: RatatuiTableState,
}

impl TableCursor {
    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }

    pub fn page_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn page_down(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
    }

    /// Clamps the cursor to the current view length and syncs the ratatui
    /// state for auto-scrolling. Called during render.
    pub fn resolve(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.ratatui_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.ratatui_state.select(Some(self.selected));
        }
    }
}

/// Progress of the background area fetch.
#[derive(Debug, Clone, Default)]
pub enum AreaFetch {
    #[default]
    NotStarted,
    Loading,
    Loaded(Vec<AreaGroup>),
    /// Terminal per attempt; retried only by an explicit user action.
    Failed(String),
}

/// State for the Areas tab.
#[derive(Debug, Default)]
pub struct AreaPanelState {
    pub fetch: AreaFetch,
    /// Selection position among the panel's customer entries.
    pub selected: usize,
    pub list_state: ListState,
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Input mode.
    pub input_mode: InputMode,
    /// Search input buffer.
    pub search_input: String,
    /// All-customers table.
    pub customers: CustomerTable,
    /// Balances-only table.
    pub balances: CustomerTable,
    pub customers_cursor: TableCursor,
    pub balances_cursor: TableCursor,
    /// Areas tab state.
    pub areas: AreaPanelState,
    /// Active popup. Only one can be open at a time.
    pub popup: PopupState,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    /// Where the data came from, for the header bar.
    pub source_label: String,
    /// Anchors relative dates; passed in rather than read ambiently.
    pub today: NaiveDate,
    /// A roster refresh is in flight (display only; completions always apply).
    pub refreshing: bool,
}

impl AppState {
    pub fn new(records: Vec<CustomerRecord>, source_label: String, today: NaiveDate) -> Self {
        Self {
            current_tab: Tab::Customers,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            customers: CustomerTable::new(records.clone(), DisplayMode::AllCustomers),
            balances: CustomerTable::new(records, DisplayMode::BalancesOnly),
            customers_cursor: TableCursor::default(),
            balances_cursor: TableCursor::default(),
            areas: AreaPanelState::default(),
            popup: PopupState::default(),
            status_message: None,
            source_label,
            today,
            refreshing: false,
        }
    }

    /// The table behind the current tab, if it is a table tab.
    pub fn current_table(&self) -> Option<&CustomerTable> {
        match self.current_tab {
            Tab::Customers => Some(&self.customers),
            Tab::Balances => Some(&self.balances),
            Tab::Areas => None,
        }
    }

    pub fn current_table_mut(&mut self) -> Option<&mut CustomerTable> {
        match self.current_tab {
            Tab::Customers => Some(&mut self.customers),
            Tab::Balances => Some(&mut self.balances),
            Tab::Areas => None,
        }
    }

    pub fn current_cursor_mut(&mut self) -> Option<&mut TableCursor> {
        match self.current_tab {
            Tab::Customers => Some(&mut self.customers_cursor),
            Tab::Balances => Some(&mut self.balances_cursor),
            Tab::Areas => None,
        }
    }

    /// Switches tabs, restoring the target tab's search buffer.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.search_input = self
                .current_table()
                .map(|t| t.search_term().to_string())
                .unwrap_or_default();
            self.status_message = None;
        }
    }

    /// Applies the search buffer to the current table and rewinds its cursor.
    pub fn apply_search(&mut self) {
        let term = self.search_input.clone();
        if let Some(table) = self.current_table_mut() {
            table.set_search_term(term);
        }
        if let Some(cursor) = self.current_cursor_mut() {
            cursor.home();
        }
    }

    /// Cancels search input, clearing the term on the current table.
    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_input.clear();
        self.apply_search();
    }

    /// Re-sorts the current table by `key` (same key flips direction).
    pub fn toggle_sort_current(&mut self, key: SortKey) {
        if let Some(table) = self.current_table_mut() {
            table.toggle_sort(key);
        }
    }

    /// Cycles the current table's sort to the next column, ascending.
    pub fn cycle_sort_current(&mut self) {
        if let Some(table) = self.current_table_mut() {
            let next = table.sort_key().next();
            table.toggle_sort(next);
        }
    }

    /// The record currently under the cursor of the active table tab.
    pub fn selected_customer(&self) -> Option<&CustomerRecord> {
        let (table, cursor) = match self.current_tab {
            Tab::Customers => (&self.customers, &self.customers_cursor),
            Tab::Balances => (&self.balances, &self.balances_cursor),
            Tab::Areas => return None,
        };
        let rows = table.visible_rows();
        rows.get(cursor.selected.min(rows.len().saturating_sub(1)))
            .copied()
    }

    /// Looks up a roster record by id.
    pub fn record_by_id(&self, id: i64) -> Option<&CustomerRecord> {
        self.customers.records().iter().find(|r| r.id == id)
    }

    /// Swaps a freshly fetched roster into both tables.
    pub fn set_roster(&mut self, records: Vec<CustomerRecord>) {
        self.customers.set_records(records.clone());
        self.balances.set_records(records);
    }

    /// Applies a completed area fetch. The latest completion wins; an
    /// overlapping earlier fetch is simply overwritten.
    pub fn apply_area_result(&mut self, result: Result<Vec<AreaGroup>, ApiError>) {
        match result {
            Ok(groups) => {
                self.areas.fetch = AreaFetch::Loaded(groups);
            }
            Err(e) => {
                warn!(error = %e, "area fetch failed");
                self.areas.fetch = AreaFetch::Failed(e.to_string());
            }
        }
    }

    /// Applies a completed roster refresh.
    pub fn apply_roster_result(&mut self, result: Result<Vec<CustomerRecord>, ApiError>) {
        self.refreshing = false;
        match result {
            Ok(records) => {
                self.status_message = Some(format!("Roster refreshed ({} customers)", records.len()));
                self.set_roster(records);
            }
            Err(e) => {
                warn!(error = %e, "roster refresh failed");
                self.status_message = Some(format!("Refresh failed: {}", e));
            }
        }
    }
}
