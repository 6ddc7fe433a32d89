//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::areas::build_area_panel;

use super::state::{AppState, AreaFetch, InputMode, PopupState, QuickAddForm, Tab};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-fetch the roster in the background.
    RefreshRoster,
    /// Fetch area groups in the background.
    FetchAreas,
    /// Submit the open quick-add form.
    SubmitQuickAdd,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.popup == PopupState::QuitConfirm {
        return handle_quit_confirm(state, key);
    }
    if state.popup.is_open() {
        return handle_popup(state, key);
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup.dismiss();
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup.dismiss();
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup.dismiss();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys while a popup other than quit-confirm is open.
fn handle_popup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Esc {
        state.popup.dismiss();
        return KeyAction::None;
    }

    // The quick-add form consumes all text input for its date buffer, so it
    // is handled before the tab-switch block below swallows digit keys.
    if let PopupState::QuickAdd(form) = &mut state.popup {
        return match key.code {
            KeyCode::Enter => KeyAction::SubmitQuickAdd,
            KeyCode::Backspace => {
                form.date_input.pop();
                form.error = None;
                KeyAction::None
            }
            KeyCode::Char(c) => {
                form.date_input.push(c);
                form.error = None;
                KeyAction::None
            }
            _ => KeyAction::None,
        };
    }

    // Tab switching is blocked while a popup is open
    if matches!(
        key.code,
        KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('1')
            | KeyCode::Char('2')
            | KeyCode::Char('3')
    ) {
        state.status_message = Some("Close popup (Esc) before switching tabs".to_string());
        return KeyAction::None;
    }

    // Detail popup: `a` hands the customer over to the quick-add form.
    if let (PopupState::CustomerDetail { customer_id, .. }, KeyCode::Char('a')) =
        (&state.popup, key.code)
    {
        let id = *customer_id;
        open_quick_add(state, id);
        return KeyAction::None;
    }

    match &mut state.popup {
        PopupState::Help { scroll } | PopupState::CustomerDetail { scroll, .. } => {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
                KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
                KeyCode::PageDown => *scroll = scroll.saturating_add(10),
                _ => {}
            }
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation
        KeyCode::Tab => switch_to(state, state.current_tab.next()),
        KeyCode::BackTab => switch_to(state, state.current_tab.prev()),
        KeyCode::Char('1') => switch_to(state, Tab::Customers),
        KeyCode::Char('2') => switch_to(state, Tab::Balances),
        KeyCode::Char('3') => switch_to(state, Tab::Areas),

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => {
            if state.current_tab == Tab::Areas {
                state.areas.selected = state.areas.selected.saturating_sub(1);
            } else if let Some(cursor) = state.current_cursor_mut() {
                cursor.select_up();
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.current_tab == Tab::Areas {
                // Clamped during render
                state.areas.selected = state.areas.selected.saturating_add(1);
            } else if let Some(cursor) = state.current_cursor_mut() {
                cursor.select_down();
            }
            KeyAction::None
        }
        KeyCode::PageUp => {
            if state.current_tab == Tab::Areas {
                state.areas.selected = state.areas.selected.saturating_sub(10);
            } else if let Some(cursor) = state.current_cursor_mut() {
                cursor.page_up(20);
            }
            KeyAction::None
        }
        KeyCode::PageDown => {
            if state.current_tab == Tab::Areas {
                state.areas.selected = state.areas.selected.saturating_add(10);
            } else if let Some(cursor) = state.current_cursor_mut() {
                cursor.page_down(20);
            }
            KeyAction::None
        }
        KeyCode::Home => {
            if state.current_tab == Tab::Areas {
                state.areas.selected = 0;
            } else if let Some(cursor) = state.current_cursor_mut() {
                cursor.home();
            }
            KeyAction::None
        }
        KeyCode::End => {
            if state.current_tab == Tab::Areas {
                state.areas.selected = usize::MAX;
            } else if let Some(cursor) = state.current_cursor_mut() {
                cursor.end();
            }
            KeyAction::None
        }

        // Sorting
        KeyCode::Char('s') | KeyCode::Char('S') => {
            state.cycle_sort_current();
            KeyAction::None
        }
        KeyCode::Char('r') => {
            if let Some(sort_key) = state.current_table().map(|t| t.sort_key()) {
                state.toggle_sort_current(sort_key);
            }
            KeyAction::None
        }

        // Refresh (roster on table tabs, areas on the areas tab)
        KeyCode::Char('R') => {
            if state.current_tab == Tab::Areas {
                KeyAction::FetchAreas
            } else {
                KeyAction::RefreshRoster
            }
        }

        // Search mode (table tabs only)
        KeyCode::Char('/') => {
            if state.current_tab != Tab::Areas {
                state.input_mode = InputMode::Search;
                state.search_input.clear();
                state.apply_search();
            }
            KeyAction::None
        }

        // Open detail / quick-add
        KeyCode::Enter => {
            if state.current_tab == Tab::Areas {
                open_area_quick_add(state);
            } else if let Some(id) = state.selected_customer().map(|r| r.id) {
                state.popup = PopupState::CustomerDetail {
                    customer_id: id,
                    scroll: 0,
                };
            }
            KeyAction::None
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            if state.current_tab == Tab::Areas {
                open_area_quick_add(state);
            } else if let Some(id) = state.selected_customer().map(|r| r.id) {
                open_quick_add(state, id);
            }
            KeyAction::None
        }

        // Help
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys in search mode.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.cancel_search();
            KeyAction::None
        }
        KeyCode::Enter => {
            // Already applied in real-time, just leave search mode
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.apply_search();
            KeyAction::None
        }
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.apply_search();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn switch_to(state: &mut AppState, tab: Tab) -> KeyAction {
    if state.current_tab == tab {
        return KeyAction::None;
    }
    state.switch_tab(tab);
    // Entering the areas tab always re-fetches; a fetch already in flight is
    // not cancelled, the latest completion simply wins.
    if tab == Tab::Areas {
        KeyAction::FetchAreas
    } else {
        KeyAction::None
    }
}

/// Opens the quick-add form pre-filled for a roster customer.
fn open_quick_add(state: &mut AppState, customer_id: i64) {
    let name = state
        .record_by_id(customer_id)
        .map(|r| r.name.clone())
        .unwrap_or_default();
    state.popup = PopupState::QuickAdd(QuickAddForm::new(customer_id, name));
}

/// Opens the quick-add form for the selected area panel entry.
fn open_area_quick_add(state: &mut AppState) {
    let AreaFetch::Loaded(groups) = &state.areas.fetch else {
        return;
    };
    let panel = build_area_panel(groups);
    if panel.selectable.is_empty() {
        return;
    }
    let pos = state.areas.selected.min(panel.selectable.len() - 1);
    if let Some((id, name)) = panel.customer_at(pos) {
        let name = name.to_string();
        state.popup = PopupState::QuickAdd(QuickAddForm::new(id, name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AreaCustomer, AreaGroup, CustomerRecord};
    use crate::view::table::{SortDir, SortKey};
    use chrono::NaiveDate;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn customer(id: i64, name: &str, balance_cents: i64) -> CustomerRecord {
        CustomerRecord {
            id,
            name: name.to_string(),
            balance_cents,
            ..CustomerRecord::default()
        }
    }

    fn state() -> AppState {
        AppState::new(
            vec![customer(1, "Maple", 500), customer(2, "Oak", 4_000)],
            "test".to_string(),
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        )
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut s = state();
        let action = handle_key(&mut s, key(KeyCode::Char('2')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(s.current_tab, Tab::Balances);
    }

    #[test]
    fn entering_areas_tab_requests_a_fetch() {
        let mut s = state();
        let action = handle_key(&mut s, key(KeyCode::Char('3')));
        assert_eq!(action, KeyAction::FetchAreas);
        assert_eq!(s.current_tab, Tab::Areas);
    }

    #[test]
    fn search_mode_applies_live_and_cancels_clean() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('/')));
        assert_eq!(s.input_mode, InputMode::Search);

        let _ = handle_key(&mut s, key(KeyCode::Char('o')));
        assert_eq!(s.customers.search_term(), "o");

        let _ = handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.input_mode, InputMode::Normal);
        assert_eq!(s.customers.search_term(), "");
    }

    #[test]
    fn sort_keys_cycle_column_and_toggle_direction() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('s')));
        assert_eq!(s.customers.sort_key(), SortKey::Phone);
        assert_eq!(s.customers.sort_dir(), SortDir::Ascending);

        let _ = handle_key(&mut s, key(KeyCode::Char('r')));
        assert_eq!(s.customers.sort_key(), SortKey::Phone);
        assert_eq!(s.customers.sort_dir(), SortDir::Descending);
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut s = state();
        let action = handle_key(&mut s, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(s.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::Quit);
        assert!(!s.popup.is_open());
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('q')));
        let action = handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert!(!s.popup.is_open());
    }

    #[test]
    fn enter_opens_detail_for_the_selected_row() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(
            s.popup,
            PopupState::CustomerDetail {
                customer_id: 1,
                scroll: 0
            }
        );
    }

    #[test]
    fn tab_switch_blocked_while_popup_open() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        let _ = handle_key(&mut s, key(KeyCode::Tab));
        assert_eq!(s.current_tab, Tab::Customers);
        assert!(s.status_message.is_some());

        let _ = handle_key(&mut s, key(KeyCode::Esc));
        assert!(!s.popup.is_open());
    }

    #[test]
    fn detail_hands_over_to_quick_add() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        let _ = handle_key(&mut s, key(KeyCode::Char('a')));
        match &s.popup {
            PopupState::QuickAdd(form) => {
                assert_eq!(form.customer_id, 1);
                assert_eq!(form.customer_name, "Maple");
                assert!(form.date_input.is_empty());
            }
            other => panic!("expected quick-add, got {:?}", other),
        }
    }

    #[test]
    fn quick_add_form_edits_and_submits() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('a')));
        let _ = handle_key(&mut s, key(KeyCode::Char('+')));
        let _ = handle_key(&mut s, key(KeyCode::Char('1')));
        let _ = handle_key(&mut s, key(KeyCode::Char('d')));
        match &s.popup {
            PopupState::QuickAdd(form) => assert_eq!(form.date_input, "+1d"),
            other => panic!("expected quick-add, got {:?}", other),
        }
        let action = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::SubmitQuickAdd);
    }

    #[test]
    fn area_enter_opens_quick_add_for_panel_entry() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('3')));
        s.areas.fetch = AreaFetch::Loaded(vec![AreaGroup {
            name: "Downtown".to_string(),
            customers: vec![AreaCustomer {
                id: 9,
                name: "Birchwood Diner".to_string(),
                address: None,
                balance_cents: 1_000,
                days_since: Some(4),
            }],
        }]);
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        match &s.popup {
            PopupState::QuickAdd(form) => assert_eq!(form.customer_id, 9),
            other => panic!("expected quick-add, got {:?}", other),
        }
    }

    #[test]
    fn refresh_key_targets_the_current_tab() {
        let mut s = state();
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('R'))), KeyAction::RefreshRoster);
        let _ = handle_key(&mut s, key(KeyCode::Char('3')));
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('R'))), KeyAction::FetchAreas);
    }
}
