use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::console::domain::confirm::ConfirmFamily;
use crate::console::domain::models::{OverviewFilter, View};
use crate::console::ui::app_state::AppState;
use crate::console::ui::events::Message;
use crate::console::ui::router::route;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shifted(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

fn queue_state() -> AppState {
    let mut state = AppState::new();
    state.view = View::QueueBrowse;
    state
}

fn examine_state() -> AppState {
    let mut state = AppState::new();
    state.view = View::MessageExamine;
    state.examine.modal.reset(3);
    state
}

#[test]
fn overview_bindings() {
    let state = AppState::new();

    assert!(matches!(route(&state, key(KeyCode::Esc)), Some(Message::ForceUpdate)));
    assert!(matches!(route(&state, key(KeyCode::Char('u'))), Some(Message::ForceUpdate)));
    assert!(matches!(
        route(&state, key(KeyCode::Char('a'))),
        Some(Message::SetFilter(OverviewFilter::All))
    ));
    assert!(matches!(
        route(&state, key(KeyCode::Char('b'))),
        Some(Message::SetFilter(OverviewFilter::Bad))
    ));
    assert!(matches!(route(&state, key(KeyCode::Enter)), Some(Message::OpenSelectedQueue)));
    assert!(route(&state, key(KeyCode::Char('d'))).is_none());
}

#[test]
fn queue_browse_bindings() {
    let state = queue_state();

    assert!(matches!(route(&state, key(KeyCode::Char(' '))), Some(Message::ToggleCurrentRow)));
    assert!(matches!(route(&state, key(KeyCode::Char('a'))), Some(Message::ToggleAll)));
    assert!(matches!(route(&state, key(KeyCode::Char('i'))), Some(Message::InvertSelection)));
    assert!(matches!(route(&state, key(KeyCode::Char('r'))), Some(Message::ReissueSelected)));
    assert!(matches!(route(&state, key(KeyCode::Char('d'))), Some(Message::DeleteSelected)));
    assert!(matches!(route(&state, key(KeyCode::Enter)), Some(Message::ExamineCurrentMessage)));
    // Capitals are the "all" variants; shift is not treated as a modifier.
    assert!(matches!(route(&state, shifted('R')), Some(Message::ReissueAll)));
    assert!(matches!(route(&state, shifted('D')), Some(Message::DeleteAll)));
}

#[test]
fn escape_cancels_confirm_before_navigating_back() {
    let mut state = queue_state();

    assert!(matches!(route(&state, key(KeyCode::Esc)), Some(Message::NavigateBack)));

    state.confirm.propose(ConfirmFamily::DeleteSelected);
    assert!(matches!(route(&state, key(KeyCode::Esc)), Some(Message::CancelConfirm)));
}

#[test]
fn limit_input_captures_the_keyboard() {
    let mut state = queue_state();
    state.confirm.propose(ConfirmFamily::DeleteAll);
    assert!(state.limit_input_visible());

    assert!(matches!(route(&state, key(KeyCode::Char('7'))), Some(Message::LimitChar('7'))));
    assert!(matches!(route(&state, key(KeyCode::Backspace)), Some(Message::LimitBackspace)));
    assert!(matches!(route(&state, key(KeyCode::Char('x'))), Some(Message::ConfirmPending)));
    // Everything else is swallowed while the input has focus.
    assert!(route(&state, key(KeyCode::Char('r'))).is_none());
    assert!(route(&state, key(KeyCode::Char('a'))).is_none());
    assert!(route(&state, key(KeyCode::Up)).is_none());
}

#[test]
fn selected_scope_confirm_leaves_normal_bindings() {
    let mut state = queue_state();
    state.confirm.propose(ConfirmFamily::DeleteSelected);
    // No limit input for the selected scope, so navigation still works.
    assert!(matches!(route(&state, key(KeyCode::Up)), Some(Message::CursorUp)));
    assert!(matches!(route(&state, key(KeyCode::Char('x'))), Some(Message::ConfirmPending)));
}

#[test]
fn examine_bindings() {
    let state = examine_state();

    assert!(matches!(route(&state, key(KeyCode::Char('r'))), Some(Message::ReissueSingle)));
    assert!(matches!(route(&state, key(KeyCode::Char('d'))), Some(Message::DeleteSingle)));
    assert!(matches!(route(&state, key(KeyCode::Char('x'))), Some(Message::ConfirmPending)));
    assert!(matches!(route(&state, key(KeyCode::Enter)), Some(Message::OpenCallModal)));
    assert!(matches!(route(&state, key(KeyCode::Esc)), Some(Message::NavigateBack)));
}

#[test]
fn active_modal_swallows_everything_but_navigation() {
    let mut state = examine_state();
    state.examine.modal.open(1);

    assert!(matches!(route(&state, key(KeyCode::Up)), Some(Message::ModalUp)));
    assert!(matches!(route(&state, key(KeyCode::Down)), Some(Message::ModalDown)));
    assert!(matches!(route(&state, key(KeyCode::Esc)), Some(Message::CloseModal)));
    // Action keys must not reach the page underneath.
    assert!(route(&state, key(KeyCode::Char('r'))).is_none());
    assert!(route(&state, key(KeyCode::Char('d'))).is_none());
    assert!(route(&state, key(KeyCode::Enter)).is_none());
}

#[test]
fn os_modifier_chords_are_ignored() {
    let state = queue_state();

    let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
    let alt_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT);
    assert!(route(&state, ctrl_r).is_none());
    assert!(route(&state, alt_d).is_none());
}
