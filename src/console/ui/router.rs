use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::console::domain::models::{OverviewFilter, View};
use crate::console::ui::app_state::AppState;
use crate::console::ui::events::Message;

/// Routes every keydown to exactly one handler, based on the mounted view
/// and whether the call modal is active. Keys with Ctrl/Alt/Super held are
/// ignored entirely; those belong to the terminal and the OS. Shift is not
/// a modifier here, capital letters are bindings of their own.
pub fn route(state: &AppState, key: KeyEvent) -> Option<Message> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META)
    {
        return None;
    }

    match state.view {
        View::BrokerOverview => overview_key(key),
        View::QueueBrowse => queue_browse_key(state, key),
        View::MessageExamine => {
            if state.examine.modal.is_active() {
                modal_active_key(key)
            } else {
                examine_key(state, key)
            }
        }
    }
}

fn overview_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Escape doubles as force update on the top-level view; there is
        // nothing to go back to.
        KeyCode::Esc | KeyCode::Char('u') => Some(Message::ForceUpdate),
        KeyCode::Char('a') => Some(Message::SetFilter(OverviewFilter::All)),
        KeyCode::Char('b') => Some(Message::SetFilter(OverviewFilter::Bad)),
        KeyCode::Up => Some(Message::CursorUp),
        KeyCode::Down => Some(Message::CursorDown),
        KeyCode::Enter => Some(Message::OpenSelectedQueue),
        _ => None,
    }
}

fn queue_browse_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    if key.code == KeyCode::Esc {
        // Cancel an active confirm first; otherwise navigate back.
        return if state.confirm.is_pending() {
            Some(Message::CancelConfirm)
        } else {
            Some(Message::NavigateBack)
        };
    }

    // While the limit input is showing, it has focus: digits edit it, and
    // only confirm remains reachable from the keyboard.
    if state.limit_input_visible() {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(Message::LimitChar(c)),
            KeyCode::Backspace => Some(Message::LimitBackspace),
            KeyCode::Char('x') => Some(Message::ConfirmPending),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Message::CursorUp),
        KeyCode::Down => Some(Message::CursorDown),
        KeyCode::Char(' ') => Some(Message::ToggleCurrentRow),
        KeyCode::Char('a') => Some(Message::ToggleAll),
        KeyCode::Char('i') => Some(Message::InvertSelection),
        KeyCode::Enter => Some(Message::ExamineCurrentMessage),
        KeyCode::Char('u') => Some(Message::ForceUpdate),
        KeyCode::Char('r') => Some(Message::ReissueSelected),
        KeyCode::Char('R') => Some(Message::ReissueAll),
        KeyCode::Char('d') => Some(Message::DeleteSelected),
        KeyCode::Char('D') => Some(Message::DeleteAll),
        KeyCode::Char('x') => Some(Message::ConfirmPending),
        _ => None,
    }
}

fn examine_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => {
            if state.confirm.is_pending() {
                Some(Message::CancelConfirm)
            } else {
                Some(Message::NavigateBack)
            }
        }
        KeyCode::Char('r') => Some(Message::ReissueSingle),
        KeyCode::Char('d') => Some(Message::DeleteSingle),
        KeyCode::Char('x') => Some(Message::ConfirmPending),
        KeyCode::Up => Some(Message::CursorUp),
        KeyCode::Down => Some(Message::CursorDown),
        KeyCode::Enter => Some(Message::OpenCallModal),
        _ => None,
    }
}

/// With the modal up, arrow keys navigate the call stack and everything
/// else is swallowed so nothing scrolls underneath it.
fn modal_active_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::CloseModal),
        KeyCode::Up => Some(Message::ModalUp),
        KeyCode::Down => Some(Message::ModalDown),
        _ => None,
    }
}
