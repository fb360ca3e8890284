//! Constants for the interactive console
//!
//! Centralizes the fixed delays that sequence optimistic feedback against
//! the reconciling snapshot reload, plus assorted layout numbers.

// Timing constants
/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Reload delay after a successful force update
pub const UPDATE_OK_RELOAD_MS: u64 = 300;

/// Reload delay after a force update that timed out server-side
pub const UPDATE_TIMEOUT_RELOAD_MS: u64 = 3000;

/// Reload delay after a bulk delete, long enough for the row coloring to
/// be visually perceived before the authoritative view replaces it
pub const DELETE_RELOAD_MS: u64 = 2700;

/// Reload delay after a bulk reissue (slightly longer; the operator is told
/// to check the log for the new message ids)
pub const REISSUE_RELOAD_MS: u64 = 3500;

/// Delay before navigating back to the queue view after a single-message
/// reissue or delete
pub const SINGLE_ACTION_RELOAD_MS: u64 = 1600;

// UI layout constants
/// Height of the action bar (buttons / confirm affordances)
pub const ACTION_BAR_HEIGHT: u16 = 3;

/// Height of the status line
pub const STATUS_LINE_HEIGHT: u16 = 1;

/// Height of the message property header on the examine view
pub const EXAMINE_HEADER_HEIGHT: u16 = 7;

/// Maximum width for the call modal overlay
pub const CALL_MODAL_MAX_WIDTH: u16 = 90;

/// Minimum margin around the call modal overlay
pub const CALL_MODAL_MARGIN: u16 = 3;
