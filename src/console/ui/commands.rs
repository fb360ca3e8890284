use crate::console::domain::models::SnapshotTarget;
use crate::console::domain::protocol::ActionIntent;

/// Side effects the event loop performs on behalf of the state machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Send an action to the worker thread. Affordances are already
    /// disabled by the time this is returned.
    SubmitAction(ActionIntent),
    /// Fetch a snapshot (initial load, navigation, or reconciling reload).
    LoadSnapshot(SnapshotTarget),
    /// Fire `Message::ReloadNow` after the given delay in milliseconds.
    ScheduleReload(u64),
}
