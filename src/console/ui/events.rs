use crate::console::domain::models::{OverviewFilter, SnapshotPayload};
use crate::console::domain::protocol::{ActionResult, ClientError};

/// Every event the state machine reacts to: routed key gestures, async
/// results from the worker thread, and loop timers.
#[derive(Clone, Debug)]
pub enum Message {
    // Cursor movement (overview destinations / queue rows / call rows)
    CursorUp,
    CursorDown,

    // Broker overview
    SetFilter(OverviewFilter),
    OpenSelectedQueue,

    // Queue browse selection
    ToggleCurrentRow,
    ToggleAll,
    InvertSelection,
    ExamineCurrentMessage,

    // Action gestures
    ForceUpdate,
    ReissueSelected,
    DeleteSelected,
    ReissueAll,
    DeleteAll,
    ReissueSingle,
    DeleteSingle,
    ConfirmPending,
    CancelConfirm,

    // Limit input (visible while an "all"-scope confirm is proposed)
    LimitChar(char),
    LimitBackspace,

    // Navigation
    NavigateBack,

    // Call modal
    OpenCallModal,
    ModalUp,
    ModalDown,
    CloseModal,

    // Async results (tagged with the request id they answer)
    ActionCompleted(u64, Result<ActionResult, ClientError>),
    SnapshotLoaded(u64, Result<SnapshotPayload, ClientError>),

    // Timers
    ReloadNow,
}
