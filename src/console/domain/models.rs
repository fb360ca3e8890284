use serde::Deserialize;

use crate::console::domain::protocol::{ActionBody, ActionResult, ClientError};

/// Which page of the console is currently mounted. The key router dispatches
/// on this instead of probing the presentation for marker elements.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum View {
    #[default]
    BrokerOverview,
    QueueBrowse,
    MessageExamine,
}

/// Destination filter on the broker overview.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OverviewFilter {
    #[default]
    All,
    Bad,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionKind {
    Update,
    Reissue,
    Delete,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionScope {
    Single,
    Selected,
    All,
}

/// Optimistic per-row state applied from an action result, superseded by the
/// next snapshot reload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VisualState {
    #[default]
    Normal,
    Reissued,
    Deleted,
    Error,
}

/// One message row in the queue browse view. Created when a queue listing
/// snapshot is loaded, dropped on navigation or reload.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageRow {
    pub msg_sys_msg_id: String,
    pub trace_id: String,
    pub from: String,
    pub timestamp_millis: i64,
    pub persistent: bool,
    pub selected: bool,
    pub visual_state: VisualState,
}

impl MessageRow {
    pub fn from_summary(summary: MessageSummary) -> Self {
        Self {
            msg_sys_msg_id: summary.msg_sys_msg_id,
            trace_id: summary.trace_id,
            from: summary.from,
            timestamp_millis: summary.timestamp_millis,
            persistent: summary.persistent,
            selected: false,
            visual_state: VisualState::Normal,
        }
    }
}

// :: Snapshot data model, fetched with GET from the same endpoint the
// actions go to. The console never treats these as more than a snapshot.

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrokerOverviewSnapshot {
    pub broker_name: String,
    #[serde(default)]
    pub destinations: Vec<DestinationSummary>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSummary {
    /// Fully qualified destination id, e.g. "queue:SomeService.someQueue".
    pub destination_id: String,
    pub name: String,
    pub number_of_messages: usize,
    #[serde(default)]
    pub is_dlq: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueueListing {
    pub queue_id: String,
    /// Total on the broker, which can exceed the listed page.
    pub number_of_messages: usize,
    #[serde(default)]
    pub messages: Vec<MessageSummary>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageSummary {
    pub msg_sys_msg_id: String,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub timestamp_millis: i64,
    #[serde(default)]
    pub persistent: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetails {
    pub queue_id: String,
    pub msg_sys_msg_id: String,
    #[serde(default)]
    pub trace_id: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub timestamp_millis: i64,
    #[serde(default)]
    pub message_repr: String,
    #[serde(default)]
    pub calls: Vec<CallEntry>,
}

/// One step of the recorded processing stack, inspectable in the call modal.
/// `call_no` is the ordinal the modal navigator moves over.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallEntry {
    pub call_no: usize,
    #[serde(default)]
    pub call_type: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub detail: String,
}

// :: Worker envelope, for async communication with the network thread.

#[derive(Clone, Debug, PartialEq)]
pub enum SnapshotTarget {
    Overview(OverviewFilter),
    Queue(String),
    Message { queue_id: String, msg_sys_msg_id: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum SnapshotPayload {
    Overview(BrokerOverviewSnapshot),
    Queue(QueueListing),
    Message(MessageDetails),
}

#[derive(Clone, Debug)]
pub struct ClientRequest {
    pub id: u64,
    pub work: ClientWork,
}

#[derive(Clone, Debug)]
pub enum ClientWork {
    Action(ActionBody),
    Snapshot(SnapshotTarget),
}

#[derive(Debug)]
pub struct ClientResponse {
    pub id: u64,
    pub payload: Result<ClientPayload, ClientError>,
}

#[derive(Debug)]
pub enum ClientPayload {
    Action(ActionResult),
    Snapshot(SnapshotPayload),
}
