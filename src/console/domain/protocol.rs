use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::console::domain::models::{ActionKind, ActionScope};

/// JSON body of an action call. The `action` tag and the field names are the
/// wire contract of the monitor endpoint; everything is camelCase there.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionBody {
    Update,
    #[serde(rename_all = "camelCase")]
    ReissueSelected {
        queue_id: String,
        msg_sys_msg_ids: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    DeleteSelected {
        queue_id: String,
        msg_sys_msg_ids: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    ReissueAll {
        queue_id: String,
        limit_messages: u32,
    },
    #[serde(rename_all = "camelCase")]
    DeleteAll {
        queue_id: String,
        limit_messages: u32,
    },
}

impl ActionBody {
    /// HTTP verb per action kind: mutating re-submissions and the force
    /// update go over PUT, destructive removals over DELETE.
    pub fn method(&self) -> &'static str {
        match self {
            ActionBody::Update
            | ActionBody::ReissueSelected { .. }
            | ActionBody::ReissueAll { .. } => "PUT",
            ActionBody::DeleteSelected { .. } | ActionBody::DeleteAll { .. } => "DELETE",
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            ActionBody::Update => ActionKind::Update,
            ActionBody::ReissueSelected { .. } | ActionBody::ReissueAll { .. } => {
                ActionKind::Reissue
            }
            ActionBody::DeleteSelected { .. } | ActionBody::DeleteAll { .. } => ActionKind::Delete,
        }
    }
}

/// One user gesture's worth of action, as approved by the sequencer. Exists
/// only long enough to build the wire body and remember what to reconcile.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionIntent {
    pub kind: ActionKind,
    pub scope: ActionScope,
    pub queue_id: String,
    pub targets: ActionTargets,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionTargets {
    Ids(Vec<String>),
    Limit(u32),
    None,
}

impl ActionIntent {
    pub fn update() -> Self {
        Self {
            kind: ActionKind::Update,
            scope: ActionScope::All,
            queue_id: String::new(),
            targets: ActionTargets::None,
        }
    }

    /// Single-message actions go over the wire as "*_selected" with a
    /// one-element id list.
    pub fn to_body(&self) -> ActionBody {
        match (self.kind, &self.targets) {
            (ActionKind::Update, _) => ActionBody::Update,
            (ActionKind::Reissue, ActionTargets::Ids(ids)) => ActionBody::ReissueSelected {
                queue_id: self.queue_id.clone(),
                msg_sys_msg_ids: ids.clone(),
            },
            (ActionKind::Delete, ActionTargets::Ids(ids)) => ActionBody::DeleteSelected {
                queue_id: self.queue_id.clone(),
                msg_sys_msg_ids: ids.clone(),
            },
            (ActionKind::Reissue, _) => ActionBody::ReissueAll {
                queue_id: self.queue_id.clone(),
                limit_messages: self.limit(),
            },
            (ActionKind::Delete, _) => ActionBody::DeleteAll {
                queue_id: self.queue_id.clone(),
                limit_messages: self.limit(),
            },
        }
    }

    fn limit(&self) -> u32 {
        match &self.targets {
            ActionTargets::Limit(n) => *n,
            _ => 0,
        }
    }

    /// Expected affected count, where one is knowable (single-target).
    pub fn expected_count(&self) -> Option<usize> {
        match self.scope {
            ActionScope::Single => Some(1),
            _ => None,
        }
    }
}

/// Result body of an action call. Field presence varies by action kind:
/// `result_ok` comes back for the update action, the affected fields for
/// reissue/delete. Both carry `time_taken_millis`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    #[serde(default)]
    pub result_ok: Option<bool>,
    #[serde(default)]
    pub time_taken_millis: u64,
    #[serde(default)]
    pub number_of_affected_messages: usize,
    #[serde(default)]
    pub affected_messages: BTreeMap<String, serde_json::Value>,
}

/// Error taxonomy of the action/snapshot round trip. All of these are
/// reported inline on the status line and mutate nothing; recovery is the
/// operator's reload. Display strings double as the status texts.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ClientError {
    #[error("Fetch Error! {0}")]
    Transport(String),
    #[error("Error! HTTP Status: {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },
    #[error("JSON Error! {0}")]
    Parse(String),
}
