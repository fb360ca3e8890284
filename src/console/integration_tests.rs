use std::sync::Mutex;
use std::time::Duration;

use crate::console::application::broker_client::BrokerClient;
use crate::console::constants::DELETE_RELOAD_MS;
use crate::console::domain::models::{
    ClientPayload, ClientRequest, ClientWork, MessageSummary, QueueListing, SnapshotPayload,
    SnapshotTarget,
};
use crate::console::domain::protocol::{ActionBody, ActionResult, ClientError};
use crate::console::start_worker;
use crate::console::ui::app_state::AppState;
use crate::console::ui::commands::Command;
use crate::console::ui::events::Message;

/// Scripted stand-in for the HTTP client: pops pre-canned results and
/// records the bodies it was asked to execute.
struct ScriptedClient {
    action_results: Mutex<Vec<Result<ActionResult, ClientError>>>,
    executed: Mutex<Vec<ActionBody>>,
    listing: QueueListing,
}

impl ScriptedClient {
    fn new(listing: QueueListing, action_results: Vec<Result<ActionResult, ClientError>>) -> Self {
        Self {
            action_results: Mutex::new(action_results),
            executed: Mutex::new(Vec::new()),
            listing,
        }
    }
}

impl BrokerClient for ScriptedClient {
    fn execute_action(&self, body: &ActionBody) -> Result<ActionResult, ClientError> {
        self.executed.lock().unwrap().push(body.clone());
        self.action_results
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(ActionResult::default()))
    }

    fn fetch_snapshot(&self, _target: &SnapshotTarget) -> Result<SnapshotPayload, ClientError> {
        Ok(SnapshotPayload::Queue(self.listing.clone()))
    }
}

fn listing(count: usize) -> QueueListing {
    QueueListing {
        queue_id: "OrderService.errors".to_string(),
        number_of_messages: count,
        messages: (1..=count)
            .map(|i| MessageSummary {
                msg_sys_msg_id: format!("m{i}"),
                trace_id: format!("trace-{i}"),
                from: "OrderService.placeOrder".to_string(),
                timestamp_millis: 1_700_000_000_000 + i as i64,
                persistent: true,
            })
            .collect(),
    }
}

fn recv(rx: &std::sync::mpsc::Receiver<crate::console::domain::models::ClientResponse>) -> crate::console::domain::models::ClientResponse {
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

#[test]
fn worker_answers_requests_with_matching_ids() {
    let client = ScriptedClient::new(listing(2), vec![Ok(ActionResult::default())]);
    let (tx, rx) = start_worker(Box::new(client));

    tx.send(ClientRequest {
        id: 1,
        work: ClientWork::Snapshot(SnapshotTarget::Queue("OrderService.errors".to_string())),
    })
    .unwrap();
    let response = recv(&rx);
    assert_eq!(response.id, 1);
    assert!(matches!(response.payload, Ok(ClientPayload::Snapshot(_))));

    tx.send(ClientRequest {
        id: 2,
        work: ClientWork::Action(ActionBody::Update),
    })
    .unwrap();
    let response = recv(&rx);
    assert_eq!(response.id, 2);
    assert!(matches!(response.payload, Ok(ClientPayload::Action(_))));
}

#[test]
fn worker_exits_when_the_request_channel_closes() {
    let client = ScriptedClient::new(listing(0), Vec::new());
    let (tx, rx) = start_worker(Box::new(client));
    drop(tx);
    // The worker drops its sender on its way out.
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
}

/// Drives the full delete-selected round trip against a scripted worker,
/// the way the event loop does: state machine in front, worker behind a
/// channel, request ids assigned at submit time.
#[test]
fn delete_selected_round_trip() {
    let mut result = ActionResult {
        time_taken_millis: 45,
        number_of_affected_messages: 2,
        ..ActionResult::default()
    };
    result
        .affected_messages
        .insert("m1".to_string(), serde_json::Value::Null);
    result
        .affected_messages
        .insert("m2".to_string(), serde_json::Value::Null);

    let client = ScriptedClient::new(listing(5), vec![Ok(result)]);
    let (tx, rx) = start_worker(Box::new(client));
    let mut state = AppState::new();
    let mut request_seq = 0u64;

    // Initial load.
    request_seq += 1;
    state.current_request_id = request_seq;
    state.loading = true;
    tx.send(ClientRequest {
        id: request_seq,
        work: ClientWork::Snapshot(SnapshotTarget::Queue("OrderService.errors".to_string())),
    })
    .unwrap();
    let response = recv(&rx);
    let Ok(ClientPayload::Snapshot(payload)) = response.payload else {
        panic!("expected a snapshot");
    };
    state.update(Message::SnapshotLoaded(response.id, Ok(payload)));
    assert_eq!(state.queue.rows.len(), 5);

    // Select two, confirm the delete.
    state.update(Message::ToggleCurrentRow);
    state.update(Message::CursorDown);
    state.update(Message::ToggleCurrentRow);
    state.update(Message::DeleteSelected);
    let cmd = state.update(Message::ConfirmPending);
    let Command::SubmitAction(intent) = cmd else {
        panic!("expected a submit, got {cmd:?}");
    };
    assert!(state.in_flight);

    request_seq += 1;
    state.current_request_id = request_seq;
    tx.send(ClientRequest {
        id: request_seq,
        work: ClientWork::Action(intent.to_body()),
    })
    .unwrap();

    let response = recv(&rx);
    assert_eq!(response.id, request_seq);
    let Ok(ClientPayload::Action(result)) = response.payload else {
        panic!("expected an action result");
    };
    let cmd = state.update(Message::ActionCompleted(response.id, Ok(result)));
    assert_eq!(cmd, Command::ScheduleReload(DELETE_RELOAD_MS));
    assert_eq!(
        state.status.text.as_deref(),
        Some("Done, 2 messages deleted. Time taken: 45 ms.")
    );

    // The reconciling reload resolves everything transient.
    let cmd = state.update(Message::ReloadNow);
    let Command::LoadSnapshot(target) = cmd else {
        panic!("expected a reload, got {cmd:?}");
    };
    assert_eq!(target, SnapshotTarget::Queue("OrderService.errors".to_string()));
    request_seq += 1;
    state.current_request_id = request_seq;
    tx.send(ClientRequest {
        id: request_seq,
        work: ClientWork::Snapshot(target),
    })
    .unwrap();
    let response = recv(&rx);
    let Ok(ClientPayload::Snapshot(payload)) = response.payload else {
        panic!("expected a snapshot");
    };
    state.update(Message::SnapshotLoaded(response.id, Ok(payload)));
    assert!(!state.busy());
    assert!(state.status.text.is_none());
}

#[test]
fn action_bodies_serialize_to_the_wire_contract() {
    let body = ActionBody::DeleteSelected {
        queue_id: "OrderService.errors".to_string(),
        msg_sys_msg_ids: vec!["m1".to_string(), "m2".to_string()],
    };
    assert_eq!(body.method(), "DELETE");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "action": "delete_selected",
            "queueId": "OrderService.errors",
            "msgSysMsgIds": ["m1", "m2"],
        })
    );

    let body = ActionBody::ReissueAll {
        queue_id: "OrderService.errors".to_string(),
        limit_messages: 10,
    };
    assert_eq!(body.method(), "PUT");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "action": "reissue_all",
            "queueId": "OrderService.errors",
            "limitMessages": 10,
        })
    );
}

#[test]
fn transport_failure_freezes_the_view() {
    let client = ScriptedClient::new(
        listing(3),
        vec![Err(ClientError::Transport("connection reset".to_string()))],
    );
    let (tx, rx) = start_worker(Box::new(client));
    let mut state = AppState::new();

    state.current_request_id = 1;
    tx.send(ClientRequest {
        id: 1,
        work: ClientWork::Snapshot(SnapshotTarget::Queue("OrderService.errors".to_string())),
    })
    .unwrap();
    let response = recv(&rx);
    let Ok(ClientPayload::Snapshot(payload)) = response.payload else {
        panic!("expected a snapshot");
    };
    state.update(Message::SnapshotLoaded(1, Ok(payload)));

    state.update(Message::ToggleCurrentRow);
    let cmd = state.update(Message::ReissueSelected);
    let Command::SubmitAction(intent) = cmd else {
        panic!("expected a submit, got {cmd:?}");
    };
    state.current_request_id = 2;
    tx.send(ClientRequest {
        id: 2,
        work: ClientWork::Action(intent.to_body()),
    })
    .unwrap();

    let response = recv(&rx);
    let Err(error) = response.payload else {
        panic!("expected a transport error");
    };
    let cmd = state.update(Message::ActionCompleted(2, Err(error)));
    // No reload is scheduled; nothing was marked; the view is halted.
    assert_eq!(cmd, Command::None);
    assert!(state.halted);
    assert!(state.queue.rows.iter().all(|r| !r.selected || r.visual_state == crate::console::domain::models::VisualState::Normal));
    assert_eq!(
        state.status.text.as_deref(),
        Some("Fetch Error! connection reset")
    );
}
