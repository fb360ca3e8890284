use tracing::{debug, warn};

use crate::console::constants::*;
use crate::console::domain::confirm::{ConfirmFamily, ConfirmSequencer, requires_confirm};
use crate::console::domain::gate::{self, ActionAvailability};
use crate::console::domain::modal::CallModalNavigator;
use crate::console::domain::models::{
    ActionKind, ActionScope, DestinationSummary, MessageDetails, MessageRow, OverviewFilter,
    SnapshotPayload, SnapshotTarget, View, VisualState,
};
use crate::console::domain::protocol::{
    ActionIntent, ActionResult, ActionTargets, ClientError,
};
use crate::console::domain::selection::{self, SelectionAggregate};
use crate::console::ui::commands::Command;
use crate::console::ui::events::Message;

pub struct AppState {
    pub view: View,
    pub overview: OverviewState,
    pub queue: QueueState,
    pub examine: ExamineState,
    pub confirm: ConfirmSequencer,
    pub status: StatusLine,
    /// An action request has been sent and not yet answered. Set
    /// synchronously before the request goes out, so a second gesture
    /// cannot race the first.
    pub in_flight: bool,
    /// A reconciling reload has been scheduled or is running; no further
    /// mutation is accepted until the snapshot arrives.
    pub pending_reload: bool,
    /// An action failed; affordances stay disabled until the operator
    /// reloads (navigates), per the no-retry policy.
    pub halted: bool,
    /// A snapshot fetch is running.
    pub loading: bool,
    /// Id of the request currently in flight; stale responses are dropped.
    pub current_request_id: u64,
    in_flight_action: Option<InFlightAction>,
    reload_target: Option<SnapshotTarget>,
}

pub struct OverviewState {
    pub filter: OverviewFilter,
    pub broker_name: String,
    pub destinations: Vec<DestinationSummary>,
    pub cursor: usize,
}

pub struct QueueState {
    pub queue_id: String,
    /// Total on the broker, which can exceed the listed rows.
    pub total_on_queue: usize,
    pub rows: Vec<MessageRow>,
    pub cursor: usize,
    /// Value of the "limit messages" input, digits only.
    pub limit_input: String,
}

pub struct ExamineState {
    pub details: Option<MessageDetails>,
    /// Cursor over the call rows (the hover analog).
    pub call_cursor: usize,
    pub modal: CallModalNavigator,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusTone {
    Info,
    Reissued,
    Deleted,
    Error,
}

pub struct StatusLine {
    pub text: Option<String>,
    pub tone: StatusTone,
}

impl StatusLine {
    fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.text = Some(text.into());
        self.tone = tone;
    }

    fn clear(&mut self) {
        self.text = None;
        self.tone = StatusTone::Info;
    }
}

/// What the answer to the in-flight action should be reconciled against.
#[derive(Clone, Debug)]
struct InFlightAction {
    kind: ActionKind,
    scope: ActionScope,
    queue_id: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            view: View::BrokerOverview,
            overview: OverviewState {
                filter: OverviewFilter::All,
                broker_name: String::new(),
                destinations: Vec::new(),
                cursor: 0,
            },
            queue: QueueState {
                queue_id: String::new(),
                total_on_queue: 0,
                rows: Vec::new(),
                cursor: 0,
                limit_input: String::new(),
            },
            examine: ExamineState {
                details: None,
                call_cursor: 0,
                modal: CallModalNavigator::new(0),
            },
            confirm: ConfirmSequencer::new(),
            status: StatusLine {
                text: None,
                tone: StatusTone::Info,
            },
            in_flight: false,
            pending_reload: false,
            halted: false,
            loading: false,
            current_request_id: 0,
            in_flight_action: None,
            reload_target: None,
        }
    }

    /// Nothing that mutates broker-facing state may run while a request is
    /// in flight, a reload is pending, a snapshot is loading, or the view
    /// is halted after a failed action.
    pub fn busy(&self) -> bool {
        self.in_flight || self.pending_reload || self.loading || self.halted
    }

    pub fn aggregate(&self) -> SelectionAggregate {
        SelectionAggregate::compute(&self.queue.rows)
    }

    pub fn availability(&self) -> ActionAvailability {
        gate::evaluate(&self.aggregate(), self.queue.total_on_queue > 0, self.busy())
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::CursorUp => {
                self.move_cursor(-1);
                Command::None
            }
            Message::CursorDown => {
                self.move_cursor(1);
                Command::None
            }

            Message::SetFilter(filter) => {
                if self.view != View::BrokerOverview || self.busy() {
                    return Command::None;
                }
                self.overview.filter = filter;
                self.loading = true;
                Command::LoadSnapshot(SnapshotTarget::Overview(filter))
            }
            Message::OpenSelectedQueue => {
                if self.view != View::BrokerOverview || self.busy() {
                    return Command::None;
                }
                let Some(dest) = self.overview.destinations.get(self.overview.cursor) else {
                    return Command::None;
                };
                let queue_id = dest
                    .destination_id
                    .strip_prefix("queue:")
                    .unwrap_or(&dest.destination_id)
                    .to_string();
                self.loading = true;
                Command::LoadSnapshot(SnapshotTarget::Queue(queue_id))
            }

            Message::ToggleCurrentRow => {
                if self.view != View::QueueBrowse || self.busy() {
                    return Command::None;
                }
                if let Some(row) = self.queue.rows.get(self.queue.cursor) {
                    let id = row.msg_sys_msg_id.clone();
                    let checked = !row.selected;
                    selection::toggle_one(&mut self.queue.rows, &id, checked);
                    self.after_selection_change();
                }
                Command::None
            }
            Message::ToggleAll => {
                if self.view != View::QueueBrowse || self.busy() {
                    return Command::None;
                }
                let check = !self.aggregate().all_selected();
                selection::toggle_all(&mut self.queue.rows, check);
                self.after_selection_change();
                Command::None
            }
            Message::InvertSelection => {
                if self.view != View::QueueBrowse || self.busy() {
                    return Command::None;
                }
                selection::invert_all(&mut self.queue.rows);
                self.after_selection_change();
                Command::None
            }
            Message::ExamineCurrentMessage => {
                if self.view != View::QueueBrowse || self.busy() {
                    return Command::None;
                }
                let Some(row) = self.queue.rows.get(self.queue.cursor) else {
                    return Command::None;
                };
                self.loading = true;
                Command::LoadSnapshot(SnapshotTarget::Message {
                    queue_id: self.queue.queue_id.clone(),
                    msg_sys_msg_id: row.msg_sys_msg_id.clone(),
                })
            }

            Message::ForceUpdate => {
                if self.view == View::MessageExamine || self.busy() {
                    return Command::None;
                }
                self.status.set("Updating..", StatusTone::Info);
                self.dispatch(ActionIntent::update())
            }
            Message::ReissueSelected => {
                if !self.availability().reissue_selected {
                    return Command::None;
                }
                debug_assert!(!requires_confirm(ActionKind::Reissue, ActionScope::Selected));
                self.confirm.cancel();
                let ids = selection::selected_ids(&self.queue.rows);
                self.status.set(
                    format!("Reissuing {} message{}.", ids.len(), plural(ids.len())),
                    StatusTone::Info,
                );
                self.dispatch(ActionIntent {
                    kind: ActionKind::Reissue,
                    scope: ActionScope::Selected,
                    queue_id: self.queue.queue_id.clone(),
                    targets: ActionTargets::Ids(ids),
                })
            }
            Message::DeleteSelected => {
                if !self.availability().delete_selected {
                    return Command::None;
                }
                self.confirm.propose(ConfirmFamily::DeleteSelected);
                Command::None
            }
            Message::ReissueAll => {
                if !self.availability().reissue_all {
                    return Command::None;
                }
                self.confirm.propose(ConfirmFamily::ReissueAll);
                Command::None
            }
            Message::DeleteAll => {
                if !self.availability().delete_all {
                    return Command::None;
                }
                self.confirm.propose(ConfirmFamily::DeleteAll);
                Command::None
            }
            Message::ReissueSingle => {
                if self.view != View::MessageExamine || self.busy() {
                    return Command::None;
                }
                let Some(details) = &self.examine.details else {
                    return Command::None;
                };
                self.confirm.cancel();
                self.status.set(
                    format!("Reissuing message [{}].", details.msg_sys_msg_id),
                    StatusTone::Info,
                );
                self.dispatch(ActionIntent {
                    kind: ActionKind::Reissue,
                    scope: ActionScope::Single,
                    queue_id: details.queue_id.clone(),
                    targets: ActionTargets::Ids(vec![details.msg_sys_msg_id.clone()]),
                })
            }
            Message::DeleteSingle => {
                if self.view != View::MessageExamine || self.busy() {
                    return Command::None;
                }
                if self.examine.details.is_some() {
                    self.confirm.propose(ConfirmFamily::DeleteSingle);
                }
                Command::None
            }
            Message::ConfirmPending => {
                if self.busy() {
                    return Command::None;
                }
                let Some(family) = self.confirm.take_for_dispatch() else {
                    return Command::None;
                };
                self.dispatch_confirmed(family)
            }
            Message::CancelConfirm => {
                self.confirm.cancel();
                Command::None
            }

            Message::LimitChar(c) => {
                // Non-digits are stripped as typed.
                if c.is_ascii_digit() && self.limit_input_visible() && !self.busy() {
                    self.queue.limit_input.push(c);
                }
                Command::None
            }
            Message::LimitBackspace => {
                if self.limit_input_visible() && !self.busy() {
                    self.queue.limit_input.pop();
                }
                Command::None
            }

            Message::NavigateBack => {
                // Allowed from the halted state: a fresh snapshot is the
                // manual reload that recovers the view.
                if self.in_flight || self.pending_reload || self.loading {
                    return Command::None;
                }
                match self.view {
                    View::BrokerOverview => Command::None,
                    View::QueueBrowse => {
                        self.loading = true;
                        Command::LoadSnapshot(SnapshotTarget::Overview(self.overview.filter))
                    }
                    View::MessageExamine => {
                        self.loading = true;
                        Command::LoadSnapshot(SnapshotTarget::Queue(self.queue.queue_id.clone()))
                    }
                }
            }

            Message::OpenCallModal => {
                if self.view != View::MessageExamine {
                    return Command::None;
                }
                // Clicking into the trace must not leave a stray confirm.
                self.confirm.cancel();
                self.examine.modal.open(self.examine.call_cursor);
                Command::None
            }
            Message::ModalUp => {
                if self.examine.modal.up() {
                    self.sync_call_cursor();
                }
                Command::None
            }
            Message::ModalDown => {
                if self.examine.modal.down() {
                    self.sync_call_cursor();
                }
                Command::None
            }
            Message::CloseModal => {
                self.examine.modal.close();
                Command::None
            }

            Message::ActionCompleted(id, result) => self.on_action_completed(id, result),
            Message::SnapshotLoaded(id, result) => self.on_snapshot_loaded(id, result),

            Message::ReloadNow => {
                let Some(target) = self.reload_target.take() else {
                    return Command::None;
                };
                self.loading = true;
                Command::LoadSnapshot(target)
            }
        }
    }

    /// The limit input is rendered (and editable) exactly while an
    /// "all"-scope confirm is proposed.
    pub fn limit_input_visible(&self) -> bool {
        self.confirm.proposed().is_some_and(|f| f.uses_limit())
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.view {
            View::BrokerOverview => {
                Self::step(&mut self.overview.cursor, delta, self.overview.destinations.len());
            }
            View::QueueBrowse => {
                Self::step(&mut self.queue.cursor, delta, self.queue.rows.len());
            }
            View::MessageExamine => {
                let len = self
                    .examine
                    .details
                    .as_ref()
                    .map(|d| d.calls.len())
                    .unwrap_or(0);
                Self::step(&mut self.examine.call_cursor, delta, len);
            }
        }
    }

    fn step(cursor: &mut usize, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        if delta < 0 {
            *cursor = cursor.saturating_sub(delta.unsigned_abs());
        } else {
            *cursor = (*cursor + delta as usize).min(len - 1);
        }
    }

    /// A destructive action's confirmation is scoped to the selection it
    /// was proposed against, so every selection change invalidates it.
    fn after_selection_change(&mut self) {
        self.confirm.cancel();
    }

    fn sync_call_cursor(&mut self) {
        if let Some(active) = self.examine.modal.active() {
            // Keeps the active row scrolled into view.
            self.examine.call_cursor = active;
        }
    }

    fn dispatch_confirmed(&mut self, family: ConfirmFamily) -> Command {
        match family {
            ConfirmFamily::DeleteSelected => {
                let ids = selection::selected_ids(&self.queue.rows);
                if ids.is_empty() {
                    return Command::None;
                }
                self.status.set(
                    format!("Deleting {} message{}.", ids.len(), plural(ids.len())),
                    StatusTone::Info,
                );
                self.dispatch(ActionIntent {
                    kind: ActionKind::Delete,
                    scope: ActionScope::Selected,
                    queue_id: self.queue.queue_id.clone(),
                    targets: ActionTargets::Ids(ids),
                })
            }
            ConfirmFamily::ReissueAll | ConfirmFamily::DeleteAll => {
                let limit: u32 = self.queue.limit_input.parse().unwrap_or(0);
                let kind = family.kind();
                let verb = present_tense(kind);
                let text = if limit == 1 {
                    format!("{verb} 1 message.")
                } else {
                    format!("{verb} up to {limit} messages.")
                };
                self.status.set(text, StatusTone::Info);
                self.dispatch(ActionIntent {
                    kind,
                    scope: ActionScope::All,
                    queue_id: self.queue.queue_id.clone(),
                    targets: ActionTargets::Limit(limit),
                })
            }
            ConfirmFamily::DeleteSingle => {
                let Some(details) = &self.examine.details else {
                    return Command::None;
                };
                self.status.set(
                    format!("Deleting message [{}].", details.msg_sys_msg_id),
                    StatusTone::Info,
                );
                self.dispatch(ActionIntent {
                    kind: ActionKind::Delete,
                    scope: ActionScope::Single,
                    queue_id: details.queue_id.clone(),
                    targets: ActionTargets::Ids(vec![details.msg_sys_msg_id.clone()]),
                })
            }
        }
    }

    /// Disables everything synchronously, then hands the intent to the
    /// loop. At most one request is ever in flight.
    fn dispatch(&mut self, intent: ActionIntent) -> Command {
        self.in_flight = true;
        self.in_flight_action = Some(InFlightAction {
            kind: intent.kind,
            scope: intent.scope,
            queue_id: intent.queue_id.clone(),
        });
        Command::SubmitAction(intent)
    }

    fn on_action_completed(
        &mut self,
        id: u64,
        result: Result<ActionResult, ClientError>,
    ) -> Command {
        if id != self.current_request_id {
            warn!(id, current = self.current_request_id, "dropping stale action response");
            return Command::None;
        }
        let Some(action) = self.in_flight_action.take() else {
            return Command::None;
        };
        self.in_flight = false;

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                // No mutation, no reload; the view stays disabled until the
                // operator navigates away or reloads.
                self.status.set(e.to_string(), StatusTone::Error);
                self.halted = true;
                return Command::None;
            }
        };

        match action.kind {
            ActionKind::Update => self.on_update_result(&result),
            ActionKind::Reissue | ActionKind::Delete => match action.scope {
                ActionScope::Single => self.on_single_result(&action, &result),
                _ => self.on_bulk_result(&action, &result),
            },
        }
    }

    fn on_update_result(&mut self, result: &ActionResult) -> Command {
        let delay = if result.result_ok == Some(true) {
            self.status.set(
                format!("Updated! Time taken: {} ms", result.time_taken_millis),
                StatusTone::Info,
            );
            UPDATE_OK_RELOAD_MS
        } else {
            self.status.set(
                format!(
                    "Not updated within timeout! Time taken: {} ms",
                    result.time_taken_millis
                ),
                StatusTone::Error,
            );
            UPDATE_TIMEOUT_RELOAD_MS
        };
        self.schedule_reload(self.current_view_target(), delay)
    }

    fn on_bulk_result(&mut self, action: &InFlightAction, result: &ActionResult) -> Command {
        let past = past_tense(action.kind);
        let n = result.number_of_affected_messages;

        for msg_sys_msg_id in result.affected_messages.keys() {
            let marked = self
                .queue
                .rows
                .iter_mut()
                .find(|r| &r.msg_sys_msg_id == msg_sys_msg_id);
            match marked {
                Some(row) => {
                    row.visual_state = match action.kind {
                        ActionKind::Reissue => VisualState::Reissued,
                        _ => VisualState::Deleted,
                    };
                }
                None => warn!(%msg_sys_msg_id, "no message row for affected message"),
            }
        }

        let mut text = format!(
            "Done, {n} message{} {past}. Time taken: {} ms.",
            plural(n),
            result.time_taken_millis
        );
        let tone = match action.kind {
            ActionKind::Reissue => {
                text.push_str(" [Check log for new message ids!]");
                StatusTone::Reissued
            }
            _ => StatusTone::Deleted,
        };
        self.status.set(text, tone);

        let delay = match action.kind {
            ActionKind::Reissue => REISSUE_RELOAD_MS,
            _ => DELETE_RELOAD_MS,
        };
        self.schedule_reload(SnapshotTarget::Queue(action.queue_id.clone()), delay)
    }

    fn on_single_result(&mut self, action: &InFlightAction, result: &ActionResult) -> Command {
        let past = past_tense(action.kind);
        if result.number_of_affected_messages != 1 {
            // Not a hard error: the message most likely got processed or
            // removed underneath us. The reload will show the truth.
            self.status.set(
                format!("Message wasn't {past}! Already {past}?"),
                StatusTone::Error,
            );
        } else {
            let note = match action.kind {
                ActionKind::Reissue => " (Check log for new message id)",
                _ => "",
            };
            self.status.set(
                format!(
                    "Done, message {past}!{note} Time taken: {} ms",
                    result.time_taken_millis
                ),
                match action.kind {
                    ActionKind::Reissue => StatusTone::Reissued,
                    _ => StatusTone::Deleted,
                },
            );
            if let Some(details) = &self.examine.details {
                if let Some(row) = self
                    .queue
                    .rows
                    .iter_mut()
                    .find(|r| r.msg_sys_msg_id == details.msg_sys_msg_id)
                {
                    row.visual_state = match action.kind {
                        ActionKind::Reissue => VisualState::Reissued,
                        _ => VisualState::Deleted,
                    };
                }
            }
        }
        // Either way, navigate back to the queue listing to reconcile.
        self.schedule_reload(
            SnapshotTarget::Queue(action.queue_id.clone()),
            SINGLE_ACTION_RELOAD_MS,
        )
    }

    fn schedule_reload(&mut self, target: SnapshotTarget, delay_ms: u64) -> Command {
        self.pending_reload = true;
        self.reload_target = Some(target);
        Command::ScheduleReload(delay_ms)
    }

    fn current_view_target(&self) -> SnapshotTarget {
        match self.view {
            View::BrokerOverview => SnapshotTarget::Overview(self.overview.filter),
            View::QueueBrowse | View::MessageExamine => {
                SnapshotTarget::Queue(self.queue.queue_id.clone())
            }
        }
    }

    fn on_snapshot_loaded(
        &mut self,
        id: u64,
        result: Result<SnapshotPayload, ClientError>,
    ) -> Command {
        if id != self.current_request_id {
            warn!(id, current = self.current_request_id, "dropping stale snapshot");
            return Command::None;
        }
        self.loading = false;

        let payload = match result {
            Ok(payload) => payload,
            Err(e) => {
                // A failed read does not disable actions; report and stay.
                self.status.set(e.to_string(), StatusTone::Error);
                self.pending_reload = false;
                return Command::None;
            }
        };

        // The snapshot is the sole reconciliation mechanism: everything
        // optimistic or transient is discarded along with the old rows.
        self.in_flight = false;
        self.pending_reload = false;
        self.halted = false;
        self.in_flight_action = None;
        self.reload_target = None;
        self.confirm.cancel();
        self.status.clear();

        match payload {
            SnapshotPayload::Overview(snapshot) => {
                debug!(destinations = snapshot.destinations.len(), "overview loaded");
                self.view = View::BrokerOverview;
                self.overview.broker_name = snapshot.broker_name;
                self.overview.destinations = snapshot.destinations;
                self.overview.cursor = self
                    .overview
                    .cursor
                    .min(self.overview.destinations.len().saturating_sub(1));
            }
            SnapshotPayload::Queue(listing) => {
                debug!(queue_id = %listing.queue_id, rows = listing.messages.len(), "queue loaded");
                self.view = View::QueueBrowse;
                self.queue.queue_id = listing.queue_id;
                self.queue.total_on_queue = listing.number_of_messages;
                self.queue.rows = listing
                    .messages
                    .into_iter()
                    .map(MessageRow::from_summary)
                    .collect();
                self.queue.cursor = 0;
                self.queue.limit_input = listing.number_of_messages.to_string();
            }
            SnapshotPayload::Message(details) => {
                debug!(msg = %details.msg_sys_msg_id, calls = details.calls.len(), "message loaded");
                self.view = View::MessageExamine;
                self.examine.modal.reset(details.calls.len());
                self.examine.call_cursor = 0;
                self.examine.details = Some(details);
            }
        }
        Command::None
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn present_tense(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Reissue => "Reissuing",
        ActionKind::Delete => "Deleting",
        ActionKind::Update => "Updating",
    }
}

fn past_tense(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Reissue => "reissued",
        ActionKind::Delete => "deleted",
        ActionKind::Update => "updated",
    }
}
