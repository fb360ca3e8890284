use crate::console::domain::models::{ActionKind, ActionScope};

/// Destructive-action families that go through the two-phase
/// propose → confirm/cancel protocol. The queue browse view renders the
/// first three; the examine view renders only `DeleteSingle`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfirmFamily {
    DeleteSelected,
    ReissueAll,
    DeleteAll,
    DeleteSingle,
}

impl ConfirmFamily {
    /// "All"-scope confirms also reveal the numeric limit input.
    pub fn uses_limit(self) -> bool {
        matches!(self, ConfirmFamily::ReissueAll | ConfirmFamily::DeleteAll)
    }

    pub fn kind(self) -> ActionKind {
        match self {
            ConfirmFamily::ReissueAll => ActionKind::Reissue,
            _ => ActionKind::Delete,
        }
    }

    pub fn scope(self) -> ActionScope {
        match self {
            ConfirmFamily::DeleteSelected => ActionScope::Selected,
            ConfirmFamily::ReissueAll | ConfirmFamily::DeleteAll => ActionScope::All,
            ConfirmFamily::DeleteSingle => ActionScope::Single,
        }
    }
}

/// Whether an action gesture needs the propose phase at all. Reissue on a
/// specific target set dispatches immediately; reissue-all risks mass
/// re-processing and is confirmed like the deletes.
pub fn requires_confirm(kind: ActionKind, scope: ActionScope) -> bool {
    match kind {
        ActionKind::Update => false,
        ActionKind::Delete => true,
        ActionKind::Reissue => scope == ActionScope::All,
    }
}

/// The propose/confirm/cancel state machine. One slot for the whole view:
/// proposing a family forces every sibling back to idle, so at most one
/// confirm is ever pending.
#[derive(Debug, Default)]
pub struct ConfirmSequencer {
    proposed: Option<ConfirmFamily>,
}

impl ConfirmSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn propose(&mut self, family: ConfirmFamily) {
        self.proposed = Some(family);
    }

    /// Idempotent: cancelling an already-idle sequencer is a no-op.
    pub fn cancel(&mut self) {
        self.proposed = None;
    }

    pub fn proposed(&self) -> Option<ConfirmFamily> {
        self.proposed
    }

    pub fn is_proposed(&self, family: ConfirmFamily) -> bool {
        self.proposed == Some(family)
    }

    pub fn is_pending(&self) -> bool {
        self.proposed.is_some()
    }

    /// Confirm gesture: hands the family out for dispatch and leaves the
    /// sequencer idle. The action area stays visually pending via the
    /// dispatcher's in-flight flag, not via this state.
    pub fn take_for_dispatch(&mut self) -> Option<ConfirmFamily> {
        self.proposed.take()
    }
}
