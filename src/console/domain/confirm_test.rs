use crate::console::domain::confirm::{ConfirmFamily, ConfirmSequencer, requires_confirm};
use crate::console::domain::models::{ActionKind, ActionScope};

#[test]
fn propose_and_cancel() {
    let mut seq = ConfirmSequencer::new();
    assert!(!seq.is_pending());

    seq.propose(ConfirmFamily::DeleteSelected);
    assert!(seq.is_proposed(ConfirmFamily::DeleteSelected));

    seq.cancel();
    assert!(!seq.is_pending());

    // Cancelling an already-idle sequencer is a no-op.
    seq.cancel();
    assert!(!seq.is_pending());
}

#[test]
fn proposing_second_family_forces_first_idle() {
    let mut seq = ConfirmSequencer::new();
    seq.propose(ConfirmFamily::DeleteSelected);
    seq.propose(ConfirmFamily::ReissueAll);

    assert!(!seq.is_proposed(ConfirmFamily::DeleteSelected));
    assert!(seq.is_proposed(ConfirmFamily::ReissueAll));
    // At most one family is ever pending.
    assert_eq!(seq.proposed(), Some(ConfirmFamily::ReissueAll));
}

#[test]
fn take_for_dispatch_leaves_idle() {
    let mut seq = ConfirmSequencer::new();
    seq.propose(ConfirmFamily::DeleteAll);

    assert_eq!(seq.take_for_dispatch(), Some(ConfirmFamily::DeleteAll));
    assert!(!seq.is_pending());
    assert_eq!(seq.take_for_dispatch(), None);
}

#[test]
fn confirm_policy() {
    // Reissue on a specific target set is immediate.
    assert!(!requires_confirm(ActionKind::Reissue, ActionScope::Single));
    assert!(!requires_confirm(ActionKind::Reissue, ActionScope::Selected));
    // Reissue-all risks mass re-processing and is confirmed.
    assert!(requires_confirm(ActionKind::Reissue, ActionScope::All));
    // Every delete is confirmed.
    assert!(requires_confirm(ActionKind::Delete, ActionScope::Single));
    assert!(requires_confirm(ActionKind::Delete, ActionScope::Selected));
    assert!(requires_confirm(ActionKind::Delete, ActionScope::All));
    assert!(!requires_confirm(ActionKind::Update, ActionScope::All));
}

#[test]
fn family_properties() {
    assert!(ConfirmFamily::ReissueAll.uses_limit());
    assert!(ConfirmFamily::DeleteAll.uses_limit());
    assert!(!ConfirmFamily::DeleteSelected.uses_limit());
    assert!(!ConfirmFamily::DeleteSingle.uses_limit());

    assert_eq!(ConfirmFamily::ReissueAll.kind(), ActionKind::Reissue);
    assert_eq!(ConfirmFamily::DeleteSingle.scope(), ActionScope::Single);
    assert_eq!(ConfirmFamily::DeleteSelected.scope(), ActionScope::Selected);
}
