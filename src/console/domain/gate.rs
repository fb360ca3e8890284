use crate::console::domain::selection::SelectionAggregate;

/// Enabled/disabled set for the queue browse action affordances.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ActionAvailability {
    pub reissue_selected: bool,
    pub delete_selected: bool,
    pub reissue_all: bool,
    pub delete_all: bool,
}

/// Pure policy: a selected subset enables the "selected" actions and
/// disables the "all" actions (no ambiguous bulk action while a subset is
/// chosen); an empty selection enables the "all" actions only when the
/// queue is known to be non-empty. While a request is in flight or a reload
/// is pending, everything is off.
pub fn evaluate(
    aggregate: &SelectionAggregate,
    queue_non_empty: bool,
    busy: bool,
) -> ActionAvailability {
    if busy {
        return ActionAvailability::default();
    }
    if aggregate.checked > 0 {
        ActionAvailability {
            reissue_selected: true,
            delete_selected: true,
            reissue_all: false,
            delete_all: false,
        }
    } else {
        ActionAvailability {
            reissue_selected: false,
            delete_selected: false,
            reissue_all: queue_non_empty,
            delete_all: queue_non_empty,
        }
    }
}
