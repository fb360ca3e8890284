use crate::console::domain::models::{MessageRow, VisualState};
use crate::console::domain::selection::{
    SelectionAggregate, TriState, invert_all, selected_ids, toggle_all, toggle_one,
};

fn rows(n: usize) -> Vec<MessageRow> {
    (0..n)
        .map(|i| MessageRow {
            msg_sys_msg_id: format!("m{i}"),
            trace_id: format!("trace{i}"),
            from: "SomeService.someStage".to_string(),
            timestamp_millis: 1_700_000_000_000 + i as i64,
            persistent: true,
            selected: false,
            visual_state: VisualState::Normal,
        })
        .collect()
}

#[test]
fn aggregate_partitions_all_rows() {
    let mut list = rows(5);
    toggle_one(&mut list, "m1", true);
    toggle_one(&mut list, "m3", true);

    let agg = SelectionAggregate::compute(&list);
    assert_eq!(agg.checked, 2);
    assert_eq!(agg.unchecked, 3);
    assert_eq!(agg.checked + agg.unchecked, list.len());
    assert!(agg.mixed());
    assert_eq!(agg.tri_state(), TriState::Indeterminate);
}

#[test]
fn toggle_all_checks_and_unchecks_everything() {
    let mut list = rows(3);

    toggle_all(&mut list, true);
    let agg = SelectionAggregate::compute(&list);
    assert!(agg.all_selected());
    assert_eq!(agg.tri_state(), TriState::Checked);

    toggle_all(&mut list, false);
    let agg = SelectionAggregate::compute(&list);
    assert!(agg.all_unselected());
    assert_eq!(agg.tri_state(), TriState::Unchecked);
}

#[test]
fn invert_flips_every_row() {
    let mut list = rows(4);
    toggle_one(&mut list, "m0", true);
    toggle_one(&mut list, "m2", true);

    invert_all(&mut list);

    assert_eq!(selected_ids(&list), vec!["m1".to_string(), "m3".to_string()]);
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let mut list = rows(2);
    toggle_one(&mut list, "nonexistent", true);
    assert!(SelectionAggregate::compute(&list).all_unselected());
}

#[test]
fn empty_list_is_unchecked_not_indeterminate() {
    let agg = SelectionAggregate::compute(&[]);
    assert_eq!(agg.total(), 0);
    assert!(!agg.all_selected());
    assert!(agg.all_unselected());
    assert_eq!(agg.tri_state(), TriState::Unchecked);
}

#[test]
fn summary_line_variants() {
    let mut list = rows(3);
    assert_eq!(
        SelectionAggregate::compute(&list).summary_line(),
        "Messages in list: 3, no selected messages"
    );

    toggle_one(&mut list, "m0", true);
    assert_eq!(
        SelectionAggregate::compute(&list).summary_line(),
        "Messages in list: 3. Selected: 1, not selected:2"
    );

    toggle_all(&mut list, true);
    assert_eq!(
        SelectionAggregate::compute(&list).summary_line(),
        "Messages in list: 3, ALL messages selected"
    );
}
