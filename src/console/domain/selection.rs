use crate::console::domain::models::MessageRow;

/// Tri-state of the "select all" control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TriState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// Aggregate over the live row set. Always recomputed, never cached, so it
/// cannot diverge from the rows it describes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SelectionAggregate {
    pub checked: usize,
    pub unchecked: usize,
}

impl SelectionAggregate {
    pub fn compute(rows: &[MessageRow]) -> Self {
        let checked = rows.iter().filter(|r| r.selected).count();
        Self {
            checked,
            unchecked: rows.len() - checked,
        }
    }

    pub fn total(&self) -> usize {
        self.checked + self.unchecked
    }

    pub fn all_selected(&self) -> bool {
        self.unchecked == 0 && self.total() > 0
    }

    pub fn all_unselected(&self) -> bool {
        self.checked == 0
    }

    pub fn mixed(&self) -> bool {
        self.checked > 0 && self.unchecked > 0
    }

    pub fn tri_state(&self) -> TriState {
        if self.total() == 0 {
            TriState::Unchecked
        } else if self.mixed() {
            TriState::Indeterminate
        } else if self.all_selected() {
            TriState::Checked
        } else {
            TriState::Unchecked
        }
    }

    /// Human-readable summary for the listing header.
    pub fn summary_line(&self) -> String {
        let mut text = format!("Messages in list: {}", self.total());
        if self.all_unselected() {
            text.push_str(", no selected messages");
        } else if self.all_selected() {
            text.push_str(", ALL messages selected");
        } else {
            text.push_str(&format!(
                ". Selected: {}, not selected:{}",
                self.checked, self.unchecked
            ));
        }
        text
    }
}

/// Selection mutators. Callers must follow every mutation with a recompute
/// of the aggregate and a cancel of any pending confirm, which the state
/// update layer does in one place.
pub fn toggle_all(rows: &mut [MessageRow], checked: bool) {
    for row in rows.iter_mut() {
        row.selected = checked;
    }
}

pub fn toggle_one(rows: &mut [MessageRow], msg_sys_msg_id: &str, checked: bool) {
    if let Some(row) = rows.iter_mut().find(|r| r.msg_sys_msg_id == msg_sys_msg_id) {
        row.selected = checked;
    }
}

pub fn invert_all(rows: &mut [MessageRow]) {
    for row in rows.iter_mut() {
        row.selected = !row.selected;
    }
}

pub fn selected_ids(rows: &[MessageRow]) -> Vec<String> {
    rows.iter()
        .filter(|r| r.selected)
        .map(|r| r.msg_sys_msg_id.clone())
        .collect()
}
