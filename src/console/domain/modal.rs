/// Linear, indexable navigator over the recorded call stack of the examine
/// view. Owns the "active call" index outright: constructed fresh for each
/// loaded message, mutated only through these entry points.
///
/// Navigation that would step outside the existing entries leaves the state
/// unchanged; the caller still treats the key as consumed so it cannot fall
/// through to scrolling.
#[derive(Debug, Default)]
pub struct CallModalNavigator {
    entry_count: usize,
    active: Option<usize>,
}

impl CallModalNavigator {
    pub fn new(entry_count: usize) -> Self {
        Self {
            entry_count,
            active: None,
        }
    }

    /// Reset for a (re)loaded message: closed, new entry count.
    pub fn reset(&mut self, entry_count: usize) {
        self.entry_count = entry_count;
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Open the modal on `call_no`, if such an entry exists. Returns whether
    /// the modal opened.
    pub fn open(&mut self, call_no: usize) -> bool {
        if call_no < self.entry_count {
            self.active = Some(call_no);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Move to the previous entry. Returns whether the active entry changed.
    pub fn up(&mut self) -> bool {
        match self.active {
            Some(n) if n > 0 => {
                self.active = Some(n - 1);
                true
            }
            _ => false,
        }
    }

    /// Move to the next entry. Returns whether the active entry changed.
    pub fn down(&mut self) -> bool {
        match self.active {
            Some(n) if n + 1 < self.entry_count => {
                self.active = Some(n + 1);
                true
            }
            _ => false,
        }
    }
}
