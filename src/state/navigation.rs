//! Table selection state.
//!
//! Selection only moves the highlight and scroll position of the transaction
//! table. Rows are never filtered or reordered.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Index of the highlighted row, if any.
    pub selected: Option<usize>,
}

impl NavigationState {
    /// Creates a navigation state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the selection one row up, stopping at the first row.
    pub fn move_up(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1).min(row_count - 1),
            None => 0,
        });
    }

    /// Move the selection one row down, stopping at the last row.
    pub fn move_down(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(row_count - 1),
            None => 0,
        });
    }

    /// Jump to the first row.
    pub fn select_first(&mut self, row_count: usize) {
        self.selected = (row_count > 0).then_some(0);
    }

    /// Jump to the last row.
    pub fn select_last(&mut self, row_count: usize) {
        self.selected = row_count.checked_sub(1);
    }

    /// Keep the selection inside `0..row_count` after the rows change.
    pub fn clamp(&mut self, row_count: usize) {
        self.selected = match (self.selected, row_count) {
            (_, 0) => None,
            (Some(index), n) => Some(index.min(n - 1)),
            (None, _) => None,
        };
    }
}
