//! Admin dashboard working set.
//!
//! Holds the loaded response collection together with per-counter sort state
//! and selections, updated only in response to completed store requests; a
//! failed request leaves the state untouched.

use crate::domain::foundation::{CounterId, ResponseId, ValidationError};
use crate::domain::listing::{
    filter_by_counter, sort_responses, SelectionModel, SortKey, SortState, ViewSorts,
};
use crate::domain::response::Response;

/// In-memory state behind the admin dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    responses: Vec<Response>,
    sorts: ViewSorts,
    selection: SelectionModel,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set with a freshly loaded collection.
    pub fn load(&mut self, responses: Vec<Response>) {
        self.responses = responses;
    }

    /// The unordered working set.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Header click on one counter's table.
    pub fn toggle_counter_sort(&mut self, counter: CounterId, key: SortKey) {
        self.sorts.toggle_counter(counter, key);
    }

    /// Header click on the all-responses view.
    pub fn toggle_all_sort(&mut self, key: SortKey) {
        self.sorts.toggle_all(key);
    }

    pub fn counter_sort(&self, counter: CounterId) -> SortState {
        self.sorts.counter_state(counter)
    }

    pub fn all_sort(&self) -> SortState {
        self.sorts.all_state()
    }

    /// One counter's rows, ordered by that counter's sort state.
    pub fn counter_view(&self, counter: CounterId) -> Vec<Response> {
        let filtered = filter_by_counter(&self.responses, counter);
        let state = self.sorts.counter_state(counter);
        sort_responses(&filtered, state.key, state.direction)
    }

    /// All rows, ordered by the all-responses sort state.
    pub fn all_view(&self) -> Vec<Response> {
        let state = self.sorts.all_state();
        sort_responses(&self.responses, state.key, state.direction)
    }

    /// Flips one row's selection checkbox.
    pub fn toggle_selection(&mut self, counter: CounterId, id: ResponseId) {
        self.selection.toggle(counter, id);
    }

    /// The header checkbox: selects every row currently at the counter, or
    /// clears the selection.
    pub fn select_all_in_counter(&mut self, counter: CounterId, checked: bool) {
        if checked {
            let ids = filter_by_counter(&self.responses, counter)
                .iter()
                .map(|r| r.id)
                .collect::<Vec<_>>();
            self.selection.select_all(counter, ids);
        } else {
            self.selection.clear(counter);
        }
    }

    pub fn selection_count(&self, counter: CounterId) -> usize {
        self.selection.count(counter)
    }

    pub fn is_selected(&self, counter: CounterId, id: ResponseId) -> bool {
        self.selection.is_selected(counter, id)
    }

    /// The id batch a bulk delete would send; empty selections are rejected
    /// before any request goes out.
    pub fn deletion_batch(&self, counter: CounterId) -> Result<Vec<ResponseId>, ValidationError> {
        self.selection.deletion_batch(counter)
    }

    /// Applies an observed successful bulk delete: exactly the given ids
    /// leave the collection and the counter's selection clears.
    pub fn apply_deletion(&mut self, counter: CounterId, ids: &[ResponseId]) {
        self.responses.retain(|r| !ids.contains(&r.id));
        self.selection.clear(counter);
    }

    /// Applies an observed successful delete-all.
    pub fn apply_delete_all(&mut self) {
        self.responses.clear();
        self.selection.clear_all();
    }
}
