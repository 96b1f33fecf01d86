//! Per-counter selection of responses for batched deletion.

use std::collections::{BTreeSet, HashMap};

use crate::domain::foundation::{CounterId, ResponseId, ValidationError};

/// Selected response ids, tracked per counter view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    by_counter: HashMap<CounterId, BTreeSet<ResponseId>>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected ids of one counter, in ascending order.
    pub fn selected(&self, counter: CounterId) -> Vec<ResponseId> {
        self.by_counter
            .get(&counter)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of selected rows at one counter.
    pub fn count(&self, counter: CounterId) -> usize {
        self.by_counter.get(&counter).map(BTreeSet::len).unwrap_or(0)
    }

    /// Whether a row is currently selected.
    pub fn is_selected(&self, counter: CounterId, id: ResponseId) -> bool {
        self.by_counter
            .get(&counter)
            .map(|set| set.contains(&id))
            .unwrap_or(false)
    }

    /// Flips one row's selection.
    pub fn toggle(&mut self, counter: CounterId, id: ResponseId) {
        let set = self.by_counter.entry(counter).or_default();
        if !set.insert(id) {
            set.remove(&id);
        }
    }

    /// Selects every given row of a counter (the header checkbox).
    pub fn select_all(&mut self, counter: CounterId, ids: impl IntoIterator<Item = ResponseId>) {
        self.by_counter.insert(counter, ids.into_iter().collect());
    }

    /// Clears one counter's selection.
    pub fn clear(&mut self, counter: CounterId) {
        self.by_counter.remove(&counter);
    }

    /// Clears every selection.
    pub fn clear_all(&mut self) {
        self.by_counter.clear();
    }

    /// The id batch for a bulk delete.
    ///
    /// An empty selection is rejected here, before any request is issued;
    /// the store never sees it.
    pub fn deletion_batch(&self, counter: CounterId) -> Result<Vec<ResponseId>, ValidationError> {
        let ids = self.selected(counter);
        if ids.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        Ok(ids)
    }
}
