//! Sort/filter engine and the per-counter selection model.

mod selection;
mod sort;

pub use selection::SelectionModel;
pub use sort::{
    filter_by_counter, sort_responses, SortDirection, SortKey, SortState, ViewSorts,
};
