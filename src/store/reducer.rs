use std::sync::Arc;

use crate::store::action::Action;
use crate::store::state::{FilterState, Item, SelectionState};

/// Pure slice transition: `(previous slice, action) -> next slice`.
///
/// Returning the input `Arc` unchanged signals "nothing happened" to
/// reference-based memoization downstream, so reducers only allocate
/// a new slice when the action actually concerns them.
pub trait SliceReducer {
    type Slice;

    fn reduce(slice: Arc<Self::Slice>, action: &Action) -> Arc<Self::Slice>;
}

pub struct FilterReducer;

impl SliceReducer for FilterReducer {
    type Slice = FilterState;

    fn reduce(slice: Arc<FilterState>, action: &Action) -> Arc<FilterState> {
        match action {
            Action::ChangeFilterQuery(value) => Arc::new(FilterState {
                query: Some(value.clone()),
            }),
            Action::ClearFilterQuery => {
                if slice.query.is_none() {
                    slice
                } else {
                    Arc::new(FilterState { query: None })
                }
            }
            _ => slice,
        }
    }
}

pub struct ItemsReducer;

impl SliceReducer for ItemsReducer {
    type Slice = Vec<Item>;

    // No action updates the item list. The reducer exists for
    // symmetry with the other slices and keeps the slice identity
    // stable across every dispatch.
    fn reduce(slice: Arc<Vec<Item>>, _action: &Action) -> Arc<Vec<Item>> {
        slice
    }
}

pub struct SelectionReducer;

impl SliceReducer for SelectionReducer {
    type Slice = SelectionState;

    fn reduce(slice: Arc<SelectionState>, action: &Action) -> Arc<SelectionState> {
        match action {
            Action::MoveSelectionUp => {
                if slice.cursor == 0 {
                    slice
                } else {
                    Arc::new(SelectionState {
                        cursor: slice.cursor - 1,
                    })
                }
            }
            Action::MoveSelectionDown => Arc::new(SelectionState {
                cursor: slice.cursor + 1,
            }),
            _ => slice,
        }
    }
}
