use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single roster record. Ids are unique within the list and never
/// change once the state is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Filter slice. `None` means "no filter applied, show all"; an empty
/// string is a real query distinct from that.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: Option<String>,
}

/// Selection slice: the list cursor. The cursor is not aware of list
/// bounds; the view clamps it against the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub cursor: usize,
}

/// The whole application state. Slices sit behind `Arc`s so reducers
/// can hand back the previous slice untouched and downstream
/// memoization can compare identities instead of contents.
#[derive(Debug, Clone)]
pub struct AppState {
    pub filter: Arc<FilterState>,
    pub items: Arc<Vec<Item>>,
    pub selection: Arc<SelectionState>,
}

impl AppState {
    /// Initial state: the given seed items, no filter, cursor at the
    /// top. The items slice is never replaced after this.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            filter: Arc::new(FilterState::default()),
            items: Arc::new(items),
            selection: Arc::new(SelectionState::default()),
        }
    }
}
