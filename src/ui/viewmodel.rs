use std::sync::Arc;

use crate::store::{AppState, Item};

/// Snapshot of everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct ViewModel {
    /// Current filter query; `None` renders as a placeholder.
    pub query: Option<String>,
    /// Items surviving the filter, in original order.
    pub items: Arc<Vec<Item>>,
    /// Cursor row within `items`, `None` when the list is empty.
    pub cursor: Option<usize>,
    pub matched: usize,
    pub total: usize,
}

impl ViewModel {
    /// Builds the frame snapshot from store state plus the already
    /// selected filtered list. The raw cursor may point past the end
    /// of the filtered list when the filter shrank under it; it is
    /// clamped here rather than in the reducer.
    pub fn compute(state: &AppState, filtered: Arc<Vec<Item>>) -> Self {
        let matched = filtered.len();
        let cursor = if matched == 0 {
            None
        } else {
            Some(state.selection.cursor.min(matched - 1))
        };
        Self {
            query: state.filter.query.clone(),
            total: state.items.len(),
            matched,
            cursor,
            items: filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, FilteredItems, SliceReducer};

    fn state_with(names: &[&str]) -> AppState {
        AppState::with_items(
            names
                .iter()
                .enumerate()
                .map(|(idx, name)| Item::new(idx as u32 + 1, *name))
                .collect(),
        )
    }

    #[test]
    fn cursor_clamps_to_last_row() {
        let mut state = state_with(&["Alaska", "Montana"]);
        for _ in 0..2 {
            state.selection = crate::store::SelectionReducer::reduce(
                Arc::clone(&state.selection),
                &Action::MoveSelectionDown,
            );
        }

        let filtered = FilteredItems::new().select(&state);
        let view = ViewModel::compute(&state, filtered);
        assert_eq!(view.cursor, Some(1));
    }

    #[test]
    fn empty_filtered_list_has_no_cursor() {
        let mut state = state_with(&["Alaska"]);
        state.filter = crate::store::FilterReducer::reduce(
            Arc::clone(&state.filter),
            &Action::ChangeFilterQuery("zzz".to_string()),
        );

        let filtered = FilteredItems::new().select(&state);
        let view = ViewModel::compute(&state, filtered);
        assert_eq!(view.cursor, None);
        assert_eq!(view.matched, 0);
        assert_eq!(view.total, 1);
    }
}
