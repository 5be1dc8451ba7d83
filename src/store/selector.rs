use std::sync::Arc;

use crate::store::state::{AppState, FilterState, Item};

/// Memoized view of the items matching the current filter query.
///
/// The cache is keyed by the identity of the two input slices: as
/// long as neither the items nor the filter `Arc` has been replaced,
/// the previously computed list is handed back as-is, same
/// allocation. Dispatches that only touch other slices therefore
/// never trigger a recompute.
#[derive(Debug, Default)]
pub struct FilteredItems {
    cached: Option<CachedSelection>,
}

#[derive(Debug)]
struct CachedSelection {
    items: Arc<Vec<Item>>,
    filter: Arc<FilterState>,
    result: Arc<Vec<Item>>,
}

impl FilteredItems {
    pub fn new() -> Self {
        Self { cached: None }
    }

    pub fn select(&mut self, state: &AppState) -> Arc<Vec<Item>> {
        if let Some(cached) = &self.cached {
            if Arc::ptr_eq(&cached.items, &state.items)
                && Arc::ptr_eq(&cached.filter, &state.filter)
            {
                return Arc::clone(&cached.result);
            }
        }

        let result = filter_items(&state.items, state.filter.query.as_deref());
        tracing::debug!(
            matched = result.len(),
            total = state.items.len(),
            "filter recomputed"
        );
        self.cached = Some(CachedSelection {
            items: Arc::clone(&state.items),
            filter: Arc::clone(&state.filter),
            result: Arc::clone(&result),
        });
        result
    }
}

/// Case-insensitive substring match on name, preserving order. A
/// missing or empty query returns the items slice itself rather than
/// a copy.
fn filter_items(items: &Arc<Vec<Item>>, query: Option<&str>) -> Arc<Vec<Item>> {
    match query {
        None | Some("") => Arc::clone(items),
        Some(query) => {
            let needle = query.to_lowercase();
            Arc::new(
                items
                    .iter()
                    .filter(|item| item.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect(),
            )
        }
    }
}
