use roster::config::default_items;
use roster::store::{Action, AppState, FilteredItems, Item, Store};
use std::sync::Arc;

fn seeded_store() -> Store {
    Store::new(AppState::with_items(default_items()))
}

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

// -- Filter semantics ----------------------------------------------

#[test]
fn no_query_returns_all_items_in_seed_order() {
    let store = seeded_store();
    let result = FilteredItems::new().select(store.state());
    assert_eq!(names(&result), ["Alaska", "Montana", "Kentucky", "Ohio"]);
}

#[test]
fn no_query_returns_the_items_slice_itself() {
    let store = seeded_store();
    let result = FilteredItems::new().select(store.state());
    assert!(Arc::ptr_eq(&result, &store.state().items));
}

#[test]
fn empty_query_behaves_like_no_query() {
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery(String::new()));
    let result = FilteredItems::new().select(store.state());
    assert!(Arc::ptr_eq(&result, &store.state().items));
}

#[test]
fn query_matches_case_insensitively() {
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery("ALA".to_string()));
    let result = FilteredItems::new().select(store.state());
    assert_eq!(names(&result), ["Alaska"]);
}

#[test]
fn query_with_no_match_returns_empty() {
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery("xyz".to_string()));
    let result = FilteredItems::new().select(store.state());
    assert!(result.is_empty());
}

#[test]
fn result_is_an_ordered_subsequence() {
    let mut store = Store::new(AppState::with_items(vec![
        Item::new(1, "Bob"),
        Item::new(2, "alice"),
        Item::new(3, "CAROL"),
        Item::new(4, "bobby"),
    ]));
    store.dispatch(Action::ChangeFilterQuery("bo".to_string()));
    let result = FilteredItems::new().select(store.state());
    assert_eq!(names(&result), ["Bob", "bobby"]);
}

// -- Memoization ---------------------------------------------------

#[test]
fn same_state_reuses_result_identity() {
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery("o".to_string()));
    let mut selector = FilteredItems::new();
    let first = selector.select(store.state());
    let second = selector.select(store.state());
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn unrelated_dispatch_preserves_result_identity() {
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery("o".to_string()));
    let mut selector = FilteredItems::new();
    let before = selector.select(store.state());

    // Only the selection slice changes; the filtered list must come
    // back as the very same allocation.
    store.dispatch(Action::MoveSelectionDown);
    let after = selector.select(store.state());
    assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn query_change_invalidates_cache() {
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery("o".to_string()));
    let mut selector = FilteredItems::new();
    let before = selector.select(store.state());

    store.dispatch(Action::ChangeFilterQuery("ohi".to_string()));
    let after = selector.select(store.state());
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(names(&after), ["Ohio"]);
}

#[test]
fn cache_is_keyed_by_reference_not_value() {
    // Re-dispatching an equal query still replaces the filter slice,
    // so the selector recomputes even though nothing visibly changed.
    let mut store = seeded_store();
    store.dispatch(Action::ChangeFilterQuery("o".to_string()));
    let mut selector = FilteredItems::new();
    let before = selector.select(store.state());

    store.dispatch(Action::ChangeFilterQuery("o".to_string()));
    let after = selector.select(store.state());
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(names(&before), names(&after));
}
