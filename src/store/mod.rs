//! Unidirectional state management for the roster UI.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducers ──→ AppState ──→ View
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **AppState**: three independently-reduced slices, each behind an
//!   `Arc` so a dispatch only replaces the slice it touched
//! - **Action**: tagged description of an intended state change
//! - **Reducer**: pure function `(slice, action) -> slice`
//! - **Store**: applies every reducer per dispatch, then notifies
//!   subscribers synchronously
//! - **Selector**: memoized derived view of the filtered item list

mod action;
mod reducer;
mod selector;
mod state;
mod store;

pub use action::Action;
pub use reducer::{FilterReducer, ItemsReducer, SelectionReducer, SliceReducer};
pub use selector::FilteredItems;
pub use state::{AppState, FilterState, Item, SelectionState};
pub use store::{Listener, Store, SubscriptionId};
