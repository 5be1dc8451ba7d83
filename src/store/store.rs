use std::sync::Arc;

use crate::store::action::Action;
use crate::store::reducer::{FilterReducer, ItemsReducer, SelectionReducer, SliceReducer};
use crate::store::state::AppState;

pub type Listener = Box<dyn FnMut(&AppState)>;

/// Handle returned by [`Store::subscribe`]; pass it back to
/// [`Store::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// The state container. Built once by the composition root and passed
/// by value to whoever drives it; there is no ambient/global lookup.
pub struct Store {
    state: AppState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs every slice reducer over the action, replaces the held
    /// state, then notifies all listeners in registration order.
    /// Everything completes before `dispatch` returns, and `&mut
    /// self` makes a reentrant dispatch from inside a listener
    /// unrepresentable.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.state = AppState {
            filter: FilterReducer::reduce(Arc::clone(&self.state.filter), &action),
            items: ItemsReducer::reduce(Arc::clone(&self.state.items), &action),
            selection: SelectionReducer::reduce(Arc::clone(&self.state.selection), &action),
        };
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false when the id was not subscribed (or already
    /// removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}
