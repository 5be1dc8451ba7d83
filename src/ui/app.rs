use std::cell::Cell;
use std::rc::Rc;

use crate::store::{Action, FilteredItems, Store};
use crate::ui::viewmodel::ViewModel;

/// Presentation binding: owns the store and the memoized selector,
/// and subscribes a listener that flips the dirty flag so the event
/// loop knows a re-render is due. All list and query state lives in
/// the store; the only UI-local state is quit intent and the flag.
pub struct App {
    store: Store,
    filtered: FilteredItems,
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
}

impl App {
    pub fn new(mut store: Store) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(Box::new(move |_state| flag.set(true)));
        Self {
            store,
            filtered: FilteredItems::new(),
            dirty,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// True once since the last call; cleared on read.
    pub fn take_dirty(&mut self) -> bool {
        self.dirty.replace(false)
    }

    /// Forces a redraw without going through the store (resize).
    pub fn mark_dirty(&mut self) {
        self.dirty.set(true);
    }

    pub fn view(&mut self) -> ViewModel {
        let filtered = self.filtered.select(self.store.state());
        ViewModel::compute(self.store.state(), filtered)
    }

    pub fn push_query_char(&mut self, ch: char) {
        let mut query = self
            .store
            .state()
            .filter
            .query
            .clone()
            .unwrap_or_default();
        query.push(ch);
        self.store.dispatch(Action::ChangeFilterQuery(query));
    }

    /// Shortens the query by one character. Backspacing the last
    /// character leaves an empty query, which is not the same as a
    /// cleared one: the full list shows, but the input stays active.
    pub fn pop_query_char(&mut self) {
        let Some(mut query) = self.store.state().filter.query.clone() else {
            return;
        };
        if query.pop().is_none() {
            return;
        }
        self.store.dispatch(Action::ChangeFilterQuery(query));
    }

    /// Esc clears an active filter first; a second Esc quits.
    pub fn clear_or_quit(&mut self) {
        if self.store.state().filter.query.is_some() {
            self.store.dispatch(Action::ClearFilterQuery);
        } else {
            self.request_quit();
        }
    }

    pub fn move_selection_up(&mut self) {
        self.store.dispatch(Action::MoveSelectionUp);
    }

    /// List bounds are a view concern: only dispatch when a row
    /// exists below the cursor.
    pub fn move_selection_down(&mut self) {
        let view = self.view();
        if let Some(cursor) = view.cursor {
            if cursor + 1 < view.matched {
                self.store.dispatch(Action::MoveSelectionDown);
            }
        }
    }
}
