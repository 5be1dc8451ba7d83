//! Terminal roster browser with an incremental name filter.
//!
//! State lives in a unidirectional [`store`](crate::store): the UI
//! dispatches actions, pure reducers produce the next state, and a
//! memoized selector derives the filtered list. The [`ui`](crate::ui)
//! layer subscribes to the store and renders with ratatui.

pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
