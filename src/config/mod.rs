mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{default_items, Config};
