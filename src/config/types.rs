use serde::{Deserialize, Serialize};

use crate::store::Item;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// The records shown in the list. Fixed for the lifetime of the
    /// process; nothing mutates the list after startup.
    #[serde(default = "default_items")]
    pub items: Vec<Item>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            items: default_items(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// Built-in roster used when no config file provides one.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new(1, "Alaska"),
        Item::new(2, "Montana"),
        Item::new(3, "Kentucky"),
        Item::new(4, "Ohio"),
    ]
}
