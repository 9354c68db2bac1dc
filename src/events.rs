// Grid events - change notifications emitted by the tile containers
// Listeners are invoked synchronously on the mutating call, in registration order

use serde::{Deserialize, Serialize};
use std::fmt;

/// Notifications emitted by `TileGridModel` and `TileBoard`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    /// A dense-model cell took a new value
    CellChanged {
        row: usize,
        col: usize,
        value: i64,
    },
    /// A tile was placed on an empty board cell
    TileAdded {
        row: usize,
        col: usize,
        value: i64,
    },
    /// A tile left the board
    TileRemoved {
        row: usize,
        col: usize,
    },
    /// A tile changed value in place
    TileValueChanged {
        row: usize,
        col: usize,
        value: i64,
    },
    /// A tile relocated to an empty cell
    TileMoved {
        old_row: usize,
        old_col: usize,
        new_row: usize,
        new_col: usize,
    },
}

/// Synchronous listener registry shared by the grid containers
pub struct EventListeners {
    listeners: Vec<Box<dyn Fn(&GridEvent) + Send + Sync>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, listener: F)
    where
        F: Fn(&GridEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&self, event: &GridEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for EventListeners {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListeners")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
