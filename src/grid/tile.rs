// Tile - a single observable cell holding one integer value

use crate::DEFAULT_TILE_VALUE;
use std::fmt;

/// One grid cell. Observers registered with [`Tile::on_value_changed`]
/// are invoked synchronously with the new value, and only when the value
/// actually changes.
pub struct Tile {
    value: i64,
    observers: Vec<Box<dyn Fn(i64) + Send + Sync>>,
}

impl Tile {
    pub fn new() -> Self {
        Self::with_value(DEFAULT_TILE_VALUE)
    }

    pub fn with_value(value: i64) -> Self {
        Self {
            value,
            observers: Vec::new(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Set the value. Returns true and notifies observers if the value
    /// changed, returns false without notifying otherwise.
    pub fn set_value(&mut self, value: i64) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for observer in &self.observers {
            observer(value);
        }
        true
    }

    pub fn on_value_changed<F>(&mut self, observer: F)
    where
        F: Fn(i64) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicI64, AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn test_default_value() {
        let tile = Tile::new();
        assert_eq!(tile.value(), 2);
    }

    #[test]
    fn test_set_value_notifies_on_change() {
        let mut tile = Tile::new();
        let seen = Arc::new(AtomicI64::new(0));
        let seen_clone = Arc::clone(&seen);
        tile.on_value_changed(move |v| seen_clone.store(v, Ordering::SeqCst));

        assert!(tile.set_value(8));
        assert_eq!(tile.value(), 8);
        assert_eq!(seen.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_set_value_same_value_is_silent() {
        let mut tile = Tile::with_value(4);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        tile.on_value_changed(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!tile.set_value(4));
        assert_eq!(tile.value(), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
