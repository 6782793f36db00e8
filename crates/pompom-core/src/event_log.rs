//! Bounded, copy-on-write event log
//!
//! The log is a display cache: it only keeps the most recent
//! [`EVENT_LOG_CAPACITY`] entries. Anything that gates game logic must read
//! [`crate::LifetimeCounters`] instead.
//!
//! Snapshots share the underlying buffer. Appending clones it only when
//! another snapshot still holds a reference.

use crate::GameEvent;
use std::collections::VecDeque;
use std::sync::Arc;

/// Number of entries kept in the log
pub const EVENT_LOG_CAPACITY: usize = 50;

/// Recent-window event log
#[derive(Debug, Clone, PartialEq)]
pub struct EventLog {
    entries: Arc<VecDeque<GameEvent>>,
    capacity: usize,
}

impl EventLog {
    /// Create an empty log with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(EVENT_LOG_CAPACITY)
    }

    /// Create an empty log holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self {
            entries: Arc::new(VecDeque::with_capacity(capacity.min(EVENT_LOG_CAPACITY))),
            capacity,
        }
    }

    /// Build a log from a full history, keeping only the most recent entries
    pub fn from_events(events: impl IntoIterator<Item = GameEvent>) -> Self {
        let mut log = Self::new();
        log.extend(events);
        log
    }

    /// Append an event, evicting the oldest entries past capacity
    pub fn push(&mut self, event: GameEvent) {
        let entries = Arc::make_mut(&mut self.entries);
        entries.push_back(event);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Append several events
    pub fn extend(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.push(event);
        }
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&GameEvent> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if two logs share the same buffer
    pub fn shares_buffer(&self, other: &EventLog) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
