// ABOUTME: Bounded repeat-avoidance history of recently served exercise or meal names
// ABOUTME: Owned by the caller and passed back into each generation call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::constants::history::DEFAULT_CAPACITY;

/// FIFO of recently used item names, oldest evicted first
///
/// Lookups are case-insensitive and ignore surrounding whitespace. The engine
/// only reads a history; recording new plans is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentHistory {
    capacity: usize,
    names: VecDeque<String>,
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RecentHistory {
    /// Empty history holding at most `capacity` names
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            names: VecDeque::with_capacity(capacity),
        }
    }

    /// History seeded from a caller-supplied list, keeping the newest entries
    #[must_use]
    pub fn from_names<I, S>(names: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::with_capacity(capacity);
        history.extend(names);
        history
    }

    /// Remember a name, evicting the oldest entry when full
    pub fn push(&mut self, name: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        let name = normalize(&name.into());
        if name.is_empty() {
            return;
        }
        while self.names.len() >= self.capacity {
            self.names.pop_front();
        }
        self.names.push_back(name);
    }

    /// Remember several names in order
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.push(name);
        }
    }

    /// Whether `name` was used recently
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let needle = normalize(name);
        self.names.iter().any(|n| *n == needle)
    }

    /// Number of remembered names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing is remembered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Maximum number of remembered names
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remembered names, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
