use serde::{Deserialize, Serialize};

use crate::domain::models::{Enrollment, Level};

/// Substitute list for one event, ordered by player level at sign-up time.
///
/// Higher levels rank first; equal levels keep arrival order. Kept as a
/// sorted vector; inserting after all entries of the same or higher level
/// preserves FIFO among equals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Waitlist {
    entries: Vec<WaitlistEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WaitlistEntry {
    level: Level,
    enrollment: Enrollment,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, enrollment: Enrollment, level: Level) {
        let position = self.entries.partition_point(|e| e.level >= level);
        self.entries.insert(position, WaitlistEntry { level, enrollment });
    }

    /// Substitutes in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Enrollment> {
        self.entries.iter().map(|e| &e.enrollment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
