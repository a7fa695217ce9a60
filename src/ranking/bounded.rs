use crate::errors::{ClubError, ClubResult};

/// One scored entry in a bounded ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry<K> {
    pub id: K,
    pub score: f64,
}

/// Fixed-capacity ranked set, sorted ascending by score.
///
/// At most one entry per identity; updating an identity re-inserts it at its
/// new sorted position. When an insert pushes the set over capacity the tail
/// entry is evicted. The "best" element is by contract the one at index 0 of
/// the ascending order.
#[derive(Debug, Clone)]
pub struct BoundedRanking<K> {
    capacity: usize,
    entries: Vec<RankEntry<K>>,
}

impl<K: Eq + Clone> BoundedRanking<K> {
    /// `capacity` must be positive; it is fixed for the lifetime of the set
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or re-insert an identity with a fresh score
    pub fn update(&mut self, id: K, score: f64) {
        self.entries.retain(|e| e.id != id);

        // Stable insert: equal scores keep earlier entries first
        let position = self.entries.partition_point(|e| e.score <= score);
        self.entries.insert(position, RankEntry { id, score });

        self.entries.truncate(self.capacity);
    }

    pub fn element_at(&self, rank: usize) -> ClubResult<&RankEntry<K>> {
        self.entries.get(rank).ok_or(ClubError::EmptyRanking)
    }

    pub fn best(&self) -> ClubResult<&RankEntry<K>> {
        self.element_at(0)
    }

    /// Snapshot of the current entries in sorted order; mutations after the
    /// call do not affect the returned sequence
    pub fn values(&self) -> Vec<RankEntry<K>> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
