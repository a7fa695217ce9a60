use std::collections::{HashMap, HashSet};

use crate::domain::PlayerId;
use crate::errors::{ClubError, ClubResult};

/// Directed follow graph over player identities.
///
/// Vertices are created lazily on first edge reference. Each direction is
/// kept as an insertion-ordered adjacency list plus a reverse map, so edge
/// existence and adjacency enumeration stay cheap and deterministic.
///
/// Directionality per the club contract: `add_follower(p, f)` stores the
/// edge p -> f, `followers(p)` enumerates outgoing targets and
/// `followings(p)` enumerates incoming sources.
#[derive(Debug, Default)]
pub struct FollowGraph {
    outgoing: HashMap<PlayerId, Vec<PlayerId>>,
    incoming: HashMap<PlayerId, Vec<PlayerId>>,
}

impl FollowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the edge `player -> follower`; repeated calls are no-ops
    pub fn add_follower(&mut self, player_id: &str, follower_id: &str) {
        let targets = self.outgoing.entry(player_id.to_string()).or_default();
        if targets.iter().any(|t| t == follower_id) {
            return;
        }
        targets.push(follower_id.to_string());
        self.incoming
            .entry(follower_id.to_string())
            .or_default()
            .push(player_id.to_string());
    }

    pub fn has_edge(&self, player_id: &str, follower_id: &str) -> bool {
        self.outgoing
            .get(player_id)
            .is_some_and(|targets| targets.iter().any(|t| t == follower_id))
    }

    /// Players reachable via one outgoing edge, in edge-insertion order
    pub fn followers(&self, player_id: &str) -> ClubResult<Vec<PlayerId>> {
        match self.outgoing.get(player_id) {
            Some(targets) if !targets.is_empty() => Ok(targets.clone()),
            _ => Err(ClubError::NoFollowers),
        }
    }

    /// Players with an edge pointing at `player_id`, in edge-insertion order
    pub fn followings(&self, player_id: &str) -> ClubResult<Vec<PlayerId>> {
        match self.incoming.get(player_id) {
            Some(sources) if !sources.is_empty() => Ok(sources.clone()),
            _ => Err(ClubError::NoFollowing),
        }
    }

    pub fn num_followers(&self, player_id: &str) -> usize {
        self.outgoing.get(player_id).map_or(0, |t| t.len())
    }

    pub fn num_followings(&self, player_id: &str) -> usize {
        self.incoming.get(player_id).map_or(0, |s| s.len())
    }

    /// Two-hop candidates: followers-of-followers, excluding the player
    /// itself and its direct followers, deduplicated in first-seen order.
    ///
    /// Intermediate vertices without followers contribute nothing; only the
    /// root lookup can fail.
    pub fn recommendations(&self, player_id: &str) -> ClubResult<Vec<PlayerId>> {
        let direct = self.followers(player_id)?;
        let direct_set: HashSet<&PlayerId> = direct.iter().collect();

        let mut seen: HashSet<PlayerId> = HashSet::new();
        let mut candidates = Vec::new();
        for intermediate in &direct {
            let Ok(two_hop) = self.followers(intermediate) else {
                continue;
            };
            for candidate in two_hop {
                if candidate == player_id || direct_set.contains(&candidate) {
                    continue;
                }
                if seen.insert(candidate.clone()) {
                    candidates.push(candidate);
                }
            }
        }
        Ok(candidates)
    }
}
