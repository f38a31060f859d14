//! Ancestor collection and nearest-common-ancestor search.
//!
//! The graph keeps no reverse adjacency, so walking "up" from an entity
//! scans every registered entity for a direct relation into the current
//! frontier node. That is O(entities x edges) per collected ancestor set,
//! which is acceptable for the graph sizes this crate targets.

use crate::knowledge::{KnowledgeGraph, Result};
use std::collections::{HashSet, VecDeque};

/// Rendering of a missing common ancestor.
pub const NO_COMMON_ANCESTOR: &str = "No common ancestor";

impl KnowledgeGraph {
    /// Every ancestor of `start` paired with its hop distance, in
    /// breadth-first discovery order. `start` itself is excluded.
    ///
    /// Candidates for each frontier node are taken in registration order.
    pub fn collect_ancestors(&self, start: &str) -> Result<Vec<(String, usize)>> {
        self.require_entity(start)?;

        let mut ancestors = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((current, dist)) = queue.pop_front() {
            if dist > 0 {
                ancestors.push((current.to_string(), dist));
            }
            let current_key = current.to_string();
            for candidate in &self.entities {
                if candidate == current {
                    continue;
                }
                if self.graph.connected(candidate, &current_key)?
                    && visited.insert(candidate.as_str())
                {
                    queue.push_back((candidate.as_str(), dist + 1));
                }
            }
        }

        Ok(ancestors)
    }

    /// The ancestor shared by `e1` and `e2` with the smallest combined hop
    /// distance, or `None` when they share none.
    ///
    /// Ties keep the candidate found first in `e1`'s ancestor order.
    pub fn find_common_ancestors(&self, e1: &str, e2: &str) -> Result<Option<String>> {
        self.require_entity(e1)?;
        self.require_entity(e2)?;

        let first = self.collect_ancestors(e1)?;
        let second = self.collect_ancestors(e2)?;

        let mut best: Option<(&str, usize)> = None;
        for (name_1, dist_1) in &first {
            for (name_2, dist_2) in &second {
                if !self.graph.same(name_1, name_2) {
                    continue;
                }
                let total = dist_1 + dist_2;
                if best.is_none_or(|(_, min)| total < min) {
                    best = Some((name_1.as_str(), total));
                }
            }
        }

        tracing::debug!(
            e1,
            e2,
            ancestor = best.map(|(name, _)| name),
            "common ancestor search"
        );
        Ok(best.map(|(name, _)| name.to_string()))
    }
}
