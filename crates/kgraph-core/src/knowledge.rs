//! Knowledge graph: a registry of named entities over a string graph.
//!
//! Entities must be registered before relations can reference them, and
//! registering the same name twice is an error. The underlying
//! [`DirectedGraph`] stays silent about duplicates; this layer does not.

use crate::error::KnowledgeGraphError;
use crate::graph::DirectedGraph;
use crate::vertex::VertexId;
use std::collections::{HashSet, VecDeque};
use std::fmt;

pub type Result<T, E = KnowledgeGraphError> = std::result::Result<T, E>;

/// Weight used by [`KnowledgeGraph::add_relation_default`].
pub const DEFAULT_RELATION_WEIGHT: f32 = 1.0;

/// Depth used by [`KnowledgeGraph::get_related_entities_default`].
pub const DEFAULT_RELATED_DEPTH: usize = 2;

/// Named entities, their directed relations, and queries over both.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    pub(crate) graph: DirectedGraph<String>,
    pub(crate) entities: Vec<String>,
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying graph engine.
    pub fn graph(&self) -> &DirectedGraph<String> {
        &self.graph
    }

    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e == name)
    }

    pub(crate) fn require_entity(&self, name: &str) -> Result<()> {
        if self.has_entity(name) {
            Ok(())
        } else {
            Err(KnowledgeGraphError::EntityNotFound(name.to_string()))
        }
    }

    fn require_vertex(&self, name: &str) -> Result<VertexId> {
        self.require_entity(name)?;
        let id = self.graph.find(&name.to_string());
        debug_assert!(id.is_some(), "registered entity without a vertex");
        id.ok_or_else(|| KnowledgeGraphError::EntityNotFound(name.to_string()))
    }

    /// Register a new entity and its vertex.
    pub fn add_entity(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.has_entity(&name) {
            return Err(KnowledgeGraphError::EntityExists(name));
        }
        tracing::debug!(entity = %name, "adding entity");
        self.graph.add(name.clone());
        self.entities.push(name);
        Ok(())
    }

    /// Relate two registered entities. Relating an already related pair
    /// keeps the existing weight.
    pub fn add_relation(&mut self, from: &str, to: &str, weight: f32) -> Result<()> {
        self.require_entity(from)?;
        self.require_entity(to)?;
        tracing::debug!(from, to, weight, "adding relation");
        self.graph.connect(&from.to_string(), &to.to_string(), weight)?;
        Ok(())
    }

    /// [`add_relation`](Self::add_relation) with [`DEFAULT_RELATION_WEIGHT`].
    pub fn add_relation_default(&mut self, from: &str, to: &str) -> Result<()> {
        self.add_relation(from, to, DEFAULT_RELATION_WEIGHT)
    }

    pub fn remove_relation(&mut self, from: &str, to: &str) -> Result<()> {
        self.require_entity(from)?;
        self.require_entity(to)?;
        tracing::debug!(from, to, "removing relation");
        self.graph.disconnect(&from.to_string(), &to.to_string())?;
        Ok(())
    }

    pub fn relation_weight(&self, from: &str, to: &str) -> Result<f32> {
        self.require_entity(from)?;
        self.require_entity(to)?;
        Ok(self.graph.weight(&from.to_string(), &to.to_string())?)
    }

    /// Registered entities in registration order.
    pub fn get_all_entities(&self) -> &[String] {
        &self.entities
    }

    pub fn get_neighbors(&self, entity: &str) -> Result<Vec<String>> {
        self.require_entity(entity)?;
        Ok(self.graph.outward_neighbors(&entity.to_string())?)
    }

    /// Breadth-first visit order from `start`, space separated.
    pub fn bfs(&self, start: &str) -> Result<String> {
        self.require_entity(start)?;
        Ok(self.graph.bfs_string(&start.to_string())?)
    }

    /// Depth-first visit order from `start`, space separated.
    pub fn dfs(&self, start: &str) -> Result<String> {
        self.require_entity(start)?;
        Ok(self.graph.dfs_string(&start.to_string())?)
    }

    /// True only when a direct relation `from -> to` exists.
    ///
    /// Use [`has_path`](Self::has_path) for transitive reachability.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool> {
        self.require_entity(from)?;
        self.require_entity(to)?;
        Ok(self.graph.connected(&from.to_string(), &to.to_string())?)
    }

    /// True when `to` can be reached from `from` by following relations.
    /// Every entity reaches itself.
    pub fn has_path(&self, from: &str, to: &str) -> Result<bool> {
        let start = self.require_vertex(from)?;
        let target = self.require_vertex(to)?;
        Ok(self.graph.bfs_ids(start).contains(&target))
    }

    /// Entities within `depth` hops of `entity`, each once, in breadth-first
    /// discovery order. `entity` itself is never included.
    pub fn get_related_entities(&self, entity: &str, depth: usize) -> Result<Vec<String>> {
        self.require_entity(entity)?;

        let mut related = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, usize)> = VecDeque::new();
        visited.insert(entity.to_string());
        queue.push_back((entity.to_string(), 0));

        while let Some((current, current_depth)) = queue.pop_front() {
            if current_depth >= depth {
                continue;
            }
            for neighbor in self.graph.outward_neighbors(&current)? {
                if visited.insert(neighbor.clone()) {
                    related.push(neighbor.clone());
                    queue.push_back((neighbor, current_depth + 1));
                }
            }
        }

        tracing::trace!(entity, depth, found = related.len(), "related entities");
        Ok(related)
    }

    /// [`get_related_entities`](Self::get_related_entities) with [`DEFAULT_RELATED_DEPTH`].
    pub fn get_related_entities_default(&self, entity: &str) -> Result<Vec<String>> {
        self.get_related_entities(entity, DEFAULT_RELATED_DEPTH)
    }
}

impl fmt::Display for KnowledgeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}
