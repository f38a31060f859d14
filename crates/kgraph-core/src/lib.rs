//! Directed graph engine with a knowledge-graph facade.
//!
//! Provides the generic graph model ([`graph::DirectedGraph`]) with BFS/DFS,
//! the entity-registry layer ([`knowledge::KnowledgeGraph`]) with bounded
//! relation expansion and common-ancestor search, TOML manifests, and config.

pub mod ancestors;
pub mod config;
pub mod error;
pub mod graph;
pub mod identity;
pub mod knowledge;
pub mod manifest;
pub mod vertex;

pub use error::{GraphError, KnowledgeGraphError};
pub use graph::DirectedGraph;
pub use knowledge::KnowledgeGraph;
