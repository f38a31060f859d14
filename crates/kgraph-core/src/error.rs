//! Error types for the graph engine and the knowledge-graph layer.

/// Result alias for raw graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Errors raised by [`DirectedGraph`](crate::graph::DirectedGraph) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },
}

/// Errors raised by [`KnowledgeGraph`](crate::knowledge::KnowledgeGraph) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnowledgeGraphError {
    #[error("entity already exists: {0}")]
    EntityExists(String),
    #[error("entity not found: {0}")]
    EntityNotFound(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
