//! Vertex and edge storage for the directed graph arena.

/// Stable handle to a vertex inside a [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// Handles are arena indices. They stay valid until the graph is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

/// A directed, weighted link. Owned by the source vertex's edge list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f32,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: f32) -> Self {
        Self { from, to, weight }
    }
}

/// A graph node: payload, degree counters, and outgoing edges in insertion order.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    value: T,
    in_degree: usize,
    out_degree: usize,
    edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            in_degree: 0,
            out_degree: 0,
            edges: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_to(&self, to: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.to == to)
    }

    /// Append an outgoing edge. The target's in-degree is the graph's job.
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
        self.out_degree += 1;
    }

    /// Remove the outgoing edge to `to`, if any.
    pub(crate) fn remove_edge_to(&mut self, to: VertexId) -> Option<Edge> {
        let pos = self.edges.iter().position(|e| e.to == to)?;
        self.out_degree -= 1;
        Some(self.edges.remove(pos))
    }

    pub(crate) fn increment_in_degree(&mut self) {
        self.in_degree += 1;
    }

    pub(crate) fn decrement_in_degree(&mut self) {
        self.in_degree = self.in_degree.saturating_sub(1);
    }
}
