//! Directed graph engine: vertex arena, weighted edges, BFS and DFS.

use crate::error::{GraphError, Result};
use crate::identity::{Natural, VertexDisplay, VertexEq};
use crate::vertex::{Edge, Vertex, VertexId};
use std::collections::VecDeque;
use std::fmt;

/// Default weight used by [`DirectedGraph::connect_default`].
pub const DEFAULT_EDGE_WEIGHT: f32 = 0.0;

/// A directed graph over payloads of type `T`.
///
/// Vertices live in an arena and are addressed internally by [`VertexId`].
/// Payload identity goes through `Q` and rendering through `D`, so lookups
/// are a linear scan: a custom equality cannot be hashed.
#[derive(Debug, Clone)]
pub struct DirectedGraph<T, Q = Natural, D = Natural> {
    vertices: Vec<Vertex<T>>,
    eq: Q,
    display: D,
}

impl<T: PartialEq + fmt::Display> DirectedGraph<T, Natural, Natural> {
    /// Create an empty graph using `PartialEq` and `Display`.
    pub fn new() -> Self {
        Self::with_identity(Natural, Natural)
    }
}

impl<T: PartialEq + fmt::Display> Default for DirectedGraph<T, Natural, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Q, D> DirectedGraph<T, Q, D>
where
    Q: VertexEq<T>,
    D: VertexDisplay<T>,
{
    /// Create an empty graph with injected equality and rendering.
    pub fn with_identity(eq: Q, display: D) -> Self {
        Self {
            vertices: Vec::new(),
            eq,
            display,
        }
    }

    /// Find the handle of the vertex equal to `value`.
    pub fn find(&self, value: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| self.eq.same(v.value(), value))
            .map(VertexId)
    }

    fn require(&self, value: &T) -> Result<VertexId> {
        self.find(value)
            .ok_or_else(|| GraphError::VertexNotFound(self.display.render(value)))
    }

    fn require_pair(&self, from: &T, to: &T) -> Result<(VertexId, VertexId)> {
        Ok((self.require(from)?, self.require(to)?))
    }

    /// Whether `a` and `b` name the same vertex under this graph's equality.
    pub fn same(&self, a: &T, b: &T) -> bool {
        self.eq.same(a, b)
    }

    /// Insert a vertex. Adding a payload that is already present is a no-op.
    pub fn add(&mut self, value: T) {
        if self.find(&value).is_some() {
            return;
        }
        self.vertices.push(Vertex::new(value));
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Add an edge `from -> to`. Connecting an existing pair keeps the
    /// existing edge and weight.
    pub fn connect(&mut self, from: &T, to: &T, weight: f32) -> Result<()> {
        let (from_id, to_id) = self.require_pair(from, to)?;
        if self.vertices[from_id.0].edge_to(to_id).is_some() {
            return Ok(());
        }
        self.vertices[from_id.0].push_edge(Edge::new(from_id, to_id, weight));
        self.vertices[to_id.0].increment_in_degree();
        Ok(())
    }

    /// [`connect`](Self::connect) with [`DEFAULT_EDGE_WEIGHT`].
    pub fn connect_default(&mut self, from: &T, to: &T) -> Result<()> {
        self.connect(from, to, DEFAULT_EDGE_WEIGHT)
    }

    /// Remove the edge `from -> to` if present.
    pub fn disconnect(&mut self, from: &T, to: &T) -> Result<()> {
        let (from_id, to_id) = self.require_pair(from, to)?;
        if self.vertices[from_id.0].remove_edge_to(to_id).is_some() {
            self.vertices[to_id.0].decrement_in_degree();
        }
        Ok(())
    }

    pub fn connected(&self, from: &T, to: &T) -> Result<bool> {
        let (from_id, to_id) = self.require_pair(from, to)?;
        Ok(self.vertices[from_id.0].edge_to(to_id).is_some())
    }

    pub fn weight(&self, from: &T, to: &T) -> Result<f32> {
        let (from_id, to_id) = self.require_pair(from, to)?;
        self.vertices[from_id.0]
            .edge_to(to_id)
            .map(|e| e.weight)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: self.display.render(from),
                to: self.display.render(to),
            })
    }

    pub fn in_degree(&self, value: &T) -> Result<usize> {
        let id = self.require(value)?;
        Ok(self.vertices[id.0].in_degree())
    }

    pub fn out_degree(&self, value: &T) -> Result<usize> {
        let id = self.require(value)?;
        Ok(self.vertices[id.0].out_degree())
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop every vertex and edge. Outstanding handles become invalid.
    pub fn clear(&mut self) {
        tracing::debug!(vertices = self.vertices.len(), "clearing graph");
        self.vertices.clear();
    }

    /// Handles of the outward neighbours of `id`, in edge insertion order.
    pub(crate) fn successors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices[id.0].edges().iter().map(|e| e.to)
    }

    /// Breadth-first visit order from `start`. A vertex is marked when it
    /// is enqueued, so it can never sit in the queue twice.
    pub(crate) fn bfs_ids(&self, start: VertexId) -> Vec<VertexId> {
        let mut visited = vec![false; self.vertices.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start.0] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for next in self.successors(current) {
                if !visited[next.0] {
                    visited[next.0] = true;
                    queue.push_back(next);
                }
            }
        }

        tracing::trace!(start = start.0, visited = order.len(), "bfs");
        order
    }

    /// Depth-first pre-order from `start` using an explicit stack.
    ///
    /// Neighbours are pushed in reverse so they pop in insertion order.
    /// A vertex may be pushed more than once; duplicates are dropped when
    /// popped, not when pushed.
    pub(crate) fn dfs_ids(&self, start: VertexId) -> Vec<VertexId> {
        let mut visited = vec![false; self.vertices.len()];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if visited[current.0] {
                continue;
            }
            visited[current.0] = true;
            order.push(current);
            let edges = self.vertices[current.0].edges();
            stack.extend(edges.iter().rev().map(|e| e.to));
        }

        tracing::trace!(start = start.0, visited = order.len(), "dfs");
        order
    }

    fn render_ids(&self, ids: &[VertexId]) -> String {
        ids.iter()
            .map(|id| self.display.render(self.vertices[id.0].value()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Edge `from -> to` rendered as `from->to`.
    fn render_edge(&self, edge: &Edge) -> String {
        format!(
            "{}->{}",
            self.display.render(self.vertices[edge.from.0].value()),
            self.display.render(self.vertices[edge.to.0].value())
        )
    }

    /// BFS visit order rendered and joined by single spaces.
    pub fn bfs_string(&self, start: &T) -> Result<String> {
        let id = self.require(start)?;
        Ok(self.render_ids(&self.bfs_ids(id)))
    }

    /// DFS visit order rendered and joined by single spaces.
    pub fn dfs_string(&self, start: &T) -> Result<String> {
        let id = self.require(start)?;
        Ok(self.render_ids(&self.dfs_ids(id)))
    }

    /// `<vertex> <in_degree> <out_degree>`
    pub fn describe_vertex(&self, value: &T) -> Result<String> {
        let id = self.require(value)?;
        let v = &self.vertices[id.0];
        Ok(format!(
            "{} {} {}",
            self.display.render(v.value()),
            v.in_degree(),
            v.out_degree()
        ))
    }

    /// `<from>-><to>` for an existing edge.
    pub fn describe_edge(&self, from: &T, to: &T) -> Result<String> {
        let (from_id, to_id) = self.require_pair(from, to)?;
        let edge = self.vertices[from_id.0]
            .edge_to(to_id)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: self.display.render(from),
                to: self.display.render(to),
            })?;
        Ok(self.render_edge(edge))
    }
}

impl<T, Q, D> DirectedGraph<T, Q, D>
where
    T: Clone,
    Q: VertexEq<T>,
    D: VertexDisplay<T>,
{
    /// Payloads of the vertices `from` points to, in edge insertion order.
    pub fn outward_neighbors(&self, from: &T) -> Result<Vec<T>> {
        let id = self.require(from)?;
        Ok(self.successors(id).map(|n| self.value_of(n)).collect())
    }

    /// All payloads in insertion order.
    pub fn vertices(&self) -> Vec<T> {
        self.vertices.iter().map(|v| v.value().clone()).collect()
    }

    /// All edges as `(from, to, weight)`, by vertex then edge insertion order.
    pub fn edges(&self) -> Vec<(T, T, f32)> {
        self.vertices
            .iter()
            .flat_map(|v| v.edges())
            .map(|e| (self.value_of(e.from), self.value_of(e.to), e.weight))
            .collect()
    }

    pub fn bfs(&self, start: &T) -> Result<Vec<T>> {
        let id = self.require(start)?;
        Ok(self.bfs_ids(id).into_iter().map(|n| self.value_of(n)).collect())
    }

    pub fn dfs(&self, start: &T) -> Result<Vec<T>> {
        let id = self.require(start)?;
        Ok(self.dfs_ids(id).into_iter().map(|n| self.value_of(n)).collect())
    }

    fn value_of(&self, id: VertexId) -> T {
        self.vertices[id.0].value().clone()
    }
}

impl<T, Q, D> fmt::Display for DirectedGraph<T, Q, D>
where
    Q: VertexEq<T>,
    D: VertexDisplay<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(f, "Vertex: {}", self.display.render(vertex.value()))?;
            if !vertex.edges().is_empty() {
                writeln!(f, "  Edges:")?;
                for edge in vertex.edges() {
                    writeln!(f, "    -> {}", self.render_edge(edge))?;
                }
            }
        }
        Ok(())
    }
}
