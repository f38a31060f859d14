//! Vertex identity and rendering capabilities.
//!
//! A [`DirectedGraph`](crate::graph::DirectedGraph) never compares or prints
//! payloads directly. It goes through a [`VertexEq`] and a [`VertexDisplay`]
//! chosen at construction time. [`Natural`] uses `PartialEq` and `Display`;
//! [`EqFn`] and [`DisplayFn`] wrap plain functions for everything else.

use std::fmt;

/// Decides whether two payloads name the same vertex.
pub trait VertexEq<T> {
    fn same(&self, a: &T, b: &T) -> bool;
}

/// Renders a payload for traversal output and graph dumps.
pub trait VertexDisplay<T> {
    fn render(&self, value: &T) -> String;
}

/// Structural equality and standard formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: PartialEq> VertexEq<T> for Natural {
    fn same(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: fmt::Display> VertexDisplay<T> for Natural {
    fn render(&self, value: &T) -> String {
        value.to_string()
    }
}

/// Equality backed by a plain function.
pub struct EqFn<T>(pub fn(&T, &T) -> bool);

impl<T> VertexEq<T> for EqFn<T> {
    fn same(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<T> Clone for EqFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EqFn<T> {}

impl<T> fmt::Debug for EqFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EqFn")
    }
}

/// Rendering backed by a plain function.
pub struct DisplayFn<T>(pub fn(&T) -> String);

impl<T> VertexDisplay<T> for DisplayFn<T> {
    fn render(&self, value: &T) -> String {
        (self.0)(value)
    }
}

impl<T> Clone for DisplayFn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DisplayFn<T> {}

impl<T> fmt::Debug for DisplayFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayFn")
    }
}
