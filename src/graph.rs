//! Graph representation shared by the search and spanning-tree algorithms.
//!
//! [`Graph`] is a directed adjacency list over arbitrary hashable vertex
//! identifiers. Vertices are interned to dense indices on insertion, and
//! both vertex order and neighbor order follow insertion order, so every
//! traversal over the same graph is deterministic.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::weight::Weight;

/// Bound for vertex identifiers.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so
/// `&str`, `String`, `char`, and integer ids all work.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// An immutable weighted edge `(weight, u, v)`.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Edge;
///
/// let e = Edge::new(3, "A", "C");
/// assert_eq!(e.weight(), 3);
/// assert_eq!(e.endpoints(), (&"A", &"C"));
///
/// let from_tuple: Edge<&str, i32> = (3, "A", "C").into();
/// assert_eq!(e, from_tuple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<V, W> {
    weight: W,
    u: V,
    v: V,
}

impl<V, W: Copy> Edge<V, W> {
    /// Creates an edge between `u` and `v`.
    pub fn new(weight: W, u: V, v: V) -> Self {
        Self { weight, u, v }
    }

    /// The edge weight.
    pub fn weight(&self) -> W {
        self.weight
    }

    /// The first endpoint (the source, for directed edges).
    pub fn u(&self) -> &V {
        &self.u
    }

    /// The second endpoint (the target, for directed edges).
    pub fn v(&self) -> &V {
        &self.v
    }

    /// Both endpoints as `(u, v)`.
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.u, &self.v)
    }

    /// Consumes the edge, returning `(weight, u, v)`.
    pub fn into_parts(self) -> (W, V, V) {
        (self.weight, self.u, self.v)
    }
}

impl<V, W> From<(W, V, V)> for Edge<V, W> {
    fn from((weight, u, v): (W, V, V)) -> Self {
        Self { weight, u, v }
    }
}

/// Directed weighted graph stored as an adjacency list.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Graph;
///
/// let mut g = Graph::new();
/// g.add_edge("A", "B", 1);
/// g.add_edge("A", "C", 4);
/// g.add_vertex("D");
///
/// assert_eq!(g.vertex_count(), 4);
/// assert_eq!(g.edge_count(), 2);
/// let out: Vec<_> = g.neighbors(&"A").unwrap().collect();
/// assert_eq!(out, vec![(&"B", 1), (&"C", 4)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    adjacency: Vec<Vec<(usize, W)>>,
    edge_count: usize,
}

impl<V: Vertex, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Builds a directed graph from `(u, v, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut g = Self::new();
        for (u, v, w) in edges {
            g.add_edge(u, v, w);
        }
        g
    }

    /// Builds a directed graph from an adjacency listing
    /// `vertex -> [(neighbor, weight), ...]`.
    ///
    /// Vertices with no outgoing edges still need an entry (or to appear
    /// as a neighbor) to be part of the graph.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let mut g = Self::new();
        for (u, neighbors) in adjacency {
            g.add_vertex(u.clone());
            for (v, w) in neighbors {
                g.add_edge(u.clone(), v, w);
            }
        }
        g
    }

    /// Adds `v` if absent and returns its dense index.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.vertices.len();
        self.index.insert(v.clone(), i);
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        i
    }

    /// Adds a directed edge `u -> v`, inserting missing endpoints.
    ///
    /// Parallel edges are kept.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) {
        let ui = self.add_vertex(u);
        let vi = self.add_vertex(v);
        self.adjacency[ui].push((vi, weight));
        self.edge_count += 1;
    }

    /// Adds the edge in both directions.
    pub fn add_undirected_edge(&mut self, u: V, v: V, weight: W) {
        self.add_edge(u.clone(), v.clone(), weight);
        if u != v {
            self.add_edge(v, u, weight);
        }
    }

    /// Returns `true` if the graph contains `v`.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Outgoing `(neighbor, weight)` pairs of `v`, in insertion order.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if `v` is not in the graph.
    pub fn neighbors(&self, v: &V) -> Result<impl Iterator<Item = (&V, W)> + '_> {
        let i = self.index_of(v)?;
        Ok(self.adjacency[i]
            .iter()
            .map(move |&(j, w)| (&self.vertices[j], w)))
    }

    /// Every stored edge as an [`Edge`], grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V, W>> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, out)| {
            out.iter()
                .map(move |&(j, w)| Edge::new(w, self.vertices[i].clone(), self.vertices[j].clone()))
        })
    }

    pub(crate) fn index_of(&self, v: &V) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(v))
    }

    pub(crate) fn vertex_at(&self, i: usize) -> &V {
        &self.vertices[i]
    }

    pub(crate) fn out_edges(&self, i: usize) -> &[(usize, W)] {
        &self.adjacency[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<&'static str, i32> {
        Graph::from_adjacency([
            ("A", vec![("B", 1), ("C", 4)]),
            ("B", vec![("C", 2), ("D", 5)]),
            ("C", vec![("D", 1)]),
            ("D", vec![]),
        ])
    }

    #[test]
    fn test_from_adjacency_preserves_order() {
        let g = sample();
        let vs: Vec<_> = g.vertices().copied().collect();
        assert_eq!(vs, vec!["A", "B", "C", "D"]);
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut g: Graph<u32, u32> = Graph::new();
        assert_eq!(g.add_vertex(7), 0);
        assert_eq!(g.add_vertex(9), 1);
        assert_eq!(g.add_vertex(7), 0);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn test_undirected_edge_inserts_both_directions() {
        let mut g: Graph<char, f64> = Graph::new();
        g.add_undirected_edge('x', 'y', 2.5);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(&'y').unwrap().collect::<Vec<_>>(), vec![(&'x', 2.5)]);
    }

    #[test]
    fn test_undirected_self_loop_stored_once() {
        let mut g: Graph<char, i32> = Graph::new();
        g.add_undirected_edge('x', 'x', 1);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_unknown_vertex() {
        let g = sample();
        assert!(matches!(g.neighbors(&"Z"), Err(Error::UnknownVertex(_))));
    }

    #[test]
    fn test_edges_iterates_all() {
        let g = sample();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0], Edge::new(1, "A", "B"));
        assert_eq!(edges[4], Edge::new(1, "C", "D"));
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<u8, u8> = Graph::default();
        assert!(g.is_empty());
        assert_eq!(g.edges().count(), 0);
    }
}
