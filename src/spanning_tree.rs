//! Minimum spanning trees via Kruskal's algorithm.
//!
//! Edges are sorted by weight and accepted greedily whenever their endpoints
//! still belong to different sets of a [`DisjointSet`]. An edge whose
//! endpoints are already joined would close a cycle and is skipped.
//!
//! On a disconnected graph the result is a minimum spanning *forest*: one
//! tree per component, `|V| - components` edges in total. This is not an
//! error unless [`KruskalConfig::require_connected`] is set.
//!
//! # Complexity
//! O(E log E) for the sort, plus O(E α(V)) for the union-find work.
//!
//! # References
//! Kruskal (1956), "On the Shortest Spanning Subtree of a Graph and the
//! Traveling Salesman Problem", *Proc. AMS* 7(1).

use tracing::{debug, trace};

use crate::collections::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use crate::weight::{cmp_weights, ensure_valid, Weight};

/// Configuration for [`kruskal_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KruskalConfig {
    /// Stop scanning edges once `|V| - 1` have been accepted.
    pub stop_early: bool,
    /// Return [`Error::Disconnected`] instead of a spanning forest when the
    /// graph has more than one component.
    pub require_connected: bool,
}

impl Default for KruskalConfig {
    fn default() -> Self {
        Self {
            stop_early: true,
            require_connected: false,
        }
    }
}

impl KruskalConfig {
    /// Sets [`stop_early`](Self::stop_early).
    pub fn with_stop_early(mut self, stop_early: bool) -> Self {
        self.stop_early = stop_early;
        self
    }

    /// Sets [`require_connected`](Self::require_connected).
    pub fn with_require_connected(mut self, require_connected: bool) -> Self {
        self.require_connected = require_connected;
        self
    }
}

/// Result of Kruskal's algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningForest<V, W> {
    edges: Vec<Edge<V, W>>,
    total_weight: W,
    component_count: usize,
}

impl<V, W: Copy> SpanningForest<V, W> {
    /// Accepted edges, in the order they were accepted (ascending weight).
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// Sum of the accepted edge weights.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Number of trees in the forest (connected components of the input).
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// `true` when the forest is a single tree spanning every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// Consumes the forest, returning its edges.
    pub fn into_edges(self) -> Vec<Edge<V, W>> {
        self.edges
    }
}

/// Kruskal's algorithm with the default [`KruskalConfig`].
///
/// `edges` accepts [`Edge`] values or `(weight, u, v)` tuples.
///
/// # Errors
/// - [`Error::UnknownVertex`] if an edge endpoint is not in `vertices`.
/// - [`Error::InvalidWeight`] for NaN or infinite weights.
/// - [`Error::WeightOverflow`] if the total weight overflows `W`.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Edge;
/// use u_pathfind::spanning_tree::kruskal;
///
/// let mst = kruskal(
///     ["A", "B", "C", "D"],
///     [(1, "A", "B"), (3, "A", "C"), (2, "B", "C"), (4, "C", "D")],
/// )?;
///
/// assert_eq!(mst.total_weight(), 7);
/// assert_eq!(
///     mst.edges(),
///     &[Edge::new(1, "A", "B"), Edge::new(2, "B", "C"), Edge::new(4, "C", "D")]
/// );
/// assert!(mst.is_spanning_tree());
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn kruskal<V, W, I, E>(
    vertices: impl IntoIterator<Item = V>,
    edges: I,
) -> Result<SpanningForest<V, W>>
where
    V: Vertex,
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<Edge<V, W>>,
{
    kruskal_with(vertices, edges, &KruskalConfig::default())
}

/// Kruskal's algorithm with an explicit configuration.
///
/// Edges of equal weight are considered in input order (stable sort), so
/// the chosen edge set is deterministic for a given input. Self-loops are
/// never accepted.
///
/// # Errors
/// As [`kruskal`], plus [`Error::Disconnected`] when
/// `config.require_connected` is set and the graph is not connected.
pub fn kruskal_with<V, W, I, E>(
    vertices: impl IntoIterator<Item = V>,
    edges: I,
    config: &KruskalConfig,
) -> Result<SpanningForest<V, W>>
where
    V: Vertex,
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<Edge<V, W>>,
{
    let mut sets = DisjointSet::new(vertices);

    let mut candidates: Vec<Edge<V, W>> = Vec::new();
    for edge in edges {
        let edge = edge.into();
        ensure_valid(edge.weight())?;
        for endpoint in [edge.u(), edge.v()] {
            if !sets.contains(endpoint) {
                return Err(Error::unknown_vertex(endpoint));
            }
        }
        candidates.push(edge);
    }
    candidates.sort_by(|a, b| cmp_weights(&a.weight(), &b.weight()));

    let target = sets.len().saturating_sub(1);
    debug!(
        vertices = sets.len(),
        edges = candidates.len(),
        "kruskal: building spanning forest"
    );

    let mut accepted = Vec::with_capacity(target);
    let mut total = W::zero();
    for edge in candidates {
        if config.stop_early && accepted.len() == target {
            break;
        }
        if sets.union(edge.u(), edge.v())? {
            total = total
                .checked_add(edge.weight())
                .ok_or(Error::WeightOverflow)?;
            trace!(u = ?edge.u(), v = ?edge.v(), weight = ?edge.weight(), "accept edge");
            accepted.push(edge);
        } else {
            trace!(u = ?edge.u(), v = ?edge.v(), weight = ?edge.weight(), "skip edge: cycle");
        }
    }

    let components = sets.component_count();
    debug!(
        accepted = accepted.len(),
        components,
        total = ?total,
        "kruskal: done"
    );

    if config.require_connected && components > 1 {
        return Err(Error::Disconnected { components });
    }

    Ok(SpanningForest {
        edges: accepted,
        total_weight: total,
        component_count: components,
    })
}

/// Kruskal over a dense symmetric adjacency matrix.
///
/// Vertices are `0..n`. A zero entry means "no edge"; only the upper
/// triangle is read.
///
/// # Errors
/// [`Error::InvalidMatrix`] if the matrix is not square, otherwise as
/// [`kruskal`].
///
/// # Examples
/// ```
/// use u_pathfind::spanning_tree::kruskal_matrix;
///
/// let adj = vec![
///     vec![0, 2, 0, 6, 0],
///     vec![2, 0, 3, 8, 5],
///     vec![0, 3, 0, 0, 7],
///     vec![6, 8, 0, 0, 9],
///     vec![0, 5, 7, 9, 0],
/// ];
/// let mst = kruskal_matrix(&adj)?;
/// assert_eq!(mst.total_weight(), 16);
/// assert_eq!(mst.len(), 4);
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn kruskal_matrix<W: Weight>(matrix: &[Vec<W>]) -> Result<SpanningForest<usize, W>> {
    let n = matrix.len();
    if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(Error::InvalidMatrix(format!(
            "row {row} has {} entries, expected {n}",
            r.len()
        )));
    }

    let mut edges = Vec::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, &w) in row.iter().enumerate().skip(i + 1) {
            if w != W::zero() {
                edges.push(Edge::new(w, i, j));
            }
        }
    }
    kruskal(0..n, edges)
}

/// Minimum spanning forest of a [`Graph`], treating every stored edge as
/// undirected.
///
/// # Errors
/// As [`kruskal`].
pub fn minimum_spanning_tree<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
) -> Result<SpanningForest<V, W>> {
    kruskal(graph.vertices().cloned(), graph.edges())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::UnionFind;

    #[test]
    fn test_four_vertex_scenario() {
        let mst = kruskal(
            ['A', 'B', 'C', 'D'],
            [(1, 'A', 'B'), (3, 'A', 'C'), (2, 'B', 'C'), (4, 'C', 'D')],
        )
        .unwrap();
        assert_eq!(mst.total_weight(), 7);
        assert_eq!(mst.len(), 3);
        let picked: Vec<_> = mst.edges().iter().map(|e| e.clone().into_parts()).collect();
        assert_eq!(picked, vec![(1, 'A', 'B'), (2, 'B', 'C'), (4, 'C', 'D')]);
    }

    #[test]
    fn test_disconnected_returns_forest() {
        let mst = kruskal(
            [1, 2, 3, 4, 5],
            [(5, 1, 2), (1, 3, 4), (2, 4, 5), (9, 3, 5)],
        )
        .unwrap();
        assert_eq!(mst.component_count(), 2);
        assert!(!mst.is_spanning_tree());
        assert_eq!(mst.len(), 3);
        assert_eq!(mst.total_weight(), 8);
    }

    #[test]
    fn test_isolated_vertex_is_its_own_component() {
        let mst = kruskal(["a", "b", "lonely"], [(1.5, "a", "b")]).unwrap();
        assert_eq!(mst.component_count(), 2);
        assert_eq!(mst.total_weight(), 1.5);
    }

    #[test]
    fn test_require_connected() {
        let config = KruskalConfig::default().with_require_connected(true);
        let err = kruskal_with([1, 2, 3], [(1, 1, 2)], &config).unwrap_err();
        assert_eq!(err, Error::Disconnected { components: 2 });

        let ok = kruskal_with([1, 2, 3], [(1, 1, 2), (1, 2, 3)], &config).unwrap();
        assert!(ok.is_spanning_tree());
    }

    #[test]
    fn test_stop_early_does_not_change_result() {
        let vertices = 0..6;
        let edges: Vec<(u32, usize, usize)> = vec![
            (4, 0, 1),
            (1, 1, 2),
            (7, 2, 3),
            (2, 3, 4),
            (3, 4, 5),
            (8, 0, 5),
            (5, 1, 4),
        ];
        let fast = kruskal(vertices.clone(), edges.clone()).unwrap();
        let full =
            kruskal_with(vertices, edges, &KruskalConfig::default().with_stop_early(false)).unwrap();
        assert_eq!(fast, full);
        assert_eq!(fast.total_weight(), 15);
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let mst = kruskal(["x", "y"], [(0, "x", "x"), (3, "x", "y"), (2, "y", "x")]).unwrap();
        assert_eq!(mst.edges(), &[Edge::new(2, "y", "x")]);
    }

    #[test]
    fn test_negative_weights_are_allowed() {
        let mst = kruskal([0, 1, 2], [(-5, 0, 1), (-1, 1, 2), (-3, 0, 2)]).unwrap();
        assert_eq!(mst.total_weight(), -8);
    }

    #[test]
    fn test_unknown_vertex() {
        let err = kruskal(["A", "B"], [(1, "A", "Z")]).unwrap_err();
        assert_eq!(err, Error::UnknownVertex("\"Z\"".into()));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let err = kruskal([0, 1], [(f64::NAN, 0, 1)]).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight(_)));
    }

    #[test]
    fn test_total_weight_overflow() {
        let err = kruskal([0, 1, 2], [(200_u8, 0, 1), (100_u8, 1, 2)]).unwrap_err();
        assert_eq!(err, Error::WeightOverflow);
    }

    #[test]
    fn test_empty_and_single_vertex() {
        let empty = kruskal(Vec::<u8>::new(), Vec::<Edge<u8, u8>>::new()).unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_spanning_tree());
        assert_eq!(empty.component_count(), 0);

        let single = kruskal([42], Vec::<Edge<i32, i32>>::new()).unwrap();
        assert!(single.is_spanning_tree());
        assert_eq!(single.total_weight(), 0);
    }

    #[test]
    fn test_matrix_not_square() {
        let err = kruskal_matrix(&[vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, Error::InvalidMatrix(_)));
    }

    #[test]
    fn test_matrix_edges_are_acyclic() {
        let adj = vec![
            vec![0, 2, 0, 6, 0],
            vec![2, 0, 3, 8, 5],
            vec![0, 3, 0, 0, 7],
            vec![6, 8, 0, 0, 9],
            vec![0, 5, 7, 9, 0],
        ];
        let mst = kruskal_matrix(&adj).unwrap();
        let mut uf = UnionFind::new(5);
        for e in mst.edges() {
            assert!(uf.union(*e.u(), *e.v()));
        }
        assert_eq!(uf.component_count(), 1);
    }

    #[test]
    fn test_from_graph() {
        let mut g = Graph::new();
        g.add_undirected_edge("A", "B", 1);
        g.add_undirected_edge("A", "C", 3);
        g.add_undirected_edge("B", "C", 2);
        g.add_undirected_edge("C", "D", 4);
        let mst = minimum_spanning_tree(&g).unwrap();
        assert_eq!(mst.total_weight(), 7);
        assert_eq!(mst.len(), 3);
    }
}
