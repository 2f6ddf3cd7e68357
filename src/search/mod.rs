//! Graph search: reachability, shortest paths, and heuristic search.
//!
//! All algorithms run over a directed [`Graph`]; build it with
//! [`Graph::add_undirected_edge`] to search an undirected graph.
//!
//! | Algorithm | Weights | Result | Complexity |
//! |---|---|---|---|
//! | [`bfs`] / [`bfs_path`] | ignored | fewest-edge path | O(V + E) |
//! | [`dfs`] / [`dfs_path`] | ignored | some path | O(V + E) |
//! | [`dijkstra`] | non-negative | all distances | O((V + E) log V) |
//! | [`astar`] | non-negative | one path, goal-directed | O((V + E) log V) |
//! | [`bellman_ford`] | any, no negative cycle | all distances | O(V · E) |

mod astar;
mod bellman_ford;
mod bfs;
mod dfs;
mod dijkstra;

pub use astar::astar;
pub use bellman_ford::bellman_ford;
pub use bfs::{bfs, bfs_order, bfs_path};
pub use dfs::{dfs, dfs_order, dfs_path};
pub use dijkstra::{dijkstra, dijkstra_path};

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::graph::{Graph, Vertex};
use crate::error::Result;
use crate::weight::{cmp_weights, ensure_non_negative, Weight};

/// Single-source shortest-path distances with predecessor links.
///
/// Returned by [`dijkstra`] and [`bellman_ford`]. Borrows the graph it was
/// computed on so that vertex ids can be resolved without copying.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, V, W> {
    graph: &'g Graph<V, W>,
    source: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<'g, V: Vertex, W: Weight> ShortestPaths<'g, V, W> {
    pub(crate) fn new(
        graph: &'g Graph<V, W>,
        source: usize,
        dist: Vec<Option<W>>,
        pred: Vec<Option<usize>>,
    ) -> Self {
        Self {
            graph,
            source,
            dist,
            pred,
        }
    }

    /// The source vertex.
    pub fn source(&self) -> &V {
        self.graph.vertex_at(self.source)
    }

    /// Shortest distance from the source to `v`; `None` if `v` is
    /// unreachable or not in the graph.
    pub fn distance(&self, v: &V) -> Option<W> {
        let i = self.graph.index_of(v).ok()?;
        self.dist[i]
    }

    /// Returns `true` if `v` is reachable from the source.
    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices of a shortest path from the source to `v`, both ends
    /// included; `None` if `v` is unreachable or unknown.
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        let target = self.graph.index_of(v).ok()?;
        if self.dist[target].is_none() {
            return None;
        }
        Some(
            reconstruct_path(&self.pred, target)
                .into_iter()
                .map(|i| self.graph.vertex_at(i).clone())
                .collect(),
        )
    }

    /// Reachable vertices with their distances, in graph vertex order.
    pub fn reachable(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter_map(move |(i, d)| d.map(|d| (self.graph.vertex_at(i), d)))
    }

    /// Distances of all reachable vertices as a map.
    pub fn to_map(&self) -> HashMap<V, W> {
        self.reachable().map(|(v, d)| (v.clone(), d)).collect()
    }
}

/// Rejects graphs with any negative, NaN, or infinite edge weight.
pub(crate) fn check_weights<V: Vertex, W: Weight>(graph: &Graph<V, W>) -> Result<()> {
    for u in 0..graph.vertex_count() {
        for &(_, w) in graph.out_edges(u) {
            ensure_non_negative(w)?;
        }
    }
    Ok(())
}

/// Walks predecessor links back from `target` and returns the path in
/// source-to-target order.
pub(crate) fn reconstruct_path(pred: &[Option<usize>], target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut node = target;
    while let Some(p) = pred[node] {
        // Predecessor links form a tree; the bound only matters if a caller
        // hands in links that loop.
        if path.len() > pred.len() {
            break;
        }
        path.push(p);
        node = p;
    }
    path.reverse();
    path
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first.
///
/// Only the score takes part in comparisons.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MinScored<K, T>(pub K, pub T);

impl<K: Weight, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Weight, T> Eq for MinScored<K, T> {}

impl<K: Weight, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Weight, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weights(&other.0, &self.0)
    }
}
