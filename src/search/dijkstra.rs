//! Dijkstra's single-source shortest paths.
//!
//! A binary min-heap always yields the unsettled vertex with the smallest
//! tentative distance. Outdated heap entries (pushed before a better
//! distance was found) are skipped when popped rather than removed.
//!
//! Every edge weight must be non-negative; the graph is checked up front.
//!
//! # Complexity
//! O((V + E) log V) time, O(V + E) space.
//!
//! # References
//! Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs",
//! *Numerische Mathematik* 1.

use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::{check_weights, reconstruct_path, MinScored, ShortestPaths};
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::weight::Weight;

/// Shortest distances from `source` to every reachable vertex.
///
/// # Errors
/// - [`Error::UnknownVertex`] if `source` is not in the graph.
/// - [`Error::NegativeWeight`] / [`Error::InvalidWeight`] if any edge weight
///   is negative, NaN, or infinite.
/// - [`Error::WeightOverflow`] if a path length overflows `W`.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::search::dijkstra;
///
/// let g = Graph::from_adjacency([
///     ("A", vec![("B", 1), ("C", 4)]),
///     ("B", vec![("C", 2), ("D", 5)]),
///     ("C", vec![("D", 1)]),
///     ("D", vec![]),
/// ]);
/// let sp = dijkstra(&g, &"A")?;
/// assert_eq!(sp.distance(&"C"), Some(3));
/// assert_eq!(sp.distance(&"D"), Some(4));
/// assert_eq!(sp.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn dijkstra<'g, V: Vertex, W: Weight>(
    graph: &'g Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<'g, V, W>> {
    let s = graph.index_of(source)?;
    check_weights(graph)?;
    let (dist, pred) = run(graph, s, None)?;
    Ok(ShortestPaths::new(graph, s, dist, pred))
}

/// Shortest path from `source` to `target` as `(length, vertices)`, or
/// `None` if `target` is unreachable. Stops as soon as `target` is settled.
///
/// # Errors
/// As [`dijkstra`], plus [`Error::UnknownVertex`] for `target`.
pub fn dijkstra_path<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: &V,
    target: &V,
) -> Result<Option<(W, Vec<V>)>> {
    let s = graph.index_of(source)?;
    let t = graph.index_of(target)?;
    check_weights(graph)?;

    let (dist, pred) = run(graph, s, Some(t))?;
    Ok(dist[t].map(|d| {
        let path = reconstruct_path(&pred, t)
            .into_iter()
            .map(|i| graph.vertex_at(i).clone())
            .collect();
        (d, path)
    }))
}

type Labels<W> = (Vec<Option<W>>, Vec<Option<usize>>);

fn run<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    source: usize,
    target: Option<usize>,
) -> Result<Labels<W>> {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(W::zero());
    heap.push(MinScored(W::zero(), source));

    let mut settled_count = 0_usize;
    while let Some(MinScored(d, u)) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        settled_count += 1;
        if Some(u) == target {
            break;
        }

        for &(v, w) in graph.out_edges(u) {
            if settled[v] {
                continue;
            }
            let candidate = d.checked_add(w).ok_or(Error::WeightOverflow)?;
            if dist[v].is_none_or(|cur| candidate < cur) {
                trace!(from = u, to = v, distance = ?candidate, "relax");
                dist[v] = Some(candidate);
                pred[v] = Some(u);
                heap.push(MinScored(candidate, v));
            }
        }
    }

    debug!(vertices = n, settled = settled_count, "dijkstra: done");
    Ok((dist, pred))
}
