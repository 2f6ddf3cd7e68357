//! Bellman-Ford single-source shortest paths.
//!
//! Handles negative edge weights. Every edge is relaxed in up to `V - 1`
//! rounds (stopping early once a round changes nothing); if an edge can
//! still be relaxed afterwards, a negative-weight cycle is reachable from
//! the source and no shortest paths exist.
//!
//! Edges leaving a vertex that has not been reached yet are never relaxed,
//! so negative cycles elsewhere in the graph do not affect the result.
//!
//! Distances around a negative cycle keep falling every round and can run
//! past the range of `W` before the final check. When an addition with a
//! negative weight overflows and the edge closes a loop in the predecessor
//! links, the overflow is reported as a negative cycle.
//!
//! # Complexity
//! O(V · E) time, O(V) space.

use tracing::{debug, trace};

use super::ShortestPaths;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::weight::{ensure_valid, Weight};

/// Shortest distances from `source`, allowing negative edge weights.
///
/// # Errors
/// - [`Error::UnknownVertex`] if `source` is not in the graph.
/// - [`Error::InvalidWeight`] for NaN or infinite edge weights.
/// - [`Error::NegativeCycle`] if a negative cycle is reachable from `source`.
/// - [`Error::WeightOverflow`] if a path length overflows `W` and the
///   overflow cannot be traced to a negative cycle.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::search::bellman_ford;
///
/// let g = Graph::from_adjacency([
///     ("A", vec![("B", 4), ("C", 2)]),
///     ("B", vec![("C", -3), ("D", 2)]),
///     ("C", vec![("D", 3)]),
///     ("D", vec![]),
/// ]);
/// let sp = bellman_ford(&g, &"A")?;
/// assert_eq!(sp.distance(&"C"), Some(1));
/// assert_eq!(sp.distance(&"D"), Some(4));
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn bellman_ford<'g, V: Vertex, W: Weight>(
    graph: &'g Graph<V, W>,
    source: &V,
) -> Result<ShortestPaths<'g, V, W>> {
    let s = graph.index_of(source)?;
    let n = graph.vertex_count();
    for u in 0..n {
        for &(_, w) in graph.out_edges(u) {
            ensure_valid(w)?;
        }
    }

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred = vec![None; n];
    dist[s] = Some(W::zero());

    let mut rounds = 0;
    for _ in 1..n {
        rounds += 1;
        if !relax_all(graph, &mut dist, &mut pred)? {
            break;
        }
    }

    if relax_all(graph, &mut dist, &mut pred)? {
        debug!(rounds, "bellman_ford: negative cycle detected");
        return Err(Error::NegativeCycle);
    }

    debug!(vertices = n, rounds, "bellman_ford: done");
    Ok(ShortestPaths::new(graph, s, dist, pred))
}

/// One pass over every edge. Returns whether any distance improved.
fn relax_all<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    dist: &mut [Option<W>],
    pred: &mut [Option<usize>],
) -> Result<bool> {
    let mut changed = false;
    for u in 0..graph.vertex_count() {
        let Some(du) = dist[u] else { continue };
        for &(v, w) in graph.out_edges(u) {
            let Some(candidate) = du.checked_add(w) else {
                if w.is_negative() && closes_pred_cycle(pred, u, v) {
                    return Err(Error::NegativeCycle);
                }
                return Err(Error::WeightOverflow);
            };
            if dist[v].is_none_or(|cur| candidate < cur) {
                trace!(from = u, to = v, distance = ?candidate, "relax");
                dist[v] = Some(candidate);
                pred[v] = Some(u);
                changed = true;
            }
        }
    }
    Ok(changed)
}

/// Returns `true` if `target` lies on the predecessor chain starting at
/// `from`, i.e. the edge `from -> target` would close a loop.
fn closes_pred_cycle(pred: &[Option<usize>], from: usize, target: usize) -> bool {
    let mut node = from;
    for _ in 0..=pred.len() {
        if node == target {
            return true;
        }
        match pred[node] {
            Some(p) => node = p,
            None => return false,
        }
    }
    false
}
