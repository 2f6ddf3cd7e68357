//! A* goal-directed search.
//!
//! Like Dijkstra, but the heap is ordered by `g(n) + h(n)`: the known cost
//! from the start plus a caller-supplied estimate of the remaining cost.
//! The returned path is optimal whenever the heuristic is admissible
//! (never overestimates). A heuristic that always returns zero reduces A*
//! to Dijkstra.
//!
//! Heap entries carry the `g` they were pushed with; an entry whose `g` is
//! worse than the best known cost for its vertex is stale and skipped.
//!
//! # References
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths", *IEEE Trans. SSC* 4(2).

use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::{check_weights, reconstruct_path, MinScored};
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::weight::{ensure_valid, Weight};

/// Cheapest path from `start` to `goal` as `(cost, vertices)`, or `None`
/// if `goal` is unreachable.
///
/// `heuristic(n, goal)` estimates the remaining cost from `n`.
///
/// # Errors
/// - [`Error::UnknownVertex`] if `start` or `goal` is not in the graph.
/// - [`Error::NegativeWeight`] / [`Error::InvalidWeight`] if any edge weight
///   in the graph is negative or non-finite (checked before searching), or
///   if the heuristic returns a non-finite value.
/// - [`Error::WeightOverflow`] if a cost overflows `W`.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::search::astar;
///
/// let g = Graph::from_adjacency([
///     ("A", vec![("B", 1), ("C", 4)]),
///     ("B", vec![("C", 2), ("D", 5)]),
///     ("C", vec![("D", 1)]),
///     ("D", vec![]),
/// ]);
/// let found = astar(&g, &"A", &"D", |_, _| 0)?;
/// assert_eq!(found, Some((4, vec!["A", "B", "C", "D"])));
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn astar<V, W, H>(
    graph: &Graph<V, W>,
    start: &V,
    goal: &V,
    mut heuristic: H,
) -> Result<Option<(W, Vec<V>)>>
where
    V: Vertex,
    W: Weight,
    H: FnMut(&V, &V) -> W,
{
    let s = graph.index_of(start)?;
    let t = graph.index_of(goal)?;
    check_weights(graph)?;

    let n = graph.vertex_count();
    let mut g_score: Vec<Option<W>> = vec![None; n];
    let mut came_from = vec![None; n];
    let mut open = BinaryHeap::new();

    g_score[s] = Some(W::zero());
    let h0 = ensure_valid(heuristic(start, goal))?;
    open.push(MinScored(h0, (W::zero(), s)));

    let mut expanded = 0_usize;
    while let Some(MinScored(_, (g, current))) = open.pop() {
        if g_score[current].is_some_and(|best| best < g) {
            continue;
        }
        if current == t {
            debug!(expanded, cost = ?g, "astar: goal reached");
            let path = reconstruct_path(&came_from, t)
                .into_iter()
                .map(|i| graph.vertex_at(i).clone())
                .collect();
            return Ok(Some((g, path)));
        }
        expanded += 1;

        for &(next, w) in graph.out_edges(current) {
            let tentative = g.checked_add(w).ok_or(Error::WeightOverflow)?;
            if g_score[next].is_none_or(|best| tentative < best) {
                g_score[next] = Some(tentative);
                came_from[next] = Some(current);
                let h = ensure_valid(heuristic(graph.vertex_at(next), goal))?;
                let f = tentative.checked_add(h).ok_or(Error::WeightOverflow)?;
                trace!(from = current, to = next, g = ?tentative, f = ?f, "push");
                open.push(MinScored(f, (tentative, next)));
            }
        }
    }

    debug!(expanded, "astar: goal unreachable");
    Ok(None)
}
