//! Depth-first search.
//!
//! Follows one branch as far as possible before backtracking. Neighbors are
//! explored in adjacency order, so results are deterministic, but the path
//! found is not necessarily the shortest. The traversal keeps an explicit
//! stack of `(vertex, next neighbor)` frames rather than recursing.

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::weight::Weight;

/// Returns `true` if `target` is reachable from `start`.
///
/// # Errors
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either vertex is
/// not in the graph.
pub fn dfs<V: Vertex, W: Weight>(graph: &Graph<V, W>, start: &V, target: &V) -> Result<bool> {
    Ok(dfs_path(graph, start, target)?.is_some())
}

/// The first path from `start` to `target` found depth-first.
///
/// # Errors
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either vertex is
/// not in the graph.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::search::dfs_path;
///
/// let g = Graph::from_edges([("A", "B", 1), ("B", "D", 1), ("A", "D", 1)]);
/// // DFS dives through B before trying the direct edge.
/// assert_eq!(dfs_path(&g, &"A", &"D")?, Some(vec!["A", "B", "D"]));
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn dfs_path<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    start: &V,
    target: &V,
) -> Result<Option<Vec<V>>> {
    let s = graph.index_of(start)?;
    let t = graph.index_of(target)?;

    let mut found: Option<Vec<V>> = None;
    walk(graph, s, |stack| {
        let top = stack[stack.len() - 1].0;
        if top == t {
            found = Some(stack.iter().map(|&(i, _)| graph.vertex_at(i).clone()).collect());
            true
        } else {
            false
        }
    });
    debug!(found = found.is_some(), "dfs: search finished");
    Ok(found)
}

/// Vertices reachable from `start`, in depth-first preorder.
///
/// # Errors
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not in
/// the graph.
pub fn dfs_order<V: Vertex, W: Weight>(graph: &Graph<V, W>, start: &V) -> Result<Vec<V>> {
    let s = graph.index_of(start)?;
    let mut order = Vec::new();
    walk(graph, s, |stack| {
        order.push(graph.vertex_at(stack[stack.len() - 1].0).clone());
        false
    });
    Ok(order)
}

/// Drives the traversal. `on_enter` sees the stack each time a vertex is
/// first entered (the new vertex on top) and returns `true` to stop.
fn walk<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    start: usize,
    mut on_enter: impl FnMut(&[(usize, usize)]) -> bool,
) {
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![(start, 0_usize)];
    visited[start] = true;
    if on_enter(&stack) {
        return;
    }

    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        match graph.out_edges(u).get(next) {
            Some(&(v, _)) => {
                frame.1 += 1;
                if !visited[v] {
                    visited[v] = true;
                    stack.push((v, 0));
                    if on_enter(&stack) {
                        return;
                    }
                }
            }
            None => {
                stack.pop();
            }
        }
    }
}
