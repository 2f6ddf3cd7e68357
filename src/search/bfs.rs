//! Breadth-first search.
//!
//! Explores every vertex at distance `k` (in edges) before any vertex at
//! distance `k + 1`, so the first path found to a vertex has the fewest
//! possible edges. Edge weights are ignored.

use std::collections::VecDeque;

use tracing::debug;

use super::reconstruct_path;
use crate::error::Result;
use crate::graph::{Graph, Vertex};
use crate::weight::Weight;

/// Returns `true` if `target` is reachable from `start`.
///
/// # Errors
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either vertex is
/// not in the graph.
///
/// # Examples
/// ```
/// use u_pathfind::graph::Graph;
/// use u_pathfind::search::bfs;
///
/// let g = Graph::from_adjacency([
///     ('A', vec![('B', 1), ('C', 1)]),
///     ('B', vec![('D', 1), ('E', 1)]),
///     ('C', vec![('F', 1)]),
/// ]);
/// assert!(bfs(&g, &'A', &'E')?);
/// assert!(!bfs(&g, &'E', &'A')?);
/// # Ok::<(), u_pathfind::Error>(())
/// ```
pub fn bfs<V: Vertex, W: Weight>(graph: &Graph<V, W>, start: &V, target: &V) -> Result<bool> {
    Ok(bfs_path(graph, start, target)?.is_some())
}

/// A fewest-edge path from `start` to `target`, both ends included.
///
/// # Errors
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if either vertex is
/// not in the graph.
pub fn bfs_path<V: Vertex, W: Weight>(
    graph: &Graph<V, W>,
    start: &V,
    target: &V,
) -> Result<Option<Vec<V>>> {
    let s = graph.index_of(start)?;
    let t = graph.index_of(target)?;

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut pred = vec![None; n];
    let mut queue = VecDeque::from([s]);
    visited[s] = true;

    while let Some(u) = queue.pop_front() {
        if u == t {
            let path = reconstruct_path(&pred, t);
            debug!(len = path.len(), "bfs: target reached");
            return Ok(Some(
                path.into_iter()
                    .map(|i| graph.vertex_at(i).clone())
                    .collect(),
            ));
        }
        for &(v, _) in graph.out_edges(u) {
            if !visited[v] {
                visited[v] = true;
                pred[v] = Some(u);
                queue.push_back(v);
            }
        }
    }
    debug!("bfs: target unreachable");
    Ok(None)
}

/// Vertices reachable from `start`, in breadth-first visiting order.
///
/// # Errors
/// [`Error::UnknownVertex`](crate::Error::UnknownVertex) if `start` is not in
/// the graph.
pub fn bfs_order<V: Vertex, W: Weight>(graph: &Graph<V, W>, start: &V) -> Result<Vec<V>> {
    let s = graph.index_of(start)?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([s]);
    let mut order = Vec::new();
    visited[s] = true;

    while let Some(u) = queue.pop_front() {
        order.push(graph.vertex_at(u).clone());
        for &(v, _) in graph.out_edges(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn tree() -> Graph<char, u8> {
        Graph::from_adjacency([
            ('A', vec![('B', 1), ('C', 1)]),
            ('B', vec![('D', 1), ('E', 1)]),
            ('C', vec![('F', 1)]),
            ('D', vec![]),
            ('E', vec![]),
            ('F', vec![]),
        ])
    }

    #[test]
    fn test_reachability() {
        let g = tree();
        assert!(bfs(&g, &'A', &'E').unwrap());
        assert!(bfs(&g, &'A', &'A').unwrap());
        assert!(!bfs(&g, &'B', &'F').unwrap());
    }

    #[test]
    fn test_path_has_fewest_edges() {
        let mut g: Graph<u32, u32> = Graph::new();
        // long way round 0-1-2-3-4, shortcut 0-5-4
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4)] {
            g.add_edge(u, v, 1);
        }
        assert_eq!(bfs_path(&g, &0, &4).unwrap(), Some(vec![0, 5, 4]));
    }

    #[test]
    fn test_order_is_level_by_level() {
        let g = tree();
        assert_eq!(bfs_order(&g, &'A').unwrap(), vec!['A', 'B', 'C', 'D', 'E', 'F']);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut g: Graph<u8, u8> = Graph::new();
        g.add_undirected_edge(1, 2, 1);
        g.add_undirected_edge(2, 3, 1);
        g.add_undirected_edge(3, 1, 1);
        g.add_vertex(4);
        assert!(!bfs(&g, &1, &4).unwrap());
        assert_eq!(bfs_order(&g, &1).unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_vertex() {
        let g = tree();
        assert!(matches!(bfs(&g, &'Z', &'A'), Err(Error::UnknownVertex(_))));
        assert!(matches!(bfs(&g, &'A', &'Z'), Err(Error::UnknownVertex(_))));
    }
}
