//! Seeded randomness and random graph fixtures.
//!
//! Everything here is driven by an explicit RNG so that generated graphs
//! are reproducible: the same seed always yields the same edges on the same
//! platform. Used for property tests and for producing benchmark inputs.

use rand::Rng;

use crate::graph::{Edge, Graph};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). Deterministic for a given seed on the
/// same platform.
///
/// # Examples
/// ```
/// use u_pathfind::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: u32 = rng.random_range(0..10);
/// assert!(x < 10);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Each of the n! permutations is equally likely.
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// A uniformly random permutation of `0..n`.
///
/// # Complexity
/// Time: O(n), Space: O(n)
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle(&mut indices, rng);
    indices
}

/// Generates the edge list of a connected undirected graph over `0..n`.
///
/// A random spanning tree is laid down first: vertices are visited in a
/// shuffled order and each one is attached to a uniformly chosen vertex
/// visited before it. Then `extra_edges` further edges between distinct
/// random vertices are added (parallel edges may occur). Weights are
/// uniform in `1..=max_weight`.
///
/// For `n < 2` no extra edges can be placed and the result is empty.
///
/// # Complexity
/// Time: O(n + extra_edges)
///
/// # Examples
/// ```
/// use u_pathfind::random::{create_rng, random_connected_graph};
/// let mut rng = create_rng(7);
/// let edges = random_connected_graph(10, 5, 100, &mut rng);
/// assert_eq!(edges.len(), 9 + 5);
/// assert!(edges.iter().all(|e| (1..=100).contains(&e.weight())));
/// ```
pub fn random_connected_graph<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> Vec<Edge<usize, u64>> {
    if n < 2 {
        return Vec::new();
    }
    let max_weight = max_weight.max(1);
    let order = shuffled_indices(n, rng);

    let mut edges = Vec::with_capacity(n - 1 + extra_edges);
    for k in 1..n {
        let anchor = order[rng.random_range(0..k)];
        edges.push(Edge::new(rng.random_range(1..=max_weight), order[k], anchor));
    }
    for _ in 0..extra_edges {
        let (u, v) = distinct_pair(n, rng);
        edges.push(Edge::new(rng.random_range(1..=max_weight), u, v));
    }
    edges
}

/// Generates a directed graph over `0..n` with `edge_count` random edges
/// between distinct vertices and weights uniform in `0..=max_weight`.
///
/// Every vertex is present even if it has no edges.
///
/// # Complexity
/// Time: O(n + edge_count)
pub fn random_digraph<R: Rng>(
    n: usize,
    edge_count: usize,
    max_weight: u64,
    rng: &mut R,
) -> Graph<usize, u64> {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    if n < 2 {
        return g;
    }
    for _ in 0..edge_count {
        let (u, v) = distinct_pair(n, rng);
        g.add_edge(u, v, rng.random_range(0..=max_weight));
    }
    g
}

fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let u = rng.random_range(0..n);
    let mut v = rng.random_range(0..n - 1);
    if v >= u {
        v += 1;
    }
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::UnionFind;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<u64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<u64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = create_rng(0);
        let mut empty: Vec<i32> = vec![];
        shuffle(&mut empty, &mut rng);
        let mut one = vec![42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn test_shuffled_indices() {
        let mut rng = create_rng(42);
        let mut sorted = shuffled_indices(10, &mut rng);
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_connected_graph_tree_part_spans() {
        let mut rng = create_rng(99);
        let edges = random_connected_graph(50, 0, 10, &mut rng);
        assert_eq!(edges.len(), 49);
        let mut uf = UnionFind::new(50);
        for e in &edges {
            assert!(uf.union(*e.u(), *e.v()));
        }
        assert_eq!(uf.component_count(), 1);
    }

    #[test]
    fn test_connected_graph_tiny() {
        let mut rng = create_rng(1);
        assert!(random_connected_graph(0, 10, 5, &mut rng).is_empty());
        assert!(random_connected_graph(1, 10, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = random_connected_graph(20, 15, 9, &mut create_rng(5));
        let b = random_connected_graph(20, 15, 9, &mut create_rng(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_digraph_shape() {
        let mut rng = create_rng(3);
        let g = random_digraph(8, 30, 4, &mut rng);
        assert_eq!(g.vertex_count(), 8);
        assert_eq!(g.edge_count(), 30);
        assert!(g.edges().all(|e| e.u() != e.v() && e.weight() <= 4));
    }
}
