//! Disjoint-set (Union-Find) structures.
//!
//! Two layers are provided:
//!
//! - [`UnionFind`]: the array-backed forest over dense indices `0..n`.
//! - [`DisjointSet`]: a keyed wrapper over arbitrary vertex identifiers,
//!   which is what Kruskal's algorithm works with.
//!
//! # Algorithm
//!
//! Uses **path compression** during `find` and **union by rank** during
//! `union` to achieve amortized O(α(n)) per operation, where α is the
//! inverse Ackermann function. For all practical input sizes α(n) ≤ 4.
//!
//! The parent array always encodes a forest: every parent chain ends at a
//! root that is its own parent. Path compression only shortens chains and
//! never changes which root a node reaches.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::Vertex;

/// Disjoint-set forest over `0..n` with path compression and union by rank.
///
/// # Examples
/// ```
/// use u_pathfind::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
///
/// assert!(uf.union(1, 3));
/// assert!(!uf.union(0, 2)); // already merged: would close a cycle
/// assert_eq!(uf.component_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Appends a new singleton set and returns its index.
    ///
    /// # Complexity
    /// Amortized O(1)
    pub fn push(&mut self) -> usize {
        let i = self.parent.len();
        self.parent.push(i);
        self.rank.push(0);
        self.size.push(1);
        self.components += 1;
        i
    }

    /// Finds the root of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is re-pointed directly
    /// at the root. Two passes, no recursion.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` without touching the forest if both are already in
    /// the same set; Kruskal reads this as "edge would close a cycle".
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let (child, root) = match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => (root_x, root_y),
            Ordering::Greater => (root_y, root_x),
            Ordering::Equal => {
                self.rank[root_x] += 1;
                (root_y, root_x)
            }
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];

        self.components -= 1;
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Size of the set containing `x`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Indices that are currently set representatives, ascending.
    ///
    /// # Complexity
    /// O(n)
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .map(|(i, _)| i)
    }
}

/// Union-Find keyed by vertex identifiers.
///
/// # Examples
/// ```
/// use u_pathfind::collections::DisjointSet;
///
/// let mut ds = DisjointSet::new(["A", "B", "C", "D"]);
/// assert!(ds.union(&"A", &"B")?);
/// assert!(ds.union(&"B", &"C")?);
/// assert!(!ds.union(&"A", &"C")?); // cycle
///
/// assert!(ds.connected(&"A", &"C")?);
/// assert_eq!(ds.component_count(), 2);
/// let root = *ds.find(&"C")?;
/// assert_eq!(root, *ds.find(&"A")?);
/// # Ok::<(), u_pathfind::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    forest: UnionFind,
}

impl<V: Vertex> DisjointSet<V> {
    /// Creates one singleton set per distinct vertex.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut ds = Self {
            index: HashMap::new(),
            vertices: Vec::new(),
            forest: UnionFind::new(0),
        };
        for v in vertices {
            ds.insert(v);
        }
        ds
    }

    /// Adds `v` as a new singleton. Returns `false` if it was already present.
    pub fn insert(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        let i = self.forest.push();
        self.index.insert(v.clone(), i);
        self.vertices.push(v);
        true
    }

    /// Returns `true` if `v` is tracked.
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Number of tracked vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertices are tracked.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Representative vertex of the set containing `v`.
    ///
    /// # Complexity
    /// Amortized O(α(n)) plus one hash lookup.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if `v` is not tracked.
    pub fn find(&mut self, v: &V) -> Result<&V> {
        let i = self.index_of(v)?;
        let root = self.forest.find(i);
        Ok(&self.vertices[root])
    }

    /// Merges the sets of `a` and `b`; `Ok(false)` means they were
    /// already joined.
    ///
    /// # Complexity
    /// Amortized O(α(n)) plus two hash lookups.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if either vertex is not tracked.
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        Ok(self.forest.union(i, j))
    }

    /// Returns `true` if `a` and `b` share a set.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if either vertex is not tracked.
    pub fn connected(&mut self, a: &V, b: &V) -> Result<bool> {
        let (i, j) = (self.index_of(a)?, self.index_of(b)?);
        Ok(self.forest.connected(i, j))
    }

    /// Number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.forest.component_count()
    }

    /// Size of the set containing `v`.
    ///
    /// # Errors
    /// [`Error::UnknownVertex`] if `v` is not tracked.
    pub fn component_size(&mut self, v: &V) -> Result<usize> {
        let i = self.index_of(v)?;
        Ok(self.forest.component_size(i))
    }

    /// The current partition. Groups are ordered by their first member and
    /// members keep insertion order.
    ///
    /// # Complexity
    /// O(n α(n))
    pub fn groups(&mut self) -> Vec<Vec<V>> {
        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<V>> = Vec::new();
        for i in 0..self.vertices.len() {
            let root = self.forest.find(i);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(self.vertices[i].clone());
        }
        groups
    }

    fn index_of(&self, v: &V) -> Result<usize> {
        self.index
            .get(v)
            .copied()
            .ok_or_else(|| Error::unknown_vertex(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.component_count(), 5);
    }

    #[test]
    fn test_new_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.component_count(), 0);
        assert_eq!(uf.roots().count(), 0);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_self_union_rejected() {
        let mut uf = UnionFind::new(3);
        assert!(!uf.union(2, 2));
        assert_eq!(uf.component_count(), 3);
    }

    #[test]
    fn test_union_by_rank_keeps_taller_root() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1); // rank(0) = 1
        uf.union(2, 0); // rank(2) = 0 < 1, so 2 hangs under 0
        assert_eq!(uf.find(2), 0);
        uf.union(3, 2);
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.component_size(3), 4);
    }

    #[test]
    fn test_path_compression_flattens_chain() {
        let mut uf = UnionFind::new(4);
        // Build the chain 3 -> 2 -> 0 by hand-ordering unions of equal rank.
        uf.union(2, 3);
        uf.union(0, 1);
        uf.union(0, 2);
        assert_eq!(uf.parent[3], 2);
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent[3], 0);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        // Force a degenerate chain through the parent array directly.
        for i in 1..n {
            uf.parent[i] = i - 1;
        }
        assert_eq!(uf.find(n - 1), 0);
        assert_eq!(uf.parent[n - 1], 0);
    }

    #[test]
    fn test_push_adds_singleton() {
        let mut uf = UnionFind::new(2);
        uf.union(0, 1);
        assert_eq!(uf.push(), 2);
        assert_eq!(uf.component_count(), 2);
        assert_eq!(uf.roots().collect::<Vec<_>>().len(), 2);
    }

    #[test]
    fn test_disjoint_set_dedups_vertices() {
        let ds = DisjointSet::new(["a", "b", "a"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.component_count(), 2);
    }

    #[test]
    fn test_disjoint_set_unknown_vertex() {
        let mut ds = DisjointSet::new([1, 2, 3]);
        assert_eq!(ds.union(&1, &9), Err(Error::UnknownVertex("9".into())));
        assert!(ds.find(&0).is_err());
        assert!(ds.component_size(&4).is_err());
    }

    #[test]
    fn test_disjoint_set_groups() {
        let mut ds = DisjointSet::new(['a', 'b', 'c', 'd', 'e']);
        ds.union(&'a', &'c').unwrap();
        ds.union(&'d', &'e').unwrap();
        assert_eq!(ds.groups(), vec![vec!['a', 'c'], vec!['b'], vec!['d', 'e']]);
        assert_eq!(ds.component_size(&'e').unwrap(), 2);
    }

    #[test]
    fn test_disjoint_set_insert_after_unions() {
        let mut ds = DisjointSet::new(["x"]);
        assert!(ds.insert("y"));
        assert!(!ds.insert("x"));
        assert!(ds.union(&"x", &"y").unwrap());
        assert_eq!(ds.find(&"y").unwrap(), &"x");
    }
}
