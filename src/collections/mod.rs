//! Auxiliary data structures used by the graph algorithms.

mod union_find;

pub use union_find::{DisjointSet, UnionFind};
