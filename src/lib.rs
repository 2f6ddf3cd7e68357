//! # u-pathfind
//!
//! Graph primitives: disjoint sets, minimum spanning trees, and the classic
//! shortest-path and traversal searches.
//!
//! Everything is in-memory, synchronous, and generic over the vertex id
//! type ([`graph::Vertex`]) and the numeric edge weight ([`weight::Weight`]).
//!
//! ## Modules
//!
//! - [`collections`] — Union-Find with path compression and union by rank
//! - [`spanning_tree`] — Kruskal's minimum spanning tree / forest
//! - [`search`] — BFS, DFS, Dijkstra, A*, Bellman-Ford
//! - [`graph`] — adjacency-list graph and edge types
//! - [`random`] — seeded random graph fixtures
//!
//! ## Design Philosophy
//!
//! - **Errors, not sentinels**: unknown vertices, invalid weights, and
//!   negative cycles are reported through [`Error`]; unreachable vertices
//!   are `None`.
//! - **Deterministic**: vertex and neighbor order follow insertion order,
//!   and equal-weight edges keep their input order.
//! - **Property-based testing**: algorithm invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_pathfind::spanning_tree::kruskal;
//!
//! let mst = kruskal(
//!     ["A", "B", "C", "D"],
//!     [(1, "A", "B"), (3, "A", "C"), (2, "B", "C"), (4, "C", "D")],
//! )?;
//! assert_eq!(mst.total_weight(), 7);
//! # Ok::<(), u_pathfind::Error>(())
//! ```

pub mod collections;
pub mod error;
pub mod graph;
pub mod random;
pub mod search;
pub mod spanning_tree;
pub mod weight;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use spanning_tree::{kruskal, KruskalConfig, SpanningForest};
pub use weight::Weight;
