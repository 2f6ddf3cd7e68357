//! Error type shared by every algorithm in the crate.

/// Errors reported by graph construction and the graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vertex was referenced that the graph or disjoint set does not contain.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
    /// An edge weight is NaN or infinite.
    #[error("invalid edge weight: {0}")]
    InvalidWeight(String),
    /// A negative edge weight was passed to an algorithm that requires
    /// non-negative weights (Dijkstra, A*).
    #[error("negative edge weight: {0}")]
    NegativeWeight(String),
    /// Bellman-Ford found a negative-weight cycle reachable from the source.
    #[error("graph contains a negative weight cycle reachable from the source")]
    NegativeCycle,
    /// Accumulating path or tree weights overflowed the weight type.
    #[error("weight accumulation overflowed")]
    WeightOverflow,
    /// A spanning tree was required but the graph has several components.
    #[error("graph is disconnected ({components} components)")]
    Disconnected { components: usize },
    /// An adjacency matrix was not square.
    #[error("invalid adjacency matrix: {0}")]
    InvalidMatrix(String),
}

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(v: &V) -> Self {
        Error::UnknownVertex(format!("{v:?}"))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
