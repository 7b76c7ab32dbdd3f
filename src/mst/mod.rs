//! Minimum spanning tree construction.
//!
//! - [`DisjointSet`] — Union-find forest with path compression and union by rank
//! - [`spanning_tree`] — Kruskal's algorithm over a complete symmetric graph, O(n² log n)

mod disjoint_set;
mod kruskal;

pub use disjoint_set::DisjointSet;
pub use kruskal::{spanning_tree, Edge};
