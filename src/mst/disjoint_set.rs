//! Union-find (disjoint set) forest.

/// A disjoint-set forest over a fixed universe of `n` elements, with path
/// compression and union by rank.
///
/// Used by Kruskal's algorithm to track which vertices already belong to
/// the same tree component. Amortized near-constant time per operation.
///
/// # Examples
///
/// ```
/// use u_tsp::mst::DisjointSet;
///
/// let mut ds = DisjointSet::new(4);
/// assert_ne!(ds.find(0), ds.find(1));
/// ds.union(0, 1);
/// assert_eq!(ds.find(0), ds.find(1));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per element, each with rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the canonical representative of the set containing `i`.
    ///
    /// Compresses the path so that every element on the chain points
    /// directly at the root afterwards.
    pub fn find(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[i] != i {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    /// Merges the sets containing `i` and `j`.
    ///
    /// The lower-rank root is attached under the higher-rank root; on equal
    /// rank the surviving root's rank is incremented. Merging an element
    /// with its own set is a no-op; Kruskal checks `find` on both endpoints
    /// before calling.
    pub fn union(&mut self, i: usize, j: usize) {
        let mut a = self.find(i);
        let mut b = self.find(j);
        if a == b {
            return;
        }
        if self.rank[a] < self.rank[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.rank[a] == self.rank[b] {
            self.rank[a] = self.rank[a].saturating_add(1);
        }
    }
}
