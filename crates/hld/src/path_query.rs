use crate::decompose::HeavyLight;
use crate::policy::{AssignMonoid, Mark, VertexSum, VertexSumMax};
use crate::segment_tree::SegmentTree;
use crate::tree::Tree;

/// Heavy-light decomposed tree with a segment tree over its positions.
///
/// The topology is fixed at construction; per-vertex keys are the only
/// mutable state, and every query or update on a path resolves to O(log n)
/// segment tree calls over contiguous position ranges.
pub struct HldTree<P: AssignMonoid> {
    hld: HeavyLight,
    seg: SegmentTree<P>,
}

impl<P: AssignMonoid> HldTree<P> {
    /// Build over `tree` rooted at `root`, with `values[v]` as the initial
    /// key of vertex `v`.
    pub fn new(tree: &Tree, root: usize, values: &[P::Key]) -> Self {
        debug_assert_eq!(tree.len(), values.len());
        let hld = HeavyLight::new(tree, root);
        let mut ordered = Vec::with_capacity(values.len());
        for p in 0..values.len() {
            ordered.push(values[hld.vertex_at(p)]);
        }
        Self {
            hld,
            seg: SegmentTree::new(&ordered),
        }
    }

    pub fn len(&self) -> usize {
        self.hld.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hld.is_empty()
    }

    /// The underlying decomposition.
    pub fn decomposition(&self) -> &HeavyLight {
        &self.hld
    }

    pub fn vertex_set(&mut self, v: usize, key: P::Key) {
        self.seg.set(self.hld.pos(v), key);
    }

    pub fn vertex_fold(&self, v: usize) -> P::Agg {
        let p = self.hld.pos(v);
        self.seg.fold(p..p + 1)
    }

    /// Aggregate over the vertices of the u–v path (inclusive).
    pub fn path_fold(&self, u: usize, v: usize) -> P::Agg {
        let mut acc = P::agg_unit();
        self.hld.path_segments(u, v, |range| {
            acc = P::agg_merge(&acc, &self.seg.fold(range));
        });
        acc
    }

    /// Set every vertex on the u–v path to `key`.
    pub fn path_assign(&mut self, u: usize, v: usize, key: P::Key) {
        let seg = &mut self.seg;
        self.hld.path_segments(u, v, |range| {
            seg.assign(range, key);
        });
    }

    /// Number of vertices on the u–v path (inclusive).
    pub fn path_len(&self, u: usize, v: usize) -> usize {
        let mut len = 0;
        self.hld.path_segments(u, v, |range| {
            len += range.len();
        });
        len
    }

    pub fn lca(&self, u: usize, v: usize) -> usize {
        self.hld.lca(u, v)
    }

    /// Aggregate over the subtree rooted at `v`.
    pub fn subtree_fold(&self, v: usize) -> P::Agg {
        self.seg.fold(self.hld.subtree_range(v))
    }

    /// Set every vertex in the subtree rooted at `v` to `key`.
    pub fn subtree_assign(&mut self, v: usize, key: P::Key) {
        self.seg.assign(self.hld.subtree_range(v), key);
    }
}

impl HldTree<VertexSumMax> {
    pub fn path_sum(&self, u: usize, v: usize) -> i64 {
        self.path_fold(u, v).sum
    }

    pub fn path_max(&self, u: usize, v: usize) -> i64 {
        self.path_fold(u, v).max
    }
}

impl HldTree<VertexSum> {
    pub fn path_sum(&self, u: usize, v: usize) -> i64 {
        self.path_fold(u, v)
    }

    pub fn subtree_sum(&self, v: usize) -> i64 {
        self.subtree_fold(v)
    }
}

impl HldTree<Mark> {
    /// Marked vertices on the u–v path.
    pub fn path_marked(&self, u: usize, v: usize) -> usize {
        self.path_fold(u, v)
    }

    /// Unmarked vertices on the u–v path: segment lengths minus the
    /// indicator sum.
    pub fn path_unmarked(&self, u: usize, v: usize) -> usize {
        self.path_len(u, v) - self.path_fold(u, v)
    }

    pub fn mark_path(&mut self, u: usize, v: usize) {
        self.path_assign(u, v, true);
    }

    /// Marked vertices in the subtree rooted at `v`.
    pub fn subtree_marked(&self, v: usize) -> usize {
        self.subtree_fold(v)
    }

    pub fn clear_subtree(&mut self, v: usize) {
        self.subtree_assign(v, false);
    }
}
