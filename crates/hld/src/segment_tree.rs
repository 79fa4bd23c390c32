use std::ops::Range;

use crate::policy::AssignMonoid;

/// Binary segment tree over positions `0..len`, parametrized by an
/// [`AssignMonoid`] policy.
///
/// Index-addressed arena: the root is node 1, the children of node `k` are
/// `2k` and `2k + 1`. Ranges are half-open. When the policy supports range
/// assignment a node may carry a pending tag, meaning every position it
/// covers logically holds that key even though the children have not been
/// rewritten yet.
#[derive(Clone, Debug)]
pub struct SegmentTree<P: AssignMonoid> {
    len: usize,
    agg: Vec<P::Agg>,
    tag: Vec<Option<P::Key>>,
}

impl<P: AssignMonoid> SegmentTree<P> {
    pub fn new(values: &[P::Key]) -> Self {
        let len = values.len();
        if len == 0 {
            return Self {
                len,
                agg: Vec::new(),
                tag: Vec::new(),
            };
        }
        let agg = vec![P::agg_unit(); 4 * len];
        let tag = if P::RANGE_ASSIGN {
            vec![None; 4 * len]
        } else {
            Vec::new()
        };
        let mut tree = Self { len, agg, tag };
        tree.build(1, 0, len, values);
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn build(&mut self, node: usize, l: usize, r: usize, values: &[P::Key]) {
        if r - l == 1 {
            self.agg[node] = P::agg_from_key(&values[l]);
            return;
        }
        let mid = l + (r - l) / 2;
        self.build(2 * node, l, mid, values);
        self.build(2 * node + 1, mid, r, values);
        self.agg[node] = P::agg_merge(&self.agg[2 * node], &self.agg[2 * node + 1]);
    }

    #[inline]
    fn apply_tag(&mut self, node: usize, len: usize, key: P::Key) {
        self.agg[node] = P::agg_fill(&key, len);
        self.tag[node] = Some(key);
    }

    #[inline]
    fn push_down(&mut self, node: usize, l: usize, mid: usize, r: usize) {
        if !P::RANGE_ASSIGN {
            return;
        }
        if let Some(key) = self.tag[node].take() {
            self.apply_tag(2 * node, mid - l, key);
            self.apply_tag(2 * node + 1, r - mid, key);
        }
    }

    /// Point assignment, available under every policy.
    pub fn set(&mut self, pos: usize, key: P::Key) {
        debug_assert!(pos < self.len, "position {pos} out of range 0..{}", self.len);
        self.set_rec(1, 0, self.len, pos, key);
    }

    fn set_rec(&mut self, node: usize, l: usize, r: usize, pos: usize, key: P::Key) {
        if r - l == 1 {
            self.agg[node] = P::agg_from_key(&key);
            if P::RANGE_ASSIGN {
                self.tag[node] = None;
            }
            return;
        }
        let mid = l + (r - l) / 2;
        self.push_down(node, l, mid, r);
        if pos < mid {
            self.set_rec(2 * node, l, mid, pos, key);
        } else {
            self.set_rec(2 * node + 1, mid, r, pos, key);
        }
        self.agg[node] = P::agg_merge(&self.agg[2 * node], &self.agg[2 * node + 1]);
    }

    /// Set every position in `range` to `key`.
    ///
    /// Only available when the policy opts into `RANGE_ASSIGN`; tags are
    /// pushed down lazily, when a later call must descend past them.
    pub fn assign(&mut self, range: Range<usize>, key: P::Key) {
        // Constant per policy, so the check folds away where it holds.
        assert!(P::RANGE_ASSIGN, "policy does not support range assignment");
        debug_assert!(
            range.start <= range.end && range.end <= self.len,
            "ill-formed range {range:?} for length {}",
            self.len
        );
        if range.start >= range.end {
            return;
        }
        self.assign_rec(1, 0, self.len, &range, key);
    }

    fn assign_rec(&mut self, node: usize, l: usize, r: usize, range: &Range<usize>, key: P::Key) {
        if range.start <= l && r <= range.end {
            self.apply_tag(node, r - l, key);
            return;
        }
        let mid = l + (r - l) / 2;
        self.push_down(node, l, mid, r);
        if range.start < mid {
            self.assign_rec(2 * node, l, mid, range, key);
        }
        if mid < range.end {
            self.assign_rec(2 * node + 1, mid, r, range, key);
        }
        self.agg[node] = P::agg_merge(&self.agg[2 * node], &self.agg[2 * node + 1]);
    }

    /// Aggregate of `range`. Empty ranges fold to the unit.
    ///
    /// Read-only: a fully tagged node answers any sub-range through
    /// `agg_fill`, so queries never materialize pending tags.
    pub fn fold(&self, range: Range<usize>) -> P::Agg {
        debug_assert!(
            range.start <= range.end && range.end <= self.len,
            "ill-formed range {range:?} for length {}",
            self.len
        );
        if range.start >= range.end {
            return P::agg_unit();
        }
        self.fold_rec(1, 0, self.len, &range)
    }

    fn fold_rec(&self, node: usize, l: usize, r: usize, range: &Range<usize>) -> P::Agg {
        if range.start <= l && r <= range.end {
            return self.agg[node];
        }
        if P::RANGE_ASSIGN {
            if let Some(key) = self.tag[node] {
                let overlap = r.min(range.end) - l.max(range.start);
                return P::agg_fill(&key, overlap);
            }
        }
        let mid = l + (r - l) / 2;
        if range.end <= mid {
            self.fold_rec(2 * node, l, mid, range)
        } else if mid <= range.start {
            self.fold_rec(2 * node + 1, mid, r, range)
        } else {
            P::agg_merge(
                &self.fold_rec(2 * node, l, mid, range),
                &self.fold_rec(2 * node + 1, mid, r, range),
            )
        }
    }
}
