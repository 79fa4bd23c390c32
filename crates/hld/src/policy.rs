//! Policy (monoid + range-assignment action) for the segment tree.
//!
//! A policy fixes the per-position key type, the aggregate maintained over
//! ranges of keys, and whether a whole range may be overwritten with a single
//! key through a lazy tag.

/// A commutative-merge monoid over `Key` aggregates, with an optional
/// range-assignment action.
///
/// `agg_fill(key, len)` must equal the fold of `len` copies of
/// `agg_from_key(key)`; it is what lets a pending assignment stand in for an
/// entire untouched subtree.
pub trait AssignMonoid {
    type Key: Copy;
    type Agg: Copy;

    /// Whether range assignment (lazy tags) is supported.
    ///
    /// When `false`, the segment tree allocates no tag storage and only
    /// point updates are available.
    const RANGE_ASSIGN: bool;

    fn agg_unit() -> Self::Agg;
    fn agg_from_key(key: &Self::Key) -> Self::Agg;
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg;

    /// Aggregate of `len` copies of `key`.
    fn agg_fill(key: &Self::Key, len: usize) -> Self::Agg;
}

/// Sum of `i64` weights with lazy range assignment.
#[derive(Clone, Copy, Debug)]
pub enum VertexSum {}

impl AssignMonoid for VertexSum {
    type Key = i64;
    type Agg = i64;

    const RANGE_ASSIGN: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        *key
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left.wrapping_add(*right)
    }

    #[inline(always)]
    fn agg_fill(key: &Self::Key, len: usize) -> Self::Agg {
        key.wrapping_mul(len as i64)
    }
}

/// Paired sum and maximum of a non-empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumMax {
    pub sum: i64,
    pub max: i64,
}

/// Sum and maximum of `i64` weights, point updates only.
///
/// `agg_unit().max` is `i64::MIN`, so the unit never wins a merge.
#[derive(Clone, Copy, Debug)]
pub enum VertexSumMax {}

impl AssignMonoid for VertexSumMax {
    type Key = i64;
    type Agg = SumMax;

    const RANGE_ASSIGN: bool = false;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        SumMax {
            sum: 0,
            max: i64::MIN,
        }
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        SumMax {
            sum: *key,
            max: *key,
        }
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        SumMax {
            sum: left.sum.wrapping_add(right.sum),
            max: left.max.max(right.max),
        }
    }

    #[inline(always)]
    fn agg_fill(key: &Self::Key, len: usize) -> Self::Agg {
        SumMax {
            sum: key.wrapping_mul(len as i64),
            max: *key,
        }
    }
}

/// Boolean marks counted as an indicator sum, with lazy range assignment.
///
/// "How many unmarked" queries derive from range length minus this count.
#[derive(Clone, Copy, Debug)]
pub enum Mark {}

impl AssignMonoid for Mark {
    type Key = bool;
    type Agg = usize;

    const RANGE_ASSIGN: bool = true;

    #[inline(always)]
    fn agg_unit() -> Self::Agg {
        0
    }

    #[inline(always)]
    fn agg_from_key(key: &Self::Key) -> Self::Agg {
        usize::from(*key)
    }

    #[inline(always)]
    fn agg_merge(left: &Self::Agg, right: &Self::Agg) -> Self::Agg {
        left + right
    }

    #[inline(always)]
    fn agg_fill(key: &Self::Key, len: usize) -> Self::Agg {
        if *key { len } else { 0 }
    }
}
