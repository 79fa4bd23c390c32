use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Tree shapes for tests and benchmarks.
///
/// `Path` is the recursion killer (depth = n − 1, one chain); `Star`
/// maximizes light edges at one vertex; `Caterpillar` mixes a long chain
/// with light leaves hanging off it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeCase {
    RandomAttach,
    Path,
    Star,
    Caterpillar,
    FullBinary,
}

impl TreeCase {
    pub const ALL: [Self; 5] = [
        Self::RandomAttach,
        Self::Path,
        Self::Star,
        Self::Caterpillar,
        Self::FullBinary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RandomAttach => "random_attach",
            Self::Path => "path",
            Self::Star => "star",
            Self::Caterpillar => "caterpillar",
            Self::FullBinary => "full_binary",
        }
    }
}

/// Generate the edge list of a `case`-shaped tree on `size` vertices
/// (vertex 0 is the intended root).
pub fn generate_case(case: TreeCase, size: usize, seed: u64) -> Vec<(usize, usize)> {
    let n = size.max(2);
    match case {
        TreeCase::RandomAttach => random_attach(n, seed),
        TreeCase::Path => (1..n).map(|i| (i, i - 1)).collect(),
        TreeCase::Star => (1..n).map(|i| (i, 0)).collect(),
        TreeCase::Caterpillar => caterpillar(n, seed),
        TreeCase::FullBinary => (1..n).map(|i| (i, (i - 1) / 2)).collect(),
    }
}

fn random_attach(n: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..n).map(|i| (i, rng.random_range(0..i))).collect()
}

fn caterpillar(n: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let spine = (n / 2).max(1);
    let mut edges = Vec::with_capacity(n - 1);
    for i in 1..spine {
        edges.push((i, i - 1));
    }
    for i in spine..n {
        edges.push((i, rng.random_range(0..spine)));
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::{TreeCase, generate_case};
    use crate::tree::Tree;

    #[test]
    fn every_case_yields_a_valid_tree() {
        for case in TreeCase::ALL {
            for &size in &[2_usize, 3, 10, 64] {
                for seed in 0..3 {
                    let edges = generate_case(case, size, seed);
                    let n = edges.len() + 1;
                    assert!(n >= size, "case={}", case.label());
                    Tree::from_edges(n, &edges)
                        .unwrap_or_else(|e| panic!("case={} seed={seed}: {e}", case.label()));
                }
            }
        }
    }

    #[test]
    fn fixed_shapes_have_expected_structure() {
        let path = generate_case(TreeCase::Path, 5, 0);
        assert_eq!(path, vec![(1, 0), (2, 1), (3, 2), (4, 3)]);

        let star = generate_case(TreeCase::Star, 4, 0);
        assert_eq!(star, vec![(1, 0), (2, 0), (3, 0)]);

        let binary = generate_case(TreeCase::FullBinary, 7, 0);
        assert_eq!(binary, vec![(1, 0), (2, 0), (3, 1), (4, 1), (5, 2), (6, 2)]);
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a = generate_case(TreeCase::RandomAttach, 100, 42);
        let b = generate_case(TreeCase::RandomAttach, 100, 42);
        assert_eq!(a, b);
        let c = generate_case(TreeCase::RandomAttach, 100, 43);
        assert_ne!(a, c);
    }
}
