use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rand::Rng;

use hld::generator::{TreeCase, generate_case};
use hld::policy::{Mark, VertexSum, VertexSumMax};
use hld::{HeavyLight, HldTree, Tree};

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const WEIGHT_RANGE: std::ops::RangeInclusive<i64> = -1_000_000_000..=1_000_000_000;
const SEED_BASE: u64 = 0x1D2E_2026;

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn generate_weights<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    let mut weights = Vec::with_capacity(n);
    for _ in 0..n {
        weights.push(rng.random_range(WEIGHT_RANGE));
    }
    weights
}

fn generate_pairs<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(q);
    for _ in 0..q {
        pairs.push((rng.random_range(0..n), rng.random_range(0..n)));
    }
    pairs
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("hld/decompose");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        for case in TreeCase::ALL {
            let edges = generate_case(case, size, SEED_BASE);
            let n = edges.len() + 1;
            let tree = Tree::from_edges(n, &edges).expect("generated edges form a tree");

            group.bench_function(BenchmarkId::new(case.label(), size), |bencher| {
                bencher.iter(|| black_box(HeavyLight::new(black_box(&tree), 0)));
            });
        }
    }

    group.finish();
}

fn bench_path_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("hld/path_sum_max");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        for case in TreeCase::ALL {
            let edges = generate_case(case, size, SEED_BASE ^ size as u64);
            let n = edges.len() + 1;
            let tree = Tree::from_edges(n, &edges).expect("generated edges form a tree");
            let weights = generate_weights(&mut rng, n);
            let queries = generate_pairs(&mut rng, n, n);
            let hld = HldTree::<VertexSumMax>::new(&tree, 0, &weights);

            group.bench_function(BenchmarkId::new(case.label(), size), |bencher| {
                bencher.iter(|| {
                    let mut acc = 0_i64;
                    for &(u, v) in &queries {
                        acc = acc.wrapping_add(hld.path_sum(u, v));
                        acc = acc.wrapping_add(hld.path_max(u, v));
                    }
                    black_box(acc)
                });
            });
        }
    }

    group.finish();
}

fn bench_path_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("hld/path_assign");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        for case in TreeCase::ALL {
            let edges = generate_case(case, size, SEED_BASE ^ (size as u64).rotate_left(13));
            let n = edges.len() + 1;
            let tree = Tree::from_edges(n, &edges).expect("generated edges form a tree");
            let weights = generate_weights(&mut rng, n);
            let ops = generate_pairs(&mut rng, n, n);

            group.bench_function(BenchmarkId::new(case.label(), size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut hld = HldTree::<VertexSum>::new(&tree, 0, &weights);
                        let start = Instant::now();
                        let mut acc = 0_i64;
                        for (i, &(u, v)) in ops.iter().enumerate() {
                            if i % 2 == 0 {
                                hld.path_assign(u, v, i as i64);
                            } else {
                                acc = acc.wrapping_add(hld.path_sum(u, v));
                            }
                        }
                        black_box(acc);
                        total += start.elapsed();
                    }
                    total
                });
            });
        }
    }

    group.finish();
}

fn bench_subtree_marks(c: &mut Criterion) {
    let mut group = c.benchmark_group("hld/subtree_marks");
    let mut rng = default_rng();

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let edges = generate_case(TreeCase::RandomAttach, size, SEED_BASE ^ 0xA5A5);
        let n = edges.len() + 1;
        let tree = Tree::from_edges(n, &edges).expect("generated edges form a tree");
        let targets = (0..n).map(|_| rng.random_range(0..n)).collect::<Vec<_>>();
        let unmarked = vec![false; n];

        group.bench_function(BenchmarkId::new("install_uninstall", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut hld = HldTree::<Mark>::new(&tree, 0, &unmarked);
                    let start = Instant::now();
                    let mut acc = 0_usize;
                    for (i, &v) in targets.iter().enumerate() {
                        if i % 2 == 0 {
                            acc += hld.path_unmarked(0, v);
                            hld.mark_path(0, v);
                        } else {
                            acc += hld.subtree_marked(v);
                            hld.clear_subtree(v);
                        }
                    }
                    black_box(acc);
                    total += start.elapsed();
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decompose,
    bench_path_queries,
    bench_path_assign,
    bench_subtree_marks
);
criterion_main!(benches);
