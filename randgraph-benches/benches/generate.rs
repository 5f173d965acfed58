//! Graph generation benchmarks.
//!
//! Measures both generators across input sizes with a fixed seed, so runs are
//! comparable. The acyclic generator runs a reachability search per candidate
//! edge and is expected to scale far worse than the undirected one.
#![expect(missing_docs, reason = "Criterion macros generate undocumented items")]
#![expect(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use randgraph_benches::{fixtures::vertex_set, params::GenerateBenchParams};
use randgraph_core::{GraphKind, generate};

/// Seed used for fixtures and generation in this benchmark.
const SEED: u64 = 42;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[16, 64, 256];

fn generate_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.sample_size(20);

    for kind in GraphKind::all() {
        for &vertex_count in VERTEX_COUNTS {
            let set = vertex_set(vertex_count, SEED).expect("fixture must be valid");
            let params = GenerateBenchParams { kind, vertex_count };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &params,
                |bencher, bench_params| {
                    bencher.iter(|| {
                        let mut rng = SmallRng::seed_from_u64(SEED);
                        generate(bench_params.kind, set.as_slice(), &mut rng)
                            .expect("fixture vertices are distinct")
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, generate_graphs);
criterion_main!(benches);
