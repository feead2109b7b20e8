use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mm_matrix::{Matrix, MultiplyBackend, NaiveBackend};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Time should grow roughly 8x per doubling of n.
const SIDES: [usize; 4] = [10, 50, 100, 200];

fn random_matrix(n: usize, rng: &mut StdRng) -> Matrix<i64> {
    Matrix::from_fn(n, |_, _| rng.gen_range(0..=99))
}

fn multiply_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let backend = NaiveBackend::new();

    let mut g = c.benchmark_group("multiply/naive");
    g.sample_size(10);
    for n in SIDES {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);
        // One multiply-add per (i, j, k).
        g.throughput(Throughput::Elements((n * n * n) as u64));
        g.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| backend.multiply(a, b))
        });
    }
    g.finish();

    #[cfg(feature = "parallel")]
    {
        use mm_matrix::RowParallelBackend;

        let backend = RowParallelBackend::new();
        let mut g = c.benchmark_group("multiply/row-parallel");
        g.sample_size(10);
        for n in SIDES {
            let a = random_matrix(n, &mut rng);
            let b = random_matrix(n, &mut rng);
            g.throughput(Throughput::Elements((n * n * n) as u64));
            g.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
                bench.iter(|| backend.multiply(a, b))
            });
        }
        g.finish();
    }
}

criterion_group!(benches, multiply_benchmark);
criterion_main!(benches);
