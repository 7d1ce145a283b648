use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kd_bounds::distance::minkowski_distance_p;
use kd_bounds::min_max_dist::Periodic;
use kd_bounds::test_utils::{rand_point, seeded_rng};
use kd_bounds::traits::MinMaxDist;
use std::hint::black_box;

const POINTS: usize = 1_000;

fn distance_p(c: &mut Criterion) {
    let mut group = c.benchmark_group("Distance p");
    group.throughput(Throughput::Elements(POINTS as u64));

    for dims in [3, 16] {
        let mut rng = seeded_rng(1);
        let query = rand_point(&mut rng, dims, 1.0);
        let points: Vec<Vec<f64>> = (0..POINTS).map(|_| rand_point(&mut rng, dims, 1.0)).collect();
        let periodic = Periodic::new(&vec![1.0; dims]).unwrap();

        for (p, label) in [(2.0, "p=2"), (1.0, "p=1"), (3.0, "p=3"), (f64::INFINITY, "p=inf")] {
            for (upper_bound, bound_label) in [(f64::INFINITY, "exact"), (0.01, "truncated")] {
                group.bench_with_input(
                    BenchmarkId::new(format!("plain {label} {bound_label}"), dims),
                    &points,
                    |b, points| {
                        b.iter(|| {
                            points
                                .iter()
                                .map(|x| minkowski_distance_p(&query, x, p, upper_bound))
                                .fold(0.0, |acc, d| acc + black_box(d))
                        })
                    },
                );

                group.bench_with_input(
                    BenchmarkId::new(format!("periodic {label} {bound_label}"), dims),
                    &points,
                    |b, points| {
                        b.iter(|| {
                            points
                                .iter()
                                .map(|x| periodic.distance_p(&query, x, p, upper_bound))
                                .fold(0.0, |acc, d| acc + black_box(d))
                        })
                    },
                );
            }
        }
    }

    group.finish();
}

criterion_group!(benches, distance_p);
criterion_main!(benches);
