use criterion::measurement::WallTime;
use criterion::{
    criterion_group, criterion_main, AxisScale, BatchSize, BenchmarkGroup, BenchmarkId, Criterion,
    PlotConfiguration, Throughput,
};
use kd_bounds::min_max_dist::{Periodic, Plain};
use kd_bounds::test_utils::{halving_splits, rand_rect, seeded_rng};
use kd_bounds::tracker::{Direction, RectRectDistanceTracker, Which};
use kd_bounds::traits::MinMaxDist;
use std::hint::black_box;

const SPLIT_DEPTH: usize = 16;

pub fn push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("Push + Pop");
    group.throughput(Throughput::Elements(SPLIT_DEPTH as u64));

    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for dims in [2, 3, 4, 8, 16] {
        for (p, label) in [(2.0, "p=2"), (1.0, "p=1"), (3.0, "p=3"), (f64::INFINITY, "p=inf")] {
            bench_push_pop(&mut group, Plain, dims, p, &format!("plain {label}"));

            let periodic = Periodic::new(&vec![1.0; dims]).unwrap();
            bench_push_pop(&mut group, periodic, dims, p, &format!("periodic {label}"));
        }
    }

    group.finish();
}

fn bench_push_pop<D: MinMaxDist<f64> + Clone>(
    group: &mut BenchmarkGroup<'_, WallTime>,
    strategy: D,
    dims: usize,
    p: f64,
    subtype: &str,
) {
    group.bench_with_input(BenchmarkId::new(subtype, dims), &dims, |b, &dims| {
        b.iter_batched(
            || {
                let mut rng = seeded_rng(dims as u64);
                let rect1 = rand_rect(&mut rng, dims, 1.0);
                let rect2 = rand_rect(&mut rng, dims, 1.0);
                let splits = halving_splits(&rect1, SPLIT_DEPTH);
                let tracker = RectRectDistanceTracker::new_with(
                    strategy.clone(),
                    rect1,
                    rect2,
                    p,
                    0.0,
                    f64::INFINITY,
                )
                .unwrap();
                (tracker, splits)
            },
            |(mut tracker, splits)| {
                for &(dim, split) in &splits {
                    tracker.push(Which::First, Direction::Less, dim, split);
                    black_box(tracker.min_distance());
                }
                for _ in &splits {
                    tracker.pop();
                }
                black_box(tracker.max_distance())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, push_pop);
criterion_main!(benches);
