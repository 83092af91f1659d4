use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lifegrid::{next_generation, Bounds, Cell, LifeGrid};
use std::collections::HashSet;
use std::hint::black_box;

/// Measures one generation step as the seeded population grows.
fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");

    for &count in &[100usize, 400, 1600] {
        let bounds = Bounds::new(200, 200);
        let mut grid = LifeGrid::new(bounds);
        grid.randomize(count, Some(42));
        let alive: HashSet<Cell> = grid.cells().collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| next_generation(black_box(&alive), bounds));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_next_generation);
criterion_main!(benches);
