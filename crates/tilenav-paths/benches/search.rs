use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tilenav_core::{Cell, ObstacleGrid, Point};
use tilenav_paths::Algorithm;

/// A serpentine level: every fourth column is a wall with a single gap,
/// alternating between the bottom and the top row.
fn serpentine(size: i32) -> ObstacleGrid {
    ObstacleGrid::from_fn(size, size, |p| {
        if p.x % 4 != 2 {
            return Cell::FLOOR;
        }
        let gap = if (p.x / 4) % 2 == 0 { size - 1 } else { 0 };
        if p.y == gap { Cell::FLOOR } else { Cell::WALL }
    })
}

fn search_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(50);

    for size in [30, 60, 120] {
        let grid = serpentine(size);
        let start = Point::new(0, 0);
        let goal = Point::new(size - 1, size - 1);

        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), size), &grid, |b, grid| {
                b.iter(|| algo.search(black_box(grid), black_box(start), black_box(goal)))
            });
        }
    }

    group.finish();
}

fn open_field(c: &mut Criterion) {
    let grid = ObstacleGrid::open(200, 200);
    let start = Point::new(0, 0);
    let goal = Point::new(199, 199);

    let mut group = c.benchmark_group("open field");
    for algo in Algorithm::ALL {
        group.bench_function(algo.name(), |b| {
            b.iter(|| algo.find_path(black_box(&grid), start, goal))
        });
    }
    group.finish();
}

criterion_group!(benches, search_benches, open_field);
criterion_main!(benches);
