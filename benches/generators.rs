use criterion::{criterion_group, criterion_main, Criterion};
use maze_solver::{
    generators,
    grid::Grid,
    units::{ColumnsCount, RowsCount},
};

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_maze_32", |b| {
        b.iter(|| {
            let mut g = Grid::new(ColumnsCount(32), RowsCount(32)).unwrap();
            generators::recursive_backtracker(&mut g, Some(32));
            g
        })
    });
}

fn bench_recursive_backtracker_maze_350(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_maze_350", |b| {
        b.iter(|| {
            let mut g = Grid::new(ColumnsCount(350), RowsCount(350)).unwrap();
            generators::recursive_backtracker(&mut g, Some(350));
            g
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_350
);
criterion_main!(benches);
