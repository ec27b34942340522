use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_solver::generators;
use maze_solver::grid::Grid;
use maze_solver::pathing;
use maze_solver::units::{ColumnsCount, RowsCount};

fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_350", |b| {
        let mut g = Grid::new(ColumnsCount(350), RowsCount(350)).unwrap();
        generators::recursive_backtracker(&mut g, Some(350));
        b.iter(|| pathing::solve(&mut g))
    });
}

fn bench_passage_graph(c: &mut Criterion) {
    c.bench_function("passage_graph_350", |b| {
        let mut g = Grid::new(ColumnsCount(350), RowsCount(350)).unwrap();
        generators::recursive_backtracker(&mut g, Some(350));
        b.iter(|| g.passage_graph())
    });
}

criterion_group!(benches,
    bench_solve,
    bench_passage_graph
);
criterion_main!(benches);
