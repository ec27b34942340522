use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::grid::Grid;
use crate::renderers::RenderSink;

/// Seeded generators give bit for bit identical mazes for the same grid dimensions.
pub fn maze_rng(seed: Option<u64>) -> XorShiftRng {
    match seed {
        Some(s) => XorShiftRng::seed_from_u64(s),
        None => XorShiftRng::seed_from_u64(rand::random()),
    }
}

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// First the entrance and exit are opened. Then starting at the top left cell we do a random
/// walk, only ever stepping into unvisited cells and knocking down the wall we pass through.
/// When a cell has no unvisited neighbours left we backtrack to the most recent cell that has
/// some and carry on from there. Every cell is entered exactly once, so the passages form a
/// spanning tree of the grid: a perfect maze with `size - 1` passages.
///
/// The walk keeps its own stack of cells instead of recursing, as the depth can reach the
/// number of cells in the grid. The visited flags are cleared again before returning.
pub fn recursive_backtracker<R: RenderSink>(grid: &mut Grid<R>, seed: Option<u64>) {
    let mut rng = maze_rng(seed);
    recursive_backtracker_with_rng(grid, &mut rng);
}

pub fn recursive_backtracker_with_rng<R, RngT>(grid: &mut Grid<R>, rng: &mut RngT)
    where R: RenderSink,
          RngT: Rng
{
    grid.open_entrance_and_exit();

    let start = grid.entrance();
    let _ = grid.set_visited(start, true);
    let mut stack: Vec<Cartesian2DCoordinate> = Vec::with_capacity(grid.size());
    stack.push(start);
    let mut max_depth = stack.len();

    while let Some(&current) = stack.last() {

        let unvisited_neighbours = grid.neighbours(current)
                                       .filter(|coord| !grid.is_visited(*coord))
                                       .collect::<SmallVec<[Cartesian2DCoordinate; 4]>>();

        if unvisited_neighbours.is_empty() {
            // This branch of the spanning tree is complete.
            let _ = stack.pop();
            continue;
        }

        let next = unvisited_neighbours[rng.gen::<usize>() % unvisited_neighbours.len()];
        trace!("carving {:?} -> {:?}", current, next);

        grid.remove_wall_between(current, next)
            .expect("the backtracker only carves between grid neighbours");
        let _ = grid.set_visited(next, true);
        stack.push(next);
        max_depth = max_depth.max(stack.len());
    }

    grid.reset_visited();
    debug!("recursive backtracker carved {} cells, max stack depth {}",
           grid.size(),
           max_depth);
}

#[cfg(test)]
mod tests {

    use petgraph::algo;
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::cells::{CompassPrimary, Walls};
    use crate::units::{ColumnsCount, RowsCount};

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn generated_grid(w: usize, h: usize, seed: Option<u64>) -> Grid {
        let mut g = Grid::new(ColumnsCount(w), RowsCount(h)).expect("valid grid dimensions");
        recursive_backtracker(&mut g, seed);
        g
    }

    fn wall_layout(g: &Grid) -> Vec<Walls> {
        g.iter().map(|coord| g.walls(coord).unwrap()).collect()
    }

    fn walls_are_symmetric(g: &Grid) -> bool {
        g.iter().all(|coord| {
            let walls = g.walls(coord).unwrap();
            let east_ok = g.neighbour_at_direction(coord, CompassPrimary::East)
                           .map_or(true, |east| walls.right == g.walls(east).unwrap().left);
            let south_ok = g.neighbour_at_direction(coord, CompassPrimary::South)
                            .map_or(true, |south| walls.bottom == g.walls(south).unwrap().top);
            east_ok && south_ok
        })
    }

    fn only_entrance_and_exit_on_boundary(g: &Grid) -> bool {
        let (entrance, exit) = (g.entrance(), g.exit());
        g.iter().all(|coord| {
            let walls = g.walls(coord).unwrap();
            CompassPrimary::ALL.iter().all(|&dir| {
                let on_boundary = g.neighbour_at_direction(coord, dir).is_none();
                let expect_open = (coord == entrance && dir == CompassPrimary::North) ||
                                  (coord == exit && dir == CompassPrimary::South);
                !on_boundary || walls.has_wall(dir) != expect_open
            })
        })
    }

    fn is_spanning_tree(g: &Grid) -> bool {
        let graph = g.passage_graph();
        graph.edge_count() == g.size() - 1 && algo::connected_components(&graph) == 1 &&
        !algo::is_cyclic_undirected(&graph)
    }

    #[test]
    fn walls_consistent_between_neighbours() {
        let g = generated_grid(5, 5, Some(42));
        assert!(walls_are_symmetric(&g));
    }

    #[test]
    fn entrance_and_exit_opened() {
        let g = generated_grid(5, 5, Some(42));
        assert!(!g.walls(gc(0, 0)).unwrap().top);
        assert!(!g.walls(gc(4, 4)).unwrap().bottom);
        assert!(only_entrance_and_exit_on_boundary(&g));
    }

    #[test]
    fn carves_a_perfect_maze() {
        let g = generated_grid(12, 10, None);
        assert_eq!(g.passages_count(), 12 * 10 - 1);
        assert!(is_spanning_tree(&g));
    }

    #[test]
    fn large_grids_do_not_overflow_the_stack() {
        let g = generated_grid(400, 400, Some(7));
        assert_eq!(g.passages_count(), 400 * 400 - 1);
    }

    #[test]
    fn visited_flags_reset_after_generation() {
        let mut g = generated_grid(5, 5, None);
        assert!(g.iter().all(|coord| !g.is_visited(coord)));
        g.reset_visited();
        assert!(g.iter().all(|coord| !g.is_visited(coord)));
    }

    #[test]
    fn single_cell_maze() {
        let g = generated_grid(1, 1, Some(3));
        let walls = g.walls(gc(0, 0)).unwrap();
        assert!(!walls.top && !walls.bottom && walls.left && walls.right);
        assert_eq!(g.passages_count(), 0);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generated_grid(5, 5, Some(42));
        let b = generated_grid(5, 5, Some(42));
        assert_eq!(wall_layout(&a), wall_layout(&b));
    }

    #[test]
    fn different_seeds_different_mazes() {
        let a = generated_grid(3, 3, Some(42));
        let b = generated_grid(3, 3, Some(99));
        assert_ne!(wall_layout(&a), wall_layout(&b));
    }

    #[test]
    fn seed_1_two_by_two_fixture() {
        let g = generated_grid(2, 2, Some(1));
        let walls = |top, bottom, left, right| {
            Walls {
                top,
                bottom,
                left,
                right,
            }
        };
        // (0,0) -> (1,0) -> (1,1) -> (0,1), the (0,0)/(0,1) wall stays up.
        let expected = vec![walls(false, true, true, false),
                            walls(true, false, false, true),
                            walls(true, true, true, false),
                            walls(false, false, false, true)];
        assert_eq!(wall_layout(&g), expected);
        assert_eq!(wall_layout(&generated_grid(2, 2, Some(1))), expected);
    }

    #[test]
    fn quickcheck_generated_mazes_are_perfect() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (w as usize % 16, h as usize % 16);
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let g = generated_grid(w, h, Some(seed));
            TestResult::from_bool(walls_are_symmetric(&g) &&
                                  only_entrance_and_exit_on_boundary(&g) &&
                                  is_spanning_tree(&g) &&
                                  g.iter().all(|coord| !g.is_visited(coord)))
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }
}
