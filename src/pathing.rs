use log::{debug, trace};

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;
use crate::renderers::RenderSink;

/// One step of the solver's walk.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum PathMove {
    /// Stepped from the first cell into the second.
    Advance(Cartesian2DCoordinate, Cartesian2DCoordinate),
    /// The second cell was a dead end, so the walk retreated to the first.
    Backtrack(Cartesian2DCoordinate, Cartesian2DCoordinate),
}

#[derive(Debug, Clone)]
pub struct Solution {
    solved: bool,
    cells_entered: Vec<Cartesian2DCoordinate>,
    moves: Vec<PathMove>,
    route: Vec<Cartesian2DCoordinate>,
}

impl Solution {
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Every cell in the order the solver first entered it, dead end excursions included.
    #[inline]
    pub fn cells_entered(&self) -> &[Cartesian2DCoordinate] {
        &self.cells_entered
    }

    #[inline]
    pub fn moves(&self) -> &[PathMove] {
        &self.moves
    }

    /// Entrance to exit without the excursions. Empty when there is no way through.
    #[inline]
    pub fn route(&self) -> &[Cartesian2DCoordinate] {
        &self.route
    }
}

// A cell on the walk plus how many of its directions have been tried so far.
#[derive(Debug, Copy, Clone)]
struct Frame {
    coord: Cartesian2DCoordinate,
    next_direction: usize,
}

impl Frame {
    fn new(coord: Cartesian2DCoordinate) -> Frame {
        Frame {
            coord,
            next_direction: 0,
        }
    }
}

/// Find a way from the entrance (top left) to the exit (bottom right) cell.
///
/// Plain depth first backtracking: directions are always tried North, South, West, East, a move
/// needs an open wall and an unvisited cell, and the first route found wins. That need not be
/// the shortest route on a grid with loops, on a perfect maze it is the only one.
///
/// Visited flags are reset before starting, and left set afterwards. Every advance is drawn
/// through the grid's renderer, and so is every retreat out of a dead end (with `undo` set).
pub fn solve<R: RenderSink>(grid: &mut Grid<R>) -> Solution {
    grid.reset_visited();

    let (entrance, exit) = (grid.entrance(), grid.exit());
    let mut cells_entered = vec![entrance];
    let mut moves = vec![];
    let _ = grid.set_visited(entrance, true);

    let mut stack = vec![Frame::new(entrance)];
    let mut solved = entrance == exit;

    while !solved {

        let current = match stack.last_mut() {
            Some(frame) => frame,
            None => break,
        };

        if current.next_direction == CompassPrimary::ALL.len() {
            let dead_end = current.coord;
            let _ = stack.pop();
            if let Some(parent) = stack.last() {
                trace!("dead end at {:?}, back to {:?}", dead_end, parent.coord);
                moves.push(PathMove::Backtrack(parent.coord, dead_end));
                grid.draw_move(parent.coord, dead_end, true);
            }
            continue;
        }

        let direction = CompassPrimary::ALL[current.next_direction];
        current.next_direction += 1;
        let from = current.coord;

        let next = match grid.neighbour_at_direction(from, direction) {
            Some(coord) if grid.is_open(from, direction) && !grid.is_visited(coord) => coord,
            _ => continue,
        };

        moves.push(PathMove::Advance(from, next));
        grid.draw_move(from, next, false);
        let _ = grid.set_visited(next, true);
        cells_entered.push(next);
        stack.push(Frame::new(next));

        solved = next == exit;
    }

    let route = if solved {
        stack.iter().map(|frame| frame.coord).collect()
    } else {
        vec![]
    };

    debug!("solve {}: entered {} cells, route length {}",
           if solved { "succeeded" } else { "failed" },
           cells_entered.len(),
           route.len());

    Solution {
        solved,
        cells_entered,
        moves,
        route,
    }
}
