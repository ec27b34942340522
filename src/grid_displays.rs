use std::fmt;

use smallvec::SmallVec;

use crate::cells::Cartesian2DCoordinate;
use crate::grid::Grid;
use crate::renderers::RenderSink;
use crate::utils::{self, FnvHashSet};

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> String {
        String::from("   ")
    }
}

/// Marks the solver's route with `.` and any cells it entered then abandoned with `x`.
#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
    explored_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}

impl PathDisplay {
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        PathDisplay::with_explored(path, &[])
    }

    pub fn with_explored(path: &[Cartesian2DCoordinate], explored: &[Cartesian2DCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        let mut explored_coordinates = utils::fnv_hashset(explored.len());
        explored_coordinates.extend(explored.iter().cloned());
        PathDisplay {
            on_path_coordinates,
            explored_coordinates,
        }
    }
}

impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else if self.explored_coordinates.contains(&coord) {
            String::from(" x ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: SmallVec<[Cartesian2DCoordinate; 4]>,
    end_coordinates: SmallVec<[Cartesian2DCoordinate; 4]>,
}

impl StartEndPointsDisplay {
    pub fn new(starts: &[Cartesian2DCoordinate],
               ends: &[Cartesian2DCoordinate])
               -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts.iter().cloned().collect(),
            end_coordinates: ends.iter().cloned().collect(),
        }
    }
}

impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {

        let contains_coordinate =
            |coordinates: &[Cartesian2DCoordinate]| coordinates.iter().any(|&c| c == coord);

        if contains_coordinate(&self.start_coordinates[..]) {
            String::from(" S ")
        } else if contains_coordinate(&self.end_coordinates[..]) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// A grid plus an optional cell body overlay, ready for text output.
pub struct GridView<'a, R: RenderSink> {
    grid: &'a Grid<R>,
    grid_display: Option<&'a dyn GridDisplay>,
}

impl<'a, R: RenderSink> GridView<'a, R> {
    pub fn new(grid: &'a Grid<R>, grid_display: Option<&'a dyn GridDisplay>) -> GridView<'a, R> {
        GridView { grid, grid_display }
    }

    // Is there a wall along the top edge of the lattice square whose top left corner is (x, y)?
    // Points are lattice corners, so x runs 0..=columns and y 0..=rows.
    fn horizontal_wall(&self, x: usize, y: usize) -> bool {
        let below = Cartesian2DCoordinate::new(x as u32, y as u32);
        match self.grid.walls(below) {
            Some(walls) => walls.top,
            None => {
                y > 0 &&
                self.grid
                    .walls(Cartesian2DCoordinate::new(x as u32, y as u32 - 1))
                    .map_or(false, |walls| walls.bottom)
            }
        }
    }

    fn vertical_wall(&self, x: usize, y: usize) -> bool {
        let right = Cartesian2DCoordinate::new(x as u32, y as u32);
        match self.grid.walls(right) {
            Some(walls) => walls.left,
            None => {
                x > 0 &&
                self.grid
                    .walls(Cartesian2DCoordinate::new(x as u32 - 1, y as u32))
                    .map_or(false, |walls| walls.right)
            }
        }
    }

    fn junction(&self, x: usize, y: usize) -> &'static str {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let left = x > 0 && self.horizontal_wall(x - 1, y);
        let right = self.horizontal_wall(x, y);
        let up = y > 0 && self.vertical_wall(x, y - 1);
        let down = self.vertical_wall(x, y);

        match (left, right, up, down) {
            (true, true, true, true) => WALL_LRUD,
            (true, true, true, false) => WALL_LRU,
            (true, true, false, true) => WALL_LRD,
            (true, false, true, true) => WALL_LUD,
            (false, true, true, true) => WALL_RUD,
            (true, true, false, false) => WALL_LR,
            (false, false, true, true) => WALL_UD,
            (false, true, true, false) => WALL_RU,
            (true, false, false, true) => WALL_LD,
            (true, false, true, false) => WALL_LU,
            (false, true, false, true) => WALL_RD,
            (true, false, false, false) => WALL_L,
            (false, true, false, false) => WALL_R,
            (false, false, true, false) => WALL_U,
            (false, false, false, true) => WALL_D,
            (false, false, false, false) => " ",
        }
    }
}

impl<'a, R: RenderSink> fmt::Display for GridView<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_LR_3: &str = "───";
        const WALL_UD: &str = "│";
        let default_cell_body = String::from("   ");

        let columns_count = self.grid.columns().0;
        let rows_count = self.grid.rows().0;

        for y in 0..=rows_count {
            // Junctions and the horizontal walls between them
            let mut boundary = String::new();
            for x in 0..=columns_count {
                boundary.push_str(self.junction(x, y));
                if x < columns_count {
                    boundary.push_str(if self.horizontal_wall(x, y) { WALL_LR_3 } else { "   " });
                }
            }
            writeln!(f, "{}", boundary.trim_end())?;

            if y == rows_count {
                break;
            }

            // Vertical walls and cell bodies
            let mut middle = String::new();
            for x in 0..=columns_count {
                middle.push_str(if self.vertical_wall(x, y) { WALL_UD } else { " " });
                if x < columns_count {
                    let coord = Cartesian2DCoordinate::new(x as u32, y as u32);
                    match self.grid_display {
                        Some(displayer) => middle.push_str(&displayer.render_cell_body(coord)),
                        None => middle.push_str(&default_cell_body),
                    }
                }
            }
            writeln!(f, "{}", middle.trim_end())?;
        }
        Ok(())
    }
}

impl<R: RenderSink> fmt::Display for Grid<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&GridView::new(self, None), f)
    }
}
