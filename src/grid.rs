use std::fmt;

use error_chain::bail;
use log::trace;
use petgraph::{Graph, Undirected};
use petgraph::graph::NodeIndex;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary, SquareCell, Walls};
use crate::errors::*;
use crate::grid_geometry::GridGeometry;
use crate::grid_iterators::{self, CellIter, NeighbourIter, RowIter};
use crate::renderers::{NullRenderer, RenderSink};
use crate::units::{ColumnsCount, NodesCount, RowsCount};

/// Rectangular grid of cells with per-edge walls.
///
/// Walls between two cells are stored on both cells. `remove_wall_between` is the only way to
/// open an internal wall, and it always clears both sides, so neighbouring cells agree on
/// whether the edge between them is open.
pub struct Grid<R: RenderSink = NullRenderer> {
    cells: Vec<SquareCell>,
    columns: ColumnsCount,
    rows: RowsCount,
    geometry: GridGeometry,
    renderer: R,
}

impl<R: RenderSink> fmt::Debug for Grid<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: columns: {:?}, rows: {:?}, passages: {:?}, geometry: {:?}",
               self.columns,
               self.rows,
               self.passages_count(),
               self.geometry)
    }
}

impl Grid<NullRenderer> {
    /// A grid nobody draws, with default cell geometry.
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> Result<Grid<NullRenderer>> {
        Grid::with_renderer(columns, rows, GridGeometry::default(), NullRenderer)
    }
}

impl<R: RenderSink> Grid<R> {
    /// Allocates `columns x rows` cells with every wall standing and nothing visited, then draws
    /// each cell once through the renderer.
    pub fn with_renderer(columns: ColumnsCount,
                         rows: RowsCount,
                         geometry: GridGeometry,
                         renderer: R)
                         -> Result<Grid<R>> {

        let NodesCount(cells_count) = validate_dimensions(columns, rows)?;

        let mut grid = Grid {
            cells: vec![SquareCell::new(); cells_count],
            columns,
            rows,
            geometry,
            renderer,
        };
        for coord in grid.iter() {
            grid.draw_cell(coord);
        }

        Ok(grid)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Top left cell, whose top wall is the maze entrance.
    #[inline]
    pub fn entrance(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(0, 0)
    }

    /// Bottom right cell, whose bottom wall is the maze exit.
    #[inline]
    pub fn exit(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new((self.columns.0 - 1) as u32, (self.rows.0 - 1) as u32)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        grid_iterators::is_within(coord, self.columns, self.rows)
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.columns.0 + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<&SquareCell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    #[inline]
    pub fn walls(&self, coord: Cartesian2DCoordinate) -> Option<Walls> {
        self.cell(coord).map(SquareCell::walls)
    }

    /// Cells to the North, South, West or East of `coord` that lie on the grid, whether or not a
    /// wall separates them.
    #[inline]
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> NeighbourIter {
        NeighbourIter::new(coord, self.columns, self.rows)
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    pub fn is_neighbour(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        self.is_valid_coordinate(a) && self.neighbours(a).any(|coord| coord == b)
    }

    /// Is there an open passage from `coord` to the grid cell in `direction`?
    /// The entrance and exit openings lead off the grid and so never count.
    pub fn is_open(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        match (self.neighbour_at_direction(coord, direction), self.cell(coord)) {
            (Some(_), Some(cell)) => !cell.has_wall(direction),
            _ => false,
        }
    }

    /// Knock down the wall shared by two adjacent cells, from both sides.
    pub fn remove_wall_between(&mut self,
                               a: Cartesian2DCoordinate,
                               b: Cartesian2DCoordinate)
                               -> Result<()> {

        let direction = match a.direction_to(b) {
            Some(dir) if self.is_valid_coordinate(a) && self.is_valid_coordinate(b) => dir,
            _ => bail!(ErrorKind::NotAdjacent(a, b)),
        };

        self.cell_mut(a).knock_down(direction);
        self.cell_mut(b).knock_down(direction.opposite());
        trace!("removed wall {:?} of {:?}", direction, a);

        self.draw_cell(a);
        self.draw_cell(b);
        Ok(())
    }

    /// Open the top wall of the entrance cell and the bottom wall of the exit cell. No other
    /// boundary wall is ever removed.
    pub fn open_entrance_and_exit(&mut self) {
        let entrance = self.entrance();
        self.cell_mut(entrance).knock_down(CompassPrimary::North);
        self.draw_cell(entrance);

        let exit = self.exit();
        self.cell_mut(exit).knock_down(CompassPrimary::South);
        self.draw_cell(exit);
    }

    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.set_visited(false);
        }
    }

    /// Out of bounds coordinates are never visited.
    #[inline]
    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord).map_or(false, SquareCell::is_visited)
    }

    /// Returns false if the coordinate is not on the grid.
    pub fn set_visited(&mut self, coord: Cartesian2DCoordinate, visited: bool) -> bool {
        if let Some(index) = self.grid_coordinate_to_index(coord) {
            self.cells[index].set_visited(visited);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.columns, self.rows)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.columns, self.rows)
    }

    /// Every open internal wall as a pair of coordinates, each pair reported once with the
    /// first cell above or to the left of the second.
    pub fn iter_passages<'a>(&'a self)
                             -> impl Iterator<Item = (Cartesian2DCoordinate, Cartesian2DCoordinate)> + 'a {
        self.iter().flat_map(move |coord| {
            [CompassPrimary::South, CompassPrimary::East]
                .iter()
                .filter(move |&&dir| self.is_open(coord, dir))
                .filter_map(move |&dir| self.neighbour_at_direction(coord, dir))
                .map(move |neighbour| (coord, neighbour))
                .collect::<Vec<_>>()
        })
    }

    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    /// Undirected graph view: one node per cell (node index == row major cell index), one edge
    /// per open internal wall.
    pub fn passage_graph(&self) -> Graph<Cartesian2DCoordinate, (), Undirected> {
        let mut graph = Graph::with_capacity(self.size(), self.passages_count());
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_passages() {
            if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_to_index(a),
                                                     self.grid_coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }

    /// Redraw one cell's walls through the renderer. Invalid coordinates are ignored.
    pub(crate) fn draw_cell(&mut self, coord: Cartesian2DCoordinate) {
        if let Some(walls) = self.walls(coord) {
            let rect = self.geometry.cell_rect(coord);
            self.renderer.draw_cell(rect, walls);
        }
    }

    pub(crate) fn draw_move(&mut self,
                            from: Cartesian2DCoordinate,
                            to: Cartesian2DCoordinate,
                            undo: bool) {
        let (from_centre, to_centre) = (self.geometry.cell_centre(from),
                                        self.geometry.cell_centre(to));
        self.renderer.draw_move(from_centre, to_centre, undo);
    }

    // Callers have already checked the coordinate.
    #[inline]
    fn cell_mut(&mut self, coord: Cartesian2DCoordinate) -> &mut SquareCell {
        let index = coord.y as usize * self.columns.0 + coord.x as usize;
        &mut self.cells[index]
    }
}

/// Checked before any allocation happens.
pub fn validate_dimensions(columns: ColumnsCount, rows: RowsCount) -> Result<NodesCount> {
    let (ColumnsCount(cols), RowsCount(row_count)) = (columns, rows);
    let max_side = u32::MAX as usize;
    if cols == 0 || row_count == 0 || cols > max_side || row_count > max_side {
        bail!(ErrorKind::InvalidDimensions(cols, row_count));
    }
    cols.checked_mul(row_count)
        .map(NodesCount)
        .ok_or_else(|| ErrorKind::InvalidDimensions(cols, row_count).into())
}
