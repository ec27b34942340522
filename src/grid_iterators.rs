use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::units::{ColumnsCount, RowsCount};

#[inline]
fn from_row_major_index(index: usize, columns: ColumnsCount) -> Cartesian2DCoordinate {
    let ColumnsCount(width) = columns;
    Cartesian2DCoordinate::new((index % width) as u32, (index / width) as u32)
}

#[inline]
pub(crate) fn is_within(coord: Cartesian2DCoordinate, columns: ColumnsCount, rows: RowsCount) -> bool {
    (coord.x as usize) < columns.0 && (coord.y as usize) < rows.0
}

/// Every cell coordinate of a grid in row major order.
#[derive(Copy, Clone)]
pub struct CellIter {
    columns: ColumnsCount,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(columns: ColumnsCount, rows: RowsCount) -> CellIter {
        CellIter {
            columns,
            current_cell_number: 0,
            cells_count: columns.0 * rows.0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = from_row_major_index(self.current_cell_number, self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// One `Vec` of coordinates per grid row, top row first.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    columns: ColumnsCount,
    rows: RowsCount,
    current_row: usize,
}

impl RowIter {
    pub(crate) fn new(columns: ColumnsCount, rows: RowsCount) -> RowIter {
        RowIter {
            columns,
            rows,
            current_row: 0,
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<Cartesian2DCoordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows;
        if self.current_row < count {
            let y = self.current_row as u32;
            let coords = (0..self.columns.0)
                .map(|x| Cartesian2DCoordinate::new(x as u32, y))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.0 - self.current_row;
        (remaining, Some(remaining))
    }
}

/// The in-bounds cells sharing an edge with `origin`, visited in `CompassPrimary::ALL` order.
/// A pure function of the origin and grid bounds, so a clone taken before iterating replays it.
#[derive(Debug, Copy, Clone)]
pub struct NeighbourIter {
    origin: Cartesian2DCoordinate,
    columns: ColumnsCount,
    rows: RowsCount,
    next_direction: usize,
}

impl NeighbourIter {
    pub(crate) fn new(origin: Cartesian2DCoordinate,
                      columns: ColumnsCount,
                      rows: RowsCount)
                      -> NeighbourIter {
        NeighbourIter {
            origin,
            columns,
            rows,
            next_direction: 0,
        }
    }
}

impl Iterator for NeighbourIter {
    type Item = Cartesian2DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_direction < CompassPrimary::ALL.len() {
            let dir = CompassPrimary::ALL[self.next_direction];
            self.next_direction += 1;

            let adjacent = self.origin
                .offset(dir)
                .filter(|&coord| is_within(coord, self.columns, self.rows));
            if adjacent.is_some() {
                return adjacent;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CompassPrimary::ALL.len() - self.next_direction))
    }
}
