use crate::cells::Cartesian2DCoordinate;
use crate::units::{Height, Width};

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Pixel rectangle of one cell, `(x1, y1)` top left and `(x2, y2)` bottom right.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CellRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CellRect {
    pub fn centre(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Where the grid sits on a drawing surface. Only renderers care, the maze algorithms never look
/// at pixels.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct GridGeometry {
    origin: Point,
    cell_width: Width,
    cell_height: Height,
}

impl GridGeometry {
    pub fn new(origin: Point, cell_width: Width, cell_height: Height) -> GridGeometry {
        GridGeometry {
            origin,
            cell_width,
            cell_height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn cell_width(&self) -> Width {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> Height {
        self.cell_height
    }

    /// Column maps to x, row maps to y.
    pub fn cell_rect(&self, coord: Cartesian2DCoordinate) -> CellRect {
        let (Width(w), Height(h)) = (self.cell_width, self.cell_height);
        let x1 = self.origin.x + w * f64::from(coord.x);
        let y1 = self.origin.y + h * f64::from(coord.y);
        CellRect {
            x1,
            y1,
            x2: x1 + w,
            y2: y1 + h,
        }
    }

    #[inline]
    pub fn cell_centre(&self, coord: Cartesian2DCoordinate) -> Point {
        self.cell_rect(coord).centre()
    }
}

impl Default for GridGeometry {
    fn default() -> GridGeometry {
        GridGeometry::new(Point::new(0.0, 0.0), Width(10.0), Height(10.0))
    }
}
