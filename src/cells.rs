use std::convert::From;

/// Position of a cell on the grid. `x` is the column index, `y` the row index, with `(0, 0)`
/// at the top left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, it may still lie outside a grid.
    pub fn offset(self, dir: CompassPrimary) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::South => y.checked_add(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::West => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            CompassPrimary::East => x.checked_add(1).map(|x| Cartesian2DCoordinate::new(x, y)),
        }
    }

    /// The direction to travel from `self` to reach the adjacent `other`.
    pub fn direction_to(self, other: Cartesian2DCoordinate) -> Option<CompassPrimary> {
        CompassPrimary::ALL
            .iter()
            .cloned()
            .find(|&dir| self.offset(dir) == Some(other))
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    West,
    East,
}

impl CompassPrimary {
    /// Up, down, left, right. Neighbour queries, carving candidates and the solver all use this order.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::West,
                                          CompassPrimary::East];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
            CompassPrimary::East => CompassPrimary::West,
        }
    }
}

/// The four wall flags of a cell. `true` means the wall is standing.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub fn all() -> Walls {
        Walls {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        match dir {
            CompassPrimary::North => self.top,
            CompassPrimary::South => self.bottom,
            CompassPrimary::West => self.left,
            CompassPrimary::East => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_wall(&mut self, dir: CompassPrimary, standing: bool) {
        match dir {
            CompassPrimary::North => self.top = standing,
            CompassPrimary::South => self.bottom = standing,
            CompassPrimary::West => self.left = standing,
            CompassPrimary::East => self.right = standing,
        }
    }
}

impl Default for Walls {
    fn default() -> Walls {
        Walls::all()
    }
}

/// A single room of the maze. It knows nothing about its neighbours, the `Grid` owns all cells
/// and answers neighbour questions by coordinate.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct SquareCell {
    walls: Walls,
    visited: bool,
}

impl SquareCell {
    pub fn new() -> SquareCell {
        SquareCell::default()
    }

    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        self.walls.has_wall(dir)
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    #[inline]
    pub(crate) fn knock_down(&mut self, dir: CompassPrimary) {
        self.walls.set_wall(dir, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_default_walls() {
        let cell = SquareCell::new();
        assert_eq!(cell.walls(), Walls::all());
        assert!(!cell.is_visited());
    }

    #[test]
    fn walls_are_individually_removable() {
        let mut cell = SquareCell::new();
        cell.knock_down(CompassPrimary::West);
        cell.knock_down(CompassPrimary::North);

        assert!(!cell.has_wall(CompassPrimary::West));
        assert!(!cell.has_wall(CompassPrimary::North));
        assert!(cell.has_wall(CompassPrimary::East));
        assert!(cell.has_wall(CompassPrimary::South));
    }

    #[test]
    fn offsets() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(gc(0, 0).offset(CompassPrimary::North), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::West), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::South), Some(gc(0, 1)));
        assert_eq!(gc(0, 0).offset(CompassPrimary::East), Some(gc(1, 0)));
        assert_eq!(gc(u32::MAX, 3).offset(CompassPrimary::East), None);
    }

    #[test]
    fn direction_between_coordinates() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(gc(1, 1).direction_to(gc(1, 0)), Some(CompassPrimary::North));
        assert_eq!(gc(1, 1).direction_to(gc(0, 1)), Some(CompassPrimary::West));
        assert_eq!(gc(1, 1).direction_to(gc(2, 2)), None);
        assert_eq!(gc(1, 1).direction_to(gc(1, 1)), None);
        for dir in CompassPrimary::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }
}
