// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::error_chain;

use crate::cells::Cartesian2DCoordinate;

error_chain! {
    errors {
        // At least one row and one column, and every cell addressable by a `u32` coordinate.
        InvalidDimensions(columns: usize, rows: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions: {} columns x {} rows", columns, rows)
        }

        // Walls only exist between two cells that share an edge.
        NotAdjacent(a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) {
            description("cells are not adjacent")
            display("cells ({}, {}) and ({}, {}) are not adjacent", a.x, a.y, b.x, b.y)
        }
    }
}
