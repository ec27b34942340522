//! **maze_solver** carves perfect mazes on a rectangular grid with a recursive backtracker and
//! walks them from the top left entrance to the bottom right exit.
//!
//! Drawing is optional: anything implementing `renderers::RenderSink` can watch cells being
//! carved and the solver's moves, the default `NullRenderer` ignores them.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_geometry;
pub mod grid_iterators;
pub mod maze;
pub mod pathing;
pub mod renderers;
pub mod units;
mod utils;
