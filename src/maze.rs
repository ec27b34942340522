use log::info;

use crate::errors::*;
use crate::generators;
use crate::grid::{self, Grid};
use crate::grid_geometry::{GridGeometry, Point};
use crate::pathing::{self, Solution};
use crate::renderers::{NullRenderer, RenderSink};
use crate::units::{ColumnsCount, Height, RowsCount, Width};

/// Everything needed to build one maze. Sizes are in pixels and only matter to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub x: f64,
    pub y: f64,
    pub num_rows: usize,
    pub num_cols: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            x: 0.0,
            y: 0.0,
            num_rows: 10,
            num_cols: 10,
            cell_width: 10.0,
            cell_height: 10.0,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn new(num_cols: usize, num_rows: usize) -> MazeConfig {
        MazeConfig {
            num_rows,
            num_cols,
            ..MazeConfig::default()
        }
    }

    pub fn origin(mut self, x: f64, y: f64) -> MazeConfig {
        self.x = x;
        self.y = y;
        self
    }

    pub fn cell_size(mut self, cell_width: f64, cell_height: f64) -> MazeConfig {
        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> MazeConfig {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        grid::validate_dimensions(ColumnsCount(self.num_cols), RowsCount(self.num_rows))
            .map(|_| ())
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(Point::new(self.x, self.y),
                          Width(self.cell_width),
                          Height(self.cell_height))
    }
}

/// A generated maze: the carved grid plus the parameters that built it.
#[derive(Debug)]
pub struct Maze<R: RenderSink = NullRenderer> {
    config: MazeConfig,
    grid: Grid<R>,
}

impl Maze<NullRenderer> {
    pub fn new(config: MazeConfig) -> Result<Maze<NullRenderer>> {
        Maze::with_renderer(config, NullRenderer)
    }
}

impl<R: RenderSink> Maze<R> {
    /// Validates the config, lays out the grid and carves it. Fails before allocating anything
    /// if the dimensions are unusable.
    pub fn with_renderer(config: MazeConfig, renderer: R) -> Result<Maze<R>> {
        config.validate()?;

        let mut grid = Grid::with_renderer(ColumnsCount(config.num_cols),
                                           RowsCount(config.num_rows),
                                           config.geometry(),
                                           renderer)
            .chain_err(|| "failed to lay out the maze grid")?;
        generators::recursive_backtracker(&mut grid, config.seed);
        info!("generated {}x{} maze (seed {:?})",
              config.num_cols,
              config.num_rows,
              config.seed);

        Ok(Maze { config, grid })
    }

    #[inline]
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid<R> {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid<R> {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid<R> {
        self.grid
    }

    /// Can be called repeatedly, each attempt starts from clean visited flags.
    pub fn solve(&mut self) -> Solution {
        pathing::solve(&mut self.grid)
    }
}
