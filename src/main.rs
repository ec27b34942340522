use docopt::Docopt;
use log::{info, warn};
use serde::Deserialize;
use maze_solver::{
    grid_displays::{GridView, PathDisplay, StartEndPointsDisplay},
    maze::{Maze, MazeConfig},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Maze Solver

Usage:
    maze_driver -h | --help
    maze_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--show-path [--show-visited]] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The number of columns in a w*h grid [default: 20].
    --grid-height=<h>      The number of rows in a w*h grid [default: 20].
    --seed=<s>             Seed for the maze generator, the same seed always gives the same maze.
    --show-path            Solve the maze and mark the route from the entrance to the exit.
    --show-visited         Also mark the dead ends the solver explored on the way.
    --text-out=<path>      Output file path for the textual rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_show_visited: bool,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::maze_solver::errors::Error, ::maze_solver::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let config = MazeConfig::new(width, height).seed(args.flag_seed);
    let mut maze = Maze::new(config)?;

    let text = if args.flag_show_path {
        let solution = maze.solve();
        if !solution.is_solved() {
            warn!("no route from the entrance to the exit");
        }
        info!("route of {} cells, {} cells entered",
              solution.route().len(),
              solution.cells_entered().len());

        let explored: &[_] = if args.flag_show_visited { solution.cells_entered() } else { &[] };
        let display = PathDisplay::with_explored(solution.route(), explored);
        GridView::new(maze.grid(), Some(&display)).to_string()
    } else {
        let grid = maze.grid();
        let display = StartEndPointsDisplay::new(&[grid.entrance()], &[grid.exit()]);
        GridView::new(grid, Some(&display)).to_string()
    };

    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
