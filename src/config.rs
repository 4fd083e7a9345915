use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::cell::Coord;
use crate::error::MazeError;
use crate::grid::Grid;

pub const DEFAULT_ROWS: usize = 25;
pub const DEFAULT_COLS: usize = 25;

/// Paramètres d'une génération suivie d'une résolution.
///
/// Par défaut : 25 x 25, départ en (0, 0), arrivée dans le coin opposé.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub start: Coord,
    pub goal: Coord,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: None,
            start: Coord::new(0, 0),
            goal: Coord::new(DEFAULT_ROWS - 1, DEFAULT_COLS - 1),
        }
    }
}

impl MazeConfig {
    /// Valide les dimensions, puis place départ et arrivée (coins par défaut).
    pub fn new(
        rows: usize,
        cols: usize,
        seed: Option<u64>,
        start: Option<Coord>,
        goal: Option<Coord>,
    ) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let (start, goal) = resolve_endpoints(rows, cols, start, goal)?;
        Ok(Self {
            rows,
            cols,
            seed,
            start,
            goal,
        })
    }
}

/// Départ et arrivée effectifs pour une grille `rows` x `cols`.
fn resolve_endpoints(
    rows: usize,
    cols: usize,
    start: Option<Coord>,
    goal: Option<Coord>,
) -> Result<(Coord, Coord), MazeError> {
    let start = start.unwrap_or(Coord::new(0, 0));
    let goal = goal.unwrap_or(Coord::new(rows.saturating_sub(1), cols.saturating_sub(1)));
    for coord in [start, goal] {
        if coord.r >= rows || coord.c >= cols {
            return Err(MazeError::OutOfBounds { coord, rows, cols });
        }
    }
    Ok((start, goal))
}

#[derive(Debug, Parser)]
#[command(name = "rusty-maze", version, about = "Generate perfect mazes and solve them with A*")]
pub struct CLIArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a maze and print it
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,
    },
    /// Generate a maze and print its shortest path
    Solve {
        #[command(flatten)]
        maze: MazeArgs,
        #[command(flatten)]
        route: RouteArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,
    },
    /// Solve a maze given by its code
    SolveCode {
        code: String,
        #[command(flatten)]
        route: RouteArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,
    },
    /// Solve an obstacle map file (0 = free, 1 = blocked)
    SolveMap {
        input_path: PathBuf,
        #[command(flatten)]
        route: RouteArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Args)]
pub struct MazeArgs {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct RouteArgs {
    /// Start cell as "row,col" (default 0,0)
    #[arg(long)]
    pub start: Option<Coord>,
    /// Goal cell as "row,col" (default: bottom-right corner)
    #[arg(long)]
    pub goal: Option<Coord>,
}

impl RouteArgs {
    /// Départ et arrivée pour une grille déjà construite.
    pub fn resolve(&self, grid: &Grid) -> Result<(Coord, Coord), MazeError> {
        resolve_endpoints(grid.rows(), grid.cols(), self.start, self.goal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Ascii,
    Json,
    Code,
}

impl MazeArgs {
    pub fn into_config(self, route: &RouteArgs) -> Result<MazeConfig, MazeError> {
        MazeConfig::new(self.rows, self.cols, self.seed, route.start, route.goal)
    }
}
