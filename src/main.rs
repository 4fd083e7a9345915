use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rusty_maze::ascii_utils::render_ascii;
use rusty_maze::config::{CLIArgs, Command, OutputFormat, RouteArgs};
use rusty_maze::json_utils::{maze_to_json, path_to_json};
use rusty_maze::obstacles::parse_obstacle_map;
use rusty_maze::{decode_maze, encode_maze, find_path, Coord, Grid, MazeGenerator, Path};

fn main() -> Result<()> {
    if std::env::var("MAZE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZE_LOG")
            .write_style("MAZE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let args = CLIArgs::parse();
    match args.command {
        Command::Generate { maze, format } => {
            let config = maze.into_config(&RouteArgs { start: None, goal: None })?;
            let mut generator = MazeGenerator::new(config.seed);
            let grid = generator.generate(config.rows, config.cols)?;
            info!("maze {}x{} generated with seed {}", config.rows, config.cols, generator.seed());
            print_maze(&grid, None, config.start, config.goal, format)?;
        }
        Command::Solve { maze, route, format } => {
            let config = maze.into_config(&route)?;
            let mut generator = MazeGenerator::new(config.seed);
            let grid = generator.generate(config.rows, config.cols)?;
            info!("maze {}x{} generated with seed {}", config.rows, config.cols, generator.seed());
            solve_and_print(&grid, config.start, config.goal, format)?;
        }
        Command::SolveCode { code, route, format } => {
            let grid = decode_maze(&code).context("Failed to decode given maze code.")?;
            let (start, goal) = route.resolve(&grid)?;
            solve_and_print(&grid, start, goal, format)?;
        }
        Command::SolveMap {
            input_path,
            route,
            format,
        } => {
            let text = fs::read_to_string(&input_path).with_context(|| {
                format!("Failed to open given file({}).", input_path.display())
            })?;
            let blocked = parse_obstacle_map(&text).with_context(|| {
                format!("Failed to parse obstacle map({}).", input_path.display())
            })?;
            let grid = Grid::from_obstacles(&blocked)?;
            let (start, goal) = route.resolve(&grid)?;
            solve_and_print(&grid, start, goal, format)?;
        }
    }

    Ok(())
}

fn solve_and_print(grid: &Grid, start: Coord, goal: Coord, format: OutputFormat) -> Result<()> {
    let path = find_path(grid, start, goal)?;
    match &path {
        Some(path) => info!("path {} -> {} has {} steps", start, goal, path.steps()),
        None => eprintln!("There's no path from {} to {}.", start, goal),
    }
    print_maze(grid, path.as_ref(), start, goal, format)
}

fn print_maze(
    grid: &Grid,
    path: Option<&Path>,
    start: Coord,
    goal: Coord,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Ascii => {
            print!("{}", render_ascii(grid, path, Some(start), Some(goal)));
            if let Some(path) = path {
                println!("Shortest path from {} to {} takes {} steps.", start, goal, path.steps());
            }
        }
        OutputFormat::Json => println!("{}", maze_to_json(grid, path)),
        OutputFormat::Code => {
            println!("{}", encode_maze(grid)?);
            if let Some(path) = path {
                println!("{}", path_to_json(path));
            }
        }
    }
    Ok(())
}
