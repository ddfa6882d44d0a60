use std::path::PathBuf;
use std::process::ExitCode;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;

use maze_search::maze::Maze;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Finds a way out of text mazes with a depth-first search
#[derive(Parser, Debug)]
#[clap(long_version = maze_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze files (rows/cols, start, exit header followed by the grid)
    #[arg(required = true)]
    pub mazes: Vec<PathBuf>,

    /// Number of searches to run on each maze
    #[arg(long, env = "MAZE_RUNS", default_value_t = 1u32)]
    pub runs: u32,

    /// Keep path/tried tokens between runs instead of resetting the maze
    #[arg(long)]
    pub no_reset: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn solve(maze: &mut Maze, args: &Args) -> Result<bool, maze_search::maze::MazeError> {
    let mut found = maze.find_path()?;
    let first = maze.render();
    let mut same_every_run = true;

    for run in 1..args.runs {
        if !args.no_reset {
            maze.reset();
        }
        found = maze.find_path()?;
        let rendered = maze.render();
        if rendered != first {
            log::info!("Run {run} marked a different grid than the first one");
            same_every_run = false;
        }
    }

    if args.runs > 1 {
        if same_every_run {
            println!("{} runs, all identical", args.runs);
        } else {
            println!("{} runs, {}", args.runs, "results differ".yellow());
        }
    }

    Ok(found)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    args.color.write_global();

    let mut failed = false;
    for p in &args.mazes {
        let mut maze = match Maze::try_from(p.as_path()) {
            Ok(maze) => maze,
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                failed = true;
                continue;
            }
        };
        let (rows, cols) = maze.dimensions();
        log::info!("Loaded {p:?} ({rows}x{cols})");

        println!("{} {:?}", "Maze".bold(), p);
        println!("{maze}");

        match solve(&mut maze, &args) {
            Ok(true) => {
                println!("{}", "Path found".green().bold());
                println!("{maze}");
                println!("Path cells: {}", maze.path_cells().len());
            }
            Ok(false) => {
                println!("{}", "No path".red().bold());
                println!("{maze}");
            }
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                failed = true;
            }
        }
        println!();
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
