use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trailhead::input::read_char_grid;
use trailhead::shape::SquareStep;
use trailhead::{Builder, Grid, MazeBuilder};

/// Find the shortest route through a text maze and draw it.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Maze file, one row per line
    maze: PathBuf,

    /// Character marking a blocked cell
    #[arg(long, default_value_t = '#')]
    wall: char,

    /// Character marking the start cell
    #[arg(long, default_value_t = 'S')]
    start: char,

    /// Character marking the end cell
    #[arg(long, default_value_t = 'E')]
    end: char,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Log filter such as `trailhead=trace`, overriding --verbose
    #[arg(long, env = "TRAILHEAD_LOG")]
    log_level: Option<String>,
}

fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level.to_string(),
        (true, None) => "trailhead=debug,solver=debug".to_string(),
        (false, None) => "warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr).with_ansi(false))
        .try_init()?;

    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let grid = read_char_grid(&cli.maze)?;
    let start = grid.find_first(&cli.start).ok_or_else(|| format!("no start cell {:?} in maze", cli.start))?;
    let end = grid.find_first(&cli.end).ok_or_else(|| format!("no end cell {:?} in maze", cli.end))?;

    let maze = MazeBuilder::<SquareStep>::from_grid(&grid, |c| *c != cli.wall)
        .build()
        .map_err(|reasons| format!("invalid maze: {reasons:?}"))?;
    tracing::debug!(regions = maze.count_components(), %start, %end, "maze loaded");

    let Some(path) = maze.shortest_path(start, end) else {
        println!("no route from {start} to {end}");
        return Ok(());
    };

    let mut drawn: Grid<char> = grid.clone();
    for location in path.iter().skip(1).take(path.len().saturating_sub(2)) {
        drawn.set(*location, 'o');
    }

    print!("{drawn}");
    println!("{} steps", path.len() - 1);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
