use clap::{Parser, Subcommand};
use statespace::{
    problems::{GraphError, GridMaze, MazeError, MazePreset, WeightedGraph},
    search::{
        problem_formulations::BoundedProblem,
        search_engines::{SearchEngineName, SearchResult},
        validate, HeuristicSearchProblem, ValidationError,
    },
    Verbosity,
};
use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};
use thiserror::Error;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Solve a search problem with one of the state-space search engines.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "Stop producing successors after this many expansions",
        long = "max-expansions",
        id = "MAX_EXPANSIONS"
    )]
    max_expansions: Option<usize>,
    #[arg(
        help = "Stop producing successors after this much time, e.g. 10s or 2min",
        long = "time-limit",
        id = "TIME_LIMIT",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "The output plan file, one action per line",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path through a grid maze. The maze is either read from a file
    /// (`.` open, `#` wall, `~` rough, `S` start, `G` goal) or one of the
    /// built-in presets.
    Maze {
        #[arg(help = "The maze file", required_unless_present = "PRESET")]
        file: Option<PathBuf>,
        #[arg(
            value_enum,
            help = "Use a built-in maze instead of a file",
            long = "preset",
            id = "PRESET",
            conflicts_with = "file"
        )]
        preset: Option<MazePreset>,
    },
    /// Find a path through a weighted graph described in JSON.
    Graph {
        #[arg(help = "The graph file")]
        file: PathBuf,
    },
}

#[derive(Debug, Error)]
enum SolverError {
    #[error("no maze file or preset given")]
    MissingMaze,
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("plan is invalid: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to write plan file: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool, SolverError> {
    match &cli.command {
        Commands::Maze { file, preset } => {
            let maze = match (file, preset) {
                (_, Some(preset)) => GridMaze::preset(*preset),
                (Some(file), None) => GridMaze::from_path(file)?,
                (None, None) => return Err(SolverError::MissingMaze),
            };
            info!(
                height = maze.height(),
                width = maze.width(),
                start = %maze.start(),
                goal = %maze.goal(),
                "loaded maze"
            );
            solve(cli, maze)
        }
        Commands::Graph { file } => {
            let graph = WeightedGraph::from_path(file)?;
            info!(nodes = graph.len(), "loaded graph");
            solve(cli, graph)
        }
    }
}

/// Search the problem with the configured engine and limits, then validate
/// and report the plan. Returns whether a plan was found.
fn solve<S, A, P>(cli: &Cli, problem: P) -> Result<bool, SolverError>
where
    A: Clone + PartialEq + Debug + Display,
    P: HeuristicSearchProblem<S, A>,
{
    let mut bounded = BoundedProblem::new(problem);
    if let Some(max_expansions) = cli.max_expansions {
        bounded = bounded.with_max_expansions(max_expansions);
    }
    if let Some(time_limit) = cli.time_limit {
        bounded = bounded.with_time_limit(time_limit);
    }

    let (result, _statistics) = cli.search_engine_name.search::<S, A, _>(&bounded);
    let plan = match result {
        SearchResult::Success(plan) => plan,
        _ => {
            info!("no plan found");
            println!("No plan found: {:?}", result);
            return Ok(false);
        }
    };

    info!("validating plan");
    let cost = validate::<S, A, P>(&plan, bounded.inner())?;
    info!("plan is valid");
    info!(plan_length = plan.len(), plan_cost = cost.into_inner());

    println!("Plan found:");
    println!("{}", plan);
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {}", cost);

    if let Some(plan_path) = &cli.plan {
        std::fs::write(plan_path, plan.to_string())?;
        info!(plan_path = %plan_path.display(), "plan written");
    }
    Ok(true)
}
