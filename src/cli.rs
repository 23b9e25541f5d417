use std::ops::ControlFlow;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::{Expression, ExpressionSolver, Solution, SolverConfig, parse_number};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How each match is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fully parenthesized, e.g. `(3+2) = 5`
    Plain,
    /// LaTeX math, e.g. `3 + 2 = 5`
    Latex,
}

impl OutputFormat {
    pub fn render(self, solution: &Solution) -> String {
        match self {
            OutputFormat::Plain => solution.to_string(),
            OutputFormat::Latex => solution.to_latex(),
        }
    }
}

/// Countdown - Find every way to reach a target from a set of numbers
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find arithmetic expressions over a set of numbers that evaluate to a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(value_parser = parse_number)]
    pub target: u64,

    /// Numbers available to build expressions from
    #[arg(required = true, value_parser = parse_number)]
    pub sources: Vec<u64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Stop after this many solutions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Spread the search across all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Do not report a single source equal to the target
    #[arg(long)]
    pub no_single: bool,

    /// Output format for solutions
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Print search statistics to stderr
    #[arg(short, long)]
    pub stats: bool,

    /// Refuse to search more than this many sources
    #[arg(long)]
    pub max_sources: Option<usize>,

    /// Re-evaluate every solution before printing it
    #[arg(long)]
    pub verify: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: u64,
    pub sources: Vec<u64>,
    pub log_level: LogLevel,
    pub format: OutputFormat,
    pub show_stats: bool,
    pub solver: SolverConfig,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            target: args.target,
            sources: args.sources,
            log_level: args.log_level,
            format: args.format,
            show_stats: args.stats,
            solver: SolverConfig {
                report_single_sources: !args.no_single,
                parallel: args.parallel,
                max_solutions: args.limit,
                max_sources: args.max_sources,
                verify_matches: args.verify,
            },
        }
    }
}

/// Parse command line arguments and return configuration
///
/// Exits the process on invalid arguments, `--help` and `--version`.
pub fn parse_args() -> CliConfig {
    CliConfig::from(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    info!(
        "Searching for expressions using {:?} that equal {}",
        config.sources, config.target
    );

    let solver = ExpressionSolver::new(config.solver.clone());
    let format = config.format;
    let mut print = |expr: &Arc<Expression>| {
        println!("{}", format.render(&Solution::new(Arc::clone(expr))));
        ControlFlow::Continue(())
    };

    let stats = solver
        .search(config.target, &config.sources, &mut print)
        .context("Search failed")?;

    if stats.matches == 0 {
        warn!("No matching expression found");
        println!("No solution found.");
    }

    if config.show_stats {
        eprintln!("{}", stats);
    }

    Ok(())
}
