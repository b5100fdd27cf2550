use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::calibration::{compare_strategies, parse_lines, solve_equations};
use crate::solver::{OperatorSet, Strategy};

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

/// Search strategy selection on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum StrategyArg {
    Breadth,
    Buffered,
    BestFirst,
}

impl StrategyArg {
    pub fn to_strategy(&self) -> Strategy {
        match self {
            StrategyArg::Breadth => Strategy::Breadth,
            StrategyArg::Buffered => Strategy::Buffered,
            StrategyArg::BestFirst => Strategy::BestFirst,
        }
    }
}

/// Calibrix - Sum the calibration equations some operator assignment can satisfy
#[derive(Parser, Debug)]
#[command(name = "calibrix")]
#[command(
    about = "Decide which calibration equations are satisfiable and sum their targets"
)]
#[command(version)]
pub struct CliArgs {
    /// Path to the puzzle input, one equation per line
    pub input: PathBuf,

    /// Search strategy (default: buffered)
    #[arg(short, long, value_enum, default_value = "buffered")]
    pub strategy: StrategyArg,

    /// Time every strategy on the extended operator set instead of solving
    #[arg(long)]
    pub compare: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file '{}'", args.input.display()))?;
    let equations = parse_lines(input.lines()).context("Invalid puzzle input")?;

    info!("Loaded {} equations from '{}'", equations.len(), args.input.display());

    if args.compare {
        for report in compare_strategies(&equations, OperatorSet::Extended) {
            println!(
                "{:>10}: {} in {:?}",
                report.strategy.to_string(),
                report.total,
                report.elapsed
            );
        }
        return Ok(());
    }

    let strategy = args.strategy.to_strategy();
    let part1 = solve_equations(&equations, strategy, OperatorSet::Basic);
    let part2 = solve_equations(&equations, strategy, OperatorSet::Extended);

    println!("Part 1: {}", part1);
    println!("Part 2: {}", part2);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_strategy_arg_conversion() {
        assert_eq!(StrategyArg::Breadth.to_strategy(), Strategy::Breadth);
        assert_eq!(StrategyArg::Buffered.to_strategy(), Strategy::Buffered);
        assert_eq!(StrategyArg::BestFirst.to_strategy(), Strategy::BestFirst);
    }

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::parse_from(["calibrix", "input.txt"]);
        assert!(!args.compare);
        assert!(matches!(args.strategy, StrategyArg::Buffered));
        assert!(matches!(args.log_level, LogLevel::Warn));
    }
}
