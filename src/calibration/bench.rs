use std::time::{Duration, Instant};

use log::{info, warn};

use crate::calibration::core::solve_equations;
use crate::equation::Equation;
use crate::solver::{OperatorSet, Strategy};

/// Outcome of running one strategy over a full equation set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub total: u64,
    pub elapsed: Duration,
}

/// Run every strategy over the same equations and report the elapsed time
/// and aggregate sum of each.
///
/// The strategies are required to agree; a divergent aggregate is logged
/// as a warning so a broken strategy shows up even outside the test
/// suite.
pub fn compare_strategies(equations: &[Equation], operators: OperatorSet) -> Vec<StrategyReport> {
    let reports: Vec<StrategyReport> = Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let started = Instant::now();
            let total = solve_equations(equations, strategy, operators);
            let elapsed = started.elapsed();
            info!("{} strategy finished in {:?}, total {}", strategy, elapsed, total);
            StrategyReport {
                strategy,
                total,
                elapsed,
            }
        })
        .collect();

    if let Some(first) = reports.first()
        && reports.iter().any(|report| report.total != first.total)
    {
        warn!("Strategies disagree on the aggregate sum: {:?}", reports);
    }

    reports
}
