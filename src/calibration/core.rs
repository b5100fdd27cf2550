use log::{debug, info};
use rayon::prelude::*;

use crate::equation::{Equation, EquationError, parse_equation};
use crate::solver::{OperatorSet, Strategy};

/// Parse raw input lines into equations. Blank lines are skipped; the
/// first malformed line aborts the whole run.
///
/// # Errors
///
/// Returns the underlying [`EquationError`] of the first line that fails
/// to parse.
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<Equation>, EquationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let equations = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_equation)
        .collect::<Result<Vec<Equation>, EquationError>>()?;

    debug!("Parsed {} equations", equations.len());
    Ok(equations)
}

/// Sum the targets of all satisfiable equations.
///
/// Equations are independent, so they are evaluated in parallel; integer
/// summation is commutative, making the parallel reduction equivalent to
/// the sequential one.
pub fn solve_equations(
    equations: &[Equation],
    strategy: Strategy,
    operators: OperatorSet,
) -> u64 {
    let satisfiable: Vec<u64> = equations
        .par_iter()
        .filter(|equation| strategy.is_satisfiable(equation, operators))
        .map(|equation| equation.target)
        .collect();

    info!(
        "{} of {} equations satisfiable with {} strategy",
        satisfiable.len(),
        equations.len(),
        strategy
    );
    satisfiable.iter().sum()
}

/// Parse a sequence of raw lines and return the calibration sum in one
/// call.
///
/// # Errors
///
/// Returns an [`EquationError`] if any line fails to parse.
pub fn sum_satisfiable<'a, I>(
    lines: I,
    strategy: Strategy,
    operators: OperatorSet,
) -> Result<u64, EquationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let equations = parse_lines(lines)?;
    Ok(solve_equations(&equations, strategy, operators))
}
