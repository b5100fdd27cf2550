//! Calibrix - Satisfiability of left-to-right calibration equations
//!
//! This library decides whether a target value can be produced by folding
//! an ordered operand sequence with addition, multiplication and decimal
//! concatenation (no precedence, strictly left to right), and sums the
//! targets of all satisfiable equations in an input. Three interchangeable
//! search strategies are provided; they always agree on satisfiability.

pub mod calibration;
pub mod equation;
pub mod solver;

// Re-export the main public API
pub use calibration::{StrategyReport, compare_strategies, sum_satisfiable};
pub use equation::{Equation, EquationError, parse_equation};
pub use solver::{OperatorSet, Strategy};

/// Sum the targets of all satisfiable equations in a whole input text.
///
/// This is a convenience wrapper that splits the input into lines and runs
/// the driver with the chosen strategy and operator set.
///
/// # Errors
///
/// Returns an error if any non-blank line is not a valid
/// `TARGET: OP1 OP2 ...` equation.
///
/// # Examples
///
/// ```
/// use calibrix::{OperatorSet, Strategy, total_calibration};
///
/// let input = "190: 10 19\n83: 17 5";
/// match total_calibration(input, Strategy::Breadth, OperatorSet::Basic) {
///     Ok(total) => assert_eq!(total, 190),
///     Err(e) => panic!("Unexpected parse failure: {}", e),
/// }
/// ```
pub fn total_calibration(
    input: &str,
    strategy: Strategy,
    operators: OperatorSet,
) -> Result<u64, EquationError> {
    calibration::sum_satisfiable(input.lines(), strategy, operators)
}
