use log::debug;

use crate::equation::Equation;
use crate::solver::operators::OperatorSet;

/// Pruned breadth-first enumeration of all reachable intermediate values.
///
/// The frontier after step `i` holds every value attainable by folding the
/// first `i + 1` operands; candidates above the target are discarded, which
/// is sound because every operator is non-decreasing for non-negative
/// operands. A fresh frontier is built at each step.
pub fn is_satisfiable(equation: &Equation, operators: OperatorSet) -> bool {
    let Some((&first, rest)) = equation.operands.split_first() else {
        return equation.target == 0;
    };

    let mut frontier = vec![first];
    for &operand in rest {
        let mut next_frontier = Vec::new();

        for &value in &frontier {
            for candidate in operators.apply(value, operand) {
                if candidate <= equation.target {
                    next_frontier.push(candidate);
                }
            }
        }

        frontier = next_frontier;
    }

    debug!(
        "Breadth search for target {} finished with {} frontier values",
        equation.target,
        frontier.len()
    );
    frontier.contains(&equation.target)
}
