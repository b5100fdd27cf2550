use std::mem;

use crate::equation::Equation;
use crate::solver::constants::MAX_FRONTIER_RESERVE;
use crate::solver::operators::OperatorSet;

/// Allocation-optimized variant of the pruned breadth-first search.
///
/// Identical satisfiability results to the breadth-first variant, but the
/// two frontier buffers are sized up front and swapped between steps
/// instead of reallocated.
pub fn is_satisfiable(equation: &Equation, operators: OperatorSet) -> bool {
    let Some((&first, rest)) = equation.operands.split_first() else {
        return equation.target == 0;
    };

    let capacity = frontier_capacity(operators, equation.operands.len());
    let mut frontier = Vec::with_capacity(capacity);
    let mut scratch = Vec::with_capacity(capacity);

    frontier.push(first);
    for &operand in rest {
        scratch.clear();

        for &value in &frontier {
            for candidate in operators.apply(value, operand) {
                if candidate <= equation.target {
                    scratch.push(candidate);
                }
            }
        }

        mem::swap(&mut frontier, &mut scratch);
    }

    frontier.contains(&equation.target)
}

/// Upper bound on the frontier size: `fanout^(operand count - 1)` leaves,
/// capped so adversarial operand counts cannot force a huge reservation.
fn frontier_capacity(operators: OperatorSet, operand_count: usize) -> usize {
    let steps = operand_count.saturating_sub(1) as u32;
    operators
        .fanout()
        .saturating_pow(steps)
        .min(MAX_FRONTIER_RESERVE)
}
