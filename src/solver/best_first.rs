use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::equation::Equation;
use crate::solver::operators::OperatorSet;

/// One partially-folded value: the running result and the index of the
/// last operand folded in. Nodes form a tree; branches are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    value: u64,
    level: usize,
    cost: u64,
}

impl SearchNode {
    fn new(value: u64, level: usize, target: u64) -> Self {
        // Estimated cost: remaining distance to the target, biased by depth.
        // Provisional heuristic, no optimality claim.
        let cost = level as u64 + value.abs_diff(target);
        Self { value, level, cost }
    }
}

// Reversed so the max-heap pops the cheapest node. Ties go to the
// shallower node, then the smaller value, keeping exploration order
// deterministic.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.level.cmp(&other.level))
            .then_with(|| self.value.cmp(&other.value))
            .reverse()
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search over the operator-assignment tree.
///
/// Pops the lowest-cost node first and stops as soon as a full-depth node
/// matching the target is popped. Unlike shortest-path A*, matching the
/// target at an intermediate level proves nothing; the fold must consume
/// every operand, so non-leaf matches are expanded like any other node.
pub fn is_satisfiable(equation: &Equation, operators: OperatorSet) -> bool {
    let Some((&first, _)) = equation.operands.split_first() else {
        return equation.target == 0;
    };
    let last_level = equation.operands.len() - 1;

    let mut frontier = BinaryHeap::new();
    frontier.push(SearchNode::new(first, 0, equation.target));

    let mut expanded: usize = 0;
    while let Some(node) = frontier.pop() {
        if node.level == last_level {
            if node.value == equation.target {
                debug!(
                    "Best-first search hit target {} after {} expansions",
                    equation.target, expanded
                );
                return true;
            }
            continue;
        }

        expanded += 1;
        let operand = equation.operands[node.level + 1];
        for candidate in operators.apply(node.value, operand) {
            if candidate <= equation.target {
                frontier.push(SearchNode::new(candidate, node.level + 1, equation.target));
            }
        }
    }

    debug!(
        "Best-first search exhausted the frontier for target {} after {} expansions",
        equation.target, expanded
    );
    false
}
