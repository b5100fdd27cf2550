use std::fmt;

use crate::equation::Equation;
use crate::solver::operators::OperatorSet;
use crate::solver::{best_first, breadth, buffered};

/// Search strategy used to decide satisfiability.
///
/// All strategies answer the same question and always agree; they differ
/// only in exploration order and allocation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Pruned breadth-first enumeration with a fresh frontier per step
    Breadth,
    /// Same enumeration over two reused, pre-sized buffers
    Buffered,
    /// Best-first expansion ordered by estimated distance to the target
    BestFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Breadth, Strategy::Buffered, Strategy::BestFirst];

    /// Decide whether some operator assignment folds the operands into the
    /// target.
    pub fn is_satisfiable(self, equation: &Equation, operators: OperatorSet) -> bool {
        match self {
            Strategy::Breadth => breadth::is_satisfiable(equation, operators),
            Strategy::Buffered => buffered::is_satisfiable(equation, operators),
            Strategy::BestFirst => best_first::is_satisfiable(equation, operators),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::Breadth => write!(f, "breadth"),
            Strategy::Buffered => write!(f, "buffered"),
            Strategy::BestFirst => write!(f, "best-first"),
        }
    }
}
