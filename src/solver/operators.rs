use arrayvec::ArrayVec;

/// The operator set available to the left-to-right fold.
///
/// All operators are non-decreasing for non-negative operands (addition,
/// multiplication by an operand >= 1, decimal concatenation), which is what
/// licenses discarding any intermediate value above the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSet {
    /// Addition and multiplication
    Basic,
    /// Addition, multiplication and decimal concatenation
    Extended,
}

impl OperatorSet {
    /// Apply every enabled operator to an intermediate value and the next
    /// operand, returning the representable results.
    ///
    /// A result whose computation overflows `u64` is dropped: it exceeds
    /// every representable target, so dropping it coincides with the
    /// pruning rule.
    pub fn apply(self, value: u64, operand: u64) -> ArrayVec<u64, 3> {
        let mut candidates = ArrayVec::new();

        if let Some(sum) = value.checked_add(operand) {
            candidates.push(sum);
        }
        if let Some(product) = value.checked_mul(operand) {
            candidates.push(product);
        }
        if self == OperatorSet::Extended
            && let Some(joined) = concatenate(value, operand)
        {
            candidates.push(joined);
        }

        candidates
    }

    /// Number of operators in the set, the branching factor of the search
    pub fn fanout(self) -> usize {
        match self {
            OperatorSet::Basic => 2,
            OperatorSet::Extended => 3,
        }
    }
}

/// Append the decimal digits of `right` after those of `left`, so
/// `concatenate(12, 34) == Some(1234)`. Returns `None` on overflow.
fn concatenate(left: u64, right: u64) -> Option<u64> {
    let mut shifted = left;
    for _ in 0..decimal_width(right) {
        shifted = shifted.checked_mul(10)?;
    }
    shifted.checked_add(right)
}

fn decimal_width(value: u64) -> u32 {
    match value.checked_ilog10() {
        Some(width) => width + 1,
        None => 1,
    }
}
