use std::str::FromStr;

use log::{debug, warn};

use crate::equation::errors::EquationError;

/// A calibration equation: a target value and the ordered operands that
/// must reproduce it under some left-to-right operator assignment.
///
/// Operand order is significant: the fold consumes operands strictly left
/// to right, so reordering changes the set of reachable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub target: u64,
    pub operands: Vec<u64>,
}

impl Equation {
    pub fn new(target: u64, operands: Vec<u64>) -> Self {
        Self { target, operands }
    }
}

/// Parse one `TARGET: OP1 OP2 ... OPn` input line into an [`Equation`].
///
/// # Errors
///
/// Returns [`EquationError::MalformedLine`] if the line does not split into
/// exactly two ':'-separated parts, or [`EquationError::InvalidNumber`] if
/// the target or any operand token is not a valid non-negative integer.
pub fn parse_equation(line: &str) -> Result<Equation, EquationError> {
    debug!("Parsing equation line: '{}'", line);

    let parts: Vec<&str> = line.split(':').collect();
    let [target_part, operands_part] = parts.as_slice() else {
        warn!("Malformed equation line: '{}'", line);
        return Err(EquationError::MalformedLine(line.to_string()));
    };

    let target = parse_number(target_part.trim())?;
    let operands = operands_part
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<u64>, EquationError>>()?;

    Ok(Equation::new(target, operands))
}

fn parse_number(token: &str) -> Result<u64, EquationError> {
    token.parse().map_err(|source| {
        warn!("Invalid integer token: '{}'", token);
        EquationError::InvalidNumber {
            token: token.to_string(),
            source,
        }
    })
}

impl FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_equation(s)
    }
}
