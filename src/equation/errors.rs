use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while parsing an equation line
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    #[error("Equation line must split into exactly two ':'-separated parts: '{0}'")]
    MalformedLine(String),
    #[error("Token '{token}' is not a valid non-negative integer")]
    InvalidNumber {
        token: String,
        source: ParseIntError,
    },
}
