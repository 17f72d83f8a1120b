//! Argument validation errors.
//!
//! There is exactly one error kind: bad arguments. Numeric edge cases
//! (duplicate points, acos at ±1, division by zero) are not errors; they
//! follow float semantics or the snap policy in `bend`.

use std::fmt;

/// A caller-supplied argument was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A unit name did not parse to a known [`crate::angle::AngleUnit`].
    InvalidAngleUnit { got: String },
    /// The fixed-arity angle computation received fewer than 3 points.
    TooFewPoints { got: usize },
    /// The fixed-arity angle computation received more than 3 points.
    TooManyPoints { got: usize },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::InvalidAngleUnit { got } => {
                write!(f, "invalid angle unit {:?}", got)
            }
            InvalidArgument::TooFewPoints { got } => {
                write!(f, "too little parameters: got {}, need exactly 3", got)
            }
            InvalidArgument::TooManyPoints { got } => {
                write!(f, "too many parameters: got {}, need exactly 3", got)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}
