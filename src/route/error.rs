use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The start or goal is not an endpoint of any line.
    UnknownPosition(i64),
    /// Search bookkeeping is inconsistent; this is a bug, not bad input.
    InvariantViolation {
        position: i64,
        reason: &'static str,
    },
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::UnknownPosition(id) => write!(f, "position {id} is not in the graph"),
            RouteError::InvariantViolation { position, reason } => {
                write!(f, "invariant violated at position {position}: {reason}")
            }
        }
    }
}

impl std::error::Error for RouteError {}
