//! Error types for formica operations.

use crate::types::{AgentId, GridPos};
use thiserror::Error;

/// Result type for formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur while building or running a simulation.
#[derive(Debug, Clone, Error)]
pub enum FormicaError {
    /// The operation exists on the API but has no behavior yet.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// A colony radius must be a non-negative number.
    #[error("invalid radius {0}: the radius has to be a positive number")]
    InvalidRadius(f64),

    #[error("cell {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: GridPos,
        width: usize,
        height: usize,
    },

    #[error("agent not found: {0}")]
    AgentNotFound(AgentId),

    #[error("agent already placed on the grid: {0}")]
    AlreadyPlaced(AgentId),

    #[error("invalid value for {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for FormicaError {
    fn from(e: std::io::Error) -> Self {
        FormicaError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FormicaError {
    fn from(e: serde_json::Error) -> Self {
        FormicaError::Serialization(e.to_string())
    }
}

// Convenience constructors
impl FormicaError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        FormicaError::Config {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, FormicaError::NotImplemented(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = FormicaError::InvalidRadius(-1.0);
        assert!(err.to_string().contains("-1"));

        let err = FormicaError::OutOfBounds {
            pos: GridPos::new(10, 3),
            width: 10,
            height: 10,
        };
        assert_eq!(err.to_string(), "cell (10, 3) is outside the 10x10 grid");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FormicaError = io.into();
        assert!(matches!(err, FormicaError::Io(_)));
        assert!(!err.is_not_implemented());
    }
}
