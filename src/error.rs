//! Error taxonomy shared by every entry point that validates its input.
//!
//! The scan drivers themselves are total functions; only the problem-level
//! wrappers that accept raw integers, companion arrays or token streams can
//! fail, and they do so synchronously without returning partial results.

/// Errors reported by validating entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// An argument is outside the domain of the requested computation
    /// (mismatched companion lengths, negative heights, non-positive rates).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A token stream does not form a well-formed expression.
    #[error("malformed expression at token {position}: {reason}")]
    MalformedExpression { position: usize, reason: String },

    /// Division by zero while evaluating the token at `position`.
    #[error("division by zero at token {position}")]
    DivisionByZero { position: usize },

    /// A result does not fit its output type. `position` is the token being
    /// evaluated, or the sequence length for an aggregate that only exceeds
    /// the range once the pass completes.
    #[error("arithmetic overflow at position {position}")]
    Overflow { position: usize },
}

impl EngineError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(argument = name, %reason, "rejecting input");
        EngineError::InvalidArgument { name, reason }
    }

    pub(crate) fn overflow(position: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(position, "result out of range");
        EngineError::Overflow { position }
    }

    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(position, %reason, "rejecting expression");
        EngineError::MalformedExpression { position, reason }
    }
}

/// Crate-wide result alias.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::EngineError;

    #[test]
    fn display_names_the_argument() {
        let err = EngineError::invalid("speeds", "expected 3 values, got 2");
        assert_eq!(
            err.to_string(),
            "invalid argument `speeds`: expected 3 values, got 2"
        );
    }

    #[test]
    fn display_reports_token_position() {
        assert_eq!(
            EngineError::DivisionByZero { position: 4 }.to_string(),
            "division by zero at token 4"
        );
        assert_eq!(
            EngineError::malformed(0, "empty expression").to_string(),
            "malformed expression at token 0: empty expression"
        );
    }
}
