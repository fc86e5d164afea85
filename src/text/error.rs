//! Passage error types.

use thiserror::Error;

/// Errors raised while defining or indexing a passage.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PassageError {
    /// The passage text was empty after trimming.
    #[error("invalid passage definition: {message}")]
    Definition { message: String },

    /// A word index fell outside `0..size`.
    #[error("Index {index} is out of bounds for passage size {size}.")]
    WordOutOfBounds { index: usize, size: usize },
}

impl PassageError {
    /// Build an out-of-bounds error for `index` in a passage of `size` words.
    #[must_use]
    pub const fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::WordOutOfBounds { index, size }
    }
}

/// Result alias for passage operations.
pub type Result<T> = std::result::Result<T, PassageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = PassageError::out_of_bounds(4, 4);
        assert_eq!(err.to_string(), "Index 4 is out of bounds for passage size 4.");
    }

    #[test]
    fn test_definition_message() {
        let err = PassageError::Definition {
            message: "Passage cannot be empty.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid passage definition: Passage cannot be empty."
        );
    }
}
