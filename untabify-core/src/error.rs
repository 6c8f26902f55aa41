//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Tab size outside the supported `1..=8` range
    #[error("tab size {value} is out of range (must be between 1 and 8 inclusive)")]
    TabSizeOutOfRange {
        /// The rejected tab size
        value: usize,
    },

    /// Tab size given as text that is not an integer
    #[error("invalid tab size: '{0}' is not an integer")]
    InvalidTabSize(String),
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = CoreError::TabSizeOutOfRange { value: 9 };
        assert_eq!(
            error.to_string(),
            "tab size 9 is out of range (must be between 1 and 8 inclusive)"
        );
    }

    #[test]
    fn test_invalid_tab_size_display() {
        let error = CoreError::InvalidTabSize("four".to_string());
        assert_eq!(error.to_string(), "invalid tab size: 'four' is not an integer");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CoreError::TabSizeOutOfRange { value: 0 };
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("TabSizeOutOfRange"));
    }
}
