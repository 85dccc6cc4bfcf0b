use crate::domain::model::LineKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("{kind} line index {index} is out of bounds (len {len})")]
    IndexOutOfBounds {
        kind: LineKind,
        index: usize,
        len: usize,
    },

    #[error("Catalog must contain at least one entry")]
    EmptyCatalog,

    #[error("Duplicate catalog id: {id}")]
    DuplicateCatalogId { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid number '{value}' for {field}")]
    InvalidNumberError { field: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller passed an index outside the line list.
    Contract,
    /// Catalog, sheet or CLI input was rejected.
    Input,
    /// Writing or encoding the export failed.
    Output,
}

impl EstimateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EstimateError::IndexOutOfBounds { .. } => ErrorCategory::Contract,
            EstimateError::EmptyCatalog
            | EstimateError::DuplicateCatalogId { .. }
            | EstimateError::ConfigValidationError { .. }
            | EstimateError::InvalidConfigValueError { .. }
            | EstimateError::InvalidNumberError { .. } => ErrorCategory::Input,
            EstimateError::IoError(_) | EstimateError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EstimateError::IndexOutOfBounds { kind, index, .. } => {
                format!("There is no {} line at position {}", kind, index)
            }
            EstimateError::EmptyCatalog => "The material catalog is empty".to_string(),
            EstimateError::DuplicateCatalogId { id } => {
                format!("Material '{}' appears more than once in the catalog", id)
            }
            EstimateError::IoError(e) => format!("Could not save the estimate: {}", e),
            EstimateError::SerializationError(e) => {
                format!("Could not encode the estimate: {}", e)
            }
            EstimateError::ConfigValidationError { field, message } => {
                format!("Problem in '{}': {}", field, message)
            }
            EstimateError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            EstimateError::InvalidNumberError { field, value } => {
                format!("'{}' is not a number (field '{}')", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EstimateError::IndexOutOfBounds { .. } => {
                "Refresh the line list before editing or removing a line"
            }
            EstimateError::EmptyCatalog | EstimateError::DuplicateCatalogId { .. } => {
                "Check the [[catalog]] entries in the estimate sheet"
            }
            EstimateError::IoError(_) => "Check that the output directory is writable",
            EstimateError::SerializationError(_) => "Check the estimate values for overflow",
            EstimateError::ConfigValidationError { .. }
            | EstimateError::InvalidConfigValueError { .. } => {
                "Fix the estimate sheet or command line arguments and retry"
            }
            EstimateError::InvalidNumberError { .. } => {
                "Use plain decimal numbers such as 12 or 12.5"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_error_message() {
        let err = EstimateError::IndexOutOfBounds {
            kind: LineKind::Labor,
            index: 3,
            len: 1,
        };
        assert_eq!(err.to_string(), "labor line index 3 is out of bounds (len 1)");
        assert_eq!(err.category(), ErrorCategory::Contract);
    }

    #[test]
    fn test_categories() {
        let err = EstimateError::InvalidNumberError {
            field: "hours".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("abc"));

        let io = EstimateError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Output);
    }
}
