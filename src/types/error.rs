use thiserror::Error;

/// teatrack error types
#[derive(Error, Debug)]
pub enum TeatrackError {
    /// Failed to parse JSON or a user-supplied value
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Key-value store operation failed
    #[error("storage error: {0}")]
    Storage(String),

    /// Record or brand input rejected before it reached the journal
    #[error("invalid input: {0}")]
    Validation(String),

    /// No record or brand matched
    #[error("not found: {0}")]
    NotFound(String),

    /// Brand name already present in the brand list
    #[error("brand already exists: {0}")]
    DuplicateBrand(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for teatrack
pub type Result<T> = std::result::Result<T, TeatrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TeatrackError::Parse("invalid json".into());
        assert_eq!(err.to_string(), "parse error: invalid json");
    }

    #[test]
    fn test_duplicate_brand_display() {
        let err = TeatrackError::DuplicateBrand("喜茶".into());
        assert_eq!(err.to_string(), "brand already exists: 喜茶");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TeatrackError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
