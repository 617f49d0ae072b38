//! Error types for shapegraph-engine
//!
//! Classification itself never fails. Errors come from the collaborators
//! around it: reading triples, loading configuration, writing reports.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for shapegraph-engine operations
#[derive(Debug, Error)]
pub enum ShapegraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input line
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShapegraphError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        ShapegraphError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for shapegraph operations
pub type Result<T> = std::result::Result<T, ShapegraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_formatting() {
        let err = ShapegraphError::parse(7, "expected '.'");
        assert_eq!(err.to_string(), "Parse error at line 7: expected '.'");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: ShapegraphError = ConfigError::UnknownPreset("ultra".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("ultra"));
    }
}
