//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range validation error
    #[error("Invalid range for field '{field}': {value} not in {min}..={max}. {hint}")]
    Range {
        field: String,
        value: String,
        min: String,
        max: String,
        hint: String,
    },

    /// Unrecognised name for an enumerated setting
    #[error("Unknown value '{value}' for '{field}'. {suggestion}")]
    UnknownValue {
        field: String,
        value: String,
        suggestion: String,
    },

    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: fast, balanced, thorough")]
    UnknownPreset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a range error with a hint
    pub fn range_with_hint(
        field: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
        hint: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
            hint: hint.into(),
        }
    }

    /// Create an unknown value error suggesting the closest valid name
    pub fn unknown_value(field: impl Into<String>, value: impl Into<String>, valid: &[&str]) -> Self {
        let value = value.into();
        let suggestion = find_closest_match(&value, valid);
        Self::UnknownValue {
            field: field.into(),
            value,
            suggestion,
        }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[&str]) -> String {
    candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
        .map(|closest| format!("Did you mean '{}'?", closest))
        .unwrap_or_else(|| "No valid values available".to_string())
}

fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1: Vec<char> = s1.chars().collect();
    let s2: Vec<char> = s2.chars().collect();
    let mut previous: Vec<usize> = (0..=s2.len()).collect();

    for (i, c1) in s1.iter().enumerate() {
        let mut current = vec![i + 1; s2.len() + 1];
        for (j, c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }

    previous[s2.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("weak", "weak"), 0);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn test_unknown_value_suggests_closest() {
        let err = ConfigError::unknown_value("traversal", "undirectd", &["directed", "undirected"]);
        let msg = err.to_string();
        assert!(msg.contains("'undirectd'"));
        assert!(msg.contains("'traversal'"));
        assert!(msg.contains("Did you mean 'undirected'?"));
    }

    #[test]
    fn test_closest_match_empty_candidates() {
        assert!(find_closest_match("x", &[]).contains("No valid values"));
    }

    #[test]
    fn test_range_error_formatting() {
        let err = ConfigError::range_with_hint(
            "max_component_size",
            1,
            2,
            100_000,
            "Single-vertex components are never grouped",
        );
        let msg = err.to_string();
        assert!(msg.contains("max_component_size"));
        assert!(msg.contains("2..=100000"));
        assert!(msg.contains("Single-vertex"));
    }

    #[test]
    fn test_unsupported_version_error() {
        let err = ConfigError::UnsupportedVersion {
            found: 2,
            supported: vec![1],
        };
        let msg = err.to_string();
        assert!(msg.contains("version 2"));
        assert!(msg.contains("Supported versions: 1"));
    }
}
