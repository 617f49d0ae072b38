use serde::{Deserialize, Serialize};

/// How the dataset graph is cut into components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decomposition {
    /// Weakly connected components (edge direction ignored)
    #[default]
    Weak,
    /// Strongly connected components. Edges between components are dropped.
    Strong,
}

impl Decomposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Strong => "strong",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "weak" => Some(Self::Weak),
            "strong" => Some(Self::Strong),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decomposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_parsing() {
        assert_eq!(Decomposition::from_str("STRONG"), Some(Decomposition::Strong));
        assert_eq!(Decomposition::from_str("weakly"), None);
        assert_eq!(Decomposition::default().to_string(), "weak");
    }
}
