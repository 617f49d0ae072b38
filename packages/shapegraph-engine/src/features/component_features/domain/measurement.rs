//! Size-capped measurements
//!
//! Diameter and colouring are unbounded in cost. Callers pass a vertex
//! limit; components above it are reported as too large instead of computed.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Measurement<T> {
    Computed { value: T },
    /// Skipped: too large
    TooLarge { vertices: usize, limit: usize },
}

impl<T> Measurement<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Measurement::Computed { value } => Some(value),
            Measurement::TooLarge { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Measurement::Computed { value } => Some(value),
            Measurement::TooLarge { .. } => None,
        }
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Measurement::TooLarge { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Measurement<U> {
        match self {
            Measurement::Computed { value } => Measurement::Computed { value: f(value) },
            Measurement::TooLarge { vertices, limit } => Measurement::TooLarge { vertices, limit },
        }
    }
}
