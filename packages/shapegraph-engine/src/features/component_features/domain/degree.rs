//! Degree statistics

use serde::Serialize;

/// Which degree a statistic is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeKind {
    In,
    Out,
    /// In-degree plus out-degree
    Total,
}

/// Min / max / mean of a degree sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub average: f64,
}

impl DegreeStats {
    /// None for an empty sequence
    pub fn from_degrees(degrees: &[usize]) -> Option<Self> {
        let min = *degrees.iter().min()?;
        let max = *degrees.iter().max()?;
        let average = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
        Some(Self { min, max, average })
    }
}

/// Vertex with one of its degrees
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDegree {
    pub vertex: String,
    pub degree: usize,
}

/// Highest `k` degrees, descending. Sort-and-slice; ties keep input order.
pub fn top_k(mut degrees: Vec<VertexDegree>, k: usize) -> Vec<VertexDegree> {
    degrees.sort_by(|a, b| b.degree.cmp(&a.degree));
    degrees.truncate(k);
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vd(vertex: &str, degree: usize) -> VertexDegree {
        VertexDegree {
            vertex: vertex.to_string(),
            degree,
        }
    }

    #[test]
    fn test_stats() {
        let stats = DegreeStats::from_degrees(&[1, 3, 2]).unwrap();
        assert_eq!(stats.min, 1);
        assert_eq!(stats.max, 3);
        assert!((stats.average - 2.0).abs() < f64::EPSILON);
        assert!(DegreeStats::from_degrees(&[]).is_none());
    }

    #[test]
    fn test_top_k_is_stable() {
        let top = top_k(vec![vd("a", 1), vd("b", 3), vd("c", 3), vd("d", 2)], 3);
        assert_eq!(top, vec![vd("b", 3), vd("c", 3), vd("d", 2)]);
        assert!(top_k(vec![vd("a", 1)], 0).is_empty());
    }
}
