//! Pipeline orchestration

pub mod analyzer;
pub mod report;

pub use analyzer::ShapeAnalyzer;
pub use report::{
    AnalysisReport, AnalysisStats, BagReport, ComponentSummary, DatasetSummary, MemberReport,
};
