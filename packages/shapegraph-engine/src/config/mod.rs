//! Configuration
//!
//! Two tiers:
//! - Preset: `AnalysisConfig::preset(Preset::Fast)`
//! - Overrides: builder calls, or a versioned YAML file
//!
//! ```yaml
//! version: 1
//! preset: balanced
//! overrides:
//!   max_component_size: 500
//!   traversal: undirected
//!   measure_limit: null
//! ```

pub mod analysis_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use analysis_config::AnalysisConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{AnalysisOverrides, ConfigFileV1};
pub use preset::Preset;
pub use validation::Validatable;
