//! Component Features Infrastructure
//!
//! - `features`         : the predicate engine (`ComponentFeatures`)
//! - `petgraph_oracles` : default graph algorithm backend
//! - `pruning`          : depth-first leaf pruning for caterpillar/lobster

pub mod features;
pub mod petgraph_oracles;
pub mod pruning;

pub use features::ComponentFeatures;
pub use petgraph_oracles::PetgraphOracles;
pub use pruning::{dfs_leaves, prune_leaves};
