//! Shape classification flags and families

use serde::Serialize;
use std::fmt;

/// Every shape predicate of a component, evaluated once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ShapeFlags {
    pub singleton: bool,
    pub tree: bool,
    pub path: bool,
    pub directed_path: bool,
    pub outbound_star: bool,
    pub inbound_star: bool,
    pub mixed_star: bool,
    pub caterpillar: bool,
    pub lobster: bool,
    pub bipartite: bool,
    pub complete: bool,
}

impl ShapeFlags {
    /// Most specific family these flags describe
    pub fn family(&self) -> ShapeFamily {
        ShapeFamily::from_flags(self)
    }
}

/// Topological family of a component.
///
/// Families overlap (a two-vertex path is also complete and a star), so a
/// component is assigned the first matching family in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    Singleton,
    DirectedPath,
    Path,
    OutboundStar,
    InboundStar,
    MixedStar,
    Caterpillar,
    Lobster,
    Tree,
    Complete,
    Bipartite,
    Cyclic,
}

impl ShapeFamily {
    pub fn from_flags(flags: &ShapeFlags) -> Self {
        if flags.singleton {
            ShapeFamily::Singleton
        } else if flags.directed_path {
            ShapeFamily::DirectedPath
        } else if flags.path {
            ShapeFamily::Path
        } else if flags.outbound_star {
            ShapeFamily::OutboundStar
        } else if flags.inbound_star {
            ShapeFamily::InboundStar
        } else if flags.mixed_star {
            ShapeFamily::MixedStar
        } else if flags.caterpillar {
            ShapeFamily::Caterpillar
        } else if flags.lobster {
            ShapeFamily::Lobster
        } else if flags.tree {
            ShapeFamily::Tree
        } else if flags.complete {
            ShapeFamily::Complete
        } else if flags.bipartite {
            ShapeFamily::Bipartite
        } else {
            ShapeFamily::Cyclic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeFamily::Singleton => "singleton",
            ShapeFamily::DirectedPath => "directed_path",
            ShapeFamily::Path => "path",
            ShapeFamily::OutboundStar => "outbound_star",
            ShapeFamily::InboundStar => "inbound_star",
            ShapeFamily::MixedStar => "mixed_star",
            ShapeFamily::Caterpillar => "caterpillar",
            ShapeFamily::Lobster => "lobster",
            ShapeFamily::Tree => "tree",
            ShapeFamily::Complete => "complete",
            ShapeFamily::Bipartite => "bipartite",
            ShapeFamily::Cyclic => "cyclic",
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
