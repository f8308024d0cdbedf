use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// which networks a graph is built for.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    /// road edges only. ways are split at shared nodes.
    #[default]
    RoadsOnly,
    /// road edges plus stop-to-stop transit edges. ways are also split at
    /// stop positions so that every stop becomes a vertex.
    RoadsAndTransit,
}

impl BuildMode {
    pub fn count_stop_nodes(&self) -> bool {
        matches!(self, BuildMode::RoadsAndTransit)
    }

    pub fn stitch_routes(&self) -> bool {
        matches!(self, BuildMode::RoadsAndTransit)
    }
}

impl Display for BuildMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildMode::RoadsOnly => write!(f, "roads_only"),
            BuildMode::RoadsAndTransit => write!(f, "roads_and_transit"),
        }
    }
}
