use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of an OSM relation. route relations keep this id as their route id.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct OsmRelationId(pub i64);

impl Display for OsmRelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OsmRelationId {
    fn from(value: i64) -> Self {
        OsmRelationId(value)
    }
}
