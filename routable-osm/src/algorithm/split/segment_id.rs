use crate::model::osm::dataset::OsmWayId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifies a segment produced by splitting a way: the original way id plus
/// an index drawn from the run-wide [`super::SegmentIdGenerator`]. the index
/// alone is unique across the run.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct SegmentId {
    pub way_id: OsmWayId,
    pub index: u64,
}

impl SegmentId {
    pub fn new(way_id: OsmWayId, index: u64) -> SegmentId {
        SegmentId { way_id, index }
    }
}

impl Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.way_id, self.index)
    }
}

/// identifies a transit edge synthesized by the route stitcher. drawn from the
/// same generator as segment indices, so the two never collide.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct TransitEdgeId(pub u64);

impl Display for TransitEdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transit-{}", self.0)
    }
}
