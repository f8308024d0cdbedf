use crate::algorithm::split::{SegmentId, TransitEdgeId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphEdgeId {
    /// a road edge, one per segment
    Segment(SegmentId),
    /// a stop-to-stop edge of a route
    Transit(TransitEdgeId),
}

impl GraphEdgeId {
    pub fn is_transit(&self) -> bool {
        matches!(self, GraphEdgeId::Transit(_))
    }
}

impl Display for GraphEdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphEdgeId::Segment(id) => write!(f, "{id}"),
            GraphEdgeId::Transit(id) => write!(f, "{id}"),
        }
    }
}

impl From<SegmentId> for GraphEdgeId {
    fn from(value: SegmentId) -> Self {
        GraphEdgeId::Segment(value)
    }
}

impl From<TransitEdgeId> for GraphEdgeId {
    fn from(value: TransitEdgeId) -> Self {
        GraphEdgeId::Transit(value)
    }
}
