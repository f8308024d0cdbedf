use super::dataset::OsmWayId;
use crate::algorithm::split::SegmentId;
use thiserror::Error;

/// an id lookup failed while stitching a route. these abort only the route
/// that made the reference, never the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    #[error("{referenced_by} references way '{way_id}' which is not in the dataset")]
    MissingWay {
        way_id: OsmWayId,
        referenced_by: String,
    },
    #[error("{referenced_by} references way '{way_id}' which was dropped before splitting (fewer than 2 nodes)")]
    WayWithoutSegments {
        way_id: OsmWayId,
        referenced_by: String,
    },
    #[error("split index references segment '{0}' which does not exist")]
    MissingSegment(SegmentId),
    #[error("segment '{0}' has no nodes")]
    EmptySegment(SegmentId),
}
