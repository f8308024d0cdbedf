use super::SegmentId;
use crate::model::osm::{
    dataset::{NodePath, OsmNodeId},
    DataIntegrityError,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a minimal slice of a way: none of its interior nodes is used by another
/// way or marks a stop. carries a copy of the originating way's tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmSegment {
    pub segment_id: SegmentId,
    pub nodes: NodePath,
    pub tags: HashMap<String, String>,
}

impl OsmSegment {
    pub fn new(
        segment_id: SegmentId,
        nodes: NodePath,
        tags: HashMap<String, String>,
    ) -> OsmSegment {
        OsmSegment {
            segment_id,
            nodes,
            tags,
        }
    }

    pub fn src_node_id(&self) -> Result<OsmNodeId, DataIntegrityError> {
        self.nodes
            .first()
            .cloned()
            .ok_or(DataIntegrityError::EmptySegment(self.segment_id))
    }

    pub fn dst_node_id(&self) -> Result<OsmNodeId, DataIntegrityError> {
        self.nodes
            .last()
            .cloned()
            .ok_or(DataIntegrityError::EmptySegment(self.segment_id))
    }
}
