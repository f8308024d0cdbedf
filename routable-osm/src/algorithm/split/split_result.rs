use super::{OsmSegment, SegmentId};
use crate::model::osm::{dataset::OsmWayId, DataIntegrityError};
use indexmap::IndexMap;
use std::collections::HashMap;

/// segments in the order they were created.
pub type OsmSegments = IndexMap<SegmentId, OsmSegment>;
/// for each original way, the ids of its segments in path order.
pub type OldToNewLookup = HashMap<OsmWayId, Vec<SegmentId>>;

#[derive(Debug, Default, Clone)]
pub struct SplitResult {
    pub segments: OsmSegments,
    pub old_to_new: OldToNewLookup,
    /// ways removed before splitting because they had fewer than 2 nodes
    pub dropped_ways: Vec<OsmWayId>,
}

impl SplitResult {
    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    /// number of original ways that were cut into more than one segment.
    pub fn n_split_ways(&self) -> usize {
        self.old_to_new.values().filter(|s| s.len() > 1).count()
    }

    pub fn get_segment(&self, segment_id: &SegmentId) -> Result<&OsmSegment, DataIntegrityError> {
        self.segments
            .get(segment_id)
            .ok_or(DataIntegrityError::MissingSegment(*segment_id))
    }

    /// resolves an original way id into its segments, first segment first.
    ///
    /// # Arguments
    ///
    /// * `way_id` - id of the way as it appeared in the raw dataset
    /// * `referenced_by` - description of the caller, used in error messages
    pub fn segments_for_way(
        &self,
        way_id: &OsmWayId,
        referenced_by: &str,
    ) -> Result<Vec<&OsmSegment>, DataIntegrityError> {
        match self.old_to_new.get(way_id) {
            Some(segment_ids) => segment_ids.iter().map(|id| self.get_segment(id)).collect(),
            None if self.dropped_ways.contains(way_id) => {
                Err(DataIntegrityError::WayWithoutSegments {
                    way_id: *way_id,
                    referenced_by: String::from(referenced_by),
                })
            }
            None => Err(DataIntegrityError::MissingWay {
                way_id: *way_id,
                referenced_by: String::from(referenced_by),
            }),
        }
    }
}
