mod osm_segment;
mod segment_id;
mod segment_id_generator;
mod split_ops;
mod split_result;

pub use osm_segment::OsmSegment;
pub use segment_id::{SegmentId, TransitEdgeId};
pub use segment_id_generator::SegmentIdGenerator;
pub use split_ops::{build_node_histogram, slice_node_path, split_ways, NodeHistogram};
pub use split_result::{OldToNewLookup, OsmSegments, SplitResult};
