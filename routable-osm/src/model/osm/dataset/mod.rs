mod osm_dataset;
pub mod osm_element_filter;
mod osm_node_data;
mod osm_node_id;
mod osm_relation_data;
mod osm_relation_id;
mod osm_way_data;
mod osm_way_id;

#[cfg(test)]
pub(crate) mod test_fixtures;

use indexmap::IndexMap;
pub use osm_dataset::OsmDataset;
pub use osm_node_data::OsmNodeData;
pub use osm_node_id::OsmNodeId;
pub use osm_relation_data::{MemberRef, OsmRelationData, RelationMember};
pub use osm_relation_id::OsmRelationId;
pub use osm_way_data::OsmWayData;
pub use osm_way_id::OsmWayId;

// raw tables keyed by OSMID. insertion order is preserved so that a run over the
// same input always produces the same segment ids.
pub type OsmNodes = IndexMap<OsmNodeId, OsmNodeData>;
pub type OsmWays = IndexMap<OsmWayId, OsmWayData>;
pub type OsmRelations = IndexMap<OsmRelationId, OsmRelationData>;

/// an ordered node path, shared shape of ways, segments and edges.
pub type NodePath = Vec<OsmNodeId>;
