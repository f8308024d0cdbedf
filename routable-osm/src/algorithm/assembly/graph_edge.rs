use super::GraphEdgeId;
use crate::model::{
    feature::highway::Highway,
    osm::dataset::{NodePath, OsmNodeId},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a directed edge of the routable graph. `src_node_id` and `dst_node_id`
/// are the first and last node of `path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub edge_id: GraphEdgeId,
    pub src_node_id: OsmNodeId,
    pub dst_node_id: OsmNodeId,
    pub path: NodePath,
    pub highway: Highway,
    pub tags: HashMap<String, String>,
    pub length: uom::si::f64::Length,
}

impl GraphEdge {
    pub fn is_transit(&self) -> bool {
        self.edge_id.is_transit()
    }

    pub fn length_meters(&self) -> f64 {
        self.length.get::<uom::si::length::meter>()
    }
}
