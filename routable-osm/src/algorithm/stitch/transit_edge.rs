use super::Route;
use crate::{
    algorithm::split::TransitEdgeId,
    model::osm::dataset::{NodePath, OsmNodeId, OsmRelationId},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// an edge spanning one stop-to-stop interval of a route, possibly made of
/// several segments. travel is only allowed in path order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEdge {
    pub edge_id: TransitEdgeId,
    pub route_id: OsmRelationId,
    pub nodes: NodePath,
    pub tags: HashMap<String, String>,
}

impl TransitEdge {
    pub fn new(edge_id: TransitEdgeId, route: &Route, nodes: NodePath) -> TransitEdge {
        TransitEdge {
            edge_id,
            route_id: route.route_id,
            nodes,
            tags: route.edge_tags(),
        }
    }

    /// appends the path of the next segment. the node shared with the current
    /// end of the edge is not repeated.
    pub fn extend(&mut self, nodes: &[OsmNodeId]) {
        match (self.nodes.last(), nodes.first()) {
            (Some(last), Some(first)) if last == first => {
                self.nodes.extend(nodes.iter().skip(1))
            }
            _ => self.nodes.extend(nodes.iter()),
        }
    }

    pub fn dst_node_id(&self) -> Option<OsmNodeId> {
        self.nodes.last().cloned()
    }
}
