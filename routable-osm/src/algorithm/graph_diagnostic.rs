use crate::{
    algorithm::{assembly::GraphEdgeId, split::TransitEdgeId},
    model::osm::{
        dataset::{OsmNodeId, OsmRelationId, OsmWayId},
        DataIntegrityError,
    },
};
use std::fmt::Display;

/// recoverable problems found while building a graph. they are returned next
/// to the graph instead of failing the build.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphDiagnostic {
    /// a way member of a route shares no endpoint with the member before it.
    /// the way was walked in its own node order. `edge_id` is the transit edge
    /// that was open at that point: its path jumps across the gap.
    DisconnectedRouteMember {
        route_id: OsmRelationId,
        way_id: OsmWayId,
        previous_way_id: OsmWayId,
        edge_id: Option<TransitEdgeId>,
    },
    /// a route could not be stitched and produced no transit edges.
    RouteAborted {
        route_id: OsmRelationId,
        error: DataIntegrityError,
    },
    /// an edge references a node without coordinates and was left out of the graph.
    MissingNodeGeometry {
        edge_id: GraphEdgeId,
        node_id: OsmNodeId,
    },
}

impl Display for GraphDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphDiagnostic::DisconnectedRouteMember {
                route_id,
                way_id,
                previous_way_id,
                edge_id,
            } => {
                write!(
                    f,
                    "relation {route_id}: way {way_id} is not connected to previous way {previous_way_id}"
                )?;
                match edge_id {
                    Some(edge_id) => write!(f, ", edge {edge_id} is not contiguous"),
                    None => Ok(()),
                }
            }
            GraphDiagnostic::RouteAborted { route_id, error } => {
                write!(f, "relation {route_id}: route aborted, {error}")
            }
            GraphDiagnostic::MissingNodeGeometry { edge_id, node_id } => {
                write!(f, "edge {edge_id}: node {node_id} has no geometry")
            }
        }
    }
}
