use super::{
    assembly::{GraphSummary, RoutableGraph},
    GraphDiagnostic,
};
use crate::model::osm::dataset::{OsmRelationId, OsmWayId};

/// result of a graph build: the graph and everything that was left out of it.
#[derive(Debug, Clone)]
pub struct GraphBuildOutput {
    pub graph: RoutableGraph,
    pub diagnostics: Vec<GraphDiagnostic>,
    /// ways with fewer than two nodes
    pub dropped_ways: Vec<OsmWayId>,
    /// routes that produced no transit edges because of a data integrity error
    pub failed_routes: Vec<OsmRelationId>,
}

impl GraphBuildOutput {
    pub fn summary(&self) -> GraphSummary {
        self.graph.summary()
    }
}
