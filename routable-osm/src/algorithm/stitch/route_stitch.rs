use super::TransitEdge;
use crate::{algorithm::GraphDiagnostic, model::osm::dataset::OsmRelationId};

/// outcome of stitching a single route.
#[derive(Debug, Clone)]
pub struct RouteStitch {
    pub route_id: OsmRelationId,
    pub edges: Vec<TransitEdge>,
    pub diagnostics: Vec<GraphDiagnostic>,
    /// number of stops on the route
    pub n_stops: usize,
    /// number of stops that opened or closed an emitted edge
    pub stops_reached: usize,
}

impl RouteStitch {
    pub fn new(route_id: OsmRelationId, n_stops: usize) -> RouteStitch {
        RouteStitch {
            route_id,
            edges: vec![],
            diagnostics: vec![],
            n_stops,
            stops_reached: 0,
        }
    }

    /// true if every stop of the route was reached.
    pub fn is_complete(&self) -> bool {
        self.stops_reached == self.n_stops
    }
}
