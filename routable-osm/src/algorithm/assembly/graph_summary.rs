use serde::{Deserialize, Serialize};

/// counts describing a built graph, printed by the command line tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub n_vertices: usize,
    pub n_edges: usize,
    pub n_road_edges: usize,
    pub n_transit_edges: usize,
    pub total_length_meters: f64,
}
