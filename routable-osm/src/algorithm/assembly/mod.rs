mod adjacency_direction;
mod assembly_ops;
mod graph_edge;
mod graph_edge_id;
mod graph_summary;
mod highway_filter;
mod routable_graph;

pub use adjacency_direction::AdjacencyDirection;
pub use assembly_ops::{assemble_graph, edge_length, AssemblyResult};
pub use graph_edge::GraphEdge;
pub use graph_edge_id::GraphEdgeId;
pub use graph_summary::GraphSummary;
pub use highway_filter::HighwayFilter;
pub use routable_graph::{AdjacencyIndex, RoutableGraph};
