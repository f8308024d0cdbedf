use super::{AdjacencyDirection as Dir, GraphEdge, GraphEdgeId, GraphSummary};
use crate::model::osm::dataset::OsmNodeId;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// edge ids incident to a vertex, keyed by vertex and side.
pub type AdjacencyIndex = HashMap<(OsmNodeId, Dir), Vec<GraphEdgeId>>;

/// the routable graph: a directed multigraph whose vertices are the node ids
/// found at edge endpoints. parallel edges between the same pair of vertices
/// are kept.
#[derive(Default, Debug, Clone)]
pub struct RoutableGraph {
    edges: IndexMap<GraphEdgeId, GraphEdge>,
    adj: AdjacencyIndex,
}

impl RoutableGraph {
    pub fn empty() -> RoutableGraph {
        RoutableGraph {
            edges: IndexMap::new(),
            adj: HashMap::new(),
        }
    }

    /// adds an edge and indexes it at both endpoints. an edge whose id is
    /// already present is ignored.
    pub fn insert_edge(&mut self, edge: GraphEdge) {
        if self.edges.contains_key(&edge.edge_id) {
            log::warn!("edge {} already in graph, ignoring duplicate", edge.edge_id);
            return;
        }
        self.adj
            .entry((edge.src_node_id, Dir::Forward))
            .or_default()
            .push(edge.edge_id);
        self.adj
            .entry((edge.dst_node_id, Dir::Reverse))
            .or_default()
            .push(edge.edge_id);
        self.edges.insert(edge.edge_id, edge);
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_vertices(&self) -> usize {
        self.vertex_ids().len()
    }

    /// edges in insertion order: road edges first, then transit edges.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.values()
    }

    pub fn get_edge(&self, edge_id: &GraphEdgeId) -> Option<&GraphEdge> {
        self.edges.get(edge_id)
    }

    /// vertex ids in the order they are first seen at an edge endpoint,
    /// visiting edges in insertion order and each edge's source before its
    /// destination.
    pub fn vertex_ids(&self) -> Vec<OsmNodeId> {
        let mut seen: HashSet<OsmNodeId> = HashSet::new();
        let mut vertices = vec![];
        for edge in self.edges.values() {
            for node_id in [edge.src_node_id, edge.dst_node_id] {
                if seen.insert(node_id) {
                    vertices.push(node_id);
                }
            }
        }
        vertices
    }

    /// ids of the edges leaving (`Forward`) or entering (`Reverse`) a vertex.
    pub fn adjacencies(&self, node_id: &OsmNodeId, direction: Dir) -> &[GraphEdgeId] {
        self.adj
            .get(&(*node_id, direction))
            .map(|e| e.as_slice())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> GraphSummary {
        let n_transit_edges = self.edges.values().filter(|e| e.is_transit()).count();
        GraphSummary {
            n_vertices: self.n_vertices(),
            n_edges: self.n_edges(),
            n_road_edges: self.n_edges() - n_transit_edges,
            n_transit_edges,
            total_length_meters: self.edges.values().map(|e| e.length_meters()).sum(),
        }
    }
}
