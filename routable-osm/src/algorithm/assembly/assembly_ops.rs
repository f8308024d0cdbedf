use super::{GraphEdge, GraphEdgeId, HighwayFilter, RoutableGraph};
use crate::{
    algorithm::{split::OsmSegments, stitch::TransitEdge, GraphDiagnostic},
    model::{
        feature::highway::Highway,
        osm::dataset::{NodePath, OsmNodeId, OsmNodes},
    },
};
use geo::{Haversine, Length, LineString};
use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;
use std::{collections::HashMap, str::FromStr};

pub struct AssemblyResult {
    pub graph: RoutableGraph,
    pub diagnostics: Vec<GraphDiagnostic>,
}

/// a segment or transit edge that may become a graph edge.
struct EdgeCandidate<'a> {
    edge_id: GraphEdgeId,
    path: &'a NodePath,
    tags: &'a HashMap<String, String>,
}

enum EdgeOutcome {
    Accepted(GraphEdge),
    Filtered,
    MissingNode(OsmNodeId),
}

/// builds the routable graph from split segments and stitched transit edges.
///
/// # Arguments
///
/// * `segments` - road segments, become [`GraphEdgeId::Segment`] edges
/// * `transit_edges` - stitched route edges, become [`GraphEdgeId::Transit`] edges
/// * `nodes` - node store used to compute edge lengths
/// * `filter` - highway classes to keep. candidates without a highway tag are
///   never kept
/// * `parallelize` - compute edges on the rayon pool
///
/// # Returns
///
/// the graph plus a [`GraphDiagnostic::MissingNodeGeometry`] for each edge
/// left out because one of its nodes has no coordinates.
pub fn assemble_graph(
    segments: &OsmSegments,
    transit_edges: &[TransitEdge],
    nodes: &OsmNodes,
    filter: &HighwayFilter,
    parallelize: bool,
) -> AssemblyResult {
    let candidates = segments
        .values()
        .map(|s| EdgeCandidate {
            edge_id: GraphEdgeId::Segment(s.segment_id),
            path: &s.nodes,
            tags: &s.tags,
        })
        .chain(transit_edges.iter().map(|t| EdgeCandidate {
            edge_id: GraphEdgeId::Transit(t.edge_id),
            path: &t.nodes,
            tags: &t.tags,
        }))
        .collect_vec();

    let outcomes: Vec<EdgeOutcome> = if parallelize {
        candidates
            .par_iter()
            .map(|c| build_edge(c, nodes, filter))
            .collect()
    } else {
        let iter = tqdm!(
            candidates.iter(),
            desc = "assembling edges",
            total = candidates.len()
        );
        let result = iter.map(|c| build_edge(c, nodes, filter)).collect();
        eprintln!();
        result
    };

    let mut graph = RoutableGraph::empty();
    let mut diagnostics = vec![];
    let mut n_filtered = 0;
    for (candidate, outcome) in candidates.iter().zip(outcomes) {
        match outcome {
            EdgeOutcome::Accepted(edge) => graph.insert_edge(edge),
            EdgeOutcome::Filtered => n_filtered += 1,
            EdgeOutcome::MissingNode(node_id) => {
                log::warn!(
                    "edge {} references node {} which is missing from the dataset",
                    candidate.edge_id,
                    node_id
                );
                diagnostics.push(GraphDiagnostic::MissingNodeGeometry {
                    edge_id: candidate.edge_id,
                    node_id,
                });
            }
        }
    }
    log::info!(
        "assembled graph with {} edges over {} vertices ({} candidates filtered, {} missing geometry)",
        graph.n_edges(),
        graph.n_vertices(),
        n_filtered,
        diagnostics.len()
    );
    AssemblyResult { graph, diagnostics }
}

/// cumulative haversine distance along a linestring.
pub fn edge_length(linestring: &LineString<f64>) -> uom::si::f64::Length {
    uom::si::f64::Length::new::<uom::si::length::meter>(Haversine.length(linestring))
}

fn build_edge(candidate: &EdgeCandidate, nodes: &OsmNodes, filter: &HighwayFilter) -> EdgeOutcome {
    let highway = match candidate.tags.get("highway").map(|h| Highway::from_str(h)) {
        Some(Ok(highway)) => highway,
        Some(Err(e)) => {
            log::debug!("edge {} has an invalid highway tag: {e}", candidate.edge_id);
            return EdgeOutcome::Filtered;
        }
        None => return EdgeOutcome::Filtered,
    };
    if !filter.accept(&highway) {
        return EdgeOutcome::Filtered;
    }
    let (src_node_id, dst_node_id) = match (candidate.path.first(), candidate.path.last()) {
        (Some(src), Some(dst)) => (*src, *dst),
        _ => return EdgeOutcome::Filtered,
    };
    let coords = candidate
        .path
        .iter()
        .map(|n| nodes.get(n).map(|data| data.get_coord()).ok_or(*n))
        .collect::<Result<Vec<_>, _>>();
    let linestring = match coords {
        Ok(coords) => LineString::new(coords),
        Err(node_id) => return EdgeOutcome::MissingNode(node_id),
    };
    EdgeOutcome::Accepted(GraphEdge {
        edge_id: candidate.edge_id,
        src_node_id,
        dst_node_id,
        path: candidate.path.clone(),
        highway,
        tags: candidate.tags.clone(),
        length: edge_length(&linestring),
    })
}

#[cfg(test)]
mod tests {
    use super::assemble_graph;
    use crate::{
        algorithm::{
            assembly::{AdjacencyDirection, GraphEdgeId, HighwayFilter},
            split::{split_ways, SegmentId, SegmentIdGenerator, SplitResult, TransitEdgeId},
            stitch::{Route, TransitEdge},
            GraphDiagnostic,
        },
        model::{
            feature::{highway::Highway, route_type::RouteType},
            osm::dataset::{
                test_fixtures::{node_line, road, route_relation, way},
                OsmDataset, OsmNodeId, OsmWayData, OsmWayId,
            },
        },
    };
    use std::collections::HashSet;

    fn split(dataset: &OsmDataset) -> SplitResult {
        let mut segment_ids = SegmentIdGenerator::new();
        split_ways(
            &dataset.ways,
            &dataset.nodes,
            false,
            &mut segment_ids,
            false,
        )
    }

    fn dataset(ways: Vec<OsmWayData>) -> OsmDataset {
        OsmDataset::new(node_line(1, 9), ways, vec![])
    }

    #[test]
    fn test_filters_segments_without_highway() {
        let dataset = dataset(vec![
            road(10, &[1, 2, 3]),
            way(11, &[3, 4, 5], &[("railway", "tram")]),
        ]);
        let result = split(&dataset);
        let assembled = assemble_graph(
            &result.segments,
            &[],
            &dataset.nodes,
            &HighwayFilter::AnyHighway,
            false,
        );
        assert_eq!(assembled.graph.n_edges(), 1);
        assert!(assembled.diagnostics.is_empty());
        let edge = assembled
            .graph
            .edges()
            .next()
            .expect("one edge in the graph");
        assert_eq!(edge.edge_id, GraphEdgeId::Segment(SegmentId::new(OsmWayId(10), 0)));
        assert_eq!(edge.src_node_id, OsmNodeId(1));
        assert_eq!(edge.dst_node_id, OsmNodeId(3));
        assert_eq!(edge.highway, Highway::Residential);
    }

    #[test]
    fn test_haversine_length() {
        let dataset = dataset(vec![road(10, &[1, 2, 3])]);
        let result = split(&dataset);
        let assembled = assemble_graph(
            &result.segments,
            &[],
            &dataset.nodes,
            &HighwayFilter::default(),
            false,
        );
        let edge = assembled.graph.edges().next().expect("one edge");
        // two steps of 0.001 degrees of latitude
        let expected = 2.0 * 111.195;
        assert!(
            (edge.length_meters() - expected).abs() < 0.5,
            "expected ~{expected}m, found {}m",
            edge.length_meters()
        );
    }

    #[test]
    fn test_highway_tags_filter() {
        let dataset = dataset(vec![
            road(10, &[1, 2, 3]),
            way(11, &[3, 4, 5], &[("highway", "primary")]),
        ]);
        let result = split(&dataset);
        let filter = HighwayFilter::HighwayTags {
            tags: HashSet::from([Highway::Primary]),
        };
        let assembled = assemble_graph(&result.segments, &[], &dataset.nodes, &filter, false);
        assert_eq!(assembled.graph.n_edges(), 1);
        let edge = assembled.graph.edges().next().expect("one edge");
        assert_eq!(edge.highway, Highway::Primary);
    }

    #[test]
    fn test_missing_node_is_reported() {
        let dataset = dataset(vec![road(10, &[1, 2, 3]), road(11, &[3, 4, 42])]);
        let result = split(&dataset);
        let assembled = assemble_graph(
            &result.segments,
            &[],
            &dataset.nodes,
            &HighwayFilter::default(),
            false,
        );
        assert_eq!(assembled.graph.n_edges(), 1);
        match assembled.diagnostics.as_slice() {
            [GraphDiagnostic::MissingNodeGeometry { node_id, .. }] => {
                assert_eq!(*node_id, OsmNodeId(42))
            }
            other => panic!("unexpected diagnostics {other:?}"),
        }
    }

    #[test]
    fn test_transit_edges_and_adjacency() {
        let dataset = dataset(vec![road(10, &[1, 2, 3]), road(11, &[3, 4, 5])]);
        let result = split(&dataset);
        let relation = route_relation(100, "bus", &[1, 5], &[10, 11]);
        let route = Route::from_relation(&relation, &RouteType::DEFAULT_ROUTE_TYPES)
            .expect("bus route");
        let transit = TransitEdge::new(
            TransitEdgeId(100),
            &route,
            (1..=5).map(OsmNodeId).collect(),
        );
        let assembled = assemble_graph(
            &result.segments,
            &[transit],
            &dataset.nodes,
            &HighwayFilter::default(),
            false,
        );
        let graph = &assembled.graph;
        assert_eq!(graph.n_edges(), 3);
        assert_eq!(
            graph.vertex_ids(),
            vec![OsmNodeId(1), OsmNodeId(3), OsmNodeId(5)]
        );

        let out_of_1 = graph.adjacencies(&OsmNodeId(1), AdjacencyDirection::Forward);
        assert_eq!(out_of_1.len(), 2);
        assert!(out_of_1.contains(&GraphEdgeId::Transit(TransitEdgeId(100))));
        assert!(graph
            .adjacencies(&OsmNodeId(1), AdjacencyDirection::Reverse)
            .is_empty());
        assert_eq!(
            graph
                .adjacencies(&OsmNodeId(5), AdjacencyDirection::Reverse)
                .len(),
            2
        );

        let transit_edge = graph
            .get_edge(&GraphEdgeId::Transit(TransitEdgeId(100)))
            .expect("transit edge in graph");
        assert_eq!(transit_edge.highway, Highway::Bus);

        let summary = graph.summary();
        assert_eq!(summary.n_vertices, 3);
        assert_eq!(summary.n_road_edges, 2);
        assert_eq!(summary.n_transit_edges, 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dataset = dataset(vec![
            road(10, &[1, 2, 3, 4]),
            road(11, &[2, 5, 6]),
            road(12, &[6, 7, 8, 9]),
        ]);
        let result = split(&dataset);
        let filter = HighwayFilter::default();
        let sequential = assemble_graph(&result.segments, &[], &dataset.nodes, &filter, false);
        let parallel = assemble_graph(&result.segments, &[], &dataset.nodes, &filter, true);
        let ids = |r: &super::AssemblyResult| r.graph.edges().map(|e| e.edge_id).collect::<Vec<_>>();
        assert_eq!(ids(&sequential), ids(&parallel));
        assert_eq!(sequential.graph.summary(), parallel.graph.summary());
    }
}
