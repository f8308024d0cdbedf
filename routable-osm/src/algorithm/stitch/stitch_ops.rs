use super::{Route, RouteStitch, TransitEdge, TraversalDirection};
use crate::{
    algorithm::{
        split::{SegmentIdGenerator, SplitResult},
        GraphDiagnostic,
    },
    model::{
        feature::route_type::RouteType,
        osm::{
            dataset::{NodePath, OsmNodeId, OsmRelationId, OsmRelations, OsmWayId},
            DataIntegrityError, OsmError,
        },
    },
};
use itertools::Itertools;
use kdam::tqdm;

/// transit edges of all stitched routes.
#[derive(Debug, Clone, Default)]
pub struct StitchResult {
    pub edges: Vec<TransitEdge>,
    pub diagnostics: Vec<GraphDiagnostic>,
    /// number of relations recognized as routes
    pub n_routes: usize,
    /// routes aborted by a data integrity error
    pub failed_routes: Vec<OsmRelationId>,
}

/// stitches every route relation of a configured type.
///
/// # Arguments
///
/// * `relations` - raw relations of the dataset, processed in insertion order
/// * `route_types` - values of the `route` tag that are turned into transit edges
/// * `split` - output of way splitting, used to resolve way members
/// * `segment_ids` - shared id source, so transit edge ids never collide with segments
/// * `ignore_invalid_routes` - if true, a route with a missing member is skipped
///   and reported. otherwise the first such route fails the whole stitch.
pub fn stitch_routes(
    relations: &OsmRelations,
    route_types: &[RouteType],
    split: &SplitResult,
    segment_ids: &mut SegmentIdGenerator,
    ignore_invalid_routes: bool,
) -> Result<StitchResult, OsmError> {
    let routes = relations
        .values()
        .filter_map(|r| Route::from_relation(r, route_types))
        .collect_vec();
    log::info!(
        "found {} route relations of type [{}]",
        routes.len(),
        route_types.iter().join(", ")
    );

    let mut result = StitchResult {
        n_routes: routes.len(),
        ..Default::default()
    };
    let route_iter = tqdm!(routes.iter(), desc = "stitching routes", total = routes.len());
    for route in route_iter {
        match stitch_route(route, split, segment_ids) {
            Ok(stitch) => {
                if !stitch.is_complete() {
                    log::debug!(
                        "route {} reached {}/{} stops ({} platforms)",
                        route.route_id,
                        stitch.stops_reached,
                        stitch.n_stops,
                        route.platforms().len()
                    );
                }
                result.edges.extend(stitch.edges);
                result.diagnostics.extend(stitch.diagnostics);
            }
            Err(error) if ignore_invalid_routes => {
                log::warn!("skipping route {}: {error}", route.route_id);
                result.failed_routes.push(route.route_id);
                result.diagnostics.push(GraphDiagnostic::RouteAborted {
                    route_id: route.route_id,
                    error,
                });
            }
            Err(error) => {
                eprintln!();
                return Err(OsmError::DataIntegrity(error));
            }
        }
    }
    eprintln!();

    log::info!(
        "stitched {} transit edges from {} routes, {} routes failed",
        result.edges.len(),
        result.n_routes,
        result.failed_routes.len()
    );
    Ok(result)
}

/// walks the way members of a route in order and cuts the traversed node
/// sequence into one transit edge per stop-to-stop interval.
///
/// the orientation of each member is inferred from the endpoint where the
/// previous member ended. a member sharing no endpoint with its predecessor
/// is reported with [`GraphDiagnostic::DisconnectedRouteMember`] and walked
/// in way order. segments before the first stop are not part of any edge.
/// once every stop has been reached the remaining members are not resolved.
/// an edge still open after the last member is kept only if it ends at the
/// stop it was heading to.
///
/// # Returns
///
/// the stitched edges, or an error if a way member cannot be resolved into
/// segments. edges of a failed route are not returned.
pub fn stitch_route(
    route: &Route,
    split: &SplitResult,
    segment_ids: &mut SegmentIdGenerator,
) -> Result<RouteStitch, DataIntegrityError> {
    let stops = route.stops();
    let referenced_by = format!("route relation {}", route.route_id);
    let mut result = RouteStitch::new(route.route_id, stops.len());

    let mut last_node: Option<OsmNodeId> = None;
    let mut last_way: Option<OsmWayId> = None;
    let mut open_edge: Option<TransitEdge> = None;
    let mut stop_index: usize = 0;

    'members: for (way_id, _) in route.traversals() {
        if stop_index >= stops.len() {
            break 'members;
        }
        let segments = split.segments_for_way(&way_id, &referenced_by)?;
        let (first_segment, last_segment) = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(DataIntegrityError::WayWithoutSegments {
                    way_id,
                    referenced_by,
                })
            }
        };
        let first_node = first_segment.src_node_id()?;
        let end_node = last_segment.dst_node_id()?;

        let direction = match TraversalDirection::infer(last_node, first_node, end_node) {
            Some(direction) => direction,
            None => {
                if let Some(previous_way_id) = last_way {
                    log::debug!(
                        "route {}: way {} is not connected to way {}",
                        route.route_id,
                        way_id,
                        previous_way_id
                    );
                    result
                        .diagnostics
                        .push(GraphDiagnostic::DisconnectedRouteMember {
                            route_id: route.route_id,
                            way_id,
                            previous_way_id,
                            edge_id: open_edge.as_ref().map(|e| e.edge_id),
                        });
                }
                TraversalDirection::Forward
            }
        };
        last_way = Some(way_id);
        last_node = Some(direction.far_endpoint(first_node, end_node));

        let paths: Vec<NodePath> = match direction {
            TraversalDirection::Forward => segments.iter().map(|s| s.nodes.clone()).collect(),
            TraversalDirection::Inverted => segments
                .iter()
                .rev()
                .map(|s| s.nodes.iter().rev().cloned().collect())
                .collect(),
        };

        for path in paths {
            let Some(target) = stops.get(stop_index) else {
                break 'members;
            };
            let starts_at_stop = path.first() == Some(target);
            open_edge = match (open_edge.take(), starts_at_stop) {
                (previous, true) => {
                    if let Some(done) = previous {
                        result.edges.push(done);
                    }
                    stop_index += 1;
                    let edge_id = segment_ids.next_transit_edge_id();
                    Some(TransitEdge::new(edge_id, route, path))
                }
                (Some(mut edge), false) => {
                    edge.extend(&path);
                    Some(edge)
                }
                (None, false) => None,
            };
        }
    }

    if let Some(edge) = open_edge {
        match stops.get(stop_index) {
            Some(target) if edge.dst_node_id().as_ref() == Some(target) => {
                result.edges.push(edge);
                stop_index += 1;
            }
            _ => log::debug!(
                "route {}: discarding unterminated transit edge {}",
                route.route_id,
                edge.edge_id
            ),
        }
    }
    result.stops_reached = stop_index;
    Ok(result)
}
