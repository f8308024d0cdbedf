//! in-memory builders for unit tests.
use super::{
    MemberRef, OsmNodeData, OsmNodeId, OsmRelationData, OsmRelationId, OsmWayData, OsmWayId,
    RelationMember,
};
use std::collections::HashMap;

pub fn node(id: i64, lon: f64, lat: f64) -> OsmNodeData {
    OsmNodeData::new(OsmNodeId(id), lon, lat)
}

pub fn stop_node(id: i64, lon: f64, lat: f64) -> OsmNodeData {
    node(id, lon, lat).with_tag("public_transport", "stop_position")
}

pub fn way(id: i64, nodes: &[i64], tags: &[(&str, &str)]) -> OsmWayData {
    OsmWayData::from_parts(
        OsmWayId(id),
        nodes.iter().map(|n| OsmNodeId(*n)).collect(),
        tag_map(tags),
    )
}

pub fn road(id: i64, nodes: &[i64]) -> OsmWayData {
    way(id, nodes, &[("highway", "residential")])
}

/// a route relation of the given type with stop node members followed by
/// way members, the way OSM PTv2 routes are ordered.
pub fn route_relation(id: i64, route: &str, stops: &[i64], ways: &[i64]) -> OsmRelationData {
    let stop_members = stops
        .iter()
        .map(|n| RelationMember::new(MemberRef::Node(OsmNodeId(*n)), "stop"));
    let way_members = ways
        .iter()
        .map(|w| RelationMember::new(MemberRef::Way(OsmWayId(*w)), ""));
    OsmRelationData::from_parts(
        OsmRelationId(id),
        stop_members.chain(way_members).collect(),
        tag_map(&[("type", "route"), ("route", route), ("name", "line")]),
    )
}

/// a straight line of nodes with ids `first..=last`, spaced ~111m apart along a meridian.
pub fn node_line(first: i64, last: i64) -> Vec<OsmNodeData> {
    (first..=last)
        .map(|id| node(id, 0.0, (id - first) as f64 * 0.001))
        .collect()
}

pub fn tag_map(tags: &[(&str, &str)]) -> HashMap<String, String> {
    tags.iter()
        .map(|(k, v)| (String::from(*k), String::from(*v)))
        .collect()
}
