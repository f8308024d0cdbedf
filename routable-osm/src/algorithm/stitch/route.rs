use super::{RouteMember, TraversalRole};
use crate::model::{
    feature::route_type::RouteType,
    osm::dataset::{OsmNodeId, OsmRelationData, OsmRelationId, OsmWayId},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, str::FromStr};

/// a public transport route derived from a route relation. members keep the
/// relation's order, which is the order of travel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub route_id: OsmRelationId,
    pub route_type: RouteType,
    pub tags: HashMap<String, String>,
    pub members: Vec<RouteMember>,
}

impl Route {
    /// builds a route from a relation whose `route` tag is one of `route_types`.
    /// returns None for any other relation.
    pub fn from_relation(relation: &OsmRelationData, route_types: &[RouteType]) -> Option<Route> {
        let route_type = relation
            .get_tag("route")
            .and_then(|r| RouteType::from_str(r).ok())?;
        if !route_types.contains(&route_type) {
            return None;
        }
        let members = relation
            .members
            .iter()
            .filter_map(|m| {
                let resolved = RouteMember::from_relation_member(m);
                if resolved.is_none() {
                    log::debug!(
                        "relation {}: ignoring member {} with role '{}'",
                        relation.osmid,
                        m.member,
                        m.role
                    );
                }
                resolved
            })
            .collect_vec();
        Some(Route {
            route_id: relation.osmid,
            route_type,
            tags: relation.tags.clone(),
            members,
        })
    }

    /// stop positions in travel order.
    pub fn stops(&self) -> Vec<OsmNodeId> {
        self.members
            .iter()
            .filter_map(|m| match m {
                RouteMember::Stop(node_id) => Some(*node_id),
                _ => None,
            })
            .collect_vec()
    }

    pub fn platforms(&self) -> Vec<OsmNodeId> {
        self.members
            .iter()
            .filter_map(|m| match m {
                RouteMember::Platform(node_id) => Some(*node_id),
                _ => None,
            })
            .collect_vec()
    }

    /// way members the vehicle travels along, in travel order.
    pub fn traversals(&self) -> Vec<(OsmWayId, TraversalRole)> {
        self.members
            .iter()
            .filter_map(|m| match m {
                RouteMember::Traversal { way_id, role } => Some((*way_id, *role)),
                _ => None,
            })
            .collect_vec()
    }

    /// tags written onto each transit edge of this route: the relation's tags
    /// plus `highway=<route type>`.
    pub fn edge_tags(&self) -> HashMap<String, String> {
        let mut tags = self.tags.clone();
        tags.insert(
            String::from("highway"),
            self.route_type.highway().to_string(),
        );
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use crate::model::{
        feature::route_type::RouteType,
        osm::dataset::{
            test_fixtures::{route_relation, tag_map},
            MemberRef, OsmNodeId, OsmRelationData, OsmRelationId, OsmWayId, RelationMember,
        },
    };

    #[test]
    fn test_route_types() {
        let defaults = RouteType::DEFAULT_ROUTE_TYPES;
        let bus = route_relation(1, "bus", &[1, 5], &[10, 11]);
        let train = route_relation(2, "train", &[1, 5], &[10, 11]);
        let multipolygon = OsmRelationData::from_parts(
            OsmRelationId(3),
            vec![],
            tag_map(&[("type", "multipolygon")]),
        );
        assert!(Route::from_relation(&bus, &defaults).is_some());
        assert!(Route::from_relation(&train, &defaults).is_none());
        assert!(Route::from_relation(&train, &[RouteType::Train]).is_some());
        assert!(Route::from_relation(&multipolygon, &defaults).is_none());
    }

    #[test]
    fn test_members_resolved_in_order() {
        let relation = OsmRelationData::from_parts(
            OsmRelationId(1),
            vec![
                RelationMember::new(MemberRef::Node(OsmNodeId(1)), "stop_entry_only"),
                RelationMember::new(MemberRef::Node(OsmNodeId(2)), "platform"),
                RelationMember::new(MemberRef::Node(OsmNodeId(3)), "stop"),
                RelationMember::new(MemberRef::Way(OsmWayId(20)), ""),
                RelationMember::new(MemberRef::Way(OsmWayId(21)), "platform"),
                RelationMember::new(MemberRef::Way(OsmWayId(10)), "forward"),
            ],
            tag_map(&[("route", "tram"), ("ref", "4")]),
        );
        let route = Route::from_relation(&relation, &RouteType::DEFAULT_ROUTE_TYPES)
            .expect("tram route");
        assert_eq!(route.stops(), vec![OsmNodeId(1), OsmNodeId(3)]);
        assert_eq!(route.platforms(), vec![OsmNodeId(2)]);
        let ways = route.traversals().into_iter().map(|(w, _)| w).collect::<Vec<_>>();
        assert_eq!(ways, vec![OsmWayId(20), OsmWayId(10)]);
        let tags = route.edge_tags();
        assert_eq!(tags.get("highway").map(|s| s.as_str()), Some("tram"));
        assert_eq!(tags.get("ref").map(|s| s.as_str()), Some("4"));
    }
}
