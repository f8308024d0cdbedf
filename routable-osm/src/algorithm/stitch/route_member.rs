use crate::model::osm::dataset::{MemberRef, OsmNodeId, OsmWayId, RelationMember};
use serde::{Deserialize, Serialize};

/// role of a way member that the vehicle travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalRole {
    Forward,
    Backward,
    Unspecified,
}

/// a route relation member, resolved once from its (type, role) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteMember {
    Stop(OsmNodeId),
    Platform(OsmNodeId),
    Traversal { way_id: OsmWayId, role: TraversalRole },
}

impl RouteMember {
    /// interprets a raw relation member following the PTv2 role scheme:
    /// - node members whose role starts with `stop` (`stop`, `stop_entry_only`,
    ///   `stop:2`, ..) are stops
    /// - node members whose role starts with `platform` are platforms
    /// - way members with role `forward`, `backward` or an empty role are traversed
    ///
    /// anything else (platform ways, nested relations) returns None.
    pub fn from_relation_member(member: &RelationMember) -> Option<RouteMember> {
        let role = member.role.as_str();
        match member.member {
            MemberRef::Node(node_id) if role.starts_with("stop") => {
                Some(RouteMember::Stop(node_id))
            }
            MemberRef::Node(node_id) if role.starts_with("platform") => {
                Some(RouteMember::Platform(node_id))
            }
            MemberRef::Way(way_id) => {
                let role = match role {
                    "" => TraversalRole::Unspecified,
                    "forward" => TraversalRole::Forward,
                    "backward" => TraversalRole::Backward,
                    _ => return None,
                };
                Some(RouteMember::Traversal { way_id, role })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteMember, TraversalRole};
    use crate::model::osm::dataset::{
        MemberRef, OsmNodeId, OsmRelationId, OsmWayId, RelationMember,
    };

    fn resolve(member: MemberRef, role: &str) -> Option<RouteMember> {
        RouteMember::from_relation_member(&RelationMember::new(member, role))
    }

    #[test]
    fn test_node_roles() {
        let n = MemberRef::Node(OsmNodeId(1));
        assert_eq!(resolve(n, "stop"), Some(RouteMember::Stop(OsmNodeId(1))));
        assert_eq!(
            resolve(n, "stop_exit_only"),
            Some(RouteMember::Stop(OsmNodeId(1)))
        );
        assert_eq!(resolve(n, "stop:1"), Some(RouteMember::Stop(OsmNodeId(1))));
        assert_eq!(
            resolve(n, "platform_entry_only"),
            Some(RouteMember::Platform(OsmNodeId(1)))
        );
        assert_eq!(resolve(n, ""), None);
    }

    #[test]
    fn test_way_roles() {
        let w = MemberRef::Way(OsmWayId(5));
        assert_eq!(
            resolve(w, ""),
            Some(RouteMember::Traversal {
                way_id: OsmWayId(5),
                role: TraversalRole::Unspecified
            })
        );
        assert_eq!(
            resolve(w, "backward"),
            Some(RouteMember::Traversal {
                way_id: OsmWayId(5),
                role: TraversalRole::Backward
            })
        );
        assert_eq!(resolve(w, "platform"), None);
        assert_eq!(resolve(MemberRef::Relation(OsmRelationId(9)), ""), None);
    }
}
