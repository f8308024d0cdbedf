use super::{OsmNodeId, OsmRelationId, OsmWayId};
use crate::model::osm::OsmError;
use osmpbf::RelMemberType;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

/// the typed reference held by a relation member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "ref")]
pub enum MemberRef {
    Node(OsmNodeId),
    Way(OsmWayId),
    Relation(OsmRelationId),
}

impl Display for MemberRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRef::Node(id) => write!(f, "node {id}"),
            MemberRef::Way(id) => write!(f, "way {id}"),
            MemberRef::Relation(id) => write!(f, "relation {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMember {
    pub member: MemberRef,
    pub role: String,
}

impl RelationMember {
    pub fn new(member: MemberRef, role: &str) -> RelationMember {
        RelationMember {
            member,
            role: String::from(role),
        }
    }
}

/// an OSM relation. the order of `members` is meaningful: for route relations
/// it is the order of travel.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmRelationData {
    pub osmid: OsmRelationId,
    pub members: Vec<RelationMember>,
    pub tags: HashMap<String, String>,
}

impl OsmRelationData {
    pub fn new(relation: &osmpbf::elements::Relation) -> Result<OsmRelationData, OsmError> {
        let members = relation
            .members()
            .map(|m| {
                let role = m.role().map_err(|e| {
                    OsmError::InvalidOsmData(format!(
                        "relation {} has a member with an undecodable role: {e}",
                        relation.id()
                    ))
                })?;
                let member = match m.member_type {
                    RelMemberType::Node => MemberRef::Node(OsmNodeId(m.member_id)),
                    RelMemberType::Way => MemberRef::Way(OsmWayId(m.member_id)),
                    RelMemberType::Relation => MemberRef::Relation(OsmRelationId(m.member_id)),
                };
                Ok(RelationMember::new(member, role.trim()))
            })
            .collect::<Result<Vec<_>, OsmError>>()?;
        let tags = relation
            .tags()
            .map(|(k, v)| (String::from(k), String::from(v.trim())))
            .collect::<HashMap<_, _>>();
        Ok(OsmRelationData {
            osmid: OsmRelationId(relation.id()),
            members,
            tags,
        })
    }

    pub fn from_parts(
        osmid: OsmRelationId,
        members: Vec<RelationMember>,
        tags: HashMap<String, String>,
    ) -> OsmRelationData {
        OsmRelationData {
            osmid,
            members,
            tags,
        }
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }
}

impl TryFrom<&osmpbf::elements::Relation<'_>> for OsmRelationData {
    type Error = OsmError;

    fn try_from(value: &osmpbf::elements::Relation<'_>) -> Result<Self, Self::Error> {
        OsmRelationData::new(value)
    }
}
