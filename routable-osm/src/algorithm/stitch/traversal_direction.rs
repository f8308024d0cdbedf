use crate::model::osm::dataset::OsmNodeId;
use serde::{Deserialize, Serialize};

/// orientation in which a route walks a way member, relative to the way's node order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalDirection {
    Forward,
    Inverted,
}

impl TraversalDirection {
    /// infers the orientation of a member from the endpoint the route arrived at.
    ///
    /// # Arguments
    ///
    /// * `last_node` - far endpoint of the previous member, None for the first member
    /// * `first_node` - first node of this member in way order
    /// * `last_node_of_member` - last node of this member in way order
    ///
    /// # Returns
    ///
    /// the orientation, or None if the member shares no endpoint with the previous one.
    pub fn infer(
        last_node: Option<OsmNodeId>,
        first_node: OsmNodeId,
        last_node_of_member: OsmNodeId,
    ) -> Option<TraversalDirection> {
        match last_node {
            None => Some(TraversalDirection::Forward),
            Some(n) if n == first_node => Some(TraversalDirection::Forward),
            Some(n) if n == last_node_of_member => Some(TraversalDirection::Inverted),
            Some(_) => None,
        }
    }

    /// the endpoint the route leaves this member from.
    pub fn far_endpoint(&self, first_node: OsmNodeId, last_node: OsmNodeId) -> OsmNodeId {
        match self {
            TraversalDirection::Forward => last_node,
            TraversalDirection::Inverted => first_node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TraversalDirection as D;
    use crate::model::osm::dataset::OsmNodeId;

    #[test]
    fn test_infer() {
        let (a, b, c) = (OsmNodeId(1), OsmNodeId(2), OsmNodeId(3));
        assert_eq!(D::infer(None, a, b), Some(D::Forward));
        assert_eq!(D::infer(Some(a), a, b), Some(D::Forward));
        assert_eq!(D::infer(Some(b), a, b), Some(D::Inverted));
        assert_eq!(D::infer(Some(c), a, b), None);
        // a closed way is entered forward
        assert_eq!(D::infer(Some(a), a, a), Some(D::Forward));
    }
}
