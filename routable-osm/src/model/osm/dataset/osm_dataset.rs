use super::{
    OsmNodeData, OsmNodeId, OsmNodes, OsmRelationData, OsmRelations, OsmWayData, OsmWayId,
    OsmWays,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// the in-memory raw dataset consumed by the graph build pipeline. all three
/// tables keep insertion order, which makes segment id assignment stable
/// for a given input.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmDataset {
    pub nodes: OsmNodes,
    pub ways: OsmWays,
    pub relations: OsmRelations,
}

impl OsmDataset {
    pub fn empty() -> OsmDataset {
        OsmDataset {
            nodes: IndexMap::new(),
            ways: IndexMap::new(),
            relations: IndexMap::new(),
        }
    }

    pub fn new(
        nodes: Vec<OsmNodeData>,
        ways: Vec<OsmWayData>,
        relations: Vec<OsmRelationData>,
    ) -> OsmDataset {
        let mut dataset = OsmDataset::empty();
        for node in nodes.into_iter() {
            dataset.insert_node(node);
        }
        for way in ways.into_iter() {
            dataset.insert_way(way);
        }
        for relation in relations.into_iter() {
            dataset.insert_relation(relation);
        }
        dataset
    }

    /// inserts a node. a repeated OSMID replaces the previous record.
    pub fn insert_node(&mut self, node: OsmNodeData) {
        if self.nodes.contains_key(&node.osmid) {
            log::warn!(
                "node with OSMID {} occurs more than once in this dataset",
                node.osmid
            );
        }
        self.nodes.insert(node.osmid, node);
    }

    pub fn insert_way(&mut self, way: OsmWayData) {
        if self.ways.contains_key(&way.osmid) {
            log::warn!(
                "way with OSMID {} occurs more than once in this dataset",
                way.osmid
            );
        }
        self.ways.insert(way.osmid, way);
    }

    pub fn insert_relation(&mut self, relation: OsmRelationData) {
        if self.relations.contains_key(&relation.osmid) {
            log::warn!(
                "relation with OSMID {} occurs more than once in this dataset",
                relation.osmid
            );
        }
        self.relations.insert(relation.osmid, relation);
    }

    /// removes nodes that are not referenced by any way. returns the number
    /// of nodes removed.
    pub fn retain_connected_nodes(&mut self) -> usize {
        let connected: HashSet<OsmNodeId> = self
            .ways
            .values()
            .flat_map(|w| w.nodes.iter().cloned())
            .collect();
        let before = self.nodes.len();
        self.nodes.retain(|id, _| connected.contains(id));
        before - self.nodes.len()
    }

    /// lists way references that cannot be resolved against the node table.
    pub fn find_missing_node_refs(&self) -> Vec<(OsmWayId, OsmNodeId)> {
        self.ways
            .values()
            .flat_map(|w| {
                w.nodes
                    .iter()
                    .filter(|n| !self.nodes.contains_key(*n))
                    .map(|n| (w.osmid, *n))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::osm::dataset::{
        test_fixtures::{node, way},
        OsmDataset, OsmNodeId, OsmWayId,
    };

    #[test]
    fn test_retain_connected_nodes() {
        let mut dataset = OsmDataset::new(
            vec![node(1, 0.0, 0.0), node(2, 0.0, 0.001), node(3, 1.0, 1.0)],
            vec![way(10, &[1, 2], &[("highway", "residential")])],
            vec![],
        );
        let removed = dataset.retain_connected_nodes();
        assert_eq!(removed, 1);
        assert!(dataset.nodes.contains_key(&OsmNodeId(1)));
        assert!(!dataset.nodes.contains_key(&OsmNodeId(3)));
    }

    #[test]
    fn test_find_missing_node_refs() {
        let dataset = OsmDataset::new(
            vec![node(1, 0.0, 0.0)],
            vec![way(10, &[1, 2], &[])],
            vec![],
        );
        let missing = dataset.find_missing_node_refs();
        assert_eq!(missing, vec![(OsmWayId(10), OsmNodeId(2))]);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let dataset = OsmDataset::new(
            vec![],
            vec![way(30, &[1, 2], &[]), way(10, &[2, 3], &[]), way(20, &[3, 4], &[])],
            vec![],
        );
        let order = dataset.ways.keys().map(|k| k.0).collect::<Vec<_>>();
        assert_eq!(order, vec![30, 10, 20]);
    }
}
