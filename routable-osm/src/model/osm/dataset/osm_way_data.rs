use super::{OsmNodeId, OsmWayId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmWayData {
    pub osmid: OsmWayId,
    pub nodes: Vec<OsmNodeId>,
    pub tags: HashMap<String, String>,
}

impl OsmWayData {
    pub fn new(way: &osmpbf::elements::Way) -> OsmWayData {
        // consecutive repeats of a node ref carry no geometry
        let mut nodes = way.refs().map(OsmNodeId).collect_vec();
        nodes.dedup();
        if nodes.is_empty() {
            log::warn!(
                "way {} had {} nodes but after deduplication has 0",
                way.id(),
                way.refs().len()
            );
        }
        let tags = way
            .tags()
            .map(|(k, v)| (String::from(k), String::from(v.trim())))
            .collect::<HashMap<_, _>>();
        OsmWayData {
            osmid: OsmWayId(way.id()),
            nodes,
            tags,
        }
    }

    /// builds a way from its parts, used when the dataset comes from a source
    /// other than a .pbf file.
    pub fn from_parts(
        osmid: OsmWayId,
        nodes: Vec<OsmNodeId>,
        tags: HashMap<String, String>,
    ) -> OsmWayData {
        OsmWayData { osmid, nodes, tags }
    }

    /// a way with fewer than two nodes has no routable geometry.
    pub fn is_degenerate(&self) -> bool {
        self.nodes.len() < 2
    }
}
