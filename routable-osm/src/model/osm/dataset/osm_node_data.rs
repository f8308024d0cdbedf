use geo::Coord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::OsmNodeId;

/// represents a raw OSM node. node data is loaded once and never modified
/// while a graph is built; ways, segments and edges refer to it by [`OsmNodeId`].
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct OsmNodeData {
    pub osmid: OsmNodeId,
    pub lon: f64,
    pub lat: f64,
    pub tags: HashMap<String, String>,
}

impl OsmNodeData {
    pub fn new(osmid: OsmNodeId, lon: f64, lat: f64) -> OsmNodeData {
        OsmNodeData {
            osmid,
            lon,
            lat,
            tags: HashMap::new(),
        }
    }

    /// builder-style helper to attach a tag to this node.
    pub fn with_tag(mut self, key: &str, value: &str) -> OsmNodeData {
        self.tags.insert(String::from(key), String::from(value));
        self
    }

    pub fn get_tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(|v| v.as_str())
    }

    /// true if the tag `key` is present with exactly the value `value`.
    pub fn check_tag(&self, key: &str, value: &str) -> bool {
        self.get_tag(key) == Some(value)
    }

    /// a stop position is where a transit vehicle halts along its route. see
    /// https://wiki.openstreetmap.org/wiki/Tag:public_transport%3Dstop_position
    /// tram stops tagged with the older `railway=tram_stop` scheme are accepted too.
    pub fn is_stop_position(&self) -> bool {
        self.check_tag("public_transport", "stop_position")
            || self.check_tag("railway", "tram_stop")
    }

    pub fn get_coord(&self) -> Coord<f64> {
        Coord::from((self.lon, self.lat))
    }
}

impl From<&osmpbf::elements::Node<'_>> for OsmNodeData {
    fn from(node: &osmpbf::elements::Node) -> Self {
        let mut out = OsmNodeData::new(OsmNodeId(node.id()), node.lon(), node.lat());
        for (k, v) in node.tags() {
            out.tags.insert(String::from(k), String::from(v.trim()));
        }
        out
    }
}

impl From<&osmpbf::dense::DenseNode<'_>> for OsmNodeData {
    fn from(node: &osmpbf::dense::DenseNode<'_>) -> Self {
        let mut out = OsmNodeData::new(OsmNodeId(node.id()), node.lon(), node.lat());
        for (k, v) in node.tags() {
            out.tags.insert(String::from(k), String::from(v.trim()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::OsmNodeData;
    use crate::model::osm::dataset::OsmNodeId;

    #[test]
    fn test_stop_position_tags() {
        let plain = OsmNodeData::new(OsmNodeId(1), 0.0, 0.0);
        let stop = OsmNodeData::new(OsmNodeId(2), 0.0, 0.0)
            .with_tag("public_transport", "stop_position");
        let tram = OsmNodeData::new(OsmNodeId(3), 0.0, 0.0).with_tag("railway", "tram_stop");
        let platform =
            OsmNodeData::new(OsmNodeId(4), 0.0, 0.0).with_tag("public_transport", "platform");
        assert!(!plain.is_stop_position());
        assert!(stop.is_stop_position());
        assert!(tram.is_stop_position());
        assert!(
            !platform.is_stop_position(),
            "platforms are not on the vehicle path and must not split ways"
        );
    }
}
