use crate::model::feature::highway::Highway;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// decides which highway classes become graph edges. applies to road
/// segments and transit edges alike; transit edges are classified as
/// [`Highway::Bus`] or [`Highway::Tram`].
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum HighwayFilter {
    #[default]
    AnyHighway,
    HighwayTags {
        tags: HashSet<Highway>,
    },
}

impl HighwayFilter {
    pub fn accept(&self, highway: &Highway) -> bool {
        match self {
            HighwayFilter::AnyHighway => true,
            HighwayFilter::HighwayTags { tags } => tags.contains(highway),
        }
    }
}
