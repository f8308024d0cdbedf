use crate::model::feature::highway::Highway;
use osmpbf::{Element, Way};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, str::FromStr};

/// filters ways while reading a .pbf source. nodes and relations always pass,
/// since stop positions and route relations are needed regardless of the
/// road classes kept.
#[derive(Default, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ElementFilter {
    #[default]
    NoFilter,
    /// keeps ways with any highway tag. note that tram tracks usually carry
    /// only a railway tag and are removed by this filter.
    AnyHighway,
    HighwayTags {
        tags: HashSet<Highway>,
    },
}

impl ElementFilter {
    pub fn accept(&self, element: &Element) -> bool {
        use ElementFilter as F;
        match element {
            Element::Way(way) => match self {
                F::NoFilter => true,
                F::AnyHighway => get_highway_tag(way).is_some(),
                F::HighwayTags { tags } => custom_highway_tag_filter(way, tags),
            },
            _ => true,
        }
    }

    pub fn is_no_filter(&self) -> bool {
        matches!(self, ElementFilter::NoFilter)
    }
}

/// filters ways that do not have a highway tag present in the tags argument.
///
/// # Arguments
///
/// * `way` - OSM way to test filtering
/// * `tags` - list of [`Highway`] tags that are accepted
///
/// # Returns
///
/// true if the [`Way`] has a [`Highway`] tag found in `tags`
fn custom_highway_tag_filter(way: &Way<'_>, tags: &HashSet<Highway>) -> bool {
    match get_highway_tag(way) {
        Some(highway) => tags.contains(&highway),
        None => false, // throw out Ways without Highway tags
    }
}

/// uses a linear scan to find the [`Highway`] tag if present.
fn get_highway_tag(way: &Way<'_>) -> Option<Highway> {
    let v = way.tags().find(|(k, _)| *k == "highway");
    match v {
        Some((_, v)) => Highway::from_str(v).ok(),
        None => None,
    }
}
