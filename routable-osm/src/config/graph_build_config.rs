use crate::{
    algorithm::assembly::HighwayFilter,
    config::BuildMode,
    model::{
        feature::route_type::RouteType, osm::dataset::osm_element_filter::ElementFilter,
        OsmCliError,
    },
};
use serde::{Deserialize, Serialize};

/// defines behaviors for building a graph from OSM data. every key is optional.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct GraphBuildConfiguration {
    pub mode: BuildMode,
    /// applied to ways while reading a .pbf file
    pub element_filter: ElementFilter,
    /// applied to segments and transit edges during assembly
    pub highway_filter: HighwayFilter,
    /// values of the `route` tag turned into transit edges
    pub route_types: Vec<RouteType>,
    /// skip and report routes that reference missing ways instead of failing
    pub ignore_invalid_routes: bool,
    pub parallelize: bool,
}

impl Default for GraphBuildConfiguration {
    fn default() -> Self {
        Self {
            mode: Default::default(),
            element_filter: Default::default(),
            highway_filter: Default::default(),
            route_types: RouteType::DEFAULT_ROUTE_TYPES.to_vec(),
            ignore_invalid_routes: true,
            parallelize: false,
        }
    }
}

impl TryFrom<&String> for GraphBuildConfiguration {
    type Error = OsmCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                OsmCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(OsmCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphBuildConfiguration;
    use crate::{
        algorithm::assembly::HighwayFilter,
        config::BuildMode,
        model::{feature::highway::Highway, feature::route_type::RouteType, OsmCliError},
    };

    #[test]
    fn test_defaults() {
        let conf = GraphBuildConfiguration::default();
        assert_eq!(conf.mode, BuildMode::RoadsOnly);
        assert_eq!(conf.route_types, vec![RouteType::Bus, RouteType::Tram]);
        assert!(conf.ignore_invalid_routes);
        assert!(conf.element_filter.is_no_filter());
    }

    #[test]
    fn test_decode_toml() {
        let toml_str = r#"
            mode = "roads_and_transit"
            route_types = ["bus", "trolleybus"]
            ignore_invalid_routes = false

            [highway_filter]
            type = "highway_tags"
            tags = ["primary", "bus"]
        "#;
        let conf: GraphBuildConfiguration = match toml::from_str(toml_str) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(conf.mode, BuildMode::RoadsAndTransit);
        assert_eq!(conf.route_types, vec![RouteType::Bus, RouteType::Trolleybus]);
        assert!(!conf.ignore_invalid_routes);
        match conf.highway_filter {
            HighwayFilter::HighwayTags { tags } => {
                assert!(tags.contains(&Highway::Primary));
                assert!(tags.contains(&Highway::Bus));
            }
            other => panic!("unexpected filter {other:?}"),
        }
        // unset keys fall back to their defaults
        assert!(conf.element_filter.is_no_filter());
        assert!(!conf.parallelize);
    }

    #[test]
    fn test_decode_json() {
        let json = r#"{ "element_filter": { "type": "any_highway" }, "parallelize": true }"#;
        let conf: GraphBuildConfiguration = match serde_json::from_str(json) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert!(!conf.element_filter.is_no_filter());
        assert!(conf.parallelize);
        assert_eq!(conf.mode, BuildMode::RoadsOnly);
    }

    #[test]
    fn test_unsupported_file_type() {
        let f = String::from("config.yaml");
        match GraphBuildConfiguration::try_from(&f) {
            Err(OsmCliError::ConfigurationError(msg)) => assert!(msg.contains("config.yaml")),
            other => panic!("expected configuration error, found {other:?}"),
        }
    }
}
