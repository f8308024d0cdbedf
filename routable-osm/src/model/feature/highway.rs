use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// values of the OSM `highway` key that this crate distinguishes. see
/// https://wiki.openstreetmap.org/wiki/Key:highway
///
/// `Bus` and `Tram` are not OSM way values: they classify the transit edges
/// synthesized from route relations. anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Highway {
    Motorway,
    MotorwayLink,
    Trunk,
    TrunkLink,
    Primary,
    PrimaryLink,
    Secondary,
    SecondaryLink,
    Tertiary,
    TertiaryLink,
    Unclassified,
    Residential,
    LivingStreet,
    Service,
    Pedestrian,
    Track,
    Road,
    Footway,
    Cycleway,
    Bridleway,
    Path,
    Steps,
    Corridor,
    Bus,
    Tram,
    Other(String),
}

impl Highway {
    pub fn as_str(&self) -> &str {
        use Highway as H;
        match self {
            H::Motorway => "motorway",
            H::MotorwayLink => "motorway_link",
            H::Trunk => "trunk",
            H::TrunkLink => "trunk_link",
            H::Primary => "primary",
            H::PrimaryLink => "primary_link",
            H::Secondary => "secondary",
            H::SecondaryLink => "secondary_link",
            H::Tertiary => "tertiary",
            H::TertiaryLink => "tertiary_link",
            H::Unclassified => "unclassified",
            H::Residential => "residential",
            H::LivingStreet => "living_street",
            H::Service => "service",
            H::Pedestrian => "pedestrian",
            H::Track => "track",
            H::Road => "road",
            H::Footway => "footway",
            H::Cycleway => "cycleway",
            H::Bridleway => "bridleway",
            H::Path => "path",
            H::Steps => "steps",
            H::Corridor => "corridor",
            H::Bus => "bus",
            H::Tram => "tram",
            H::Other(s) => s.as_str(),
        }
    }
}

impl Display for Highway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Highway {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Highway as H;
        let highway = match s.trim() {
            "" => return Err(String::from("empty highway value")),
            "motorway" => H::Motorway,
            "motorway_link" => H::MotorwayLink,
            "trunk" => H::Trunk,
            "trunk_link" => H::TrunkLink,
            "primary" => H::Primary,
            "primary_link" => H::PrimaryLink,
            "secondary" => H::Secondary,
            "secondary_link" => H::SecondaryLink,
            "tertiary" => H::Tertiary,
            "tertiary_link" => H::TertiaryLink,
            "unclassified" => H::Unclassified,
            "residential" => H::Residential,
            "living_street" => H::LivingStreet,
            "service" => H::Service,
            "pedestrian" => H::Pedestrian,
            "track" => H::Track,
            "road" => H::Road,
            "footway" => H::Footway,
            "cycleway" => H::Cycleway,
            "bridleway" => H::Bridleway,
            "path" => H::Path,
            "steps" => H::Steps,
            "corridor" => H::Corridor,
            "bus" => H::Bus,
            "tram" => H::Tram,
            other => H::Other(String::from(other)),
        };
        Ok(highway)
    }
}

impl TryFrom<String> for Highway {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Highway::from_str(&value)
    }
}

impl From<Highway> for String {
    fn from(value: Highway) -> Self {
        value.to_string()
    }
}
