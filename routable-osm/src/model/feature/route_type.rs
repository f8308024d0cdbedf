use super::highway::Highway;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the `route` tag of a public transport route relation. see
/// https://wiki.openstreetmap.org/wiki/Relation:route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Bus,
    Tram,
    Trolleybus,
    ShareTaxi,
    LightRail,
    Subway,
    Train,
}

impl RouteType {
    /// route types converted unless configured otherwise.
    pub const DEFAULT_ROUTE_TYPES: [RouteType; 2] = [RouteType::Bus, RouteType::Tram];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Bus => "bus",
            RouteType::Tram => "tram",
            RouteType::Trolleybus => "trolleybus",
            RouteType::ShareTaxi => "share_taxi",
            RouteType::LightRail => "light_rail",
            RouteType::Subway => "subway",
            RouteType::Train => "train",
        }
    }

    /// the highway class written onto transit edges of this route type.
    pub fn highway(&self) -> Highway {
        match self {
            RouteType::Bus => Highway::Bus,
            RouteType::Tram => Highway::Tram,
            other => Highway::Other(String::from(other.as_str())),
        }
    }
}

impl Display for RouteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bus" => Ok(RouteType::Bus),
            "tram" => Ok(RouteType::Tram),
            "trolleybus" => Ok(RouteType::Trolleybus),
            "share_taxi" => Ok(RouteType::ShareTaxi),
            "light_rail" => Ok(RouteType::LightRail),
            "subway" => Ok(RouteType::Subway),
            "train" => Ok(RouteType::Train),
            other => Err(format!("unsupported route type '{other}'")),
        }
    }
}
