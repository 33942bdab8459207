//! Travel modes
//!
//! Modes drive the fuel performance lookup, the mandatory avoidance rules,
//! and the upstream route type. Parsing never fails: unknown strings are
//! carried through as-is and simply find no performance entry.

/// Travel mode requested by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelMode {
    Car,
    Motorcycle,
    Pedestrian,
    /// Any other mode string, echoed back unchanged
    Other(String),
}

impl TravelMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "car" => TravelMode::Car,
            "motorcycle" => TravelMode::Motorcycle,
            "pedestrian" => TravelMode::Pedestrian,
            other => TravelMode::Other(other.to_string()),
        }
    }

    /// Mode string used for the performance lookup and the response echo
    pub fn as_str(&self) -> &str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Motorcycle => "motorcycle",
            TravelMode::Pedestrian => "pedestrian",
            TravelMode::Other(s) => s,
        }
    }

    /// Upstream `routeType` parameter for this mode
    pub fn route_type(&self) -> &'static str {
        match self {
            TravelMode::Pedestrian => "pedestrian",
            _ => "fastest",
        }
    }
}
