//! Records held by the reference tables.

use crate::geo::Point2LL;

/// A radio navigation aid (VOR, NDB, TACAN, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Navaid {
    pub id: String,
    pub navtype: String,
    pub name: String,
    pub location: Point2LL,
}

/// An airport with its field elevation in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: String,
    pub name: String,
    pub location: Point2LL,
    pub elevation: i32,
}

/// A named en-route fix.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub id: String,
    pub location: Point2LL,
}

/// An airline callsign assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callsign {
    pub company: String,
    pub country: String,
    pub telephony: String,
    pub three_letter: String,
}

/// Departure/arrival key for preferred routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportPair {
    pub depart: String,
    pub arrive: String,
}

impl AirportPair {
    pub fn new(depart: &str, arrive: &str) -> Self {
        Self {
            depart: depart.to_string(),
            arrive: arrive.to_string(),
        }
    }
}

/// One preferred route between two airports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrdEntry {
    pub depart: String,
    pub route: String,
    pub arrive: String,
    pub hours: [String; 3],
    pub route_type: String,
    pub area: String,
    pub altitude: String,
    pub aircraft: String,
    pub direction: String,
    pub seq: String,
    pub depart_center: String,
    pub arrive_center: String,
}
