//! Per-airport runway table.

use std::collections::HashMap;

use crate::geo::Point2LL;
use crate::sector::SectorRunway;

/// One end of a runway.
#[derive(Debug, Clone, PartialEq)]
pub struct Runway {
    /// End identifier, e.g. "04L".
    pub number: String,
    /// Magnetic heading when departing from this end.
    pub heading: f32,
    /// Threshold of this end.
    pub threshold: Point2LL,
    /// Threshold of the opposite end.
    pub end: Point2LL,
}

/// Build the airport → runway ends map. Each sector runway contributes two
/// entries, one per end. Runways without an airport are skipped.
pub fn compile_runways(runways: &[SectorRunway]) -> HashMap<String, Vec<Runway>> {
    let mut by_airport: HashMap<String, Vec<Runway>> = HashMap::new();

    for r in runways.iter().filter(|r| !r.airport.is_empty()) {
        let ends = by_airport.entry(r.airport.clone()).or_default();
        for i in 0..2 {
            ends.push(Runway {
                number: r.number[i].clone(),
                heading: r.heading[i] as f32,
                threshold: r.p[i].to_point(),
                end: r.p[i ^ 1].to_point(),
            });
        }
    }

    by_airport
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::LatLong;

    #[test]
    fn test_two_ends_per_runway() {
        let runways = vec![SectorRunway {
            airport: "KJFK".to_string(),
            number: ["04L".to_string(), "22R".to_string()],
            heading: [44.0, 224.0],
            p: [LatLong::new(40.62, -73.78), LatLong::new(40.65, -73.76)],
        }];

        let map = compile_runways(&runways);
        let ends = &map["KJFK"];

        assert_eq!(ends.len(), 2);
        assert_eq!(ends[0].number, "04L");
        assert_eq!(ends[0].heading, 44.0);
        assert_eq!(ends[0].threshold, ends[1].end);
        assert_eq!(ends[1].number, "22R");
        assert_eq!(ends[1].threshold, ends[0].end);
    }

    #[test]
    fn test_runways_without_airport_are_skipped() {
        let runways = vec![SectorRunway::default()];
        assert!(compile_runways(&runways).is_empty());
    }
}
