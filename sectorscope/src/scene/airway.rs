//! Airway deduplication.
//!
//! Sector files repeat a physical segment once per airway that uses it, and
//! not always in the same direction. Segments are canonicalized so that
//! coincident segments compare equal, drawn once, and labeled once with all
//! the airway names that share them (`"J1/J2"`).

use std::collections::HashMap;

use tracing::{debug, error};

use super::{AirwayLayer, Label, StaticDrawable};
use crate::draw::{CommandBuffer, LinesDrawBuilder};
use crate::geo::Point2LL;
use crate::sector::{Airway, LatLong, Segment};

/// Separator between airway names in a shared-segment label.
pub const AIRWAY_LABEL_SEPARATOR: &str = "/";

/// Hashable identity of an orientation-normalized segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SegmentKey([u64; 4]);

/// An orientation-normalized segment.
#[derive(Debug, Clone, Copy)]
struct CanonicalSegment {
    p0: LatLong,
    p1: LatLong,
}

impl CanonicalSegment {
    /// Order endpoints by latitude, then longitude, so that `(a, b)` and
    /// `(b, a)` canonicalize identically.
    fn new(seg: &Segment) -> Self {
        let [a, b] = seg.p;
        let swap = a.latitude > b.latitude
            || (a.latitude == b.latitude && a.longitude > b.longitude);
        if swap {
            Self { p0: b, p1: a }
        } else {
            Self { p0: a, p1: b }
        }
    }

    fn key(&self) -> SegmentKey {
        // Adding 0.0 folds -0.0 into 0.0 so the bit patterns agree.
        let bits = |v: f64| (v + 0.0).to_bits();
        SegmentKey([
            bits(self.p0.latitude),
            bits(self.p0.longitude),
            bits(self.p1.latitude),
            bits(self.p1.longitude),
        ])
    }

    fn midpoint(&self) -> Point2LL {
        Point2LL::from_lat_lon_f64(
            (self.p0.latitude + self.p1.latitude) / 2.0,
            (self.p0.longitude + self.p1.longitude) / 2.0,
        )
    }
}

/// A distinct segment and the airways that use it, in first-seen order.
struct SharedSegment {
    segment: CanonicalSegment,
    airways: Vec<String>,
}

/// Deduplicate `airways` into one line per distinct segment plus a label at
/// each segment's midpoint. Output follows first-seen segment order.
pub fn compile_airways(layer_name: &str, airways: &[Airway]) -> AirwayLayer {
    let mut shared: Vec<SharedSegment> = Vec::new();
    let mut by_key: HashMap<SegmentKey, usize> = HashMap::new();

    for airway in airways {
        for seg in &airway.segs {
            if seg.is_unset() {
                continue;
            }

            let segment = CanonicalSegment::new(seg);
            match by_key.get(&segment.key()) {
                Some(&i) => {
                    let entry = &mut shared[i];
                    if entry.airways.iter().any(|name| *name == airway.name) {
                        // Kept as a log-only condition; the repeated name
                        // is not added a second time.
                        error!(
                            airway = %airway.name,
                            labels = ?entry.airways,
                            "Unexpectedly labeled airway"
                        );
                    } else {
                        entry.airways.push(airway.name.clone());
                    }
                }
                None => {
                    by_key.insert(segment.key(), shared.len());
                    shared.push(SharedSegment {
                        segment,
                        airways: vec![airway.name.clone()],
                    });
                }
            }
        }
    }

    let mut lines = LinesDrawBuilder::new();
    let mut labels = Vec::with_capacity(shared.len());
    for entry in &shared {
        let label = entry.airways.join(AIRWAY_LABEL_SEPARATOR);
        labels.push(Label::new(&label, entry.segment.midpoint()));
        lines.add_line(entry.segment.p0.to_point(), entry.segment.p1.to_point());
    }

    let mut cb = CommandBuffer::new();
    lines.generate_commands(&mut cb);

    debug!(
        layer = layer_name,
        airways = airways.len(),
        segments = shared.len(),
        "Compiled airways"
    );

    AirwayLayer {
        lines: StaticDrawable::new(layer_name, cb, lines.bounds()),
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ll(lat: f64, lon: f64) -> LatLong {
        LatLong::new(lat, lon)
    }

    fn airway(name: &str, segs: &[(LatLong, LatLong)]) -> Airway {
        Airway {
            name: name.to_string(),
            segs: segs.iter().map(|&(a, b)| Segment::new(a, b)).collect(),
        }
    }

    fn label_names(layer: &AirwayLayer) -> Vec<&str> {
        layer.labels.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_reversed_segments_merge() {
        let p0 = ll(40.0, -74.0);
        let p1 = ll(41.0, -73.0);
        let airways = vec![airway("J1", &[(p0, p1)]), airway("J2", &[(p1, p0)])];

        let layer = compile_airways("high airways", &airways);

        assert_eq!(layer.lines.commands().line_count(), 1);
        assert_eq!(label_names(&layer), vec!["J1/J2"]);
    }

    #[test]
    fn test_label_at_midpoint() {
        let airways = vec![airway("V16", &[(ll(40.0, -74.0), ll(42.0, -72.0))])];
        let layer = compile_airways("low airways", &airways);

        assert_eq!(layer.labels[0].position, Point2LL::new(-73.0, 41.0));
    }

    #[test]
    fn test_equal_latitude_segments_merge_either_direction() {
        let p0 = ll(40.0, -74.0);
        let p1 = ll(40.0, -73.0);
        let airways = vec![airway("V1", &[(p0, p1)]), airway("V2", &[(p1, p0)])];

        let layer = compile_airways("low airways", &airways);
        assert_eq!(label_names(&layer), vec!["V1/V2"]);
    }

    #[test]
    fn test_unset_segments_are_excluded() {
        let real = ll(40.0, -74.0);
        let airways = vec![airway(
            "J1",
            &[(LatLong::default(), real), (real, LatLong::default())],
        )];

        let layer = compile_airways("high airways", &airways);

        assert!(layer.labels.is_empty());
        assert!(layer.lines.commands().is_empty());
    }

    #[test]
    fn test_duplicate_name_on_same_segment_is_not_repeated() {
        let p0 = ll(40.0, -74.0);
        let p1 = ll(41.0, -73.0);
        let airways = vec![airway("J1", &[(p0, p1), (p1, p0)])];

        let layer = compile_airways("high airways", &airways);
        assert_eq!(label_names(&layer), vec!["J1"]);
    }

    #[test]
    fn test_first_seen_order() {
        let a = (ll(10.0, 10.0), ll(11.0, 11.0));
        let b = (ll(20.0, 20.0), ll(21.0, 21.0));
        let airways = vec![
            airway("J3", &[b]),
            airway("J1", &[a, b]),
            airway("J2", &[a]),
        ];

        let layer = compile_airways("high airways", &airways);
        assert_eq!(label_names(&layer), vec!["J3/J1", "J1/J2"]);
        assert_eq!(layer.lines.commands().line_count(), 2);
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let airways = vec![
            airway("J1", &[(ll(10.0, 0.0), ll(11.0, 5.0))]),
            airway("J2", &[(ll(10.0, -0.0), ll(11.0, 5.0))]),
        ];
        let layer = compile_airways("high airways", &airways);
        assert_eq!(label_names(&layer), vec!["J1/J2"]);
    }
}
