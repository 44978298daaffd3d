//! Uncolored line drawables: ARTCC boundaries and runway centerlines.

use super::StaticDrawable;
use crate::draw::{CommandBuffer, LinesDrawBuilder};
use crate::sector::{Artcc, SectorRunway};

/// One drawable per ARTCC boundary group.
pub fn compile_artcc(groups: &[Artcc]) -> Vec<StaticDrawable> {
    groups
        .iter()
        .map(|artcc| {
            let mut ld = LinesDrawBuilder::new();
            for seg in artcc.segs.iter().filter(|s| !s.is_unset()) {
                ld.add_line(seg.p[0].to_point(), seg.p[1].to_point());
            }
            let mut cb = CommandBuffer::new();
            ld.generate_commands(&mut cb);
            StaticDrawable::new(&artcc.name, cb, ld.bounds())
        })
        .collect()
}

/// A single drawable with one line per runway, threshold to threshold.
pub fn compile_runway_lines(runways: &[SectorRunway]) -> StaticDrawable {
    let mut ld = LinesDrawBuilder::new();
    for runway in runways {
        if runway.p[0].is_unset() || runway.p[1].is_unset() {
            continue;
        }
        ld.add_line(runway.p[0].to_point(), runway.p[1].to_point());
    }
    let mut cb = CommandBuffer::new();
    ld.generate_commands(&mut cb);
    StaticDrawable::new("runways", cb, ld.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::{LatLong, Segment};

    #[test]
    fn test_artcc_one_drawable_per_group() {
        let groups = vec![
            Artcc {
                name: "ZNY".to_string(),
                segs: vec![
                    Segment::new(LatLong::new(40.0, -74.0), LatLong::new(41.0, -74.0)),
                    Segment::new(LatLong::default(), LatLong::new(41.0, -74.0)),
                ],
            },
            Artcc {
                name: "ZBW".to_string(),
                segs: vec![Segment::new(
                    LatLong::new(42.0, -71.0),
                    LatLong::new(43.0, -71.0),
                )],
            },
        ];

        let compiled = compile_artcc(&groups);

        assert_eq!(compiled.len(), 2);
        assert_eq!(compiled[0].name(), "ZNY");
        assert_eq!(compiled[0].commands().line_count(), 1);
        assert!(compiled[0].rgb().is_none());
    }

    #[test]
    fn test_runway_lines_skip_unset() {
        let runways = vec![
            SectorRunway {
                airport: "KJFK".to_string(),
                p: [LatLong::new(40.62, -73.78), LatLong::new(40.65, -73.76)],
                ..Default::default()
            },
            SectorRunway {
                airport: "KXXX".to_string(),
                p: [LatLong::default(), LatLong::new(40.0, -73.0)],
                ..Default::default()
            },
        ];

        let d = compile_runway_lines(&runways);
        assert_eq!(d.commands().line_count(), 1);
    }
}
