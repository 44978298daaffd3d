//! Integration tests for the sector file load pipeline.
//!
//! These tests drive [`StaticDatabase`] end to end with an in-test parser:
//! - load → compile → query
//! - recolor flow across SIDs, STARs, Geo and labels
//! - panic containment and last-good-state preservation
//!
//! Run with: `cargo test --test sector_load_integration`

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use sectorscope::config::ColorScheme;
use sectorscope::database::{LoadState, StaticDatabase};
use sectorscope::geo::Rgb;
use sectorscope::notify::Notifier;
use sectorscope::reference::ReferenceTables;
use sectorscope::sector::{
    Airway, ColoredSegment, Geo, LatLong, NamedLatLong, Region, SectorColor, SectorFile,
    SectorFileParser, SectorLabel, SectorParseError, Segment, SidStar,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Serves one of two documents depending on the file's first line, and
/// panics on `PANIC`.
struct FixtureParser;

impl SectorFileParser for FixtureParser {
    fn parse(
        &self,
        contents: &[u8],
        _filename: &str,
        _on_error: &mut dyn FnMut(&str),
    ) -> Result<SectorFile, SectorParseError> {
        let text = String::from_utf8_lossy(contents);
        match text.lines().next().unwrap_or("") {
            "ZNY" => Ok(new_york()),
            "ZBW" => Ok(boston()),
            "PANIC" => panic!("index out of range in [REGIONS]"),
            other => Err(SectorParseError::Invalid(format!("unknown sector {other}"))),
        }
    }
}

#[derive(Default)]
struct RecordingNotifier {
    count: AtomicUsize,
    last: Mutex<String>,
}

impl Notifier for RecordingNotifier {
    fn fatal_error(&self, message: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = message.to_string();
    }
}

fn ll(lat: f64, lon: f64) -> LatLong {
    LatLong::new(lat, lon)
}

fn colored(p0: LatLong, p1: LatLong, color: &str) -> ColoredSegment {
    ColoredSegment {
        p: [p0, p1],
        color: color.to_string(),
    }
}

fn new_york() -> SectorFile {
    SectorFile {
        id: "ZNY".to_string(),
        default_airport: "KJFK".to_string(),
        vors: vec![NamedLatLong::new("JFK", 40.63, -73.77)],
        airports: vec![NamedLatLong::new("KJFK", 40.64, -73.78)],
        regions: vec![
            Region {
                name: "APRON".to_string(),
                p: vec![ll(40.0, -74.0), ll(40.0, -73.9), ll(40.1, -73.9), ll(40.1, -74.0)],
            },
            Region {
                name: "APRON".to_string(),
                p: vec![ll(40.2, -74.0), ll(40.2, -73.9), ll(40.3, -73.9)],
            },
            Region {
                name: "GRASS".to_string(),
                p: vec![ll(41.0, -74.0), ll(41.0, -73.9), ll(41.1, -73.9)],
            },
        ],
        high_airways: vec![
            Airway {
                name: "J80".to_string(),
                segs: vec![Segment::new(ll(40.0, -74.0), ll(41.0, -75.0))],
            },
            Airway {
                name: "J60".to_string(),
                segs: vec![
                    Segment::new(ll(41.0, -75.0), ll(40.0, -74.0)),
                    Segment::new(ll(41.0, -75.0), ll(42.0, -76.0)),
                ],
            },
        ],
        sids: vec![SidStar {
            name: "DEEZZ5".to_string(),
            segs: vec![
                colored(ll(40.6, -73.8), ll(40.7, -73.9), ""),
                colored(ll(40.7, -73.9), ll(40.8, -74.0), "RED"),
            ],
        }],
        stars: vec![SidStar {
            name: "CAMRN4".to_string(),
            segs: vec![colored(ll(40.2, -73.5), ll(40.4, -73.7), "")],
        }],
        geo: vec![Geo {
            name: "coastline".to_string(),
            segments: vec![colored(ll(40.5, -74.1), ll(40.55, -74.0), "RED")],
        }],
        labels: vec![SectorLabel {
            name: "RWY 4L".to_string(),
            p: ll(40.62, -73.78),
            color: "RED".to_string(),
        }],
        colors: vec![SectorColor {
            name: "RED".to_string(),
            r: 1.0,
            g: 0.0,
            b: 0.0,
        }],
        ..Default::default()
    }
}

fn boston() -> SectorFile {
    SectorFile {
        id: "ZBW".to_string(),
        vors: vec![NamedLatLong::new("BOS", 42.36, -70.99)],
        ..Default::default()
    }
}

fn sector_file(first_line: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{first_line}").unwrap();
    file
}

fn database(notifier: Arc<RecordingNotifier>) -> StaticDatabase {
    StaticDatabase::with_notifier(ReferenceTables::new(), Arc::new(FixtureParser), notifier)
}

// ============================================================================
// Load → compile → query
// ============================================================================

#[tokio::test]
async fn test_load_compiles_every_category() {
    let mut db = database(Arc::default());
    db.load_sector_file(sector_file("ZNY").path()).await.unwrap();

    let scene = db.scene().unwrap();
    assert_eq!(scene.default_airport(), "KJFK");

    // APRON, APRON are one run; GRASS is another
    assert_eq!(scene.regions().len(), 2);
    assert_eq!(scene.regions()[0].name(), "APRON");
    assert_eq!(scene.regions()[0].commands().triangle_count(), 3);

    // J80 and J60 share one segment
    let airways = scene.high_airways();
    assert_eq!(airways.lines.commands().line_count(), 2);
    assert_eq!(airways.labels[0].name, "J80/J60");
    assert_eq!(airways.labels[1].name, "J60");

    assert!(db.locate("kjfk").is_some());
}

// ============================================================================
// Recolor flow
// ============================================================================

#[tokio::test]
async fn test_color_scheme_reaches_every_collection() {
    let mut db = database(Arc::default());
    db.load_sector_file(sector_file("ZNY").path()).await.unwrap();

    let mut scheme = ColorScheme::default();
    db.merge_sector_colors(&mut scheme);
    scheme.sid = Rgb::new(0.0, 0.0, 1.0);
    scheme.star = Rgb::new(0.0, 1.0, 0.0);
    db.set_color_scheme(&scheme);

    let scene = db.scene().unwrap();
    let sid = scene.sids()[0].rgb().unwrap();
    assert_eq!(&sid[..6], &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    assert_eq!(&sid[6..], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    let star = scene.stars()[0].rgb().unwrap();
    assert_eq!(star, &[0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);

    assert_eq!(scene.geos()[0].rgb().unwrap(), &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(scene.labels()[0].color, Rgb::new(1.0, 0.0, 0.0));
}

#[tokio::test]
async fn test_named_color_change_is_targeted() {
    let mut db = database(Arc::default());
    db.load_sector_file(sector_file("ZNY").path()).await.unwrap();

    db.named_color_changed("SID", Rgb::WHITE);

    let scene = db.scene().unwrap();
    let sid = scene.sids()[0].rgb().unwrap();
    assert_eq!(&sid[..6], &[1.0; 6]);
    assert_eq!(&sid[6..], &[0.0; 6]);
    assert!(scene.stars()[0].rgb().unwrap().iter().all(|&c| c == 0.0));
    assert_eq!(scene.labels()[0].color, Rgb::BLACK);
}

// ============================================================================
// Failure containment
// ============================================================================

#[tokio::test]
async fn test_parser_panic_is_contained() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut db = database(Arc::clone(&notifier));
    let good = sector_file("ZNY");
    let bad = sector_file("PANIC");

    db.load_sector_file(good.path()).await.unwrap();
    let err = db.load_sector_file(bad.path()).await.unwrap_err();

    assert!(err.is_panic());
    assert_eq!(db.load_state(), LoadState::Failed);
    assert_eq!(notifier.count.load(Ordering::SeqCst), 1);
    assert!(notifier
        .last
        .lock()
        .unwrap()
        .contains(&bad.path().display().to_string()));

    // Last good scene is still queryable
    assert_eq!(db.scene().unwrap().id(), "ZNY");
    assert!(db.locate("JFK").is_some());
}

#[test]
fn test_blocking_load_panic_is_contained() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut db = database(Arc::clone(&notifier));

    let err = db
        .load_sector_file_blocking(sector_file("PANIC").path())
        .unwrap_err();

    assert!(err.is_panic());
    assert!(db.scene().is_none());
    assert_eq!(notifier.count.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_reload_replaces_scene_wholesale() {
    let mut db = database(Arc::default());
    db.load_sector_file(sector_file("ZNY").path()).await.unwrap();
    db.load_sector_file(sector_file("ZBW").path()).await.unwrap();

    let scene = db.scene().unwrap();
    assert_eq!(scene.id(), "ZBW");
    assert!(scene.regions().is_empty());
    assert!(db.locate("JFK").is_none());
    assert!(db.locate("BOS").is_some());
}

#[tokio::test]
async fn test_parse_error_does_not_notify() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut db = database(Arc::clone(&notifier));

    let err = db
        .load_sector_file(sector_file("ZZZ").path())
        .await
        .unwrap_err();

    assert!(!err.is_panic());
    assert!(db
        .sector_file_load_error()
        .unwrap()
        .contains("unknown sector ZZZ"));
    assert_eq!(notifier.count.load(Ordering::SeqCst), 0);
}
