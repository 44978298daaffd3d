//! Structured sector file document.
//!
//! These types are what a sector file parser hands back. Coordinates stay in
//! double precision here; conversion to [`Point2LL`] happens during scene
//! compilation.

use crate::geo::Point2LL;

/// A latitude/longitude pair as read from the sector file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLong {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True for the `(0, 0)` placeholder left in sector files to separate
    /// sections.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    #[inline]
    pub fn to_point(self) -> Point2LL {
        Point2LL::from_lat_lon_f64(self.latitude, self.longitude)
    }
}

/// A named location (VOR, NDB, fix or airport).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedLatLong {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NamedLatLong {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }
}

/// A runway with both ends described.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorRunway {
    pub airport: String,
    /// End identifiers, e.g. `["04L", "22R"]`.
    pub number: [String; 2],
    /// Magnetic headings of each end.
    pub heading: [f64; 2],
    /// Threshold coordinates of each end.
    pub p: [LatLong; 2],
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment {
    pub p: [LatLong; 2],
}

impl Segment {
    pub const fn new(p0: LatLong, p1: LatLong) -> Self {
        Self { p: [p0, p1] }
    }

    /// True if either endpoint is the `(0, 0)` placeholder.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.p[0].is_unset() || self.p[1].is_unset()
    }
}

/// A named ARTCC boundary made of segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artcc {
    pub name: String,
    pub segs: Vec<Segment>,
}

/// A named filled polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Region {
    pub name: String,
    pub p: Vec<LatLong>,
}

/// A free-standing text label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorLabel {
    pub name: String,
    pub p: LatLong,
    /// Name of the color this label is drawn with.
    pub color: String,
}

/// A named airway as a list of segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Airway {
    pub name: String,
    pub segs: Vec<Segment>,
}

/// A segment with an optional color name (empty when unset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredSegment {
    pub p: [LatLong; 2],
    pub color: String,
}

impl ColoredSegment {
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.p[0].is_unset() || self.p[1].is_unset()
    }
}

/// A SID or STAR diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidStar {
    pub name: String,
    pub segs: Vec<ColoredSegment>,
}

/// A block of geographic map art.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geo {
    pub name: String,
    pub segments: Vec<ColoredSegment>,
}

/// A `#define`d color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorColor {
    pub name: String,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// A fully parsed sector file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorFile {
    pub id: String,
    pub default_airport: String,
    pub center: LatLong,
    pub nm_per_latitude: f64,
    pub nm_per_longitude: f64,
    pub magnetic_variation: f64,

    pub vors: Vec<NamedLatLong>,
    pub ndbs: Vec<NamedLatLong>,
    pub fixes: Vec<NamedLatLong>,
    pub airports: Vec<NamedLatLong>,
    pub runways: Vec<SectorRunway>,

    pub artcc: Vec<Artcc>,
    pub artcc_low: Vec<Artcc>,
    pub artcc_high: Vec<Artcc>,

    pub regions: Vec<Region>,
    pub labels: Vec<SectorLabel>,
    pub low_airways: Vec<Airway>,
    pub high_airways: Vec<Airway>,

    pub sids: Vec<SidStar>,
    pub stars: Vec<SidStar>,
    pub geo: Vec<Geo>,

    pub colors: Vec<SectorColor>,
}
