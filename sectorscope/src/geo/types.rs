//! Point and color types.

use std::fmt;

use super::parse_dms;

/// A geographic point, longitude first, in single precision.
///
/// Single precision is plenty for display purposes and halves the size of
/// the vertex buffers handed to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2LL {
    /// Longitude in decimal degrees (east positive)
    pub lon: f32,
    /// Latitude in decimal degrees (north positive)
    pub lat: f32,
}

impl Point2LL {
    /// Create a point from longitude and latitude.
    #[inline]
    pub const fn new(lon: f32, lat: f32) -> Self {
        Self { lon, lat }
    }

    /// Create a point from double-precision latitude/longitude, as produced
    /// by the sector file parser and the reference tables.
    #[inline]
    pub fn from_lat_lon_f64(lat: f64, lon: f64) -> Self {
        Self {
            lon: lon as f32,
            lat: lat as f32,
        }
    }

    /// Build a point from NASR-style DMS column groups.
    ///
    /// Returns `None` if either coordinate is malformed.
    pub fn from_dms_components(lat: [&str; 4], lon: [&str; 4]) -> Option<Self> {
        Some(Self::from_lat_lon_f64(parse_dms(lat)?, parse_dms(lon)?))
    }

    /// Build a point from decimal-degree strings.
    pub fn from_decimal_strings(lat: &str, lon: &str) -> Option<Self> {
        let lat: f64 = lat.trim().parse().ok()?;
        let lon: f64 = lon.trim().parse().ok()?;
        Some(Self::from_lat_lon_f64(lat, lon))
    }

    /// True for the `(0, 0)` placeholder that sector files use for unset
    /// endpoints.
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.lon == 0.0 && self.lat == 0.0
    }

    /// Geographic midpoint of two points (planar average).
    #[inline]
    pub fn midpoint(a: Point2LL, b: Point2LL) -> Self {
        Self {
            lon: (a.lon + b.lon) / 2.0,
            lat: (a.lat + b.lat) / 2.0,
        }
    }
}

impl fmt::Display for Point2LL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat < 0.0 { 'S' } else { 'N' };
        let ew = if self.lon < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.6}{}, {:.6}{}",
            self.lat.abs(),
            ns,
            self.lon.abs(),
            ew
        )
    }
}

/// A color with unit-range floating point channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// The three channels in buffer order.
    #[inline]
    pub fn channels(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    /// Formats as the `r,g,b` triple used in the config file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}
