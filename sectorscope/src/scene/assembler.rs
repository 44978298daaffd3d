//! Whole-document compilation into a [`SectorScene`].

use std::collections::HashMap;
use std::time::Instant;

use tracing::info;

use super::airway::compile_airways;
use super::colored::compile_colored_lines;
use super::lines::{compile_artcc, compile_runway_lines};
use super::recolor::{GEO_COLOR_NAME, SID_COLOR_NAME, STAR_COLOR_NAME};
use super::region::compile_regions;
use super::runway::{compile_runways, Runway};
use super::{AirwayLayer, ColorBufferIndex, Label, StaticDrawable};
use crate::geo::{Point2LL, Rgb};
use crate::sector::{ColoredSegment, NamedLatLong, SectorFile};

/// Everything derived from one sector file.
///
/// A scene is built in one pass by [`SectorScene::compile`] and never
/// patched afterwards, apart from colors. Loading a new sector file builds
/// a new scene and replaces the old one wholesale.
#[derive(Debug, Clone, Default)]
pub struct SectorScene {
    pub(super) id: String,
    pub(super) default_airport: String,
    pub(super) default_center: Point2LL,
    pub(super) nm_per_latitude: f32,
    pub(super) nm_per_longitude: f32,
    pub(super) magnetic_variation: f32,

    pub(super) vors: HashMap<String, Point2LL>,
    pub(super) ndbs: HashMap<String, Point2LL>,
    pub(super) fixes: HashMap<String, Point2LL>,
    pub(super) airports: HashMap<String, Point2LL>,
    pub(super) runways: HashMap<String, Vec<Runway>>,

    pub(super) runway_lines: StaticDrawable,
    pub(super) artcc: Vec<StaticDrawable>,
    pub(super) artcc_low: Vec<StaticDrawable>,
    pub(super) artcc_high: Vec<StaticDrawable>,
    pub(super) regions: Vec<StaticDrawable>,
    pub(super) low_airways: AirwayLayer,
    pub(super) high_airways: AirwayLayer,
    pub(super) sids: Vec<StaticDrawable>,
    pub(super) stars: Vec<StaticDrawable>,
    pub(super) geos: Vec<StaticDrawable>,

    pub(super) labels: Vec<Label>,
    pub(super) label_color_index: ColorBufferIndex,

    pub(super) colors: HashMap<String, Rgb>,
}

impl SectorScene {
    /// Compile every category of `sector_file`.
    pub fn compile(sector_file: &SectorFile) -> Self {
        let start = Instant::now();

        let mut labels = Vec::with_capacity(sector_file.labels.len());
        let mut label_color_index = ColorBufferIndex::new();
        for label in &sector_file.labels {
            label_color_index.add(&label.color);
            labels.push(Label::new(&label.name, label.p.to_point()));
        }

        let scene = Self {
            id: sector_file.id.clone(),
            default_airport: sector_file.default_airport.clone(),
            default_center: sector_file.center.to_point(),
            nm_per_latitude: sector_file.nm_per_latitude as f32,
            nm_per_longitude: sector_file.nm_per_longitude as f32,
            magnetic_variation: sector_file.magnetic_variation as f32,

            vors: named_points(&sector_file.vors),
            ndbs: named_points(&sector_file.ndbs),
            fixes: named_points(&sector_file.fixes),
            airports: named_points(&sector_file.airports),
            runways: compile_runways(&sector_file.runways),

            runway_lines: compile_runway_lines(&sector_file.runways),
            artcc: compile_artcc(&sector_file.artcc),
            artcc_low: compile_artcc(&sector_file.artcc_low),
            artcc_high: compile_artcc(&sector_file.artcc_high),
            regions: compile_regions(&sector_file.regions),
            low_airways: compile_airways("low airways", &sector_file.low_airways),
            high_airways: compile_airways("high airways", &sector_file.high_airways),
            sids: compile_groups(
                sector_file.sids.iter().map(|s| (s.name.as_str(), s.segs.as_slice())),
                SID_COLOR_NAME,
            ),
            stars: compile_groups(
                sector_file.stars.iter().map(|s| (s.name.as_str(), s.segs.as_slice())),
                STAR_COLOR_NAME,
            ),
            geos: compile_groups(
                sector_file.geo.iter().map(|g| (g.name.as_str(), g.segments.as_slice())),
                GEO_COLOR_NAME,
            ),

            labels,
            label_color_index,

            colors: sector_file
                .colors
                .iter()
                .map(|c| (c.name.clone(), Rgb::new(c.r, c.g, c.b)))
                .collect(),
        };

        info!(
            id = %scene.id,
            regions = scene.regions.len(),
            sids = scene.sids.len(),
            stars = scene.stars.len(),
            geos = scene.geos.len(),
            labels = scene.labels.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Compiled sector scene"
        );

        scene
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn default_airport(&self) -> &str {
        &self.default_airport
    }

    pub fn default_center(&self) -> Point2LL {
        self.default_center
    }

    pub fn nm_per_latitude(&self) -> f32 {
        self.nm_per_latitude
    }

    pub fn nm_per_longitude(&self) -> f32 {
        self.nm_per_longitude
    }

    pub fn magnetic_variation(&self) -> f32 {
        self.magnetic_variation
    }

    /// Look `name` up among the sector file's VORs, NDBs, fixes and
    /// airports, in that order. `name` must already be upper case.
    pub fn locate(&self, name: &str) -> Option<Point2LL> {
        self.vors
            .get(name)
            .or_else(|| self.ndbs.get(name))
            .or_else(|| self.fixes.get(name))
            .or_else(|| self.airports.get(name))
            .copied()
    }

    pub fn vors(&self) -> &HashMap<String, Point2LL> {
        &self.vors
    }

    pub fn ndbs(&self) -> &HashMap<String, Point2LL> {
        &self.ndbs
    }

    pub fn fixes(&self) -> &HashMap<String, Point2LL> {
        &self.fixes
    }

    pub fn airports(&self) -> &HashMap<String, Point2LL> {
        &self.airports
    }

    /// Runway ends for `airport`, empty if unknown.
    pub fn runways(&self, airport: &str) -> &[Runway] {
        self.runways.get(airport).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn runway_lines(&self) -> &StaticDrawable {
        &self.runway_lines
    }

    pub fn artcc(&self) -> &[StaticDrawable] {
        &self.artcc
    }

    pub fn artcc_low(&self) -> &[StaticDrawable] {
        &self.artcc_low
    }

    pub fn artcc_high(&self) -> &[StaticDrawable] {
        &self.artcc_high
    }

    pub fn regions(&self) -> &[StaticDrawable] {
        &self.regions
    }

    pub fn low_airways(&self) -> &AirwayLayer {
        &self.low_airways
    }

    pub fn high_airways(&self) -> &AirwayLayer {
        &self.high_airways
    }

    pub fn sids(&self) -> &[StaticDrawable] {
        &self.sids
    }

    pub fn stars(&self) -> &[StaticDrawable] {
        &self.stars
    }

    pub fn geos(&self) -> &[StaticDrawable] {
        &self.geos
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Colors `#define`d in the sector file.
    pub fn colors(&self) -> &HashMap<String, Rgb> {
        &self.colors
    }

    /// Every drawable in the scene, for renderers that treat them uniformly.
    pub fn drawables(&self) -> impl Iterator<Item = &StaticDrawable> {
        std::iter::once(&self.runway_lines)
            .chain(&self.artcc)
            .chain(&self.artcc_low)
            .chain(&self.artcc_high)
            .chain(&self.regions)
            .chain(std::iter::once(&self.low_airways.lines))
            .chain(std::iter::once(&self.high_airways.lines))
            .chain(&self.sids)
            .chain(&self.stars)
            .chain(&self.geos)
    }
}

fn compile_groups<'a, I>(groups: I, default_color: &str) -> Vec<StaticDrawable>
where
    I: Iterator<Item = (&'a str, &'a [ColoredSegment])>,
{
    groups
        .map(|(name, segs)| compile_colored_lines(name, segs, default_color))
        .collect()
}

fn named_points(points: &[NamedLatLong]) -> HashMap<String, Point2LL> {
    points
        .iter()
        .filter(|p| !p.name.is_empty())
        .map(|p| (p.name.clone(), Point2LL::from_lat_lon_f64(p.latitude, p.longitude)))
        .collect()
}
