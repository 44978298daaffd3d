//! The static database: everything about the world that does not change
//! once loaded.
//!
//! It combines the reference tables, the scene compiled from the current
//! sector file, and the controller positions from the position file.
//! Reloading a sector file builds a complete new [`SectorScene`] before
//! replacing the old one, so a failed load leaves the previous scene in
//! place.
//!
//! Recoloring and reloading take `&mut self`; callers sharing a database
//! across threads serialize access themselves.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::config::ColorScheme;
use crate::geo::{Point2LL, Rgb};
use crate::notify::{Notifier, TracingNotifier};
use crate::panic;
use crate::position::{parse_position_file, Position, PositionFileError, PositionMap};
use crate::reference::{Airport, Callsign, Fix, Navaid, PrdEntry, ReferenceTables};
use crate::scene::{Runway, SectorScene, GEO_COLOR_NAME, SID_COLOR_NAME, STAR_COLOR_NAME};
use crate::sector::{LoadError, SectorFile, SectorFileParser, SectorLoader};

/// Where the most recent sector file load stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No sector file has been loaded.
    Idle,
    /// A sector file is being parsed.
    Parsing,
    /// The last load succeeded and its scene is current.
    Compiled,
    /// The last load failed; any earlier scene is still current.
    Failed,
}

/// Reference tables, the compiled sector scene and controller positions.
pub struct StaticDatabase {
    reference: ReferenceTables,
    loader: SectorLoader,

    scene: Option<SectorScene>,
    state: LoadState,
    sector_file_load_error: Option<String>,
    color_scheme: Option<ColorScheme>,

    positions: PositionMap,
    position_file_load_error: Option<String>,
}

impl StaticDatabase {
    /// Create a database that parses sector files with `parser` and reports
    /// fatal load errors through a [`TracingNotifier`].
    pub fn new(reference: ReferenceTables, parser: Arc<dyn SectorFileParser>) -> Self {
        Self::with_notifier(reference, parser, Arc::new(TracingNotifier::new()))
    }

    pub fn with_notifier(
        reference: ReferenceTables,
        parser: Arc<dyn SectorFileParser>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        panic::init();
        Self {
            reference,
            loader: SectorLoader::new(parser, notifier),
            scene: None,
            state: LoadState::Idle,
            sector_file_load_error: None,
            color_scheme: None,
            positions: PositionMap::new(),
            position_file_load_error: None,
        }
    }

    /// Load and compile the sector file at `path`.
    ///
    /// Parsing runs on tokio's blocking pool; this future resolves once it
    /// has finished. On failure the error is also kept for
    /// [`sector_file_load_error`](Self::sector_file_load_error) and the
    /// previous scene stays current.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn load_sector_file(&mut self, path: &Path) -> Result<(), LoadError> {
        self.state = LoadState::Parsing;
        let result = self.loader.load(path).await;
        self.finish_load(result)
    }

    /// Blocking variant of [`load_sector_file`](Self::load_sector_file) for
    /// callers outside a tokio runtime.
    pub fn load_sector_file_blocking(&mut self, path: &Path) -> Result<(), LoadError> {
        self.state = LoadState::Parsing;
        let result = self.loader.load_blocking(path);
        self.finish_load(result)
    }

    fn finish_load(&mut self, result: Result<SectorFile, LoadError>) -> Result<(), LoadError> {
        match result {
            Ok(sector_file) => {
                let mut scene = SectorScene::compile(&sector_file);
                if let Some(scheme) = &self.color_scheme {
                    apply_scheme(&mut scene, scheme);
                }
                self.scene = Some(scene);
                self.state = LoadState::Compiled;
                self.sector_file_load_error = None;
                Ok(())
            }
            Err(e) => {
                if self.scene.is_some() {
                    warn!("Keeping previously loaded sector file");
                }
                self.state = LoadState::Failed;
                self.sector_file_load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Load the position file at `path`, replacing all positions.
    ///
    /// On failure the position map is left empty and the error is kept for
    /// [`position_file_load_error`](Self::position_file_load_error).
    pub fn load_position_file(&mut self, path: &Path) -> Result<(), PositionFileError> {
        info!(path = %path.display(), "Loading position file");
        match parse_position_file(path) {
            Ok(positions) => {
                self.positions = positions;
                self.position_file_load_error = None;
                Ok(())
            }
            Err(e) => {
                self.positions = PositionMap::new();
                self.position_file_load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn sector_file_load_error(&self) -> Option<&str> {
        self.sector_file_load_error.as_deref()
    }

    pub fn position_file_load_error(&self) -> Option<&str> {
        self.position_file_load_error.as_deref()
    }

    /// The current scene, if a sector file has been loaded.
    pub fn scene(&self) -> Option<&SectorScene> {
        self.scene.as_ref()
    }

    pub fn reference(&self) -> &ReferenceTables {
        &self.reference
    }

    /// Find a named point. The sector file's VORs, NDBs, fixes and airports
    /// are searched first, then the reference navaids, fixes and airports.
    /// Matching ignores case.
    pub fn locate(&self, name: &str) -> Option<Point2LL> {
        let name = name.to_uppercase();
        self.scene
            .as_ref()
            .and_then(|scene| scene.locate(&name))
            .or_else(|| self.reference.locate(&name))
    }

    /// Runway ends at `airport` from the sector file.
    pub fn runways(&self, airport: &str) -> &[Runway] {
        match &self.scene {
            Some(scene) => scene.runways(airport),
            None => &[],
        }
    }

    pub fn navaid(&self, id: &str) -> Option<&Navaid> {
        self.reference.navaid(id)
    }

    pub fn airport(&self, id: &str) -> Option<&Airport> {
        self.reference.airport(id)
    }

    pub fn fix(&self, id: &str) -> Option<&Fix> {
        self.reference.fix(id)
    }

    pub fn callsign(&self, three_letter: &str) -> Option<&Callsign> {
        self.reference.callsign(&three_letter.to_uppercase())
    }

    pub fn preferred_routes(&self, depart: &str, arrive: &str) -> &[PrdEntry] {
        self.reference
            .preferred_routes(&depart.to_uppercase(), &arrive.to_uppercase())
    }

    /// Positions registered under `id` (e.g. `JFK_TWR`).
    pub fn positions(&self, id: &str) -> &[Position] {
        self.positions.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all_positions(&self) -> &PositionMap {
        &self.positions
    }

    /// Apply every color in `scheme` to the current scene.
    ///
    /// The scheme is remembered and reapplied to scenes loaded later.
    pub fn set_color_scheme(&mut self, scheme: &ColorScheme) {
        if let Some(scene) = self.scene.as_mut() {
            apply_scheme(scene, scheme);
        }
        self.color_scheme = Some(scheme.clone());
    }

    /// Add the sector file's colors to `scheme` where it has no definition
    /// of its own.
    pub fn merge_sector_colors(&self, scheme: &mut ColorScheme) {
        let Some(scene) = &self.scene else {
            return;
        };
        for (name, rgb) in scene.colors() {
            if !scheme.is_defined(name) {
                debug!(name = %name, color = %rgb, "Adding sector file color");
                scheme.define(name, *rgb);
            }
        }
    }

    /// Recolor everything registered under `name` in the current scene.
    pub fn named_color_changed(&mut self, name: &str, rgb: Rgb) {
        if let Some(scene) = self.scene.as_mut() {
            scene.named_color_changed(name, rgb);
        }
        if let Some(scheme) = self.color_scheme.as_mut() {
            match name {
                GEO_COLOR_NAME => scheme.geo = rgb,
                SID_COLOR_NAME => scheme.sid = rgb,
                STAR_COLOR_NAME => scheme.star = rgb,
                _ => scheme.define(name, rgb),
            }
        }
    }
}

fn apply_scheme(scene: &mut SectorScene, scheme: &ColorScheme) {
    for (name, rgb) in &scheme.defined_colors {
        scene.named_color_changed(name, *rgb);
    }
    scene.named_color_changed(GEO_COLOR_NAME, scheme.geo);
    scene.named_color_changed(SID_COLOR_NAME, scheme.sid);
    scene.named_color_changed(STAR_COLOR_NAME, scheme.star);
}
