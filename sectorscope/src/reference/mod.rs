//! FAA and third-party reference tables.
//!
//! Navaids, airports, fixes, preferred routes and airline callsigns. Tables
//! are loaded from a directory holding the NASR CSV extracts (optionally
//! `.zst` or `.gz` compressed). Loading is best effort: a missing or
//! damaged table is logged and leaves that table empty or partial.

mod parse;
mod source;
mod types;

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use tracing::{info, instrument};

use crate::geo::Point2LL;

pub use parse::{
    parse_callsigns, parse_faa_airports, parse_fixes, parse_global_airports, parse_navaids,
    parse_prd,
};
pub use types::{Airport, AirportPair, Callsign, Fix, Navaid, PrdEntry};

/// File names looked up by [`ReferenceTables::load_from_dir`].
pub const NAVAID_TABLE: &str = "NAV_BASE.csv";
pub const AIRPORT_TABLE: &str = "APT_BASE.csv";
pub const GLOBAL_AIRPORT_TABLE: &str = "GlobalAirportDatabase.txt";
pub const FIX_TABLE: &str = "FIX_BASE.csv";
pub const PRD_TABLE: &str = "prefroutes_db.csv";
pub const CALLSIGN_TABLE: &str = "callsigns.csv";
pub const VIRTUAL_CALLSIGN_TABLE: &str = "virtual-callsigns.csv";

/// All reference tables, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    navaids: HashMap<String, Navaid>,
    airports: HashMap<String, Airport>,
    fixes: HashMap<String, Fix>,
    prd: HashMap<AirportPair, Vec<PrdEntry>>,
    callsigns: HashMap<String, Callsign>,
}

impl ReferenceTables {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every table found in `dir`.
    #[instrument(skip(dir), fields(dir = %dir.display()))]
    pub fn load_from_dir(dir: &Path) -> Self {
        let start = Instant::now();
        let mut tables = Self::new();

        if let Some(r) = source::open_table(dir, NAVAID_TABLE) {
            parse_navaids(r, &mut tables.navaids);
        }
        if let Some(r) = source::open_table(dir, AIRPORT_TABLE) {
            parse_faa_airports(r, &mut tables.airports);
        }
        if let Some(r) = source::open_table(dir, GLOBAL_AIRPORT_TABLE) {
            parse_global_airports(r, &mut tables.airports);
        }
        if let Some(r) = source::open_table(dir, FIX_TABLE) {
            parse_fixes(r, &mut tables.fixes);
        }
        if let Some(r) = source::open_table(dir, PRD_TABLE) {
            parse_prd(r, &mut tables.prd);
        }
        if let Some(r) = source::open_table(dir, CALLSIGN_TABLE) {
            parse_callsigns("callsigns", r, &mut tables.callsigns);
        }
        // Virtual airlines go second so they take precedence.
        if let Some(r) = source::open_table(dir, VIRTUAL_CALLSIGN_TABLE) {
            parse_callsigns("virtual callsigns", r, &mut tables.callsigns);
        }

        info!(
            navaids = tables.navaids.len(),
            airports = tables.airports.len(),
            fixes = tables.fixes.len(),
            routes = tables.prd.len(),
            callsigns = tables.callsigns.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Loaded reference tables"
        );
        tables
    }

    pub fn navaid(&self, id: &str) -> Option<&Navaid> {
        self.navaids.get(id)
    }

    pub fn airport(&self, id: &str) -> Option<&Airport> {
        self.airports.get(id)
    }

    pub fn fix(&self, id: &str) -> Option<&Fix> {
        self.fixes.get(id)
    }

    /// Location of a navaid, fix or airport, searched in that order.
    /// `id` must already be upper case.
    pub fn locate(&self, id: &str) -> Option<Point2LL> {
        self.navaid(id)
            .map(|n| n.location)
            .or_else(|| self.fix(id).map(|f| f.location))
            .or_else(|| self.airport(id).map(|a| a.location))
    }

    pub fn callsign(&self, three_letter: &str) -> Option<&Callsign> {
        self.callsigns.get(three_letter)
    }

    /// Preferred routes from `depart` to `arrive`, empty if none.
    pub fn preferred_routes(&self, depart: &str, arrive: &str) -> &[PrdEntry] {
        self.prd
            .get(&AirportPair::new(depart, arrive))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn navaid_count(&self) -> usize {
        self.navaids.len()
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    pub fn fix_count(&self) -> usize {
        self.fixes.len()
    }

    pub fn callsign_count(&self) -> usize {
        self.callsigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.navaids.is_empty()
            && self.airports.is_empty()
            && self.fixes.is_empty()
            && self.prd.is_empty()
            && self.callsigns.is_empty()
    }

    /// Insert a navaid, replacing any with the same id.
    pub fn insert_navaid(&mut self, navaid: Navaid) {
        self.navaids.insert(navaid.id.clone(), navaid);
    }

    /// Insert an airport, replacing any with the same id.
    pub fn insert_airport(&mut self, airport: Airport) {
        self.airports.insert(airport.id.clone(), airport);
    }

    /// Insert a fix, replacing any with the same id.
    pub fn insert_fix(&mut self, fix: Fix) {
        self.fixes.insert(fix.id.clone(), fix);
    }
}
