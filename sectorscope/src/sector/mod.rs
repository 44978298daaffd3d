//! Sector file document model and load pipeline.
//!
//! A sector file describes an ATC facility's map: named points, runways,
//! ARTCC boundaries, filled regions, airways, SID/STAR diagrams, map art and
//! color definitions. The grammar parser itself is supplied by the host
//! through [`SectorFileParser`]; this module owns the document types it
//! produces and the [`SectorLoader`] that runs it in isolation.

mod document;
mod error;
mod loader;
mod parser;

pub use document::{
    Airway, Artcc, ColoredSegment, Geo, LatLong, NamedLatLong, Region, SectorColor, SectorFile,
    SectorLabel, SectorRunway, Segment, SidStar,
};
pub use error::LoadError;
pub use loader::SectorLoader;
pub use parser::{SectorFileParser, SectorParseError};
