//! SectorScope - static scene compiler for ATC sector files
//!
//! This library turns a parsed sector file into render-ready geometry and
//! keeps it alongside the FAA reference tables and the facility's position
//! file:
//!
//! - filled regions are merged by name and triangulated
//! - airway segments shared by several airways are drawn and labeled once
//! - SID, STAR and Geo lines carry per-segment colors that can be changed by
//!   color name without recompiling
//!
//! # High-Level API
//!
//! [`database::StaticDatabase`] is the entry point. The sector file grammar
//! parser is supplied by the caller through [`sector::SectorFileParser`]:
//!
//! ```ignore
//! use sectorscope::database::StaticDatabase;
//! use sectorscope::reference::ReferenceTables;
//!
//! let reference = ReferenceTables::load_from_dir(&nasr_dir);
//! let mut db = StaticDatabase::new(reference, Arc::new(MyParser));
//! db.load_sector_file(&sector_path).await?;
//! db.set_color_scheme(&config.color_scheme());
//! ```

pub mod config;
pub mod database;
pub mod draw;
pub mod geo;
pub mod logging;
pub mod notify;
pub mod panic;
pub mod position;
pub mod reference;
pub mod scene;
pub mod sector;

/// Version of the SectorScope library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
