//! # hero_core - Hero Catalog and Matchup Analysis
//!
//! Data layer for a hero reference tool. A front end loads the hero
//! document once, then queries this crate on every keystroke and roster
//! change; the crate never draws anything itself.
//!
//! ## Features
//! - Tolerant loading: bad entries are reported and skipped, a missing or
//!   corrupt document degrades to an empty catalog
//! - Case-insensitive name search with a role allow-list
//! - Directional counter report between two configurable rosters
//! - Single-hero export to JSON file or clipboard text

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod sources;

pub use analysis::{CounterLine, MatchupAnalyzer, MatchupReport};
pub use catalog::{filter_heroes, HeroCatalog, LoadReport, RoleFilter};
pub use config::HeroConfig;
pub use error::{CatalogError, ConfigError, ExportError, ParseRoleError, RecordFault, RosterError};
pub use export::{clipboard_text, export_file_name, export_hero};
pub use models::{Ability, HeroRecord, Role, Roster, RosterShape, StatValue};
pub use session::{Session, Side};
pub use sources::{Source, SOURCES};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
