//! # Hero Catalog
//!
//! The read-only set of hero records for one session.
//!
//! - `loader` - document decoding and per-record integrity checks
//! - `query` - role allow-list and name filtering

pub mod loader;
pub mod query;

pub use loader::HEROES_KEY;
pub use query::{filter_heroes, RoleFilter};

use crate::error::{CatalogError, RecordFault};
use crate::models::{HeroRecord, Role, Roster};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Catalog plus the entries that were rejected while building it.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub catalog: HeroCatalog,
    pub faults: Vec<RecordFault>,
}

/// Heroes in source order with a name index for exact lookup.
#[derive(Debug, Clone, Default)]
pub struct HeroCatalog {
    heroes: Vec<HeroRecord>,
    by_name: FxHashMap<String, usize>,
}

impl HeroCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and decode the hero document at `path`.
    ///
    /// A missing or unreadable file is `DataUnavailable`; content that is not
    /// a JSON object with a `heroes` array is `DataCorrupt`. Individual bad
    /// entries do not fail the load; they come back in `LoadReport::faults`.
    pub fn load(path: &Path) -> Result<LoadReport, CatalogError> {
        let bytes = fs::read(path).map_err(|source| CatalogError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let report = Self::from_json_slice(&bytes)?;
        log::info!(
            "Loaded {} heroes from {} ({} skipped)",
            report.catalog.len(),
            path.display(),
            report.faults.len()
        );
        Ok(report)
    }

    pub fn from_json_str(json: &str) -> Result<LoadReport, CatalogError> {
        Self::from_json_slice(json.as_bytes())
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<LoadReport, CatalogError> {
        let (records, faults) = loader::decode_document(bytes)?;
        Ok(Self::assemble(records, faults))
    }

    /// Build a catalog from records already in memory. Names are normalized;
    /// blank and duplicate names are rejected the same way the loader does.
    pub fn from_records(records: Vec<HeroRecord>) -> LoadReport {
        let mut kept = Vec::with_capacity(records.len());
        let mut faults = Vec::new();
        for (index, mut record) in records.into_iter().enumerate() {
            record.normalize();
            if record.name.is_empty() {
                faults.push(RecordFault::MissingField {
                    index,
                    field: "name",
                });
            } else {
                kept.push((index, record));
            }
        }
        Self::assemble(kept, faults)
    }

    fn assemble(records: Vec<(usize, HeroRecord)>, mut faults: Vec<RecordFault>) -> LoadReport {
        let mut catalog = HeroCatalog {
            heroes: Vec::with_capacity(records.len()),
            by_name: FxHashMap::default(),
        };

        for (index, record) in records {
            if catalog.by_name.contains_key(&record.name) {
                faults.push(RecordFault::DuplicateName {
                    index,
                    name: record.name,
                });
                continue;
            }
            catalog.by_name.insert(record.name.clone(), catalog.heroes.len());
            catalog.heroes.push(record);
        }

        faults.sort_by_key(RecordFault::index);
        for fault in &faults {
            log::warn!("Skipped hero entry: {}", fault);
        }

        LoadReport { catalog, faults }
    }

    /// Exact-name lookup; `None` is the normal not-found answer.
    pub fn lookup(&self, name: &str) -> Option<&HeroRecord> {
        self.by_name.get(name).map(|&i| &self.heroes[i])
    }

    pub fn filter(&self, query: &str, roles: &RoleFilter) -> Vec<&HeroRecord> {
        filter_heroes(&self.heroes, query, roles)
    }

    /// Names with the given role, in catalog order (slot picker options).
    pub fn names_for_role(&self, role: Role) -> Vec<&str> {
        self.heroes
            .iter()
            .filter(|h| h.role == role)
            .map(|h| h.name.as_str())
            .collect()
    }

    /// Occupied roster slots resolved to records, in role-then-slot order.
    /// Names this catalog doesn't know are skipped.
    pub fn resolve(&self, roster: &Roster) -> Vec<&HeroRecord> {
        roster
            .occupied()
            .filter_map(|name| {
                let hero = self.lookup(name);
                if hero.is_none() {
                    log::debug!("Roster slot names unknown hero '{}'", name);
                }
                hero
            })
            .collect()
    }

    pub fn heroes(&self) -> &[HeroRecord] {
        &self.heroes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeroRecord> {
        self.heroes.iter()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeroCatalog {
    type Item = &'a HeroRecord;
    type IntoIter = std::slice::Iter<'a, HeroRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.heroes.iter()
    }
}
