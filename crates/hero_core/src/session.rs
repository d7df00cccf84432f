//! Analysis session: everything a front end mutates between redraws.
//!
//! A session owns its catalog, both rosters, the list filter and the current
//! selection. Sessions share nothing, so several can run side by side.

use crate::analysis::{MatchupAnalyzer, MatchupReport};
use crate::catalog::{HeroCatalog, RoleFilter};
use crate::config::HeroConfig;
use crate::error::{CatalogError, ExportError, RecordFault, RosterError};
use crate::export;
use crate::models::{HeroRecord, Role, Roster, RosterShape};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The user's own team
    Ally,
    /// The opposing team
    Enemy,
}

#[derive(Debug)]
pub struct Session {
    catalog: HeroCatalog,
    load_error: Option<CatalogError>,
    faults: Vec<RecordFault>,
    ally: Roster,
    enemy: Roster,
    query: String,
    roles: RoleFilter,
    selected: Option<String>,
}

impl Session {
    /// Load the configured hero document. A missing or corrupt document is
    /// kept in `load_error` and the session starts with an empty catalog.
    pub fn open(config: &HeroConfig) -> Self {
        let shape = config.roster_shape.clone();
        match HeroCatalog::load(&config.data_path) {
            Ok(report) => {
                let mut session = Self::with_catalog(report.catalog, shape);
                session.faults = report.faults;
                session
            }
            Err(err) => {
                log::error!("Starting with an empty hero catalog: {}", err);
                let mut session = Self::with_catalog(HeroCatalog::empty(), shape);
                session.load_error = Some(err);
                session
            }
        }
    }

    pub fn with_catalog(catalog: HeroCatalog, shape: RosterShape) -> Self {
        Self {
            catalog,
            load_error: None,
            faults: Vec::new(),
            ally: Roster::new(shape.clone()),
            enemy: Roster::new(shape),
            query: String::new(),
            roles: RoleFilter::all(),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &HeroCatalog {
        &self.catalog
    }

    /// Why the catalog is empty, if loading failed.
    pub fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }

    pub fn faults(&self) -> &[RecordFault] {
        &self.faults
    }

    // ------------------------------------------------------------------
    // Hero list
    // ------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn role_filter(&self) -> &RoleFilter {
        &self.roles
    }

    pub fn role_filter_mut(&mut self) -> &mut RoleFilter {
        &mut self.roles
    }

    /// Heroes matching the current query and role filter.
    pub fn visible(&self) -> Vec<&HeroRecord> {
        self.catalog.filter(&self.query, &self.roles)
    }

    /// Select a hero by name; an unknown name clears the selection.
    pub fn select(&mut self, name: &str) -> Option<&HeroRecord> {
        self.selected = self.catalog.lookup(name).map(|h| h.name.clone());
        self.selected()
    }

    pub fn selected(&self) -> Option<&HeroRecord> {
        self.selected
            .as_deref()
            .and_then(|name| self.catalog.lookup(name))
    }

    pub fn export_selected(&self, dir: &Path) -> Result<Option<PathBuf>, ExportError> {
        self.selected()
            .map(|hero| export::export_hero(hero, dir))
            .transpose()
    }

    pub fn copy_selected(&self) -> Result<Option<String>, ExportError> {
        self.selected().map(export::clipboard_text).transpose()
    }

    // ------------------------------------------------------------------
    // Team builder
    // ------------------------------------------------------------------

    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::Ally => &self.ally,
            Side::Enemy => &self.enemy,
        }
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Ally => &mut self.ally,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Fill a slot from a picker. A name the catalog doesn't know empties
    /// the slot instead.
    pub fn assign(
        &mut self,
        side: Side,
        role: Role,
        index: usize,
        name: &str,
    ) -> Result<Option<&HeroRecord>, RosterError> {
        let resolved = self.catalog.lookup(name).map(|h| h.name.clone());
        let roster = self.roster_mut(side);
        match resolved {
            Some(name) => roster.assign(role, index, name)?,
            None => roster.clear(role, index)?,
        };
        Ok(self.catalog.lookup(name))
    }

    /// Put a hero into the first free slot of its own role. Returns the slot
    /// index, or `None` if the catalog doesn't know the hero.
    pub fn place(&mut self, side: Side, name: &str) -> Result<Option<usize>, RosterError> {
        let Some(hero) = self.catalog.lookup(name) else {
            return Ok(None);
        };
        let (role, name) = (hero.role, hero.name.clone());
        self.roster_mut(side).place(role, name).map(Some)
    }

    pub fn clear(&mut self, side: Side, role: Role, index: usize) -> Result<Option<String>, RosterError> {
        self.roster_mut(side).clear(role, index)
    }

    pub fn matchup(&self) -> MatchupReport {
        let user = self.catalog.resolve(&self.ally);
        let enemy = self.catalog.resolve(&self.enemy);
        MatchupAnalyzer::compute(&user, &enemy)
    }
}
