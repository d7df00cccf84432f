//! Hero Tool Library
//!
//! Session setup and text output behind the `hero_tool` commands.

use anyhow::{bail, Context, Result};
use hero_core::{detail, HeroConfig, Role, RosterShape, Session, Side, SOURCES};
use std::path::{Path, PathBuf};

/// Command-line overrides layered on top of `HeroConfig::from_env`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data: Option<PathBuf>,
    pub shape: Option<String>,
}

pub fn resolve_config(overrides: &Overrides) -> Result<HeroConfig> {
    let mut config = HeroConfig::from_env().context("Invalid environment configuration")?;
    if let Some(data) = &overrides.data {
        config.data_path = data.clone();
    }
    if let Some(shape) = &overrides.shape {
        config.roster_shape = shape
            .parse::<RosterShape>()
            .with_context(|| format!("Invalid --shape value: {}", shape))?;
    }
    Ok(config)
}

/// Open a session. A broken data file still yields a usable (empty) session;
/// load errors and skipped entries are already reported through `log`.
pub fn open_session(config: &HeroConfig) -> Session {
    let session = Session::open(config);
    log::info!(
        "Loaded {} heroes from {} ({} skipped)",
        session.catalog().len(),
        config.data_path.display(),
        session.faults().len()
    );
    session
}

/// One line per visible hero: `Name (Role)`.
pub fn list_heroes(session: &mut Session, query: &str, roles: &[Role]) -> String {
    session.set_query(query);
    if !roles.is_empty() {
        let filter = session.role_filter_mut();
        for role in Role::ALL {
            if roles.contains(&role) {
                filter.allow(role);
            } else {
                filter.deny(role);
            }
        }
    }

    session
        .visible()
        .iter()
        .map(|h| format!("{} ({})", h.name, h.role))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show_hero(session: &mut Session, name: &str) -> Result<String> {
    let Some(hero) = session.select(name) else {
        bail!("Unknown hero: {}", name);
    };
    Ok(format!("{}\n{}", hero.name, detail::render(hero)))
}

/// Draft both sides into their first free role slots and render the report.
pub fn run_matchup(session: &mut Session, allies: &[String], enemies: &[String]) -> Result<String> {
    for (side, names) in [(Side::Ally, allies), (Side::Enemy, enemies)] {
        for name in names {
            let placed = session
                .place(side, name)
                .with_context(|| format!("Cannot draft {} for {:?}", name, side))?;
            if placed.is_none() {
                bail!("Unknown hero: {}", name);
            }
        }
    }
    Ok(session.matchup().to_string())
}

pub fn export_hero(session: &mut Session, name: &str, dir: &Path) -> Result<PathBuf> {
    if session.select(name).is_none() {
        bail!("Unknown hero: {}", name);
    }
    let path = session
        .export_selected(dir)
        .with_context(|| format!("Failed to export {}", name))?;
    path.context("No hero selected")
}

pub fn copy_hero(session: &mut Session, name: &str) -> Result<String> {
    if session.select(name).is_none() {
        bail!("Unknown hero: {}", name);
    }
    session.copy_selected()?.context("No hero selected")
}

pub fn sources_text() -> String {
    SOURCES
        .iter()
        .map(|s| format!("{}\n  {}", s.title, s.url))
        .collect::<Vec<_>>()
        .join("\n")
}
