//! Single-hero export to a JSON file and to clipboard text.

use crate::error::ExportError;
use crate::models::HeroRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// File name for an exported hero: anything other than ASCII letters,
/// digits, `-` and `_` becomes `_`.
///
/// `"Soldier: 76"` → `"Soldier__76.json"`
pub fn export_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.json", stem)
}

/// Pretty JSON (2-space indent) for the clipboard.
pub fn clipboard_text(hero: &HeroRecord) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(hero)?)
}

/// Write `hero` to `dir/<export_file_name>`, replacing any existing file.
pub fn export_hero(hero: &HeroRecord, dir: &Path) -> Result<PathBuf, ExportError> {
    let json = clipboard_text(hero)?;
    let path = dir.join(export_file_name(&hero.name));

    fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("Exported {} to {}", hero.name, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ability, Role, StatValue};
    use anyhow::Result;

    fn sample() -> HeroRecord {
        let mut hero = HeroRecord::new("Soldier: 76", Role::Dps).with_counters(["Pharah"]);
        hero.health = Some(StatValue::from(250_i64));
        hero.damage = Some(StatValue::from("19 per bullet"));
        hero.abilities = vec![Ability {
            name: "Biotic Field".to_string(),
            desc: "Heals nearby allies".to_string(),
            cd: Some(StatValue::from("15s")),
        }];
        hero.weaknesses = vec!["Flankers".to_string()];
        hero.extra
            .insert("tier".to_string(), serde_json::json!({"rank": "B", "score": 71.5}));
        hero
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Soldier: 76"), "Soldier__76.json");
        assert_eq!(export_file_name("Junker Queen"), "Junker_Queen.json");
        assert_eq!(export_file_name("D.Va"), "D_Va.json");
        assert_eq!(export_file_name("Lúcio"), "L_cio.json");
        assert_eq!(export_file_name("Torbjörn"), "Torbj_rn.json");
    }

    #[test]
    fn test_export_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let hero = sample();

        let path = export_hero(&hero, dir.path())?;
        assert_eq!(path, dir.path().join("Soldier__76.json"));

        let parsed: HeroRecord = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(parsed, hero);
        Ok(())
    }

    #[test]
    fn test_export_overwrites() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut hero = sample();
        export_hero(&hero, dir.path())?;

        hero.counters.push("Echo".to_string());
        let path = export_hero(&hero, dir.path())?;

        let parsed: HeroRecord = serde_json::from_str(&fs::read_to_string(path)?)?;
        assert_eq!(parsed.counters, vec!["Pharah", "Echo"]);
        Ok(())
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = export_hero(&sample(), &missing).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn test_clipboard_text_is_pretty() {
        let text = clipboard_text(&HeroRecord::new("Ana", Role::Support)).unwrap();
        assert!(text.starts_with("{\n  \"name\": \"Ana\",\n  \"role\": \"Support\""));
    }
}
