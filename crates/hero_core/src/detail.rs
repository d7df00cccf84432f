//! Human-readable hero details for a detail pane.

use crate::models::{HeroRecord, StatValue};

/// Shown for any stat the data file leaves out.
pub const NOT_AVAILABLE: &str = "N/A";

fn stat_or_na(stat: Option<&StatValue>) -> String {
    stat.map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

/// Detail lines for one hero. Blank strings separate sections.
pub fn describe(hero: &HeroRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Role: {}", hero.role),
        format!("Health: {}", stat_or_na(hero.health.as_ref())),
        format!("Damage: {}", stat_or_na(hero.damage.as_ref())),
    ];

    if !hero.abilities.is_empty() {
        lines.push(String::new());
        lines.push("Abilities:".to_string());
        for ability in &hero.abilities {
            lines.push(format!(
                "  • {}: {} (Cooldown: {})",
                ability.name,
                ability.desc,
                stat_or_na(ability.cd.as_ref())
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Strengths: {}", hero.strengths.join(", ")));
    lines.push(format!("Weaknesses: {}", hero.weaknesses.join(", ")));
    lines.push(format!("Synergies: {}", hero.synergies.join(", ")));
    lines.push(format!("Counters: {}", hero.counters.join(", ")));
    lines
}

pub fn render(hero: &HeroRecord) -> String {
    describe(hero).join("\n")
}
