//! # Matchup Analysis
//!
//! Directional counter report between two drafted sides.
//!
//! User-side lines always come before enemy-side lines, each group in the
//! order the heroes were read out of their roster.

use crate::models::HeroRecord;
use rustc_hash::FxHashSet;
use std::fmt;

/// One hero and the opposing heroes it counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLine {
    pub hero: String,
    pub countered: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchupReport {
    /// User heroes in roster order
    pub user_team: Vec<String>,
    /// Enemy heroes in roster order
    pub enemy_team: Vec<String>,
    /// User heroes that counter someone on the enemy side
    pub user_counters: Vec<CounterLine>,
    /// Enemy heroes that counter someone on the user side
    pub enemy_counters: Vec<CounterLine>,
}

impl MatchupReport {
    /// Counter analysis only runs when both sides have at least one hero.
    pub fn analyzed(&self) -> bool {
        !self.user_team.is_empty() && !self.enemy_team.is_empty()
    }

    /// Rendered counter lines without the team summary, user side first.
    pub fn counter_lines(&self) -> Vec<String> {
        let user = self
            .user_counters
            .iter()
            .map(|l| format!("{} counters: {}", l.hero, l.countered.join(", ")));
        let enemy = self
            .enemy_counters
            .iter()
            .map(|l| format!("Enemy {} counters: {}", l.hero, l.countered.join(", ")));
        user.chain(enemy).collect()
    }
}

impl fmt::Display for MatchupReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_team(f, "Your Team", &self.user_team)?;
        writeln!(f)?;
        write_team(f, "Enemy Team", &self.enemy_team)?;
        writeln!(f)?;

        if self.analyzed() {
            writeln!(f)?;
            write!(f, "Matchup Analysis:")?;
            for line in self.counter_lines() {
                write!(f, "\n  {}", line)?;
            }
        }
        Ok(())
    }
}

fn write_team(f: &mut fmt::Formatter, label: &str, team: &[String]) -> fmt::Result {
    if team.is_empty() {
        write!(f, "{}: (empty)", label)
    } else {
        write!(f, "{}:\n  {}", label, team.join(", "))
    }
}

/// Stateless counter analysis over resolved hero records.
pub struct MatchupAnalyzer;

impl MatchupAnalyzer {
    /// Compare two sides. When either side is empty the report carries only
    /// the team summary and no counter lines.
    pub fn compute(user: &[&HeroRecord], enemy: &[&HeroRecord]) -> MatchupReport {
        let mut report = MatchupReport {
            user_team: user.iter().map(|h| h.name.clone()).collect(),
            enemy_team: enemy.iter().map(|h| h.name.clone()).collect(),
            ..Default::default()
        };

        if report.analyzed() {
            report.user_counters = counter_lines(user, enemy);
            report.enemy_counters = counter_lines(enemy, user);
        }
        report
    }
}

fn counter_lines(attackers: &[&HeroRecord], defenders: &[&HeroRecord]) -> Vec<CounterLine> {
    attackers
        .iter()
        .filter_map(|hero| {
            let counters: FxHashSet<&str> = hero.counters.iter().map(String::as_str).collect();
            let mut countered: Vec<String> = Vec::new();
            for target in defenders {
                if counters.contains(target.name.as_str()) && !countered.contains(&target.name) {
                    countered.push(target.name.clone());
                }
            }
            if countered.is_empty() {
                None
            } else {
                Some(CounterLine {
                    hero: hero.name.clone(),
                    countered,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn hero(name: &str, role: Role, counters: &[&str]) -> HeroRecord {
        HeroRecord::new(name, role).with_counters(counters.iter().copied())
    }

    #[test]
    fn test_single_counter_line() {
        let a = hero("A", Role::Dps, &["B"]);
        let b = hero("B", Role::Tank, &[]);

        let report = MatchupAnalyzer::compute(&[&a], &[&b]);
        assert!(report.analyzed());
        assert_eq!(report.counter_lines(), vec!["A counters: B"]);
        assert!(report.enemy_counters.is_empty());
    }

    #[test]
    fn test_empty_side_skips_analysis() {
        let a = hero("A", Role::Dps, &["B"]);

        let report = MatchupAnalyzer::compute(&[&a], &[]);
        assert!(!report.analyzed());
        assert!(report.counter_lines().is_empty());
        assert_eq!(report.to_string(), "Your Team:\n  A\nEnemy Team: (empty)\n");

        let report = MatchupAnalyzer::compute(&[], &[&a]);
        assert!(report.counter_lines().is_empty());
        assert_eq!(report.to_string(), "Your Team: (empty)\nEnemy Team:\n  A\n");
    }

    #[test]
    fn test_user_lines_before_enemy_lines() {
        let ana = hero("Ana", Role::Support, &["Roadhog"]);
        let genji = hero("Genji", Role::Dps, &["Zenyatta", "Ana"]);
        let roadhog = hero("Roadhog", Role::Tank, &["Genji"]);
        let zen = hero("Zenyatta", Role::Support, &["Roadhog"]);

        let report = MatchupAnalyzer::compute(&[&genji, &ana], &[&roadhog, &zen]);
        assert_eq!(
            report.counter_lines(),
            vec![
                "Genji counters: Zenyatta",
                "Ana counters: Roadhog",
                "Enemy Roadhog counters: Genji",
            ]
        );
    }

    #[test]
    fn test_countered_names_follow_roster_order() {
        let sombra = hero("Sombra", Role::Dps, &["Baptiste", "Doomfist", "Zarya"]);
        let zarya = hero("Zarya", Role::Tank, &[]);
        let bap = hero("Baptiste", Role::Support, &[]);

        let report = MatchupAnalyzer::compute(&[&sombra], &[&zarya, &bap, &zarya]);
        assert_eq!(report.counter_lines(), vec!["Sombra counters: Zarya, Baptiste"]);
    }

    #[test]
    fn test_dangling_counters_ignored() {
        let a = hero("A", Role::Dps, &["Nobody", "b"]);
        let b = hero("B", Role::Tank, &[]);

        let report = MatchupAnalyzer::compute(&[&a], &[&b]);
        assert!(report.analyzed());
        assert!(report.counter_lines().is_empty());
        assert_eq!(
            report.to_string(),
            "Your Team:\n  A\nEnemy Team:\n  B\n\nMatchup Analysis:"
        );
    }

    #[test]
    fn test_full_rendering() {
        let a = hero("A", Role::Tank, &["B"]);
        let c = hero("C", Role::Dps, &[]);
        let b = hero("B", Role::Support, &["C"]);

        let report = MatchupAnalyzer::compute(&[&a, &c], &[&b]);
        let expected = "Your Team:\n  A, C\nEnemy Team:\n  B\n\nMatchup Analysis:\n  A counters: B\n  Enemy B counters: C";
        assert_eq!(report.to_string(), expected);
        assert_eq!(report.to_string(), MatchupAnalyzer::compute(&[&a, &c], &[&b]).to_string());
    }
}
