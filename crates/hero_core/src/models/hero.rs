use crate::error::ParseRoleError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hero role category. Serialized exactly as the source data spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Tank,
    #[serde(rename = "DPS")]
    Dps,
    Support,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Dps, Role::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Dps => "DPS",
            Role::Support => "Support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; also accepts "damage" for DPS since players use both.
impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tank" => Ok(Role::Tank),
            "dps" | "damage" => Ok(Role::Dps),
            "support" => Ok(Role::Support),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// A stat that the data file gives either as a number or as free text
/// (e.g. `250` or `"200 + 50 armor"`). Numbers keep their exact JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Number(value.into())
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "description")]
    pub desc: String,
    /// Cooldown, e.g. `6` or `"8s"`
    #[serde(default, alias = "cooldown", skip_serializing_if = "Option::is_none")]
    pub cd: Option<StatValue>,
}

/// One hero entry from the data file.
///
/// Optional stats stay `None` when absent and list fields default to empty,
/// so read sites never need their own fallbacks. `counters` and `synergies`
/// hold free-text hero names; they are not required to resolve to a catalog
/// entry and are never validated against one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<StatValue>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub abilities: Vec<Ability>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub weaknesses: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub synergies: Vec<String>,
    #[serde(default, deserialize_with = "list_or_null")]
    pub counters: Vec<String>,
    /// Keys this model doesn't know about, written back unchanged on export.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HeroRecord {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            health: None,
            damage: None,
            abilities: Vec::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            synergies: Vec::new(),
            counters: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_counters<I, S>(mut self, counters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.counters = counters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_synergies<I, S>(mut self, synergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synergies = synergies.into_iter().map(Into::into).collect();
        self
    }

    pub fn counters_hero(&self, other: &str) -> bool {
        self.counters.iter().any(|c| c == other)
    }

    /// Trim the name and every hero-name reference. Matching elsewhere is
    /// exact equality on the normalized text.
    pub(crate) fn normalize(&mut self) {
        trim_in_place(&mut self.name);
        for name in self.counters.iter_mut().chain(self.synergies.iter_mut()) {
            trim_in_place(name);
        }
    }
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}

/// `null` reads the same as a missing list.
fn list_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
