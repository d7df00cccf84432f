use super::Role;
use crate::error::{ConfigError, RosterError};
use std::fmt;
use std::str::FromStr;

/// Slot layout for one side: which roles exist, in what order, and how many
/// slots each gets. Order here is the order heroes are read out of a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterShape {
    roles: Vec<(Role, usize)>,
}

impl RosterShape {
    pub fn new<I>(roles: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Role, usize)>,
    {
        let roles: Vec<(Role, usize)> = roles.into_iter().collect();
        if roles.is_empty() {
            return Err(ConfigError::InvalidShape {
                input: String::new(),
                reason: "no roles given".to_string(),
            });
        }
        for (i, (role, _)) in roles.iter().enumerate() {
            if roles[..i].iter().any(|(r, _)| r == role) {
                return Err(ConfigError::InvalidShape {
                    input: describe(&roles),
                    reason: format!("{} listed more than once", role),
                });
            }
        }
        Ok(Self { roles })
    }

    /// 1 Tank, 2 DPS, 2 Support.
    pub fn standard() -> Self {
        Self {
            roles: vec![(Role::Tank, 1), (Role::Dps, 2), (Role::Support, 2)],
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().map(|(role, _)| *role)
    }

    /// `None` when the shape has no entry for `role`.
    pub fn capacity(&self, role: Role) -> Option<usize> {
        self.roles.iter().find(|(r, _)| *r == role).map(|(_, n)| *n)
    }

    pub fn total_slots(&self) -> usize {
        self.roles.iter().map(|(_, n)| n).sum()
    }

    fn position(&self, role: Role) -> Option<usize> {
        self.roles.iter().position(|(r, _)| *r == role)
    }
}

impl Default for RosterShape {
    fn default() -> Self {
        Self::standard()
    }
}

fn describe(roles: &[(Role, usize)]) -> String {
    roles
        .iter()
        .map(|(role, n)| format!("{}={}", role, n))
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for RosterShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&describe(&self.roles))
    }
}

/// Parses `Tank=1,DPS=2,Support=2`.
impl FromStr for RosterShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidShape {
            input: s.to_string(),
            reason,
        };

        let mut roles = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (role, count) = part
                .split_once('=')
                .ok_or_else(|| invalid(format!("expected ROLE=COUNT, got `{}`", part)))?;
            let role: Role = role.parse().map_err(|e| invalid(format!("{}", e)))?;
            let count: usize = count
                .trim()
                .parse()
                .map_err(|_| invalid(format!("bad slot count `{}`", count.trim())))?;
            roles.push((role, count));
        }

        RosterShape::new(roles).map_err(|e| match e {
            ConfigError::InvalidShape { reason, .. } => invalid(reason),
        })
    }
}

/// One side of a matchup. Slots hold hero names, never copies of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    shape: RosterShape,
    // Parallel to `shape.roles`
    slots: Vec<Vec<Option<String>>>,
}

impl Roster {
    pub fn new(shape: RosterShape) -> Self {
        let slots = shape.roles.iter().map(|(_, n)| vec![None; *n]).collect();
        Self { shape, slots }
    }

    pub fn shape(&self) -> &RosterShape {
        &self.shape
    }

    /// Put `name` into a slot, returning whoever was there before.
    pub fn assign(
        &mut self,
        role: Role,
        index: usize,
        name: impl Into<String>,
    ) -> Result<Option<String>, RosterError> {
        let slot = self.slot_mut(role, index)?;
        Ok(slot.replace(name.into()))
    }

    pub fn clear(&mut self, role: Role, index: usize) -> Result<Option<String>, RosterError> {
        let slot = self.slot_mut(role, index)?;
        Ok(slot.take())
    }

    /// Put `name` into the first free slot of `role` and return that index.
    pub fn place(&mut self, role: Role, name: impl Into<String>) -> Result<usize, RosterError> {
        let slots = self.role_slots_mut(role)?;
        let index = slots
            .iter()
            .position(Option::is_none)
            .ok_or(RosterError::RoleFull { role })?;
        slots[index] = Some(name.into());
        Ok(index)
    }

    pub fn slot(&self, role: Role, index: usize) -> Option<&str> {
        self.slots(role).get(index).and_then(|s| s.as_deref())
    }

    /// Slots for `role`; empty when the shape has no such role.
    pub fn slots(&self, role: Role) -> &[Option<String>] {
        match self.shape.position(role) {
            Some(pos) => &self.slots[pos],
            None => &[],
        }
    }

    /// Occupied hero names in role-then-slot order.
    pub fn occupied(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().flatten().filter_map(|s| s.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }

    pub fn reset(&mut self) {
        for slots in &mut self.slots {
            slots.iter_mut().for_each(|s| *s = None);
        }
    }

    fn role_slots_mut(&mut self, role: Role) -> Result<&mut Vec<Option<String>>, RosterError> {
        let pos = self
            .shape
            .position(role)
            .ok_or(RosterError::UnknownRole { role })?;
        Ok(&mut self.slots[pos])
    }

    fn slot_mut(&mut self, role: Role, index: usize) -> Result<&mut Option<String>, RosterError> {
        let slots = self.role_slots_mut(role)?;
        let capacity = slots.len();
        slots.get_mut(index).ok_or(RosterError::SlotOutOfRange {
            role,
            index,
            capacity,
        })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(RosterShape::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shape() {
        let shape = RosterShape::standard();
        assert_eq!(shape.capacity(Role::Tank), Some(1));
        assert_eq!(shape.capacity(Role::Dps), Some(2));
        assert_eq!(shape.capacity(Role::Support), Some(2));
        assert_eq!(shape.total_slots(), 5);
        assert_eq!(shape.to_string(), "Tank=1,DPS=2,Support=2");
    }

    #[test]
    fn test_shape_parse() {
        let shape: RosterShape = "Tank=2, Support=3".parse().unwrap();
        assert_eq!(shape.roles().collect::<Vec<_>>(), vec![Role::Tank, Role::Support]);
        assert_eq!(shape.capacity(Role::Dps), None);
        assert_eq!(shape.total_slots(), 5);

        assert_eq!("Tank=1,DPS=2,Support=2".parse::<RosterShape>().unwrap(), RosterShape::standard());
    }

    #[test]
    fn test_shape_parse_errors() {
        assert!("".parse::<RosterShape>().is_err());
        assert!("Tank".parse::<RosterShape>().is_err());
        assert!("Tank=x".parse::<RosterShape>().is_err());
        assert!("Healer=2".parse::<RosterShape>().is_err());

        let err = "Tank=1,tank=2".parse::<RosterShape>().unwrap_err();
        assert!(err.to_string().contains("more than once"), "{}", err);
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert_eq!(roster.slots(Role::Dps), &[None::<String>, None]);
    }

    #[test]
    fn test_assign_and_clear() {
        let mut roster = Roster::default();
        assert_eq!(roster.assign(Role::Dps, 1, "Tracer").unwrap(), None);
        assert_eq!(roster.assign(Role::Dps, 1, "Genji").unwrap(), Some("Tracer".to_string()));
        assert_eq!(roster.slot(Role::Dps, 1), Some("Genji"));
        assert_eq!(roster.clear(Role::Dps, 1).unwrap(), Some("Genji".to_string()));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_assign_out_of_range() {
        let mut roster = Roster::default();
        assert_eq!(
            roster.assign(Role::Tank, 1, "Winston"),
            Err(RosterError::SlotOutOfRange {
                role: Role::Tank,
                index: 1,
                capacity: 1
            })
        );

        let mut support_only = Roster::new("Support=2".parse().unwrap());
        assert_eq!(
            support_only.assign(Role::Tank, 0, "Winston"),
            Err(RosterError::UnknownRole { role: Role::Tank })
        );
    }

    #[test]
    fn test_place_fills_first_free_slot() {
        let mut roster = Roster::default();
        roster.assign(Role::Support, 0, "Ana").unwrap();
        assert_eq!(roster.place(Role::Support, "Lucio").unwrap(), 1);
        assert_eq!(
            roster.place(Role::Support, "Mercy"),
            Err(RosterError::RoleFull { role: Role::Support })
        );
    }

    #[test]
    fn test_occupied_is_role_then_slot_order() {
        let mut roster = Roster::default();
        roster.assign(Role::Support, 1, "Kiriko").unwrap();
        roster.assign(Role::Dps, 1, "Sojourn").unwrap();
        roster.assign(Role::Tank, 0, "Sigma").unwrap();
        roster.assign(Role::Dps, 0, "Cassidy").unwrap();

        let names: Vec<&str> = roster.occupied().collect();
        assert_eq!(names, vec!["Sigma", "Cassidy", "Sojourn", "Kiriko"]);

        roster.reset();
        assert!(roster.is_empty());
    }
}
