use crate::models::{HeroRecord, Role};
use std::collections::BTreeSet;

/// Explicit allow-list of roles shown by a filter.
///
/// An unchecked role is excluded, and an empty allow-list shows nothing.
/// The default allows every role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFilter {
    allowed: BTreeSet<Role>,
}

impl RoleFilter {
    pub fn all() -> Self {
        Self {
            allowed: Role::ALL.into_iter().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            allowed: BTreeSet::new(),
        }
    }

    pub fn only<I: IntoIterator<Item = Role>>(roles: I) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    pub fn allow(&mut self, role: Role) -> &mut Self {
        self.allowed.insert(role);
        self
    }

    pub fn deny(&mut self, role: Role) -> &mut Self {
        self.allowed.remove(&role);
        self
    }

    /// Flip a role, returning whether it is now allowed.
    pub fn toggle(&mut self, role: Role) -> bool {
        if !self.allowed.remove(&role) {
            self.allowed.insert(role);
            true
        } else {
            false
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }

    pub fn allowed(&self) -> impl Iterator<Item = Role> + '_ {
        self.allowed.iter().copied()
    }
}

impl Default for RoleFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Heroes whose name contains `query` (case-insensitive) and whose role is
/// allowed, in input order. An empty query matches every name.
pub fn filter_heroes<'a, I>(heroes: I, query: &str, roles: &RoleFilter) -> Vec<&'a HeroRecord>
where
    I: IntoIterator<Item = &'a HeroRecord>,
{
    let needle = query.to_lowercase();
    heroes
        .into_iter()
        .filter(|hero| roles.allows(hero.role))
        .filter(|hero| needle.is_empty() || hero.name.to_lowercase().contains(&needle))
        .collect()
}
