pub mod hero;
pub mod roster;

pub use hero::{Ability, HeroRecord, Role, StatValue};
pub use roster::{Roster, RosterShape};
