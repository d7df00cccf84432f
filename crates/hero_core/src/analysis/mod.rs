//! # Analysis Module
//!
//! - `matchup` - counter relationships between two rosters

pub mod matchup;

pub use matchup::{CounterLine, MatchupAnalyzer, MatchupReport};
