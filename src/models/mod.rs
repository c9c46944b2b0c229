//! Tournament domain models.
//!
//! Name-based values returned to callers and stored in snapshots, plus the
//! position-based [`PlayerId`] used internally by the generator.
//!
//! # Domain Mappings
//!
//! | padel-matcher | Tournament term |
//! |---------------|-----------------|
//! | Roster | Entry list |
//! | Team | Partnership |
//! | Court | Match |
//! | Round | Rotation |
//! | Schedule | Event draw |

mod court;
mod player;
mod schedule;

pub use court::{Court, Team};
pub(crate) use court::pair_key;
pub use player::{
    PlayerId, Roster, RosterSizeError, COURTS_PER_ROUND, PLAYERS_PER_COURT, ROSTER_SIZE,
};
pub use schedule::{Round, Schedule};
