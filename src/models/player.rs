//! Player and roster model.
//!
//! Players are supplied by the caller as display names. The scheduling core
//! never compares names: every player is identified by its position in the
//! roster ([`PlayerId`]), so two people who happen to share a name are still
//! two distinct players to the partnership bookkeeping.

use thiserror::Error;

/// Number of players in a tournament.
pub const ROSTER_SIZE: usize = 12;

/// Players on one court (two teams of two).
pub const PLAYERS_PER_COURT: usize = 4;

/// Simultaneous courts in every round.
pub const COURTS_PER_ROUND: usize = ROSTER_SIZE / PLAYERS_PER_COURT;

/// Position of a player in the roster (`0..ROSTER_SIZE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Roster index of this player.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Returned when a roster does not hold exactly [`ROSTER_SIZE`] players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a roster needs exactly {} players, got {actual}", ROSTER_SIZE)]
pub struct RosterSizeError {
    /// Number of names that were supplied.
    pub actual: usize,
}

/// The ordered list of players for one generation call.
///
/// Construction only checks the player count. Blank or duplicate names are
/// the concern of [`crate::validation::validate_roster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Creates a roster from exactly [`ROSTER_SIZE`] names.
    pub fn new<I, S>(names: I) -> Result<Self, RosterSizeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<String> = names.into_iter().map(Into::into).collect();
        if players.len() != ROSTER_SIZE {
            return Err(RosterSizeError {
                actual: players.len(),
            });
        }
        Ok(Self { players })
    }

    /// Display name of a player.
    ///
    /// # Panics
    /// If `id` is not a position of this roster.
    pub fn name(&self, id: PlayerId) -> &str {
        &self.players[id.index()]
    }

    /// All player ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        (0..self.players.len()).map(PlayerId)
    }

    /// All names in roster order.
    pub fn names(&self) -> &[String] {
        &self.players
    }

    /// Number of players (always [`ROSTER_SIZE`]).
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
