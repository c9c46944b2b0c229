//! Team and court (match) model.
//!
//! These are the name-based values handed to the caller and persisted in
//! snapshots. The wire shape is fixed: a court is
//! `{"teamA": [p1, p2], "teamB": [p3, p4]}`.

use serde::{Deserialize, Serialize};

/// Two partnered players.
///
/// Serialized as an array of exactly two names. Player order is kept as
/// generated so that a reloaded schedule displays identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team([String; 2]);

impl Team {
    /// Creates a team from two player names.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self([first.into(), second.into()])
    }

    /// Both players, in stored order.
    pub fn players(&self) -> &[String; 2] {
        &self.0
    }

    /// First player.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Second player.
    pub fn second(&self) -> &str {
        &self.0[1]
    }

    /// The partnership as an order-independent key.
    pub fn pair_key(&self) -> (&str, &str) {
        pair_key(&self.0[0], &self.0[1])
    }
}

/// One 2-vs-2 match on a court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    /// First team.
    pub team_a: Team,
    /// Second team.
    pub team_b: Team,
}

impl Court {
    /// Creates a court from its two teams.
    pub fn new(team_a: Team, team_b: Team) -> Self {
        Self { team_a, team_b }
    }

    /// All four players: Team A first, then Team B.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.team_a
            .players()
            .iter()
            .chain(self.team_b.players().iter())
            .map(String::as_str)
    }

    /// Every cross-team pair (4 pairs), as order-independent keys.
    pub fn opponent_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(4);
        for a in self.team_a.players() {
            for b in self.team_b.players() {
                pairs.push(pair_key(a, b));
            }
        }
        pairs
    }
}

/// Orders two names so that `(a, b)` and `(b, a)` produce the same key.
pub(crate) fn pair_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
