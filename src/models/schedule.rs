//! Round and schedule (solution) model.
//!
//! A schedule is the ordered list of rounds produced by one successful
//! generation. It serializes as nested arrays (rounds of courts), which is
//! also the snapshot format, so a reload reproduces the same display.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::Court;

/// One round: the courts played simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round {
    courts: Vec<Court>,
}

impl Round {
    /// Creates a round from its courts.
    pub fn new(courts: Vec<Court>) -> Self {
        Self { courts }
    }

    /// Courts in play order.
    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    /// Number of courts.
    pub fn court_count(&self) -> usize {
        self.courts.len()
    }

    /// Every player name appearing in this round, in court order.
    pub fn players(&self) -> Vec<&str> {
        self.courts.iter().flat_map(|c| c.players()).collect()
    }

    /// Whether each player appears at most once in this round.
    pub fn is_disjoint(&self) -> bool {
        let mut seen = HashSet::new();
        self.courts
            .iter()
            .flat_map(|c| c.players())
            .all(|p| seen.insert(p))
    }
}

/// A complete tournament: the ordered rounds of one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    /// Creates a schedule from its rounds.
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// Rounds in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Whether the schedule holds no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Iterates `(round_index, court_index, court)` over the whole schedule.
    pub fn courts(&self) -> impl Iterator<Item = (usize, usize, &Court)> {
        self.rounds.iter().enumerate().flat_map(|(r, round)| {
            round
                .courts()
                .iter()
                .enumerate()
                .map(move |(c, court)| (r, c, court))
        })
    }

}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, round) in self.rounds.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Round {}", r + 1)?;
            for (c, court) in round.courts().iter().enumerate() {
                writeln!(
                    f,
                    "  Court {}: {} & {}  vs  {} & {}",
                    c + 1,
                    court.team_a.first(),
                    court.team_a.second(),
                    court.team_b.first(),
                    court.team_b.second(),
                )?;
            }
        }
        Ok(())
    }
}
