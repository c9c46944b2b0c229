//! Partnership/opponent ledger.
//!
//! Per-attempt memory of which players have already partnered and which
//! have already faced each other. Pairs are unordered and keyed by roster
//! position, so the ledger never confuses two players sharing a name.

use std::collections::HashSet;

use super::CourtDraw;
use crate::models::PlayerId;

type Pair = (PlayerId, PlayerId);

#[inline]
fn pair(a: PlayerId, b: PlayerId) -> Pair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Partnerships and oppositions recorded during one attempt.
///
/// A fresh ledger is created at the start of every attempt and dropped with
/// it; nothing leaks between attempts.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    partnered_with: HashSet<Pair>,
    opposed_to: HashSet<Pair>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a partnership. Recording the same pair again has no effect.
    pub fn record_team(&mut self, team: [PlayerId; 2]) {
        self.partnered_with.insert(pair(team[0], team[1]));
    }

    /// Records every Team A × Team B pair of a court as opponents.
    pub fn record_match(&mut self, draw: &CourtDraw) {
        for &a in &draw.team_a {
            for &b in &draw.team_b {
                self.opposed_to.insert(pair(a, b));
            }
        }
    }

    /// Whether the two players have partnered before (order-independent).
    pub fn was_partner(&self, a: PlayerId, b: PlayerId) -> bool {
        self.partnered_with.contains(&pair(a, b))
    }

    /// Whether the two players have faced each other before (order-independent).
    pub fn was_opponent(&self, a: PlayerId, b: PlayerId) -> bool {
        self.opposed_to.contains(&pair(a, b))
    }

    /// Number of distinct partnerships recorded.
    pub fn partnership_count(&self) -> usize {
        self.partnered_with.len()
    }

    /// Number of distinct opponent pairs recorded.
    pub fn opposition_count(&self) -> usize {
        self.opposed_to.len()
    }
}
