//! Court assembler.
//!
//! # Algorithm
//!
//! Single forward scan over the shuffled pool:
//! 1. Skip players already claimed this round.
//! 2. The first eligible player opens Team A; the next player who has not
//!    partnered them before completes it.
//! 3. Team B is filled the same way. In the refined mode a Team B candidate
//!    must also never have faced anyone on Team A.
//! 4. A candidate that fails a check is passed over and stays in the pool.
//!
//! The scan is not an exhaustive search over 4-subsets. When it runs out of
//! candidates the court fails and the generator recovers by reshuffling.
//!
//! # Complexity
//! O(n) ledger lookups for a pool of n players.

use serde::{Deserialize, Serialize};

use super::Ledger;
use crate::models::{PlayerId, ROSTER_SIZE};

/// Which no-repeat constraints the generator enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ConstraintMode {
    /// No pair partners twice.
    Partners,
    /// No pair partners twice and no pair faces each other twice.
    #[default]
    PartnersAndOpponents,
}

impl ConstraintMode {
    /// Whether opponent history is enforced.
    #[inline]
    pub fn checks_opponents(self) -> bool {
        matches!(self, ConstraintMode::PartnersAndOpponents)
    }

    /// Most rounds a roster can play under these constraints.
    ///
    /// Every round gives each player one new partner and, when opponents are
    /// checked, two new opponents, all drawn from the other eleven players.
    pub fn max_rounds(self) -> usize {
        let others = ROSTER_SIZE - 1;
        match self {
            ConstraintMode::Partners => others,
            ConstraintMode::PartnersAndOpponents => others / 2,
        }
    }
}

/// One court expressed in roster positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtDraw {
    /// First team.
    pub team_a: [PlayerId; 2],
    /// Second team.
    pub team_b: [PlayerId; 2],
}

impl CourtDraw {
    /// All four players: Team A first, then Team B.
    pub fn players(&self) -> [PlayerId; 4] {
        [self.team_a[0], self.team_a[1], self.team_b[0], self.team_b[1]]
    }
}

/// Builds one 2-vs-2 court from a pool of players.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourtAssembler {
    mode: ConstraintMode,
}

impl CourtAssembler {
    /// Creates an assembler enforcing the given constraints.
    pub fn new(mode: ConstraintMode) -> Self {
        Self { mode }
    }

    /// The enforced constraints.
    pub fn mode(&self) -> ConstraintMode {
        self.mode
    }

    /// Tries to assemble a court from `pool`.
    ///
    /// `claimed[i]` marks player `i` as already placed this round; such
    /// players are skipped. Returns `None` if the pool runs out before both
    /// teams have two players.
    pub fn assemble(
        &self,
        pool: &[PlayerId],
        claimed: &[bool],
        ledger: &Ledger,
    ) -> Option<CourtDraw> {
        let mut team_a: Vec<PlayerId> = Vec::with_capacity(2);
        let mut team_b: Vec<PlayerId> = Vec::with_capacity(2);

        for &candidate in pool {
            if claimed.get(candidate.index()).copied().unwrap_or(false) {
                continue;
            }

            if team_a.len() < 2 {
                if team_a
                    .first()
                    .map_or(true, |&mate| !ledger.was_partner(mate, candidate))
                {
                    team_a.push(candidate);
                }
                continue;
            }

            if self.mode.checks_opponents()
                && team_a.iter().any(|&a| ledger.was_opponent(a, candidate))
            {
                continue;
            }

            if team_b
                .first()
                .map_or(true, |&mate| !ledger.was_partner(mate, candidate))
            {
                team_b.push(candidate);
                if team_b.len() == 2 {
                    return Some(CourtDraw {
                        team_a: [team_a[0], team_a[1]],
                        team_b: [team_b[0], team_b[1]],
                    });
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<PlayerId> {
        raw.iter().map(|&i| PlayerId(i)).collect()
    }

    fn unclaimed() -> Vec<bool> {
        vec![false; 12]
    }

    #[test]
    fn test_takes_first_four_with_empty_ledger() {
        let assembler = CourtAssembler::default();
        let pool = ids(&[5, 2, 9, 0, 7]);
        let draw = assembler.assemble(&pool, &unclaimed(), &Ledger::new()).unwrap();
        assert_eq!(draw.team_a, [PlayerId(5), PlayerId(2)]);
        assert_eq!(draw.team_b, [PlayerId(9), PlayerId(0)]);
    }

    #[test]
    fn test_skips_claimed_players() {
        let assembler = CourtAssembler::default();
        let pool = ids(&[0, 1, 2, 3, 4, 5]);
        let mut claimed = unclaimed();
        claimed[1] = true;
        claimed[2] = true;
        let draw = assembler.assemble(&pool, &claimed, &Ledger::new()).unwrap();
        assert_eq!(draw.players(), [PlayerId(0), PlayerId(3), PlayerId(4), PlayerId(5)]);
    }

    #[test]
    fn test_skips_previous_partner() {
        let assembler = CourtAssembler::new(ConstraintMode::Partners);
        let mut ledger = Ledger::new();
        ledger.record_team([PlayerId(0), PlayerId(1)]);

        let pool = ids(&[0, 1, 2, 3, 4]);
        let draw = assembler.assemble(&pool, &unclaimed(), &ledger).unwrap();
        // 1 is passed over for Team A and never revisited by the scan.
        assert_eq!(draw.team_a, [PlayerId(0), PlayerId(2)]);
        assert_eq!(draw.team_b, [PlayerId(3), PlayerId(4)]);
    }

    #[test]
    fn test_refined_mode_skips_previous_opponent() {
        let mut ledger = Ledger::new();
        ledger.record_match(&CourtDraw {
            team_a: [PlayerId(0), PlayerId(9)],
            team_b: [PlayerId(2), PlayerId(10)],
        });
        let pool = ids(&[0, 1, 2, 3, 4]);

        let refined = CourtAssembler::new(ConstraintMode::PartnersAndOpponents);
        let draw = refined.assemble(&pool, &unclaimed(), &ledger).unwrap();
        assert_eq!(draw.team_b, [PlayerId(3), PlayerId(4)]);

        let basic = CourtAssembler::new(ConstraintMode::Partners);
        let draw = basic.assemble(&pool, &unclaimed(), &ledger).unwrap();
        assert_eq!(draw.team_b, [PlayerId(2), PlayerId(3)]);
    }

    #[test]
    fn test_fails_when_pool_exhausted() {
        let assembler = CourtAssembler::default();
        let pool = ids(&[0, 1, 2]);
        assert!(assembler.assemble(&pool, &unclaimed(), &Ledger::new()).is_none());
    }

    #[test]
    fn test_fails_when_last_four_cannot_pair() {
        // Every remaining pairing already happened.
        let mut ledger = Ledger::new();
        for (a, b) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
            ledger.record_team([PlayerId(a), PlayerId(b)]);
        }
        let assembler = CourtAssembler::new(ConstraintMode::Partners);
        let pool = ids(&[0, 1, 2, 3]);
        assert!(assembler.assemble(&pool, &unclaimed(), &ledger).is_none());
    }

    #[test]
    fn test_constraint_mode_serde() {
        let mode: ConstraintMode = serde_json::from_str(r#""partners-and-opponents""#).unwrap();
        assert_eq!(mode, ConstraintMode::PartnersAndOpponents);
        assert!(mode.checks_opponents());
        assert!(!ConstraintMode::Partners.checks_opponents());
        assert_eq!(ConstraintMode::default(), ConstraintMode::PartnersAndOpponents);
    }

    #[test]
    fn test_max_rounds_per_mode() {
        assert_eq!(ConstraintMode::Partners.max_rounds(), 11);
        assert_eq!(ConstraintMode::PartnersAndOpponents.max_rounds(), 5);
    }
}
