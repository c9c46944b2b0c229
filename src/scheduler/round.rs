//! Round builder.
//!
//! # Algorithm
//!
//! 1. Shuffle the roster uniformly at random.
//! 2. For each court, run the [`CourtAssembler`] over the players not yet
//!    claimed this round.
//! 3. Claim the four players of each finished court and fold its teams (and,
//!    in refined mode, its opponent pairs) into the ledger immediately, so
//!    later courts of the same round see them.
//! 4. If any court cannot be completed the round fails as a whole. There is
//!    no retry here; the generator restarts the attempt.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{CourtAssembler, CourtDraw, Ledger};
use crate::models::{PlayerId, Roster, COURTS_PER_ROUND, PLAYERS_PER_COURT};

/// Builds one round: a partition of the roster into courts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundBuilder {
    assembler: CourtAssembler,
}

impl RoundBuilder {
    /// Creates a round builder around a court assembler.
    pub fn new(assembler: CourtAssembler) -> Self {
        Self { assembler }
    }

    /// Builds a round, recording it into `ledger` as courts are completed.
    ///
    /// Returns `None` if a court could not be assembled. The ledger may then
    /// hold entries from the courts that did succeed; callers discard it
    /// together with the failed attempt.
    pub fn build<R: Rng + ?Sized>(
        &self,
        roster: &Roster,
        ledger: &mut Ledger,
        rng: &mut R,
    ) -> Option<Vec<CourtDraw>> {
        let mut pool: Vec<PlayerId> = roster.ids().collect();
        pool.shuffle(rng);

        let mut claimed = vec![false; roster.len()];
        let mut courts = Vec::with_capacity(COURTS_PER_ROUND);

        for _ in 0..COURTS_PER_ROUND {
            let draw = self.assembler.assemble(&pool, &claimed, ledger)?;

            for player in draw.players() {
                claimed[player.index()] = true;
            }
            ledger.record_team(draw.team_a);
            ledger.record_team(draw.team_b);
            if self.assembler.mode().checks_opponents() {
                ledger.record_match(&draw);
            }
            courts.push(draw);
        }

        debug_assert_eq!(
            claimed.iter().filter(|&&c| c).count(),
            COURTS_PER_ROUND * PLAYERS_PER_COURT,
            "a round must seat every player exactly once"
        );
        Some(courts)
    }
}
