//! Schedule generator (bounded Las Vegas retry).
//!
//! # Algorithm
//!
//! ```text
//! for k in 0..max_attempts:             Attempting(k)
//!     ledger = empty
//!     for each round:
//!         round = RoundBuilder::build(roster, &mut ledger)
//!         if round failed: next k       (attempt discarded)
//!     return Ok(schedule)               Succeeded
//! return Err(GenerationExhausted)       Exhausted
//! ```
//!
//! The greedy court scan can corner itself, typically on the last court of
//! a round. Instead of backtracking, the whole attempt restarts from a fresh
//! shuffle and an empty ledger. With twelve players a refined-mode attempt
//! succeeds a few percent of the time, so the default bound is ample.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::{ConstraintMode, CourtAssembler, CourtDraw, Ledger, RoundBuilder};
use crate::models::{Court, PlayerId, Roster, Round, Schedule, Team};

/// Default bound on full-schedule attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Rounds in a standard event.
pub const DEFAULT_ROUNDS: usize = 3;

/// Returned when every attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no valid schedule found after {attempts} attempts")]
pub struct GenerationExhausted {
    /// Attempts made before giving up.
    pub attempts: usize,
}

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Upper bound on full-schedule attempts.
    pub max_attempts: usize,
    /// Constraints to enforce.
    pub mode: ConstraintMode,
    /// Rounds per schedule, at most [`ConstraintMode::max_rounds`].
    pub rounds: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            mode: ConstraintMode::default(),
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl GeneratorConfig {
    /// Sets the attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the constraint mode.
    pub fn with_mode(mut self, mode: ConstraintMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
}

/// Generates complete schedules for a twelve-player roster.
///
/// # Example
///
/// ```
/// use padel_matcher::models::Roster;
/// use padel_matcher::scheduler::ScheduleGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let roster = Roster::new(["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"]).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let schedule = ScheduleGenerator::default().generate(&roster, &mut rng).unwrap();
/// assert_eq!(schedule.round_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with the given settings.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a schedule, retrying up to `max_attempts` times.
    ///
    /// The result depends only on the roster, the settings and the random
    /// stream, so a seeded `rng` reproduces the same schedule.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        roster: &Roster,
        rng: &mut R,
    ) -> Result<Schedule, GenerationExhausted> {
        let builder = RoundBuilder::new(CourtAssembler::new(self.config.mode));

        for attempt in 1..=self.config.max_attempts {
            match self.attempt(&builder, roster, rng) {
                Some(rounds) => {
                    debug!(attempt, mode = ?self.config.mode, "schedule generated");
                    return Ok(materialize(roster, &rounds));
                }
                None => trace!(attempt, "attempt failed, reshuffling"),
            }
        }

        warn!(
            attempts = self.config.max_attempts,
            rounds = self.config.rounds,
            "no valid schedule found"
        );
        Err(GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// One attempt from an empty ledger. `None` if any round fails.
    fn attempt<R: Rng + ?Sized>(
        &self,
        builder: &RoundBuilder,
        roster: &Roster,
        rng: &mut R,
    ) -> Option<Vec<Vec<CourtDraw>>> {
        let mut ledger = Ledger::new();
        let mut rounds = Vec::with_capacity(self.config.rounds);
        for _ in 0..self.config.rounds {
            rounds.push(builder.build(roster, &mut ledger, rng)?);
        }
        Some(rounds)
    }
}

/// Generates a schedule with default settings.
pub fn generate_schedule<R: Rng + ?Sized>(
    roster: &Roster,
    rng: &mut R,
) -> Result<Schedule, GenerationExhausted> {
    ScheduleGenerator::default().generate(roster, rng)
}

fn materialize(roster: &Roster, rounds: &[Vec<CourtDraw>]) -> Schedule {
    let team = |ids: [PlayerId; 2]| Team::new(roster.name(ids[0]), roster.name(ids[1]));
    Schedule::new(
        rounds
            .iter()
            .map(|courts| {
                Round::new(
                    courts
                        .iter()
                        .map(|draw| Court::new(team(draw.team_a), team(draw.team_b)))
                        .collect(),
                )
            })
            .collect(),
    )
}
