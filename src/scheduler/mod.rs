//! Pairing generation.
//!
//! Builds rounds of 2-vs-2 courts so that no pair partners twice and, in the
//! refined mode, no pair faces each other twice.
//!
//! # Algorithm
//!
//! Randomized greedy construction with whole-attempt restarts:
//! [`ScheduleGenerator`] drives attempts, [`RoundBuilder`] shuffles and fills
//! the courts of one round, [`CourtAssembler`] scans the pool for one court,
//! and the [`Ledger`] remembers who already partnered or faced whom.
//!
//! # Statistics
//!
//! [`ScheduleStats`] reports partnership and opposition counts, repeats and
//! field coverage of a finished schedule.

mod assembler;
mod generator;
mod ledger;
mod round;
mod stats;

pub use assembler::{ConstraintMode, CourtAssembler, CourtDraw};
pub use generator::{
    generate_schedule, GenerationExhausted, GeneratorConfig, ScheduleGenerator,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_ROUNDS,
};
pub use ledger::Ledger;
pub use round::RoundBuilder;
pub use stats::ScheduleStats;
