//! Padel tournament pairing.
//!
//! Splits twelve players into three rounds of three 2-vs-2 courts so that no
//! two players partner twice and, by default, no two players face each other
//! twice.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Roster`, `Team`, `Court`, `Round`, `Schedule`)
//! - **`scheduler`**: The generator: ledger, court assembler, round builder,
//!   retry loop and schedule statistics
//! - **`validation`**: Roster checks before generation, schedule checks after
//! - **`store`** / **`session`**: Snapshot persistence and the
//!   generate/show/reset lifecycle around the generator
//! - **`config`**, **`error`**, **`logging`**: Application plumbing
//!
//! # Example
//!
//! ```
//! use padel_matcher::validation::validate_roster;
//! use padel_matcher::scheduler::generate_schedule;
//!
//! let names = ["Anna", "Bram", "Cas", "Daan", "Eva", "Fleur",
//!              "Gijs", "Hugo", "Iris", "Joost", "Kim", "Lotte"];
//! let roster = validate_roster(&names).unwrap();
//! let schedule = generate_schedule(&roster, &mut rand::rng()).unwrap();
//! assert_eq!(schedule.rounds().len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod validation;

pub use config::MatcherConfig;
pub use error::{MatcherError, Result};
pub use models::{Court, Roster, Round, Schedule, Team};
pub use scheduler::{generate_schedule, ConstraintMode, GenerationExhausted, ScheduleGenerator};
pub use session::Session;
pub use store::{FileStore, MemoryStore, ScheduleStore};
