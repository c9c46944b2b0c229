//! Session: the shell around the generator.
//!
//! Mirrors the lifecycle of the sign-up screen: on open, the last schedule
//! is reloaded from the store; generating validates the entered names,
//! runs the generator and persists the result; reset clears both the
//! in-memory schedule and the snapshot.

use rand::Rng;
use tracing::{info, warn};

use crate::config::MatcherConfig;
use crate::error::{MatcherError, Result};
use crate::models::Schedule;
use crate::scheduler::ScheduleGenerator;
use crate::store::ScheduleStore;
use crate::validation::{validate_roster, validate_schedule};

/// A generate/show/reset session backed by a [`ScheduleStore`].
#[derive(Debug)]
pub struct Session<S: ScheduleStore> {
    store: S,
    key: String,
    generator: ScheduleGenerator,
    current: Option<Schedule>,
}

impl<S: ScheduleStore> Session<S> {
    /// Opens a session, loading the last stored schedule if it is usable.
    ///
    /// A snapshot that parses but does not fit the configured format (wrong
    /// round count, broken rounds, repeats) is ignored like a malformed one.
    pub fn open(store: S, config: &MatcherConfig) -> Self {
        let key = config.store.key.clone();
        let current = store.get(&key).and_then(|schedule| {
            match validate_schedule(&schedule, &config.generator) {
                Ok(()) => Some(schedule),
                Err(errors) => {
                    warn!(
                        key = %key,
                        problems = errors.len(),
                        first = %errors[0],
                        "ignoring inconsistent schedule snapshot"
                    );
                    None
                }
            }
        });
        if current.is_some() {
            info!(key = %key, "restored last schedule");
        }

        Self {
            store,
            key,
            generator: ScheduleGenerator::new(config.generator.clone()),
            current,
        }
    }

    /// The schedule on display, if any.
    pub fn current(&self) -> Option<&Schedule> {
        self.current.as_ref()
    }

    /// Validates `names`, generates a schedule and persists it.
    ///
    /// On failure the previous schedule (if any) stays in place.
    pub fn generate<N: AsRef<str>, R: Rng + ?Sized>(
        &mut self,
        names: &[N],
        rng: &mut R,
    ) -> Result<&Schedule> {
        let roster = validate_roster(names).map_err(MatcherError::InvalidRoster)?;
        let schedule = self.generator.generate(&roster, rng)?;
        self.store.set(&self.key, &schedule)?;
        info!(rounds = schedule.round_count(), "new schedule generated");
        Ok(self.current.insert(schedule))
    }

    /// Clears the schedule and its snapshot.
    pub fn reset(&mut self) -> Result<()> {
        self.store.delete(&self.key)?;
        self.current = None;
        info!(key = %self.key, "schedule cleared");
        Ok(())
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}
