//! Input and output validation.
//!
//! Roster checks run before generation:
//! - Exactly twelve names
//! - No blank names
//! - No duplicate names
//!
//! Schedule checks run on generated or reloaded schedules:
//! - Expected number of rounds, three courts per round
//! - Teams of two different players
//! - Every round seats the same twelve players exactly once
//! - No repeated partnership, and no repeated match-up in refined mode
//!
//! Schedule checks compare players by name, so they assume a roster that
//! passed [`validate_roster`].

use std::collections::{HashMap, HashSet};

use crate::models::{pair_key, Roster, Schedule, COURTS_PER_ROUND, ROSTER_SIZE};
use crate::scheduler::GeneratorConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Roster does not hold twelve names.
    WrongPlayerCount,
    /// A name is empty or whitespace.
    BlankName,
    /// Two roster entries share a name.
    DuplicateName,
    /// Schedule has the wrong number of rounds.
    WrongRoundCount,
    /// A round has the wrong number of courts.
    WrongCourtCount,
    /// A team pairs a player with themself.
    InvalidTeam,
    /// A round seats a player twice or leaves one out.
    BrokenPartition,
    /// Two players partner more than once.
    RepeatedPartnership,
    /// Two players face each other more than once.
    RepeatedOpposition,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates entered names and builds a roster from them.
///
/// Names are trimmed. All problems are reported, not just the first.
pub fn validate_roster<S: AsRef<str>>(names: &[S]) -> Result<Roster, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if names.len() != ROSTER_SIZE {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongPlayerCount,
            format!("Expected {ROSTER_SIZE} players, got {}", names.len()),
        ));
    }

    let trimmed: Vec<&str> = names.iter().map(|n| n.as_ref().trim()).collect();
    let mut seen = HashSet::new();
    for (idx, name) in trimmed.iter().enumerate() {
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Player {} has no name", idx + 1),
            ));
        } else if !seen.insert(*name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate player name: {name}"),
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Roster::new(trimmed).map_err(|e| {
        vec![ValidationError::new(
            ValidationErrorKind::WrongPlayerCount,
            e.to_string(),
        )]
    })
}

/// Validates a schedule against generator settings.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &Schedule, config: &GeneratorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if schedule.round_count() != config.rounds {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongRoundCount,
            format!(
                "Expected {} rounds, got {}",
                config.rounds,
                schedule.round_count()
            ),
        ));
    }

    let reference: Option<HashSet<&str>> = schedule
        .rounds()
        .first()
        .map(|round| round.players().into_iter().collect());

    for (r, round) in schedule.rounds().iter().enumerate() {
        if round.court_count() != COURTS_PER_ROUND {
            errors.push(ValidationError::new(
                ValidationErrorKind::WrongCourtCount,
                format!(
                    "Round {} has {} courts, expected {COURTS_PER_ROUND}",
                    r + 1,
                    round.court_count()
                ),
            ));
        }

        for (c, court) in round.courts().iter().enumerate() {
            for team in [&court.team_a, &court.team_b] {
                if team.first() == team.second() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTeam,
                        format!(
                            "Round {} court {}: '{}' partners themself",
                            r + 1,
                            c + 1,
                            team.first()
                        ),
                    ));
                }
            }
        }

        let players = round.players();
        let distinct: HashSet<&str> = players.iter().copied().collect();
        if !round.is_disjoint() || distinct.len() != ROSTER_SIZE {
            errors.push(ValidationError::new(
                ValidationErrorKind::BrokenPartition,
                format!(
                    "Round {} seats {} distinct players in {} seats, expected {ROSTER_SIZE}",
                    r + 1,
                    distinct.len(),
                    players.len()
                ),
            ));
        } else if reference.as_ref().is_some_and(|set| *set != distinct) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BrokenPartition,
                format!("Round {} seats different players than round 1", r + 1),
            ));
        }
    }

    let mut partners: HashMap<(&str, &str), usize> = HashMap::new();
    let mut opponents: HashMap<(&str, &str), usize> = HashMap::new();
    for (_, _, court) in schedule.courts() {
        *partners.entry(court.team_a.pair_key()).or_insert(0) += 1;
        *partners.entry(court.team_b.pair_key()).or_insert(0) += 1;
        for a in court.team_a.players() {
            for b in court.team_b.players() {
                *opponents.entry(pair_key(a, b)).or_insert(0) += 1;
            }
        }
    }

    let mut repeated: Vec<_> = partners.into_iter().filter(|&(_, n)| n > 1).collect();
    repeated.sort_unstable();
    for ((a, b), n) in repeated {
        errors.push(ValidationError::new(
            ValidationErrorKind::RepeatedPartnership,
            format!("{a} and {b} partner {n} times"),
        ));
    }

    if config.mode.checks_opponents() {
        let mut repeated: Vec<_> = opponents.into_iter().filter(|&(_, n)| n > 1).collect();
        repeated.sort_unstable();
        for ((a, b), n) in repeated {
            errors.push(ValidationError::new(
                ValidationErrorKind::RepeatedOpposition,
                format!("{a} and {b} face each other {n} times"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Court, Round, Team};
    use crate::scheduler::ConstraintMode;

    fn names() -> Vec<String> {
        ('A'..='L').map(|c| c.to_string()).collect()
    }

    fn court(a: &str, b: &str, c: &str, d: &str) -> Court {
        Court::new(Team::new(a, b), Team::new(c, d))
    }

    fn valid_schedule() -> Schedule {
        Schedule::new(vec![
            Round::new(vec![
                court("C", "I", "E", "J"),
                court("K", "G", "B", "F"),
                court("A", "D", "L", "H"),
            ]),
            Round::new(vec![
                court("L", "I", "H", "K"),
                court("E", "A", "D", "B"),
                court("C", "J", "F", "G"),
            ]),
            Round::new(vec![
                court("A", "G", "K", "E"),
                court("C", "B", "I", "H"),
                court("J", "F", "L", "D"),
            ]),
        ])
    }

    #[test]
    fn test_valid_roster() {
        let roster = validate_roster(&names()).unwrap();
        assert_eq!(roster.len(), 12);
    }

    #[test]
    fn test_roster_names_are_trimmed() {
        let mut raw = names();
        raw[0] = "  Anna ".into();
        let roster = validate_roster(&raw).unwrap();
        assert_eq!(roster.names()[0], "Anna");
    }

    #[test]
    fn test_short_roster() {
        let errors = validate_roster(&["A", "B", "C"]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WrongPlayerCount));
    }

    #[test]
    fn test_blank_names() {
        let mut raw = names();
        raw[3] = "   ".into();
        raw[7] = String::new();
        let errors = validate_roster(&raw).unwrap_err();
        let blanks: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::BlankName)
            .collect();
        assert_eq!(blanks.len(), 2);
        assert_eq!(blanks[0].message, "Player 4 has no name");
    }

    #[test]
    fn test_duplicate_names() {
        let mut raw = names();
        raw[5] = "a".into();
        assert!(validate_roster(&raw).is_ok());

        raw[5] = " A".into();
        let errors = validate_roster(&raw).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName));
    }

    #[test]
    fn test_valid_schedule() {
        assert!(validate_schedule(&valid_schedule(), &GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_wrong_round_count() {
        let schedule = Schedule::new(valid_schedule().rounds()[..2].to_vec());
        let errors = validate_schedule(&schedule, &GeneratorConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WrongRoundCount));
        assert!(validate_schedule(&schedule, &GeneratorConfig::default().with_rounds(2)).is_ok());
    }

    #[test]
    fn test_broken_partition() {
        let mut rounds = valid_schedule().rounds().to_vec();
        rounds[1] = Round::new(vec![
            court("L", "I", "H", "K"),
            court("E", "A", "D", "B"),
            court("C", "J", "F", "L"),
        ]);
        let errors =
            validate_schedule(&Schedule::new(rounds), &GeneratorConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::BrokenPartition));
    }

    #[test]
    fn test_foreign_player_in_later_round() {
        let mut rounds = valid_schedule().rounds().to_vec();
        rounds[2] = Round::new(vec![
            court("A", "G", "K", "E"),
            court("C", "B", "I", "H"),
            court("J", "F", "Z", "D"),
        ]);
        let errors =
            validate_schedule(&Schedule::new(rounds), &GeneratorConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.message.contains("different players")));
    }

    #[test]
    fn test_invalid_team() {
        let schedule = Schedule::new(vec![Round::new(vec![
            court("A", "A", "C", "D"),
            court("E", "F", "G", "H"),
            court("I", "J", "K", "L"),
        ])]);
        let errors =
            validate_schedule(&schedule, &GeneratorConfig::default().with_rounds(1)).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidTeam));
    }

    #[test]
    fn test_repeated_partnership_and_opposition() {
        let round = Round::new(vec![
            court("A", "B", "C", "D"),
            court("E", "F", "G", "H"),
            court("I", "J", "K", "L"),
        ]);
        let schedule = Schedule::new(vec![round.clone(), round]);
        let config = GeneratorConfig::default().with_rounds(2);

        let errors = validate_schedule(&schedule, &config).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::RepeatedPartnership)
                .count(),
            6
        );
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::RepeatedOpposition)
                .count(),
            12
        );
        assert!(errors.iter().any(|e| e.message == "A and B partner 2 times"));

        let basic = config.with_mode(ConstraintMode::Partners);
        let errors = validate_schedule(&schedule, &basic).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::RepeatedPartnership));
    }
}
