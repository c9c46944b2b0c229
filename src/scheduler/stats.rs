//! Schedule statistics.
//!
//! Summarises how a schedule mixes the roster: how many distinct
//! partnerships and match-ups it produced, how many repeated, and how much
//! of the field each player met.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Distinct partnerships | Unordered pairs that played on the same team |
//! | Repeated partnerships | Team appearances beyond the first per pair |
//! | Distinct oppositions | Unordered pairs that played on opposite teams |
//! | Repeated oppositions | Cross-team appearances beyond the first per pair |
//! | Avg coverage | Mean fraction of the other players met (partner or opponent) |

use std::collections::{HashMap, HashSet};

use super::ConstraintMode;
use crate::models::{pair_key, Schedule};

/// Mixing statistics of a schedule.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Number of rounds.
    pub rounds: usize,
    /// Number of courts across all rounds.
    pub courts: usize,
    /// Distinct partnerships.
    pub distinct_partnerships: usize,
    /// Partnerships that occurred more than once, counted per extra occurrence.
    pub repeated_partnerships: usize,
    /// Distinct opponent pairs.
    pub distinct_oppositions: usize,
    /// Opponent pairs that occurred more than once, counted per extra occurrence.
    pub repeated_oppositions: usize,
    /// Partners of each player, in round order.
    pub partners_by_player: HashMap<String, Vec<String>>,
    /// Mean fraction of the field each player met (0.0..1.0).
    pub avg_coverage: f64,
}

impl ScheduleStats {
    /// Computes statistics for a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let mut partner_counts: HashMap<(&str, &str), usize> = HashMap::new();
        let mut opponent_counts: HashMap<(&str, &str), usize> = HashMap::new();
        let mut partners_by_player: HashMap<String, Vec<String>> = HashMap::new();
        let mut met: HashMap<&str, HashSet<&str>> = HashMap::new();
        let mut courts = 0;

        for (_, _, court) in schedule.courts() {
            courts += 1;
            for team in [&court.team_a, &court.team_b] {
                *partner_counts.entry(team.pair_key()).or_insert(0) += 1;
                let (a, b) = (team.first(), team.second());
                partners_by_player
                    .entry(a.to_string())
                    .or_default()
                    .push(b.to_string());
                partners_by_player
                    .entry(b.to_string())
                    .or_default()
                    .push(a.to_string());
                met.entry(a).or_default().insert(b);
                met.entry(b).or_default().insert(a);
            }
            for a in court.team_a.players().iter().map(String::as_str) {
                for b in court.team_b.players().iter().map(String::as_str) {
                    *opponent_counts.entry(pair_key(a, b)).or_insert(0) += 1;
                    met.entry(a).or_default().insert(b);
                    met.entry(b).or_default().insert(a);
                }
            }
        }

        let repeats = |counts: &HashMap<(&str, &str), usize>| -> usize {
            counts.values().map(|&n| n.saturating_sub(1)).sum()
        };

        let field = met.len().saturating_sub(1);
        let avg_coverage = if field == 0 {
            0.0
        } else {
            let sum: f64 = met.values().map(|m| m.len() as f64 / field as f64).sum();
            sum / met.len() as f64
        };

        Self {
            rounds: schedule.round_count(),
            courts,
            distinct_partnerships: partner_counts.len(),
            repeated_partnerships: repeats(&partner_counts),
            distinct_oppositions: opponent_counts.len(),
            repeated_oppositions: repeats(&opponent_counts),
            partners_by_player,
            avg_coverage,
        }
    }

    /// Whether the schedule has no repeats of the kinds `mode` forbids.
    pub fn satisfies(&self, mode: ConstraintMode) -> bool {
        self.repeated_partnerships == 0
            && (!mode.checks_opponents() || self.repeated_oppositions == 0)
    }
}
