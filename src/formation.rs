//! Habit-formation estimation
//!
//! Estimates the days remaining until a behavior becomes automatic, based
//! on Lally et al. (2010): mean 66 days to automaticity, observed range
//! 18-254 days. The estimate adjusts the base timeline by how densely the
//! active date span was actually completed.

use crate::history::CompletionLog;

/// Mean days to automaticity (Lally et al., 2010)
pub const FORMATION_MEAN_DAYS: u32 = 66;

/// Fastest observed formation (Lally et al., 2010)
pub const FORMATION_MIN_DAYS: u32 = 18;

/// Slowest observed formation (Lally et al., 2010)
pub const FORMATION_MAX_DAYS: u32 = 254;

/// Progress is capped below 100; full formation is signaled separately by
/// the estimate reaching zero
const PROGRESS_CAP: u8 = 95;

/// Completion rate at which the fast track applies
const FAST_TRACK_RATE: f64 = 0.9;

/// Completion rate at which the standard track applies
const STANDARD_TRACK_RATE: f64 = 0.7;

/// Days remaining to formation plus progress toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationEstimate {
    /// Estimated days remaining, clamped to [0, 254]
    pub estimated_days: u32,
    /// Progress toward formation (0-95)
    pub progress_to_habit: u8,
}

/// Estimate days remaining until the habit is automatic.
///
/// `score` is the rounded composite strength score; progress is that score
/// capped at 95. The remaining-days estimate picks a track from the
/// completion rate over the active span:
/// - rate >= 0.9: each completion shaves 0.8 days off the mean, floored at
///   the observed 18-day minimum
/// - rate >= 0.7: the mean minus one day per completion
/// - otherwise: the same base, inflated by `1 + (1 - rate)` and capped at
///   the observed 254-day maximum
pub fn estimate_days_to_habit(log: &CompletionLog, score: u8) -> FormationEstimate {
    if log.is_empty() {
        return FormationEstimate {
            estimated_days: FORMATION_MEAN_DAYS,
            progress_to_habit: 0,
        };
    }

    let progress_to_habit = score.min(PROGRESS_CAP);

    let total = log.len() as f64;
    let base = FORMATION_MEAN_DAYS as f64;
    let completion_rate = log.completion_rate();

    let estimated = if completion_rate >= FAST_TRACK_RATE {
        (base - total * 0.8).round().max(FORMATION_MIN_DAYS as f64)
    } else if completion_rate >= STANDARD_TRACK_RATE {
        (base - total).max(0.0)
    } else {
        let penalty = 1.0 + (1.0 - completion_rate);
        ((base - total) * penalty).round().min(FORMATION_MAX_DAYS as f64)
    };

    FormationEstimate {
        estimated_days: estimated.max(0.0) as u32,
        progress_to_habit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn daily_log(start: &str, days: u32) -> CompletionLog {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        let map: HashMap<String, bool> = (0..days)
            .map(|i| {
                let day = start + chrono::Duration::days(i as i64);
                (day.format("%Y-%m-%d").to_string(), true)
            })
            .collect();
        CompletionLog::from_history(&map).unwrap()
    }

    fn every_nth_log(start: &str, completions: u32, step: i64) -> CompletionLog {
        let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap();
        let map: HashMap<String, bool> = (0..completions)
            .map(|i| {
                let day = start + chrono::Duration::days(i as i64 * step);
                (day.format("%Y-%m-%d").to_string(), true)
            })
            .collect();
        CompletionLog::from_history(&map).unwrap()
    }

    #[test]
    fn test_empty_log_returns_base_estimate() {
        let estimate = estimate_days_to_habit(&CompletionLog::default(), 0);
        assert_eq!(estimate.estimated_days, 66);
        assert_eq!(estimate.progress_to_habit, 0);
    }

    #[test]
    fn test_fast_track_floors_at_observed_minimum() {
        // 66 consecutive days: rate 1.0, round(66 - 52.8) = 13 -> floor 18
        let log = daily_log("2026-06-03", 66);
        let estimate = estimate_days_to_habit(&log, 96);
        assert_eq!(estimate.estimated_days, 18);
        assert_eq!(estimate.progress_to_habit, 95);
    }

    #[test]
    fn test_fast_track_partial() {
        // 10 consecutive days: round(66 - 8) = 58
        let log = daily_log("2026-07-29", 10);
        let estimate = estimate_days_to_habit(&log, 55);
        assert_eq!(estimate.estimated_days, 58);
        assert_eq!(estimate.progress_to_habit, 55);
    }

    #[test]
    fn test_standard_track() {
        // 7 completions over a 9-day span: rate 7/9 = 0.78 -> 66 - 7
        let start = NaiveDate::parse_from_str("2026-07-30", "%Y-%m-%d").unwrap();
        let map: HashMap<String, bool> = [0, 1, 2, 4, 5, 7, 8]
            .iter()
            .map(|i| {
                let day = start + chrono::Duration::days(*i);
                (day.format("%Y-%m-%d").to_string(), true)
            })
            .collect();
        let log = CompletionLog::from_history(&map).unwrap();

        let estimate = estimate_days_to_habit(&log, 50);
        assert_eq!(estimate.estimated_days, 59);
    }

    #[test]
    fn test_slow_track_inflates_estimate() {
        // 5 completions spread over 21 days: rate 5/21 = 0.238
        // penalty = 1.762, round((66 - 5) * 1.762) = round(107.5) = 107
        let log = every_nth_log("2026-07-01", 5, 5);
        let estimate = estimate_days_to_habit(&log, 20);
        assert_eq!(estimate.estimated_days, 107);
    }

    #[test]
    fn test_slow_track_caps_at_observed_maximum() {
        // 2 completions a year apart: rate ~ 2/366, penalty ~ 2
        let map: HashMap<String, bool> = [("2025-08-01", true), ("2026-08-01", true)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let log = CompletionLog::from_history(&map).unwrap();

        let estimate = estimate_days_to_habit(&log, 10);
        assert_eq!(estimate.estimated_days, 128);

        // A genuinely pathological spread still cannot exceed 254
        assert!(estimate.estimated_days <= FORMATION_MAX_DAYS);
    }

    #[test]
    fn test_estimate_never_negative() {
        // More completions than the mean: 80 consecutive days, fast track
        let log = daily_log("2026-05-20", 80);
        let estimate = estimate_days_to_habit(&log, 98);
        assert_eq!(estimate.estimated_days, 18);

        // Standard track goes negative past 66 completions and clamps to
        // zero: 90 completions at 3 days out of every 4 (rate ~0.76)
        let start = NaiveDate::parse_from_str("2026-01-01", "%Y-%m-%d").unwrap();
        let map: HashMap<String, bool> = (0..120)
            .filter(|i| i % 4 != 3)
            .map(|i| {
                let day = start + chrono::Duration::days(i);
                (day.format("%Y-%m-%d").to_string(), true)
            })
            .collect();
        let log = CompletionLog::from_history(&map).unwrap();
        let estimate = estimate_days_to_habit(&log, 60);
        assert_eq!(estimate.estimated_days, 0);
    }

    #[test]
    fn test_progress_caps_at_95() {
        let log = daily_log("2026-08-01", 3);
        assert_eq!(estimate_days_to_habit(&log, 100).progress_to_habit, 95);
        assert_eq!(estimate_days_to_habit(&log, 40).progress_to_habit, 40);
    }
}
