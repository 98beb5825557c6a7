//! Sub-score derivation
//!
//! Computes the four strength components from a completion log. Each
//! returns an unrounded value on the 0-100 scale; the engine combines the
//! raw values and rounds only at the output boundary.

use crate::formation::FORMATION_MEAN_DAYS;
use crate::history::CompletionLog;
use crate::types::TimeOfDay;
use chrono::Timelike;

/// Neutral consistency score when fewer than 2 completions exist
const NEUTRAL_CONSISTENCY: f64 = 50.0;

/// Neutral context score when no target window is set or data is thin
const NEUTRAL_CONTEXT: f64 = 75.0;

/// Minimum completions before the context pattern is judged
const MIN_CONTEXT_SAMPLES: usize = 3;

/// Ideal gap between completions for a daily habit (days)
const IDEAL_INTERVAL_DAYS: f64 = 1.0;

/// Average-gap drift at which the consistency penalty bottoms out (days)
const INTERVAL_PENALTY_SPAN_DAYS: f64 = 7.0;

/// Variance divisor for the consistency decay curve
const VARIANCE_DECAY: f64 = 5.0;

/// Repetition score: raw completion volume against the 66-day
/// automaticity mean, saturating at 100.
///
/// Formula: `min(100, total / 66 * 100)`
pub fn repetition_score(total_completions: usize) -> f64 {
    (total_completions as f64 / FORMATION_MEAN_DAYS as f64 * 100.0).min(100.0)
}

/// Recency score: continuous exponential decay from the most recent
/// completion.
///
/// Formula: `max(0, 100 * e^(-decay_rate * days_since_last))`
/// Completing today yields 100.
pub fn recency_score(days_since_last: i64, decay_rate: f64) -> f64 {
    (100.0 * (-decay_rate * days_since_last as f64).exp()).max(0.0)
}

/// Consistency score: variance of the gaps between adjacent completions,
/// mapped through exponential decay and penalized when the average gap
/// drifts from the daily cadence.
///
/// Formula: `100 * e^(-variance / 5) * max(0, 1 - |avg_gap - 1| / 7)`
/// Zero variance at a 1-day cadence scores 100. Fewer than 2 completions
/// is insufficient data to judge regularity and returns a neutral 50.
pub fn consistency_score(log: &CompletionLog) -> f64 {
    if log.len() < 2 {
        return NEUTRAL_CONSISTENCY;
    }

    let gaps = log.gaps();
    let n = gaps.len() as f64;
    let avg_interval: f64 = gaps.iter().sum::<i64>() as f64 / n;
    let variance: f64 = gaps
        .iter()
        .map(|gap| (*gap as f64 - avg_interval).powi(2))
        .sum::<f64>()
        / n;

    let decay = 100.0 * (-variance / VARIANCE_DECAY).exp();
    let penalty =
        (1.0 - (avg_interval - IDEAL_INTERVAL_DAYS).abs() / INTERVAL_PENALTY_SPAN_DAYS).max(0.0);

    decay * penalty
}

/// Context score: share of completions landing in the target time-of-day
/// window, a cue-consistency proxy.
///
/// Without a target window, or with fewer than 3 completions, returns a
/// neutral 75. Completions are bucketed by their timestamp's local hour;
/// plain date keys carry hour 0 and bucket as night.
pub fn context_score(log: &CompletionLog, target: Option<TimeOfDay>) -> f64 {
    let target = match target {
        Some(target) if log.len() >= MIN_CONTEXT_SAMPLES => target,
        _ => return NEUTRAL_CONTEXT,
    };

    let in_target = log
        .completions()
        .iter()
        .filter(|dt| TimeOfDay::from_hour(dt.hour()) == target)
        .count();

    in_target as f64 / log.len() as f64 * 100.0
}
